use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use tuidom::{Event, HitMap, Key, MouseButton, Rect};

fn key_event(code: KeyCode, kind: KeyEventKind) -> CtEvent {
    CtEvent::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::CONTROL,
        kind,
        state: KeyEventState::NONE,
    })
}

fn mouse_event(kind: MouseEventKind) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column: 7,
        row: 3,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_key_press_converts() {
    let event = Event::from_crossterm(key_event(KeyCode::Char('c'), KeyEventKind::Press));
    match event {
        Some(Event::Key { key, modifiers }) => {
            assert_eq!(key, Key::Char('c'));
            assert!(modifiers.ctrl);
            assert!(!modifiers.none());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_key_release_is_dropped() {
    assert_eq!(
        Event::from_crossterm(key_event(KeyCode::Enter, KeyEventKind::Release)),
        None
    );
}

#[test]
fn test_mouse_conversion() {
    assert_eq!(
        Event::from_crossterm(mouse_event(MouseEventKind::Down(
            crossterm::event::MouseButton::Left
        ))),
        Some(Event::Click {
            x: 7,
            y: 3,
            button: MouseButton::Left
        })
    );
    assert_eq!(
        Event::from_crossterm(mouse_event(MouseEventKind::ScrollDown)),
        Some(Event::Scroll { x: 7, y: 3, delta: 1 })
    );
    assert_eq!(
        Event::from_crossterm(mouse_event(MouseEventKind::ScrollUp)),
        Some(Event::Scroll { x: 7, y: 3, delta: -1 })
    );
    assert_eq!(Event::from_crossterm(mouse_event(MouseEventKind::Moved)), None);
}

#[test]
fn test_resize_conversion() {
    assert_eq!(
        Event::from_crossterm(CtEvent::Resize(100, 40)),
        Some(Event::Resize {
            width: 100,
            height: 40
        })
    );
}

#[test]
fn test_hit_map_topmost_wins() {
    let mut hits = HitMap::new();
    hits.push(Rect::new(0, 0, 10, 10), "card");
    hits.push(Rect::new(8, 0, 2, 1), "button");
    hits.push(Rect::new(0, 0, 0, 5), "empty");

    assert_eq!(hits.len(), 2);
    assert_eq!(hits.hit(9, 0), Some(&"button"));
    assert_eq!(hits.hit(2, 2), Some(&"card"));
    assert_eq!(hits.hit(20, 20), None);

    hits.clear();
    assert!(hits.is_empty());
}
