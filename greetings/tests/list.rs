use std::rc::Rc;
use std::time::Duration;

use greetings::{AppEnv, AppShell, GreetingItem, GreetingsConfig, Resources};
use tuidom::{Buffer, Event, Key};

const FRAME: Duration = Duration::from_millis(16);

fn list_shell(config: GreetingsConfig, resources: Resources) -> AppShell {
    let items = GreetingItem::sequence(config.item_count).into();
    let mut shell = AppShell::new(Rc::new(AppEnv::with_resources(config, resources)), items);
    shell.complete_onboarding();
    shell
}

fn render(shell: &mut AppShell) -> Buffer {
    let mut buf = Buffer::new(60, 24);
    shell.render(&mut buf);
    buf
}

fn screen_text(buf: &Buffer) -> String {
    (0..buf.height()).map(|y| buf.line(y) + "\n").collect()
}

/// Tick until the list settles, calling `check` after every frame.
fn settle(shell: &mut AppShell, mut check: impl FnMut(&AppShell)) -> usize {
    let mut frames = 0;
    while shell.tick(FRAME) {
        check(shell);
        frames += 1;
        assert!(frames < 1000, "animation never settled");
    }
    frames
}

fn padding(shell: &AppShell, id: &str) -> f32 {
    shell.list().map_or(f32::NAN, |list| list.padding_dp(id))
}

#[test]
fn test_expand_animates_to_target() {
    let mut shell = list_shell(GreetingsConfig::new(), Resources::default());
    render(&mut shell);

    shell.list_mut().and_then(|list| list.toggle("0"));
    assert!(shell.is_animating());
    assert_eq!(padding(&shell, "0"), 0.0);

    let mut peak = 0.0f32;
    let frames = settle(&mut shell, |shell| peak = peak.max(padding(shell, "0")));
    assert!(frames > 5);
    // Medium bouncy overshoots before resting
    assert!(peak > 48.0);
    assert_eq!(padding(&shell, "0"), 48.0);
    assert!(!shell.is_animating());
}

#[test]
fn test_collapse_never_goes_negative() {
    let mut shell = list_shell(GreetingsConfig::new(), Resources::default());
    render(&mut shell);

    shell.list_mut().and_then(|list| list.toggle("2"));
    settle(&mut shell, |_| {});
    shell.list_mut().and_then(|list| list.toggle("2"));

    let mut lowest = f32::MAX;
    settle(&mut shell, |shell| {
        let value = padding(shell, "2");
        assert!(value >= 0.0);
        lowest = lowest.min(value);
    });
    assert_eq!(lowest, 0.0);
    assert_eq!(padding(&shell, "2"), 0.0);
}

#[test]
fn test_toggle_twice_is_identity() {
    let mut shell = list_shell(GreetingsConfig::new().item_count(3), Resources::default());
    render(&mut shell);
    let list = shell.list_mut().expect("list mounted");

    assert_eq!(list.toggle("1"), Some(true));
    assert_eq!(list.toggle("1"), Some(false));
    assert!(list.row_states().expanded_ids().next().is_none());
    assert_eq!(list.toggle("missing"), None);
    assert_eq!(list.toggle_at(3), None);
}

#[test]
fn test_reverse_mid_flight() {
    let mut shell = list_shell(GreetingsConfig::new(), Resources::default());
    render(&mut shell);

    shell.list_mut().and_then(|list| list.toggle("0"));
    for _ in 0..5 {
        shell.tick(FRAME);
    }
    let midway = padding(&shell, "0");
    assert!(midway > 0.0);

    shell.list_mut().and_then(|list| list.toggle("0"));
    // Reversal continues from where the padding was
    assert_eq!(padding(&shell, "0"), midway);
    settle(&mut shell, |shell| assert!(padding(shell, "0") >= 0.0));
    assert_eq!(padding(&shell, "0"), 0.0);
}

#[test]
fn test_reduced_motion_snaps() {
    let config = GreetingsConfig::new().reduced_motion(true);
    let mut shell = list_shell(config, Resources::default());
    render(&mut shell);

    shell.list_mut().and_then(|list| list.toggle("0"));
    assert!(!shell.is_animating());
    assert_eq!(padding(&shell, "0"), 48.0);
}

#[test]
fn test_expanded_row_grows() {
    let mut shell = list_shell(GreetingsConfig::new().item_count(3), Resources::default());
    render(&mut shell);
    let collapsed = shell.list().map(|list| list.visible_rows()).unwrap_or_default();

    shell.list_mut().and_then(|list| list.toggle("0"));
    settle(&mut shell, |_| {});
    render(&mut shell);
    let expanded = shell.list().map(|list| list.visible_rows()).unwrap_or_default();

    // Description lines plus 48 / 16 lines of padding
    assert!(expanded[0].2 > collapsed[0].2 + 3);
    assert_eq!(expanded[1].1, expanded[0].2 as i32);
    assert_eq!(collapsed[1].2, expanded[1].2);
}

#[test]
fn test_expansion_survives_scrolling() {
    let mut shell = list_shell(GreetingsConfig::new(), Resources::default());
    render(&mut shell);
    shell.list_mut().and_then(|list| list.toggle("0"));

    for _ in 0..40 {
        shell.handle(&Event::Scroll {
            x: 0,
            y: 0,
            delta: 1,
        });
        render(&mut shell);
    }
    let list = shell.list().expect("list mounted");
    assert!(list.anchor().index > 10);
    // Off-screen rows stop animating
    assert!(!shell.is_animating());

    for _ in 0..80 {
        shell.handle(&Event::Scroll {
            x: 0,
            y: 0,
            delta: -1,
        });
    }
    let text = screen_text(&render(&mut shell));
    let list = shell.list().expect("list mounted");
    assert_eq!(list.anchor().index, 0);
    assert!(list.is_expanded("0"));
    assert_eq!(list.padding_dp("0"), 48.0);
    assert!(text.contains("Show less"));
}

#[test]
fn test_scroll_stops_at_end() {
    let mut shell = list_shell(GreetingsConfig::new().item_count(10), Resources::default());
    render(&mut shell);

    shell.handle(&Event::key(Key::End));
    render(&mut shell);
    let list = shell.list().expect("list mounted");
    assert_eq!(list.cursor(), 9);

    let rows = list.visible_rows();
    let (last, top, height) = rows[rows.len() - 1];
    assert_eq!(last, 9);
    assert_eq!(top + height as i32, 24);

    let anchor = list.anchor();
    shell.handle(&Event::Scroll {
        x: 0,
        y: 0,
        delta: 5,
    });
    assert_eq!(shell.list().map(|list| list.anchor()), Some(anchor));
}

#[test]
fn test_keyboard_cursor_toggles() {
    let mut shell = list_shell(GreetingsConfig::new(), Resources::default());
    render(&mut shell);

    shell.handle(&Event::key(Key::Down));
    shell.handle(&Event::key(Key::Char('j')));
    shell.handle(&Event::key(Key::Char(' ')));
    let list = shell.list().expect("list mounted");
    assert_eq!(list.cursor(), 2);
    assert!(list.is_expanded("2"));

    shell.handle(&Event::key(Key::Home));
    assert_eq!(shell.list().map(|list| list.cursor()), Some(0));
    assert!(!shell.handle(&Event::key(Key::Char('x'))));
}

#[test]
fn test_missing_resources_show_placeholders() {
    let mut shell = list_shell(GreetingsConfig::new().item_count(2), Resources::empty("en"));
    render(&mut shell);
    shell.list_mut().and_then(|list| list.toggle("0"));

    let text = screen_text(&render(&mut shell));
    assert!(text.contains("<missing:show_less>"));
    assert!(text.contains("<missing:show_more>"));
    assert!(text.contains("<missing:card_desc>"));
    assert!(text.contains('?'));
}
