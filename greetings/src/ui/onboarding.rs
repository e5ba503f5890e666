use tuidom::text::display_width;
use tuidom::{Border, Event, HitMap, Key, MouseButton, Rect};

use super::{Frame, Target};
use crate::theme::TextRole;

pub const WELCOME: &str = "Welcome to the Basics Codelab!";
pub const CONTINUE: &str = "Continue";

/// Welcome text and a centered "Continue" button.
///
/// Holds no state; the shell decides what continuing means.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnboardingScreen;

impl OnboardingScreen {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn render(&self, area: Rect, frame: &mut Frame) {
        let env = frame.env;
        let theme = &env.config.theme;
        let text_width = display_width(WELCOME) as u16;
        let button_width = display_width(CONTINUE) as u16 + 4;
        // Welcome line, one blank line, three-line button
        let block = area.centered(text_width.max(button_width), 5);

        let welcome_x = block.x + (block.width.saturating_sub(text_width)) / 2;
        frame.buf.print(
            welcome_x,
            block.y,
            WELCOME,
            theme.text.to_rgb(),
            TextRole::Body.style(),
            area,
        );

        let button = Rect::new(
            block.x + (block.width.saturating_sub(button_width)) / 2,
            block.y + 2,
            button_width.min(area.width),
            3,
        )
        .intersection(area);
        frame.buf.fill(button, theme.surface.to_rgb());
        frame.buf.outline(button, Border::Rounded, theme.primary.to_rgb());
        frame.buf.print(
            button.x + 2,
            button.y + 1,
            CONTINUE,
            theme.primary.to_rgb(),
            TextRole::Headline.style(),
            button,
        );
        frame.hits.push(button, Target::Continue);
    }

    /// Call `on_continue` once if `event` activates the button.
    pub fn handle(&self, event: &Event, hits: &HitMap<Target>, on_continue: impl FnOnce()) -> bool {
        let activated = match *event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => hits.hit(x, y) == Some(&Target::Continue),
            Event::Key {
                key: Key::Enter | Key::Char(' '),
                ..
            } => true,
            _ => false,
        };
        if activated {
            on_continue();
        }
        activated
    }
}
