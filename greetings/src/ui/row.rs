use tuidom::text::{display_width, truncate_to_width, wrap_words};
use tuidom::{Border, Cell, Rect, Rgb, TextStyle};

use super::{Frame, Target};
use crate::resources::{Icon, Resources, StringKey};
use crate::state::GreetingItem;
use crate::theme::TextRole;

/// Columns between the viewport edge and the card.
const CARD_MARGIN_X: u16 = 1;
/// Columns between the card border and its content.
const CARD_PADDING_X: u16 = 2;
/// Columns between the text block and the toggle.
const TOGGLE_GAP: u16 = 1;
/// Border top + "Hello" + name + border bottom.
const BASE_HEIGHT: u16 = 4;

pub const GREETING: &str = "Hello";

/// Row geometry shared by every card for one frame width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowLayout {
    pub width: u16,
    pub text_width: u16,
    pub toggle_width: u16,
    /// Lines the description wraps to at `text_width`.
    pub desc_lines: u16,
}

impl RowLayout {
    pub fn measure(width: u16, resources: &Resources) -> Self {
        let toggle_width = [StringKey::ShowMore, StringKey::ShowLess]
            .into_iter()
            .map(|key| 2 + display_width(&resources.string_or_placeholder(key)) as u16)
            .max()
            .unwrap_or(0);
        let inner = width.saturating_sub(2 * (CARD_MARGIN_X + 1 + CARD_PADDING_X));
        let toggle_width = toggle_width.min(inner);
        let text_width = inner.saturating_sub(toggle_width + TOGGLE_GAP);
        let desc = resources.string_or_placeholder(StringKey::CardDesc);
        let desc_lines = wrap_words(&desc, text_width as usize).len() as u16;

        Self {
            width,
            text_width,
            toggle_width,
            desc_lines,
        }
    }

    /// Height of a card, including its border.
    pub fn row_height(&self, expanded: bool, extra_lines: u16) -> u16 {
        let desc = if expanded { self.desc_lines } else { 0 };
        BASE_HEIGHT + desc + extra_lines
    }

    /// Height of a collapsed, resting card.
    pub fn base_height(&self) -> u16 {
        BASE_HEIGHT
    }
}

/// One greeting card as it appears in a single frame.
#[derive(Debug, Clone, Copy)]
pub struct GreetingRow<'a> {
    pub index: usize,
    pub item: &'a GreetingItem,
    pub expanded: bool,
    /// Animated bottom padding, already converted to lines.
    pub extra_lines: u16,
    pub focused: bool,
}

impl GreetingRow<'_> {
    pub fn height(&self, layout: &RowLayout) -> u16 {
        layout.row_height(self.expanded, self.extra_lines)
    }

    /// Label and icon of the toggle for the current state.
    pub fn affordance(&self, resources: &Resources) -> String {
        let (icon, key) = if self.expanded {
            (Icon::ChevronUp, StringKey::ShowLess)
        } else {
            (Icon::ChevronDown, StringKey::ShowMore)
        };
        format!(
            "{} {}",
            resources.icon_or_placeholder(icon),
            resources.string_or_placeholder(key)
        )
    }

    /// Paint the card with its top edge at `top` (may be above the viewport).
    pub(crate) fn render(&self, top: i32, viewport: Rect, layout: &RowLayout, frame: &mut Frame) {
        let env = frame.env;
        let theme = &env.config.theme;
        let resources = &env.resources;
        let surface = theme.surface.to_rgb();
        let border_fg = if self.focused {
            theme.primary.to_rgb()
        } else {
            theme.muted.to_rgb()
        };

        let left = viewport.x + CARD_MARGIN_X;
        let card_width = viewport.width.saturating_sub(2 * CARD_MARGIN_X);
        if card_width < 2 {
            return;
        }
        let text_x = left + 1 + CARD_PADDING_X;
        let toggle_x = text_x + layout.text_width + TOGGLE_GAP;
        let height = self.height(layout);

        let mut lines: Vec<(String, Rgb, TextStyle)> = vec![
            (GREETING.to_string(), theme.text.to_rgb(), TextRole::Body.style()),
            (self.item.id().to_string(), theme.text.to_rgb(), TextRole::Headline.style()),
        ];
        if self.expanded {
            let desc = resources.string_or_placeholder(StringKey::CardDesc);
            lines.extend(
                wrap_words(&desc, layout.text_width as usize)
                    .into_iter()
                    .map(|line| (line, theme.muted.to_rgb(), TextRole::Body.style())),
            );
        }

        let mut visible = Rect::default();
        let mut toggle_hit = None;
        for line in 0..height {
            let y = top + line as i32;
            if y < viewport.y as i32 || y >= viewport.bottom() as i32 {
                continue;
            }
            let y = y as u16;
            if visible.is_empty() {
                visible = Rect::new(left, y, card_width, 0);
            }
            visible.height += 1;

            let row_rect = Rect::new(left, y, card_width, 1);
            frame.buf.fill(row_rect, surface);
            stroke_border(line, height, row_rect, border_fg, frame);

            let content = line.checked_sub(1).and_then(|i| lines.get(i as usize));
            if let Some((text, fg, style)) = content {
                let text = truncate_to_width(text, layout.text_width as usize);
                frame.buf.print(text_x, y, &text, *fg, *style, row_rect);
            }

            if line == 1 {
                let label = truncate_to_width(&self.affordance(resources), layout.toggle_width as usize);
                let end = frame.buf.print(
                    toggle_x,
                    y,
                    &label,
                    theme.primary.to_rgb(),
                    TextRole::Label.style(),
                    row_rect,
                );
                toggle_hit = Some(Rect::new(toggle_x, y, end.saturating_sub(toggle_x), 1));
            }
        }

        // Toggle goes last so it sits on top of the card body
        frame.hits.push(visible, Target::Row(self.index));
        if let Some(rect) = toggle_hit {
            frame.hits.push(rect, Target::Toggle(self.index));
        }
    }
}

/// Draw the rounded card edge for one line of a card `height` lines tall.
fn stroke_border(line: u16, height: u16, rect: Rect, fg: Rgb, frame: &mut Frame) {
    let Some([tl, tr, bl, br, h, v]) = Border::Rounded.glyphs() else {
        return;
    };
    let right = rect.right() - 1;
    let (first, fill, last) = if line == 0 {
        (tl, Some(h), tr)
    } else if line + 1 == height {
        (bl, Some(h), br)
    } else {
        (v, None, v)
    };

    let mut put = |x: u16, ch: char| {
        let bg = frame.buf.get(x, rect.y).map(|c| c.bg).unwrap_or_default();
        frame.buf.set(x, rect.y, Cell::new(ch).with_fg(fg).with_bg(bg));
    };
    put(rect.x, first);
    if let Some(fill) = fill {
        for x in rect.x + 1..right {
            put(x, fill);
        }
    }
    put(right, last);
}
