use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use tuidom::{Event, HitMap, Key, MouseButton, Rect, Spring, SpringSpec};

use super::row::{GreetingRow, RowLayout};
use super::{Frame, Target};
use crate::config::GreetingsConfig;
use crate::error::SnapshotError;
use crate::saveable::{Saveable, SavedState};
use crate::state::{GreetingItem, RowState, RowStates};

const ROWS_KEY: &str = "greeting_list.rows";
const ANCHOR_KEY: &str = "greeting_list.anchor";
const CURSOR_KEY: &str = "greeting_list.cursor";

/// Lines scrolled per mouse wheel notch.
const WHEEL_LINES: i32 = 3;

/// Scroll position: first visible item and how many of its lines are
/// scrolled off the top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollAnchor {
    pub index: usize,
    pub offset: u16,
}

#[derive(Debug, Clone, Copy)]
struct Motion {
    spec: SpringSpec,
    expanded_padding: f32,
    dp_per_line: f32,
    reduced_motion: bool,
}

impl Motion {
    fn target(&self, expanded: bool) -> f32 {
        if expanded { self.expanded_padding } else { 0.0 }
    }

    fn lines(&self, dp: f32) -> u16 {
        (dp.max(0.0) / self.dp_per_line).round() as u16
    }
}

/// Virtualized list of greeting cards.
///
/// Row state lives in [`RowStates`] keyed by item id, so it survives rows
/// scrolling out of view. Springs exist only for rows that are on screen and
/// still moving; a row materialized without one rests at its target.
#[derive(Debug)]
pub struct GreetingList {
    items: Rc<[GreetingItem]>,
    rows: RowStates,
    springs: HashMap<String, Spring>,
    anchor: ScrollAnchor,
    cursor: usize,
    viewport: Rect,
    layout: RowLayout,
    motion: Motion,
}

impl GreetingList {
    pub fn new(items: Rc<[GreetingItem]>, config: &GreetingsConfig) -> Self {
        Self {
            items,
            rows: RowStates::new(),
            springs: HashMap::new(),
            anchor: ScrollAnchor::default(),
            cursor: 0,
            viewport: Rect::default(),
            layout: RowLayout::default(),
            motion: Motion {
                spec: config.spring,
                expanded_padding: config.expanded_padding,
                dp_per_line: config.dp_per_line,
                reduced_motion: config.reduced_motion,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GreetingItem] {
        &self.items
    }

    pub fn row_state(&self, id: &str) -> RowState {
        self.rows.get(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.rows.is_expanded(id)
    }

    pub fn row_states(&self) -> &RowStates {
        &self.rows
    }

    pub fn anchor(&self) -> ScrollAnchor {
        self.anchor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_animating(&self) -> bool {
        !self.springs.is_empty()
    }

    /// Current extra bottom padding of a row in distance units, never
    /// negative.
    pub fn padding_dp(&self, id: &str) -> f32 {
        let value = match self.springs.get(id) {
            Some(spring) => spring.value(),
            None => self.motion.target(self.rows.is_expanded(id)),
        };
        value.max(0.0)
    }

    /// Flip the row with this id. Returns the new `expanded` value, or
    /// `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        self.toggle_at(index)
    }

    /// Flip the row at `index`. Returns the new `expanded` value.
    pub fn toggle_at(&mut self, index: usize) -> Option<bool> {
        let items = Rc::clone(&self.items);
        let id = items.get(index)?.id();
        let expanded = self.rows.toggle(id);
        let target = self.motion.target(expanded);

        if self.motion.reduced_motion {
            self.springs.remove(id);
        } else {
            let resting = self.motion.target(!expanded);
            let spec = self.motion.spec;
            self.springs
                .entry(id.to_string())
                .or_insert_with(|| Spring::new(spec, resting))
                .set_target(target);
        }
        Some(expanded)
    }

    /// Advance running animations. Returns true while any is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.springs.retain(|_, spring| spring.step(dt));
        !self.springs.is_empty()
    }

    fn height_at(&self, index: usize) -> u16 {
        let id = self.items[index].id();
        let extra = self.motion.lines(self.padding_dp(id));
        self.layout.row_height(self.rows.is_expanded(id), extra)
    }

    /// Rows intersecting the viewport: `(index, top, height)` with `top`
    /// relative to the viewport.
    pub fn visible_rows(&self) -> Vec<(usize, i32, u16)> {
        let mut out = Vec::new();
        let bottom = self.viewport.height as i32;
        let mut y = -(self.anchor.offset as i32);
        for index in self.anchor.index..self.items.len() {
            if y >= bottom {
                break;
            }
            let height = self.height_at(index);
            out.push((index, y, height));
            y += height as i32;
        }
        out
    }

    /// Scroll by `delta` lines, positive reveals rows further down.
    pub fn scroll_by(&mut self, delta: i32) {
        if self.items.is_empty() || delta == 0 {
            return;
        }

        let ScrollAnchor { mut index, offset } = self.anchor;
        let mut offset = offset as u32;
        if delta > 0 {
            offset += delta as u32;
            while index + 1 < self.items.len() && offset >= self.height_at(index) as u32 {
                offset -= self.height_at(index) as u32;
                index += 1;
            }
            let last_line = self.height_at(index).saturating_sub(1) as u32;
            self.anchor = ScrollAnchor {
                index,
                offset: offset.min(last_line) as u16,
            };
            self.clamp_to_end();
        } else {
            let mut up = delta.unsigned_abs();
            loop {
                if up <= offset {
                    offset -= up;
                    break;
                }
                up -= offset;
                if index == 0 {
                    offset = 0;
                    break;
                }
                index -= 1;
                offset = self.height_at(index) as u32;
            }
            self.anchor = ScrollAnchor {
                index,
                offset: offset as u16,
            };
        }
        trace!("scrolled by {} to {:?}", delta, self.anchor);
    }

    /// Don't leave blank space under the last row.
    fn clamp_to_end(&mut self) {
        let height = self.viewport.height as u32;
        let mut index = self.anchor.index;
        let mut shown = (self.height_at(index) as u32).saturating_sub(self.anchor.offset as u32);
        while shown < height && index + 1 < self.items.len() {
            index += 1;
            shown += self.height_at(index) as u32;
        }
        if shown < height {
            self.align_bottom(self.items.len() - 1);
        }
    }

    /// Scroll so row `index` ends at the bottom edge of the viewport.
    fn align_bottom(&mut self, index: usize) {
        let height = self.viewport.height as u32;
        let mut used = self.height_at(index) as u32;
        if used >= height {
            self.anchor = ScrollAnchor { index, offset: 0 };
            return;
        }
        for i in (0..index).rev() {
            let above = self.height_at(i) as u32;
            if used + above >= height {
                self.anchor = ScrollAnchor {
                    index: i,
                    offset: (used + above - height) as u16,
                };
                return;
            }
            used += above;
        }
        self.anchor = ScrollAnchor::default();
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.anchor.index || (index == self.anchor.index && self.anchor.offset > 0) {
            self.anchor = ScrollAnchor { index, offset: 0 };
            return;
        }
        let height = self.viewport.height as i64;
        let mut y = -(self.anchor.offset as i64);
        for i in self.anchor.index..index {
            y += self.height_at(i) as i64;
            if y >= height {
                break;
            }
        }
        if y + self.height_at(index) as i64 > height {
            self.align_bottom(index);
        }
    }

    pub fn set_cursor(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = index.min(self.items.len() - 1);
        self.ensure_visible(self.cursor);
    }

    pub fn move_cursor(&mut self, delta: i64) {
        let target = (self.cursor as i64 + delta).max(0) as usize;
        self.set_cursor(target);
    }

    fn page_rows(&self) -> i64 {
        let base = self.layout.base_height().max(1);
        (self.viewport.height / base).max(1) as i64
    }

    /// Keep the anchor inside the list after heights or length changed.
    fn normalize_anchor(&mut self) {
        if self.items.is_empty() {
            self.anchor = ScrollAnchor::default();
            return;
        }
        if self.anchor.index >= self.items.len() {
            self.anchor = ScrollAnchor {
                index: self.items.len() - 1,
                offset: 0,
            };
        }
        let last_line = self.height_at(self.anchor.index).saturating_sub(1);
        self.anchor.offset = self.anchor.offset.min(last_line);
        self.cursor = self.cursor.min(self.items.len() - 1);
    }

    pub(crate) fn render(&mut self, area: Rect, frame: &mut Frame) {
        if area.width != self.layout.width {
            self.layout = RowLayout::measure(area.width, &frame.env.resources);
        }
        self.viewport = area;
        self.normalize_anchor();

        let visible = self.visible_rows();

        // Rows leaving the screen drop their animation and come back at rest
        let on_screen: HashSet<&str> = visible
            .iter()
            .map(|&(index, _, _)| self.items[index].id())
            .collect();
        let before = self.springs.len();
        self.springs.retain(|id, _| on_screen.contains(id.as_str()));
        if self.springs.len() != before {
            debug!("dropped {} off-screen animations", before - self.springs.len());
        }

        for (index, top, _) in visible {
            let item = &self.items[index];
            let row = GreetingRow {
                index,
                item,
                expanded: self.rows.is_expanded(item.id()),
                extra_lines: self.motion.lines(self.padding_dp(item.id())),
                focused: index == self.cursor,
            };
            row.render(area.y as i32 + top, area, &self.layout, frame);
        }
    }

    /// Apply one input event. Returns true if anything changed.
    pub fn handle(&mut self, event: &Event, hits: &HitMap<Target>) -> bool {
        match *event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => match hits.hit(x, y) {
                Some(&Target::Toggle(index)) => {
                    self.cursor = index;
                    self.toggle_at(index).is_some()
                }
                Some(&Target::Row(index)) => {
                    self.cursor = index;
                    true
                }
                _ => false,
            },
            Event::Scroll { delta, .. } => {
                self.scroll_by(delta as i32 * WHEEL_LINES);
                true
            }
            Event::Key { key, .. } => {
                match key {
                    Key::Up | Key::Char('k') => self.move_cursor(-1),
                    Key::Down | Key::Char('j') => self.move_cursor(1),
                    Key::PageUp => self.move_cursor(-self.page_rows()),
                    Key::PageDown => self.move_cursor(self.page_rows()),
                    Key::Home | Key::Char('g') => self.set_cursor(0),
                    Key::End | Key::Char('G') => self.set_cursor(self.items.len().saturating_sub(1)),
                    Key::Enter | Key::Char(' ') => {
                        return self.toggle_at(self.cursor).is_some();
                    }
                    _ => return false,
                }
                true
            }
            _ => false,
        }
    }
}

impl Saveable for GreetingList {
    fn save(&self, saved: &mut SavedState) -> Result<(), SnapshotError> {
        saved.set(ROWS_KEY, &self.rows)?;
        saved.set(ANCHOR_KEY, &self.anchor)?;
        saved.set(CURSOR_KEY, &self.cursor)
    }

    fn restore(&mut self, saved: &SavedState) -> Result<(), SnapshotError> {
        self.rows = saved.get_or(ROWS_KEY, RowStates::new())?;
        self.anchor = saved.get_or(ANCHOR_KEY, ScrollAnchor::default())?;
        self.cursor = saved.get_or(CURSOR_KEY, 0usize)?;
        // Restored rows start at rest
        self.springs.clear();
        Ok(())
    }
}
