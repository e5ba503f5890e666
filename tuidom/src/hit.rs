use crate::layout::Rect;

/// Clickable regions recorded while painting a frame.
///
/// Later registrations sit on top of earlier ones, so a hit test walks the
/// regions back to front.
#[derive(Debug, Clone)]
pub struct HitMap<T> {
    regions: Vec<(Rect, T)>,
}

impl<T> Default for HitMap<T> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
        }
    }
}

impl<T> HitMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, target: T) {
        if !rect.is_empty() {
            self.regions.push((rect, target));
        }
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Topmost target containing `(x, y)`.
    pub fn hit(&self, x: u16, y: u16) -> Option<&T> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Rect, T)> {
        self.regions.iter()
    }
}
