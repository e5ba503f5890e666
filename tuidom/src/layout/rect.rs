#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by the given amount on each side, never below zero size.
    pub fn inset(self, vertical: u16, horizontal: u16) -> Self {
        let width = self.width.saturating_sub(horizontal.saturating_mul(2));
        let height = self.height.saturating_sub(vertical.saturating_mul(2));
        Self {
            x: self.x.saturating_add(horizontal.min(self.width / 2)),
            y: self.y.saturating_add(vertical.min(self.height / 2)),
            width,
            height,
        }
    }

    /// A `width` x `height` rectangle centered inside this one.
    pub fn centered(self, width: u16, height: u16) -> Self {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Self {
            x: self.x + (self.width - width) / 2,
            y: self.y + (self.height - height) / 2,
            width,
            height,
        }
    }

    /// Split off `width` columns at the right edge: `(rest, right)`.
    pub fn split_right(self, width: u16) -> (Self, Self) {
        let width = width.min(self.width);
        let rest = Self {
            width: self.width - width,
            ..self
        };
        let right = Self {
            x: self.x + rest.width,
            width,
            ..self
        };
        (rest, right)
    }

    /// Overlap of two rectangles, empty when they do not touch.
    pub fn intersection(self, other: Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return Self::new(x, y, 0, 0);
        }
        Self::new(x, y, right - x, bottom - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let r = Rect::from_size(80, 24).centered(20, 4);
        assert_eq!(r, Rect::new(30, 10, 20, 4));
    }

    #[test]
    fn inset_never_underflows() {
        let r = Rect::new(0, 0, 3, 1).inset(2, 4);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
    }

    #[test]
    fn split_right_partitions_width() {
        let (rest, right) = Rect::new(2, 0, 30, 5).split_right(10);
        assert_eq!(rest, Rect::new(2, 0, 20, 5));
        assert_eq!(right, Rect::new(22, 0, 10, 5));
    }

    #[test]
    fn disjoint_intersection_is_empty() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 5, 5);
        assert!(a.intersection(b).is_empty());
        assert_eq!(a.intersection(Rect::new(3, 3, 5, 5)), Rect::new(3, 3, 2, 2));
    }
}
