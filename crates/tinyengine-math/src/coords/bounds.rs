use super::Vec2;

/// Axis-aligned box in world units, stored as its min/max corners.
///
/// Returned by [`Camera2d::bounds`](crate::Camera2d::bounds). Unlike screen rects
/// this box uses world orientation (+Y up), so `min` is the bottom-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point in `points`.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        Some(rest.iter().fold(Bounds::new(first, first), |b, &p| b.include(p)))
    }

    /// Grows the box just enough to contain `p`.
    #[inline]
    pub fn include(self, p: Vec2) -> Bounds {
        Bounds::new(self.min.min(p), self.max.max(p))
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Closed containment: both edges are inside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x <= self.max.x && p.y <= self.max.y
    }

    /// True when the two boxes overlap or touch.
    #[inline]
    pub fn intersects(self, other: Bounds) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
