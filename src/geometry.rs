// =============================================================================
// GEOMETRY.RS: pixel-space shapes for placeholder frames
//
// Shapes are described the way the sheet layout talks about them: inclusive
// pixel bounding boxes. A box [20,50]-[80,180] covers 61 × 131 pixels.
// =============================================================================

/// Inclusive pixel bounding box. `x1`/`y1` are part of the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width in pixels. Zero for an inverted box.
    #[inline]
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0 + 1).max(0) as u32
    }

    /// Height in pixels. Zero for an inverted box.
    #[inline]
    pub fn height(&self) -> u32 {
        (self.y1 - self.y0 + 1).max(0) as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The same box moved by `(dx, dy)`.
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Intersection with another box, or `None` when they don't overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let r = Rect::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        if r.is_empty() { None } else { Some(r) }
    }
}

// =============================================================================
// ELLIPSE
// =============================================================================

/// Whether pixel `(x, y)` lies inside the ellipse inscribed in `bbox`.
///
/// Pixel centres are tested against the ellipse equation in doubled integer
/// coordinates, so the result is exact and symmetric about both axes.
pub fn ellipse_contains(bbox: &Rect, x: i32, y: i32) -> bool {
    if !bbox.contains(x, y) {
        return false;
    }
    let w = bbox.width() as i64;
    let h = bbox.height() as i64;
    // Doubled offset of the pixel centre from the box centre.
    let dx = 2 * (x - bbox.x0) as i64 + 1 - w;
    let dy = 2 * (y - bbox.y0) as i64 + 1 - h;
    dx * dx * h * h + dy * dy * w * w <= w * w * h * h
}

/// Get all pixels of the filled ellipse inscribed in `bbox`, row by row.
pub fn points_in_ellipse(bbox: &Rect) -> Vec<(i32, i32)> {
    let mut points = Vec::new();

    for y in bbox.y0..=bbox.y1 {
        for x in bbox.x0..=bbox.x1 {
            if ellipse_contains(bbox, x, y) {
                points.push((x, y));
            }
        }
    }

    points
}
