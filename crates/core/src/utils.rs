//! Geometry primitives shared across the reconstruction pipeline.
//!
//! Provides the `Rect`/`Point` aliases, the `HasBBox` trait implemented by
//! every layout entity, and the envelope/containment helpers the adapters
//! and clusterers are built on.

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle defined by (x0, y0, x1, y1) with (x0, y0) the top-left and
/// (x1, y1) the bottom-right corner in recognizer coordinates.
///
/// `x0 <= x1` and `y0 <= y1` are assumed, not enforced; inverted boxes from
/// upstream propagate unchanged.
pub type Rect = (f64, f64, f64, f64);

/// Trait for objects that have a bounding box.
pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }

    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }
}

/// Center point of a rectangle.
#[inline]
pub fn rect_center(rect: Rect) -> Point {
    let (x0, y0, x1, y1) = rect;
    ((x0 + x1) / 2.0, (y0 + y1) / 2.0)
}

/// Union envelope of two rectangles (per-axis min/max).
#[inline]
pub fn rect_union(a: Rect, b: Rect) -> Rect {
    (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
}

/// True if `inner` is fully contained in `outer` (boundary inclusive).
#[inline]
pub fn rect_contains(outer: Rect, inner: Rect) -> bool {
    inner.0 >= outer.0 && inner.1 >= outer.1 && inner.2 <= outer.2 && inner.3 <= outer.3
}

/// Computes the minimal rectangle covering all the given rectangles.
pub fn envelope<I: IntoIterator<Item = Rect>>(rects: I) -> Rect {
    let mut x0 = f64::INFINITY;
    let mut y0 = f64::INFINITY;
    let mut x1 = f64::NEG_INFINITY;
    let mut y1 = f64::NEG_INFINITY;

    for r in rects {
        x0 = x0.min(r.0);
        y0 = y0.min(r.1);
        x1 = x1.max(r.2);
        y1 = y1.max(r.3);
    }

    (x0, y0, x1, y1)
}

/// Formats a bounding box as a comma-separated string.
pub fn bbox2str(bbox: Rect) -> String {
    let (x0, y0, x1, y1) = bbox;
    format!("{:.3},{:.3},{:.3},{:.3}", x0, y0, x1, y1)
}
