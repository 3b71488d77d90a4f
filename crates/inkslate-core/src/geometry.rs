//! Geometry helpers over kurbo points and rectangles.
//!
//! All coordinates are canvas pixels. Rectangles may carry negative extents
//! while a shape is being dragged out; every test here normalizes first.

pub use kurbo::{Point, Rect, Vec2};

/// Return a copy of `rect` with non-negative width and height.
pub fn normalized_bounds(rect: Rect) -> Rect {
    rect.abs()
}

/// Build a normalized rectangle spanning two corner points.
pub fn rect_from_corners(a: Point, b: Point) -> Rect {
    Rect::from_points(a, b)
}

/// Perpendicular distance from `point` to the infinite line through `a` and `b`.
///
/// This is not a segment distance: points beyond either endpoint but close to
/// the extended line still report a small distance. When `a == b` the
/// distance to `a` is returned.
pub fn point_to_line_distance(point: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let len_sq = dx * dx + dy * dy;
    if len_sq < f64::EPSILON {
        return point.distance(a);
    }

    // |(y2-y1)x - (x2-x1)y + x2*y1 - y2*x1| / |b - a|
    let area2 = (dy * point.x - dx * point.y + b.x * a.y - b.y * a.x).abs();
    area2 / len_sq.sqrt()
}

/// Inclusive point-in-rectangle test (edges count as inside).
pub fn rect_contains_point_inclusive(rect: Rect, point: Point) -> bool {
    let r = rect.abs();
    point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1
}

/// Inclusive overlap test; rectangles that only touch on an edge overlap.
pub fn rects_overlap_inclusive(a: Rect, b: Rect) -> bool {
    let a = a.abs();
    let b = b.abs();
    !(a.x0 > b.x1 || a.x1 < b.x0 || a.y0 > b.y1 || a.y1 < b.y0)
}

/// Check whether `inner` lies entirely within `outer` (inclusive).
pub fn rect_contains_rect(outer: Rect, inner: Rect) -> bool {
    let o = outer.abs();
    let i = inner.abs();
    i.x0 >= o.x0 && i.x1 <= o.x1 && i.y0 >= o.y0 && i.y1 <= o.y1
}

/// Whether an eraser radius can be compared against point distances:
/// finite and non-negative.
pub fn is_usable_radius(radius: f64) -> bool {
    radius.is_finite() && radius >= 0.0
}

/// Union of a sequence of rectangles, or `None` if the sequence is empty.
pub fn union_bounds(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    rects.into_iter().fold(None, |acc, r| {
        Some(match acc {
            Some(u) => u.union(r),
            None => r,
        })
    })
}

/// Test if any segment of a polyline touches a rectangle.
///
/// True when a vertex lies inside the rectangle or when a segment crosses
/// one of its edges.
pub fn polyline_intersects_rect(points: &[Point], rect: Rect) -> bool {
    let rect = rect.abs();
    if points.iter().any(|p| rect_contains_point_inclusive(rect, *p)) {
        return true;
    }
    let corners = [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ];
    let edges = [
        (corners[0], corners[1]),
        (corners[1], corners[2]),
        (corners[2], corners[3]),
        (corners[3], corners[0]),
    ];
    points.windows(2).any(|w| {
        edges
            .iter()
            .any(|&(c, d)| segments_intersect(w[0], w[1], c, d))
    })
}

/// Test if two line segments (a-b) and (c-d) intersect.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let cross = |o: Point, p: Point, q: Point| -> f64 {
        (p.x - o.x) * (q.y - o.y) - (p.y - o.y) * (q.x - o.x)
    };
    let d1 = cross(c, d, a);
    let d2 = cross(c, d, b);
    let d3 = cross(a, b, c);
    let d4 = cross(a, b, d);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    // Collinear: an endpoint lying on the other segment
    let on_segment = |p: Point, q: Point, r: Point| -> bool {
        r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
    };
    (d1.abs() < 1e-10 && on_segment(c, d, a))
        || (d2.abs() < 1e-10 && on_segment(c, d, b))
        || (d3.abs() < 1e-10 && on_segment(a, b, c))
        || (d4.abs() < 1e-10 && on_segment(a, b, d))
}
