//! Shape rasterization for the sprite composer.
//!
//! Shapes are described the way a drawing call takes them: ellipses and
//! rectangle outlines by their inclusive bounding box, polygons by their
//! vertices. Each shape rasterizes to a set of integer pixel coordinates,
//! which may fall outside any canvas; clipping is the canvas' job.

use std::collections::HashSet;

/// Inclusive bounding box `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }
}

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Filled ellipse inscribed in the box
    Ellipse(BoundingBox),
    /// One-pixel rectangle outline along the box edges
    RectOutline(BoundingBox),
    /// Filled polygon (even-odd rule)
    Polygon(Vec<(i32, i32)>),
}

impl Shape {
    /// Pixels covered by this shape.
    ///
    /// ```
    /// use merry_sprites::shapes::{BoundingBox, Shape};
    ///
    /// let eye = Shape::Ellipse(BoundingBox::new(29, 24, 31, 26));
    /// let pixels = eye.pixels();
    /// assert!(pixels.contains(&(30, 25)));
    /// assert!(!pixels.contains(&(29, 24)));
    /// ```
    pub fn pixels(&self) -> HashSet<(i32, i32)> {
        match self {
            Shape::Ellipse(bbox) => ellipse_pixels(*bbox),
            Shape::RectOutline(bbox) => outline_pixels(*bbox),
            Shape::Polygon(vertices) => polygon_pixels(vertices),
        }
    }
}

/// Filled ellipse via the midpoint algorithm.
///
/// Center and radii come from the box; odd extents leave the center on an
/// integer pixel. A zero radius degenerates to a straight span.
fn ellipse_pixels(bbox: BoundingBox) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();
    if bbox.is_empty() {
        return pixels;
    }

    let cx = (bbox.x0 + bbox.x1) as i64 / 2;
    let cy = (bbox.y0 + bbox.y1) as i64 / 2;
    let rx = (bbox.x1 - bbox.x0) as i64 / 2;
    let ry = (bbox.y1 - bbox.y0) as i64 / 2;

    if rx == 0 || ry == 0 {
        for y in cy - ry..=cy + ry {
            for x in cx - rx..=cx + rx {
                pixels.insert((x as i32, y as i32));
            }
        }
        return pixels;
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let mut x = 0i64;
    let mut y = ry;
    let mut dx = 0i64;
    let mut dy = 2 * rx2 * y;

    // Upper region: slope magnitude below 1, step x every iteration.
    let mut p = ry2 - rx2 * ry + rx2 / 4;
    while dx < dy {
        fill_spans(cx, cy, x, y, &mut pixels);
        x += 1;
        dx += 2 * ry2;
        if p < 0 {
            p += dx + ry2;
        } else {
            y -= 1;
            dy -= 2 * rx2;
            p += dx - dy + ry2;
        }
    }

    // Lower region: step y every iteration.
    let mut p = ry2 * (2 * x + 1) * (2 * x + 1) / 4 + rx2 * (y - 1) * (y - 1) - rx2 * ry2;
    while y >= 0 {
        fill_spans(cx, cy, x, y, &mut pixels);
        y -= 1;
        dy -= 2 * rx2;
        if p > 0 {
            p += rx2 - dy;
        } else {
            x += 1;
            dx += 2 * ry2;
            p += dx - dy + rx2;
        }
    }

    // Region 2 can end before x reaches rx on flat boxes; the axes always
    // span the full box.
    for sx in cx - rx..=cx + rx {
        pixels.insert((sx as i32, cy as i32));
    }
    for sy in cy - ry..=cy + ry {
        pixels.insert((cx as i32, sy as i32));
    }

    pixels
}

/// Mirror a boundary point into the four quadrants as horizontal spans.
fn fill_spans(cx: i64, cy: i64, x: i64, y: i64, pixels: &mut HashSet<(i32, i32)>) {
    for sx in cx - x..=cx + x {
        pixels.insert((sx as i32, (cy - y) as i32));
        pixels.insert((sx as i32, (cy + y) as i32));
    }
}

fn outline_pixels(bbox: BoundingBox) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();
    if bbox.is_empty() {
        return pixels;
    }

    for x in bbox.x0..=bbox.x1 {
        pixels.insert((x, bbox.y0));
        pixels.insert((x, bbox.y1));
    }
    for y in bbox.y0..=bbox.y1 {
        pixels.insert((bbox.x0, y));
        pixels.insert((bbox.x1, y));
    }

    pixels
}

/// Scanline polygon fill. Fewer than three vertices cover nothing.
fn polygon_pixels(vertices: &[(i32, i32)]) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();
    if vertices.len() < 3 {
        return pixels;
    }

    let (min_y, max_y) = vertices
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));

    for y in min_y..=max_y {
        let mut crossings: Vec<f64> = Vec::new();
        for (i, &(x1, y1)) in vertices.iter().enumerate() {
            let (x2, y2) = vertices[(i + 1) % vertices.len()];
            if y1 == y2 {
                continue;
            }
            // Half-open on the lower end so shared vertices count once,
            // except on the polygon's bottom row.
            let (top, bottom) = (y1.min(y2), y1.max(y2));
            let in_edge = (y >= top && y < bottom) || (y == bottom && y == max_y);
            if in_edge {
                let t = (y - y1) as f64 / (y2 - y1) as f64;
                crossings.push(x1 as f64 + t * (x2 - x1) as f64);
            }
        }
        crossings.sort_unstable_by(|a, b| a.total_cmp(b));

        // Cover every pixel the span touches so left and right edges match.
        for pair in crossings.chunks_exact(2) {
            for x in pair[0].floor() as i32..=pair[1].ceil() as i32 {
                pixels.insert((x, y));
            }
        }
    }

    // Vertices themselves are always covered, so apexes aren't lost.
    pixels.extend(vertices.iter().copied());
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_extent() {
        let bbox = BoundingBox::new(28, 23, 32, 27);
        assert_eq!(bbox.width(), 5);
        assert_eq!(bbox.height(), 5);
        assert!(!bbox.is_empty());
        assert!(BoundingBox::new(3, 0, 2, 0).is_empty());
    }

    #[test]
    fn test_ellipse_stays_in_box() {
        let bbox = BoundingBox::new(22, 28, 42, 50);
        let pixels = Shape::Ellipse(bbox).pixels();
        assert!(pixels.contains(&(32, 39)));
        assert!(pixels.contains(&(22, 39)));
        assert!(pixels.contains(&(42, 39)));
        assert!(pixels.contains(&(32, 28)));
        assert!(pixels.contains(&(32, 50)));
        for &(x, y) in &pixels {
            assert!(x >= 22 && x <= 42 && y >= 28 && y <= 50, "({}, {}) outside box", x, y);
        }
        // Corners of the box are outside the ellipse
        assert!(!pixels.contains(&(22, 28)));
        assert!(!pixels.contains(&(42, 50)));
    }

    #[test]
    fn test_ellipse_is_symmetric() {
        let pixels = Shape::Ellipse(BoundingBox::new(26, 20, 38, 32)).pixels();
        for &(x, y) in &pixels {
            assert!(pixels.contains(&(64 - x, y)));
            assert!(pixels.contains(&(x, 52 - y)));
        }
    }

    #[test]
    fn test_ellipse_axes_reach_box_edges() {
        for bbox in [
            BoundingBox::new(0, 0, 40, 2),
            BoundingBox::new(0, 0, 2, 40),
            BoundingBox::new(0, 0, 40, 4),
            BoundingBox::new(0, 0, 64, 6),
            BoundingBox::new(-10, 5, 10, 7),
        ] {
            let pixels = Shape::Ellipse(bbox).pixels();
            let cx = (bbox.x0 + bbox.x1) / 2;
            let cy = (bbox.y0 + bbox.y1) / 2;
            for x in bbox.x0..=bbox.x1 {
                assert!(pixels.contains(&(x, cy)), "{:?}: row {} misses x={}", bbox, cy, x);
            }
            for y in bbox.y0..=bbox.y1 {
                assert!(pixels.contains(&(cx, y)), "{:?}: column {} misses y={}", bbox, cx, y);
            }
            for &(x, y) in &pixels {
                assert!(x >= bbox.x0 && x <= bbox.x1 && y >= bbox.y0 && y <= bbox.y1);
            }
        }
    }

    #[test]
    fn test_small_ellipse_is_a_plus() {
        let pixels = Shape::Ellipse(BoundingBox::new(0, 0, 2, 2)).pixels();
        let mut sorted: Vec<_> = pixels.into_iter().collect();
        sorted.sort();
        assert_eq!(sorted, vec![(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_degenerate_ellipse() {
        let pixels = Shape::Ellipse(BoundingBox::new(5, 5, 9, 5)).pixels();
        assert_eq!(pixels.len(), 5);
        assert!(Shape::Ellipse(BoundingBox::new(5, 5, 4, 5)).pixels().is_empty());
    }

    #[test]
    fn test_outline_is_hollow() {
        let pixels = Shape::RectOutline(BoundingBox::new(28, 23, 32, 27)).pixels();
        assert_eq!(pixels.len(), 16);
        assert!(pixels.contains(&(28, 23)));
        assert!(pixels.contains(&(32, 27)));
        assert!(pixels.contains(&(30, 23)));
        assert!(!pixels.contains(&(30, 25)));
    }

    #[test]
    fn test_outline_single_row() {
        let pixels = Shape::RectOutline(BoundingBox::new(0, 0, 3, 0)).pixels();
        assert_eq!(pixels.len(), 4);
    }

    #[test]
    fn test_ear_triangle() {
        let pixels = Shape::Polygon(vec![(28, 20), (30, 16), (32, 20)]).pixels();
        // apex and base
        assert!(pixels.contains(&(30, 16)));
        for x in 28..=32 {
            assert!(pixels.contains(&(x, 20)));
        }
        assert!(pixels.contains(&(30, 18)));
        assert!(!pixels.contains(&(28, 16)));
        assert!(!pixels.contains(&(32, 17)));
        // left-right symmetric around the apex
        for &(x, y) in &pixels {
            assert!(pixels.contains(&(60 - x, y)));
        }
    }

    #[test]
    fn test_square_polygon() {
        let pixels = Shape::Polygon(vec![(0, 0), (3, 0), (3, 3), (0, 3)]).pixels();
        assert_eq!(pixels.len(), 16);
    }

    #[test]
    fn test_polygon_too_few_vertices() {
        assert!(Shape::Polygon(vec![(0, 0), (1, 1)]).pixels().is_empty());
    }
}
