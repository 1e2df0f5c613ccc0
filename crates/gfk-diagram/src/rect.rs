use std::fmt;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Rectangle on the toroidal grid, given by its lower-left corner and size.
///
/// The upper-right corner is `origin + size` taken modulo `grid_size`, so a
/// rectangle may wrap around either edge of the torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    origin: Point,
    size: Point,
    grid_size: u8,
}

impl Rect {
    /// Creates a rectangle from its lower-left corner and size.
    pub const fn new(origin: Point, size: Point, grid_size: u8) -> Self {
        Self {
            origin,
            size,
            grid_size,
        }
    }

    /// Rectangle with lower-left corner `p` and upper-right corner `q`.
    pub fn from_points(p: Point, q: Point, grid_size: u8) -> Self {
        let l = grid_size;
        let size = Point::new((l + q.x - p.x) % l, (l + q.y - p.y) % l);
        Self::new(p, size, grid_size)
    }

    /// Lower-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Width and height packed as a point.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Side length of the torus the rectangle lives on.
    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Upper-right corner, reduced onto the torus.
    pub fn destination(&self) -> Point {
        Point::new(
            (self.origin.x + self.size.x) % self.grid_size,
            (self.origin.y + self.size.y) % self.grid_size,
        )
    }

    /// Column indices of the left and right edges of a rectangle spanned by generator points.
    pub fn columns(&self) -> (usize, usize) {
        (
            usize::from(self.origin.x / 2),
            usize::from(self.destination().x / 2),
        )
    }

    // `b` is the unreduced far edge, so wrapped coordinates are lifted by one period.
    fn in_range(&self, p: u8, a: u8, b: u8) -> bool {
        if a <= p {
            p <= b
        } else {
            p + self.grid_size <= b
        }
    }

    fn in_range_interior(&self, p: u8, a: u8, b: u8) -> bool {
        if a < p {
            p < b
        } else {
            p + self.grid_size < b
        }
    }

    /// Closed containment test.
    pub fn contains(&self, p: &Point) -> bool {
        self.in_range(p.x, self.origin.x, self.origin.x + self.size.x)
            && self.in_range(p.y, self.origin.y, self.origin.y + self.size.y)
    }

    /// Open containment test (boundary excluded).
    pub fn contains_interior(&self, p: &Point) -> bool {
        self.in_range_interior(p.x, self.origin.x, self.origin.x + self.size.x)
            && self.in_range_interior(p.y, self.origin.y, self.origin.y + self.size.y)
    }

    fn contains_with(&self, p: &Point, interior: bool) -> bool {
        if interior {
            self.contains_interior(p)
        } else {
            self.contains(p)
        }
    }

    /// Whether any of `points` lies in the rectangle.
    pub fn intersects(&self, points: &[Point], interior: bool) -> bool {
        points.iter().any(|p| self.contains_with(p, interior))
    }

    /// Number of `points` lying in the rectangle.
    pub fn count_intersections(&self, points: &[Point], interior: bool) -> usize {
        points
            .iter()
            .filter(|p| self.contains_with(p, interior))
            .count()
    }

    /// Every rectangle spanned by generator points of a grid with `grid_number` columns.
    ///
    /// Rectangles are yielded in `(origin x, origin y, width, height)` order,
    /// which is also the storage order of the intersection table.
    pub fn all_rects(grid_number: u8) -> impl Iterator<Item = Rect> {
        let n = grid_number;
        let grid_size = 2 * n;
        (0..n).flat_map(move |x| {
            (0..n).flat_map(move |y| {
                (0..n).flat_map(move |w| {
                    (0..n).map(move |h| {
                        Rect::new(Point::even(x, y), Point::even(w, h), grid_size)
                    })
                })
            })
        })
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[origin: {}, size: {}]", self.origin, self.size)
    }
}
