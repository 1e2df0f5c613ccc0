use std::ops::Index;

use rayon::prelude::*;

use crate::diagram::{GridDiagram, Marker};
use crate::point::Point;
use crate::rect::Rect;

/// Which O and X markings a rectangle contains, as bitmasks over column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Info {
    length: u8,
    o_code: u32,
    o_count: u8,
    x_code: u32,
    x_count: u8,
}

impl Info {
    fn compute(rect: &Rect, diagram: &GridDiagram) -> Self {
        let (o_code, o_count) = encode_intersections(rect, diagram.os());
        let (x_code, x_count) = encode_intersections(rect, diagram.xs());
        Self {
            length: diagram.grid_number(),
            o_code,
            o_count,
            x_code,
            x_count,
        }
    }

    /// Bitmask whose bit `i` is set iff the rectangle contains marking `i`.
    pub fn code(&self, marker: Marker) -> u32 {
        match marker {
            Marker::O => self.o_code,
            Marker::X => self.x_code,
        }
    }

    /// Number of markings of the given kind inside the rectangle.
    pub fn count(&self, marker: Marker) -> usize {
        match marker {
            Marker::O => usize::from(self.o_count),
            Marker::X => usize::from(self.x_count),
        }
    }

    /// Whether the rectangle contains any marking of the given kind.
    pub fn intersects(&self, marker: Marker) -> bool {
        self.count(marker) > 0
    }

    /// Whether the rectangle contains the marking of column `index`.
    pub fn intersects_at(&self, marker: Marker, index: usize) -> bool {
        (self.code(marker) >> index) & 1 == 1
    }

    /// Per-column 0/1 flags; used as the exponent vector of a differential term.
    pub fn intersections(&self, marker: Marker) -> Vec<u8> {
        let code = self.code(marker);
        (0..self.length).map(|i| ((code >> i) & 1) as u8).collect()
    }
}

fn encode_intersections(rect: &Rect, points: &[Point]) -> (u32, u8) {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| rect.contains(p))
        .fold((0, 0), |(code, count), (i, _)| (code | (1 << i), count + 1))
}

/// Precomputed [`Info`] for every rectangle spanned by generator points.
///
/// There are `n^4` such rectangles (origin column, origin row, width, height);
/// they are stored densely in [`Rect::all_rects`] order, so a lookup is an
/// index computation rather than a hash probe.
#[derive(Debug, Clone)]
pub struct IntersectionTable {
    grid_number: u8,
    infos: Vec<Info>,
}

impl IntersectionTable {
    /// Computes the table for `diagram`, one rayon task per rectangle.
    pub fn build(diagram: &GridDiagram) -> Self {
        let n = usize::from(diagram.grid_number());
        let grid_size = diagram.grid_size();
        let infos: Vec<Info> = (0..n.pow(4))
            .into_par_iter()
            .map(|index| {
                let h = index % n;
                let w = (index / n) % n;
                let y = (index / n.pow(2)) % n;
                let x = index / n.pow(3);
                let rect = Rect::new(
                    Point::even(x as u8, y as u8),
                    Point::even(w as u8, h as u8),
                    grid_size,
                );
                Info::compute(&rect, diagram)
            })
            .collect();
        tracing::debug!(
            grid_number = n,
            rects = infos.len(),
            "built intersection table"
        );
        Self {
            grid_number: diagram.grid_number(),
            infos,
        }
    }

    /// Grid number of the diagram the table was built for.
    pub fn grid_number(&self) -> u8 {
        self.grid_number
    }

    /// Number of stored rectangles.
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    /// Whether the table holds no rectangles (grid number zero).
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    fn index_of(&self, rect: &Rect) -> Option<usize> {
        let n = self.grid_number;
        if rect.grid_size() != 2 * n {
            return None;
        }
        let coords = [rect.origin().x, rect.origin().y, rect.size().x, rect.size().y];
        if coords.iter().any(|&c| c % 2 != 0 || c / 2 >= n) {
            return None;
        }
        let n = usize::from(n);
        Some(
            coords
                .iter()
                .fold(0, |index, &c| index * n + usize::from(c / 2)),
        )
    }

    /// Looks up a rectangle, returning `None` when it is not spanned by generator points.
    pub fn get(&self, rect: &Rect) -> Option<&Info> {
        self.index_of(rect).map(|index| &self.infos[index])
    }
}

impl Index<&Rect> for IntersectionTable {
    type Output = Info;

    fn index(&self, rect: &Rect) -> &Info {
        match self.get(rect) {
            Some(info) => info,
            None => panic!("rectangle {rect} is not spanned by generator points"),
        }
    }
}
