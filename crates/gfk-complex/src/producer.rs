use std::collections::BTreeMap;

use gfk_core::Bidegree;
use gfk_diagram::{even_points, GridDiagram, IntersectionTable, Marker, Rect, MAX_GRID_NUMBER};
use rayon::prelude::*;

use crate::codec;
use crate::generator::{alexander_degree, maslov_degree, Generator};

/// Generators bucketed by bidegree; every bucket is sorted by code.
pub type GeneratorTable = BTreeMap<Bidegree, Vec<Generator>>;

/// Transpositions of Heap's algorithm over `len` positions.
///
/// Starting from any arrangement and applying the yielded swaps in order
/// visits every permutation of the positions exactly once. Each item `(a, b)`
/// has `a < b`.
#[derive(Debug, Clone)]
pub struct HeapTranspositions {
    counters: Vec<usize>,
    index: usize,
}

impl HeapTranspositions {
    /// Swap sequence for `len` positions; it has `len! - 1` items.
    pub fn new(len: usize) -> Self {
        Self {
            counters: vec![0; len],
            index: 1,
        }
    }
}

impl Iterator for HeapTranspositions {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.counters.len() {
            let i = self.index;
            let c = self.counters[i];
            if c < i {
                let swap = if i % 2 == 0 { (0, i) } else { (c, i) };
                self.counters[i] += 1;
                self.index = 1;
                return Some(swap);
            }
            self.counters[i] = 0;
            self.index += 1;
        }
        None
    }
}

/// Enumerates all generators of a diagram, keeping those whose bidegree passes `filter`.
pub(crate) struct Producer<'a> {
    diagram: &'a GridDiagram,
    table: &'a IntersectionTable,
}

impl<'a> Producer<'a> {
    pub(crate) fn new(diagram: &'a GridDiagram, table: &'a IntersectionTable) -> Self {
        Self { diagram, table }
    }

    /// Runs one branch per value of the last column in parallel and merges the buckets.
    ///
    /// Runs on whichever rayon pool is current.
    pub(crate) fn produce<F>(&self, filter: &F) -> GeneratorTable
    where
        F: Fn(i32, i32) -> bool + Sync,
    {
        let n = usize::from(self.diagram.grid_number());
        assert!(
            n <= usize::from(MAX_GRID_NUMBER),
            "grid number {n} exceeds the encoding width"
        );
        let mut generators = GeneratorTable::new();
        if n == 0 {
            if filter(0, 0) {
                generators.insert(Bidegree::new(0, 0), vec![Generator::from_parts(0, 0, 0, 0)]);
            }
            return generators;
        }

        tracing::debug!(grid_number = n, branches = n, "enumerating generators");
        let partials: Vec<GeneratorTable> = (0..n)
            .into_par_iter()
            .map(|seed| self.produce_branch(seed, filter))
            .collect();
        for partial in partials {
            for (bidegree, mut bucket) in partial {
                generators.entry(bidegree).or_default().append(&mut bucket);
            }
        }
        generators
            .par_iter_mut()
            .for_each(|(_, bucket)| bucket.sort_unstable());

        tracing::debug!(
            grid_number = n,
            generators = generators.values().map(Vec::len).sum::<usize>(),
            buckets = generators.len(),
            "enumerated generators"
        );
        generators
    }

    // Visits every permutation whose last entry is `seed`. Rejected generators
    // are still stepped through, since the next grading is derived from theirs.
    fn produce_branch<F>(&self, seed: usize, filter: &F) -> GeneratorTable
    where
        F: Fn(i32, i32) -> bool + Sync,
    {
        let n = usize::from(self.diagram.grid_number());
        let grid_number = self.diagram.grid_number();
        let grid_size = self.diagram.grid_size();

        let mut seq: Vec<u8> = (0..grid_number).collect();
        seq.swap(seed, n - 1);
        let mut pts = even_points(&seq);
        let mut maslov = maslov_degree(self.diagram, &pts);
        let mut alexander = alexander_degree(self.diagram, &pts);

        let mut scratch = Vec::with_capacity(n);
        let mut out = GeneratorTable::new();
        let mut visited = 1usize;
        let mut insert = |seq: &[u8], maslov: i32, alexander: i32, scratch: &mut Vec<u8>| {
            if filter(maslov, alexander) {
                let code = codec::encode_with(seq, scratch);
                out.entry(Bidegree::new(maslov, alexander))
                    .or_default()
                    .push(Generator::from_parts(code, grid_number, maslov, alexander));
            }
        };
        insert(&seq, maslov, alexander, &mut scratch);

        for (i, j) in HeapTranspositions::new(n - 1) {
            let rect = Rect::from_points(pts[i], pts[j], grid_size);
            let info = &self.table[&rect];
            let n_o = info.count(Marker::O) as i32;
            let n_x = info.count(Marker::X) as i32;
            let inside = pts[i + 1..j]
                .iter()
                .filter(|p| rect.contains_interior(p))
                .count() as i32;

            maslov += 2 * (n_o - inside) - 1;
            alexander += n_o - n_x;
            seq.swap(i, j);
            let (yi, yj) = (pts[i].y, pts[j].y);
            pts[i].y = yj;
            pts[j].y = yi;

            insert(&seq, maslov, alexander, &mut scratch);
            visited += 1;
        }

        tracing::trace!(seed, visited, "finished enumeration branch");
        out
    }
}
