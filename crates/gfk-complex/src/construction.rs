use std::ops::RangeInclusive;
use std::sync::Arc;

use gfk_core::{BigradedBasis, Bidegree, ErrorInfo, GfkError};
use gfk_diagram::{even_points, GridDiagram, Info, IntersectionTable, Marker, Rect};
use itertools::Itertools;

use crate::codec;
use crate::config::BuildOpts;
use crate::generator::Generator;
use crate::producer::{GeneratorTable, Producer};
use crate::report::ConstructionSummary;

/// Generator table of a diagram together with its intersection table.
///
/// Immutable once built. [`Construction::filter`] shares the diagram and the
/// intersection table with the construction it came from.
#[derive(Debug, Clone)]
pub struct Construction {
    diagram: Arc<GridDiagram>,
    table: Arc<IntersectionTable>,
    generators: GeneratorTable,
    transpositions: Arc<Vec<(usize, usize)>>,
}

impl Construction {
    /// Enumerates the generators of `diagram` whose `(maslov, alexander)` passes `filter`.
    pub fn build<F>(diagram: GridDiagram, filter: F) -> Self
    where
        F: Fn(i32, i32) -> bool + Sync,
    {
        let table = IntersectionTable::build(&diagram);
        let generators = Producer::new(&diagram, &table).produce(&filter);
        Self::from_parts(diagram, table, generators)
    }

    /// Builds with serialized options, on a dedicated pool when one is requested.
    pub fn build_with(diagram: GridDiagram, opts: &BuildOpts) -> Result<Self, GfkError> {
        opts.validate()?;
        let window = opts.window;
        let filter = move |m: i32, a: i32| window.contains(m, a);
        match opts.threads {
            None => Ok(Self::build(diagram, filter)),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|err| {
                        GfkError::Complex(
                            ErrorInfo::new("thread-pool", err.to_string())
                                .with_context("threads", threads),
                        )
                    })?;
                Ok(pool.install(|| Self::build(diagram, filter)))
            }
        }
    }

    fn from_parts(diagram: GridDiagram, table: IntersectionTable, generators: GeneratorTable) -> Self {
        let transpositions = (0..usize::from(diagram.grid_number()))
            .tuple_combinations()
            .collect();
        Self {
            diagram: Arc::new(diagram),
            table: Arc::new(table),
            generators,
            transpositions: Arc::new(transpositions),
        }
    }

    /// Keeps the bidegrees passing `predicate`; nothing is recomputed.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(i32, i32) -> bool,
    {
        let generators: GeneratorTable = self
            .generators
            .iter()
            .filter(|(bidegree, _)| predicate(bidegree.maslov, bidegree.alexander))
            .map(|(bidegree, bucket)| (*bidegree, bucket.clone()))
            .collect();
        tracing::debug!(
            before = self.generators.len(),
            after = generators.len(),
            "filtered construction buckets"
        );
        Self {
            diagram: Arc::clone(&self.diagram),
            table: Arc::clone(&self.table),
            generators,
            transpositions: Arc::clone(&self.transpositions),
        }
    }

    /// The diagram.
    pub fn diagram(&self) -> &GridDiagram {
        &self.diagram
    }

    /// Grid number of the diagram.
    pub fn grid_number(&self) -> u8 {
        self.diagram.grid_number()
    }

    /// O/X intersection table shared by every filtered copy.
    pub fn intersection_table(&self) -> &IntersectionTable {
        &self.table
    }

    /// Marking data for `rect`.
    ///
    /// # Panics
    ///
    /// Panics if `rect` does not have generator points as corners.
    pub fn intersection_info(&self, rect: &Rect) -> &Info {
        &self.table[rect]
    }

    /// Total number of retained generators.
    pub fn number_of_generators(&self) -> usize {
        self.generators.values().map(Vec::len).sum()
    }

    /// Number of generators at the given bidegree.
    pub fn number_of_generators_in(&self, maslov: i32, alexander: i32) -> usize {
        self.generators_in(maslov, alexander).len()
    }

    /// Whether any generator has the given bidegree.
    pub fn contains_bidegree(&self, maslov: i32, alexander: i32) -> bool {
        self.generators.contains_key(&Bidegree::new(maslov, alexander))
    }

    /// Populated bidegrees, ascending.
    pub fn bidegrees(&self) -> impl Iterator<Item = Bidegree> + '_ {
        self.generators.keys().copied()
    }

    /// Generators at the given bidegree, sorted by code.
    pub fn generators_in(&self, maslov: i32, alexander: i32) -> &[Generator] {
        self.generators
            .get(&Bidegree::new(maslov, alexander))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Generators of every bidegree passing `predicate`, in bidegree order.
    pub fn generators_where<F>(&self, predicate: F) -> Vec<Generator>
    where
        F: Fn(i32, i32) -> bool,
    {
        let buckets: Vec<&Vec<Generator>> = self
            .generators
            .iter()
            .filter(|(bidegree, _)| predicate(bidegree.maslov, bidegree.alexander))
            .map(|(_, bucket)| bucket)
            .collect();
        let mut out = Vec::with_capacity(buckets.iter().map(|b| b.len()).sum());
        for bucket in buckets {
            out.extend_from_slice(bucket);
        }
        out
    }

    /// Generators of the given Maslov grading across all Alexander gradings.
    pub fn generators_of_maslov_degree(&self, maslov: i32) -> Vec<Generator> {
        self.generators_where(|m, _| m == maslov)
    }

    /// Looks up the retained generator with the given sequence.
    pub fn generator_for_sequence(&self, seq: &[u8]) -> Option<Generator> {
        if seq.len() != usize::from(self.grid_number()) || !codec::is_permutation(seq) {
            return None;
        }
        let code = codec::encode(seq);
        self.generators
            .values()
            .find_map(|bucket| find_by_code(bucket, code))
    }

    /// Smallest to largest populated Maslov grading; `0..=0` when empty.
    pub fn maslov_range(&self) -> RangeInclusive<i32> {
        closure_range(self.generators.keys().map(|b| b.maslov))
    }

    /// Smallest to largest populated Alexander grading; `0..=0` when empty.
    pub fn alexander_range(&self) -> RangeInclusive<i32> {
        closure_range(self.generators.keys().map(|b| b.alexander))
    }

    /// Generators reached from `x` through an empty rectangle accepted by `admissible`.
    ///
    /// Both rectangles between every pair of points of `x` are tried. A target
    /// that is not in the table (for example because the degree filter dropped
    /// it) is skipped.
    pub fn adjacents<F>(&self, x: &Generator, admissible: F) -> Vec<(Generator, Rect)>
    where
        F: Fn(&Rect) -> bool,
    {
        let grid_size = self.diagram.grid_size();
        let mut seq = x.sequence();
        let pts = even_points(&seq);
        let mut scratch = Vec::with_capacity(seq.len());
        let mut out = Vec::new();

        for &(i, j) in self.transpositions.iter() {
            for rect in [
                Rect::from_points(pts[i], pts[j], grid_size),
                Rect::from_points(pts[j], pts[i], grid_size),
            ] {
                if !admissible(&rect) || rect.intersects(&pts, true) {
                    continue;
                }
                let info = &self.table[&rect];
                let n_o = info.count(Marker::O) as i32;
                let n_x = info.count(Marker::X) as i32;
                let target = Bidegree::new(x.maslov() + 2 * n_o - 1, x.alexander() + n_o - n_x);

                let (left, right) = rect.columns();
                seq.swap(left, right);
                let code = codec::encode_with(&seq, &mut scratch);
                seq.swap(left, right);

                if let Some(y) = self
                    .generators
                    .get(&target)
                    .and_then(|bucket| find_by_code(bucket, code))
                {
                    out.push((y, rect));
                }
            }
        }
        out
    }

    /// Data summary of the retained generators.
    pub fn summary(&self) -> ConstructionSummary {
        ConstructionSummary::from_construction(self)
    }

    pub(crate) fn buckets(&self) -> &GeneratorTable {
        &self.generators
    }
}

impl BigradedBasis for Construction {
    type Generator = Generator;

    fn bidegrees(&self) -> Vec<Bidegree> {
        Construction::bidegrees(self).collect()
    }

    fn generators_at(&self, bidegree: Bidegree) -> &[Generator] {
        self.generators_in(bidegree.maslov, bidegree.alexander)
    }

    fn maslov_range(&self) -> RangeInclusive<i32> {
        Construction::maslov_range(self)
    }

    fn alexander_range(&self) -> RangeInclusive<i32> {
        Construction::alexander_range(self)
    }
}

fn find_by_code(bucket: &[Generator], code: u64) -> Option<Generator> {
    bucket
        .binary_search_by_key(&code, Generator::code)
        .ok()
        .map(|index| bucket[index])
}

fn closure_range(values: impl Iterator<Item = i32>) -> RangeInclusive<i32> {
    match values.minmax().into_option() {
        Some((min, max)) => min..=max,
        None => 0..=0,
    }
}
