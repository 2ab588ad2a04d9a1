//! Similarity index: builds the pairwise similarity graph for one query and
//! ranks the root's nearest neighbours.
//!
//! ## Algorithm
//! 1. Keep the records of the root's kind that pass every configured filter
//! 2. Add the root as vertex 0, then one vertex per kept record (equal
//!    records collapse onto one vertex)
//! 3. Score every unordered pair `{i, j}` and add both directed edges with
//!    `weight = 1 - similarity`. Scoring fans out over rayon when enabled;
//!    edges are merged by a single writer in row order, so the graph is the
//!    same either way.
//! 4. Walk the root's edges (record order) through a size-K insertion buffer
//!    and return `(record, 1 - weight)` in descending similarity

use std::sync::Arc;

use media_model::Record;
use rayon::prelude::*;
use similarity::SimilarityModel;
use similarity_graph::WeightedGraph;
use tracing::{debug, instrument};

use crate::error::CatalogResult;
use crate::filters::KindFilter;
use crate::traits::RecordFilter;

/// Number of neighbours returned when no `k` is given
pub const DEFAULT_TOP_K: usize = 10;

/// One ranked neighbour of a query record
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub record: Arc<Record>,
    /// Similarity to the query record, in `[0, 1]`
    pub similarity: f64,
}

/// Fixed-capacity buffer of the `k` lowest-weight items.
///
/// A candidate is inserted before the first entry with a strictly larger
/// weight and the buffer is then truncated, so among equal weights the
/// first one offered keeps the earlier slot.
#[derive(Debug, Clone)]
pub struct TopK<T> {
    capacity: usize,
    entries: Vec<(T, f64)>,
}

impl<T> TopK<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.saturating_add(1).min(1024)),
        }
    }

    pub fn offer(&mut self, item: T, weight: f64) {
        let pos = self
            .entries
            .iter()
            .position(|(_, w)| weight < *w)
            .unwrap_or(self.entries.len());

        if pos >= self.capacity {
            return;
        }
        self.entries.insert(pos, (item, weight));
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending weight
    pub fn into_sorted(self) -> Vec<(T, f64)> {
        self.entries
    }
}

/// Builds similarity graphs and ranks neighbours.
///
/// ## Usage
/// ```ignore
/// let index = SimilarityIndexBuilder::new()
///     .with_top_k(5)
///     .with_filter(MinimumRatingFilter::new(6.0));
///
/// let neighbors = index.find(&records, &dune)?;
/// ```
pub struct SimilarityIndexBuilder {
    model: SimilarityModel,
    top_k: usize,
    parallel: bool,
    filters: Vec<Box<dyn RecordFilter>>,
}

impl SimilarityIndexBuilder {
    /// Default weights, top 10, parallel scoring, no extra filters
    pub fn new() -> Self {
        Self {
            model: SimilarityModel::default(),
            top_k: DEFAULT_TOP_K,
            parallel: true,
            filters: Vec::new(),
        }
    }

    /// Use a custom-weighted similarity model
    pub fn with_model(mut self, model: SimilarityModel) -> Self {
        self.model = model;
        self
    }

    /// Configure how many neighbours [`find`](Self::find) returns (default: 10)
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Score pairs on the rayon pool (default: true)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Add a filter every candidate record must pass
    pub fn with_filter(mut self, filter: impl RecordFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn model(&self) -> &SimilarityModel {
        &self.model
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// The configured number of nearest neighbours of `root` among `records`
    pub fn find(
        &self,
        records: &[Arc<Record>],
        root: &Arc<Record>,
    ) -> CatalogResult<Vec<Neighbor>> {
        let filter = KindFilter::single(root.kind());
        self.build_and_rank_neighbors(records, &filter, root, self.top_k)
    }

    /// Up to `k` records most similar to `root`, best first.
    ///
    /// Candidates must be of the root's kind and pass `filter` as well as the
    /// builder's own filters. The root never appears in its own result.
    pub fn build_and_rank_neighbors(
        &self,
        records: &[Arc<Record>],
        filter: &dyn RecordFilter,
        root: &Arc<Record>,
        k: usize,
    ) -> CatalogResult<Vec<Neighbor>> {
        let (graph, root_index) = self.build_graph_filtered(records, Some(filter), root)?;
        rank_neighbors(&graph, root_index, k)
    }

    /// Complete similarity graph over `root` and the matching records.
    ///
    /// Returns the graph and the root's vertex index (always 0).
    pub fn build_graph(
        &self,
        records: &[Arc<Record>],
        root: &Arc<Record>,
    ) -> CatalogResult<(WeightedGraph<Arc<Record>>, usize)> {
        self.build_graph_filtered(records, None, root)
    }

    #[instrument(skip(self, records, extra, root), fields(root = %root, records = records.len()))]
    fn build_graph_filtered(
        &self,
        records: &[Arc<Record>],
        extra: Option<&dyn RecordFilter>,
        root: &Arc<Record>,
    ) -> CatalogResult<(WeightedGraph<Arc<Record>>, usize)> {
        let kind = root.kind();
        let mut graph = WeightedGraph::with_capacity(records.len() + 1);
        graph.add_vertex(Arc::clone(root));

        for record in records {
            let keep = record.kind() == kind
                && extra.is_none_or(|f| f.matches(record))
                && self.filters.iter().all(|f| f.matches(record));
            if keep {
                graph.add_vertex(Arc::clone(record));
            }
        }

        let edges = self.score_pairs(graph.vertices())?;
        for (i, j, weight) in edges {
            graph.add_edge(i, j, weight)?;
            graph.add_edge(j, i, weight)?;
        }

        debug!(
            vertices = graph.len(),
            edges = graph.edge_count(),
            "Built similarity graph"
        );
        Ok((graph, 0))
    }

    /// `(i, j, 1 - similarity)` for every `i < j`, in row-major order
    fn score_pairs(&self, vertices: &[Arc<Record>]) -> CatalogResult<Vec<(usize, usize, f64)>> {
        let n = vertices.len();
        let row = |i: usize| -> CatalogResult<Vec<(usize, usize, f64)>> {
            ((i + 1)..n)
                .map(|j| {
                    let s = self.model.similarity(&vertices[i], &vertices[j])?;
                    Ok((i, j, 1.0 - s))
                })
                .collect()
        };

        let rows: Vec<Vec<(usize, usize, f64)>> = if self.parallel {
            (0..n).into_par_iter().map(row).collect::<CatalogResult<_>>()?
        } else {
            (0..n).map(row).collect::<CatalogResult<_>>()?
        };

        Ok(rows.into_iter().flatten().collect())
    }
}

impl Default for SimilarityIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The `k` lowest-weight neighbours of `root_index`, as similarities.
///
/// Self-loops are skipped. Fewer than `k` neighbours yields a shorter list;
/// the result is never padded.
#[instrument(skip(graph), fields(vertices = graph.len()))]
pub fn rank_neighbors(
    graph: &WeightedGraph<Arc<Record>>,
    root_index: usize,
    k: usize,
) -> CatalogResult<Vec<Neighbor>> {
    let edges = graph.edges(root_index)?;

    let mut top = TopK::new(k);
    for edge in edges.iter().filter(|e| e.v != root_index) {
        top.offer(edge.v, edge.weight);
    }

    let neighbors: Vec<Neighbor> = top
        .into_sorted()
        .into_iter()
        .filter_map(|(v, weight)| {
            graph.vertex(v).map(|record| Neighbor {
                record: Arc::clone(record),
                similarity: 1.0 - weight,
            })
        })
        .collect();

    debug!(candidates = edges.len(), returned = neighbors.len(), "Ranked neighbours");
    Ok(neighbors)
}
