//! Approximate distance graphs over read sequences.
//!
//! Vertices are sequences carrying a multiplicity, an edge joins two sequences whose
//! hamming or levenshtein distance is less or equal to a threshold tau.
//! The graph is the input of clonal clustering of near duplicate reads.
//!
//! - [seq] : deduplication of reads and distances.
//! - [graph] : naive and partitioned (pigeonhole) builders, dispatch between them, the [graph::SeqGraph] structure.
//! - [cleaner] : barcode cleaning on hamming graphs.
//! - [utils] : construction parameters and their json dump.
//!
//! ```
//! use seqgraph::prelude::*;
//!
//! let reads = ["AAAA", "AAAA", "AAAT", "TTTT"];
//! let (uniques, multiplicity) = count_multiplicity(&reads);
//! let graph = hamming_graph(&uniques, 1, Some(multiplicity.as_slice()), false).unwrap();
//! assert_eq!(graph.edge_triples().collect::<Vec<_>>(), vec![(0, 1, 1)]);
//! assert_eq!(graph.total_multiplicity(), 4);
//! ```

pub mod cleaner;
pub mod errors;
pub mod graph;
pub mod seq;
pub mod utils;

pub mod prelude {
    pub use crate::cleaner::{clean_barcodes, CleanedSeqs};
    pub use crate::errors::GraphError;
    pub use crate::graph::{check_threshold, hamming_graph, levenshtein_graph, select_strategy, GraphBuilder};
    pub use crate::graph::{naive_edges, partitioned_edges, piece_ranges};
    pub use crate::graph::{AttrValue, Attributes, Edge, SeqGraph, Strategy, Vertex};
    pub use crate::seq::{count_multiplicity, hamming, hamming_bounded, levenshtein, levenshtein_bounded};
    pub use crate::seq::{hamming_matrix, levenshtein_matrix, DistanceMatrix, DistanceMode};
    pub use crate::utils::parameters::{CleanerParams, GraphParams};
}
