//! Sequence graph construction : naive and partitioned builders, strategy dispatch, graph assembly.

pub mod dispatch;
pub mod knuth;
pub mod naive;
pub mod seqgraph;

pub use dispatch::*;
pub use knuth::{partitioned_edges, piece_ranges};
pub use naive::naive_edges;
pub use seqgraph::{AttrValue, Attributes, Edge, SeqGraph, Strategy, Vertex};
