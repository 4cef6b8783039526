//! errors raised while computing distances and building graphs.
//!
//! Any error aborts the whole construction call, there is no partial graph.

use thiserror::Error;


/// Errors of the distance oracle, the builders and the graph assembler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// hamming distance asked between sequences of different lengths
    #[error("hamming distance needs sequences of equal length, got {left} and {right}")]
    LengthMismatch { left : usize, right : usize },
    /// hamming mode asked on a sequence list with non uniform lengths
    #[error("hamming mode needs sequences of one length, sequence of rank {rank} has length {found}, expected {expected}")]
    InconsistentLengths { rank : usize, expected : usize, found : usize },
    /// threshold negative or not usable by the partitioned builder
    #[error("invalid threshold tau = {tau} : {reason}")]
    InvalidThreshold { tau : i64, reason : String },
    /// multiplicities not parallel to sequences
    #[error("got {found} multiplicities for {nb_seq} sequences")]
    MultiplicityCount { nb_seq : usize, found : usize },
    /// a multiplicity of 0
    #[error("multiplicity of sequence of rank {rank} must be at least 1")]
    InvalidMultiplicity { rank : usize },
    /// attribute maps not parallel to sequences
    #[error("got {found} attribute maps for {nb_seq} sequences")]
    AttributeCount { nb_seq : usize, found : usize },
}  // end of GraphError
