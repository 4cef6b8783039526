//! sequence level tools : deduplication and distances

pub mod dedup;
pub mod distance;

pub use dedup::*;
pub use distance::*;

use crate::errors::GraphError;


/// returns the common length of sequences, None if there is no sequence.
/// Fails with InconsistentLengths at the first sequence whose length differs from the first one.
pub fn check_uniform_length<S : AsRef<[u8]>>(seqs : &[S]) -> Result<Option<usize>, GraphError> {
    let expected = match seqs.first() {
        Some(s) => s.as_ref().len(),
        None => return Ok(None),
    };
    for (rank, s) in seqs.iter().enumerate() {
        let found = s.as_ref().len();
        if found != expected {
            log::error!("sequence of rank {} has length {}, expected {}", rank, found, expected);
            return Err(GraphError::InconsistentLengths { rank, expected, found });
        }
    }
    Ok(Some(expected))
} // end of check_uniform_length
