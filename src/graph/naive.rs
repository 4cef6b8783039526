//! Reference builder : all N*(N-1)/2 pairs are evaluated.
//!
//! Works for both distances. Pairs are streamed, no distance matrix is kept.

use crate::errors::GraphError;
use crate::seq::DistanceMode;

use super::seqgraph::Edge;


/// returns all edges {i,j} with distance(seqs\[i\], seqs\[j\]) <= tau, sorted by (i,j).
/// In hamming mode a pair of sequences of different lengths gives a LengthMismatch error.
pub fn naive_edges<S : AsRef<[u8]>>(seqs : &[S], tau : usize, mode : DistanceMode) -> Result<Vec<Edge>, GraphError> {
    log::debug!("naive_edges : nb seq {}, tau {}, mode {:?}", seqs.len(), tau, mode);
    //
    let mut edges = Vec::<Edge>::new();
    for i in 0..seqs.len() {
        let si = seqs[i].as_ref();
        for j in (i + 1)..seqs.len() {
            if let Some(d) = mode.distance_within(si, seqs[j].as_ref(), tau)? {
                edges.push(Edge::new(i, j, d));
            }
        }
    }
    //
    log::debug!("naive_edges : nb pairs evaluated {}, nb edges {}", seqs.len() * seqs.len().saturating_sub(1) / 2, edges.len());
    Ok(edges)
} // end of naive_edges



// end of mod tests
