//! Hamming graph construction by pigeonhole partitioning (Knuth's method).
//!
//! Sequences of length L are cut in tau+1 contiguous pieces. Two sequences at hamming distance <= tau
//! cannot mismatch on all tau+1 pieces, so they share at least one piece exactly.
//! For each piece we bucket sequences by the piece content and verify only pairs falling in a common bucket.
//! A pair colliding in several pieces is verified once, in the first piece it shares.
//!
//! Verification cost is the sum over buckets of bucket_size², far below N² for diverse reads.
//! When all reads are identical it degenerates to the naive cost.

use std::ops::Range;

use fxhash::FxHashMap;

use crate::errors::GraphError;
use crate::seq::{check_uniform_length, hamming_bounded};

use super::seqgraph::Edge;


/// The tau+1 pieces of a sequence of length seq_len.
/// The first tau pieces have length seq_len / (tau+1), the last one takes the remainder.
/// Fails with InvalidThreshold if tau+1 > seq_len as some piece would be empty.
pub fn piece_ranges(seq_len : usize, tau : usize) -> Result<Vec<Range<usize>>, GraphError> {
    let nb_pieces = tau.saturating_add(1);
    if nb_pieces > seq_len {
        return Err(GraphError::InvalidThreshold {
            tau : i64::try_from(tau).unwrap_or(i64::MAX),
            reason : format!("tau + 1 must not exceed sequence length {} for partitioning", seq_len),
        });
    }
    let piece_len = seq_len / nb_pieces;
    let mut ranges : Vec<Range<usize>> = (0..tau).map(|j| j * piece_len..(j + 1) * piece_len).collect();
    ranges.push(tau * piece_len..seq_len);
    Ok(ranges)
} // end of piece_ranges



/// returns all edges {i,j} with hamming(seqs\[i\], seqs\[j\]) <= tau, sorted by (i,j).
/// All sequences must have the same length L with tau + 1 <= L.
pub fn partitioned_edges<S : AsRef<[u8]>>(seqs : &[S], tau : usize) -> Result<Vec<Edge>, GraphError> {
    partitioned_edges_counted(seqs, tau).map(|(edges, _)| edges)
} // end of partitioned_edges


// Also returns the number of pairs whose full distance was computed.
// A pair is verified in the first piece it shares, so no per pair state is kept.
fn partitioned_edges_counted<S : AsRef<[u8]>>(seqs : &[S], tau : usize) -> Result<(Vec<Edge>, usize), GraphError> {
    let seq_len = match check_uniform_length(seqs)? {
        Some(l) => l,
        None => return Ok((Vec::new(), 0)),
    };
    let ranges = piece_ranges(seq_len, tau)?;
    log::debug!("partitioned_edges : nb seq {}, length {}, tau {}, piece ranges {:?}", seqs.len(), seq_len, tau, ranges);
    //
    let mut nb_verified : usize = 0;
    let mut edges = Vec::<Edge>::new();
    //
    for (j, range) in ranges.iter().enumerate() {
        let mut buckets = FxHashMap::<&[u8], Vec<usize>>::default();
        for (i, s) in seqs.iter().enumerate() {
            buckets.entry(&s.as_ref()[range.clone()]).or_default().push(i);
        }
        if log::log_enabled!(log::Level::Debug) {
            let max_size = buckets.values().map(|b| b.len()).max().unwrap_or(0);
            log::debug!("piece {} : nb buckets {}, max bucket size {}", j, buckets.len(), max_size);
        }
        let previous = &ranges[..j];
        for bucket in buckets.values().filter(|b| b.len() > 1) {
            for (k, &v1) in bucket.iter().enumerate() {
                let s1 = seqs[v1].as_ref();
                // bucket indices are increasing, so v1 < v2
                for &v2 in &bucket[k + 1..] {
                    let s2 = seqs[v2].as_ref();
                    if previous.iter().any(|r| s1[r.clone()] == s2[r.clone()]) {
                        continue;
                    }
                    nb_verified += 1;
                    if let Some(d) = hamming_bounded(s1, s2, tau)? {
                        edges.push(Edge::new(v1, v2, d));
                    }
                }
            }
        }
    }
    edges.sort_unstable();
    log::debug!("partitioned_edges : nb pairs verified {}, nb edges {}", nb_verified, edges.len());
    //
    Ok((edges, nb_verified))
} // end of partitioned_edges_counted



// end of mod tests
