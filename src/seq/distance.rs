//! Distances between sequences.
//!
//! Hamming distance for sequences of equal length, Levenshtein (edit) distance for sequences of any length.
//! The bounded variants return None as soon as the distance is known to be greater than the threshold,
//! and are exact when the distance is below or equal to the threshold. They are what the graph builders use.

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;


/// The distance used to connect two sequences.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceMode {
    /// number of mismatching positions, sequences must have the same length
    Hamming,
    /// edit distance with unit cost for insertion, deletion and substitution
    Levenshtein,
}


impl Default for DistanceMode {
    fn default() -> Self {
        DistanceMode::Hamming
    }
}


impl DistanceMode {
    /// exact distance between a and b
    pub fn distance(&self, a : &[u8], b : &[u8]) -> Result<usize, GraphError> {
        match self {
            DistanceMode::Hamming => hamming(a, b),
            DistanceMode::Levenshtein => Ok(levenshtein(a, b)),
        }
    }

    /// returns Some(distance) if distance <= tau, None otherwise
    pub fn distance_within(&self, a : &[u8], b : &[u8], tau : usize) -> Result<Option<usize>, GraphError> {
        match self {
            DistanceMode::Hamming => hamming_bounded(a, b, tau),
            DistanceMode::Levenshtein => Ok(levenshtein_bounded(a, b, tau)),
        }
    }
}  // end of impl DistanceMode


//=====================================================================================

/// count of positions where a and b differ. Fails with LengthMismatch if lengths differ.
pub fn hamming(a : &[u8], b : &[u8]) -> Result<usize, GraphError> {
    if a.len() != b.len() {
        return Err(GraphError::LengthMismatch { left : a.len(), right : b.len() });
    }
    Ok(a.iter().zip(b.iter()).filter(|(ca, cb)| ca != cb).count())
} // end of hamming


/// hamming distance stopping at the first mismatch beyond tau
pub fn hamming_bounded(a : &[u8], b : &[u8], tau : usize) -> Result<Option<usize>, GraphError> {
    if a.len() != b.len() {
        return Err(GraphError::LengthMismatch { left : a.len(), right : b.len() });
    }
    let mut nb_diff = 0;
    for (ca, cb) in a.iter().zip(b.iter()) {
        if ca != cb {
            nb_diff += 1;
            if nb_diff > tau {
                return Ok(None);
            }
        }
    }
    Ok(Some(nb_diff))
} // end of hamming_bounded



/// minimal number of single symbol insertions, deletions and substitutions transforming a into b.
/// Dynamic programming on two rows whose size is the length of the shorter sequence.
pub fn levenshtein(a : &[u8], b : &[u8]) -> usize {
    // without a bound the computation always completes
    edit_rows(a, b, None).unwrap_or(a.len().max(b.len()))
} // end of levenshtein


/// levenshtein distance, None as soon as we know it is greater than tau.
pub fn levenshtein_bounded(a : &[u8], b : &[u8], tau : usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > tau {
        return None;
    }
    edit_rows(a, b, Some(tau))
} // end of levenshtein_bounded


// The minimum of a dp row never decreases from one row to the next,
// so once it exceeds the bound the final distance does too.
fn edit_rows(a : &[u8], b : &[u8], bound : Option<usize>) -> Option<usize> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let exceeds = |d : usize| bound.map_or(false, |tau| d > tau);
    //
    if short.is_empty() {
        return if exceeds(long.len()) { None } else { Some(long.len()) };
    }
    let mut prev : Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];
    for (i, cl) in long.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, cs) in short.iter().enumerate() {
            let subst = prev[j] + usize::from(cl != cs);
            curr[j + 1] = subst.min(prev[j + 1] + 1).min(curr[j] + 1);
            row_min = row_min.min(curr[j + 1]);
        }
        if exceeds(row_min) {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    let dist = prev[short.len()];
    if exceeds(dist) { None } else { Some(dist) }
} // end of edit_rows


//=====================================================================================

/// A dense symmetric matrix of pairwise distances, with zero diagonal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    size : usize,
    dist : Vec<usize>,
}


impl DistanceMatrix {
    fn new(size : usize) -> Self {
        DistanceMatrix{ size, dist : vec![0; size * size] }
    }

    /// number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// distance between sequences of rank i and j
    pub fn get(&self, i : usize, j : usize) -> usize {
        self.dist[i * self.size + j]
    }

    fn set(&mut self, i : usize, j : usize, d : usize) {
        self.dist[i * self.size + j] = d;
        self.dist[j * self.size + i] = d;
    }
} // end of impl DistanceMatrix



/// full matrix of hamming distances. All sequences must have the same length.
pub fn hamming_matrix<S : AsRef<[u8]>>(seqs : &[S]) -> Result<DistanceMatrix, GraphError> {
    super::check_uniform_length(seqs)?;
    let mut matrix = DistanceMatrix::new(seqs.len());
    for i in 0..seqs.len() {
        for j in 0..i {
            matrix.set(i, j, hamming(seqs[i].as_ref(), seqs[j].as_ref())?);
        }
    }
    Ok(matrix)
} // end of hamming_matrix


/// full matrix of levenshtein distances
pub fn levenshtein_matrix<S : AsRef<[u8]>>(seqs : &[S]) -> DistanceMatrix {
    let mut matrix = DistanceMatrix::new(seqs.len());
    for i in 0..seqs.len() {
        for j in 0..i {
            matrix.set(i, j, levenshtein(seqs[i].as_ref(), seqs[j].as_ref()));
        }
    }
    matrix
} // end of levenshtein_matrix


//=====================================================================================


#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_hamming() {
        log_init_test();
        assert_eq!(hamming(b"AAAA", b"AAAT"), Ok(1));
        assert_eq!(hamming(b"AAAA", b"TTTT"), Ok(4));
        assert_eq!(hamming(b"", b""), Ok(0));
        assert_eq!(hamming(b"ACG", b"AC"), Err(GraphError::LengthMismatch { left : 3, right : 2 }));
    }

    #[test]
    fn test_hamming_bounded() {
        log_init_test();
        assert_eq!(hamming_bounded(b"AAAT", b"TTTT", 3), Ok(Some(3)));
        assert_eq!(hamming_bounded(b"AAAT", b"TTTT", 2), Ok(None));
        assert!(hamming_bounded(b"AAAT", b"TTT", 10).is_err());
    }

    #[test]
    fn test_levenshtein() {
        log_init_test();
        assert_eq!(levenshtein(b"AAA", b"AA"), 1);
        assert_eq!(levenshtein(b"AA", b"AAA"), 1);
        assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
        assert_eq!(levenshtein(b"", b"ACGT"), 4);
        assert_eq!(levenshtein(b"ACGT", b"ACGT"), 0);
        assert_eq!(levenshtein(b"GATTACA", b"TACA"), 3);
    }

    #[test]
    fn test_levenshtein_bounded_agrees() {
        log_init_test();
        let words : [&[u8]; 6] = [b"ACGTAC", b"ACGAC", b"TTGTAC", b"", b"A", b"CAGTCA"];
        for a in words.iter() {
            for b in words.iter() {
                let exact = levenshtein(a, b);
                for tau in 0..8 {
                    let bounded = levenshtein_bounded(a, b, tau);
                    if exact <= tau {
                        assert_eq!(bounded, Some(exact));
                    }
                    else {
                        assert_eq!(bounded, None);
                    }
                }
            }
        }
    }

    #[test]
    fn test_mode_dispatch() {
        log_init_test();
        assert_eq!(DistanceMode::Levenshtein.distance(b"AAA", b"AA"), Ok(1));
        assert!(DistanceMode::Hamming.distance(b"AAA", b"AA").is_err());
        assert_eq!(DistanceMode::Hamming.distance_within(b"AAA", b"ATA", 0), Ok(None));
    }

    #[test]
    fn test_matrices() {
        log_init_test();
        let seqs = vec!["AAAA", "AAAT", "TTTT"];
        let m = hamming_matrix(&seqs).unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(0, 1), 1);
        assert_eq!(m.get(2, 0), 4);
        assert_eq!(m.get(1, 2), m.get(2, 1));
        assert_eq!(m.get(1, 1), 0);
        //
        assert!(hamming_matrix(&["AAA", "AA"]).is_err());
        let l = levenshtein_matrix(&["AAA", "AA", ""]);
        assert_eq!(l.get(0, 1), 1);
        assert_eq!(l.get(2, 0), 3);
    }

} // end of mod tests
