//! Collapse identical reads and count their multiplicity.

use fxhash::FxHashMap;


/// Returns unique sequences in first occurrence order, and for each its number of occurrences in seqs.
pub fn count_multiplicity<S : AsRef<[u8]>>(seqs : &[S]) -> (Vec<Vec<u8>>, Vec<usize>) {
    let mut rank_of = FxHashMap::<&[u8], usize>::default();
    let mut uniques = Vec::<Vec<u8>>::new();
    let mut multiplicity = Vec::<usize>::new();
    //
    for s in seqs {
        let s = s.as_ref();
        match rank_of.get(s) {
            Some(&rank) => multiplicity[rank] += 1,
            None => {
                rank_of.insert(s, uniques.len());
                uniques.push(s.to_vec());
                multiplicity.push(1);
            }
        }
    }
    log::debug!("count_multiplicity : {} reads, {} unique", seqs.len(), uniques.len());
    //
    (uniques, multiplicity)
} // end of count_multiplicity



// end of mod tests
