//! Barcode cleaning with hamming graphs.
//!
//! Barcodes (or any unique sequences of equal length) come with the number of reads carrying them.
//! Rare barcodes are discarded first. Then for each distance tau in 1..max_tau a hamming graph is built
//! on surviving barcodes, barcodes are visited by increasing count, and a barcode is discarded
//! as long as it has a neighbour not yet discarded. The more abundant of two close barcodes survives.

use crate::errors::GraphError;
use crate::graph::{hamming_graph, SeqGraph};
use crate::utils::parameters::CleanerParams;


/// Result of cleaning, both lists in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanedSeqs {
    /// ranks in input of kept sequences
    pub kept : Vec<usize>,
    /// ranks in input of discarded sequences
    pub discarded : Vec<usize>,
}


/// returns ranks of sequences with count >= min_size
pub fn discard_rare(counts : &[usize], min_size : usize) -> Vec<usize> {
    (0..counts.len()).filter(|&i| counts[i] >= min_size).collect()
} // end of discard_rare



/// Visits vertices by increasing multiplicity (ties by index) and discards a vertex
/// if it has a neighbour still alive. Returns a flag per vertex, true if discarded.
pub fn discard_close(graph : &SeqGraph) -> Vec<bool> {
    let mut order : Vec<usize> = (0..graph.nb_vertices()).collect();
    order.sort_by_key(|&v| (graph.get_vertices()[v].get_multiplicity(), v));
    //
    let mut discarded = vec![false; graph.nb_vertices()];
    for v in order {
        if graph.neighbours(v).iter().any(|&(n, _)| !discarded[n]) {
            discarded[v] = true;
        }
    }
    log::debug!("discard_close tau {} : discarded {} out of {}", graph.get_tau(), discarded.iter().filter(|&&d| d).count(), discarded.len());
    discarded
} // end of discard_close



/// Full cleaning, counts\[i\] is the number of reads of seqs\[i\].
pub fn clean_barcodes<S : AsRef<[u8]>>(seqs : &[S], counts : &[usize], params : &CleanerParams) -> Result<CleanedSeqs, GraphError> {
    if counts.len() != seqs.len() {
        return Err(GraphError::MultiplicityCount { nb_seq : seqs.len(), found : counts.len() });
    }
    let mut survivors = discard_rare(counts, params.get_min_size());
    log::info!("clean_barcodes : {} barcodes, {} discarded as rare (min size {})", seqs.len(), seqs.len() - survivors.len(), params.get_min_size());
    //
    for tau in 1..params.get_max_tau() {
        let sub_seqs : Vec<&[u8]> = survivors.iter().map(|&i| seqs[i].as_ref()).collect();
        // a zero count survives only with min_size 0, vertices need a multiplicity >= 1
        let sub_counts : Vec<usize> = survivors.iter().map(|&i| counts[i].max(1)).collect();
        let graph = hamming_graph(&sub_seqs, tau, Some(sub_counts.as_slice()), false)?;
        let discarded = discard_close(&graph);
        survivors = survivors.into_iter().zip(discarded).filter(|(_, d)| !d).map(|(i, _)| i).collect();
        log::info!("clean_barcodes : after tau {} nb kept {}", tau, survivors.len());
    }
    //
    let mut is_kept = vec![false; seqs.len()];
    for &i in &survivors {
        is_kept[i] = true;
    }
    let (kept, discarded) : (Vec<usize>, Vec<usize>) = (0..seqs.len()).partition(|&i| is_kept[i]);
    Ok(CleanedSeqs{ kept, discarded })
} // end of clean_barcodes



// end of mod tests
