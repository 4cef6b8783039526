//! Choice of the construction method and graph construction entry points.
//!
//! The partitioned builder is used in hamming mode when all sequences have the same length L,
//! tau + 1 <= L and naive construction is not forced. Otherwise, and always in levenshtein mode,
//! the naive builder runs. Both give the same graph, only the cost differs.

use std::time::{Duration, SystemTime};
use cpu_time::ProcessTime;

use crate::errors::GraphError;
use crate::seq::{check_uniform_length, DistanceMode};
use crate::utils::parameters::GraphParams;

use super::knuth::partitioned_edges;
use super::naive::naive_edges;
use super::seqgraph::{assemble, check_side_lists, Attributes, SeqGraph, Strategy};


/// converts a signed threshold (as read from a command line or a file) to a usable one.
pub fn check_threshold(tau : i64) -> Result<usize, GraphError> {
    usize::try_from(tau).map_err(|_| GraphError::InvalidThreshold { tau, reason : "tau must be non negative".to_string() })
} // end of check_threshold



/// Selects the builder. Fails with InconsistentLengths in hamming mode if sequences lengths differ.
pub fn select_strategy<S : AsRef<[u8]>>(seqs : &[S], tau : usize, mode : DistanceMode, force_naive : bool) -> Result<Strategy, GraphError> {
    match mode {
        DistanceMode::Levenshtein => Ok(Strategy::Naive),
        DistanceMode::Hamming => {
            let seq_len = match check_uniform_length(seqs)? {
                Some(l) => l,
                None => return Ok(Strategy::Naive),
            };
            if force_naive {
                log::debug!("select_strategy : naive construction forced");
                Ok(Strategy::Naive)
            }
            else if tau.saturating_add(1) > seq_len {
                log::info!("select_strategy : tau {} too large for sequence length {}, falling back to naive construction", tau, seq_len);
                Ok(Strategy::Naive)
            }
            else {
                Ok(Strategy::Partitioned)
            }
        }
    }
} // end of select_strategy



/// Builds sequence graphs according to its parameters.
pub struct GraphBuilder {
    params : GraphParams,
}


impl GraphBuilder {

    pub fn new(params : GraphParams) -> Self {
        GraphBuilder{ params }
    }

    pub fn get_params(&self) -> &GraphParams {
        &self.params
    }

    /// graph with one vertex per sequence, multiplicity 1 and no attributes.
    pub fn build<S : AsRef<[u8]>>(&self, seqs : &[S]) -> Result<SeqGraph, GraphError> {
        self.build_with(seqs, None, None)
    }

    /// Graph with multiplicities and attributes attached to vertices.
    /// If given, multiplicities and attributes must have one entry per sequence.
    pub fn build_with<S : AsRef<[u8]>>(&self, seqs : &[S], multiplicities : Option<&[usize]>, attributes : Option<Vec<Attributes>>) -> Result<SeqGraph, GraphError> {
        let tau = self.params.get_tau();
        let mode = self.params.get_mode();
        log::info!("GraphBuilder::build_with nb seq : {}, tau : {}, mode : {:?}", seqs.len(), tau, mode);
        //
        let start_t = SystemTime::now();
        let cpu_start = ProcessTime::now();
        //
        let strategy = select_strategy(seqs, tau, mode, self.params.get_force_naive())?;
        check_side_lists(seqs.len(), multiplicities, attributes.as_deref())?;
        log::info!("construction strategy : {:?}", strategy);
        let edges = match strategy {
            Strategy::Naive => naive_edges(seqs, tau, mode)?,
            Strategy::Partitioned => partitioned_edges(seqs, tau)?,
        };
        let graph = assemble(seqs, multiplicities, attributes, edges, tau, mode, strategy);
        //
        let cpu_time : Duration = cpu_start.elapsed();
        let sys_t = start_t.elapsed().map(|d| d.as_millis()).unwrap_or(0);
        log::info!("graph built, nb vertices : {}, nb edges : {}, sys time(ms) {:?} cpu time(ms) {:?}",
                graph.nb_vertices(), graph.nb_edges(), sys_t, cpu_time.as_millis());
        //
        Ok(graph)
    } // end of build_with

}  // end of impl GraphBuilder


//=====================================================================================


/// Hamming graph of threshold tau. Multiplicities default to 1.
/// Partitioned construction is used when possible unless force_naive is set.
pub fn hamming_graph<S : AsRef<[u8]>>(seqs : &[S], tau : usize, multiplicities : Option<&[usize]>, force_naive : bool) -> Result<SeqGraph, GraphError> {
    let builder = GraphBuilder::new(GraphParams::new(tau, DistanceMode::Hamming, force_naive));
    builder.build_with(seqs, multiplicities, None)
} // end of hamming_graph


/// Levenshtein graph of threshold tau, always built naively.
pub fn levenshtein_graph<S : AsRef<[u8]>>(seqs : &[S], tau : usize, multiplicities : Option<&[usize]>) -> Result<SeqGraph, GraphError> {
    let builder = GraphBuilder::new(GraphParams::new(tau, DistanceMode::Levenshtein, false));
    builder.build_with(seqs, multiplicities, None)
} // end of levenshtein_graph



#[cfg(test)]
mod tests {

    use super::*;
    use crate::graph::seqgraph::AttrValue;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_check_threshold() {
        log_init_test();
        assert_eq!(check_threshold(3), Ok(3));
        assert!(matches!(check_threshold(-1), Err(GraphError::InvalidThreshold { tau : -1, .. })));
    }

    #[test]
    fn test_select_strategy() {
        log_init_test();
        let seqs = ["AAAA", "AAAT"];
        assert_eq!(select_strategy(&seqs, 1, DistanceMode::Hamming, false), Ok(Strategy::Partitioned));
        assert_eq!(select_strategy(&seqs, 3, DistanceMode::Hamming, false), Ok(Strategy::Partitioned));
        assert_eq!(select_strategy(&seqs, 4, DistanceMode::Hamming, false), Ok(Strategy::Naive));
        assert_eq!(select_strategy(&seqs, 1, DistanceMode::Hamming, true), Ok(Strategy::Naive));
        assert_eq!(select_strategy(&seqs, 1, DistanceMode::Levenshtein, false), Ok(Strategy::Naive));
        assert_eq!(select_strategy(&["AAA", "AA"], 1, DistanceMode::Levenshtein, false), Ok(Strategy::Naive));
        assert_eq!(select_strategy(&["AAA", "AA"], 1, DistanceMode::Hamming, true),
                Err(GraphError::InconsistentLengths { rank : 1, expected : 3, found : 2 }));
    }

    #[test]
    fn test_empty_input() {
        log_init_test();
        let seqs : Vec<Vec<u8>> = Vec::new();
        let g = hamming_graph(&seqs, 2, None, false).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.nb_edges(), 0);
        let g = levenshtein_graph(&seqs, 2, None).unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn test_side_lists_checked() {
        log_init_test();
        let res = hamming_graph(&["AC", "AG"], 1, Some(&[1][..]), false);
        assert_eq!(res.err(), Some(GraphError::MultiplicityCount { nb_seq : 2, found : 1 }));
        //
        let builder = GraphBuilder::new(GraphParams::default());
        let res = builder.build_with(&["AC", "AG"], None, Some(vec![Attributes::new()]));
        assert_eq!(res.err(), Some(GraphError::AttributeCount { nb_seq : 2, found : 1 }));
    }

    #[test]
    fn test_builder_with_attributes() {
        log_init_test();
        let mut attr = Attributes::new();
        attr.insert("cdr3".to_string(), AttrValue::Int(12));
        let builder = GraphBuilder::new(GraphParams::new(1, DistanceMode::Hamming, false));
        let g = builder.build_with(&["ACGT", "ACGA", "TTTT"], Some(&[3, 1, 2][..]), Some(vec![attr.clone(), Attributes::new(), Attributes::new()])).unwrap();
        assert_eq!(g.get_strategy(), Strategy::Partitioned);
        assert_eq!(g.get_vertex(0).unwrap().get_attributes(), &attr);
        assert_eq!(g.total_multiplicity(), 6);
        assert_eq!(g.edge_triples().collect::<Vec<_>>(), vec![(0, 1, 1)]);
    }

    #[test]
    fn test_forced_naive_same_graph() {
        log_init_test();
        let seqs = ["ACGTTG", "ACGTTA", "TCGTTG", "GGGTTA", "ACCATG"];
        for tau in 0..6 {
            let fast = hamming_graph(&seqs, tau, None, false).unwrap();
            let slow = hamming_graph(&seqs, tau, None, true).unwrap();
            assert_eq!(slow.get_strategy(), Strategy::Naive);
            assert_eq!(fast.get_edges(), slow.get_edges());
        }
    }

} // end of mod tests
