//! Graph construction scenarios and properties shared by both builders.

use seqgraph::prelude::*;

use rand::{Rng, SeedableRng, rngs::StdRng};


fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}


fn random_reads(rng : &mut StdRng, nb : usize, len : usize, alphabet : &[u8]) -> Vec<Vec<u8>> {
    (0..nb).map(|_| (0..len).map(|_| alphabet[rng.random_range(0..alphabet.len())]).collect()).collect()
}


// checks completeness, absence of loops and canonical order against exact distances
fn check_complete(graph : &SeqGraph, seqs : &[Vec<u8>], tau : usize, mode : DistanceMode) {
    for e in graph.get_edges() {
        assert!(e.u < e.v);
        assert!(e.weight <= tau);
    }
    for i in 0..seqs.len() {
        for j in (i + 1)..seqs.len() {
            let d = mode.distance(&seqs[i], &seqs[j]).unwrap();
            if d <= tau {
                assert_eq!(graph.get_edge_weight(i, j), Some(d), "pair ({},{})", i, j);
                assert_eq!(graph.get_edge_weight(j, i), Some(d));
            }
            else {
                assert_eq!(graph.get_edge_weight(i, j), None, "pair ({},{})", i, j);
            }
        }
    }
}


#[test]
fn scenario_a_one_edge() {
    log_init_test();
    let g = hamming_graph(&["AAAA", "AAAT", "TTTT"], 1, None, false).unwrap();
    assert_eq!(g.get_strategy(), Strategy::Partitioned);
    assert_eq!(g.edge_triples().collect::<Vec<_>>(), vec![(0, 1, 1)]);
}


#[test]
fn scenario_b_no_edge() {
    log_init_test();
    let g = hamming_graph(&["AAAA", "AAAT", "TTTT"], 0, None, false).unwrap();
    assert_eq!(g.nb_vertices(), 3);
    assert_eq!(g.nb_edges(), 0);
}


#[test]
fn scenario_c_dedup_first() {
    log_init_test();
    let reads = ["AAAA", "AAAA", "AAAT"];
    let (uniques, mult) = count_multiplicity(&reads);
    assert_eq!(uniques, vec![b"AAAA".to_vec(), b"AAAT".to_vec()]);
    assert_eq!(mult, vec![2, 1]);
    let g = hamming_graph(&uniques, 1, Some(mult.as_slice()), false).unwrap();
    assert_eq!(g.edge_triples().collect::<Vec<_>>(), vec![(0, 1, 1)]);
    assert_eq!(g.total_multiplicity(), reads.len());
    assert_eq!(g.get_vertex(0).unwrap().get_multiplicity(), 2);
}


#[test]
fn scenario_d_fallback_to_naive() {
    log_init_test();
    let seqs : Vec<Vec<u8>> = ["ACG", "TTT", "ACC", "GGG"].iter().map(|s| s.as_bytes().to_vec()).collect();
    let g = hamming_graph(&seqs, 5, None, false).unwrap();
    assert_eq!(g.get_strategy(), Strategy::Naive);
    // every pair is within distance 3 <= 5
    assert_eq!(g.nb_edges(), 6);
    check_complete(&g, &seqs, 5, DistanceMode::Hamming);
    // calling the partitioned builder directly is refused
    assert!(matches!(partitioned_edges(&seqs, 5), Err(GraphError::InvalidThreshold { .. })));
}


#[test]
fn scenario_e_levenshtein() {
    log_init_test();
    let g = levenshtein_graph(&["AAA", "AA"], 1, None).unwrap();
    assert_eq!(g.get_strategy(), Strategy::Naive);
    assert_eq!(g.edge_triples().collect::<Vec<_>>(), vec![(0, 1, 1)]);
}


#[test]
fn hamming_on_uneven_lengths_fails() {
    log_init_test();
    let res = hamming_graph(&["AAA", "AAAA"], 1, None, false);
    assert!(matches!(res, Err(GraphError::InconsistentLengths { .. })));
}


#[test]
fn equivalence_and_completeness_random() {
    log_init_test();
    let mut rng = StdRng::seed_from_u64(1789);
    // small alphabet and short reads so that many pairs are close
    for len in [4usize, 8, 13] {
        let seqs = random_reads(&mut rng, 120, len, b"AC");
        for tau in 0..=len {
            let fast = hamming_graph(&seqs, tau, None, false).unwrap();
            let slow = hamming_graph(&seqs, tau, None, true).unwrap();
            assert_eq!(fast.get_edges(), slow.get_edges(), "len {} tau {}", len, tau);
            check_complete(&fast, &seqs, tau, DistanceMode::Hamming);
        }
    }
}


#[test]
fn levenshtein_completeness_random() {
    log_init_test();
    let mut rng = StdRng::seed_from_u64(2024);
    let seqs : Vec<Vec<u8>> = (0..60).map(|_| {
        let len = rng.random_range(3..8);
        random_reads(&mut rng, 1, len, b"ACGT").remove(0)
    }).collect();
    for tau in 0..4 {
        let g = levenshtein_graph(&seqs, tau, None).unwrap();
        check_complete(&g, &seqs, tau, DistanceMode::Levenshtein);
    }
}


#[test]
fn deterministic_and_symmetric() {
    log_init_test();
    let mut rng = StdRng::seed_from_u64(7);
    let seqs = random_reads(&mut rng, 200, 10, b"ACGT");
    let g1 = hamming_graph(&seqs, 3, None, false).unwrap();
    let g2 = hamming_graph(&seqs, 3, None, false).unwrap();
    assert_eq!(g1.get_edges(), g2.get_edges());
    for v in 0..g1.nb_vertices() {
        for &(n, w) in g1.neighbours(v) {
            assert_ne!(n, v);
            assert!(g1.neighbours(n).contains(&(v, w)));
        }
    }
}


#[test]
fn components_of_dedup_graph() {
    log_init_test();
    let reads = ["ACGT", "ACGA", "ACGT", "TTTT", "TTTA", "GGGG"];
    let (uniques, mult) = count_multiplicity(&reads);
    let g = hamming_graph(&uniques, 1, Some(mult.as_slice()), false).unwrap();
    assert_eq!(g.connected_components(), vec![vec![0, 1], vec![2, 3], vec![4]]);
    assert_eq!(g.total_multiplicity(), 6);
}
