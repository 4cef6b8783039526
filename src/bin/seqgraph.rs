//! seqgraph --file (-f) seqfile [--tau (-t) tau] [--levenshtein] [--naive] [--dedup] [--dump dir] [clean ...]
//!
//! --file : a text file with one sequence by line. Blank lines are skipped, surrounding blanks are trimmed.
//!
//! --tau : maximal distance between sequences joined by an edge. Defaults to 1.
//!
//! --levenshtein : use edit distance. Default is hamming distance, requiring sequences of equal length.
//!
//! --naive : force the all pairs construction even when the partitioned construction applies.
//!
//! --dedup : collapse identical sequences in one vertex with a multiplicity.
//!
//! --dump : directory where parameters are dumped in json.
//!
//! The subcommand clean runs barcode cleaning instead of printing the graph:
//! **seqgraph -f seqfile clean [--min-size m] [--max-tau t]**
//! sequences seen less than m times are discarded, then close sequences for distances 1..t are discarded
//! in favour of their most abundant neighbour. Kept sequences are printed with their count.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};

use seqgraph::prelude::*;


// reads one sequence by line. Lines are kept as bytes, no utf-8 decoding is done.
fn read_sequences(filename : &str) -> anyhow::Result<Vec<Vec<u8>>> {
    let file = File::open(filename).with_context(|| format!("could not open sequence file {}", filename))?;
    let seqs = read_sequences_from(BufReader::new(file), filename)?;
    log::info!("read {} sequences from {}", seqs.len(), filename);
    Ok(seqs)
} // end of read_sequences


fn read_sequences_from<R : BufRead>(reader : R, name : &str) -> anyhow::Result<Vec<Vec<u8>>> {
    let mut seqs = Vec::<Vec<u8>>::new();
    for line in reader.split(b'\n') {
        let line = line.with_context(|| format!("read error in {}", name))?;
        let trimmed = line.trim_ascii();
        if !trimmed.is_empty() {
            seqs.push(trimmed.to_vec());
        }
    }
    Ok(seqs)
} // end of read_sequences_from



fn parse_graph_params(matches : &ArgMatches) -> anyhow::Result<GraphParams> {
    log::debug!("in parse_graph_params");
    //
    let tau = check_threshold(*matches.get_one::<i64>("tau").unwrap_or(&1))?;
    let mode = if matches.get_flag("levenshtein") { DistanceMode::Levenshtein } else { DistanceMode::Hamming };
    let params = GraphParams::new(tau, mode, matches.get_flag("naive"));
    log::info!("got GraphParams : {:?}", params);
    //
    Ok(params)
} // end of parse_graph_params



fn run_clean(seqs : &[Vec<u8>], clean_match : &ArgMatches) -> anyhow::Result<()> {
    let min_size = *clean_match.get_one::<usize>("min_size").unwrap_or(&0);
    let max_tau = *clean_match.get_one::<usize>("max_tau").unwrap_or(&3);
    let params = CleanerParams::new(min_size, max_tau);
    //
    let (barcodes, counts) = count_multiplicity(seqs);
    println!("{} reads, {} unique barcodes", seqs.len(), barcodes.len());
    let cleaned = clean_barcodes(&barcodes, &counts, &params)?;
    println!("barcodes kept : {}, discarded : {}", cleaned.kept.len(), cleaned.discarded.len());
    for &i in &cleaned.kept {
        println!("{}\t{}", String::from_utf8_lossy(&barcodes[i]), counts[i]);
    }
    Ok(())
} // end of run_clean



fn run_graph(seqs : Vec<Vec<u8>>, params : GraphParams, dedup : bool) -> anyhow::Result<()> {
    let (seqs, multiplicity) = if dedup {
        let (uniques, multiplicity) = count_multiplicity(&seqs);
        (uniques, Some(multiplicity))
    } else {
        (seqs, None)
    };
    let builder = GraphBuilder::new(params);
    let graph = builder.build_with(&seqs, multiplicity.as_deref(), None)?;
    //
    println!("nb vertices : {}, nb edges : {}, strategy : {:?}, total multiplicity : {}",
            graph.nb_vertices(), graph.nb_edges(), graph.get_strategy(), graph.total_multiplicity());
    println!("nb connected components : {}", graph.connected_components().len());
    for (u, v, w) in graph.edge_triples() {
        println!("{}\t{}\t{}", u, v, w);
    }
    Ok(())
} // end of run_graph



fn main() -> anyhow::Result<()> {
    //
    println!("\n ************** initializing logger *****************\n");
    env_logger::Builder::from_default_env().init();
    log::info!("logger initialized from default environment");
    //
    let clean_cmd = Command::new("clean")
        .about("Discard rare barcodes and barcodes close to a more abundant one")
        .arg(
            Arg::new("min_size")
                .long("min-size")
                .short('m')
                .required(false)
                .default_value("0")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("minimal number of reads of a barcode"),
        )
        .arg(
            Arg::new("max_tau")
                .long("max-tau")
                .required(false)
                .default_value("3")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("close barcodes are discarded for distances 1..max_tau"),
        );
    //
    // global command
    // =============
    //
    let matches = Command::new("seqgraph")
        .about("Hamming or Levenshtein graph of sequences")
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .required(true)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("file with one sequence by line"),
        )
        .arg(
            Arg::new("tau")
                .long("tau")
                .short('t')
                .required(false)
                .default_value("1")
                .allow_negative_numbers(true)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(i64))
                .help("maximal distance of adjacent sequences"),
        )
        .arg(
            Arg::new("levenshtein")
                .long("levenshtein")
                .action(ArgAction::SetTrue)
                .help("use edit distance instead of hamming distance"),
        )
        .arg(
            Arg::new("naive")
                .long("naive")
                .action(ArgAction::SetTrue)
                .help("force all pairs construction"),
        )
        .arg(
            Arg::new("dedup")
                .long("dedup")
                .action(ArgAction::SetTrue)
                .help("collapse identical sequences"),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .required(false)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("directory where parameters are dumped"),
        )
        .subcommand(clean_cmd)
        .get_matches();
    //
    let filename = matches.get_one::<String>("file").context("file argument needed")?;
    let seqs = read_sequences(filename)?;
    //
    if let Some(clean_match) = matches.subcommand_matches("clean") {
        log::debug!("subcommand clean");
        return run_clean(&seqs, clean_match);
    }
    //
    let params = parse_graph_params(&matches)?;
    if let Some(dumpdir) = matches.get_one::<String>("dump") {
        params.dump_json(Path::new(dumpdir))?;
    }
    let res = run_graph(seqs, params, matches.get_flag("dedup"));
    if let Err(e) = &res {
        log::error!("graph construction failed : {}", e);
    }
    res
} // end of main



#[cfg(test)]
mod tests {

    use super::*;
    use std::io::Cursor;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_read_non_utf8() {
        log_init_test();
        let input : &[u8] = b"AC\xffG\n\n  TTTT \r\nGG\x80";
        let seqs = read_sequences_from(Cursor::new(input), "memory").unwrap();
        assert_eq!(seqs, vec![b"AC\xffG".to_vec(), b"TTTT".to_vec(), b"GG\x80".to_vec()]);
    }

} // end of mod tests
