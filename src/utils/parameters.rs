//! structures related to construction parameters.
//!
//! Parameters can be dumped in json so that a graph can be rebuilt with the same values.

use std::fs::OpenOptions;
use std::path::Path;
use std::io::{BufReader, BufWriter, Write};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::to_writer;

use crate::seq::DistanceMode;


const GRAPH_PARAMS_FILE : &str = "graph_params.json";

const CLEANER_PARAMS_FILE : &str = "cleaner_params.json";


/// Gathers parameters of a graph construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphParams {
    /// maximal distance between sequences of adjacent vertices
    tau : usize,
    /// distance used
    mode : DistanceMode,
    /// set to true to skip partitioned construction even when it applies
    force_naive : bool,
}  // end of GraphParams


impl Default for GraphParams {
    fn default() -> Self {
        GraphParams{ tau : 1, mode : DistanceMode::Hamming, force_naive : false }
    }
}


impl GraphParams {

    pub fn new(tau : usize, mode : DistanceMode, force_naive : bool) -> Self {
        GraphParams{ tau, mode, force_naive }
    }

    pub fn get_tau(&self) -> usize {
        self.tau
    }

    pub fn get_mode(&self) -> DistanceMode {
        self.mode
    }

    pub fn get_force_naive(&self) -> bool {
        self.force_naive
    }

    /// dumps parameters in file graph_params.json in directory dirpath
    pub fn dump_json(&self, dirpath : &Path) -> anyhow::Result<()> {
        let filepath = dirpath.join(GRAPH_PARAMS_FILE);
        log::info!("dumping GraphParams in json file : {:?}", filepath);
        dump_json_file(&filepath, self)
    } // end of dump_json


    /// reload from a json dump made by dump_json in directory dirpath
    pub fn reload_json(dirpath : &Path) -> anyhow::Result<Self> {
        let filepath = dirpath.join(GRAPH_PARAMS_FILE);
        log::info!("reloading GraphParams from json file : {:?}", filepath);
        let params : GraphParams = reload_json_file(&filepath)?;
        log::info!("GraphParams reloaded, tau : {}, mode : {:?}", params.tau, params.mode);
        Ok(params)
    } // end of reload_json

} // end of impl GraphParams


//=====================================================================================

/// Parameters of close barcode cleaning
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerParams {
    /// sequences seen less than min_size times are discarded
    min_size : usize,
    /// close sequences are discarded for distances 1..max_tau
    max_tau : usize,
}


impl Default for CleanerParams {
    fn default() -> Self {
        CleanerParams{ min_size : 0, max_tau : 3 }
    }
}


impl CleanerParams {
    pub fn new(min_size : usize, max_tau : usize) -> Self {
        CleanerParams{ min_size, max_tau }
    }

    pub fn get_min_size(&self) -> usize {
        self.min_size
    }

    pub fn get_max_tau(&self) -> usize {
        self.max_tau
    }

    pub fn dump_json(&self, dirpath : &Path) -> anyhow::Result<()> {
        let filepath = dirpath.join(CLEANER_PARAMS_FILE);
        log::info!("dumping CleanerParams in json file : {:?}", filepath);
        dump_json_file(&filepath, self)
    }

    pub fn reload_json(dirpath : &Path) -> anyhow::Result<Self> {
        reload_json_file(&dirpath.join(CLEANER_PARAMS_FILE))
    }
} // end of impl CleanerParams


//=====================================================================================


fn dump_json_file<T : Serialize>(filepath : &Path, value : &T) -> anyhow::Result<()> {
    let file = OpenOptions::new().write(true).create(true).truncate(true).open(filepath)
        .map_err(|e| {
            log::error!("dump could not open file {:?}", filepath.as_os_str());
            e
        })
        .with_context(|| format!("could not open file {:?} for dump", filepath))?;
    let mut writer = BufWriter::new(file);
    to_writer(&mut writer, value).with_context(|| format!("json dump in {:?} failed", filepath))?;
    // a write error on the buffered tail is only seen here, drop would ignore it
    writer.flush().with_context(|| format!("json dump in {:?} failed on flush", filepath))?;
    Ok(())
} // end of dump_json_file


fn reload_json_file<T : serde::de::DeserializeOwned>(filepath : &Path) -> anyhow::Result<T> {
    let file = OpenOptions::new().read(true).open(filepath)
        .map_err(|e| {
            log::error!("reload could not open file {:?}", filepath.as_os_str());
            e
        })
        .with_context(|| format!("could not open file {:?} for reload", filepath))?;
    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| format!("json reload from {:?} failed", filepath))?;
    Ok(value)
} // end of reload_json_file



// end of mod tests
