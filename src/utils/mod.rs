//! contains parameters of graph construction and cleaning

pub mod parameters;

pub use parameters::*;
