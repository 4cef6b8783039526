//! The graph handed to downstream clustering, and its assembly from builder output.
//!
//! Vertices are stored in input order, their index is their rank in the sequence list.
//! Edges are stored once, as (u, v, weight) with u < v, sorted by (u, v).
//! The graph is never modified after assembly.

use std::collections::BTreeMap;

use crate::errors::GraphError;
use crate::seq::DistanceMode;


/// A value attached to a vertex by the caller. It is stored, never interpreted.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Int(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

/// per vertex attributes, by name
pub type Attributes = BTreeMap<String, AttrValue>;


//=====================================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    /// rank in input
    index : usize,
    seq : Vec<u8>,
    /// number of reads collapsed in this vertex, at least 1
    multiplicity : usize,
    attributes : Attributes,
}


impl Vertex {
    pub fn get_index(&self) -> usize {
        self.index
    }

    pub fn get_sequence(&self) -> &[u8] {
        &self.seq
    }

    pub fn get_multiplicity(&self) -> usize {
        self.multiplicity
    }

    pub fn get_attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// attribute of name key if any
    pub fn get_attribute(&self, key : &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }
} // end of impl Vertex


//=====================================================================================

/// An undirected edge, stored with u < v.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub u : usize,
    pub v : usize,
    /// distance between sequences of u and v
    pub weight : usize,
}


impl Edge {
    /// orders the extremities so that u < v. a and b must differ.
    pub fn new(a : usize, b : usize, weight : usize) -> Self {
        debug_assert!(a != b, "no self loop in a sequence graph");
        Edge{ u : a.min(b), v : a.max(b), weight }
    }

    pub fn as_triple(&self) -> (usize, usize, usize) {
        (self.u, self.v, self.weight)
    }
} // end of impl Edge


/// The construction method that produced the edges
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// all pairs evaluated
    Naive,
    /// pigeonhole bucketing on tau+1 pieces, hamming only
    Partitioned,
}


//=====================================================================================


/// Undirected simple graph over sequences. For all pairs of vertices there is an edge
/// if and only if the distance between their sequences is less or equal to tau.
#[derive(Clone, Debug)]
pub struct SeqGraph {
    vertices : Vec<Vertex>,
    edges : Vec<Edge>,
    /// for each vertex, (neighbour, weight) sorted by neighbour
    adjacency : Vec<Vec<(usize, usize)>>,
    tau : usize,
    mode : DistanceMode,
    strategy : Strategy,
}


impl SeqGraph {

    pub fn nb_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn nb_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get_vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn get_vertex(&self, index : usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// edges sorted by (u,v), with u < v
    pub fn get_edges(&self) -> &[Edge] {
        &self.edges
    }

    /// iterator on (u, v, weight) triples
    pub fn edge_triples(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.edges.iter().map(|e| e.as_triple())
    }

    pub fn get_tau(&self) -> usize {
        self.tau
    }

    pub fn get_mode(&self) -> DistanceMode {
        self.mode
    }

    pub fn get_strategy(&self) -> Strategy {
        self.strategy
    }

    /// weight of edge {a,b} if it exists, in either order
    pub fn get_edge_weight(&self, a : usize, b : usize) -> Option<usize> {
        let (u, v) = (a.min(b), a.max(b));
        self.edges.binary_search_by(|e| (e.u, e.v).cmp(&(u, v))).ok().map(|rank| self.edges[rank].weight)
    }

    /// (neighbour, weight) of vertex v, sorted by neighbour
    pub fn neighbours(&self, v : usize) -> &[(usize, usize)] {
        self.adjacency.get(v).map(|n| n.as_slice()).unwrap_or(&[])
    }

    pub fn degree(&self, v : usize) -> usize {
        self.neighbours(v).len()
    }

    /// sum of vertices multiplicities, i.e. number of reads before deduplication
    pub fn total_multiplicity(&self) -> usize {
        self.vertices.iter().map(|v| v.multiplicity).sum()
    }

    /// Connected components as sorted lists of vertex indices, ordered by their smallest vertex.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let nb_vertices = self.vertices.len();
        let mut seen = vec![false; nb_vertices];
        let mut components = Vec::<Vec<usize>>::new();
        let mut stack = Vec::<usize>::new();
        for start in 0..nb_vertices {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            stack.push(start);
            let mut component = Vec::<usize>::new();
            while let Some(v) = stack.pop() {
                component.push(v);
                for &(n, _) in &self.adjacency[v] {
                    if !seen[n] {
                        seen[n] = true;
                        stack.push(n);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        log::debug!("connected_components : nb vertices {}, nb components {}", nb_vertices, components.len());
        components
    } // end of connected_components

}  // end of impl SeqGraph


//=====================================================================================

// checks multiplicities and attribute lists are parallel to sequences, before any builder runs.
pub(crate) fn check_side_lists(nb_seq : usize, multiplicities : Option<&[usize]>, attributes : Option<&[Attributes]>) -> Result<(), GraphError> {
    if let Some(mult) = multiplicities {
        if mult.len() != nb_seq {
            return Err(GraphError::MultiplicityCount { nb_seq, found : mult.len() });
        }
        if let Some(rank) = mult.iter().position(|&m| m == 0) {
            return Err(GraphError::InvalidMultiplicity { rank });
        }
    }
    if let Some(attr) = attributes {
        if attr.len() != nb_seq {
            return Err(GraphError::AttributeCount { nb_seq, found : attr.len() });
        }
    }
    Ok(())
} // end of check_side_lists



/// Merges sequences and their metadata with the edges produced by a builder.
/// Side lists must have been checked with check_side_lists.
pub(crate) fn assemble<S : AsRef<[u8]>>(seqs : &[S], multiplicities : Option<&[usize]>, attributes : Option<Vec<Attributes>>,
                    mut edges : Vec<Edge>, tau : usize, mode : DistanceMode, strategy : Strategy) -> SeqGraph {
    //
    let mut attributes = attributes.map(|a| a.into_iter());
    let vertices : Vec<Vertex> = seqs.iter().enumerate().map(|(index, s)| {
        Vertex {
            index,
            seq : s.as_ref().to_vec(),
            multiplicity : multiplicities.map_or(1, |m| m[index]),
            attributes : attributes.as_mut().and_then(|it| it.next()).unwrap_or_default(),
        }
    }).collect();
    //
    edges.sort_unstable();
    edges.dedup_by_key(|e| (e.u, e.v));
    let mut adjacency = vec![Vec::<(usize, usize)>::new(); vertices.len()];
    for e in &edges {
        adjacency[e.u].push((e.v, e.weight));
        adjacency[e.v].push((e.u, e.weight));
    }
    for n in adjacency.iter_mut() {
        n.sort_unstable();
    }
    log::debug!("assemble : nb vertices {}, nb edges {}, strategy {:?}", vertices.len(), edges.len(), strategy);
    //
    SeqGraph{ vertices, edges, adjacency, tau, mode, strategy }
} // end of assemble



// end of mod tests
