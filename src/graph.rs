/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use std::collections::{HashMap, HashSet};
use std::convert::TryFrom;
use std::fmt;
use std::hash::Hash;

#[cfg(test)]
use rand::rngs::StdRng;
#[cfg(test)]
use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::error::Error;

/// A weighted directed graph keyed by arbitrary vertex identifiers. Vertices are enumerated in
/// insertion order, and an edge can only be added between vertices that already exist.
/// Deserialized graphs are rebuilt vertex by vertex and edge by edge, so they obey the same rules.
#[derive(Serialize, Deserialize, Clone)]
#[serde(
    bound(
        serialize = "V: Serialize + Eq + Hash",
        deserialize = "V: Deserialize<'de> + Eq + Hash + Clone + fmt::Debug"
    ),
    try_from = "RawGraph<V>"
)]
pub struct Graph<V> {
    vertices: Vec<V>,
    adjacency: HashMap<V, HashMap<V, Weight>>,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Returns false and leaves the graph untouched if `v` is already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v.clone(), HashMap::new());
        self.vertices.push(v);
        true
    }

    /// Inserts or overwrites the directed edge `from -> to`. Returns false if either endpoint
    /// is missing or if the weight is not a finite, non-negative number.
    pub fn add_edge(&mut self, from: V, to: V, weight: Weight) -> bool {
        if !self.adjacency.contains_key(&to) {
            return false;
        }
        if !weight.is_finite() || weight < 0.0 {
            warn!(
                "Only finite non-negative weights are allowed. Skipped edge with weight: {}",
                weight
            );
            return false;
        }
        match self.adjacency.get_mut(&from) {
            Some(edges) => {
                edges.insert(to, weight);
                true
            }
            None => false,
        }
    }

    pub fn get_weight(&self, from: &V, to: &V) -> Option<Weight> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
    }

    pub fn neighbors(&self, v: &V) -> HashSet<V> {
        self.out_edges(v).map(|(adj, _)| adj.clone()).collect()
    }

    /// Iterates the outgoing edges of `v` as `(neighbor, weight)` pairs, nothing for unknown
    /// vertices.
    pub fn out_edges<'a>(&'a self, v: &V) -> impl Iterator<Item = (&'a V, Weight)> + 'a {
        self.adjacency
            .get(v)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(adj, weight)| (adj, *weight)))
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }
}

#[cfg(test)]
impl Graph<usize> {
    /// Builds a random graph, mostly used for testing purposes. Weights are whole numbers so
    /// that sums of them are exact.
    pub fn random(rng: &mut StdRng, num_nodes: usize, mean_degree: f32) -> Self {
        let num_edges = (mean_degree * num_nodes as f32) as usize;
        let mut result = Graph::new();
        for v in 0..num_nodes {
            result.add_vertex(v);
        }
        for _ in 0..num_edges {
            let from = rng.gen_range(0, num_nodes);
            let to = rng.gen_range(0, num_nodes);
            // overwrites, loops and zero weights are allowed on purpose
            let weight = rng.gen_range(0, 100) as Weight;
            result.add_edge(from, to, weight);
        }
        result
    }
}

/// The serialized form of a `Graph`, not validated yet
#[derive(Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de> + Eq + Hash"))]
struct RawGraph<V> {
    vertices: Vec<V>,
    adjacency: HashMap<V, HashMap<V, Weight>>,
}

impl<V: Eq + Hash + Clone + fmt::Debug> TryFrom<RawGraph<V>> for Graph<V> {
    type Error = Error;

    fn try_from(raw: RawGraph<V>) -> Result<Self, Self::Error> {
        let mut graph = Graph::new();
        for v in raw.vertices {
            if !graph.add_vertex(v.clone()) {
                return Err(Error::InvalidGraph(format!("duplicate vertex {:?}", v)));
            }
        }
        for (from, edges) in raw.adjacency {
            for (to, weight) in edges {
                if !graph.add_edge(from.clone(), to.clone(), weight) {
                    return Err(Error::InvalidGraph(format!(
                        "invalid edge {:?} -> {:?} with weight {}",
                        from, to, weight
                    )));
                }
            }
        }
        Ok(graph)
    }
}

impl<V: Eq + Hash + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone + fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "num vertices: {}", self.vertex_count())?;
        writeln!(f, "num edges: {}", self.edge_count())?;
        writeln!(f, "vertices:")?;
        for v in &self.vertices {
            writeln!(f, " {}", v)?;
        }
        writeln!(f, "edges:")?;
        for v in &self.vertices {
            write!(f, " row {}:", v)?;
            for (adj, weight) in self.out_edges(v) {
                write!(f, " ({},{})", adj, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V: Eq + Hash + Clone + fmt::Debug> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in &self.vertices {
            for (adj, weight) in self.out_edges(v) {
                writeln!(f, "g.add_edge({:?}, {:?}, {:?});", v, adj, weight)?;
            }
        }
        Ok(())
    }
}
