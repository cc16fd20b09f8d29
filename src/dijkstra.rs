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

use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::constants::{Weight, WEIGHT_MAX, WEIGHT_ZERO};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::heap_item::HeapItem;
use crate::shortest_path::ShortestPath;
use crate::shortest_path_tree::ShortestPathTree;

/// Single-source shortest path search. The heap and the set of settled vertices are kept
/// between runs so allocations can be re-used when running many searches in a row.
///
/// There is no decrease-key operation: an improved vertex is pushed again and the outdated
/// heap items are skipped once they are popped.
pub struct Dijkstra<V> {
    heap: BinaryHeap<HeapItem<V>>,
    settled: HashSet<V>,
}

impl<V: Eq + Hash + Clone + Debug> Dijkstra<V> {
    pub fn new() -> Self {
        Dijkstra {
            heap: BinaryHeap::new(),
            settled: HashSet::new(),
        }
    }

    /// Calculates the distances and predecessors of all vertices of `graph` with respect to
    /// `source`.
    pub fn calc_tree(&mut self, graph: &Graph<V>, source: &V) -> Result<ShortestPathTree<V>> {
        if !graph.contains_vertex(source) {
            return Err(Error::UnknownVertex(format!("{:?}", source)));
        }
        self.heap.clear();
        self.settled.clear();

        let mut distances: HashMap<V, Weight> = HashMap::with_capacity(graph.vertex_count());
        let mut predecessors: HashMap<V, Option<V>> =
            HashMap::with_capacity(graph.vertex_count());
        for v in graph.vertices() {
            distances.insert(v.clone(), WEIGHT_MAX);
            predecessors.insert(v.clone(), None);
            self.heap.push(HeapItem::new(WEIGHT_MAX, v.clone()));
        }
        distances.insert(source.clone(), WEIGHT_ZERO);
        self.heap.push(HeapItem::new(WEIGHT_ZERO, source.clone()));

        while let Some(curr) = self.heap.pop() {
            if curr.weight == WEIGHT_MAX {
                // everything that is left in the heap is unreachable
                break;
            }
            if !self.settled.insert(curr.vertex.clone()) {
                continue;
            }
            for (adj, edge_weight) in graph.out_edges(&curr.vertex) {
                let weight = curr.weight + edge_weight;
                let adj_weight = distances.get(adj).copied().unwrap_or(WEIGHT_MAX);
                if weight < adj_weight {
                    distances.insert(adj.clone(), weight);
                    predecessors.insert(adj.clone(), Some(curr.vertex.clone()));
                    self.heap.push(HeapItem::new(weight, adj.clone()));
                }
            }
        }
        Ok(ShortestPathTree::new(
            source.clone(),
            distances,
            predecessors,
        ))
    }

    /// Returns `None` if there is no path from `start` to `end`.
    pub fn calc_path(
        &mut self,
        graph: &Graph<V>,
        start: &V,
        end: &V,
    ) -> Result<Option<ShortestPath<V>>> {
        if !graph.contains_vertex(end) {
            return Err(Error::UnknownVertex(format!("{:?}", end)));
        }
        let tree = self.calc_tree(graph, start)?;
        if !tree.is_reachable(end) {
            return Ok(None);
        }
        tree.reconstruct_path(end).map(Some)
    }
}

impl<V: Eq + Hash + Clone + Debug> Default for Dijkstra<V> {
    fn default() -> Self {
        Self::new()
    }
}
