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

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::constants::{Weight, WEIGHT_MAX};
use crate::error::{Error, Result};
use crate::shortest_path::ShortestPath;

/// The result of a single-source shortest path search: the minimal distance from the source
/// and the preceding vertex on a shortest path, for every vertex of the graph. Vertices that
/// were not reached have an infinite distance and no predecessor, just like the source itself
/// has no predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V> {
    source: V,
    distances: HashMap<V, Weight>,
    predecessors: HashMap<V, Option<V>>,
}

impl<V: Eq + Hash + Clone + Debug> ShortestPathTree<V> {
    pub(crate) fn new(
        source: V,
        distances: HashMap<V, Weight>,
        predecessors: HashMap<V, Option<V>>,
    ) -> Self {
        ShortestPathTree {
            source,
            distances,
            predecessors,
        }
    }

    pub fn get_source(&self) -> &V {
        &self.source
    }

    /// Returns `WEIGHT_MAX` for unreached vertices and `None` for vertices that are not part
    /// of the searched graph.
    pub fn get_distance(&self, v: &V) -> Option<Weight> {
        self.distances.get(v).copied()
    }

    pub fn get_predecessor(&self, v: &V) -> Option<&V> {
        self.predecessors.get(v).and_then(|p| p.as_ref())
    }

    pub fn is_reachable(&self, v: &V) -> bool {
        self.get_distance(v).map_or(false, |d| d < WEIGHT_MAX)
    }

    pub fn distances(&self) -> &HashMap<V, Weight> {
        &self.distances
    }

    pub fn predecessors(&self) -> &HashMap<V, Option<V>> {
        &self.predecessors
    }

    /// Follows the predecessors from `destination` back to the source and returns the path in
    /// forward order. The destination must have been reached by the search.
    pub fn reconstruct_path(&self, destination: &V) -> Result<ShortestPath<V>> {
        let weight = self
            .get_distance(destination)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", destination)))?;
        if weight == WEIGHT_MAX {
            return Err(Error::Unreachable(format!("{:?}", destination)));
        }
        let mut path = vec![destination.clone()];
        let mut node = destination;
        while let Some(parent) = self.get_predecessor(node) {
            path.push(parent.clone());
            node = parent;
        }
        path.reverse();
        Ok(ShortestPath::new(
            self.source.clone(),
            destination.clone(),
            weight,
            path,
        ))
    }
}
