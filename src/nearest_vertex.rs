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

use crate::constants::{NodeId, Weight};
use crate::map_data::{Coordinates, Footway, Node};

/// The coordinates of all nodes that are referenced by at least one footway, in the order they
/// are first encountered when scanning the footways. Only these nodes can serve as the entry
/// point of a building into the footpath network.
pub struct FootwayNodes {
    nodes: Vec<Node>,
}

impl FootwayNodes {
    pub fn new(nodes: &[Node], footways: &[Footway]) -> Self {
        let coords: HashMap<NodeId, Coordinates> =
            nodes.iter().map(|n| (n.id, n.coords)).collect();
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for id in footways.iter().flat_map(|f| f.nodes.iter()) {
            if let Some(c) = coords.get(id) {
                if seen.insert(*id) {
                    result.push(Node::new(*id, *c));
                }
            }
        }
        FootwayNodes { nodes: result }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds the footway node closest to `target`. On ties the node encountered first wins.
    /// Nodes whose distance is NaN are never picked. Returns `None` if no node is left.
    pub fn nearest<D>(&self, target: &Coordinates, distance: D) -> Option<NodeId>
    where
        D: Fn(&Coordinates, &Coordinates) -> Weight,
    {
        let mut best: Option<(NodeId, Weight)> = None;
        for node in &self.nodes {
            let d = distance(&node.coords, target);
            if d.is_nan() {
                continue;
            }
            if best.map_or(true, |(_, w)| d < w) {
                best = Some((node.id, d));
            }
        }
        best.map(|(id, _)| id)
    }
}
