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

use crate::constants::{NodeId, Weight};
use crate::graph::Graph;
use crate::map_data::{Coordinates, Footway, Node};

pub struct GraphBuilder;

impl GraphBuilder {
    /// Adds one vertex per node and connects every two consecutive nodes of each footway in both
    /// directions, using `distance` between their coordinates as weight.
    pub fn build<D>(nodes: &[Node], footways: &[Footway], distance: D) -> Graph<NodeId>
    where
        D: Fn(&Coordinates, &Coordinates) -> Weight,
    {
        let mut graph = Graph::new();
        let mut coords: HashMap<NodeId, Coordinates> = HashMap::with_capacity(nodes.len());
        for node in nodes {
            graph.add_vertex(node.id);
            coords.insert(node.id, node.coords);
        }
        let mut num_skipped = 0;
        for footway in footways {
            for pair in footway.nodes.windows(2) {
                let (from, to) = (pair[0], pair[1]);
                let (c1, c2) = match (coords.get(&from), coords.get(&to)) {
                    (Some(c1), Some(c2)) => (c1, c2),
                    _ => {
                        num_skipped += 1;
                        continue;
                    }
                };
                let weight = distance(c1, c2);
                graph.add_edge(from, to, weight);
                graph.add_edge(to, from, weight);
            }
        }
        if num_skipped > 0 {
            warn!(
                "There were {} footway segments referencing unknown nodes, they were skipped",
                num_skipped
            );
        }
        info!(
            "built graph with {} vertices and {} edges from {} footways",
            graph.vertex_count(),
            graph.edge_count(),
            footways.len()
        );
        graph
    }
}
