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

use crate::constants::Weight;
use crate::constants::WEIGHT_ZERO;

#[derive(Debug, Clone)]
pub struct ShortestPath<V> {
    source: V,
    target: V,
    weight: Weight,
    nodes: Vec<V>,
}

impl<V: PartialEq> PartialEq for ShortestPath<V> {
    fn eq(&self, other: &ShortestPath<V>) -> bool {
        self.source == other.source && self.target == other.target && self.weight == other.weight
        // do not insist on equal nodes arrays, because there can be unambiguous shortest paths
    }
}

impl<V: Clone> ShortestPath<V> {
    pub fn new(source: V, target: V, weight: Weight, nodes: Vec<V>) -> Self {
        ShortestPath {
            source,
            target,
            weight,
            nodes,
        }
    }

    pub fn singular(node: V) -> Self {
        ShortestPath {
            source: node.clone(),
            target: node.clone(),
            weight: WEIGHT_ZERO,
            nodes: vec![node],
        }
    }

    pub fn get_source(&self) -> &V {
        &self.source
    }

    pub fn get_target(&self) -> &V {
        &self.target
    }

    pub fn get_weight(&self) -> Weight {
        self.weight
    }

    pub fn get_nodes(&self) -> &Vec<V> {
        &self.nodes
    }
}
