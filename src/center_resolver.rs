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

use std::collections::HashSet;

use crate::constants::{NodeId, Weight};
use crate::dijkstra::Dijkstra;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::map_data::{Building, CampusMap, Coordinates};
use crate::nearest_vertex::FootwayNodes;
use crate::shortest_path::ShortestPath;

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingPoint {
    pub destination: Building,
    /// the footway node closest to the destination building
    pub destination_vertex: NodeId,
    pub start_vertex1: NodeId,
    pub start_vertex2: NodeId,
    pub path1: ShortestPath<NodeId>,
    pub path2: ShortestPath<NodeId>,
    /// abbreviations of the closer buildings that were skipped, in the order they were tried
    pub excluded: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MeetingOutcome {
    Success(MeetingPoint),
    /// the two start vertices are not connected at all
    GloballyUnreachable { start1: NodeId, start2: NodeId },
    /// every building was unreachable from at least one of the start vertices
    NoCandidateRemaining { excluded: Vec<String> },
}

/// Finds the building closest to the middle of two start buildings that can be reached by
/// both pedestrians.
pub struct CenterResolver<'a, D, M> {
    graph: &'a Graph<NodeId>,
    buildings: &'a [Building],
    footway_nodes: FootwayNodes,
    distance: D,
    midpoint: M,
    dijkstra: Dijkstra<NodeId>,
}

impl<'a, D, M> CenterResolver<'a, D, M>
where
    D: Fn(&Coordinates, &Coordinates) -> Weight,
    M: Fn(&Coordinates, &Coordinates) -> Coordinates,
{
    pub fn new(graph: &'a Graph<NodeId>, map: &'a CampusMap, distance: D, midpoint: M) -> Self {
        CenterResolver {
            graph,
            buildings: &map.buildings,
            footway_nodes: FootwayNodes::new(&map.nodes, &map.footways),
            distance,
            midpoint,
            dijkstra: Dijkstra::new(),
        }
    }

    /// Runs one resolution session. The start buildings do not need to be part of the map's
    /// buildings, but their nearest footway nodes must be vertices of the graph.
    pub fn resolve(&mut self, start1: &Building, start2: &Building) -> Result<MeetingOutcome> {
        let mid = (self.midpoint)(&start1.coords, &start2.coords);
        let start_vertex1 = self.nearest_vertex(start1)?;
        let start_vertex2 = self.nearest_vertex(start2)?;
        debug!(
            "start vertices: {} ({}), {} ({})",
            start_vertex1, start1.abbrev, start_vertex2, start2.abbrev
        );

        let tree1 = self.dijkstra.calc_tree(self.graph, &start_vertex1)?;
        if !tree1.is_reachable(&start_vertex2) {
            info!(
                "{} cannot be reached from {}, no meeting point possible",
                start2.abbrev, start1.abbrev
            );
            return Ok(MeetingOutcome::GloballyUnreachable {
                start1: start_vertex1,
                start2: start_vertex2,
            });
        }
        let tree2 = self.dijkstra.calc_tree(self.graph, &start_vertex2)?;

        let mut session = Session::default();
        while let Some(candidate) = self.next_candidate(&mid, &session) {
            let vertex = self.nearest_vertex(candidate)?;
            debug!("trying {} at vertex {}", candidate.abbrev, vertex);
            if tree1.is_reachable(&vertex) && tree2.is_reachable(&vertex) {
                return Ok(MeetingOutcome::Success(MeetingPoint {
                    destination: candidate.clone(),
                    destination_vertex: vertex,
                    start_vertex1,
                    start_vertex2,
                    path1: tree1.reconstruct_path(&vertex)?,
                    path2: tree2.reconstruct_path(&vertex)?,
                    excluded: session.excluded_order,
                }));
            }
            debug!(
                "{} cannot be reached by at least one person, excluding it",
                candidate.abbrev
            );
            session.exclude(candidate);
        }
        Ok(MeetingOutcome::NoCandidateRemaining {
            excluded: session.excluded_order,
        })
    }

    fn nearest_vertex(&self, building: &Building) -> Result<NodeId> {
        self.footway_nodes
            .nearest(&building.coords, &self.distance)
            .ok_or(Error::NoFootwayNodes)
    }

    /// The building closest to `mid` that was not excluded yet, the first one on ties. Buildings
    /// at a NaN distance are never picked.
    fn next_candidate(&self, mid: &Coordinates, session: &Session) -> Option<&'a Building> {
        let mut best: Option<(&'a Building, Weight)> = None;
        for building in self.buildings {
            if session.is_excluded(building) {
                continue;
            }
            let d = (self.distance)(mid, &building.coords);
            if d.is_nan() {
                continue;
            }
            if best.map_or(true, |(_, w)| d < w) {
                best = Some((building, d));
            }
        }
        best.map(|(b, _)| b)
    }
}

/// State that lives for a single call of `CenterResolver::resolve`
#[derive(Default)]
struct Session {
    excluded: HashSet<String>,
    excluded_order: Vec<String>,
}

impl Session {
    fn is_excluded(&self, building: &Building) -> bool {
        self.excluded.contains(&building.abbrev)
    }

    fn exclude(&mut self, building: &Building) {
        if self.excluded.insert(building.abbrev.clone()) {
            self.excluded_order.push(building.abbrev.clone());
        }
    }
}
