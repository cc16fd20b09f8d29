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

#[macro_use]
extern crate log;

pub use crate::center_resolver::CenterResolver;
pub use crate::center_resolver::MeetingOutcome;
pub use crate::center_resolver::MeetingPoint;
pub use crate::constants::*;
pub use crate::dijkstra::Dijkstra;
pub use crate::error::{Error, Result};
pub use crate::graph::Graph;
pub use crate::graph_builder::GraphBuilder;
pub use crate::map_data::search_building;
pub use crate::map_data::{Building, CampusMap, Coordinates, Footway, Node};
pub use crate::shortest_path::ShortestPath;
pub use crate::shortest_path_tree::ShortestPathTree;

use std::fmt::Debug;
use std::hash::Hash;

mod center_resolver;
mod constants;
mod dijkstra;
mod error;
#[cfg(test)]
mod floyd_warshall;
pub mod geodesy;
mod graph;
mod graph_builder;
mod heap_item;
mod map_data;
mod nearest_vertex;
mod shortest_path;
mod shortest_path_tree;

/// Builds the footpath graph: one vertex per node, and edges in both directions between
/// consecutive nodes of every footway, weighted by `distance`.
pub fn build_graph<D>(nodes: &[Node], footways: &[Footway], distance: D) -> Graph<NodeId>
where
    D: Fn(&Coordinates, &Coordinates) -> Weight,
{
    GraphBuilder::build(nodes, footways, distance)
}

/// Calculates the distances and predecessors of all vertices with respect to `source`.
pub fn shortest_paths<V>(graph: &Graph<V>, source: &V) -> Result<ShortestPathTree<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    let mut calc = Dijkstra::new();
    calc.calc_tree(graph, source)
}

/// Extracts the path from the tree's source to `destination`, which must have been reached.
pub fn reconstruct_path<V>(
    tree: &ShortestPathTree<V>,
    destination: &V,
) -> Result<ShortestPath<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    tree.reconstruct_path(destination)
}

/// Finds the building closest to the midpoint of `start1` and `start2` that both can reach,
/// and both shortest paths to it. Use `CenterResolver` directly to run several queries on the
/// same map.
pub fn resolve_meeting_point<D, M>(
    graph: &Graph<NodeId>,
    map: &CampusMap,
    start1: &Building,
    start2: &Building,
    distance: D,
    midpoint: M,
) -> Result<MeetingOutcome>
where
    D: Fn(&Coordinates, &Coordinates) -> Weight,
    M: Fn(&Coordinates, &Coordinates) -> Coordinates,
{
    CenterResolver::new(graph, map, distance, midpoint).resolve(start1, start2)
}

/// Creates a `Dijkstra` calculator that re-uses its allocations when running many shortest path
/// searches in a row.
pub fn create_calculator<V>() -> Dijkstra<V>
where
    V: Eq + Hash + Clone + Debug,
{
    Dijkstra::new()
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use rand::rngs::StdRng;
    use rand::Rng;

    use crate::floyd_warshall::FloydWarshall;

    use super::*;

    #[test]
    fn dijkstra_on_random_graph() {
        const REPEATS: usize = 100;
        for _i in 0..REPEATS {
            run_test_on_random_graph();
        }
    }

    fn run_test_on_random_graph() {
        const NUM_NODES: usize = 50;
        const NUM_QUERIES: usize = 200;
        const MEAN_DEGREE: f32 = 2.0;

        let mut rng = create_rng();
        let graph = Graph::<usize>::random(&mut rng, NUM_NODES, MEAN_DEGREE);
        debug!("random graph: \n {:?}", graph);

        let mut fw = FloydWarshall::new(graph.vertex_count());
        fw.prepare(&graph);
        let mut calc = create_calculator();

        for _i in 0..NUM_QUERIES {
            let source = rng.gen_range(0, NUM_NODES);
            let target = rng.gen_range(0, NUM_NODES);
            let tree = calc.calc_tree(&graph, &source).unwrap();
            let weight_fw = fw.calc_weight(source, target);
            let weight_dijkstra = tree.get_distance(&target).unwrap();
            assert_eq!(
                weight_fw, weight_dijkstra,
                "\nNo agreement for routing query from: {} to: {}\nFloyd-Warshall: {}\nDijkstra: {}\
                 \n Failing graph:\n{:?}",
                source, target, weight_fw, weight_dijkstra, graph
            );
            if weight_dijkstra == WEIGHT_MAX {
                assert!(reconstruct_path(&tree, &target).is_err());
                continue;
            }
            // whichever path is chosen it has to be made of existing edges adding up to the
            // shortest distance
            let path = reconstruct_path(&tree, &target).unwrap();
            let nodes = path.get_nodes();
            assert_eq!(source, nodes[0]);
            assert_eq!(target, *nodes.last().unwrap());
            let sum: Weight = nodes
                .windows(2)
                .map(|pair| graph.get_weight(&pair[0], &pair[1]).unwrap())
                .sum();
            assert_eq!(weight_dijkstra, sum);
        }
    }

    #[test]
    fn relaxation_invariant_holds() {
        for _ in 0..20 {
            let mut rng = create_rng();
            let graph = Graph::<usize>::random(&mut rng, 40, 3.0);
            let source = rng.gen_range(0, 40);
            let tree = shortest_paths(&graph, &source).unwrap();
            assert_eq!(Some(WEIGHT_ZERO), tree.get_distance(&source));
            for u in graph.vertices() {
                let dist_u = tree.get_distance(u).unwrap();
                for (v, weight) in graph.out_edges(u) {
                    let dist_v = tree.get_distance(v).unwrap();
                    assert!(
                        dist_v <= dist_u + weight,
                        "edge {} -> {} violates relaxation: {} > {} + {}",
                        u,
                        v,
                        dist_v,
                        dist_u,
                        weight
                    );
                }
            }
        }
    }

    #[test]
    fn path_to_itself() {
        let mut g = Graph::new();
        g.add_vertex("a");
        g.add_vertex("b");
        g.add_edge("a", "b", 3.0);
        let tree = shortest_paths(&g, &"a").unwrap();
        let path = reconstruct_path(&tree, &"a").unwrap();
        assert_eq!(0.0, path.get_weight());
        assert_eq!(&vec!["a"], path.get_nodes());
    }

    #[test]
    fn resolve_on_geographic_map() {
        // three buildings along a footway running north, the library sits in the middle
        let nodes = vec![
            Node::new(100, Coordinates::new(41.8700, -87.6500)),
            Node::new(101, Coordinates::new(41.8710, -87.6500)),
            Node::new(102, Coordinates::new(41.8720, -87.6500)),
            Node::new(103, Coordinates::new(41.8730, -87.6500)),
            Node::new(104, Coordinates::new(41.8740, -87.6500)),
        ];
        let map = CampusMap {
            nodes,
            footways: vec![Footway::new(7, vec![100, 101, 102, 103, 104])],
            buildings: vec![
                Building::new(
                    "SEO",
                    "Science and Engineering Offices",
                    Coordinates::new(41.8699, -87.6502),
                ),
                Building::new("LIB", "Daley Library", Coordinates::new(41.8721, -87.6502)),
                Building::new("UH", "University Hall", Coordinates::new(41.8741, -87.6502)),
            ],
        };
        let graph = build_graph(&map.nodes, &map.footways, geodesy::great_circle_distance);
        assert_eq!(5, graph.vertex_count());
        assert_eq!(8, graph.edge_count());

        let start1 = search_building(&map.buildings, "SEO").unwrap();
        let start2 = search_building(&map.buildings, "University").unwrap();
        let outcome = resolve_meeting_point(
            &graph,
            &map,
            start1,
            start2,
            geodesy::great_circle_distance,
            geodesy::midpoint,
        )
        .unwrap();
        match outcome {
            MeetingOutcome::Success(m) => {
                assert_eq!("LIB", m.destination.abbrev);
                assert_eq!(102, m.destination_vertex);
                assert_eq!(&vec![100, 101, 102], m.path1.get_nodes());
                assert_eq!(&vec![104, 103, 102], m.path2.get_nodes());
                assert!((m.path1.get_weight() - m.path2.get_weight()).abs() < 1e-9);
            }
            other => panic!("expected a meeting point, got: {:?}", other),
        }
    }

    fn create_rng() -> StdRng {
        let seed = create_seed();
        debug!("creating random number generator with seed: {}", seed);
        rand::SeedableRng::seed_from_u64(seed)
    }

    fn create_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    }
}
