use std::env;
use std::process;

use stopwatch::Stopwatch;

use campus_meet::geodesy::{great_circle_distance, midpoint};
use campus_meet::{
    build_graph, search_building, Building, CampusMap, CenterResolver, MeetingOutcome, NodeId,
    ShortestPath,
};

fn main() {
    // e.g. run like this:
    // cargo run --release map.json SEO "University Hall"
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("usage: {} <map.json> <building 1> <building 2>", args[0]);
        process::exit(2);
    }
    let filename = if args[1].is_empty() {
        "map.json"
    } else {
        args[1].as_str()
    };

    let map = match CampusMap::from_json_file(filename) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("unable to load map {}: {}", filename, e);
            process::exit(1);
        }
    };
    println!("number of nodes ................... {}", map.nodes.len());
    println!("number of footways ................ {}", map.footways.len());
    println!("number of buildings ............... {}", map.buildings.len());

    let mut time = Stopwatch::new();
    time.start();
    let graph = build_graph(&map.nodes, &map.footways, great_circle_distance);
    time.stop();
    println!("number of vertices ................ {}", graph.vertex_count());
    println!("number of edges ................... {}", graph.edge_count());
    println!("graph build time .................. {} ms", time.elapsed_ms());

    let building1 = find_building(&map, &args[2], 1);
    let building2 = find_building(&map, &args[3], 2);
    print_building("Person 1's point", building1);
    print_building("Person 2's point", building2);

    let mut resolver = CenterResolver::new(&graph, &map, great_circle_distance, midpoint);
    let mut time = Stopwatch::new();
    time.start();
    let outcome = resolver.resolve(building1, building2);
    time.stop();
    match outcome {
        Ok(MeetingOutcome::Success(m)) => {
            for abbrev in &m.excluded {
                println!("{} is unreachable for at least one person, skipped it", abbrev);
            }
            print_building("Destination building", &m.destination);
            print_node("Nearest P1 node", &map, m.start_vertex1);
            print_node("Nearest P2 node", &map, m.start_vertex2);
            print_node("Nearest destination node", &map, m.destination_vertex);
            print_path("Person 1", &m.path1);
            print_path("Person 2", &m.path2);
        }
        Ok(MeetingOutcome::GloballyUnreachable { .. }) => {
            println!("Sorry, destination unreachable.");
        }
        Ok(MeetingOutcome::NoCandidateRemaining { excluded }) => {
            println!(
                "Sorry, none of the {} buildings can be reached by both persons.",
                excluded.len()
            );
        }
        Err(e) => {
            eprintln!("resolving the meeting point failed: {}", e);
            process::exit(1);
        }
    }
    println!("resolution time ................... {} ms", time.elapsed_ms());
}

fn find_building<'a>(map: &'a CampusMap, query: &str, person: usize) -> &'a Building {
    match search_building(&map.buildings, query) {
        Some(b) => b,
        None => {
            eprintln!("Person {}'s building not found: {}", person, query);
            process::exit(1);
        }
    }
}

fn print_building(title: &str, building: &Building) {
    println!("{}:", title);
    println!(" {}", building.fullname);
    println!(" ({}, {})", building.coords.lat, building.coords.lon);
}

fn print_node(title: &str, map: &CampusMap, id: NodeId) {
    println!("{}:", title);
    println!(" {}", id);
    if let Some(node) = map.nodes.iter().find(|n| n.id == id) {
        println!(" ({}, {})", node.coords.lat, node.coords.lon);
    }
}

fn print_path(person: &str, path: &ShortestPath<NodeId>) {
    println!("{}'s distance to dest: {} miles", person, path.get_weight());
    let nodes: Vec<String> = path.get_nodes().iter().map(|n| n.to_string()).collect();
    println!("Path: {}", nodes.join("->"));
}
