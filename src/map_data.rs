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

use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

use crate::constants::NodeId;
use crate::error::Result;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinates { lat, lon }
    }
}

/// A known position on the map
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub coords: Coordinates,
}

impl Node {
    pub fn new(id: NodeId, coords: Coordinates) -> Self {
        Node { id, coords }
    }
}

/// A walking path, every two consecutive nodes are connected
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Footway {
    pub id: i64,
    pub nodes: Vec<NodeId>,
}

impl Footway {
    pub fn new(id: i64, nodes: Vec<NodeId>) -> Self {
        Footway { id, nodes }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Building {
    pub abbrev: String,
    pub fullname: String,
    pub coords: Coordinates,
}

impl Building {
    pub fn new(abbrev: &str, fullname: &str, coords: Coordinates) -> Self {
        Building {
            abbrev: abbrev.to_string(),
            fullname: fullname.to_string(),
            coords,
        }
    }
}

/// Map data that has already been extracted from an OpenStreetMap file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CampusMap {
    pub nodes: Vec<Node>,
    pub footways: Vec<Footway>,
    pub buildings: Vec<Building>,
}

impl CampusMap {
    /// Reads a JSON document of the form `{"nodes": [..], "footways": [..], "buildings": [..]}`
    pub fn from_json_file(filename: &str) -> Result<Self> {
        let file = File::open(filename)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Looks up a building by its exact abbreviation first, then by a part of its full name.
pub fn search_building<'a>(buildings: &'a [Building], query: &str) -> Option<&'a Building> {
    buildings
        .iter()
        .find(|b| b.abbrev == query)
        .or_else(|| buildings.iter().find(|b| b.fullname.contains(query)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn buildings() -> Vec<Building> {
        vec![
            Building::new("SEO", "Science and Engineering Offices", Coordinates::new(1.0, 1.0)),
            Building::new("SES", "Science and Engineering South", Coordinates::new(2.0, 2.0)),
            Building::new("LIB", "Richard J. Daley Library (SES)", Coordinates::new(3.0, 3.0)),
        ]
    }

    #[test]
    fn search_prefers_abbreviation() {
        let buildings = buildings();
        assert_eq!("SES", search_building(&buildings, "SES").unwrap().abbrev);
    }

    #[test]
    fn search_by_partial_name() {
        let buildings = buildings();
        assert_eq!(
            "SEO",
            search_building(&buildings, "Science and").unwrap().abbrev
        );
        assert_eq!("LIB", search_building(&buildings, "Library").unwrap().abbrev);
        assert!(search_building(&buildings, "Gym").is_none());
    }

    #[test]
    fn load_from_json() {
        let json = r#"{
            "nodes": [
                {"id": 1, "coords": {"lat": 41.87, "lon": -87.65}},
                {"id": 2, "coords": {"lat": 41.88, "lon": -87.64}}
            ],
            "footways": [{"id": 10, "nodes": [1, 2]}],
            "buildings": [
                {"abbrev": "LIB", "fullname": "Library", "coords": {"lat": 41.87, "lon": -87.64}}
            ]
        }"#;
        let map = CampusMap::from_json_str(json).unwrap();
        assert_eq!(2, map.nodes.len());
        assert_eq!(vec![1, 2], map.footways[0].nodes);
        assert_eq!("Library", map.buildings[0].fullname);
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            CampusMap::from_json_str("{\"nodes\": 5}"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            CampusMap::from_json_file("does/not/exist.json"),
            Err(Error::Io(_))
        ));
    }
}
