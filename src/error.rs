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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),
    #[error("Vertex was not reached by the shortest path search: {0}")]
    Unreachable(String),
    #[error("Invalid graph data: {0}")]
    InvalidGraph(String),
    #[error("The map does not contain any footway nodes")]
    NoFootwayNodes,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid map data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
