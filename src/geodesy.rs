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

use geo::{Distance, Haversine, InterpolatePoint, Point};

use crate::constants::Weight;
use crate::map_data::Coordinates;

const METERS_PER_MILE: f64 = 1609.344;

fn to_point(c: &Coordinates) -> Point<f64> {
    Point::new(c.lon, c.lat)
}

/// Great-circle distance in miles
pub fn great_circle_distance(a: &Coordinates, b: &Coordinates) -> Weight {
    Haversine.distance(to_point(a), to_point(b)) / METERS_PER_MILE
}

/// The point halfway between `a` and `b` along the great circle connecting them
pub fn midpoint(a: &Coordinates, b: &Coordinates) -> Coordinates {
    let p = Haversine.point_at_ratio_between(to_point(a), to_point(b), 0.5);
    Coordinates::new(p.y(), p.x())
}
