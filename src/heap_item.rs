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

use std::cmp::Ordering;

use crate::constants::Weight;

#[derive(Copy, Clone, Debug)]
pub struct HeapItem<V> {
    pub weight: Weight,
    pub vertex: V,
}

impl<V> HeapItem<V> {
    pub fn new(weight: Weight, vertex: V) -> HeapItem<V> {
        HeapItem { weight, vertex }
    }
}

impl<V> PartialOrd for HeapItem<V> {
    fn partial_cmp(&self, other: &HeapItem<V>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// reversed, so that BinaryHeap pops the smallest weight first
impl<V> Ord for HeapItem<V> {
    fn cmp(&self, other: &HeapItem<V>) -> Ordering {
        self.weight.total_cmp(&other.weight).reverse()
    }
}

impl<V> PartialEq for HeapItem<V> {
    fn eq(&self, other: &HeapItem<V>) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for HeapItem<V> {}
