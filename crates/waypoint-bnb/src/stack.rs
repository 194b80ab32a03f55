// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! LIFO storage for pending search nodes.
//!
//! The search is depth-first: the most recently pushed exclude-branch is
//! expanded next. Nodes are owned by the stack until popped.

use crate::state::StageState;
use waypoint_model::num::CostNumeric;

#[derive(Clone, Debug)]
pub struct NodeStack<T>
where
    T: CostNumeric,
{
    nodes: Vec<StageState<T>>,
}

impl<T> Default for NodeStack<T>
where
    T: CostNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeStack<T>
where
    T: CostNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// A stack sized for one pending sibling per level on `num_cities`
    /// cities, which is what the first dive from the root leaves behind.
    #[inline]
    pub fn preallocated(num_cities: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_cities.saturating_sub(1)),
        }
    }

    #[inline]
    pub fn ensure_capacity(&mut self, num_cities: usize) {
        let capacity = num_cities.saturating_sub(1);
        if self.nodes.capacity() < capacity {
            self.nodes.reserve(capacity - self.nodes.len());
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    #[inline]
    pub fn push(&mut self, node: StageState<T>) {
        self.nodes.push(node);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<StageState<T>> {
        self.nodes.pop()
    }

    #[inline]
    pub fn peek(&self) -> Option<&StageState<T>> {
        self.nodes.last()
    }

    /// Drops every pending node but keeps the allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.nodes.clear();
    }
}
