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

use crate::index::CityIndex;

/// A directed edge from city `source` to city `target`, which is also the
/// `(row, column)` cell of a cost matrix.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Edge {
    source: CityIndex,
    target: CityIndex,
}

impl Edge {
    #[inline]
    pub const fn new(source: CityIndex, target: CityIndex) -> Self {
        Self { source, target }
    }

    /// The departing city, i.e. the matrix row.
    #[inline]
    pub const fn source(&self) -> CityIndex {
        self.source
    }

    /// The arriving city, i.e. the matrix column.
    #[inline]
    pub const fn target(&self) -> CityIndex {
        self.target
    }

    /// The edge travelled in the opposite direction.
    #[inline]
    pub const fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// Returns `true` for a self-loop.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(usize, usize)> for Edge {
    #[inline]
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(CityIndex::new(source), CityIndex::new(target))
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.source.get(), self.target.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    #[test]
    fn test_accessors_and_reverse() {
        let e = Edge::new(ci(1), ci(2));
        assert_eq!(e.source(), ci(1));
        assert_eq!(e.target(), ci(2));
        assert_eq!(e.reversed(), Edge::new(ci(2), ci(1)));
        assert_eq!(e.reversed().reversed(), e);
        assert!(!e.is_loop());
        assert!(Edge::new(ci(3), ci(3)).is_loop());
    }

    #[test]
    fn test_from_tuple_and_display() {
        let e: Edge = (0, 2).into();
        assert_eq!(e, Edge::new(ci(0), ci(2)));
        assert_eq!(format!("{}", e), "(0, 2)");
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut edges: Vec<Edge> = vec![(1, 0).into(), (0, 2).into(), (0, 1).into()];
        edges.sort();
        assert_eq!(edges, vec![(0, 1).into(), (0, 2).into(), (1, 0).into()]);
    }
}
