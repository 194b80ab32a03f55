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

use crate::{index::CityIndex, num::CostNumeric};

/// A closed tour and its cost.
///
/// `tour` lists every city exactly once, starting at city 0; the tour
/// returns from its last city to the first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TourSolution<T> {
    cost: T,
    tour: Vec<CityIndex>,
}

impl<T> TourSolution<T>
where
    T: CostNumeric,
{
    /// Creates a new solution.
    ///
    /// # Panics
    ///
    /// Panics if `tour` visits a city twice or names a city outside
    /// `0..tour.len()`.
    pub fn new(cost: T, tour: Vec<CityIndex>) -> Self {
        let mut seen = vec![false; tour.len()];
        for city in &tour {
            let index = city.get();
            assert!(
                index < tour.len() && !seen[index],
                "called `TourSolution::new` with a tour that is not a permutation: {:?}",
                tour
            );
            seen[index] = true;
        }

        Self { cost, tour }
    }

    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }

    #[inline]
    pub fn tour(&self) -> &[CityIndex] {
        &self.tour
    }

    #[inline]
    pub fn num_cities(&self) -> usize {
        self.tour.len()
    }

    /// The tour as raw city numbers.
    pub fn cities(&self) -> Vec<usize> {
        self.tour.iter().map(CityIndex::get).collect()
    }

    /// The successor of every city along the tour, indexed by city.
    pub fn successors(&self) -> Vec<CityIndex> {
        let mut successors = vec![CityIndex::new(0); self.tour.len()];
        for (position, city) in self.tour.iter().enumerate() {
            let next = self.tour[(position + 1) % self.tour.len()];
            successors[city.get()] = next;
        }
        successors
    }
}

impl<T> std::fmt::Display for TourSolution<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tour Summary")?;
        writeln!(f, "   Cost: {}", self.cost)?;
        writeln!(f)?;

        if self.tour.is_empty() {
            writeln!(f, "   (No cities visited)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10} | {:<10}", "Position", "City", "Next")?;
        writeln!(f, "   {:-<10}-+-{:-<10}-+-{:-<10}", "", "", "")?;
        for (position, city) in self.tour.iter().enumerate() {
            let next = self.tour[(position + 1) % self.tour.len()];
            writeln!(f, "   {:<10} | {:<10} | {:<10}", position, city.get(), next.get())?;
        }

        Ok(())
    }
}
