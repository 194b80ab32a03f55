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

//! Reduction of the candidate list to the optimal tours.

use crate::incumbent::Candidate;
use waypoint_model::num::CostNumeric;

/// Keeps the candidates whose bound equals the smallest bound among all
/// candidates, in their original order.
///
/// Every tie is kept, so a tour and its reverse both survive on symmetric
/// instances. Filtering a filtered list returns it unchanged.
pub fn filter_solutions<T>(candidates: Vec<Candidate<T>>) -> Vec<Candidate<T>>
where
    T: CostNumeric,
{
    let Some(minimum) = candidates.iter().map(Candidate::bound).min() else {
        return candidates;
    };

    candidates
        .into_iter()
        .filter(|candidate| candidate.bound() == minimum)
        .collect()
}
