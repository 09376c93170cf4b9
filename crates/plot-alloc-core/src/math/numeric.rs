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

use num_traits::{Bounded, CheckedAdd, CheckedSub, Signed};

/// Everything the assignment solver needs from a cell type.
///
/// Dual potentials go negative during the solve even when every cell is
/// non-negative, hence `Signed`. `Bounded::max_value` doubles as "infinity"
/// for slack tracking, so all arithmetic that could reach it is checked.
pub trait AssignNumeric:
    Copy
    + Ord
    + Signed
    + Bounded
    + CheckedAdd
    + CheckedSub
    + Send
    + Sync
    + std::fmt::Debug
    + std::fmt::Display
    + 'static
{
}

impl<T> AssignNumeric for T where
    T: Copy
        + Ord
        + Signed
        + Bounded
        + CheckedAdd
        + CheckedSub
        + Send
        + Sync
        + std::fmt::Debug
        + std::fmt::Display
        + 'static
{
}
