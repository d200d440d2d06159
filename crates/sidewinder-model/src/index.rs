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

use sidewinder_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for matrix row indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RowIndexTag;

impl TypedIndexTag for RowIndexTag {
    const NAME: &'static str = "RowIndex";
}

/// A typed index for matrix rows.
pub type RowIndex = TypedIndex<RowIndexTag>;

/// A tag type for matrix column indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ColIndexTag;

impl TypedIndexTag for ColIndexTag {
    const NAME: &'static str = "ColIndex";
}

/// A typed index for matrix columns.
pub type ColIndex = TypedIndex<ColIndexTag>;

/// A tag type for flattened row-column pair indices.
///
/// A pair index addresses one cell of the matrix under row-major
/// linearization and doubles as a row/column index of the derived square
/// matrix of order `rows * cols`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PairIndexTag;

impl TypedIndexTag for PairIndexTag {
    const NAME: &'static str = "PairIndex";
}

/// A typed index for flattened row-column pairs.
pub type PairIndex = TypedIndex<PairIndexTag>;
