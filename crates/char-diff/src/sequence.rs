//! Random-access sequences the engine can compare.

use std::borrow::Cow;

/// A single comparable element of a [`Sequence`].
pub trait CodeUnit: Copy + Eq + std::fmt::Debug {
    /// Whether this unit is a carriage return or a line feed.
    fn is_line_break(self) -> bool;
}

impl CodeUnit for u8 {
    fn is_line_break(self) -> bool {
        self == b'\r' || self == b'\n'
    }
}

impl CodeUnit for u16 {
    fn is_line_break(self) -> bool {
        self == 13 || self == 10
    }
}

impl CodeUnit for char {
    fn is_line_break(self) -> bool {
        matches!(self, '\r' | '\n')
    }
}

/// An immutable, indexable run of code units.
///
/// Implement this for any backing store to make it diffable. Handlers only
/// ever see sub-ranges through [`Sequence::extract`], so the store decides
/// how its units are turned into text.
///
/// `unit_at` and `extract` may panic on out-of-range indices; the engine
/// never asks for one.
pub trait Sequence {
    /// The element type compared by the engine.
    type Unit: CodeUnit;

    /// Number of units.
    fn len(&self) -> usize;

    /// Whether the sequence has no units.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The unit at `index`.
    fn unit_at(&self, index: usize) -> Self::Unit;

    /// The unit at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Self::Unit> {
        (index < self.len()).then(|| self.unit_at(index))
    }

    /// Text of the units in `from..to`.
    fn extract(&self, from: usize, to: usize) -> Cow<'_, str>;
}

/// Both positions hold a unit and the units are equal.
///
/// A position past the end matches nothing, not even another position past
/// the end.
pub(crate) fn units_match<U: PartialEq>(a: Option<U>, b: Option<U>) -> bool {
    a.is_some() && a == b
}

impl Sequence for [char] {
    type Unit = char;

    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn unit_at(&self, index: usize) -> char {
        self[index]
    }

    fn extract(&self, from: usize, to: usize) -> Cow<'_, str> {
        Cow::Owned(self[from..to].iter().collect())
    }
}

/// Bytes, compared one at a time.
///
/// Every byte is a unit, so this only suits input where every character is
/// a single byte (ASCII). Use [`Text`] for other UTF-8 input.
///
/// # Panics
///
/// `extract` panics if the range is not valid UTF-8, which happens whenever
/// a span boundary splits a multi-byte character.
impl Sequence for [u8] {
    type Unit = u8;

    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn unit_at(&self, index: usize) -> u8 {
        self[index]
    }

    fn extract(&self, from: usize, to: usize) -> Cow<'_, str> {
        match std::str::from_utf8(&self[from..to]) {
            Ok(text) => Cow::Borrowed(text),
            Err(e) => panic!("byte range {from}..{to} splits a character: {e}"),
        }
    }
}

/// UTF-16 code units, compared one unit at a time.
///
/// Suits input without surrogate pairs (Basic Multilingual Plane only).
///
/// # Panics
///
/// `extract` panics if the range holds an unpaired surrogate, which happens
/// whenever a span boundary splits a surrogate pair.
impl Sequence for [u16] {
    type Unit = u16;

    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    fn unit_at(&self, index: usize) -> u16 {
        self[index]
    }

    fn extract(&self, from: usize, to: usize) -> Cow<'_, str> {
        match String::from_utf16(&self[from..to]) {
            Ok(text) => Cow::Owned(text),
            Err(e) => panic!("UTF-16 range {from}..{to} splits a character: {e}"),
        }
    }
}

impl<T> Sequence for Vec<T>
where
    [T]: Sequence,
{
    type Unit = <[T] as Sequence>::Unit;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn unit_at(&self, index: usize) -> Self::Unit {
        self.as_slice().unit_at(index)
    }

    fn extract(&self, from: usize, to: usize) -> Cow<'_, str> {
        self.as_slice().extract(from, to)
    }
}

/// A `&str` indexed by `char`.
///
/// Byte indexing would let a diff boundary fall inside a multi-byte
/// character, so the view records every char boundary up front and
/// [`Sequence::extract`] borrows straight from the source.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    source: &'a str,
    units: Vec<char>,
    /// Byte offset of every char, plus the source length.
    offsets: Vec<usize>,
}

impl<'a> Text<'a> {
    /// Index `source` by char.
    pub fn new(source: &'a str) -> Self {
        let mut units = Vec::with_capacity(source.len());
        let mut offsets = Vec::with_capacity(source.len() + 1);
        for (offset, c) in source.char_indices() {
            units.push(c);
            offsets.push(offset);
        }
        offsets.push(source.len());
        Self {
            source,
            units,
            offsets,
        }
    }

    /// The underlying string.
    pub fn as_str(&self) -> &'a str {
        self.source
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl Sequence for Text<'_> {
    type Unit = char;

    fn len(&self) -> usize {
        self.units.len()
    }

    fn unit_at(&self, index: usize) -> char {
        self.units[index]
    }

    fn extract(&self, from: usize, to: usize) -> Cow<'_, str> {
        Cow::Borrowed(&self.source[self.offsets[from]..self.offsets[to]])
    }
}
