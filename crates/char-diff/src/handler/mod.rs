//! The contract between the diff engine and output handlers.

mod markers;

pub use markers::{MarkerHandler, ADDED, REMOVED, SPAN_END};

use crate::sequence::Sequence;
use std::borrow::Cow;

/// Both inputs of a comparison plus the positions consumed so far.
///
/// The engine owns this value and moves the cursors; handlers only read it.
/// Before every handler call `pos_left`/`pos_right` point at the first unit
/// of the span being reported.
#[derive(Debug)]
pub struct Sides<'a, S: ?Sized> {
    pub left: &'a S,
    pub right: &'a S,
    pub pos_left: usize,
    pub pos_right: usize,
}

impl<'a, S: Sequence + ?Sized> Sides<'a, S> {
    /// Start a comparison with both cursors at 0.
    pub fn new(left: &'a S, right: &'a S) -> Self {
        Self {
            left,
            right,
            pos_left: 0,
            pos_right: 0,
        }
    }

    /// Text of an equal span ending at `end_pos_left`.
    pub fn equal_part(&self, end_pos_left: usize) -> Cow<'a, str> {
        self.left_part(end_pos_left)
    }

    /// Left text from the cursor to `end_pos_left`.
    pub fn left_part(&self, end_pos_left: usize) -> Cow<'a, str> {
        self.left.extract(self.pos_left, end_pos_left)
    }

    /// Right text from the cursor to `end_pos_right`.
    pub fn right_part(&self, end_pos_right: usize) -> Cow<'a, str> {
        self.right.extract(self.pos_right, end_pos_right)
    }
}

/// Consumes the span stream produced by [`crate::diff`].
///
/// Implement this trait to produce a custom output format. The engine calls
/// [`add_equal`](DiffHandler::add_equal) and
/// [`add_diff`](DiffHandler::add_diff) in input order, then
/// [`serialize`](DiffHandler::serialize) once.
///
/// # Example
///
/// ```
/// use char_diff::{diff_text, DiffHandler, Sequence, Sides};
///
/// #[derive(Default)]
/// struct ChangeCounter {
///     changes: usize,
/// }
///
/// impl DiffHandler for ChangeCounter {
///     fn add_equal<S: Sequence + ?Sized>(&mut self, _sides: &Sides<'_, S>, _end_pos_left: usize) {}
///
///     fn add_diff<S: Sequence + ?Sized>(
///         &mut self,
///         _sides: &Sides<'_, S>,
///         _end_pos_left: usize,
///         _end_pos_right: usize,
///     ) {
///         self.changes += 1;
///     }
///
///     fn serialize(&mut self) -> String {
///         self.changes.to_string()
///     }
/// }
///
/// assert_eq!(diff_text("abc", "a1b2c", &mut ChangeCounter::default()), "2");
/// ```
pub trait DiffHandler {
    /// `left[pos_left..end_pos_left]` is unchanged and equals the same number
    /// of units of `right` starting at `pos_right`.
    fn add_equal<S: Sequence + ?Sized>(&mut self, sides: &Sides<'_, S>, end_pos_left: usize);

    /// `left[pos_left..end_pos_left]` is present only in the left input and
    /// `right[pos_right..end_pos_right]` only in the right input. Either range
    /// may be empty, never both.
    fn add_diff<S: Sequence + ?Sized>(
        &mut self,
        sides: &Sides<'_, S>,
        end_pos_left: usize,
        end_pos_right: usize,
    );

    /// Flush anything still buffered and return the output produced so far.
    fn serialize(&mut self) -> String;
}
