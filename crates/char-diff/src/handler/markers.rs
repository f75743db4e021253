//! Plain-text handler marking changes with bracket tokens.

use super::{DiffHandler, Sides};
use crate::sequence::Sequence;

/// Precedes text present only in the right input.
pub const REMOVED: &str = "[-]";
/// Precedes text present only in the left input.
pub const ADDED: &str = "[+]";
/// Closes a diff span.
pub const SPAN_END: &str = "[=]";

/// Emits equal text verbatim and each diff span as
/// `[-]<right text>[+]<left text>[=]`, leaving out an empty side.
///
/// Concatenating equal text with every `[+]` fragment gives back the left
/// input; with every `[-]` fragment, the right input.
#[derive(Debug, Clone, Default)]
pub struct MarkerHandler {
    result: String,
}

impl MarkerHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiffHandler for MarkerHandler {
    fn add_equal<S: Sequence + ?Sized>(&mut self, sides: &Sides<'_, S>, end_pos_left: usize) {
        self.result.push_str(&sides.equal_part(end_pos_left));
    }

    fn add_diff<S: Sequence + ?Sized>(
        &mut self,
        sides: &Sides<'_, S>,
        end_pos_left: usize,
        end_pos_right: usize,
    ) {
        let right = sides.right_part(end_pos_right);
        if !right.is_empty() {
            self.result.push_str(REMOVED);
            self.result.push_str(&right);
        }
        let left = sides.left_part(end_pos_left);
        if !left.is_empty() {
            self.result.push_str(ADDED);
            self.result.push_str(&left);
        }
        self.result.push_str(SPAN_END);
    }

    fn serialize(&mut self) -> String {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff_text;

    #[test]
    fn test_inserted_on_right() {
        let mut handler = MarkerHandler::new();
        assert_eq!(
            diff_text("abc\ndef", "abc\nd2ef", &mut handler),
            "abc\nd[-]2[=]ef"
        );
    }

    #[test]
    fn test_present_only_on_left() {
        let mut handler = MarkerHandler::new();
        assert_eq!(
            diff_text("abc\nde2f", "abc\ndef", &mut handler),
            "abc\nde[+]2[=]f"
        );
    }

    #[test]
    fn test_replacement_lists_right_first() {
        let mut handler = MarkerHandler::new();
        assert_eq!(diff_text("abc", "xyz", &mut handler), "[-]xyz[+]abc[=]");
    }

    #[test]
    fn test_empty_inputs() {
        let mut handler = MarkerHandler::new();
        assert_eq!(diff_text("", "", &mut handler), "");
    }

    #[test]
    fn test_serialize_is_repeatable() {
        let mut handler = MarkerHandler::new();
        let first = diff_text("ab", "b", &mut handler);
        assert_eq!(first, "[+]a[=]b");
        assert_eq!(handler.serialize(), first);
    }
}
