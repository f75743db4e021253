//! Handler selected at runtime from a config.

use char_diff::{DiffHandler, LineRenderer, MarkerHandler, Sequence, Sides};

/// One of the built-in handlers, chosen by [`crate::Preset`].
#[derive(Debug)]
pub enum ConfiguredHandler {
    Lines(LineRenderer),
    Markers(MarkerHandler),
}

impl DiffHandler for ConfiguredHandler {
    fn add_equal<S: Sequence + ?Sized>(&mut self, sides: &Sides<'_, S>, end_pos_left: usize) {
        match self {
            Self::Lines(h) => h.add_equal(sides, end_pos_left),
            Self::Markers(h) => h.add_equal(sides, end_pos_left),
        }
    }

    fn add_diff<S: Sequence + ?Sized>(
        &mut self,
        sides: &Sides<'_, S>,
        end_pos_left: usize,
        end_pos_right: usize,
    ) {
        match self {
            Self::Lines(h) => h.add_diff(sides, end_pos_left, end_pos_right),
            Self::Markers(h) => h.add_diff(sides, end_pos_left, end_pos_right),
        }
    }

    fn serialize(&mut self) -> String {
        match self {
            Self::Lines(h) => h.serialize(),
            Self::Markers(h) => h.serialize(),
        }
    }
}
