//! # char-diff
//!
//! Character-level diffing of two sequences with pluggable output handlers.
//!
//! ## Design Principles
//!
//! The crate is split into a scanning engine and the handlers that consume
//! its output. The engine never formats anything; it walks both inputs and
//! reports a stream of spans:
//!
//! - an **equal** span, text both sides share
//! - a **diff** span, a replace operation between a mismatch and the next
//!   point where the inputs line up again
//!
//! Handlers turn that stream into text. [`MarkerHandler`] produces a compact
//! machine-readable form, [`LineRenderer`] produces a unified, line-oriented
//! view with whole-line and exact-character highlighting.
//!
//! ## Usage
//!
//! ```rust
//! use char_diff::{diff_text, LineRenderer, MarkerHandler, RenderOptions};
//!
//! let mut markers = MarkerHandler::default();
//! assert_eq!(diff_text("abc\nde2f", "abc\ndef", &mut markers), "abc\nde[+]2[=]f");
//!
//! let mut lines = LineRenderer::plain(RenderOptions::with_indent_width(2));
//! assert_eq!(
//!     diff_text("abc\ndef", "abc\nd2ef", &mut lines),
//!     "  abc\n- def\n+ d2ef"
//! );
//! ```
//!
//! Any type implementing [`Sequence`] can be compared, not only text.

pub mod engine;
pub mod handler;
pub mod overlap;
pub mod render;
pub mod sequence;
pub mod style;

// Re-export commonly used types
pub use engine::{diff, diff_str, diff_text};
pub use handler::{DiffHandler, MarkerHandler, Sides};
pub use overlap::find_overlap;
pub use render::{Highlight, Indent, LineRenderer, OptionsError, RenderOptions};
pub use sequence::{CodeUnit, Sequence, Text};
pub use style::{Container, DiffStyle};
