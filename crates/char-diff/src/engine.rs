//! The diff scanning engine.
//!
//! Both inputs are walked in lock-step while they agree. At the first
//! mismatch a replace window opens and two hypotheses are probed:
//!
//! - **extra**: the right input continues somewhere further along the left
//!   input, i.e. the left input has extra text at this point
//! - **missing**: the left input continues somewhere further along the right
//!   input, i.e. the left input is missing text the right one has
//!
//! The window grows by one unit on both sides until one hypothesis finds a
//! run of matching units. The longer run wins, an exact tie goes to *extra*.
//! The window becomes a diff span, and scanning resumes after the run.
//!
//! This is a greedy, local approximation. It gives no minimal-edit
//! guarantee, and a single probe costs time linear in the remaining input,
//! so highly repetitive input can make one window quadratic. No look-ahead
//! limit is applied; callers needing bounded latency must bound the input.

use crate::handler::{DiffHandler, Sides};
use crate::overlap::find_overlap;
use crate::render::{Indent, LineRenderer, RenderOptions};
use crate::sequence::{units_match, CodeUnit, Sequence, Text};

/// A candidate run: `len` units found `from` units after the window start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Run {
    from: usize,
    len: usize,
}

/// The run being extended plus the longest one seen so far.
#[derive(Debug, Default)]
struct RunTracker {
    current: Run,
    best: Run,
}

impl RunTracker {
    fn extend(&mut self, from: usize) {
        if self.current.len == 0 {
            self.current.from = from;
        }
        self.current.len += 1;
    }

    fn settle(&mut self) {
        if self.current.len > self.best.len {
            self.best = self.current;
        }
    }

    /// The run broke; keep its periodic tail if it has one.
    fn break_at(&mut self, overlap: Option<usize>) {
        self.settle();
        match overlap {
            Some(shift) => {
                self.current.from += shift;
                self.current.len = self.current.len - shift + 1;
            }
            None => self.current.len = 0,
        }
    }

    fn finish(mut self) -> Run {
        self.settle();
        self.best
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hypothesis {
    Extra,
    Missing,
}

/// Where the inputs line up again after the window.
#[derive(Debug, Clone, Copy)]
struct Resync {
    hypothesis: Hypothesis,
    /// Units between the window end and the run, on the side that has them.
    offset: usize,
    /// Length of the recovered run.
    len: usize,
}

impl Resync {
    fn choose(extra: Run, missing: Run) -> Option<Self> {
        if extra.len == 0 && missing.len == 0 {
            return None;
        }
        let (hypothesis, run) = if missing.len > extra.len {
            (Hypothesis::Missing, missing)
        } else {
            (Hypothesis::Extra, extra)
        };
        Some(Self {
            hypothesis,
            offset: run.from,
            len: run.len,
        })
    }

    /// Units of (left, right) the diff span takes beyond the window.
    fn skips(&self) -> (usize, usize) {
        match self.hypothesis {
            Hypothesis::Extra => (self.offset, 0),
            Hypothesis::Missing => (0, self.offset),
        }
    }
}

/// Probe both hypotheses with the window ending at `(l, r)`.
fn probe<S: Sequence + ?Sized>(left: &S, right: &S, l: usize, r: usize) -> Option<Resync> {
    let mut extra = RunTracker::default();
    let mut missing = RunTracker::default();
    let (mut li, mut ri) = (l, r);
    while li < left.len() || ri < right.len() {
        let from = li - l;

        if units_match(left.get(li), right.get(r + extra.current.len)) {
            extra.extend(from);
        } else if extra.current.len > 0 {
            extra.break_at(find_overlap(right, r, extra.current.len, left.get(li)));
        }

        if units_match(left.get(l + missing.current.len), right.get(ri)) {
            missing.extend(from);
        } else if missing.current.len > 0 {
            missing.break_at(find_overlap(left, l, missing.current.len, right.get(ri)));
        }

        li += 1;
        ri += 1;
    }
    Resync::choose(extra.finish(), missing.finish())
}

/// Grow the replace window from the mismatch at `(l, r)`.
///
/// Returns the number of units both sides differ in before a resync point,
/// and the resync point itself, or `None` when one input ran out first.
fn grow_window<S: Sequence + ?Sized>(
    left: &S,
    right: &S,
    mut l: usize,
    mut r: usize,
) -> (usize, Option<Resync>) {
    let mut window = 0;
    loop {
        if let Some(resync) = probe(left, right, l, r) {
            return (window, Some(resync));
        }
        window += 1;
        l += 1;
        r += 1;
        if l >= left.len() || r >= right.len() {
            return (window, None);
        }
    }
}

/// How far to move the equal/diff boundary back so the diff starts a line.
///
/// Only applies when the diff is a pure insertion on one side. The boundary
/// can move back while the last equal unit equals the last unit of the diff
/// region, which rotates the diff text without changing either input. The
/// move is kept only if it lands on a line start.
fn line_start_shift<S: Sequence + ?Sized>(
    left: &S,
    right: &S,
    pos: usize,
    end_left: usize,
    (l, r): (usize, usize),
    resync: Resync,
) -> usize {
    debug_assert!(resync.offset > 0, "a mismatch cannot resync at offset 0");
    let (subject, last) = match resync.hypothesis {
        Hypothesis::Extra => (left, l + resync.offset - 1),
        Hypothesis::Missing => (right, r + resync.offset - 1),
    };
    let mut shift = 0;
    while end_left - shift > pos {
        let unit = left.unit_at(end_left - shift - 1);
        if unit.is_line_break() || unit != subject.unit_at(last - shift) {
            break;
        }
        shift += 1;
    }
    let boundary = end_left - shift;
    if boundary == 0 || left.unit_at(boundary - 1).is_line_break() {
        shift
    } else {
        0
    }
}

/// Compare `left` with `right`, reporting spans to `handler`.
///
/// Returns the handler's serialized output.
pub fn diff<S, H>(left: &S, right: &S, handler: &mut H) -> String
where
    S: Sequence + ?Sized,
    H: DiffHandler,
{
    let mut sides = Sides::new(left, right);
    let (l_len, r_len) = (left.len(), right.len());
    let (mut l, mut r) = (0, 0);
    // Start of the current equal run on the left side.
    let mut pos = 0;

    while l < l_len && r < r_len {
        if left.unit_at(l) == right.unit_at(r) {
            l += 1;
            r += 1;
            continue;
        }

        let (window, resync) = grow_window(left, right, l, r);
        let (mut end_left, mut end_right) = (l, r);
        l += window;
        r += window;

        if end_left > pos {
            if let (0, Some(resync)) = (window, resync) {
                let shift = line_start_shift(left, right, pos, end_left, (l, r), resync);
                end_left -= shift;
                end_right -= shift;
                l -= shift;
                r -= shift;
            }
            if end_left > pos {
                sides.pos_left = pos;
                sides.pos_right = end_right - (end_left - pos);
                log::trace!("equal {}..{}", pos, end_left);
                handler.add_equal(&sides, end_left);
            }
        }
        sides.pos_left = end_left;
        sides.pos_right = end_right;

        let Some(resync) = resync else {
            log::trace!(
                "no resync after {}/{}, diff runs to the end",
                end_left,
                end_right
            );
            handler.add_diff(&sides, l_len, r_len);
            l = l_len;
            r = r_len;
            pos = l_len;
            break;
        };

        let (skip_left, skip_right) = resync.skips();
        log::trace!(
            "diff {}..{} / {}..{} ({:?}, run of {})",
            end_left,
            l + skip_left,
            end_right,
            r + skip_right,
            resync.hypothesis,
            resync.len
        );
        handler.add_diff(&sides, l + skip_left, r + skip_right);
        l += skip_left;
        r += skip_right;
        pos = l;
        l += resync.len;
        r += resync.len;
    }

    if l > pos {
        sides.pos_left = pos;
        sides.pos_right = r - (l - pos);
        log::trace!("equal {}..{}", pos, l);
        handler.add_equal(&sides, l);
    }
    sides.pos_left = l;
    sides.pos_right = r;
    if l < l_len {
        handler.add_diff(&sides, l_len, r);
    } else if r < r_len {
        handler.add_diff(&sides, l, r_len);
    }
    handler.serialize()
}

/// Compare two strings char by char.
pub fn diff_text<H: DiffHandler>(left: &str, right: &str, handler: &mut H) -> String {
    diff(&Text::new(left), &Text::new(right), handler)
}

/// Compare two strings and render them for a terminal, indented by four.
pub fn diff_str(left: &str, right: &str) -> String {
    let mut renderer = LineRenderer::terminal(RenderOptions {
        indent: Indent::Spaces(4),
    });
    diff_text(left, right, &mut renderer)
}
