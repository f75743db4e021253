//! Line-aware unified rendering of the span stream.
//!
//! Spans arrive with no regard for line boundaries, so the renderer keeps a
//! half-line per side and only writes a line out once its terminator shows
//! up (or at [`DiffHandler::serialize`]). A line no diff touched is written
//! once with the plain indent. A changed line is written twice, as a
//! `-` line for the left input followed by a `+` line for the right input.
//! On those lines unchanged text gets the light decoration and the changed
//! characters the strong one.
//!
//! Lines completed inside a diff span (only one side reached a line break)
//! are queued per side, so a multi-line change is shown as a block of `-`
//! lines followed by a block of `+` lines.

mod half_line;
mod options;

pub use half_line::Highlight;
pub use options::{Indent, OptionsError, RenderOptions};

use crate::handler::{DiffHandler, Sides};
use crate::sequence::Sequence;
use crate::style::{Container, DiffStyle};
use half_line::{HalfLine, SideStyle, Tokens};

/// Splits text into `(content, terminator)` pieces.
///
/// Every piece but the last ends with `\n`, `\r` or `\r\n`; the last piece
/// has no terminator and may be empty.
struct LineSegments<'a> {
    rest: Option<&'a str>,
}

fn segments(text: &str) -> LineSegments<'_> {
    LineSegments { rest: Some(text) }
}

impl<'a> Iterator for LineSegments<'a> {
    type Item = (&'a str, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(at) => {
                let end = at + leading_terminator(&rest[at..]).map_or(1, str::len);
                self.rest = Some(&rest[end..]);
                Some((&rest[..at], Some(&rest[at..end])))
            }
            None => {
                self.rest = None;
                Some((rest, None))
            }
        }
    }
}

/// The line terminator `text` starts with, if any.
fn leading_terminator(text: &str) -> Option<&str> {
    if text.starts_with("\r\n") {
        Some(&text[..2])
    } else if text.starts_with(|c: char| c == '\r' || c == '\n') {
        Some(&text[..1])
    } else {
        None
    }
}

/// Per-side buffers: the open half-line and lines completed inside diffs
/// that wait for the current line to finish.
#[derive(Debug, Default)]
struct Side {
    pending: String,
    half: HalfLine,
}

impl Side {
    fn push_changed(&mut self, text: &str, style: &SideStyle) {
        for (content, terminator) in segments(text) {
            self.half.push(content, Highlight::Strong, style);
            if let Some(terminator) = terminator {
                self.pending.push_str(&style.marker);
                self.pending.push_str(&self.half.take(style));
                self.pending.push_str(terminator);
            }
        }
    }

    /// Write queued lines plus the open half-line as a marked line.
    fn write_line(&mut self, out: &mut String, style: &SideStyle, terminator: &str) {
        out.push_str(&std::mem::take(&mut self.pending));
        out.push_str(&style.marker);
        out.push_str(&self.half.take(style));
        out.push_str(terminator);
    }
}

/// Renders spans as a unified diff with two levels of highlighting.
///
/// # Example
///
/// ```
/// use char_diff::{diff_text, DiffStyle, LineRenderer, RenderOptions};
///
/// let style = DiffStyle {
///     inserted_begin: "[".into(),
///     inserted_end: "]".into(),
///     ..DiffStyle::plain()
/// };
/// let mut renderer = LineRenderer::new(RenderOptions::with_indent_width(2), style);
/// assert_eq!(
///     diff_text("abc\ndef", "abc\nd2ef", &mut renderer),
///     "  abc\n- def\n+ d[2]ef"
/// );
/// ```
#[derive(Debug)]
pub struct LineRenderer {
    indent: String,
    container: Option<Container>,
    deleted: SideStyle,
    inserted: SideStyle,
    left: Side,
    right: Side,
    /// Text of the current line while no diff has touched it.
    plain: String,
    /// Whether a diff has touched the current line.
    changed: bool,
    result: String,
}

impl LineRenderer {
    pub fn new(options: RenderOptions, style: DiffStyle) -> Self {
        let padding = options.indent.marker_padding();
        let deleted = SideStyle {
            marker: format!("{}-{}{}", style.minus_begin, style.minus_end, padding),
            light: Tokens {
                begin: style.deleted_light_begin,
                end: style.deleted_light_end,
            },
            strong: Tokens {
                begin: style.deleted_begin,
                end: style.deleted_end,
            },
        };
        let inserted = SideStyle {
            marker: format!("{}+{}{}", style.plus_begin, style.plus_end, padding),
            light: Tokens {
                begin: style.inserted_light_begin,
                end: style.inserted_light_end,
            },
            strong: Tokens {
                begin: style.inserted_begin,
                end: style.inserted_end,
            },
        };
        Self {
            indent: options.indent.as_string(),
            container: style.container,
            deleted,
            inserted,
            left: Side::default(),
            right: Side::default(),
            plain: String::new(),
            changed: false,
            result: String::new(),
        }
    }

    /// Undecorated output.
    pub fn plain(options: RenderOptions) -> Self {
        Self::new(options, DiffStyle::plain())
    }

    /// ANSI-colored output, see [`DiffStyle::terminal`].
    pub fn terminal(options: RenderOptions) -> Self {
        Self::new(options, DiffStyle::terminal())
    }

    /// HTML output, see [`DiffStyle::html`].
    pub fn html(options: RenderOptions) -> Self {
        Self::new(options, DiffStyle::html())
    }

    fn push_equal(&mut self, text: &str) {
        for (content, terminator) in segments(text) {
            self.left.half.push(content, Highlight::Light, &self.deleted);
            self.right.half.push(content, Highlight::Light, &self.inserted);
            if !self.changed {
                self.plain.push_str(content);
            }
            if let Some(terminator) = terminator {
                self.end_line(terminator);
            }
        }
    }

    /// Terminate the current line on both sides.
    fn end_line(&mut self, terminator: &str) {
        if self.changed {
            self.left
                .write_line(&mut self.result, &self.deleted, terminator);
            self.right
                .write_line(&mut self.result, &self.inserted, terminator);
        } else {
            self.result.push_str(&self.indent);
            self.result.push_str(&self.plain);
            self.result.push_str(terminator);
            self.left.half.clear();
            self.right.half.clear();
        }
        self.plain.clear();
        self.changed = false;
    }

    /// Treat the end of input as a terminator of whatever is still open.
    fn flush(&mut self) {
        if !self.changed {
            if !self.plain.is_empty() {
                self.result.push_str(&self.indent);
                self.result.push_str(&self.plain);
            }
        } else {
            let left_line = (!self.left.half.is_empty())
                .then(|| format!("{}{}", self.deleted.marker, self.left.half.take(&self.deleted)));
            let right_line = (!self.right.half.is_empty()).then(|| {
                format!("{}{}", self.inserted.marker, self.right.half.take(&self.inserted))
            });

            self.result.push_str(&std::mem::take(&mut self.left.pending));
            if let Some(line) = left_line {
                self.result.push_str(&line);
                if right_line.is_some() || !self.right.pending.is_empty() {
                    self.result.push('\n');
                }
            }
            self.result.push_str(&std::mem::take(&mut self.right.pending));
            if let Some(line) = right_line {
                self.result.push_str(&line);
            }
        }
        self.left.half.clear();
        self.right.half.clear();
        self.plain.clear();
        self.changed = false;
    }
}

impl DiffHandler for LineRenderer {
    fn add_equal<S: Sequence + ?Sized>(&mut self, sides: &Sides<'_, S>, end_pos_left: usize) {
        let text = sides.equal_part(end_pos_left);
        self.push_equal(&text);
    }

    fn add_diff<S: Sequence + ?Sized>(
        &mut self,
        sides: &Sides<'_, S>,
        end_pos_left: usize,
        end_pos_right: usize,
    ) {
        let left_text = sides.left_part(end_pos_left);
        let right_text = sides.right_part(end_pos_right);
        let mut left: &str = &left_text;
        let mut right: &str = &right_text;

        // A side that ends without a line break borrows the break the other
        // side starts its diff with, so both last lines close together.
        if left.is_empty() && end_pos_left == sides.left.len() && !self.left.half.is_empty() {
            if let Some(terminator) = leading_terminator(right) {
                self.end_line(terminator);
                right = &right[terminator.len()..];
            }
        } else if right.is_empty()
            && end_pos_right == sides.right.len()
            && !self.right.half.is_empty()
        {
            if let Some(terminator) = leading_terminator(left) {
                self.end_line(terminator);
                left = &left[terminator.len()..];
            }
        }

        if !left.is_empty() || !right.is_empty() {
            self.changed = true;
            self.plain.clear();
        }
        self.left.push_changed(left, &self.deleted);
        self.right.push_changed(right, &self.inserted);

        // Both sides sit at a line start: queued lines can go out now.
        if self.left.half.is_empty() && self.right.half.is_empty() {
            self.result.push_str(&std::mem::take(&mut self.left.pending));
            self.result.push_str(&std::mem::take(&mut self.right.pending));
            self.changed = false;
        }
    }

    fn serialize(&mut self) -> String {
        self.flush();
        match &self.container {
            Some(container) if !self.result.is_empty() => {
                format!("{}{}{}", container.begin, self.result, container.end)
            }
            _ => self.result.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff_text;
    use crate::sequence::Text;
    use crate::style::ansi::*;
    use pretty_assertions::assert_eq;

    fn tagged() -> DiffStyle {
        DiffStyle {
            minus_begin: "<->".into(),
            minus_end: "</->".into(),
            plus_begin: "<+>".into(),
            plus_end: "</+>".into(),
            deleted_begin: "<del>".into(),
            deleted_end: "</del>".into(),
            inserted_begin: "<ins>".into(),
            inserted_end: "</ins>".into(),
            deleted_light_begin: "<d>".into(),
            deleted_light_end: "</d>".into(),
            inserted_light_begin: "<i>".into(),
            inserted_light_end: "</i>".into(),
            container: None,
        }
    }

    fn render(left: &str, right: &str) -> String {
        let mut renderer = LineRenderer::new(RenderOptions::with_indent_width(2), tagged());
        diff_text(left, right, &mut renderer)
    }

    #[test]
    fn test_segments() {
        let pieces: Vec<_> = segments("a\r\nb\rc\n").collect();
        assert_eq!(
            pieces,
            vec![
                ("a", Some("\r\n")),
                ("b", Some("\r")),
                ("c", Some("\n")),
                ("", None)
            ]
        );
        let pieces: Vec<_> = segments("").collect();
        assert_eq!(pieces, vec![("", None)]);
    }

    #[test]
    fn test_unchanged_lines_collapse() {
        assert_eq!(render("a\r\nb", "a\r\nb"), "  a\r\n  b");
    }

    #[test]
    fn test_change_inside_line() {
        assert_eq!(
            render("abc\ndef", "abc\nd2ef"),
            "  abc\n<->-</-> <d>def</d>\n<+>+</+> <i>d</i><ins>2</ins><i>ef</i>"
        );
    }

    #[test]
    fn test_crlf_replaced_line() {
        assert_eq!(
            render("1\r\na\r\nb", "2\r\na\r\nb"),
            "<->-</-> <del>1</del>\r\n<+>+</+> <ins>2</ins>\r\n  a\r\n  b"
        );
    }

    #[test]
    fn test_line_added_at_end_without_newline() {
        assert_eq!(
            render("abc\ndef", "abc\ndef\nghi"),
            "  abc\n  def\n<+>+</+> <ins>ghi</ins>"
        );
        assert_eq!(
            render("abc\ndef\nghi", "abc\ndef"),
            "  abc\n  def\n<->-</-> <del>ghi</del>"
        );
    }

    #[test]
    fn test_text_appended_to_last_line() {
        assert_eq!(
            render("abc\ndef", "abc\ndefghi"),
            "  abc\n<->-</-> <d>def</d>\n<+>+</+> <i>def</i><ins>ghi</ins>"
        );
    }

    #[test]
    fn test_line_break_on_one_side_only() {
        let mut renderer = LineRenderer::plain(RenderOptions::with_indent_width(2));
        assert_eq!(
            diff_text("ab\ncd", "abXcd", &mut renderer),
            "- ab\n- cd\n+ abXcd"
        );
    }

    #[test]
    fn test_tab_indent_by_default() {
        let mut renderer = LineRenderer::plain(RenderOptions::default());
        assert_eq!(
            diff_text("abc\ndef", "abc\nd2ef", &mut renderer),
            "\tabc\n-\tdef\n+\td2ef"
        );
    }

    #[test]
    fn test_terminal_preset() {
        let mut renderer = LineRenderer::terminal(RenderOptions::with_indent_width(2));
        let expected = format!(
            "  abc\n{BOLD_RED_ON_DEFAULT}- {RED_ON_DEFAULT}def{RESET}\n\
             {BOLD_GREEN_ON_DEFAULT}+ {GREEN_ON_DEFAULT}d{RESET}{WHITE_ON_GREEN}2{RESET}{GREEN_ON_DEFAULT}ef{RESET}"
        );
        assert_eq!(diff_text("abc\ndef", "abc\nd2ef", &mut renderer), expected);
    }

    #[test]
    fn test_html_preset() {
        let mut renderer = LineRenderer::html(RenderOptions::with_indent_width(2));
        assert_eq!(
            diff_text("abc\ndef", "abc\nd2ef", &mut renderer),
            concat!(
                r#"<div style="white-space:pre">  abc"#,
                "\n",
                r#"<b style="color:red">-</b> <span style="color:red">def</span>"#,
                "\n",
                r#"<b style="color:green">+</b> <span style="color:green">d</span>"#,
                r#"<span style="background-color:green; color:white">2</span>"#,
                r#"<span style="color:green">ef</span></div>"#
            )
        );
    }

    #[test]
    fn test_container_skipped_for_empty_output() {
        let mut renderer = LineRenderer::html(RenderOptions::default());
        assert_eq!(diff_text("", "", &mut renderer), "");
    }

    #[test]
    fn test_serialize_twice_is_stable() {
        let mut renderer = LineRenderer::new(RenderOptions::with_indent_width(2), tagged());
        let first = diff_text("a", "", &mut renderer);
        assert_eq!(first, "<->-</-> <del>a</del>");
        assert_eq!(renderer.serialize(), first);
    }

    /// Feed "abc\n" as one batch and the changed "def" line as a second
    /// one, serializing after each.
    fn serialize_between_batches(renderer: &mut LineRenderer) -> (String, String) {
        let (left, right) = (Text::new("abc\ndef"), Text::new("abc\nd2ef"));
        let mut sides = Sides::new(&left, &right);
        renderer.add_equal(&sides, 4);
        let first = renderer.serialize();

        (sides.pos_left, sides.pos_right) = (4, 4);
        renderer.add_equal(&sides, 5);
        (sides.pos_left, sides.pos_right) = (5, 5);
        renderer.add_diff(&sides, 5, 6);
        (sides.pos_left, sides.pos_right) = (5, 6);
        renderer.add_equal(&sides, 7);
        (first, renderer.serialize())
    }

    #[test]
    fn test_serialize_resumes_after_more_input() {
        let mut renderer = LineRenderer::plain(RenderOptions::with_indent_width(2));
        let (first, second) = serialize_between_batches(&mut renderer);
        assert_eq!(first, "  abc\n");
        assert_eq!(second, "  abc\n- def\n+ d2ef");
    }

    #[test]
    fn test_container_wraps_cumulative_output_once() {
        let style = DiffStyle::plain().with_container(Some(Container::new("<div>", "</div>")));
        let mut renderer = LineRenderer::new(RenderOptions::with_indent_width(2), style);
        let (first, second) = serialize_between_batches(&mut renderer);
        assert_eq!(first, "<div>  abc\n</div>");
        assert_eq!(second, "<div>  abc\n- def\n+ d2ef</div>");
        assert_eq!(second.matches("<div>").count(), 1);
    }
}
