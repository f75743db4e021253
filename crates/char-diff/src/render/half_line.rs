//! One side of a line that has not been terminated yet.

/// Decoration currently open on a half-line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Nothing written since the last line break.
    #[default]
    None,
    /// Text that is unchanged, on a line that changed.
    Light,
    /// The exact changed text.
    Strong,
}

/// A begin/end decoration pair.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tokens {
    pub begin: String,
    pub end: String,
}

/// Everything one side needs to decorate its lines.
#[derive(Debug, Clone)]
pub(crate) struct SideStyle {
    /// Marker plus padding that replaces the indent, e.g. `"- "`.
    pub marker: String,
    pub light: Tokens,
    pub strong: Tokens,
}

impl SideStyle {
    fn tokens(&self, mode: Highlight) -> Option<&Tokens> {
        match mode {
            Highlight::None => None,
            Highlight::Light => Some(&self.light),
            Highlight::Strong => Some(&self.strong),
        }
    }
}

/// Rendered text of one side since its last line break.
#[derive(Debug, Default)]
pub(crate) struct HalfLine {
    text: String,
    mode: Highlight,
}

impl HalfLine {
    /// Nothing has been written to this line yet.
    pub fn is_empty(&self) -> bool {
        self.mode == Highlight::None
    }

    #[cfg(test)]
    pub fn mode(&self) -> Highlight {
        self.mode
    }

    /// Append `text` under `mode`, switching decoration if needed.
    pub fn push(&mut self, text: &str, mode: Highlight, style: &SideStyle) {
        if text.is_empty() {
            return;
        }
        if mode != self.mode {
            if let Some(open) = style.tokens(self.mode) {
                self.text.push_str(&open.end);
            }
            if let Some(next) = style.tokens(mode) {
                self.text.push_str(&next.begin);
            }
            self.mode = mode;
        }
        self.text.push_str(text);
    }

    /// Close the open decoration and hand out the line.
    pub fn take(&mut self, style: &SideStyle) -> String {
        let mut text = std::mem::take(&mut self.text);
        if let Some(open) = style.tokens(self.mode) {
            text.push_str(&open.end);
        }
        self.mode = Highlight::None;
        text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.mode = Highlight::None;
    }
}
