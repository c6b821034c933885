//! Bracket, comma and indentation bookkeeping for WKT output.

/// Indentation added for every open node when line breaks are enabled.
const INDENTATION_BY_LEVEL: &str = "    ";

/// One entry per open node.
#[derive(Debug, Clone, Copy)]
struct Level {
    /// Whether a token has already been written at this level, so the next one needs a comma.
    has_values: bool,
    /// Pseudo nodes indent their children but write no keyword or brackets.
    pseudo: bool,
}

/// Accumulates WKT text.
///
/// All syntax (brackets, separating commas, line breaks and indentation) is produced here; callers
/// only say which nodes and tokens to write.
#[derive(Debug)]
pub(crate) struct WktWriter {
    wkt: String,
    stack: Vec<Level>,
    line_separator: String,
    indentation_by_level: &'static str,
}

impl WktWriter {
    /// Create a writer. An empty `line_separator` produces single-line, unindented output.
    pub(crate) fn new(line_separator: &str) -> Self {
        Self {
            wkt: String::new(),
            stack: Vec::new(),
            line_separator: line_separator.to_string(),
            indentation_by_level: if line_separator.is_empty() {
                ""
            } else {
                INDENTATION_BY_LEVEL
            },
        }
    }

    /// Open `keyword[`, on a new line when it is not the first node of the document.
    pub(crate) fn start_node(&mut self, keyword: &str) {
        if let Some(top) = self.stack.last_mut() {
            if top.has_values {
                self.wkt.push(',');
            } else {
                top.has_values = true;
            }
            self.wkt.push_str(&self.line_separator);
        }
        for _ in 0..self.stack.len() {
            self.wkt.push_str(self.indentation_by_level);
        }
        self.wkt.push_str(keyword);
        self.wkt.push('[');
        self.stack.push(Level {
            has_values: false,
            pseudo: false,
        });
    }

    /// Close the innermost node.
    pub(crate) fn end_node(&mut self) {
        debug_assert!(self.stack.last().is_some_and(|level| !level.pseudo));
        self.wkt.push(']');
        self.stack.pop();
    }

    /// Open a level that indents and comma-separates its children without writing any text.
    ///
    /// Children follow an already written sibling, so the level starts out as having values.
    pub(crate) fn start_pseudo_node(&mut self) {
        self.stack.push(Level {
            has_values: true,
            pseudo: true,
        });
    }

    /// Close the innermost pseudo node.
    pub(crate) fn end_pseudo_node(&mut self) {
        debug_assert!(self.stack.last().is_some_and(|level| level.pseudo));
        self.stack.pop();
    }

    /// Write `s` as a double-quoted string, doubling embedded quotes.
    pub(crate) fn add_quoted_string(&mut self, s: &str) {
        self.separate();
        self.wkt.push('"');
        self.wkt.push_str(&s.replace('"', "\"\""));
        self.wkt.push('"');
    }

    /// Write a raw token such as a number or an enumerated value.
    pub(crate) fn add(&mut self, token: &str) {
        self.separate();
        self.wkt.push_str(token);
    }

    /// Take the finished text.
    pub(crate) fn finish(self) -> String {
        debug_assert!(self.stack.is_empty());
        self.wkt
    }

    fn separate(&mut self) {
        if let Some(top) = self.stack.last_mut() {
            if top.has_values {
                self.wkt.push(',');
            }
            top.has_values = true;
        }
    }
}
