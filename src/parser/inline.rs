//! Inline emphasis: bold, italic and code spans.

use crate::model::InlineRun;
use regex::Regex;

/// Splits text into styled runs.
///
/// Spans are found with a single alternation, leftmost match first, with
/// `**bold**` tried before `*italic*` and `` `code` ``. Emphasis does not
/// nest: a matched span takes the style of its outer delimiter and any
/// other markup inside it is kept literally. Star spans cannot contain
/// stars.
#[derive(Debug, Clone)]
pub struct InlineFormatter {
    span_regex: Regex,
}

impl InlineFormatter {
    /// Create a formatter.
    pub fn new() -> Self {
        Self {
            span_regex: Regex::new(r"\*\*[^*]+\*\*|\*[^*]+\*|`[^`]+`").unwrap(),
        }
    }

    /// Split `text` into runs. Text outside any span becomes plain runs;
    /// empty runs are never produced.
    pub fn format(&self, text: &str) -> Vec<InlineRun> {
        let mut runs = Vec::new();
        let mut last = 0;

        for m in self.span_regex.find_iter(text) {
            if m.start() > last {
                runs.push(InlineRun::plain(&text[last..m.start()]));
            }
            runs.push(span_run(m.as_str()));
            last = m.end();
        }

        if last < text.len() {
            runs.push(InlineRun::plain(&text[last..]));
        }

        runs
    }
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn span_run(span: &str) -> InlineRun {
    if let Some(inner) = span.strip_prefix("**").and_then(|s| s.strip_suffix("**")) {
        InlineRun::bold(inner)
    } else if let Some(inner) = span.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
        InlineRun::code(inner)
    } else {
        InlineRun::italic(&span[1..span.len() - 1])
    }
}
