//! Incremental terminal rendering of streamed replies.

use std::io::Write;

use herald_ai::RenderEvent;

/// Prints only the part of each render event not yet on screen.
///
/// `accumulated_text` normally grows by appending. When it does not (the
/// final event after a failed stream carries the fallback text), the new
/// text is printed on a fresh line instead.
#[derive(Debug, Default)]
pub struct StreamPrinter {
    shown: String,
}

impl StreamPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to write for `event`, updating what is considered shown.
    pub fn delta(&mut self, event: &RenderEvent) -> String {
        let text = &event.accumulated_text;
        let mut out = match text.strip_prefix(self.shown.as_str()) {
            Some(suffix) => suffix.to_string(),
            None if self.shown.is_empty() => text.clone(),
            None => format!("\n{text}"),
        };
        self.shown.clone_from(text);
        if event.is_final {
            out.push('\n');
            self.shown.clear();
        }
        out
    }

    pub fn print(&mut self, event: &RenderEvent) {
        let out = self.delta(event);
        let mut stdout = std::io::stdout().lock();
        // A closed stdout only loses display output.
        let _ = stdout.write_all(out.as_bytes());
        let _ = stdout.flush();
    }
}
