//! Terminal render target
//!
//! Rewrites a single line in place: carriage return, erase line, text, caret.

use folio_typing::TextSink;
use std::io::Write;

/// Erase the whole current line (ANSI EL2)
const ERASE_LINE: &str = "\x1b[2K";

/// Caret drawn after the typed text
pub const DEFAULT_CARET: char = '|';

/// A single terminal line the typewriter draws onto
pub struct TerminalLine<W: Write> {
    out: W,
    prefix: String,
    caret: Option<char>,
    failed: bool,
}

impl<W: Write> TerminalLine<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            prefix: String::new(),
            caret: Some(DEFAULT_CARET),
            failed: false,
        }
    }

    /// Static text drawn before the typed role, e.g. "I'm a "
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_caret(mut self, caret: Option<char>) -> Self {
        self.caret = caret;
        self
    }

    /// Move past the animated line so later output starts fresh
    pub fn finish(&mut self) -> std::io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, text: &str) -> std::io::Result<()> {
        write!(self.out, "\r{}{}{}", ERASE_LINE, self.prefix, text)?;
        if let Some(caret) = self.caret {
            write!(self.out, "{}", caret)?;
        }
        self.out.flush()
    }
}

impl<W: Write> TextSink for TerminalLine<W> {
    fn set_text(&mut self, text: &str) {
        // A closed stdout shouldn't kill the loop; report it once
        if let Err(err) = self.draw(text) {
            if !self.failed {
                tracing::warn!("failed to draw typing line: {}", err);
                self.failed = true;
            }
        }
    }
}
