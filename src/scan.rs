//! Character-level scanner for script source text.
//!
//! One forward pass, no lookahead. The scanner does not understand
//! functions or types; it only turns characters into [`ScanEvent`]s:
//! completed tokens and line boundaries. Space, comma and tab separate
//! tokens outside quotes, and runs of separators collapse. A quote
//! character toggles the quoted flag and stays in the token, so string
//! decoding downstream sees the surrounding quotes. Only `\n` ends a
//! line; `\r` is an ordinary character.

use std::str::Chars;

/// What the scanner reports as it walks the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScanEvent {
    /// A token completed by a separator.
    Token { text: String, line: u32 },
    /// A line boundary, carrying any token text still pending and the
    /// quoted-flag state at the boundary. Fires once more, implicitly,
    /// at end of input.
    EndOfLine {
        trailing: String,
        quoted: bool,
        line: u32,
    },
}

pub(crate) struct Scanner<'a> {
    chars: Chars<'a>,
    buf: String,
    quoted: bool,
    line: u32,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            chars: source.chars(),
            buf: String::new(),
            quoted: false,
            line: 1,
            finished: false,
        }
    }

    /// Advance until the next event fires; `None` once the implicit final
    /// end-of-line has been delivered.
    pub(crate) fn next_event(&mut self) -> Option<ScanEvent> {
        while let Some(ch) = self.chars.next() {
            match ch {
                // No escape syntax: every quote toggles, odd counts leave
                // the flag set at end of line.
                '"' => {
                    self.quoted = !self.quoted;
                    self.buf.push(ch);
                }
                // A newline ends the line even inside quotes; the parser
                // turns a still-set quoted flag into a diagnostic.
                '\n' => return Some(self.end_line()),
                ' ' | ',' | '\t' if !self.quoted => {
                    // Separator runs collapse: nothing fires while the
                    // token buffer is empty.
                    if !self.buf.is_empty() {
                        return Some(ScanEvent::Token {
                            text: std::mem::take(&mut self.buf),
                            line: self.line,
                        });
                    }
                }
                _ => self.buf.push(ch),
            }
        }
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(self.end_line())
    }

    fn end_line(&mut self) -> ScanEvent {
        let event = ScanEvent::EndOfLine {
            trailing: std::mem::take(&mut self.buf),
            quoted: self.quoted,
            line: self.line,
        };
        self.line += 1;
        event
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
