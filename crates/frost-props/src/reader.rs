//! Reading the `.properties` text format.
//!
//! Input is consumed one natural line at a time (terminated by `\n`, `\r` or
//! `\r\n`). Natural lines are folded into logical lines: leading whitespace
//! is dropped, blank and comment lines are skipped, and a line ending in an
//! odd number of backslashes continues onto the next one. Each logical line
//! is then split into an unescaped key and value.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::error::{LoadError, LoadResult};

/// How raw bytes map onto characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Encoding {
    /// One byte per char, the encoding of byte-stream property files.
    Latin1,
    /// Already-decoded text handed over as UTF-8.
    Utf8,
}

/// A single `key=value` assignment after continuation folding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LogicalLine {
    pub text: String,
    /// 1-based natural line number where the assignment starts.
    pub line: usize,
}

/// Whitespace as the format defines it: space, tab and form feed.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

fn ends_with_continuation(text: &str) -> bool {
    text.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Folds natural lines from `source` into logical lines.
pub(crate) struct LineReader<R> {
    source: R,
    encoding: Encoding,
    pending: VecDeque<String>,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(source: R, encoding: Encoding) -> Self {
        Self {
            source,
            encoding,
            pending: VecDeque::new(),
            buf: Vec::new(),
            line: 0,
        }
    }

    /// Next logical line, or `None` at end of input.
    pub fn next_logical(&mut self) -> io::Result<Option<LogicalLine>> {
        while let Some(natural) = self.next_natural()? {
            let start = self.line;
            let trimmed = natural.trim_start_matches(is_blank);
            if trimmed.is_empty() || trimmed.starts_with(&['#', '!'][..]) {
                continue;
            }

            let mut text = trimmed.to_string();
            while ends_with_continuation(&text) {
                text.pop();
                match self.next_natural()? {
                    Some(next) => text.push_str(next.trim_start_matches(is_blank)),
                    // A dangling backslash at end of input is dropped.
                    None => break,
                }
            }
            return Ok(Some(LogicalLine { text, line: start }));
        }
        Ok(None)
    }

    fn next_natural(&mut self) -> io::Result<Option<String>> {
        if self.pending.is_empty() {
            self.fill()?;
        }
        let next = self.pending.pop_front();
        if next.is_some() {
            self.line += 1;
        }
        Ok(next)
    }

    /// Reads up to the next `\n` and queues every natural line inside it.
    /// Lone `\r` terminators can leave several lines in one chunk.
    fn fill(&mut self) -> io::Result<()> {
        self.buf.clear();
        if self.source.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(());
        }

        let mut chunk: &[u8] = &self.buf;
        if let Some(rest) = chunk.strip_suffix(b"\n") {
            chunk = rest;
        }
        if let Some(rest) = chunk.strip_suffix(b"\r") {
            chunk = rest;
        }
        for part in chunk.split(|&b| b == b'\r') {
            let decoded = match self.encoding {
                Encoding::Latin1 => part.iter().map(|&b| char::from(b)).collect(),
                Encoding::Utf8 => String::from_utf8(part.to_vec())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            };
            self.pending.push_back(decoded);
        }
        Ok(())
    }
}

impl LogicalLine {
    /// Split into an unescaped `(key, value)` pair.
    ///
    /// The key ends at the first unescaped `=`, `:` or whitespace. Whitespace
    /// after the key is skipped, then at most one separator, then whitespace
    /// again.
    pub fn split(&self) -> LoadResult<(String, String)> {
        let chars: Vec<char> = self.text.chars().collect();
        let len = chars.len();

        let mut key_len = 0;
        let mut value_start = len;
        let mut has_separator = false;
        let mut preceding_backslash = false;

        while key_len < len {
            let c = chars[key_len];
            if !preceding_backslash {
                if c == '=' || c == ':' {
                    value_start = key_len + 1;
                    has_separator = true;
                    break;
                }
                if is_blank(c) {
                    value_start = key_len + 1;
                    break;
                }
            }
            preceding_backslash = c == '\\' && !preceding_backslash;
            key_len += 1;
        }

        while value_start < len {
            let c = chars[value_start];
            if !is_blank(c) {
                if !has_separator && (c == '=' || c == ':') {
                    has_separator = true;
                } else {
                    break;
                }
            }
            value_start += 1;
        }

        let key = unescape(&chars[..key_len], self.line)?;
        let value = unescape(&chars[value_start..], self.line)?;
        Ok((key, value))
    }
}

/// Decode backslash escapes.
///
/// `\uXXXX` values are collected as UTF-16 units so that surrogate pairs
/// written as two escapes come back as one char. An unpaired surrogate
/// becomes U+FFFD.
pub(crate) fn unescape(chars: &[char], line: usize) -> LoadResult<String> {
    let mut units: Vec<u16> = Vec::with_capacity(chars.len());
    let mut buf = [0u16; 2];
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if c != '\\' {
            units.extend_from_slice(c.encode_utf16(&mut buf));
            continue;
        }

        let Some(&escaped) = chars.get(i) else {
            break;
        };
        i += 1;

        let decoded = match escaped {
            'u' => {
                let digits = chars
                    .get(i..i + 4)
                    .ok_or(LoadError::MalformedEscape { line })?;
                let mut unit: u16 = 0;
                for digit in digits {
                    let value = digit
                        .to_digit(16)
                        .ok_or(LoadError::MalformedEscape { line })?;
                    unit = (unit << 4) | value as u16;
                }
                units.push(unit);
                i += 4;
                continue;
            }
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{c}',
            other => other,
        };
        units.extend_from_slice(decoded.encode_utf16(&mut buf));
    }

    Ok(String::from_utf16_lossy(&units))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logical_lines(input: &str) -> Vec<(String, usize)> {
        let mut reader = LineReader::new(input.as_bytes(), Encoding::Utf8);
        let mut out = Vec::new();
        while let Some(line) = reader.next_logical().unwrap() {
            out.push((line.text, line.line));
        }
        out
    }

    fn split(text: &str) -> (String, String) {
        LogicalLine {
            text: text.to_string(),
            line: 1,
        }
        .split()
        .unwrap()
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let lines = logical_lines("# header\n\n   ! bang\n  a=1\n\t\nb=2");
        assert_eq!(
            lines,
            vec![("a=1".to_string(), 4), ("b=2".to_string(), 6)]
        );
    }

    #[test]
    fn all_line_terminators_are_recognized() {
        let lines = logical_lines("a=1\rb=2\r\nc=3\nd=4");
        let texts: Vec<_> = lines.into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, vec!["a=1", "b=2", "c=3", "d=4"]);
    }

    #[test]
    fn continuation_joins_and_trims_next_line() {
        let lines = logical_lines("fruits=apple, \\\n    banana, \\\n    pear\nnext=1");
        assert_eq!(lines[0], ("fruits=apple, banana, pear".to_string(), 1));
        assert_eq!(lines[1], ("next=1".to_string(), 4));
    }

    #[test]
    fn escaped_backslash_does_not_continue() {
        let lines = logical_lines("path=c:\\\\\nnext=1");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, "path=c:\\\\");
    }

    #[test]
    fn blank_line_ends_continuation() {
        let lines = logical_lines("a=1\\\n\nb=2");
        let texts: Vec<_> = lines.into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, vec!["a=1", "b=2"]);
    }

    #[test]
    fn continued_comment_marker_is_data() {
        let lines = logical_lines("a=x\\\n  #not-a-comment");
        assert_eq!(lines[0].0, "a=x#not-a-comment");
    }

    #[test]
    fn dangling_backslash_at_eof_is_dropped() {
        let lines = logical_lines("a=1\\");
        assert_eq!(lines[0].0, "a=1");
    }

    #[test]
    fn latin1_bytes_decode_one_to_one() {
        let bytes: &[u8] = b"caf\xe9=cr\xe8me";
        let mut reader = LineReader::new(bytes, Encoding::Latin1);
        let line = reader.next_logical().unwrap().unwrap();
        assert_eq!(line.split().unwrap(), ("café".into(), "crème".into()));
    }

    #[test]
    fn separators() {
        assert_eq!(split("a=b"), ("a".into(), "b".into()));
        assert_eq!(split("a:b"), ("a".into(), "b".into()));
        assert_eq!(split("a b"), ("a".into(), "b".into()));
        assert_eq!(split("a  =  b"), ("a".into(), "b".into()));
        assert_eq!(split("a\t: b"), ("a".into(), "b".into()));
        assert_eq!(split("a==b"), ("a".into(), "=b".into()));
        assert_eq!(split("a"), ("a".into(), "".into()));
        assert_eq!(split("=b"), ("".into(), "b".into()));
    }

    #[test]
    fn value_keeps_trailing_whitespace() {
        assert_eq!(split("a=b  "), ("a".into(), "b  ".into()));
    }

    #[test]
    fn escaped_separators_stay_in_key() {
        assert_eq!(split("a\\=b\\:c=d"), ("a=b:c".into(), "d".into()));
        assert_eq!(split("key\\ with\\ spaces=v"), ("key with spaces".into(), "v".into()));
    }

    #[test]
    fn standard_escapes() {
        assert_eq!(split("k=a\\tb\\nc\\rd\\fe"), ("k".into(), "a\tb\nc\rd\u{c}e".into()));
        assert_eq!(split("k=\\q\\\\"), ("k".into(), "q\\".into()));
    }

    #[test]
    fn unicode_escapes_and_surrogate_pairs() {
        assert_eq!(split("k=\\u00e9\\u4E2D"), ("k".into(), "é中".into()));
        assert_eq!(split("k=\\uD83D\\uDE00"), ("k".into(), "😀".into()));
        assert_eq!(split("k=\\uD83D"), ("k".into(), "\u{FFFD}".into()));
    }

    #[test]
    fn malformed_unicode_escape_is_rejected() {
        let line = LogicalLine {
            text: "k=\\u12G4".to_string(),
            line: 3,
        };
        assert!(matches!(
            line.split(),
            Err(LoadError::MalformedEscape { line: 3 })
        ));

        let truncated = LogicalLine {
            text: "k=\\u12".to_string(),
            line: 9,
        };
        assert!(matches!(
            truncated.split(),
            Err(LoadError::MalformedEscape { line: 9 })
        ));
    }
}
