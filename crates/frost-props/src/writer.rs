//! Writing the `.properties` text format.
//!
//! Output is byte-for-byte what `java.util.Properties.store(OutputStream, ..)`
//! produces: an optional `#` comment block, a `#` timestamp line, then one
//! escaped `key=value` line per entry, encoded as ISO-8859-1.

use std::io::{self, BufWriter, Write};

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Line terminator written after every line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineSeparator {
    #[default]
    Lf,
    CrLf,
}

impl LineSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Options controlling how a property list is written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    /// Write the `#<date>` line after the comment block.
    pub timestamp: bool,
    /// Terminator for every written line.
    pub line_separator: LineSeparator,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            timestamp: true,
            line_separator: LineSeparator::Lf,
        }
    }
}

impl StoreOptions {
    /// Options producing reproducible output: no timestamp line.
    pub fn without_timestamp() -> Self {
        Self {
            timestamp: false,
            ..Default::default()
        }
    }
}

/// Escape a key. Every space is escaped.
pub fn escape_key(key: &str) -> String {
    escape(key, true)
}

/// Escape a value. Only a leading space is escaped.
pub fn escape_value(value: &str) -> String {
    escape(value, false)
}

fn escape(input: &str, escape_space: bool) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for (index, c) in input.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' => {
                if index == 0 || escape_space {
                    out.push('\\');
                }
                out.push(' ');
            }
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            '\u{20}'..='\u{7e}' => out.push(c),
            _ => push_unicode_escape(&mut out, c),
        }
    }
    out
}

/// Appends `c` as one or two `\uXXXX` escapes (UTF-16 units, uppercase).
fn push_unicode_escape(out: &mut String, c: char) {
    let mut buf = [0u16; 2];
    for unit in c.encode_utf16(&mut buf) {
        out.push_str(&format!("\\u{unit:04X}"));
    }
}

/// Render `comment` as `#`-prefixed lines.
///
/// Embedded line breaks start a new comment line; a `#` is inserted unless
/// the text after the break already starts with `#` or `!`. Chars above
/// U+00FF are escaped.
pub fn format_comment(comment: &str, separator: LineSeparator) -> String {
    let sep = separator.as_str();
    let chars: Vec<char> = comment.chars().collect();
    let mut out = String::with_capacity(comment.len() + 2);
    out.push('#');

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '\n' | '\r' => {
                out.push_str(sep);
                if c == '\r' && chars.get(i + 1) == Some(&'\n') {
                    i += 1;
                }
                if !matches!(chars.get(i + 1), Some('#') | Some('!')) {
                    out.push('#');
                }
            }
            c if u32::from(c) > 0xFF => push_unicode_escape(&mut out, c),
            c => out.push(c),
        }
        i += 1;
    }
    out.push_str(sep);
    out
}

/// Timestamp in the `EEE MMM dd HH:mm:ss zzz yyyy` shape.
pub fn timestamp() -> String {
    Local::now().format("%a %b %d %H:%M:%S %Z %Y").to_string()
}

/// Write a full property list to `destination`.
pub(crate) fn write_properties<'a, W, I>(
    destination: W,
    comment: Option<&str>,
    entries: I,
    options: &StoreOptions,
) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let sep = options.line_separator.as_str();
    let mut out = BufWriter::new(destination);

    if let Some(comment) = comment {
        write_latin1(&mut out, &format_comment(comment, options.line_separator))?;
    }
    if options.timestamp {
        write_latin1(&mut out, &format!("#{}{sep}", timestamp()))?;
    }

    let mut written = 0;
    for (key, value) in entries {
        let line = format!("{}={}{sep}", escape_key(key), escape_value(value));
        write_latin1(&mut out, &line)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Every char reaching this point is at most U+00FF.
fn write_latin1<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let bytes: Vec<u8> = text
        .chars()
        .map(|c| u8::try_from(c).unwrap_or(b'?'))
        .collect();
    out.write_all(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_escaping() {
        assert_eq!(escape_key("a b"), "a\\ b");
        assert_eq!(escape_key("a=b:c"), "a\\=b\\:c");
        assert_eq!(escape_key("#hash!bang"), "\\#hash\\!bang");
        assert_eq!(escape_key("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn value_escaping_only_escapes_leading_space() {
        assert_eq!(escape_value(" a b "), "\\ a b ");
        assert_eq!(escape_value("x=y"), "x\\=y");
    }

    #[test]
    fn control_characters_use_short_escapes() {
        assert_eq!(escape_value("a\tb\nc\rd\u{c}e"), "a\\tb\\nc\\rd\\fe");
        assert_eq!(escape_value("\u{0}"), "\\u0000");
        assert_eq!(escape_value("\u{7f}"), "\\u007F");
    }

    #[test]
    fn non_ascii_is_unicode_escaped() {
        assert_eq!(escape_value("é"), "\\u00E9");
        assert_eq!(escape_key("ключ"), "\\u043A\\u043B\\u044E\\u0447");
        assert_eq!(escape_value("😀"), "\\uD83D\\uDE00");
    }

    #[test]
    fn comment_line_breaks() {
        assert_eq!(format_comment("hello", LineSeparator::Lf), "#hello\n");
        assert_eq!(
            format_comment("one\ntwo\r\nthree", LineSeparator::Lf),
            "#one\n#two\n#three\n"
        );
        assert_eq!(format_comment("a\n!b", LineSeparator::Lf), "#a\n!b\n");
        assert_eq!(format_comment("a\n", LineSeparator::Lf), "#a\n#\n");
    }

    #[test]
    fn comment_keeps_latin1_and_escapes_above() {
        assert_eq!(format_comment("café 中", LineSeparator::Lf), "#café \\u4E2D\n");
    }

    #[test]
    fn crlf_separator() {
        let mut buf = Vec::new();
        let options = StoreOptions {
            timestamp: false,
            line_separator: LineSeparator::CrLf,
        };
        write_properties(&mut buf, Some("c"), [("a", "1")], &options).unwrap();
        assert_eq!(buf, b"#c\r\na=1\r\n");
    }

    #[test]
    fn latin1_comment_bytes_are_single_bytes() {
        let mut buf = Vec::new();
        let entries: Vec<(&str, &str)> = Vec::new();
        write_properties(&mut buf, Some("é"), entries, &StoreOptions::without_timestamp()).unwrap();
        assert_eq!(buf, b"#\xe9\n");
    }

    #[test]
    fn timestamp_line_is_a_comment() {
        let mut buf = Vec::new();
        let written = write_properties(&mut buf, None, [("k", "v")], &StoreOptions::default())
            .unwrap();
        assert_eq!(written, 1);
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('#'));
        assert_eq!(lines[1], "k=v");
    }
}
