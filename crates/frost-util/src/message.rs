//! Positional message formatting.
//!
//! Patterns use `{0}`, `{1}`, ... placeholders. A single quote starts a
//! literal section (`'{0}'` prints `{0}`) and `''` prints one quote.
//! Placeholders that name a missing argument, or are not numeric, are kept
//! verbatim.

use std::fmt::Display;

use crate::color::{strip_color, ConsoleColor};

pub fn format(pattern: &str, args: &[&dyn Display]) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut quoted = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
            } else {
                quoted = !quoted;
                i += 1;
            }
            continue;
        }
        if quoted || c != '{' {
            out.push(c);
            i += 1;
            continue;
        }

        let Some(close) = chars[i..].iter().position(|&c| c == '}').map(|p| i + p) else {
            out.extend(&chars[i..]);
            break;
        };
        let inner: String = chars[i + 1..close].iter().collect();
        // `{0,number}` style suffixes are accepted and ignored.
        let index = inner.split(',').next().unwrap_or("").trim();
        match index.parse::<usize>().ok().and_then(|n| args.get(n)) {
            Some(arg) => out.push_str(&arg.to_string()),
            None => {
                out.push('{');
                out.push_str(&inner);
                out.push('}');
            }
        }
        i = close + 1;
    }
    out
}

/// [`format`], optionally stripping legacy color codes from the pattern first.
pub fn format_stripped(strip: bool, pattern: &str, args: &[&dyn Display]) -> String {
    if strip {
        format(&strip_color(pattern), args)
    } else {
        format(pattern, args)
    }
}

/// [`format`] with the pattern painted in `color`.
pub fn format_colored(color: ConsoleColor, pattern: &str, args: &[&dyn Display]) -> String {
    format(&color.paint(pattern), args)
}
