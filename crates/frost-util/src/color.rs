//! Console colors and color-code stripping.
//!
//! [`ConsoleColor`] covers the ANSI palette. [`strip_color`] removes the
//! `&`/`§` legacy codes used by chat-style messages along with any palette
//! codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ANSI escape sequence for terminal output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsoleColor {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BlackBold,
    RedBold,
    GreenBold,
    YellowBold,
    BlueBold,
    MagentaBold,
    CyanBold,
    WhiteBold,
    BlackUnderlined,
    RedUnderlined,
    GreenUnderlined,
    YellowUnderlined,
    BlueUnderlined,
    MagentaUnderlined,
    CyanUnderlined,
    WhiteUnderlined,
    BlackBackground,
    RedBackground,
    GreenBackground,
    YellowBackground,
    BlueBackground,
    MagentaBackground,
    CyanBackground,
    WhiteBackground,
    BlackBright,
    RedBright,
    GreenBright,
    YellowBright,
    BlueBright,
    MagentaBright,
    CyanBright,
    WhiteBright,
    BlackBoldBright,
    RedBoldBright,
    GreenBoldBright,
    YellowBoldBright,
    BlueBoldBright,
    MagentaBoldBright,
    CyanBoldBright,
    WhiteBoldBright,
    BlackBackgroundBright,
    RedBackgroundBright,
    GreenBackgroundBright,
    YellowBackgroundBright,
    BlueBackgroundBright,
    MagentaBackgroundBright,
    CyanBackgroundBright,
    WhiteBackgroundBright,
}

impl ConsoleColor {
    /// Every color, `Reset` first.
    pub const ALL: [ConsoleColor; 57] = [
        Self::Reset,
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BlackBold,
        Self::RedBold,
        Self::GreenBold,
        Self::YellowBold,
        Self::BlueBold,
        Self::MagentaBold,
        Self::CyanBold,
        Self::WhiteBold,
        Self::BlackUnderlined,
        Self::RedUnderlined,
        Self::GreenUnderlined,
        Self::YellowUnderlined,
        Self::BlueUnderlined,
        Self::MagentaUnderlined,
        Self::CyanUnderlined,
        Self::WhiteUnderlined,
        Self::BlackBackground,
        Self::RedBackground,
        Self::GreenBackground,
        Self::YellowBackground,
        Self::BlueBackground,
        Self::MagentaBackground,
        Self::CyanBackground,
        Self::WhiteBackground,
        Self::BlackBright,
        Self::RedBright,
        Self::GreenBright,
        Self::YellowBright,
        Self::BlueBright,
        Self::MagentaBright,
        Self::CyanBright,
        Self::WhiteBright,
        Self::BlackBoldBright,
        Self::RedBoldBright,
        Self::GreenBoldBright,
        Self::YellowBoldBright,
        Self::BlueBoldBright,
        Self::MagentaBoldBright,
        Self::CyanBoldBright,
        Self::WhiteBoldBright,
        Self::BlackBackgroundBright,
        Self::RedBackgroundBright,
        Self::GreenBackgroundBright,
        Self::YellowBackgroundBright,
        Self::BlueBackgroundBright,
        Self::MagentaBackgroundBright,
        Self::CyanBackgroundBright,
        Self::WhiteBackgroundBright,
    ];

    /// The raw escape sequence.
    pub fn code(self) -> &'static str {
        match self {
            Self::Reset => "\x1b[0m",
            Self::Black => "\x1b[0;30m",
            Self::Red => "\x1b[0;31m",
            Self::Green => "\x1b[0;32m",
            Self::Yellow => "\x1b[0;33m",
            Self::Blue => "\x1b[0;34m",
            Self::Magenta => "\x1b[0;35m",
            Self::Cyan => "\x1b[0;36m",
            Self::White => "\x1b[0;37m",
            Self::BlackBold => "\x1b[1;30m",
            Self::RedBold => "\x1b[1;31m",
            Self::GreenBold => "\x1b[1;32m",
            Self::YellowBold => "\x1b[1;33m",
            Self::BlueBold => "\x1b[1;34m",
            Self::MagentaBold => "\x1b[1;35m",
            Self::CyanBold => "\x1b[1;36m",
            Self::WhiteBold => "\x1b[1;37m",
            Self::BlackUnderlined => "\x1b[4;30m",
            Self::RedUnderlined => "\x1b[4;31m",
            Self::GreenUnderlined => "\x1b[4;32m",
            Self::YellowUnderlined => "\x1b[4;33m",
            Self::BlueUnderlined => "\x1b[4;34m",
            Self::MagentaUnderlined => "\x1b[4;35m",
            Self::CyanUnderlined => "\x1b[4;36m",
            Self::WhiteUnderlined => "\x1b[4;37m",
            Self::BlackBackground => "\x1b[40m",
            Self::RedBackground => "\x1b[41m",
            Self::GreenBackground => "\x1b[42m",
            Self::YellowBackground => "\x1b[43m",
            Self::BlueBackground => "\x1b[44m",
            Self::MagentaBackground => "\x1b[45m",
            Self::CyanBackground => "\x1b[46m",
            Self::WhiteBackground => "\x1b[47m",
            Self::BlackBright => "\x1b[0;90m",
            Self::RedBright => "\x1b[0;91m",
            Self::GreenBright => "\x1b[0;92m",
            Self::YellowBright => "\x1b[0;93m",
            Self::BlueBright => "\x1b[0;94m",
            Self::MagentaBright => "\x1b[0;95m",
            Self::CyanBright => "\x1b[0;96m",
            Self::WhiteBright => "\x1b[0;97m",
            Self::BlackBoldBright => "\x1b[1;90m",
            Self::RedBoldBright => "\x1b[1;91m",
            Self::GreenBoldBright => "\x1b[1;92m",
            Self::YellowBoldBright => "\x1b[1;93m",
            Self::BlueBoldBright => "\x1b[1;94m",
            Self::MagentaBoldBright => "\x1b[1;95m",
            Self::CyanBoldBright => "\x1b[1;96m",
            Self::WhiteBoldBright => "\x1b[1;97m",
            Self::BlackBackgroundBright => "\x1b[0;100m",
            Self::RedBackgroundBright => "\x1b[0;101m",
            Self::GreenBackgroundBright => "\x1b[0;102m",
            Self::YellowBackgroundBright => "\x1b[0;103m",
            Self::BlueBackgroundBright => "\x1b[0;104m",
            Self::MagentaBackgroundBright => "\x1b[0;105m",
            Self::CyanBackgroundBright => "\x1b[0;106m",
            Self::WhiteBackgroundBright => "\x1b[0;107m",
        }
    }

    /// Wrap `input` in this color, followed by a reset.
    pub fn paint(self, input: &str) -> String {
        format!("{}{input}{}", self.code(), Self::Reset.code())
    }

    /// Remove every palette escape sequence from `input`.
    pub fn remove(input: &str) -> String {
        Self::ALL
            .iter()
            .fold(input.to_string(), |acc, color| acc.replace(color.code(), ""))
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Legacy color codes removed by [`strip_color`], in removal order.
const LEGACY_CODES: [&str; 17] = [
    "&a", "&b", "&c", "&d", "&e", "&f", "&0", "&1", "&2", "&3", "&4", "&5", "&6", "&7", "&8",
    "&9", "&r",
];

/// Strip legacy `&x` / `§x` color codes (`0`-`9`, `a`-`f` and `r`) and
/// every [`ConsoleColor`] escape sequence.
///
/// `§` is rewritten to `&` first, so `§a` and `&a` are both removed.
pub fn strip_color(input: &str) -> String {
    let normalized = input.replace('§', "&");
    let stripped = LEGACY_CODES
        .iter()
        .fold(normalized, |acc, code| acc.replace(code, ""));
    ConsoleColor::remove(&stripped)
}

/// [`strip_color`] applied to every line.
pub fn strip_color_all<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|line| strip_color(line.as_ref())).collect()
}
