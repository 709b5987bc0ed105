// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use strum_macros::{Display, EnumString};

use super::strip_sgr;

/// What the renderer does with SGR sequences embedded in cell text.
///
/// Column widths are identical in both modes, since SGR sequences never count towards a
/// cell's display width. The only difference is what ends up in the content area of the
/// rendered cell.
///
/// ```
/// use std::str::FromStr;
/// use r3bl_cli_table::CharacterFilter;
///
/// assert_eq!(CharacterFilter::from_str("strip_ansi"), Ok(CharacterFilter::StripAnsi));
/// assert_eq!(CharacterFilter::PreserveAnsi.to_string(), "preserve_ansi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CharacterFilter {
    /// Write the cell text as is, color codes included.
    #[default]
    PreserveAnsi,
    /// Remove SGR sequences from the cell text before it is written.
    StripAnsi,
}

impl CharacterFilter {
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            CharacterFilter::PreserveAnsi => Cow::Borrowed(text),
            CharacterFilter::StripAnsi => strip_sgr(text),
        }
    }
}
