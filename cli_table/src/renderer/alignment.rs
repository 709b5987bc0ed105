// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumString};

use super::{SPACE_GLYPH, push_repeated};

/// Horizontal placement of text inside a field that is wider than the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Returns the number of spaces to put before and after text that is `text_width`
    /// wide, so that it fills `field_width`. When centering leaves an odd number of
    /// spaces, the extra one goes on the right.
    #[must_use]
    pub fn split_leftover(&self, text_width: usize, field_width: usize) -> (usize, usize) {
        let leftover = field_width.saturating_sub(text_width);
        match self {
            Alignment::Left => (0, leftover),
            Alignment::Right => (leftover, 0),
            Alignment::Center => (leftover / 2, leftover - leftover / 2),
        }
    }

    /// Push `text` onto `acc`, surrounded by enough spaces to fill `field_width`.
    /// `text_width` is the display width of `text`, which is not the same as its byte
    /// length (or even its char count) when it contains SGR sequences.
    pub fn align_into(
        &self,
        acc: &mut String,
        text: &str,
        text_width: usize,
        field_width: usize,
    ) {
        let (before, after) = self.split_leftover(text_width, field_width);
        push_repeated(acc, SPACE_GLYPH, before);
        acc.push_str(text);
        push_repeated(acc, SPACE_GLYPH, after);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn align(alignment: Alignment, text: &str, field_width: usize) -> String {
        let mut acc = String::new();
        alignment.align_into(&mut acc, text, text.chars().count(), field_width);
        acc
    }

    #[test_case(Alignment::Left, "1", 10, "1         ")]
    #[test_case(Alignment::Center, "2", 10, "    2     ")]
    #[test_case(Alignment::Right, "3", 9, "        3")]
    #[test_case(Alignment::Center, "2", 6, "  2   " ; "odd leftover extra space on right")]
    #[test_case(Alignment::Center, "ab", 6, "  ab  " ; "even leftover")]
    #[test_case(Alignment::Center, "1", 4, " 1  ")]
    #[test_case(Alignment::Left, "", 3, "   " ; "empty text")]
    #[test_case(Alignment::Right, "1234", 4, "1234" ; "exact fit")]
    fn test_align_into(alignment: Alignment, text: &str, field_width: usize, expected: &str) {
        assert_eq!(align(alignment, text, field_width), expected);
    }

    #[test]
    fn test_align_into_uses_display_width() {
        let mut acc = String::new();
        let colored = "\x1b[33mab\x1b[0m";
        Alignment::Right.align_into(&mut acc, colored, 2, 4);
        assert_eq!(acc, format!("  {colored}"));
    }

    #[test]
    fn test_default_is_left() {
        assert_eq!(Alignment::default(), Alignment::Left);
    }
}
