// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The only structural characters that appear in rendered output.

pub const CORNER_GLYPH: char = '+';
pub const HORIZ_LINE_GLYPH: char = '-';
pub const VERT_LINE_GLYPH: char = '|';
pub const SPACE_GLYPH: char = ' ';
pub const NEW_LINE: char = '\n';

/// Push `count` copies of `glyph` onto `acc`.
pub fn push_repeated(acc: &mut String, glyph: char, count: usize) {
    acc.extend(std::iter::repeat_n(glyph, count));
}
