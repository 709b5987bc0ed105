// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use super::{parse_sgr_sequence, sgr_constants::ESC_CHAR};

/// A slice of the scanned input. Concatenating all the fragments produced by
/// [`fragments`] (in order) yields the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiFragment<'a> {
    /// Visible text. May contain `ESC` chars that are not part of a well formed SGR
    /// sequence.
    Text(&'a str),
    /// A complete SGR sequence, eg: `"\x1b[33m"`.
    Sgr(&'a str),
}

/// Split `input` into [`AnsiFragment`]s.
///
/// ```
/// use r3bl_cli_table::{AnsiFragment, fragments};
///
/// let it = fragments("\x1b[33mfoo\x1b[0m").collect::<Vec<_>>();
/// assert_eq!(
///     it,
///     vec![
///         AnsiFragment::Sgr("\x1b[33m"),
///         AnsiFragment::Text("foo"),
///         AnsiFragment::Sgr("\x1b[0m"),
///     ]
/// );
/// ```
#[must_use]
pub fn fragments(input: &str) -> AnsiFragmentIter<'_> { AnsiFragmentIter { input } }

#[derive(Debug, Clone)]
pub struct AnsiFragmentIter<'a> {
    input: &'a str,
}

impl<'a> Iterator for AnsiFragmentIter<'a> {
    type Item = AnsiFragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.input.is_empty() {
            return None;
        }

        if let Ok((remainder, sequence)) = parse_sgr_sequence(self.input) {
            self.input = remainder;
            return Some(AnsiFragment::Sgr(sequence));
        }

        // The input does not start w/ an SGR sequence, so at least 1 char of text is
        // consumed. Text runs until the next `ESC` that starts a well formed sequence.
        let mut search_from = 0;
        let split_at = loop {
            match self.input[search_from..].find(ESC_CHAR) {
                None => break self.input.len(),
                Some(offset) => {
                    let esc_index = search_from + offset;
                    if esc_index > 0 && parse_sgr_sequence(&self.input[esc_index..]).is_ok()
                    {
                        break esc_index;
                    }
                    search_from = esc_index + ESC_CHAR.len_utf8();
                }
            }
        };

        let (text, remainder) = self.input.split_at(split_at);
        self.input = remainder;
        Some(AnsiFragment::Text(text))
    }
}

/// Remove every well formed SGR sequence from `input`. Borrows when there is nothing to
/// remove.
#[must_use]
pub fn strip_sgr(input: &str) -> Cow<'_, str> {
    if !input.contains(ESC_CHAR) {
        return Cow::Borrowed(input);
    }

    let mut acc = String::with_capacity(input.len());
    let mut removed_any = false;
    for fragment in fragments(input) {
        match fragment {
            AnsiFragment::Text(text) => acc.push_str(text),
            AnsiFragment::Sgr(_) => removed_any = true,
        }
    }

    if removed_any {
        Cow::Owned(acc)
    } else {
        Cow::Borrowed(input)
    }
}

/// The number of visible units in `input`: one per code point, with SGR sequences
/// contributing nothing.
#[must_use]
pub fn display_width(input: &str) -> usize {
    if !input.contains(ESC_CHAR) {
        return input.chars().count();
    }

    fragments(input)
        .map(|fragment| match fragment {
            AnsiFragment::Text(text) => text.chars().count(),
            AnsiFragment::Sgr(_) => 0,
        })
        .sum()
}
