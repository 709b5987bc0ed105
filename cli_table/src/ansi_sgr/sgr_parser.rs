// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while},
          combinator::recognize};

pub mod sgr_constants {
    pub const ESC_CHAR: char = '\x1b';
    pub const CSI: &str = "\x1b[";
    pub const SGR_FINAL: &str = "m";
    pub const PARAM_SEPARATOR: char = ';';
    pub const SUB_PARAM_SEPARATOR: char = ':';
}
use sgr_constants::{CSI, PARAM_SEPARATOR, SGR_FINAL, SUB_PARAM_SEPARATOR};

fn is_sgr_param_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == PARAM_SEPARATOR || ch == SUB_PARAM_SEPARATOR
}

/// Matches one complete SGR sequence at the start of `input`, and outputs the entire
/// sequence (introducer, params, and final byte).
///
/// # Errors
///
/// Returns a nom parsing error if `input` does not start with a well formed SGR
/// sequence.
#[rustfmt::skip]
pub fn parse_sgr_sequence(input: &str) -> IResult<&str, &str> {
    recognize(
        (
            /* introducer */ tag(CSI),
            /* params */ take_while(is_sgr_param_char),
            /* final */ tag(SGR_FINAL),
        )
    ).parse(input)
}

#[cfg(test)]
mod tests {
    use nom::{Err as NomErr,
              error::{Error, ErrorKind}};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("\x1b[0m", "\x1b[0m", "" ; "reset")]
    #[test_case("\x1b[m", "\x1b[m", "" ; "empty params")]
    #[test_case("\x1b[33mfoo", "\x1b[33m", "foo" ; "fg color then text")]
    #[test_case("\x1b[38;5;150mfoo", "\x1b[38;5;150m", "foo" ; "ansi 256")]
    #[test_case("\x1b[38:2::175:215:135mx", "\x1b[38:2::175:215:135m", "x" ; "colon sub params")]
    fn test_parse_sgr_sequence_ok(input: &str, expected_seq: &str, expected_rem: &str) {
        assert_eq!(parse_sgr_sequence(input), Ok((expected_rem, expected_seq)));
    }

    #[test]
    fn test_parse_sgr_sequence_rejects_other_csi() {
        assert_eq!(
            parse_sgr_sequence("\x1b[2J"),
            Err(NomErr::Error(Error {
                input: "J",
                code: ErrorKind::Tag
            }))
        );
    }

    #[test]
    fn test_parse_sgr_sequence_rejects_unterminated() {
        assert_eq!(
            parse_sgr_sequence("\x1b[31"),
            Err(NomErr::Error(Error {
                input: "",
                code: ErrorKind::Tag
            }))
        );
    }

    #[test]
    fn test_parse_sgr_sequence_rejects_plain_text() {
        assert_eq!(
            parse_sgr_sequence("foo"),
            Err(NomErr::Error(Error {
                input: "foo",
                code: ErrorKind::Tag
            }))
        );
    }
}
