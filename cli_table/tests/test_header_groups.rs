// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_cli_table::{Alignment, CharacterFilter, Table};
use test_case::test_case;

const ALIGNMENTS: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

fn build_table(headers: [&str; 3], groups: &[(usize, &str)]) -> Table {
    let mut table = Table::new(headers.len()).unwrap();
    for (column, header) in headers.iter().enumerate() {
        table.set_header(column, *header, ALIGNMENTS[column]).unwrap();
    }
    for (column_span, text) in groups {
        table
            .add_header_group(*column_span, *text, Alignment::Center)
            .unwrap();
    }
    table
}

#[test_case(
    ["1", "2", "3"],
    "\
+-------+-+
|group 0|1|
+-------+-+
|1|  2  |3|
+-+-----+-+
" ; "narrow columns are widened to fit the group label"
)]
#[test_case(
    ["long cell header", "2", "3"],
    "\
+------------------+-+
|     group 0      |1|
+------------------+-+
|long cell header|2|3|
+----------------+-+-+
" ; "group label is centered in wide columns"
)]
fn test_header_groups(headers: [&str; 3], expected: &str) {
    let table = build_table(headers, &[(2, "group 0"), (1, "1")]);
    assert_eq!(table.render_to_string(CharacterFilter::StripAnsi), expected);
}

#[test]
fn test_header_groups_with_padding_and_rows() {
    let mut table = Table::new(3).unwrap();
    table.set_padding(1);
    table.set_header(0, "left", Alignment::Left).unwrap();
    table.set_header(1, "center", Alignment::Center).unwrap();
    table.set_header(2, "right", Alignment::Right).unwrap();
    table
        .add_header_group(2, "left group", Alignment::Center)
        .unwrap();
    table
        .add_header_group(1, "right group", Alignment::Right)
        .unwrap();
    table.append_row(["1", "2", "3"]).unwrap();
    table
        .append_rows([["1", "2", "3"], ["four", "five", "six"]])
        .unwrap();

    let expected = "\
+---------------+---------------+
|  left group   |   right group |
+---------------+---------------+
| left | center |         right |
+------+--------+---------------+
| 1    |   2    |             3 |
| 1    |   2    |             3 |
| four |  five  |           six |
+------+--------+---------------+
";
    assert_eq!(table.render_to_string(CharacterFilter::PreserveAnsi), expected);
}

#[test]
fn test_partial_groups_get_a_blank_filler() {
    let table = build_table(["a", "b", "c"], &[(1, "g")]);
    let expected = "\
+-+---+
|g|   |
+-+---+
|a|b|c|
+-+-+-+
";
    assert_eq!(table.render_to_string(CharacterFilter::PreserveAnsi), expected);
}

#[test]
fn test_group_label_odd_leftover_goes_right() {
    let table = build_table(["abc", "d", "e"], &[(2, "g"), (1, "")]);
    let expected = "\
+-----+-+
|  g  | |
+-----+-+
|abc|d|e|
+---+-+-+
";
    assert_eq!(table.render_to_string(CharacterFilter::PreserveAnsi), expected);

    // "g" in a 6 wide group content area: 5 spaces left over, split 2 / 3.
    let table = build_table(["abcd", "d", "e"], &[(2, "g"), (1, "")]);
    let expected = "\
+------+-+
|  g   | |
+------+-+
|abcd|d|e|
+----+-+-+
";
    assert_eq!(table.render_to_string(CharacterFilter::PreserveAnsi), expected);
}

#[test]
fn test_every_line_has_the_same_width() {
    let table = build_table(["long cell header", "2", "3"], &[(1, "a much longer group label")]);
    let rendered = table.render_to_string(CharacterFilter::PreserveAnsi);
    let widths = rendered
        .lines()
        .map(|line| line.chars().count())
        .collect::<Vec<_>>();
    assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{rendered}");
}
