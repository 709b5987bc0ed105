// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_cli_table::{Alignment, Table, TableError};

#[test]
fn test_table_writer_errors() {
    let mut table = Table::new(3).unwrap();

    assert_eq!(
        table.set_header(3, "foo", Alignment::Center),
        Err(TableError::OutOfRange {
            column: 3,
            column_count: 3
        })
    );
    assert_eq!(table.set_header(2, "foo", Alignment::Center), Ok(()));

    // Fewer and more columns than required.
    for row in [vec![""], vec!["", "", "", ""]] {
        let actual = row.len();
        assert_eq!(
            table.append_rows([row]),
            Err(TableError::ColumnCountMismatch {
                row_index: 0,
                expected: 3,
                actual
            })
        );
    }
    assert_eq!(table.row_count(), 0);

    assert_eq!(
        table.add_header_group(4, "g0", Alignment::Left),
        Err(TableError::InvalidSpan {
            column_span: 4,
            remaining: 3
        })
    );
    assert!(table.header_groups().is_empty());
}

#[test]
fn test_errors_convert_into_miette_reports() -> miette::Result<()> {
    let mut table = Table::new(2)?;
    table.set_header(1, "ok", Alignment::Left)?;

    let report: miette::Report = table
        .append_row(["just one"])
        .expect_err("row is too short")
        .into();
    assert_eq!(
        report.to_string(),
        "📏 Row 0 has 1 cell(s), the table has 2 column(s)"
    );
    Ok(())
}
