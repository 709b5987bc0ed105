// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors returned by the [`crate::Table`] configuration calls. A call that returns one
/// of these has not changed the table.
///
/// Rendering does not use this type. Sink failures are surfaced as the
/// [`std::io::Error`] that the sink produced.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("📐 Could not create a table with 0 columns")]
    #[diagnostic(
        code(r3bl_cli_table::no_columns),
        help("Pass a column count of 1 or more to `Table::new()`")
    )]
    NoColumns,

    #[error("🔢 Column {column} is out of range, the table has {column_count} column(s)")]
    #[diagnostic(
        code(r3bl_cli_table::out_of_range),
        help("Column indices start at 0, and must be less than the column count")
    )]
    OutOfRange { column: usize, column_count: usize },

    #[error(
        "🧩 Header group span {column_span} is invalid, {remaining} column(s) are left to group"
    )]
    #[diagnostic(
        code(r3bl_cli_table::invalid_span),
        help("A header group must span at least 1 of the columns not yet grouped")
    )]
    InvalidSpan { column_span: usize, remaining: usize },

    #[error("📏 Row {row_index} has {actual} cell(s), the table has {expected} column(s)")]
    #[diagnostic(
        code(r3bl_cli_table::column_count_mismatch),
        help("Every row must have exactly one cell per column, no row from this call was added")
    )]
    ColumnCountMismatch {
        row_index: usize,
        expected: usize,
        actual: usize,
    },
}
