// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use crate::{Alignment, DEBUG_CLI_TABLE, TableError};

pub mod sizing {
    use super::SmallVec;

    /// Most tables are narrow. Spill to the heap beyond this many columns or groups.
    pub const INLINE_VEC_SIZE: usize = 8;
    pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
}
use sizing::InlineVec;

/// One data row. Its length always equals the owning table's column count.
pub type Row = Vec<String>;

/// Header text and alignment for a single column. The alignment applies to the header
/// and to every data cell in that column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderCell {
    pub text: String,
    pub alignment: Alignment,
}

/// A label rendered above `column_span` adjacent columns. Groups are laid out left to
/// right in the order that they were added to the [Table].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroup {
    pub text: String,
    pub column_span: usize,
    pub alignment: Alignment,
}

/// The table model. It is configured incrementally, and each configuration call is
/// validated on its own: a call that fails leaves the table exactly as it was.
///
/// Rendering only borrows the table (see [`Table::render`]), so the same table can be
/// rendered any number of times.
///
/// The table is a plain owned value. If it has to be shared between threads, wrap it in
/// a [`std::sync::Mutex`] and lock around configuration and render calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    column_count: usize,
    headers: InlineVec<Option<HeaderCell>>,
    header_groups: InlineVec<HeaderGroup>,
    rows: Vec<Row>,
    padding: usize,
}

impl Table {
    /// Create a table with a fixed number of columns, no headers, no header groups, no
    /// rows, and 0 padding.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NoColumns`] if `column_count` is 0.
    pub fn new(column_count: usize) -> Result<Self, TableError> {
        if column_count == 0 {
            return reject("new", TableError::NoColumns);
        }
        Ok(Self {
            column_count,
            headers: (0..column_count).map(|_| None).collect(),
            header_groups: InlineVec::new(),
            rows: Vec::new(),
            padding: 0,
        })
    }

    /// Set (or overwrite) the header of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfRange`] if `column` is not a valid column index.
    pub fn set_header(
        &mut self,
        column: usize,
        text: impl Into<String>,
        alignment: Alignment,
    ) -> Result<(), TableError> {
        if column >= self.column_count {
            return reject(
                "set_header",
                TableError::OutOfRange {
                    column,
                    column_count: self.column_count,
                },
            );
        }
        self.headers[column] = Some(HeaderCell {
            text: text.into(),
            alignment,
        });
        Ok(())
    }

    /// Append a header group that spans the next `column_span` ungrouped columns.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidSpan`] if `column_span` is 0, or if it is larger than
    /// the number of columns that are not yet covered by a group.
    pub fn add_header_group(
        &mut self,
        column_span: usize,
        text: impl Into<String>,
        alignment: Alignment,
    ) -> Result<(), TableError> {
        let remaining = self.ungrouped_column_count();
        if column_span == 0 || column_span > remaining {
            return reject(
                "add_header_group",
                TableError::InvalidSpan {
                    column_span,
                    remaining,
                },
            );
        }
        self.header_groups.push(HeaderGroup {
            text: text.into(),
            column_span,
            alignment,
        });
        Ok(())
    }

    /// Set the number of spaces on each side of every cell's content. Negative values
    /// are clamped to 0.
    pub fn set_padding(&mut self, padding: isize) {
        self.padding = usize::try_from(padding).unwrap_or(0);
    }

    /// Append a single row.
    ///
    /// # Errors
    ///
    /// See [`Table::append_rows`].
    pub fn append_row<R, C>(&mut self, row: R) -> Result<(), TableError>
    where
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.append_rows([row])
    }

    /// Append rows, all or nothing: if any row has the wrong number of cells, none of
    /// the rows passed to this call are added. Rows from earlier calls are kept.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnCountMismatch`] for the first row (its index is
    /// relative to this call) whose cell count does not equal the column count.
    pub fn append_rows<I, R, C>(&mut self, rows: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let mut staged: Vec<Row> = Vec::new();
        for (row_index, row) in rows.into_iter().enumerate() {
            let row: Row = row.into_iter().map(Into::into).collect();
            if row.len() != self.column_count {
                return reject(
                    "append_rows",
                    TableError::ColumnCountMismatch {
                        row_index,
                        expected: self.column_count,
                        actual: row.len(),
                    },
                );
            }
            staged.push(row);
        }
        self.rows.extend(staged);
        Ok(())
    }
}

mod accessors {
    use super::{HeaderCell, HeaderGroup, Row, Table};
    use crate::Alignment;

    impl Table {
        #[must_use]
        pub fn column_count(&self) -> usize { self.column_count }

        #[must_use]
        pub fn padding(&self) -> usize { self.padding }

        /// `None` if the column is out of range, or has no header.
        #[must_use]
        pub fn header(&self, column: usize) -> Option<&HeaderCell> {
            self.headers.get(column).and_then(Option::as_ref)
        }

        /// Header text of `column`, or `""` if it has none.
        #[must_use]
        pub fn header_text(&self, column: usize) -> &str {
            self.header(column).map_or("", |it| it.text.as_str())
        }

        /// Alignment of `column`, [`Alignment::Left`] if it has no header.
        #[must_use]
        pub fn column_alignment(&self, column: usize) -> Alignment {
            self.header(column)
                .map_or(Alignment::default(), |it| it.alignment)
        }

        #[must_use]
        pub fn header_groups(&self) -> &[HeaderGroup] { &self.header_groups }

        #[must_use]
        pub fn rows(&self) -> &[Row] { &self.rows }

        #[must_use]
        pub fn row_count(&self) -> usize { self.rows.len() }

        /// Columns that are not covered by any header group yet.
        #[must_use]
        pub fn ungrouped_column_count(&self) -> usize {
            let grouped: usize = self.header_groups.iter().map(|it| it.column_span).sum();
            self.column_count - grouped
        }
    }
}

fn reject<T>(operation: &'static str, error: TableError) -> Result<T, TableError> {
    DEBUG_CLI_TABLE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🧮 Table configuration call rejected",
            operation = operation,
            error = %error,
        );
    });
    Err(error)
}
