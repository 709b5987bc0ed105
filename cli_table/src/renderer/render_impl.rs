// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{convert::Infallible,
          fmt::{Display, Formatter, Result as FmtResult},
          io::Write};

use crate::{CharacterFilter, DEBUG_CLI_TABLE, Table, TableRenderer};

impl Table {
    /// Render the table into `sink`, one line at a time. The table is not modified, so
    /// rendering the same table again produces the same bytes.
    ///
    /// # Errors
    ///
    /// Returns the first error that `sink` produces. No further lines are written after
    /// it, and lines that were already written are not rolled back.
    pub fn render(
        &self,
        sink: &mut impl Write,
        filter: CharacterFilter,
    ) -> std::io::Result<()> {
        let renderer = TableRenderer::new(self, filter);
        let mut bytes_written = 0;

        let result: std::io::Result<()> = renderer.try_for_each_line(|line| {
            sink.write_all(line.as_bytes())?;
            bytes_written += line.len();
            Ok(())
        });

        DEBUG_CLI_TABLE.then(|| match &result {
            Ok(()) => tracing::trace!(
                message = "🖨️ Table rendered",
                filter = %filter,
                rows = self.row_count(),
                bytes_written = bytes_written,
            ),
            Err(error) => tracing::debug!(
                message = "🖨️ Table render stopped by sink error",
                error = %error,
                bytes_written = bytes_written,
            ),
        });

        result
    }

    /// Render the table into a new [String].
    #[must_use]
    pub fn render_to_string(&self, filter: CharacterFilter) -> String {
        let renderer = TableRenderer::new(self, filter);
        let mut acc = String::with_capacity(
            renderer.layout().line_width() * (self.row_count() + 6),
        );
        let Ok(()) = renderer.try_for_each_line(|line| {
            acc.push_str(line);
            Ok::<(), Infallible>(())
        });
        acc
    }
}

/// Renders w/ [`CharacterFilter::PreserveAnsi`].
impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        TableRenderer::new(self, CharacterFilter::PreserveAnsi)
            .try_for_each_line(|line| f.write_str(line))
    }
}
