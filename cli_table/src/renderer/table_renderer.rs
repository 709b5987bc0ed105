// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Alignment, CORNER_GLYPH, CharacterFilter, GroupSlot, HORIZ_LINE_GLYPH,
            NEW_LINE, SPACE_GLYPH, Table, TableLayout, VERT_LINE_GLYPH, display_width,
            push_repeated};

/// The emission pass. Holds the [`TableLayout`] computed from a [Table], and produces
/// each rendered line, in order:
///
/// ```text
/// +---------------+---------------+   <- group border (only w/ header groups)
/// |  left group   |   right group |   <- group row (only w/ header groups)
/// +---------------+---------------+   <- group border (only w/ header groups)
/// | left | center |         right |   <- header row
/// +------+--------+---------------+   <- column border
/// | 1    |   2    |             3 |   <- data rows
/// +------+--------+---------------+   <- column border (only if there are rows)
/// ```
///
/// Without header groups, the first line is a column border instead.
#[derive(Debug)]
pub struct TableRenderer<'a> {
    table: &'a Table,
    layout: TableLayout,
    filter: CharacterFilter,
}

impl<'a> TableRenderer<'a> {
    #[must_use]
    pub fn new(table: &'a Table, filter: CharacterFilter) -> Self {
        Self {
            table,
            layout: TableLayout::measure(table),
            filter,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &TableLayout { &self.layout }

    /// Call `receiver` with each line (new line included), stopping at the first error
    /// that it returns. The same line buffer is reused for every line.
    ///
    /// # Errors
    ///
    /// Returns the first error returned by `receiver`, unchanged.
    pub fn try_for_each_line<E>(
        &self,
        mut receiver: impl FnMut(&str) -> Result<(), E>,
    ) -> Result<(), E> {
        let line = &mut String::with_capacity(self.layout.line_width() + 1);

        if self.layout.has_groups() {
            self.write_group_border(line);
            receiver(line.as_str())?;
            self.write_group_row(line);
            receiver(line.as_str())?;
            self.write_group_border(line);
            receiver(line.as_str())?;
        } else {
            self.write_column_border(line);
            receiver(line.as_str())?;
        }

        self.write_header_row(line);
        receiver(line.as_str())?;
        self.write_column_border(line);
        receiver(line.as_str())?;

        if !self.table.rows().is_empty() {
            for row in self.table.rows() {
                self.write_data_row(line, row);
                receiver(line.as_str())?;
            }
            self.write_column_border(line);
            receiver(line.as_str())?;
        }

        Ok(())
    }

    fn write_column_border(&self, acc: &mut String) {
        acc.clear();
        for column in 0..self.table.column_count() {
            acc.push(CORNER_GLYPH);
            push_repeated(acc, HORIZ_LINE_GLYPH, self.layout.column_cell_width(column));
        }
        acc.push(CORNER_GLYPH);
        acc.push(NEW_LINE);
    }

    fn write_group_border(&self, acc: &mut String) {
        acc.clear();
        for slot in self.layout.group_slots() {
            acc.push(CORNER_GLYPH);
            push_repeated(acc, HORIZ_LINE_GLYPH, self.layout.group_cell_width(slot));
        }
        acc.push(CORNER_GLYPH);
        acc.push(NEW_LINE);
    }

    fn write_group_row(&self, acc: &mut String) {
        acc.clear();
        for slot in self.layout.group_slots() {
            let (text, alignment) = self.group_label(slot);
            acc.push(VERT_LINE_GLYPH);
            self.write_cell(acc, text, alignment, self.layout.group_content_width(slot));
        }
        acc.push(VERT_LINE_GLYPH);
        acc.push(NEW_LINE);
    }

    fn write_header_row(&self, acc: &mut String) {
        acc.clear();
        for column in 0..self.table.column_count() {
            acc.push(VERT_LINE_GLYPH);
            self.write_cell(
                acc,
                self.table.header_text(column),
                self.table.column_alignment(column),
                self.layout.column_widths()[column],
            );
        }
        acc.push(VERT_LINE_GLYPH);
        acc.push(NEW_LINE);
    }

    fn write_data_row(&self, acc: &mut String, row: &[String]) {
        acc.clear();
        for (column, cell) in row.iter().enumerate() {
            acc.push(VERT_LINE_GLYPH);
            self.write_cell(
                acc,
                cell,
                self.table.column_alignment(column),
                self.layout.column_widths()[column],
            );
        }
        acc.push(VERT_LINE_GLYPH);
        acc.push(NEW_LINE);
    }

    /// Padding, then the filtered text aligned in `field_width`, then padding.
    fn write_cell(
        &self,
        acc: &mut String,
        text: &str,
        alignment: Alignment,
        field_width: usize,
    ) {
        let padding = self.layout.padding();
        let content = self.filter.apply(text);
        push_repeated(acc, SPACE_GLYPH, padding);
        alignment.align_into(acc, &content, display_width(text), field_width);
        push_repeated(acc, SPACE_GLYPH, padding);
    }

    fn group_label(&self, slot: &GroupSlot) -> (&'a str, Alignment) {
        match slot.group_index {
            Some(group_index) => {
                let group = &self.table.header_groups()[group_index];
                (group.text.as_str(), group.alignment)
            }
            None => ("", Alignment::Left),
        }
    }
}
