// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{DEBUG_CLI_TABLE, Table, display_width, sizing::InlineVec};

/// Where a header group sits in the layout. The filler slot, which covers the columns
/// that no group was added for, has no `group_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSlot {
    pub columns: Range<usize>,
    /// Index into [`Table::header_groups`].
    pub group_index: Option<usize>,
}

impl GroupSlot {
    #[must_use]
    pub fn column_span(&self) -> usize { self.columns.len() }

    #[must_use]
    pub fn last_column(&self) -> usize { self.columns.end - 1 }
}

/// Result of the measure pass.
///
/// - Column width: the widest display width of the header and all data cells in a
///   column. Padding is not included.
/// - Column cell width: column width plus padding on both sides. This is the run of `-`
///   between two `+` in a border line.
/// - Group cell width: the cell widths of the spanned columns, plus the `|` separators
///   between them that the group cell absorbs.
///
/// A group label is laid out with its own padding inside the group cell, so it needs
/// `display_width(label) + 2 * padding` columns of the group's content area. If the
/// spanned columns are too narrow for that, the last spanned column is widened by the
/// difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    padding: usize,
    column_widths: InlineVec<usize>,
    group_slots: InlineVec<GroupSlot>,
}

impl TableLayout {
    #[must_use]
    pub fn measure(table: &Table) -> Self {
        let padding = table.padding();

        let column_widths = (0..table.column_count())
            .map(|column| {
                table
                    .rows()
                    .iter()
                    .map(|row| display_width(&row[column]))
                    .fold(display_width(table.header_text(column)), usize::max)
            })
            .collect();

        let mut it = Self {
            padding,
            column_widths,
            group_slots: assign_group_slots(table),
        };
        it.widen_columns_for_group_labels(table);

        DEBUG_CLI_TABLE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📐 Table measured",
                padding = padding,
                column_widths = ?it.column_widths,
                group_slots = ?it.group_slots,
            );
        });

        it
    }

    fn widen_columns_for_group_labels(&mut self, table: &Table) {
        for slot_index in 0..self.group_slots.len() {
            let slot = &self.group_slots[slot_index];
            let label_width = match slot.group_index {
                Some(group_index) => {
                    display_width(&table.header_groups()[group_index].text)
                }
                None => continue,
            };
            if label_width == 0 {
                continue;
            }
            let needed = label_width + 2 * self.padding;
            let available = self.group_content_width(slot);
            if needed > available {
                let last_column = slot.last_column();
                self.column_widths[last_column] += needed - available;
            }
        }
    }
}

/// Groups are assigned to columns left to right, in the order they were added. Any
/// columns left over go to a filler slot. No groups means no slots (and no group row).
fn assign_group_slots(table: &Table) -> InlineVec<GroupSlot> {
    let mut acc = InlineVec::new();
    if table.header_groups().is_empty() {
        return acc;
    }

    let mut first_column = 0;
    for (group_index, group) in table.header_groups().iter().enumerate() {
        let end = first_column + group.column_span;
        acc.push(GroupSlot {
            columns: first_column..end,
            group_index: Some(group_index),
        });
        first_column = end;
    }

    if first_column < table.column_count() {
        acc.push(GroupSlot {
            columns: first_column..table.column_count(),
            group_index: None,
        });
    }

    acc
}

mod accessors {
    use super::{GroupSlot, TableLayout};

    impl TableLayout {
        #[must_use]
        pub fn padding(&self) -> usize { self.padding }

        #[must_use]
        pub fn column_widths(&self) -> &[usize] { &self.column_widths }

        #[must_use]
        pub fn group_slots(&self) -> &[GroupSlot] { &self.group_slots }

        #[must_use]
        pub fn has_groups(&self) -> bool { !self.group_slots.is_empty() }

        #[must_use]
        pub fn column_cell_width(&self, column: usize) -> usize {
            self.column_widths[column] + 2 * self.padding
        }

        #[must_use]
        pub fn group_cell_width(&self, slot: &GroupSlot) -> usize {
            let cells: usize = slot
                .columns
                .clone()
                .map(|column| self.column_cell_width(column))
                .sum();
            cells + slot.column_span() - 1
        }

        /// Group cell width without the cell padding on each side.
        #[must_use]
        pub fn group_content_width(&self, slot: &GroupSlot) -> usize {
            self.group_cell_width(slot) - 2 * self.padding
        }

        /// Width in chars of every rendered line, excluding the trailing new line.
        #[must_use]
        pub fn line_width(&self) -> usize {
            let cells: usize = (0..self.column_widths.len())
                .map(|column| self.column_cell_width(column))
                .sum();
            cells + self.column_widths.len() + 1
        }
    }
}
