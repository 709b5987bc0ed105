// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_cli_table
//!
//! Render tabular data as fixed width, box drawn plain text that is suitable for
//! terminal output (or for any consumer that needs byte-for-byte reproducible text).
//!
//! You give a [Table] a fixed number of columns, optional per column headers (each with
//! an [Alignment]), optional [`HeaderGroup`]s that span multiple columns, a sequence of
//! rows, and a padding value. Then you render it into any [`std::io::Write`] sink, and
//! choose a [`CharacterFilter`] to decide what happens to ANSI SGR color codes that are
//! embedded in the cells.
//!
//! ```text
//! +---------------+---------------+
//! |  left group   |   right group |
//! +---------------+---------------+
//! | left | center |         right |
//! +------+--------+---------------+
//! | 1    |   2    |             3 |
//! | four |  five  |           six |
//! +------+--------+---------------+
//! ```
//!
//! # Example
//!
//! ```rust
//! use miette::IntoDiagnostic;
//! use r3bl_cli_table::{Alignment, CharacterFilter, Table};
//!
//! # fn main() -> miette::Result<()> {
//! let mut table = Table::new(3)?;
//! table.set_padding(1);
//! table.set_header(0, "left", Alignment::Left)?;
//! table.set_header(1, "center", Alignment::Center)?;
//! table.set_header(2, "right", Alignment::Right)?;
//! table.add_header_group(2, "left group", Alignment::Center)?;
//! table.add_header_group(1, "right group", Alignment::Right)?;
//! table.append_rows([["1", "2", "3"], ["four", "five", "six"]])?;
//!
//! let mut stdout = std::io::stdout();
//! table.render(&mut stdout, CharacterFilter::PreserveAnsi).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Widths
//!
//! Column widths are derived from the widest cell (header included) in each column.
//! Widths are counted in code points, so multi byte UTF-8 text such as `▲` counts as one
//! unit. ANSI SGR sequences (`ESC [ ... m`) never contribute to the width, regardless of
//! the [`CharacterFilter`]. See [`ansi_sgr`] for the exact grammar, and for how malformed
//! sequences are handled.
//!
//! # Modules
//!
//! - [`table_model`] holds the validated, incrementally configured [Table].
//! - [`ansi_sgr`] scans text for SGR sequences (measure and strip).
//! - [`renderer`] runs the measure pass ([`TableLayout`]) and the emission pass
//!   ([`TableRenderer`]).

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Enable or disable `tracing` debug output for this crate. Events are only visible if
/// the embedding application installs a subscriber.
pub const DEBUG_CLI_TABLE: bool = true;

// Attach sources.
pub mod ansi_sgr;
pub mod renderer;
pub mod table_model;

// Re-export.
pub use ansi_sgr::*;
pub use renderer::*;
pub use table_model::*;
