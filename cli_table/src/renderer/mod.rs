// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rendering happens in 2 passes:
//! 1. [`TableLayout::measure`] derives the column widths (and header group widths) from
//!    the [`crate::Table`].
//! 2. [`TableRenderer`] assembles every line from those widths and hands each one to a
//!    sink.
//!
//! The public entry points are [`crate::Table::render`],
//! [`crate::Table::render_to_string`], and the [`std::fmt::Display`] impl of
//! [`crate::Table`].

// Attach sources.
pub mod alignment;
pub mod glyphs;
pub mod render_impl;
pub mod table_layout;
pub mod table_renderer;

// Re-export.
pub use alignment::*;
pub use glyphs::*;
pub use render_impl::*;
pub use table_layout::*;
pub use table_renderer::*;
