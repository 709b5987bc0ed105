// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scan text for ANSI SGR (select graphic rendition) sequences, eg: `ESC [ 33 m`.
//!
//! Only well formed SGR sequences are recognized:
//!
//! ```text
//! ESC '[' ( '0'..='9' | ';' | ':' )* 'm'
//! ```
//!
//! Everything else that starts with `ESC` (other CSI commands like `ESC [ 2 J`, an
//! unterminated `ESC [ 31`, or a bare `ESC`) is treated as literal text. It is measured
//! and emitted as is, in both [`CharacterFilter`] modes. Dropping bytes that we don't
//! understand would silently change the caller's content.

// Attach sources.
pub mod character_filter;
pub mod sgr_fragments;
pub mod sgr_parser;

// Re-export.
pub use character_filter::*;
pub use sgr_fragments::*;
pub use sgr_parser::*;
