// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod table_error;
pub mod table_struct;

// Re-export.
pub use table_error::*;
pub use table_struct::*;
