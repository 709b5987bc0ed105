// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example table_demo -- strip_ansi` (or `preserve_ansi`, the
//! default). Set `RUST_LOG=trace` to see the measure and render events.

use std::str::FromStr;

use miette::IntoDiagnostic;
use r3bl_cli_table::{Alignment, CharacterFilter, Table};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let filter = match std::env::args().nth(1) {
        Some(arg) => CharacterFilter::from_str(&arg).into_diagnostic()?,
        None => CharacterFilter::default(),
    };

    let mut table = Table::new(3)?;
    table.set_padding(1);

    // Headers.
    table.set_header(0, "left", Alignment::Left)?;
    table.set_header(1, "center", Alignment::Center)?;
    table.set_header(2, "right", Alignment::Right)?;

    // Optional header groups.
    table.add_header_group(2, "left group", Alignment::Center)?;
    table.add_header_group(1, "right group", Alignment::Right)?;

    // A single row, or a bunch of rows.
    table.append_row(["1", "2", "3"])?;
    table.append_rows([
        ["four", "five", "six"],
        ["\x1b[33myellow\x1b[0m", "▲ 123", "123 ▾"],
    ])?;

    let stdout = &mut std::io::stdout().lock();
    table.render(stdout, filter).into_diagnostic()?;

    Ok(())
}
