//! Expand command implementation.

use crate::utils::{display_name, open_input, open_output};
use oxilzw::decompress_stream;
use std::path::Path;

pub fn cmd_expand(
    input: Option<&Path>,
    output: Option<&Path>,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (reader, pb) = open_input(input, progress)?;
    let writer = open_output(output)?;

    let stats = decompress_stream(reader, writer)?;
    pb.finish_and_clear();

    if verbose {
        eprintln!(
            "Expanded {} -> {} ({} mode)",
            display_name(input, "<stdin>"),
            display_name(output, "<stdout>"),
            stats.mode
        );
        eprintln!("  {} -> {} bytes", stats.bytes_in, stats.bytes_out);
    }

    Ok(())
}
