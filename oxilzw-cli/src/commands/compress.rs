//! Compress command implementation.

use crate::utils::{display_name, open_input, open_output, savings};
use oxilzw::{StreamMode, compress_stream};
use std::path::Path;

pub fn cmd_compress(
    input: Option<&Path>,
    output: Option<&Path>,
    reset: bool,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if reset {
        StreamMode::Reset
    } else {
        StreamMode::Freeze
    };

    // Open the input first so a missing file never truncates the output
    let (reader, pb) = open_input(input, progress)?;
    let writer = open_output(output)?;

    let stats = compress_stream(reader, writer, mode)?;
    pb.finish_and_clear();

    if verbose {
        eprintln!(
            "Compressed {} -> {} ({} mode)",
            display_name(input, "<stdin>"),
            display_name(output, "<stdout>"),
            stats.mode
        );
        eprintln!(
            "  {} -> {} bytes ({:.1}% saved)",
            stats.bytes_in,
            stats.bytes_out,
            savings(stats.bytes_in, stats.bytes_out)
        );
        eprintln!(
            "  {} codewords, {} width increases, {} resets, final width {} bits",
            stats.codewords, stats.width_increases, stats.dictionary_resets, stats.final_width
        );
    }

    Ok(())
}
