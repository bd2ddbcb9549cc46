//! Info command implementation.

use crate::utils::savings;
use oxilzw::{CodecStats, decompress_stream};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;

/// JSON serializable stream information.
#[derive(Debug, Serialize, Deserialize)]
struct StatsJson {
    file: String,
    mode: String,
    compressed_size: u64,
    expanded_size: u64,
    codewords: u64,
    entries_added: u64,
    width_increases: u64,
    dictionary_resets: u64,
    final_width: u8,
    savings: f64,
}

impl StatsJson {
    fn from_stats(file: &Path, file_size: u64, stats: &CodecStats) -> Self {
        Self {
            file: file.display().to_string(),
            mode: stats.mode.name().to_string(),
            compressed_size: file_size,
            expanded_size: stats.bytes_out,
            codewords: stats.codewords,
            entries_added: stats.entries_added,
            width_increases: stats.width_increases,
            dictionary_resets: stats.dictionary_resets,
            final_width: stats.final_width,
            savings: savings(stats.bytes_out, file_size),
        }
    }
}

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(input)?;
    let file_size = file.metadata()?.len();

    // Decode into a sink; only the counters are kept
    let stats = decompress_stream(file, io::sink())?;

    if json {
        let info = StatsJson::from_stats(input, file_size, &stats);
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Stream Information");
    println!("==================");
    println!("File: {}", input.display());
    println!("Mode: {}", stats.mode);
    println!("Compressed size: {} bytes", file_size);
    if stats.bytes_in < file_size {
        println!("  Trailing bytes: {}", file_size - stats.bytes_in);
    }
    println!("Expanded size: {} bytes", stats.bytes_out);
    if stats.bytes_out > 0 {
        println!("Space savings: {:.1}%", savings(stats.bytes_out, file_size));
    }
    println!();
    println!("Codewords:");
    println!("  Total: {}", stats.codewords);
    println!("  Dictionary entries added: {}", stats.entries_added);
    println!("  Width increases: {}", stats.width_increases);
    println!("  Dictionary resets: {}", stats.dictionary_resets);
    println!("  Final width: {} bits", stats.final_width);

    Ok(())
}
