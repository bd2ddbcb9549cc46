//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Create a byte progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}

/// Whether `path` names standard input/output.
fn is_stdio(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == "-")
}

/// Display name for an input or output path.
pub fn display_name(path: Option<&Path>, stdio: &str) -> String {
    match path {
        Some(p) if !is_stdio(Some(p)) => p.display().to_string(),
        _ => stdio.to_string(),
    }
}

/// Open the input, wrapped in a progress bar when reading a file.
///
/// Progress is never shown for stdin, whose length is unknown.
pub fn open_input(
    path: Option<&Path>,
    progress: bool,
) -> io::Result<(Box<dyn Read>, ProgressBar)> {
    match path {
        Some(p) if !is_stdio(Some(p)) => {
            let file = File::open(p)?;
            let len = file.metadata()?.len();
            let pb = create_progress_bar(len, progress);
            // Reads are chunked or buffered by the codec
            let reader = pb.wrap_read(file);
            Ok((Box::new(reader), pb))
        }
        _ => Ok((Box::new(io::stdin().lock()), ProgressBar::hidden())),
    }
}

/// Open the output, creating or truncating the file when a path is given.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(p) if !is_stdio(Some(p)) => Ok(Box::new(BufWriter::new(File::create(p)?))),
        _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Space saved relative to the original size, as a percentage.
pub fn savings(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        0.0
    } else {
        (1.0 - compressed as f64 / original as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdio_names() {
        assert!(is_stdio(None));
        assert!(is_stdio(Some(Path::new("-"))));
        assert!(!is_stdio(Some(Path::new("data.lzw"))));
        assert_eq!(display_name(None, "<stdin>"), "<stdin>");
        assert_eq!(display_name(Some(Path::new("a.txt")), "<stdin>"), "a.txt");
    }

    #[test]
    fn test_savings() {
        assert!(savings(0, 3).abs() < f64::EPSILON);
        assert!((savings(200, 50) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_open_input_reads_whole_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("input.bin");
        let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &data).unwrap();

        let (mut reader, pb) = open_input(Some(&path), false).unwrap();
        let mut compressed = Vec::new();
        oxilzw::compress_stream(&mut reader, &mut compressed, oxilzw::StreamMode::Reset).unwrap();
        pb.finish_and_clear();

        assert_eq!(oxilzw::decompress(&compressed).unwrap(), data);
    }
}
