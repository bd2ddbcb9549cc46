//! Byte-level layout and width-growth checks on complete streams.

use oxilzw::{
    Decoder, EOS_CODE, Encoder, MAX_WIDTH, MIN_WIDTH, StreamMode, compress, compress_stream,
    decompress_stream,
};
use oxilzw_core::{MsbBitReader, MsbBitWriter};

/// Create test pattern with a diagonal stripe of every byte value
fn create_test_pattern_u8(width: u64, height: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 256) as u8);
        }
    }
    data
}

/// Create gradient pattern
fn create_gradient_pattern_u8(width: u64, height: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) / 4) as u8);
        }
    }
    data
}

#[test]
fn test_all_bytes_layout() {
    let input: Vec<u8> = (0..=255).collect();
    let compressed = compress(&input, StreamMode::Freeze).unwrap();

    // 8 + 256 * 9 + 10 bits, rounded up
    assert_eq!(compressed.len(), 291);

    let mut reader = MsbBitReader::new(&compressed[..]);
    assert_eq!(reader.read_byte().unwrap(), b'n');
    for expected in 0..256u32 {
        assert_eq!(reader.read_bits(9).unwrap(), expected);
    }
    // Code 511 was assigned with the last literal, so the end marker is wider
    assert_eq!(reader.read_bits(10).unwrap(), EOS_CODE);
    // Padding
    assert_eq!(reader.read_bits(6).unwrap(), 0);
    assert!(reader.is_exhausted().unwrap());
}

#[test]
fn test_reset_flag_layout() {
    let compressed = compress(b"ab", StreamMode::Reset).unwrap();
    // 'r', 97, 98, 256 at 9 bits
    let mut reader = MsbBitReader::new(&compressed[..]);
    assert_eq!(reader.read_byte().unwrap(), b'r');
    assert_eq!(reader.read_bits(9).unwrap(), 97);
    assert_eq!(reader.read_bits(9).unwrap(), 98);
    assert_eq!(reader.read_bits(9).unwrap(), EOS_CODE);
}

#[test]
fn test_stats_agree_across_directions() {
    let data = create_test_pattern_u8(512, 512);
    for mode in [StreamMode::Freeze, StreamMode::Reset] {
        let mut compressed = Vec::new();
        let encoded = compress_stream(&data[..], &mut compressed, mode).unwrap();

        let mut output = Vec::new();
        let decoded = decompress_stream(&compressed[..], &mut output).unwrap();

        assert_eq!(output, data);
        assert_eq!(encoded.mode, mode);
        assert_eq!(decoded.mode, mode);
        assert_eq!(encoded.bytes_in, decoded.bytes_out);
        assert_eq!(encoded.bytes_out, decoded.bytes_in);
        assert_eq!(encoded.codewords, decoded.codewords);
        assert_eq!(encoded.entries_added, decoded.entries_added);
        assert_eq!(encoded.width_increases, decoded.width_increases);
        assert_eq!(encoded.dictionary_resets, decoded.dictionary_resets);
        assert_eq!(encoded.final_width, decoded.final_width);
    }
}

#[test]
fn test_gradient_pattern_full_image() {
    let data = create_gradient_pattern_u8(512, 512);
    let mut compressed = Vec::new();
    let stats = compress_stream(&data[..], &mut compressed, StreamMode::Freeze).unwrap();
    println!("Compressed size: {} bytes", compressed.len());

    assert!(stats.ratio() < 0.5);
    assert!((MIN_WIDTH..=MAX_WIDTH).contains(&stats.final_width));

    let mut output = Vec::new();
    decompress_stream(&compressed[..], &mut output).unwrap();
    assert_eq!(output, data);
}

#[test]
fn test_reset_mode_restarts_at_min_width() {
    let mut state: u64 = 0x9E3779B97F4A7C15;
    let data: Vec<u8> = (0..500_000)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 32) as u8
        })
        .collect();

    let mut compressed = Vec::new();
    let stats = {
        let mut sink = MsbBitWriter::new(&mut compressed);
        Encoder::new(StreamMode::Reset).encode(&data[..], &mut sink).unwrap()
    };
    assert!(stats.dictionary_resets >= 1);
    // Seven widenings per cycle, 9 -> 16
    assert!(stats.width_increases >= 7 * stats.dictionary_resets);

    let mut output = Vec::new();
    let mut source = MsbBitReader::new(&compressed[..]);
    let decoded = Decoder::new().decode(&mut source, &mut output).unwrap();
    assert_eq!(decoded.dictionary_resets, stats.dictionary_resets);
    assert_eq!(output, data);
}
