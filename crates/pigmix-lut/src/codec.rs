//! Table storage format.
//!
//! The table ships as a raw DEFLATE stream. Inflated, it is:
//!
//! ```text
//! [ header: 192 bytes ][ c0 plane ][ c1 plane ][ c2 plane ]
//! ```
//!
//! Each plane holds `64^3` bytes indexed by `x + y*64 + z*64*64`, where
//! `x, y, z` are the sRGB grid coordinates. Before compression every run of
//! 64 bytes is delta-coded against its predecessor, starting from 127, so the
//! smooth planes compress well. The header is opaque and ignored.

use crate::{LutError, LutResult};

/// Grid points per axis.
pub const GRID: usize = 64;

/// Number of cells in the table.
pub const CELL_COUNT: usize = GRID * GRID * GRID;

/// Length of the opaque header in front of the planes.
pub const HEADER_LEN: usize = 192;

/// Inflated length of a valid table stream.
pub const DECODED_LEN: usize = HEADER_LEN + 3 * CELL_COUNT;

/// Run length of the delta coding.
const ROW: usize = 64;

/// Bias of the delta coding.
const BIAS: u8 = 127;

/// Inflates a raw DEFLATE stream and undoes the delta coding.
///
/// Output is capped at [`DECODED_LEN`]; anything longer is rejected while
/// inflating instead of being allocated.
pub fn decode(compressed: &[u8]) -> LutResult<Vec<u8>> {
    let options = zune_inflate::DeflateOptions::default()
        .set_limit(DECODED_LEN)
        .set_size_hint(DECODED_LEN);
    let mut decoder = zune_inflate::DeflateDecoder::new_with_options(compressed, options);
    let mut data = decoder
        .decode_deflate()
        .map_err(|e| LutError::Decompress(format!("{:?}", e)))?;

    if data.len() != DECODED_LEN {
        return Err(LutError::InvalidSize {
            expected: DECODED_LEN,
            got: data.len(),
        });
    }

    differences_to_samples(&mut data);
    Ok(data)
}

/// Undoes the row delta coding in place.
pub fn differences_to_samples(buffer: &mut [u8]) {
    for i in 0..buffer.len() {
        let previous = if i % ROW == 0 { BIAS } else { buffer[i - 1] };
        buffer[i] = previous.wrapping_add(buffer[i].wrapping_sub(BIAS));
    }
}

/// Applies the row delta coding; inverse of [`differences_to_samples`].
pub fn samples_to_differences(buffer: &mut [u8]) {
    for i in (0..buffer.len()).rev() {
        let previous = if i % ROW == 0 { BIAS } else { buffer[i - 1] };
        buffer[i] = buffer[i].wrapping_sub(previous).wrapping_add(BIAS);
    }
}

/// Compresses planes into the shipped format. Test-only encoder.
#[cfg(test)]
pub(crate) fn encode(planes: [&[u8]; 3]) -> Vec<u8> {
    let mut data = vec![0u8; HEADER_LEN];
    for plane in planes {
        data.extend_from_slice(plane);
    }
    samples_to_differences(&mut data);
    miniz_oxide::deflate::compress_to_vec(&data, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_roundtrip() {
        let original: Vec<u8> = (0..300u32).map(|i| (i * 37 % 251) as u8).collect();
        let mut data = original.clone();
        samples_to_differences(&mut data);
        assert_ne!(data, original);
        differences_to_samples(&mut data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_delta_restarts_each_row() {
        // A flat row of 127s codes to all-bias bytes, row after row.
        let mut data = vec![BIAS; ROW * 2];
        samples_to_differences(&mut data);
        assert!(data.iter().all(|b| *b == BIAS));

        let mut data = vec![130u8; ROW * 2];
        samples_to_differences(&mut data);
        assert_eq!(data[0], 130);
        assert_eq!(data[1], BIAS);
        assert_eq!(data[ROW], 130);
    }

    #[test]
    fn test_decode_synthetic() {
        let plane: Vec<u8> = (0..CELL_COUNT).map(|i| (i % 200) as u8).collect();
        let stream = encode([&plane, &plane, &plane]);
        let decoded = decode(&stream).unwrap();
        assert_eq!(decoded.len(), DECODED_LEN);
        assert_eq!(&decoded[HEADER_LEN..HEADER_LEN + CELL_COUNT], &plane[..]);
    }

    #[test]
    fn test_decode_rejects_short_stream() {
        let data = vec![0u8; 1024];
        let stream = miniz_oxide::deflate::compress_to_vec(&data, 6);
        assert_eq!(
            decode(&stream),
            Err(LutError::InvalidSize {
                expected: DECODED_LEN,
                got: 1024
            })
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode(&[0xff, 0xff, 0xff, 0xff]).is_err());
        assert!(decode(&[]).is_err());
    }
}
