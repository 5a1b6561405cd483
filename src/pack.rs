//! # Pixel Packing
//!
//! Luminance bytes are packed four at a time into 32-bit integers,
//! most-significant byte first, so the emitted document carries one decimal
//! literal per four pixels instead of one per pixel.
//!
//! ```text
//! luminance:  10        20        30        40        5
//!             └─────────┴────┬────┴─────────┘         │
//! packed:     0x0A141E28 = 171585320                  5
//! ```
//!
//! The trailing group is not zero-padded. When the pixel count is not a
//! multiple of four, the last integer holds only the bytes that exist, in
//! its low-order bytes. Unpacking therefore uses the group's actual length:
//!
//! ```text
//! group length g = min(4, n - 4 * bucket)
//! shift          = (g - 1 - p % 4) * 8
//! value          = (packed[bucket] >> shift) & 0xFF
//! ```
//!
//! For full groups `g = 4`, which gives the familiar `(3 - p % 4) * 8`.
//!
//! ## Usage Example
//!
//! ```
//! use image2canvas::pack;
//!
//! let packed = pack::pack(&[10, 20, 30, 40, 5]);
//! assert_eq!(packed, vec![171585320, 5]);
//! assert_eq!(pack::unpack(&packed, 5), vec![10, 20, 30, 40, 5]);
//! ```

/// Luminance samples stored in one packed integer.
pub const BYTES_PER_PACKED: usize = 4;

/// Bits per luminance sample.
pub const BITS_PER_SAMPLE: u32 = 8;

const SAMPLE_MASK: u32 = (1 << BITS_PER_SAMPLE) - 1;

/// Pack luminance bytes into big-endian groups of four.
///
/// Each group is folded as `acc = (acc << 8) | byte`. The final group may be
/// shorter than four bytes and is packed with only the bytes it has.
pub fn pack(luminances: &[u8]) -> Vec<u32> {
    luminances
        .chunks(BYTES_PER_PACKED)
        .map(|group| {
            group
                .iter()
                .fold(0u32, |acc, &byte| (acc << BITS_PER_SAMPLE) | byte as u32)
        })
        .collect()
}

/// Number of integers `pack` produces for `pixel_count` samples.
#[inline]
pub fn packed_len(pixel_count: usize) -> usize {
    pixel_count.div_ceil(BYTES_PER_PACKED)
}

/// Size of the final group for `pixel_count` samples (0 when empty).
#[inline]
pub fn trailing_group_len(pixel_count: usize) -> usize {
    match pixel_count % BYTES_PER_PACKED {
        0 if pixel_count == 0 => 0,
        0 => BYTES_PER_PACKED,
        rem => rem,
    }
}

/// Read sample `pixel` back out of `packed`, given the total sample count.
///
/// Returns `None` when `pixel` is out of range or its bucket is missing.
pub fn sample(packed: &[u32], pixel_count: usize, pixel: usize) -> Option<u8> {
    if pixel >= pixel_count {
        return None;
    }
    let bucket = pixel / BYTES_PER_PACKED;
    let group_len = (pixel_count - bucket * BYTES_PER_PACKED).min(BYTES_PER_PACKED);
    let shift = (group_len - 1 - pixel % BYTES_PER_PACKED) as u32 * BITS_PER_SAMPLE;
    packed
        .get(bucket)
        .map(|&value| ((value >> shift) & SAMPLE_MASK) as u8)
}

/// Inverse of [`pack`]: recover `pixel_count` luminance bytes.
///
/// This is the same procedure the rendered document runs in the browser.
/// Missing buckets decode as 0.
pub fn unpack(packed: &[u32], pixel_count: usize) -> Vec<u8> {
    (0..pixel_count)
        .map(|p| sample(packed, pixel_count, p).unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_pack_full_group() {
        assert_eq!(pack(&[10, 20, 30, 40]), vec![171585320]);
        assert_eq!(171585320u32, 10 << 24 | 20 << 16 | 30 << 8 | 40);
    }

    #[test]
    fn test_pack_single_pixel_is_not_padded() {
        assert_eq!(pack(&[5]), vec![5]);
        assert_eq!(unpack(&[5], 1), vec![5]);
    }

    #[test]
    fn test_pack_empty() {
        assert!(pack(&[]).is_empty());
        assert!(unpack(&[], 0).is_empty());
    }

    #[test]
    fn test_pack_extremes() {
        assert_eq!(pack(&[255, 255, 255, 255]), vec![u32::MAX]);
        assert_eq!(pack(&[0, 0, 0, 0]), vec![0]);
        assert_eq!(pack(&[255, 0, 0, 1]), vec![0xFF00_0001]);
    }

    #[test]
    fn test_trailing_group_high_bits_are_zero() {
        let packed = pack(&[1, 2, 3, 4, 255, 255, 255]);
        assert_eq!(packed, vec![0x0102_0304, 0x00FF_FFFF]);

        let packed = pack(&[9, 9, 9, 9, 200, 100]);
        assert_eq!(packed[1] >> 16, 0);
        assert_eq!(packed[0], 0x0909_0909);
    }

    #[test]
    fn test_length_law() {
        for n in 0..=17 {
            let data = vec![7u8; n];
            assert_eq!(pack(&data).len(), packed_len(n), "n = {}", n);
            assert_eq!(packed_len(n), n.div_ceil(4));
        }
    }

    #[test]
    fn test_trailing_group_len() {
        assert_eq!(trailing_group_len(0), 0);
        assert_eq!(trailing_group_len(1), 1);
        assert_eq!(trailing_group_len(4), 4);
        assert_eq!(trailing_group_len(6), 2);
        assert_eq!(trailing_group_len(8), 4);
    }

    #[test]
    fn test_full_groups_use_fixed_shift() {
        let data: Vec<u8> = (0..12).map(|i| i * 20).collect();
        let packed = pack(&data);
        for (i, &expected) in data.iter().enumerate() {
            let shift = (3 - i % 4) * 8;
            let value = (packed[i / 4] >> shift) & 0xFF;
            assert_eq!(value as u8, expected, "pixel {}", i);
        }
    }

    #[test]
    fn test_sample_out_of_range() {
        let packed = pack(&[1, 2, 3]);
        assert_eq!(sample(&packed, 3, 2), Some(3));
        assert_eq!(sample(&packed, 3, 3), None);
        assert_eq!(sample(&[], 3, 0), None);
    }

    #[test]
    fn test_round_trip_random_lengths() {
        let mut rng = StdRng::seed_from_u64(0x1ead);
        for n in 0..200 {
            let data: Vec<u8> = (0..n).map(|_| rng.random()).collect();
            let packed = pack(&data);
            assert_eq!(unpack(&packed, n), data, "round trip failed for n = {}", n);
        }
    }

    #[test]
    fn test_pack_is_deterministic() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(pack(&data), pack(&data));
    }
}
