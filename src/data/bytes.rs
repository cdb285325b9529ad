//! Big-endian integer extraction
//!
//! Resource data is always stored most-significant byte first. These helpers
//! assemble integers from individual bytes so the result never depends on the
//! host byte order or on the alignment of the source slice.
//!
//! Callers are responsible for passing a slice that is long enough. Reading
//! past the end is a programming error and panics like any slice index.

/// Read an unsigned 16-bit value from the first two bytes of `bytes`.
#[inline]
pub fn read_u16(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Read a signed 16-bit value from the first two bytes of `bytes`.
///
/// This is the two's-complement reinterpretation of [`read_u16`].
#[inline]
pub fn read_i16(bytes: &[u8]) -> i16 {
    read_u16(bytes) as i16
}

/// Read an unsigned 32-bit value from the first four bytes of `bytes`.
#[inline]
pub fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a signed 32-bit value from the first four bytes of `bytes`.
#[inline]
pub fn read_i32(bytes: &[u8]) -> i32 {
    read_u32(bytes) as i32
}

/// Decode a run of big-endian 16-bit words into an owned, naturally aligned
/// buffer. A trailing odd byte is ignored.
pub fn decode_words(bytes: &[u8]) -> Vec<u16> {
    bytes.chunks_exact(2).map(read_u16).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u16_is_big_endian() {
        assert_eq!(read_u16(&[0x12, 0x34]), 0x1234);
        assert_eq!(read_u16(&[0xff, 0x00, 0xaa]), 0xff00);
    }

    #[test]
    fn test_read_i16_reinterprets_sign() {
        assert_eq!(read_i16(&[0xff, 0xff]), -1);
        assert_eq!(read_i16(&[0x80, 0x00]), i16::MIN);
        assert_eq!(read_i16(&[0x00, 0x7f]), 127);
    }

    #[test]
    fn test_read_32_bit_values() {
        assert_eq!(read_u32(&[0xde, 0xad, 0xbe, 0xef]), 0xdead_beef);
        assert_eq!(read_i32(&[0xff, 0xff, 0xff, 0xfe]), -2);
        assert_eq!(read_i32(&[0x00, 0x00, 0x01, 0x00]), 256);
    }

    #[test]
    fn test_decode_words_from_unaligned_slice() {
        // Start one byte in so the words never sit on an even address
        let backing = [0x00, 0xa0, 0x00, 0x12, 0x34, 0x99];
        let words = decode_words(&backing[1..]);
        assert_eq!(words, vec![0xa000, 0x1234]);
    }

    #[test]
    #[should_panic]
    fn test_short_slice_panics() {
        read_u16(&[0x01]);
    }
}
