// src/normalize.rs
//! In-place byte-order normalization of typed buffers.
//!
//! [`make_native`] is the single entry point the rest of a consuming
//! library calls before trusting a buffer's numeric contents. Dispatch to
//! the swap primitive is an explicit table keyed by [`ElementType`], one
//! function pointer per width and signedness.

use crate::buffer::TypedBuffer;
use crate::swap;
use crate::types::{host_byte_order, ByteOrder, Element, ElementType};

type SwapElementFn = fn(&mut [u8]);

fn swap_bytes_u16(bytes: &mut [u8]) {
    let mut raw = [0u8; 2];
    raw.copy_from_slice(bytes);
    let swapped = swap::swap_u16(u16::from_ne_bytes(raw));
    bytes.copy_from_slice(&swapped.to_ne_bytes());
}

fn swap_bytes_i16(bytes: &mut [u8]) {
    let mut raw = [0u8; 2];
    raw.copy_from_slice(bytes);
    let swapped = swap::swap_i16(i16::from_ne_bytes(raw));
    bytes.copy_from_slice(&swapped.to_ne_bytes());
}

fn swap_bytes_u32(bytes: &mut [u8]) {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(bytes);
    let swapped = swap::swap_u32(u32::from_ne_bytes(raw));
    bytes.copy_from_slice(&swapped.to_ne_bytes());
}

fn swap_bytes_i32(bytes: &mut [u8]) {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(bytes);
    let swapped = swap::swap_i32(i32::from_ne_bytes(raw));
    bytes.copy_from_slice(&swapped.to_ne_bytes());
}

fn swap_bytes_u64(bytes: &mut [u8]) {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(bytes);
    let swapped = swap::swap_u64(u64::from_ne_bytes(raw));
    bytes.copy_from_slice(&swapped.to_ne_bytes());
}

fn swap_bytes_i64(bytes: &mut [u8]) {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(bytes);
    let swapped = swap::swap_i64(i64::from_ne_bytes(raw));
    bytes.copy_from_slice(&swapped.to_ne_bytes());
}

/// Select the per-element swap for an element type.
///
/// Single-byte types have no swap; every multi-byte type maps to the
/// primitive of its width and signedness.
fn swap_fn_for(elem: ElementType) -> Option<SwapElementFn> {
    match elem {
        ElementType::I8 | ElementType::U8 => None,
        ElementType::I16 => Some(swap_bytes_i16),
        ElementType::U16 => Some(swap_bytes_u16),
        ElementType::I32 => Some(swap_bytes_i32),
        ElementType::U32 => Some(swap_bytes_u32),
        ElementType::I64 => Some(swap_bytes_i64),
        ElementType::U64 => Some(swap_bytes_u64),
    }
}

/// Make a buffer's stored bytes match the host's byte order, in place.
///
/// If the view's declared order already matches the host (or its elements
/// are single bytes), memory is left bit-for-bit untouched. Otherwise
/// every element at `index * stride` is read, byte-swapped, and written
/// back to the same location, exactly once. Padding bytes between strided
/// elements are never touched.
///
/// After the call the *view's* declared order reports the host order, so
/// calling `make_native` again on the same view is a no-op. The view only
/// holds a copy of the descriptor: a caller that persists byte-order
/// metadata elsewhere must update it too, or a view rebuilt from the
/// stale tag will swap the data back out of native order.
///
/// # Example
///
/// ```
/// use bytenorm_rs::{make_native, ByteOrder, ElementType, TypedBuffer};
///
/// let mut bytes = 0xAABB_u16.to_be_bytes();
/// let mut buffer = TypedBuffer::new(
///     &mut bytes,
///     ElementType::U16,
///     1,
///     2,
///     ByteOrder::Big,
/// ).unwrap();
///
/// make_native(&mut buffer);
/// assert!(buffer.is_native());
/// assert_eq!(buffer.as_bytes(), &0xAABB_u16.to_ne_bytes());
/// ```
pub fn make_native(buffer: &mut TypedBuffer<'_>) {
    if !buffer.is_native() {
        if let Some(swap_element) = swap_fn_for(buffer.element_type()) {
            let width = buffer.element_type().width();
            let stride = buffer.stride();
            let count = buffer.len();
            let bytes = buffer.bytes_mut();
            for index in 0..count {
                let start = index * stride;
                swap_element(&mut bytes[start..start + width]);
            }
        }
    }
    buffer.set_byte_order(host_byte_order());
}

/// Normalize a contiguous native Rust slice declared in `order`.
///
/// Convenience wrapper over [`make_native`] for the common contiguous
/// case; see there for the exact semantics.
///
/// # Example
///
/// ```
/// use bytenorm_rs::{make_native_slice, ByteOrder};
///
/// let mut values = [u32::from_be(0x0102_0304)];
/// make_native_slice(&mut values, ByteOrder::Big);
/// assert_eq!(values, [0x0102_0304]);
/// ```
pub fn make_native_slice<T: Element>(values: &mut [T], order: ByteOrder) {
    let mut buffer = TypedBuffer::from_slice(values, order);
    make_native(&mut buffer);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foreign_order() -> ByteOrder {
        match host_byte_order() {
            ByteOrder::Little => ByteOrder::Big,
            _ => ByteOrder::Little,
        }
    }

    #[test]
    fn test_three_u16_words() {
        // Three u16 values stored in the opposite order: each byte pair
        // is reversed, neighbours stay put.
        let mut bytes = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06];
        let mut buffer =
            TypedBuffer::new(&mut bytes, ElementType::U16, 3, 2, foreign_order()).unwrap();

        make_native(&mut buffer);

        assert_eq!(buffer.as_bytes(), &[0x02, 0x01, 0x04, 0x03, 0x06, 0x05]);
    }

    #[test]
    fn test_native_buffer_untouched() {
        let mut bytes = [0xDEu8, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04];
        let original = bytes;
        let mut buffer =
            TypedBuffer::new(&mut bytes, ElementType::U32, 2, 4, host_byte_order()).unwrap();

        make_native(&mut buffer);

        assert_eq!(buffer.as_bytes(), &original);
    }

    #[test]
    fn test_native_tag_resolves() {
        let mut values = [1u64, 2, 3];
        let mut buffer = TypedBuffer::from_slice(&mut values, ByteOrder::Native);
        make_native(&mut buffer);
        assert_eq!(buffer.byte_order(), host_byte_order());
        drop(buffer);
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn test_strided_view_padding_untouched() {
        // u16 elements at stride 4: the two padding bytes after each
        // element must survive, every element swaps exactly once.
        let mut bytes = [
            0x01u8, 0x02, 0xAA, 0xBB, //
            0x03, 0x04, 0xCC, 0xDD, //
            0x05, 0x06, 0xEE, 0xFF,
        ];
        let mut buffer =
            TypedBuffer::new(&mut bytes, ElementType::U16, 3, 4, foreign_order()).unwrap();

        make_native(&mut buffer);

        assert_eq!(
            buffer.as_bytes(),
            &[
                0x02, 0x01, 0xAA, 0xBB, //
                0x04, 0x03, 0xCC, 0xDD, //
                0x06, 0x05, 0xEE, 0xFF,
            ]
        );
    }

    #[test]
    fn test_single_byte_identity() {
        let mut bytes = [0x80u8, 0x01, 0xFF, 0x00];
        let original = bytes;
        let mut buffer =
            TypedBuffer::new(&mut bytes, ElementType::I8, 4, 1, foreign_order()).unwrap();

        make_native(&mut buffer);

        assert_eq!(buffer.as_bytes(), &original);
    }

    #[test]
    fn test_repeated_call_on_same_view_is_noop() {
        let mut bytes = [0x01u8, 0x02, 0x03, 0x04];
        let mut buffer =
            TypedBuffer::new(&mut bytes, ElementType::U32, 1, 4, foreign_order()).unwrap();

        make_native(&mut buffer);
        let after_first: Vec<u8> = buffer.as_bytes().to_vec();
        make_native(&mut buffer);

        assert_eq!(buffer.as_bytes(), &after_first[..]);
        assert_eq!(buffer.byte_order(), host_byte_order());
    }

    #[test]
    fn test_stale_tag_swaps_back() {
        // Rebuilding a view from a stale non-native tag undoes the first
        // normalization. This is the caller's contract: update persisted
        // descriptors after normalizing.
        let mut bytes = [0x01u8, 0x02, 0x03, 0x04];
        let mut buffer =
            TypedBuffer::new(&mut bytes, ElementType::U32, 1, 4, foreign_order()).unwrap();
        make_native(&mut buffer);
        drop(buffer);

        let mut stale =
            TypedBuffer::new(&mut bytes, ElementType::U32, 1, 4, foreign_order()).unwrap();
        make_native(&mut stale);
        drop(stale);

        assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_signed_elements_preserve_values() {
        let mut values = [-1i32, i32::MIN, 0, 42];
        for value in values.iter_mut() {
            *value = swap::swap_i32(*value);
        }
        make_native_slice(&mut values, foreign_order());
        assert_eq!(values, [-1, i32::MIN, 0, 42]);
    }

    #[test]
    fn test_all_multibyte_widths_dispatch() {
        let mut v16 = [swap::swap_u16(0x1234)];
        make_native_slice(&mut v16, foreign_order());
        assert_eq!(v16, [0x1234]);

        let mut v32 = [swap::swap_i32(-123_456)];
        make_native_slice(&mut v32, foreign_order());
        assert_eq!(v32, [-123_456]);

        let mut v64 = [swap::swap_u64(0x0102_0304_0506_0708)];
        make_native_slice(&mut v64, foreign_order());
        assert_eq!(v64, [0x0102_0304_0506_0708]);
    }

    #[test]
    fn test_empty_buffer() {
        let mut values: [u32; 0] = [];
        make_native_slice(&mut values, foreign_order());
    }
}
