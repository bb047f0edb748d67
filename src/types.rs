// src/types.rs
use std::sync::OnceLock;

use crate::error::{BytenormError, Result};

/// Element type of a typed buffer: byte width plus signedness.
///
/// This enumeration is the dispatch key for the in-place swap: each
/// multi-byte variant maps to exactly one swap primitive, and the 1-byte
/// variants map to the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl ElementType {
    /// Get the width of this element type in bytes
    pub fn width(&self) -> usize {
        match self {
            ElementType::I8 | ElementType::U8 => 1,
            ElementType::I16 | ElementType::U16 => 2,
            ElementType::I32 | ElementType::U32 => 4,
            ElementType::I64 | ElementType::U64 => 8,
        }
    }

    /// Check if this is a signed type
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            ElementType::I8 | ElementType::I16 | ElementType::I32 | ElementType::I64
        )
    }

    /// Look up an element type by byte width and signedness
    pub fn from_width_signed(width: usize, signed: bool) -> Option<Self> {
        match (width, signed) {
            (1, true) => Some(ElementType::I8),
            (2, true) => Some(ElementType::I16),
            (4, true) => Some(ElementType::I32),
            (8, true) => Some(ElementType::I64),
            (1, false) => Some(ElementType::U8),
            (2, false) => Some(ElementType::U16),
            (4, false) => Some(ElementType::U32),
            (8, false) => Some(ElementType::U64),
            _ => None,
        }
    }

    /// Get the name of the element type as a string
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::I8 => "i8",
            ElementType::I16 => "i16",
            ElementType::I32 => "i32",
            ElementType::I64 => "i64",
            ElementType::U8 => "u8",
            ElementType::U16 => "u16",
            ElementType::U32 => "u32",
            ElementType::U64 => "u64",
        }
    }
}

/// Declared byte order of a buffer's multi-byte values.
///
/// `Little` and `Big` are the orders a format descriptor can record;
/// `Native` defers to whatever the executing host uses and resolves at
/// runtime via [`host_byte_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
    Native,
}

impl ByteOrder {
    /// Parse a NumPy-style format character.
    ///
    /// `<` is little-endian, `>` is big-endian, `=` is native, and `|`
    /// (not applicable, single-byte data) also maps to native. Any other
    /// character is a configuration error reported to the caller.
    pub fn from_format_char(ch: char) -> Result<Self> {
        match ch {
            '<' => Ok(ByteOrder::Little),
            '>' => Ok(ByteOrder::Big),
            '=' | '|' => Ok(ByteOrder::Native),
            other => Err(BytenormError::InvalidOrderTag(other)),
        }
    }

    /// Get the format character for this byte order
    pub fn format_char(&self) -> char {
        match self {
            ByteOrder::Little => '<',
            ByteOrder::Big => '>',
            ByteOrder::Native => '=',
        }
    }

    /// Resolve `Native` to the host's concrete order; `Little` and `Big`
    /// resolve to themselves.
    pub fn resolve(&self) -> ByteOrder {
        match self {
            ByteOrder::Native => host_byte_order(),
            other => *other,
        }
    }

    /// Check whether values declared in this order are already laid out
    /// the way the host reads them.
    pub fn is_native(&self) -> bool {
        self.resolve() == host_byte_order()
    }
}

/// Determine the byte order of the executing host.
///
/// The order is only knowable by inspecting how a multi-byte constant
/// actually lands in memory, so this probes `0x01020304` once and caches
/// the answer for the life of the process.
pub fn host_byte_order() -> ByteOrder {
    static HOST_ORDER: OnceLock<ByteOrder> = OnceLock::new();
    *HOST_ORDER.get_or_init(|| {
        let probe: u32 = 0x0102_0304;
        if probe.to_ne_bytes()[0] == 0x01 {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    })
}

/// Rust primitive types that can back a typed buffer.
///
/// The `Pod` bound lets a `&mut [T]` be reinterpreted as raw bytes without
/// copying; `ELEMENT_TYPE` carries the width and signedness into the
/// erased dispatch path.
pub trait Element: bytemuck::Pod {
    const ELEMENT_TYPE: ElementType;
}

impl Element for i8 {
    const ELEMENT_TYPE: ElementType = ElementType::I8;
}

impl Element for i16 {
    const ELEMENT_TYPE: ElementType = ElementType::I16;
}

impl Element for i32 {
    const ELEMENT_TYPE: ElementType = ElementType::I32;
}

impl Element for i64 {
    const ELEMENT_TYPE: ElementType = ElementType::I64;
}

impl Element for u8 {
    const ELEMENT_TYPE: ElementType = ElementType::U8;
}

impl Element for u16 {
    const ELEMENT_TYPE: ElementType = ElementType::U16;
}

impl Element for u32 {
    const ELEMENT_TYPE: ElementType = ElementType::U32;
}

impl Element for u64 {
    const ELEMENT_TYPE: ElementType = ElementType::U64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_widths() {
        assert_eq!(ElementType::I8.width(), 1);
        assert_eq!(ElementType::U16.width(), 2);
        assert_eq!(ElementType::I32.width(), 4);
        assert_eq!(ElementType::U64.width(), 8);
    }

    #[test]
    fn test_width_signed_lookup() {
        assert_eq!(
            ElementType::from_width_signed(2, true),
            Some(ElementType::I16)
        );
        assert_eq!(
            ElementType::from_width_signed(8, false),
            Some(ElementType::U64)
        );
        assert_eq!(ElementType::from_width_signed(3, false), None);
        assert_eq!(ElementType::from_width_signed(16, true), None);
    }

    #[test]
    fn test_format_chars() {
        assert_eq!(ByteOrder::from_format_char('<').unwrap(), ByteOrder::Little);
        assert_eq!(ByteOrder::from_format_char('>').unwrap(), ByteOrder::Big);
        assert_eq!(ByteOrder::from_format_char('=').unwrap(), ByteOrder::Native);
        assert_eq!(ByteOrder::from_format_char('|').unwrap(), ByteOrder::Native);
        assert!(ByteOrder::from_format_char('x').is_err());
    }

    #[test]
    fn test_host_order_is_stable() {
        // Probe twice; the cached answer must not change.
        let first = host_byte_order();
        let second = host_byte_order();
        assert_eq!(first, second);
        assert_ne!(first, ByteOrder::Native);
    }

    #[test]
    fn test_host_order_agrees_with_memory_layout() {
        let bytes = 0x0102_0304_u32.to_ne_bytes();
        match host_byte_order() {
            ByteOrder::Big => assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]),
            ByteOrder::Little => assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01]),
            ByteOrder::Native => unreachable!(),
        }
    }

    #[test]
    fn test_native_resolution() {
        assert_eq!(ByteOrder::Native.resolve(), host_byte_order());
        assert!(ByteOrder::Native.is_native());
        assert_eq!(ByteOrder::Little.resolve(), ByteOrder::Little);

        let foreign = match host_byte_order() {
            ByteOrder::Little => ByteOrder::Big,
            _ => ByteOrder::Little,
        };
        assert!(!foreign.is_native());
    }
}
