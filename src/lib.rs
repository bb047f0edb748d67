// src/lib.rs
//! # bytenorm-rs
//!
//! Byte-order normalization for typed buffers: detect whether a buffer's
//! declared element byte order matches the executing host, and if not,
//! swap every element's bytes in place so the buffer becomes host-native.
//! This is the building block an array library needs to accept data that
//! was memory-mapped or deserialized from machines of either endianness.
//!
//! ## Features
//!
//! - 🔄 **In-Place**: one pass over the buffer, no allocation, no copies
//! - 🎯 **Stride-Aware**: strided views of larger blocks normalize correctly
//! - 🔒 **Non-Owning**: buffers stay owned by the caller; the view is a borrow
//! - ⚡ **No-Op When Native**: already-native buffers are never touched
//! - 📦 **Memory-Mapped**: optional `mmap` feature normalizes files in place
//!
//! ## Quick Start
//!
//! ### Normalizing a typed slice
//!
//! ```rust
//! use bytenorm_rs::*;
//!
//! // Three u32 values as written by a big-endian producer.
//! let mut values = [
//!     u32::from_be(1),
//!     u32::from_be(2),
//!     u32::from_be(3),
//! ];
//!
//! make_native_slice(&mut values, ByteOrder::Big);
//! assert_eq!(values, [1, 2, 3]);
//! ```
//!
//! ### Normalizing a strided view
//!
//! ```rust
//! use bytenorm_rs::*;
//!
//! // u16 elements embedded at stride 4 in a larger block.
//! let mut block = [0x01u8, 0x02, 0, 0, 0x03, 0x04, 0, 0];
//! let order = if host_byte_order() == ByteOrder::Little {
//!     ByteOrder::Big
//! } else {
//!     ByteOrder::Little
//! };
//!
//! let mut buffer = TypedBuffer::new(&mut block, ElementType::U16, 2, 4, order)?;
//! make_native(&mut buffer);
//!
//! assert_eq!(buffer.as_bytes(), &[0x02, 0x01, 0, 0, 0x04, 0x03, 0, 0]);
//! # Ok::<(), BytenormError>(())
//! ```
//!
//! ### Reading from a stream
//!
//! ```rust
//! use std::io::Cursor;
//! use bytenorm_rs::*;
//!
//! let mut cursor = Cursor::new(vec![0u8, 1, 0, 2]);
//! let values: Vec<u16> = ValueReader::read_values(&mut cursor, 2, ByteOrder::Big)?;
//! assert_eq!(values, vec![1, 2]);
//! # Ok::<(), BytenormError>(())
//! ```

// Modules
pub mod buffer;
pub mod decode;
pub mod error;
pub mod normalize;
pub mod swap;
pub mod types;

#[cfg(feature = "mmap")]
pub mod mmap;

// Re-export commonly used types at the crate root for convenience
pub use error::{BytenormError, Result};

// Type exports
pub use types::{host_byte_order, ByteOrder, Element, ElementType};

// Buffer exports
pub use buffer::TypedBuffer;

// Normalizer exports
pub use normalize::{make_native, make_native_slice};

// Swap primitive exports
pub use swap::{swap_i16, swap_i32, swap_i64, swap_u16, swap_u32, swap_u64};

// Decode exports
pub use decode::ValueReader;

#[cfg(feature = "mmap")]
pub use mmap::MappedBuffer;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use bytenorm_rs::prelude::*;
    //! ```

    pub use crate::buffer::TypedBuffer;
    pub use crate::error::{BytenormError, Result};
    pub use crate::normalize::{make_native, make_native_slice};
    pub use crate::types::{host_byte_order, ByteOrder, ElementType};

    #[cfg(feature = "mmap")]
    pub use crate::mmap::MappedBuffer;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
