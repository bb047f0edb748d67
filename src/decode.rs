// src/decode.rs
use std::io::Read;

use bytemuck::Zeroable;
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::buffer::TypedBuffer;
use crate::error::Result;
use crate::normalize::make_native;
use crate::types::{ByteOrder, Element};

/// Helper functions for reading typed values from binary streams in a
/// declared byte order, returning host-native values.
///
/// This is the deserialization half of buffer acquisition: bytes come off
/// a file or wire in whatever order the producer used, and land in memory
/// already normalized.
pub struct ValueReader;

impl ValueReader {
    /// Read an array of values from a stream.
    ///
    /// The bytes are read straight into the result vector's storage and
    /// then normalized in place through the same path as any other typed
    /// buffer, so the returned values are host-native regardless of the
    /// declared order.
    ///
    /// # Arguments
    ///
    /// * `reader` - The stream to read from
    /// * `count` - Number of values to read
    /// * `order` - Byte order the stream's producer declared
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use bytenorm_rs::{ByteOrder, ValueReader};
    ///
    /// let data = vec![0u8, 0, 0, 1, 0, 0, 0, 2];
    /// let mut cursor = Cursor::new(data);
    ///
    /// let values: Vec<u32> = ValueReader::read_values(&mut cursor, 2, ByteOrder::Big).unwrap();
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    pub fn read_values<T: Element, R: Read>(
        reader: &mut R,
        count: usize,
        order: ByteOrder,
    ) -> Result<Vec<T>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut result = vec![T::zeroed(); count];
        reader.read_exact(bytemuck::cast_slice_mut(result.as_mut_slice()))?;

        let mut buffer = TypedBuffer::from_slice(result.as_mut_slice(), order);
        make_native(&mut buffer);

        Ok(result)
    }

    /// Read a single i8 value
    pub fn read_i8<R: Read>(reader: &mut R) -> Result<i8> {
        Ok(reader.read_i8()?)
    }

    /// Read a single i16 value
    pub fn read_i16<R: Read>(reader: &mut R, order: ByteOrder) -> Result<i16> {
        if order.resolve() == ByteOrder::Big {
            Ok(reader.read_i16::<BigEndian>()?)
        } else {
            Ok(reader.read_i16::<LittleEndian>()?)
        }
    }

    /// Read a single i32 value
    pub fn read_i32<R: Read>(reader: &mut R, order: ByteOrder) -> Result<i32> {
        if order.resolve() == ByteOrder::Big {
            Ok(reader.read_i32::<BigEndian>()?)
        } else {
            Ok(reader.read_i32::<LittleEndian>()?)
        }
    }

    /// Read a single i64 value
    pub fn read_i64<R: Read>(reader: &mut R, order: ByteOrder) -> Result<i64> {
        if order.resolve() == ByteOrder::Big {
            Ok(reader.read_i64::<BigEndian>()?)
        } else {
            Ok(reader.read_i64::<LittleEndian>()?)
        }
    }

    /// Read a single u8 value
    pub fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
        Ok(reader.read_u8()?)
    }

    /// Read a single u16 value
    pub fn read_u16<R: Read>(reader: &mut R, order: ByteOrder) -> Result<u16> {
        if order.resolve() == ByteOrder::Big {
            Ok(reader.read_u16::<BigEndian>()?)
        } else {
            Ok(reader.read_u16::<LittleEndian>()?)
        }
    }

    /// Read a single u32 value
    pub fn read_u32<R: Read>(reader: &mut R, order: ByteOrder) -> Result<u32> {
        if order.resolve() == ByteOrder::Big {
            Ok(reader.read_u32::<BigEndian>()?)
        } else {
            Ok(reader.read_u32::<LittleEndian>()?)
        }
    }

    /// Read a single u64 value
    pub fn read_u64<R: Read>(reader: &mut R, order: ByteOrder) -> Result<u64> {
        if order.resolve() == ByteOrder::Big {
            Ok(reader.read_u64::<BigEndian>()?)
        } else {
            Ok(reader.read_u64::<LittleEndian>()?)
        }
    }
}
