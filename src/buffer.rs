// src/buffer.rs
use std::mem;

use crate::error::{BytenormError, Result};
use crate::types::{ByteOrder, Element, ElementType};

/// Non-owning typed view over caller-owned contiguous memory.
///
/// A `TypedBuffer` borrows a byte region for the duration of the call and
/// describes how to read it: element type, element count, stride between
/// consecutive elements, and the byte order the producer declared. It
/// never copies, frees, or retains the memory; dropping the view leaves
/// the underlying buffer exactly where the caller allocated it.
///
/// The stride may exceed the element width when the view is a strided
/// slice of a larger block. Bytes between elements belong to the caller
/// and are never touched.
///
/// # Example
///
/// ```
/// use bytenorm_rs::{ByteOrder, ElementType, TypedBuffer};
///
/// let mut bytes = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06];
/// let buffer = TypedBuffer::new(
///     &mut bytes,
///     ElementType::U16,
///     3,
///     2,
///     ByteOrder::Little,
/// ).unwrap();
///
/// assert_eq!(buffer.len(), 3);
/// assert_eq!(buffer.stride(), 2);
/// ```
pub struct TypedBuffer<'a> {
    bytes: &'a mut [u8],
    elem: ElementType,
    count: usize,
    stride: usize,
    order: ByteOrder,
}

impl<'a> TypedBuffer<'a> {
    /// Create a view over `bytes` described by the given descriptor.
    ///
    /// The descriptor is validated here, at the boundary, so the swap
    /// loop itself never has to re-check it: the stride must cover the
    /// element width, and the last element must end inside `bytes`. A
    /// trailing element without full stride padding is accepted, which is
    /// what a strided slice of a larger array produces.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The borrowed byte region holding the elements
    /// * `elem` - Element type (width and signedness)
    /// * `count` - Number of logical elements in the view
    /// * `stride` - Byte distance between consecutive element starts
    /// * `order` - Byte order the producer declared for the data
    pub fn new(
        bytes: &'a mut [u8],
        elem: ElementType,
        count: usize,
        stride: usize,
        order: ByteOrder,
    ) -> Result<Self> {
        let width = elem.width();
        if stride < width {
            return Err(BytenormError::InvalidStride { stride, width });
        }
        if count > 0 {
            let needed = (count - 1)
                .checked_mul(stride)
                .and_then(|offset| offset.checked_add(width))
                .ok_or(BytenormError::BufferTooShort {
                    needed: usize::MAX,
                    available: bytes.len(),
                })?;
            if needed > bytes.len() {
                return Err(BytenormError::BufferTooShort {
                    needed,
                    available: bytes.len(),
                });
            }
        }
        Ok(TypedBuffer {
            bytes,
            elem,
            count,
            stride,
            order,
        })
    }

    /// Create a contiguous view over a native Rust slice.
    ///
    /// The element type, count, and stride all come from `T`; only the
    /// declared byte order has to be supplied. This is the common path
    /// for data deserialized into a typed `Vec` whose producer may have
    /// used the other byte order.
    ///
    /// # Example
    ///
    /// ```
    /// use bytenorm_rs::{ByteOrder, ElementType, TypedBuffer};
    ///
    /// let mut values = [1u32, 2, 3];
    /// let buffer = TypedBuffer::from_slice(&mut values, ByteOrder::Big);
    /// assert_eq!(buffer.element_type(), ElementType::U32);
    /// assert_eq!(buffer.len(), 3);
    /// ```
    pub fn from_slice<T: Element>(values: &'a mut [T], order: ByteOrder) -> Self {
        let count = values.len();
        TypedBuffer {
            bytes: bytemuck::cast_slice_mut(values),
            elem: T::ELEMENT_TYPE,
            count,
            stride: mem::size_of::<T>(),
            order,
        }
    }

    /// Get the element type of this view
    pub fn element_type(&self) -> ElementType {
        self.elem
    }

    /// Get the number of logical elements
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the view contains no elements
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the stride between consecutive elements in bytes
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get the declared byte order of the underlying data
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Check whether the stored bytes already match the host order.
    ///
    /// Single-byte elements are always native; no byte order applies.
    pub fn is_native(&self) -> bool {
        self.elem.width() == 1 || self.order.is_native()
    }

    /// Get the borrowed region as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Reinterpret the view as a typed slice, if contiguous and the
    /// element types agree.
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        if T::ELEMENT_TYPE != self.elem {
            return Err(BytenormError::TypeMismatch {
                expected: self.elem.name().to_string(),
                found: T::ELEMENT_TYPE.name().to_string(),
            });
        }
        if self.stride != self.elem.width() {
            return Err(BytenormError::TypeMismatch {
                expected: format!("contiguous {}", self.elem.name()),
                found: format!("stride {}", self.stride),
            });
        }
        let occupied = &self.bytes[..self.count * self.elem.width()];
        bytemuck::try_cast_slice(occupied).map_err(|_| BytenormError::TypeMismatch {
            expected: format!("{}-aligned buffer", self.elem.name()),
            found: "misaligned buffer".to_string(),
        })
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        self.bytes
    }

    pub(crate) fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }
}

// Manual Debug to avoid dumping the raw byte region
impl std::fmt::Debug for TypedBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedBuffer")
            .field("elem", &self.elem)
            .field("count", &self.count)
            .field("stride", &self.stride)
            .field("order", &self.order)
            .field("byte_len", &self.bytes.len())
            .finish()
    }
}
