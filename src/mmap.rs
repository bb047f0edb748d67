// src/mmap.rs
use std::fs::OpenOptions;
use std::path::Path;

use memmap2::MmapMut;

use crate::buffer::TypedBuffer;
use crate::error::{BytenormError, Result};
use crate::normalize::make_native;
use crate::types::{ByteOrder, Element, ElementType};

/// A writable memory-mapped file treated as a typed buffer.
///
/// This is the memory-mapped half of buffer acquisition: a file produced
/// on a machine of either endianness is mapped read-write, normalized in
/// place through the same path as any in-memory buffer, and exposed as a
/// host-native typed slice. Flushing writes the normalized bytes back to
/// the file.
pub struct MappedBuffer {
    mmap: MmapMut,
    elem: ElementType,
    count: usize,
    order: ByteOrder,
}

impl MappedBuffer {
    /// Map a file and describe its contents.
    ///
    /// The file length must be a whole number of elements. The mapping is
    /// writable; the caller must ensure no other process mutates the file
    /// while the mapping is live.
    ///
    /// # Arguments
    ///
    /// * `path` - File to map
    /// * `elem` - Element type of the stored values
    /// * `order` - Byte order the file's producer declared
    pub fn open(path: impl AsRef<Path>, elem: ElementType, order: ByteOrder) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let mmap = unsafe { MmapMut::map_mut(&file)? };

        let width = elem.width();
        if mmap.len() % width != 0 {
            return Err(BytenormError::TruncatedBuffer {
                len: mmap.len(),
                width,
            });
        }
        let count = mmap.len() / width;

        Ok(MappedBuffer {
            mmap,
            elem,
            count,
            order,
        })
    }

    /// Normalize the mapped bytes to the host order, in place.
    ///
    /// No-op if the declared order already matches the host. The mapped
    /// descriptor's order is updated afterwards, so repeated calls are
    /// no-ops; the change only reaches the file itself on [`flush`] or
    /// unmap.
    ///
    /// [`flush`]: MappedBuffer::flush
    pub fn make_native(&mut self) -> Result<()> {
        let width = self.elem.width();
        let mut view =
            TypedBuffer::new(&mut self.mmap[..], self.elem, self.count, width, self.order)?;
        make_native(&mut view);
        self.order = view.byte_order();
        Ok(())
    }

    /// Reinterpret the mapped bytes as a typed slice.
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        if T::ELEMENT_TYPE != self.elem {
            return Err(BytenormError::TypeMismatch {
                expected: self.elem.name().to_string(),
                found: T::ELEMENT_TYPE.name().to_string(),
            });
        }
        bytemuck::try_cast_slice(&self.mmap[..]).map_err(|_| BytenormError::TypeMismatch {
            expected: format!("{}-aligned mapping", self.elem.name()),
            found: "misaligned mapping".to_string(),
        })
    }

    /// Get the number of elements in the mapping
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the mapping contains no elements
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the element type of the mapping
    pub fn element_type(&self) -> ElementType {
        self.elem
    }

    /// Get the declared byte order of the mapped data
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Flush outstanding changes back to the file
    pub fn flush(&self) -> Result<()> {
        self.mmap.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for MappedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedBuffer")
            .field("elem", &self.elem)
            .field("count", &self.count)
            .field("order", &self.order)
            .finish()
    }
}
