/// Copy and resolve descriptors consumed by blit ops

use glam::{IVec3, IVec4};
use bytemuck::Pod;
use crate::error::{Error, Result};
use crate::backend::{BufferHandle, TextureHandle, HostBufferHandle};

/// Read back one mip level of a texture into a host buffer
#[derive(Debug, Clone, PartialEq)]
pub struct TextureGpuToCpuOp {
    /// Texture to read from
    pub gpu_source_texture: TextureHandle,
    /// Texel offset of the copied region (x, y, z)
    pub source_texel_offset: IVec3,
    /// Mip level to copy
    pub mip_level: u32,
    /// Host buffer receiving the texels
    pub cpu_destination_buffer: HostBufferHandle,
    /// Byte offset into the host buffer
    pub destination_byte_offset: usize,
    /// Number of bytes the host buffer can receive from `destination_byte_offset`
    pub destination_buffer_byte_size: usize,
}

/// Upload host bytes into a GPU buffer
///
/// The bytes are owned by the descriptor. A recorded upload therefore sends
/// the data as it was when the op was recorded, whatever the caller does to
/// its own copy before the commit.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferCpuToGpuOp {
    /// Source bytes
    pub cpu_source_buffer: Vec<u8>,
    /// Offset of the first byte to upload within `cpu_source_buffer`
    pub source_byte_offset: usize,
    /// Buffer receiving the bytes
    pub gpu_destination_buffer: BufferHandle,
    /// Byte offset into the destination buffer
    pub destination_byte_offset: usize,
    /// Number of bytes to upload
    pub byte_size: usize,
}

impl BufferCpuToGpuOp {
    /// Upload a whole slice of plain-old-data values
    ///
    /// # Example
    ///
    /// ```ignore
    /// let indices: [u32; 6] = [0, 1, 2, 2, 3, 0];
    /// let upload = BufferCpuToGpuOp::from_slice(&indices, index_buffer, 0);
    /// assert_eq!(upload.byte_size, 24);
    /// ```
    pub fn from_slice<T: Pod>(
        data: &[T],
        gpu_destination_buffer: BufferHandle,
        destination_byte_offset: usize,
    ) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        Self {
            cpu_source_buffer: bytes.to_vec(),
            source_byte_offset: 0,
            gpu_destination_buffer,
            destination_byte_offset,
            byte_size: bytes.len(),
        }
    }

    /// Bytes that will actually be uploaded
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeded.
    pub fn source_bytes(&self) -> &[u8] {
        &self.cpu_source_buffer[self.source_byte_offset..self.source_byte_offset + self.byte_size]
    }

    /// Check that the uploaded range lies inside the source bytes
    pub fn validate(&self) -> Result<()> {
        let end = self.source_byte_offset.checked_add(self.byte_size);
        match end {
            Some(end) if end <= self.cpu_source_buffer.len() => Ok(()),
            _ => Err(Error::InvalidArgument(format!(
                "upload range {}..+{} exceeds the {} source bytes",
                self.source_byte_offset,
                self.byte_size,
                self.cpu_source_buffer.len()
            ))),
        }
    }
}

/// Resolve a multisample texture into a single-sample one
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveImageOp {
    /// Multisample source texture
    pub source: TextureHandle,
    /// Single-sample destination texture
    pub destination: TextureHandle,
    /// Source region (x, y, width, height)
    pub source_region: IVec4,
    /// Destination region (x, y, width, height)
    pub destination_region: IVec4,
}

#[cfg(test)]
#[path = "blit_ops_tests.rs"]
mod tests;
