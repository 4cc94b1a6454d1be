/// Op - one recorded, replayable GPU call
///
/// Each variant owns a snapshot of the arguments given at record time.
/// Resource arguments are stored as handles, so the GPU sees the resource
/// as it is when the op executes; value arguments (rectangles, labels,
/// uploaded bytes, counts and offsets) are replayed exactly as captured.

use hgi_engine::hgi::{
    Result, Error,
    BufferHandle, PipelineHandle, ResourceBindingsHandle,
    TextureGpuToCpuOp, BufferCpuToGpuOp, ResolveImageOp, GraphicsEncoderDesc,
};
use glam::IVec4;

use crate::gl_device::ImmediateDevice;

/// A deferred GPU call
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    PushDebugGroup {
        label: String,
    },
    PopDebugGroup,
    CopyTextureGpuToCpu(TextureGpuToCpuOp),
    CopyBufferCpuToGpu(BufferCpuToGpuOp),
    ResolveImage(ResolveImageOp),
    SetViewport(IVec4),
    SetScissor(IVec4),
    BindPipeline(PipelineHandle),
    BindResources(ResourceBindingsHandle),
    BindVertexBuffers {
        first_binding: u32,
        buffers: Vec<BufferHandle>,
        byte_offsets: Vec<u32>,
    },
    DrawIndexed {
        index_buffer: BufferHandle,
        index_count: u32,
        index_buffer_byte_offset: u32,
        first_index: u32,
        vertex_offset: u32,
        instance_count: u32,
    },
    BindFramebuffer(GraphicsEncoderDesc),
}

impl Op {
    // ===== CONSTRUCTORS (validate at record time) =====

    pub fn push_debug_group(label: &str) -> Op {
        Op::PushDebugGroup { label: label.to_string() }
    }

    pub fn copy_texture_gpu_to_cpu(copy_op: &TextureGpuToCpuOp) -> Op {
        Op::CopyTextureGpuToCpu(copy_op.clone())
    }

    /// Snapshot an upload, rejecting ranges outside the source bytes
    pub fn copy_buffer_cpu_to_gpu(copy_op: &BufferCpuToGpuOp) -> Result<Op> {
        copy_op.validate()?;
        Ok(Op::CopyBufferCpuToGpu(copy_op.clone()))
    }

    pub fn resolve_image(resolve_op: &ResolveImageOp) -> Op {
        Op::ResolveImage(resolve_op.clone())
    }

    /// Snapshot a vertex buffer binding
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `buffers` and `byte_offsets` differ in length.
    pub fn bind_vertex_buffers(
        first_binding: u32,
        buffers: &[BufferHandle],
        byte_offsets: &[u32],
    ) -> Result<Op> {
        if buffers.len() != byte_offsets.len() {
            return Err(Error::InvalidArgument(format!(
                "bind_vertex_buffers: {} buffers but {} byte offsets",
                buffers.len(),
                byte_offsets.len()
            )));
        }
        Ok(Op::BindVertexBuffers {
            first_binding,
            buffers: buffers.to_vec(),
            byte_offsets: byte_offsets.to_vec(),
        })
    }

    pub fn draw_indexed(
        index_buffer: BufferHandle,
        index_count: u32,
        index_buffer_byte_offset: u32,
        first_index: u32,
        vertex_offset: u32,
        instance_count: u32,
    ) -> Op {
        Op::DrawIndexed {
            index_buffer,
            index_count,
            index_buffer_byte_offset,
            first_index,
            vertex_offset,
            instance_count,
        }
    }

    /// Snapshot an encoder description, rejecting mismatched attachment lists
    pub fn bind_framebuffer(desc: &GraphicsEncoderDesc) -> Result<Op> {
        desc.validate()?;
        Ok(Op::BindFramebuffer(desc.clone()))
    }

    // ===== INSPECTION =====

    /// Short kind name used in logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Op::PushDebugGroup { .. } => "push_debug_group",
            Op::PopDebugGroup => "pop_debug_group",
            Op::CopyTextureGpuToCpu(_) => "copy_texture_gpu_to_cpu",
            Op::CopyBufferCpuToGpu(_) => "copy_buffer_cpu_to_gpu",
            Op::ResolveImage(_) => "resolve_image",
            Op::SetViewport(_) => "set_viewport",
            Op::SetScissor(_) => "set_scissor",
            Op::BindPipeline(_) => "bind_pipeline",
            Op::BindResources(_) => "bind_resources",
            Op::BindVertexBuffers { .. } => "bind_vertex_buffers",
            Op::DrawIndexed { .. } => "draw_indexed",
            Op::BindFramebuffer(_) => "bind_framebuffer",
        }
    }

    // ===== EXECUTION =====

    /// Replay this op against the device
    pub fn execute(&self, device: &mut dyn ImmediateDevice) -> Result<()> {
        match self {
            Op::PushDebugGroup { label } => device.push_debug_group(label),
            Op::PopDebugGroup => device.pop_debug_group(),
            Op::CopyTextureGpuToCpu(copy_op) => device.copy_texture_gpu_to_cpu(copy_op),
            Op::CopyBufferCpuToGpu(copy_op) => device.copy_buffer_cpu_to_gpu(copy_op),
            Op::ResolveImage(resolve_op) => device.resolve_image(resolve_op),
            Op::SetViewport(viewport) => device.set_viewport(*viewport),
            Op::SetScissor(scissor) => device.set_scissor(*scissor),
            Op::BindPipeline(pipeline) => device.bind_pipeline(*pipeline),
            Op::BindResources(resources) => device.bind_resources(*resources),
            Op::BindVertexBuffers { first_binding, buffers, byte_offsets } => {
                device.bind_vertex_buffers(*first_binding, buffers, byte_offsets)
            }
            Op::DrawIndexed {
                index_buffer,
                index_count,
                index_buffer_byte_offset,
                first_index,
                vertex_offset,
                instance_count,
            } => device.draw_indexed(
                *index_buffer,
                *index_count,
                *index_buffer_byte_offset,
                *first_index,
                *vertex_offset,
                *instance_count,
            ),
            Op::BindFramebuffer(desc) => device.bind_framebuffer(desc),
        }
    }
}

#[cfg(test)]
#[path = "gl_ops_tests.rs"]
mod tests;
