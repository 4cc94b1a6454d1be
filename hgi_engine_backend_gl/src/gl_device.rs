/// ImmediateDevice trait - the GPU calls an immediate-mode backend replays

use hgi_engine::hgi::{
    Result,
    BufferHandle, PipelineHandle, ResourceBindingsHandle,
    TextureGpuToCpuOp, BufferCpuToGpuOp, ResolveImageOp, GraphicsEncoderDesc,
};
use glam::IVec4;

/// Immediate-mode GPU device
///
/// One method per op kind, each taking exactly the values captured by the
/// op. Every call executes right away on the GPU API (e.g. a GL context made
/// current on this thread) and reports a failure through its `Result`.
///
/// The trait has no `Send` bound, so [`OpRecorder::commit`] can drive a
/// device that only lives on the thread owning the GL context. A device
/// handed to `GlHgi` must also be `Send`, since every `Hgi` backend is.
///
/// [`OpRecorder::commit`]: crate::gl_op_recorder::OpRecorder::commit
pub trait ImmediateDevice {
    /// Open a named debug group (glPushDebugGroup)
    fn push_debug_group(&mut self, label: &str) -> Result<()>;

    /// Close the innermost debug group
    fn pop_debug_group(&mut self) -> Result<()>;

    /// Read back texels into a host buffer
    fn copy_texture_gpu_to_cpu(&mut self, op: &TextureGpuToCpuOp) -> Result<()>;

    /// Upload host bytes into a buffer
    fn copy_buffer_cpu_to_gpu(&mut self, op: &BufferCpuToGpuOp) -> Result<()>;

    /// Resolve a multisample texture
    fn resolve_image(&mut self, op: &ResolveImageOp) -> Result<()>;

    /// Set the viewport rectangle (x, y, width, height)
    fn set_viewport(&mut self, viewport: IVec4) -> Result<()>;

    /// Set the scissor rectangle (x, y, width, height)
    fn set_scissor(&mut self, scissor: IVec4) -> Result<()>;

    fn bind_pipeline(&mut self, pipeline: PipelineHandle) -> Result<()>;

    fn bind_resources(&mut self, resources: ResourceBindingsHandle) -> Result<()>;

    /// Bind `buffers[i]` at binding `first_binding + i` with offset `byte_offsets[i]`
    ///
    /// Both slices always have the same length.
    fn bind_vertex_buffers(
        &mut self,
        first_binding: u32,
        buffers: &[BufferHandle],
        byte_offsets: &[u32],
    ) -> Result<()>;

    /// Indexed draw using 32-bit indices read from `index_buffer`
    fn draw_indexed(
        &mut self,
        index_buffer: BufferHandle,
        index_count: u32,
        index_buffer_byte_offset: u32,
        first_index: u32,
        vertex_offset: u32,
        instance_count: u32,
    ) -> Result<()>;

    /// Bind (creating if needed) the framebuffer for these attachments
    fn bind_framebuffer(&mut self, desc: &GraphicsEncoderDesc) -> Result<()>;
}
