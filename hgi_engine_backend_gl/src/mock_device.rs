/// Mock immediate device for unit tests (no GPU required)
///
/// Every call is recorded with its exact arguments into a shared list, so
/// tests can keep inspecting it after the device has been moved into a
/// `GlHgi`. A device can be told to fail on its k-th call (0-based); the
/// failing call is still recorded.

use std::sync::{Arc, Mutex};
use hgi_engine::hgi::{
    Result, Error,
    BufferHandle, PipelineHandle, ResourceBindingsHandle,
    TextureGpuToCpuOp, BufferCpuToGpuOp, ResolveImageOp, GraphicsEncoderDesc,
};
use glam::IVec4;

use crate::gl_device::ImmediateDevice;

/// One device call with the arguments it received
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    PushDebugGroup(String),
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

pub type CallLog = Arc<Mutex<Vec<DeviceCall>>>;

pub struct MockDevice {
    calls: CallLog,
    fail_on_call: Option<usize>,
}

impl MockDevice {
    pub fn new() -> (Self, CallLog) {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        (Self { calls: calls.clone(), fail_on_call: None }, calls)
    }

    /// Device whose `index`-th call (0-based) returns a backend error
    pub fn failing_on(index: usize) -> (Self, CallLog) {
        let (mut device, calls) = Self::new();
        device.fail_on_call = Some(index);
        (device, calls)
    }

    fn push(&mut self, call: DeviceCall) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(call);
        if self.fail_on_call == Some(index) {
            return Err(Error::BackendError(format!("GL_INVALID_OPERATION on call {}", index)));
        }
        Ok(())
    }
}

impl ImmediateDevice for MockDevice {
    fn push_debug_group(&mut self, label: &str) -> Result<()> {
        self.push(DeviceCall::PushDebugGroup(label.to_string()))
    }

    fn pop_debug_group(&mut self) -> Result<()> {
        self.push(DeviceCall::PopDebugGroup)
    }

    fn copy_texture_gpu_to_cpu(&mut self, op: &TextureGpuToCpuOp) -> Result<()> {
        self.push(DeviceCall::CopyTextureGpuToCpu(op.clone()))
    }

    fn copy_buffer_cpu_to_gpu(&mut self, op: &BufferCpuToGpuOp) -> Result<()> {
        self.push(DeviceCall::CopyBufferCpuToGpu(op.clone()))
    }

    fn resolve_image(&mut self, op: &ResolveImageOp) -> Result<()> {
        self.push(DeviceCall::ResolveImage(op.clone()))
    }

    fn set_viewport(&mut self, viewport: IVec4) -> Result<()> {
        self.push(DeviceCall::SetViewport(viewport))
    }

    fn set_scissor(&mut self, scissor: IVec4) -> Result<()> {
        self.push(DeviceCall::SetScissor(scissor))
    }

    fn bind_pipeline(&mut self, pipeline: PipelineHandle) -> Result<()> {
        self.push(DeviceCall::BindPipeline(pipeline))
    }

    fn bind_resources(&mut self, resources: ResourceBindingsHandle) -> Result<()> {
        self.push(DeviceCall::BindResources(resources))
    }

    fn bind_vertex_buffers(
        &mut self,
        first_binding: u32,
        buffers: &[BufferHandle],
        byte_offsets: &[u32],
    ) -> Result<()> {
        self.push(DeviceCall::BindVertexBuffers {
            first_binding,
            buffers: buffers.to_vec(),
            byte_offsets: byte_offsets.to_vec(),
        })
    }

    fn draw_indexed(
        &mut self,
        index_buffer: BufferHandle,
        index_count: u32,
        index_buffer_byte_offset: u32,
        first_index: u32,
        vertex_offset: u32,
        instance_count: u32,
    ) -> Result<()> {
        self.push(DeviceCall::DrawIndexed {
            index_buffer,
            index_count,
            index_buffer_byte_offset,
            first_index,
            vertex_offset,
            instance_count,
        })
    }

    fn bind_framebuffer(&mut self, desc: &GraphicsEncoderDesc) -> Result<()> {
        self.push(DeviceCall::BindFramebuffer(desc.clone()))
    }
}
