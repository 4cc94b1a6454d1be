/// OpRecorder - ordered queue of ops replayed on commit
///
/// An immediate-mode API executes calls as they are issued. To present the
/// same record-then-submit model as deferred backends, encoders record ops
/// here and the whole queue is replayed against the device on `commit`.
///
/// A recorder belongs to one encoder session on one thread. Its state lives
/// in `Cell`/`RefCell`, so the type is `!Sync` and the compiler rejects
/// sharing it between threads; the interior mutability also lets a device
/// that calls back into the recorder while it commits get a `Misuse` error
/// instead of corrupting the queue.

use std::cell::{Cell, RefCell};
use hgi_engine::hgi::{
    Result, Error,
    BufferHandle, PipelineHandle, ResourceBindingsHandle,
    TextureGpuToCpuOp, BufferCpuToGpuOp, ResolveImageOp, GraphicsEncoderDesc,
};
use glam::IVec4;
use hgi_engine::{engine_debug, engine_error, engine_trace, engine_warn};

use crate::gl_device::ImmediateDevice;
use crate::gl_ops::Op;

/// Recorder lifecycle: `Idle -> Recording -> Committing -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    /// Nothing recorded since creation or the last commit
    Idle,
    /// At least one op is queued
    Recording,
    /// `commit` is replaying the queue
    Committing,
}

/// Resets the state to `Idle` when a commit ends, however it ends
struct IdleOnDrop<'a>(&'a Cell<RecorderState>);

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(RecorderState::Idle);
    }
}

/// Ordered, append-only queue of ops
pub struct OpRecorder {
    ops: RefCell<Vec<Op>>,
    state: Cell<RecorderState>,
}

impl OpRecorder {
    /// Create an empty recorder in the `Idle` state
    pub fn new() -> Self {
        Self {
            ops: RefCell::new(Vec::new()),
            state: Cell::new(RecorderState::Idle),
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state.get()
    }

    /// Number of queued ops
    pub fn len(&self) -> usize {
        self.ops.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.borrow().is_empty()
    }

    /// Copy of the queued ops, in recording order
    pub fn snapshot(&self) -> Vec<Op> {
        self.ops.borrow().clone()
    }

    // ===== RECORDING =====

    pub fn record_push_debug_group(&self, label: &str) -> Result<()> {
        self.append(|| Ok(Op::push_debug_group(label)))
    }

    pub fn record_pop_debug_group(&self) -> Result<()> {
        self.append(|| Ok(Op::PopDebugGroup))
    }

    pub fn record_copy_texture_gpu_to_cpu(&self, copy_op: &TextureGpuToCpuOp) -> Result<()> {
        self.append(|| Ok(Op::copy_texture_gpu_to_cpu(copy_op)))
    }

    pub fn record_copy_buffer_cpu_to_gpu(&self, copy_op: &BufferCpuToGpuOp) -> Result<()> {
        self.append(|| Op::copy_buffer_cpu_to_gpu(copy_op))
    }

    pub fn record_resolve_image(&self, resolve_op: &ResolveImageOp) -> Result<()> {
        self.append(|| Ok(Op::resolve_image(resolve_op)))
    }

    pub fn record_set_viewport(&self, viewport: IVec4) -> Result<()> {
        self.append(|| Ok(Op::SetViewport(viewport)))
    }

    pub fn record_set_scissor(&self, scissor: IVec4) -> Result<()> {
        self.append(|| Ok(Op::SetScissor(scissor)))
    }

    pub fn record_bind_pipeline(&self, pipeline: PipelineHandle) -> Result<()> {
        self.append(|| Ok(Op::BindPipeline(pipeline)))
    }

    pub fn record_bind_resources(&self, resources: ResourceBindingsHandle) -> Result<()> {
        self.append(|| Ok(Op::BindResources(resources)))
    }

    /// Record a vertex buffer binding
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `buffers` and `byte_offsets` differ in length;
    /// nothing is queued in that case.
    pub fn record_bind_vertex_buffers(
        &self,
        first_binding: u32,
        buffers: &[BufferHandle],
        byte_offsets: &[u32],
    ) -> Result<()> {
        self.append(|| Op::bind_vertex_buffers(first_binding, buffers, byte_offsets))
    }

    pub fn record_draw_indexed(
        &self,
        index_buffer: BufferHandle,
        index_count: u32,
        index_buffer_byte_offset: u32,
        first_index: u32,
        vertex_offset: u32,
        instance_count: u32,
    ) -> Result<()> {
        self.append(|| {
            Ok(Op::draw_indexed(
                index_buffer,
                index_count,
                index_buffer_byte_offset,
                first_index,
                vertex_offset,
                instance_count,
            ))
        })
    }

    pub fn record_bind_framebuffer(&self, desc: &GraphicsEncoderDesc) -> Result<()> {
        self.append(|| Op::bind_framebuffer(desc))
    }

    /// Build an op and queue it, or leave the queue untouched on error
    fn append(&self, build: impl FnOnce() -> Result<Op>) -> Result<()> {
        if self.state.get() == RecorderState::Committing {
            engine_error!("hgi::OpRecorder", "Recording while a commit is in progress");
            return Err(Error::Misuse(
                "cannot record ops while the recorder is committing".to_string(),
            ));
        }

        let op = build().map_err(|err| {
            engine_warn!("hgi::OpRecorder", "Rejected op: {}", err);
            err
        })?;

        engine_trace!("hgi::OpRecorder", "Recorded {}", op.name());
        self.ops.borrow_mut().push(op);
        self.state.set(RecorderState::Recording);
        Ok(())
    }

    // ===== COMMIT =====

    /// Replay every queued op against the device, in recording order
    ///
    /// The queue is empty when this returns, whatever the outcome. On the
    /// first device failure the remaining ops are dropped without being
    /// executed.
    ///
    /// # Errors
    ///
    /// - `Misuse` if called while this recorder is already committing
    /// - `DeviceExecutionFailure` naming the failing op
    pub fn commit(&self, device: &mut dyn ImmediateDevice) -> Result<()> {
        if self.state.get() == RecorderState::Committing {
            engine_error!("hgi::OpRecorder", "Re-entrant commit");
            return Err(Error::Misuse("commit is not re-entrant".to_string()));
        }

        let ops = self.ops.take();
        self.state.set(RecorderState::Committing);
        let _idle = IdleOnDrop(&self.state);

        let total = ops.len();
        engine_debug!("hgi::OpRecorder", "Committing {} ops", total);

        for (index, op) in ops.iter().enumerate() {
            #[cfg(feature = "trace-ops")]
            engine_trace!("hgi::OpRecorder", "Executing op #{} ({})", index, op.name());

            if let Err(err) = op.execute(device) {
                let discarded = total - index - 1;
                engine_error!("hgi::OpRecorder",
                    "Op #{} ({}) failed: {}; discarding {} remaining ops",
                    index, op.name(), err, discarded);
                return Err(Error::DeviceExecutionFailure(format!(
                    "op #{} ({}) failed: {}; {} remaining ops discarded",
                    index, op.name(), err, discarded
                )));
            }
        }

        engine_debug!("hgi::OpRecorder", "Committed {} ops", total);
        Ok(())
    }
}

impl Default for OpRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OpRecorder {
    fn drop(&mut self) {
        let pending = self.ops.get_mut().len();
        if pending > 0 {
            engine_debug!("hgi::OpRecorder", "Discarding {} uncommitted ops", pending);
        }
    }
}

#[cfg(test)]
#[path = "gl_op_recorder_tests.rs"]
mod tests;
