/*!
# HGI Engine - OpenGL Backend

Immediate-mode backend of the HGI graphics abstraction.

OpenGL executes calls as soon as they are issued. To offer the same
record-then-submit model as command-buffer APIs, encoders record each GPU
call as an [`Op`](hgi::Op) into an [`OpRecorder`](hgi::OpRecorder); the
queue is replayed, in order, against an [`ImmediateDevice`](hgi::ImmediateDevice)
when the recorder is committed.

The backend is selected at runtime through `BackendRegistry` with
`DeviceKind::OpenGl`.
*/

// OpenGL implementation modules
mod gl_device;
mod gl_ops;
mod gl_op_recorder;
mod gl_shader_function;
mod gl_shader_program;
mod gl_hgi;

// Mock device for tests (no GPU required)
#[cfg(test)]
mod mock_device;

pub use gl_hgi::register;

/// Main hgi namespace module
pub mod hgi {
    pub use crate::gl_device::ImmediateDevice;
    pub use crate::gl_ops::Op;
    pub use crate::gl_op_recorder::{OpRecorder, RecorderState};
    pub use crate::gl_shader_function::GlShaderFunction;
    pub use crate::gl_shader_program::GlShaderProgram;
    pub use crate::gl_hgi::GlHgi;
}
