/// Shared enumerations: shader stages, device kinds, attachment ops

use bitflags::bitflags;

bitflags! {
    /// Pipeline stage(s) a shader function runs in
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShaderStage: u32 {
        const VERTEX = 1 << 0;
        const FRAGMENT = 1 << 1;
        const COMPUTE = 1 << 2;
        const TESSELLATION_CONTROL = 1 << 3;
        const TESSELLATION_EVAL = 1 << 4;
        const GEOMETRY = 1 << 5;
    }
}

impl ShaderStage {
    /// Every stage that belongs to the graphics pipeline
    pub const GRAPHICS: ShaderStage = ShaderStage::VERTEX
        .union(ShaderStage::FRAGMENT)
        .union(ShaderStage::TESSELLATION_CONTROL)
        .union(ShaderStage::TESSELLATION_EVAL)
        .union(ShaderStage::GEOMETRY);

    /// True when exactly one stage bit is set
    pub fn is_single(&self) -> bool {
        self.bits().count_ones() == 1
    }
}

/// How a backend consumes GPU work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionModel {
    /// Calls are recorded into command buffers and submitted later
    Deferred,
    /// Calls execute as soon as they are issued; work is recorded as ops and replayed at commit
    Immediate,
}

/// Backend GPU API, passed explicitly to every factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    OpenGl,
    Vulkan,
    Metal,
}

impl DeviceKind {
    pub fn submission_model(&self) -> SubmissionModel {
        match self {
            DeviceKind::OpenGl => SubmissionModel::Immediate,
            DeviceKind::Vulkan | DeviceKind::Metal => SubmissionModel::Deferred,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DeviceKind::OpenGl => "OpenGL",
            DeviceKind::Vulkan => "Vulkan",
            DeviceKind::Metal => "Metal",
        }
    }
}

/// What happens to an attachment's contents when a render pass begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentLoadOp {
    #[default]
    DontCare,
    Clear,
    Load,
}

/// What happens to an attachment's contents when a render pass ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentStoreOp {
    DontCare,
    #[default]
    Store,
}
