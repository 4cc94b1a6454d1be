/// ShaderFunction trait and shader function descriptor

use crate::backend::ShaderStage;

/// Descriptor for creating one shader stage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderFunctionDesc {
    /// Debug name, reported in diagnostics
    pub debug_name: String,
    /// Stage this function runs in (exactly one bit)
    pub stage: ShaderStage,
    /// Backend-specific shader source
    pub shader_code: String,
}

/// Compiled shader stage
///
/// Implemented by backend-specific shader function types. Like programs,
/// functions never fail to construct: compile problems are reported through
/// [`is_valid`](ShaderFunction::is_valid) and
/// [`compile_errors`](ShaderFunction::compile_errors).
pub trait ShaderFunction: Send + Sync {
    fn debug_name(&self) -> &str;

    fn stage(&self) -> ShaderStage;

    /// Returns false if the stage failed to compile
    fn is_valid(&self) -> bool;

    /// Compile diagnostics (empty when valid)
    fn compile_errors(&self) -> &str;
}
