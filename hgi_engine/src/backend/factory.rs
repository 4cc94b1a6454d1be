/// Hgi trait - backend factory interface and backend configuration

use std::any::Any;
use crate::error::{Error, Result};
use crate::backend::{
    DeviceKind, ShaderFunction, ShaderFunctionDesc, ShaderFunctionHandle,
    ShaderProgram, ShaderProgramDesc, ShaderProgramHandle,
};

/// Backend configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application name (used in log output)
    pub app_name: String,
    /// Accept shader programs without any shader function
    pub allow_empty_shader_programs: bool,
    /// Run the stricter link checks (duplicate stages, compute mixed with graphics)
    pub enable_validation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "HGI Application".to_string(),
            allow_empty_shader_programs: false,
            enable_validation: cfg!(debug_assertions),
        }
    }
}

/// Backend factory and owner of shader resources
///
/// Implemented once per GPU API. Creation calls never fail: a shader that
/// does not compile or a program that does not link still gets a handle and
/// reports the problem through its `is_valid()` / `compile_errors()`.
pub trait Hgi: Send {
    /// GPU API this backend drives
    fn device_kind(&self) -> DeviceKind;

    /// Compile one shader stage
    fn create_shader_function(&mut self, desc: ShaderFunctionDesc) -> ShaderFunctionHandle;

    /// Look up a shader function
    fn shader_function(&self, handle: ShaderFunctionHandle) -> Option<&dyn ShaderFunction>;

    /// Destroy a shader function
    ///
    /// Programs that reference it keep their handle sequence unchanged.
    fn destroy_shader_function(&mut self, handle: ShaderFunctionHandle) -> Result<()>;

    /// Link a shader program from already created shader functions
    fn create_shader_program(&mut self, desc: ShaderProgramDesc) -> ShaderProgramHandle;

    /// Look up a shader program
    fn shader_program(&self, handle: ShaderProgramHandle) -> Option<&dyn ShaderProgram>;

    /// Destroy a shader program (its shader functions are left alone)
    fn destroy_shader_program(&mut self, handle: ShaderProgramHandle) -> Result<()>;

    /// Concrete backend behind a `Box<dyn Hgi>` from the registry
    ///
    /// Backend-only entry points (such as committing recorded ops) are
    /// reached by downcasting this.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Turn an invalid program into an error for callers that cannot fall back
    ///
    /// # Errors
    ///
    /// - `InvalidResource` if the handle is unknown
    /// - `CompileFailure` carrying the program diagnostics if it did not link
    fn require_valid_program(&self, handle: ShaderProgramHandle) -> Result<&dyn ShaderProgram> {
        let program = self.shader_program(handle).ok_or_else(|| {
            Error::InvalidResource(format!("unknown shader program {:?}", handle))
        })?;
        if !program.is_valid() {
            return Err(Error::CompileFailure(format!(
                "shader program '{}': {}",
                program.debug_name(),
                program.compile_errors()
            )));
        }
        Ok(program)
    }
}
