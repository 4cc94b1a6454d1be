/// GlHgi - OpenGL implementation of the Hgi trait

use std::any::Any;
use slotmap::SlotMap;
use hgi_engine::hgi::{
    Result, Error, Config, DeviceKind, Hgi, BackendRegistry,
    ShaderFunction, ShaderFunctionDesc, ShaderFunctionHandle,
    ShaderProgram, ShaderProgramDesc, ShaderProgramHandle,
};
use hgi_engine::{engine_debug, engine_error, engine_info};

use crate::gl_device::ImmediateDevice;
use crate::gl_op_recorder::OpRecorder;
use crate::gl_shader_function::GlShaderFunction;
use crate::gl_shader_program::GlShaderProgram;

/// Immediate-mode OpenGL backend
///
/// Owns the device all recorders are committed against, plus every shader
/// function and program created through it.
pub struct GlHgi {
    config: Config,
    device: Box<dyn ImmediateDevice + Send>,
    shader_functions: SlotMap<ShaderFunctionHandle, GlShaderFunction>,
    shader_programs: SlotMap<ShaderProgramHandle, GlShaderProgram>,
}

impl GlHgi {
    /// Create the backend around an immediate-mode device
    ///
    /// The device must be `Send` because the backend is; thread-bound
    /// devices are committed directly with [`OpRecorder::commit`].
    pub fn new(device: Box<dyn ImmediateDevice + Send>, config: Config) -> Self {
        engine_info!("hgi::gl", "OpenGL backend created for '{}'", config.app_name);
        Self {
            config,
            device,
            shader_functions: SlotMap::with_key(),
            shader_programs: SlotMap::with_key(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Commit a recorder against this backend's device
    ///
    /// See [`OpRecorder::commit`] for ordering and failure semantics.
    pub fn submit(&mut self, recorder: &OpRecorder) -> Result<()> {
        recorder.commit(&mut *self.device)
    }

    /// Borrow the OpenGL backend behind a registry-created `Hgi`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `hgi` is another backend.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut hgi = registry.create(DeviceKind::OpenGl, &config)?;
    /// GlHgi::from_hgi_mut(hgi.as_mut())?.submit(&recorder)?;
    /// ```
    pub fn from_hgi_mut(hgi: &mut dyn Hgi) -> Result<&mut GlHgi> {
        let kind = hgi.device_kind();
        hgi.as_any_mut().downcast_mut::<GlHgi>().ok_or_else(|| {
            engine_error!("hgi::gl", "Expected the OpenGL backend, got {}", kind.name());
            Error::InvalidArgument(format!("expected the OpenGL backend, got {}", kind.name()))
        })
    }

    /// Number of live shader programs
    pub fn shader_program_count(&self) -> usize {
        self.shader_programs.len()
    }
}

impl Hgi for GlHgi {
    fn device_kind(&self) -> DeviceKind {
        DeviceKind::OpenGl
    }

    fn create_shader_function(&mut self, desc: ShaderFunctionDesc) -> ShaderFunctionHandle {
        let function = GlShaderFunction::compile(desc);
        if !function.is_valid() {
            engine_error!("hgi::gl::ShaderFunction", "'{}' failed to compile: {}",
                function.debug_name(), function.compile_errors());
        }
        self.shader_functions.insert(function)
    }

    fn shader_function(&self, handle: ShaderFunctionHandle) -> Option<&dyn ShaderFunction> {
        self.shader_functions.get(handle).map(|f| f as &dyn ShaderFunction)
    }

    fn destroy_shader_function(&mut self, handle: ShaderFunctionHandle) -> Result<()> {
        match self.shader_functions.remove(handle) {
            Some(function) => {
                engine_debug!("hgi::gl", "Destroyed shader function '{}'", function.debug_name());
                Ok(())
            }
            None => Err(Error::InvalidResource(format!("unknown shader function {:?}", handle))),
        }
    }

    fn create_shader_program(&mut self, desc: ShaderProgramDesc) -> ShaderProgramHandle {
        let program = GlShaderProgram::link(desc, &self.shader_functions, &self.config);
        self.shader_programs.insert(program)
    }

    fn shader_program(&self, handle: ShaderProgramHandle) -> Option<&dyn ShaderProgram> {
        self.shader_programs.get(handle).map(|p| p as &dyn ShaderProgram)
    }

    fn destroy_shader_program(&mut self, handle: ShaderProgramHandle) -> Result<()> {
        match self.shader_programs.remove(handle) {
            Some(program) => {
                engine_debug!("hgi::gl", "Destroyed shader program '{}'", program.debug_name());
                Ok(())
            }
            None => Err(Error::InvalidResource(format!("unknown shader program {:?}", handle))),
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Register the OpenGL backend
///
/// `device_factory` is called once per backend created through the registry.
///
/// # Example
///
/// ```ignore
/// let mut registry = BackendRegistry::new();
/// hgi_engine_backend_gl::register(&mut registry, || Box::new(MyGlDevice::new()));
/// let hgi = registry.create(DeviceKind::OpenGl, &Config::default())?;
/// ```
pub fn register<F>(registry: &mut BackendRegistry, device_factory: F)
where
    F: Fn() -> Box<dyn ImmediateDevice + Send> + Send + Sync + 'static,
{
    registry.register(DeviceKind::OpenGl, move |config| {
        Ok(Box::new(GlHgi::new(device_factory(), config.clone())) as Box<dyn Hgi>)
    });
}

#[cfg(test)]
#[path = "gl_hgi_tests.rs"]
mod tests;
