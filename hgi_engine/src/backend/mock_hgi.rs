/// Mock backend for unit tests (no GPU required)
///
/// Shader functions are valid unless their code is empty; programs link when
/// they reference at least one known, valid function (or when the config
/// allows empty programs).

use std::any::Any;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::backend::{
    Config, DeviceKind, Hgi, ShaderFunction, ShaderFunctionDesc, ShaderFunctionHandle,
    ShaderProgram, ShaderProgramDesc, ShaderProgramHandle, ShaderStage,
};

// ============================================================================
// Mock ShaderFunction
// ============================================================================

pub struct MockShaderFunction {
    pub desc: ShaderFunctionDesc,
    pub errors: String,
}

impl ShaderFunction for MockShaderFunction {
    fn debug_name(&self) -> &str { &self.desc.debug_name }
    fn stage(&self) -> ShaderStage { self.desc.stage }
    fn is_valid(&self) -> bool { self.errors.is_empty() }
    fn compile_errors(&self) -> &str { &self.errors }
}

// ============================================================================
// Mock ShaderProgram
// ============================================================================

pub struct MockShaderProgram {
    pub desc: ShaderProgramDesc,
    pub errors: String,
}

impl ShaderProgram for MockShaderProgram {
    fn debug_name(&self) -> &str { &self.desc.debug_name }
    fn is_valid(&self) -> bool { self.errors.is_empty() }
    fn compile_errors(&self) -> &str { &self.errors }
    fn shader_functions(&self) -> &[ShaderFunctionHandle] { &self.desc.shader_functions }
}

// ============================================================================
// Mock Hgi
// ============================================================================

pub struct MockHgi {
    pub kind: DeviceKind,
    pub config: Config,
    pub functions: SlotMap<ShaderFunctionHandle, MockShaderFunction>,
    pub programs: SlotMap<ShaderProgramHandle, MockShaderProgram>,
}

impl MockHgi {
    pub fn new(kind: DeviceKind, config: Config) -> Self {
        Self {
            kind,
            config,
            functions: SlotMap::with_key(),
            programs: SlotMap::with_key(),
        }
    }
}

impl Hgi for MockHgi {
    fn device_kind(&self) -> DeviceKind {
        self.kind
    }

    fn create_shader_function(&mut self, desc: ShaderFunctionDesc) -> ShaderFunctionHandle {
        let errors = if desc.shader_code.is_empty() {
            "empty shader code".to_string()
        } else {
            String::new()
        };
        self.functions.insert(MockShaderFunction { desc, errors })
    }

    fn shader_function(&self, handle: ShaderFunctionHandle) -> Option<&dyn ShaderFunction> {
        self.functions.get(handle).map(|f| f as &dyn ShaderFunction)
    }

    fn destroy_shader_function(&mut self, handle: ShaderFunctionHandle) -> Result<()> {
        self.functions
            .remove(handle)
            .map(|_| ())
            .ok_or_else(|| Error::InvalidResource(format!("unknown shader function {:?}", handle)))
    }

    fn create_shader_program(&mut self, desc: ShaderProgramDesc) -> ShaderProgramHandle {
        let mut errors = String::new();
        if desc.shader_functions.is_empty() && !self.config.allow_empty_shader_programs {
            errors.push_str("no shader functions");
        }
        for handle in &desc.shader_functions {
            match self.functions.get(*handle) {
                Some(f) if f.is_valid() => {}
                _ => errors.push_str("invalid shader function"),
            }
        }
        self.programs.insert(MockShaderProgram { desc, errors })
    }

    fn shader_program(&self, handle: ShaderProgramHandle) -> Option<&dyn ShaderProgram> {
        self.programs.get(handle).map(|p| p as &dyn ShaderProgram)
    }

    fn destroy_shader_program(&mut self, handle: ShaderProgramHandle) -> Result<()> {
        self.programs
            .remove(handle)
            .map(|_| ())
            .ok_or_else(|| Error::InvalidResource(format!("unknown shader program {:?}", handle)))
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
