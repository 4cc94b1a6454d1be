/// ShaderProgram trait and shader program descriptor

use crate::backend::ShaderFunctionHandle;

/// Describes the properties needed to create a shader program
///
/// Two descriptors are equal when their debug names are equal and their
/// shader function sequences are equal element by element, in order.
/// Descriptors also hash consistently, so they can key a program cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ShaderProgramDesc {
    pub debug_name: String,
    /// One handle per stage; order is kept as given
    pub shader_functions: Vec<ShaderFunctionHandle>,
}

impl ShaderProgramDesc {
    pub fn new(debug_name: impl Into<String>, shader_functions: Vec<ShaderFunctionHandle>) -> Self {
        Self {
            debug_name: debug_name.into(),
            shader_functions,
        }
    }
}

/// Linked collection of shader functions
///
/// Implemented by one concrete type per backend and only created through
/// `Hgi::create_shader_program`. The program refers to its shader functions
/// by handle and never destroys them.
pub trait ShaderProgram: Send + Sync {
    fn debug_name(&self) -> &str;

    /// Returns false if any shader compile or link error occurred
    fn is_valid(&self) -> bool;

    /// Compile/link diagnostics (empty when valid)
    fn compile_errors(&self) -> &str;

    /// Shader functions exactly as given at construction
    fn shader_functions(&self) -> &[ShaderFunctionHandle];
}

#[cfg(test)]
#[path = "shader_program_tests.rs"]
mod tests;
