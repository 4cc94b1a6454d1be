/// GlShaderFunction - OpenGL implementation of the ShaderFunction trait

use hgi_engine::hgi::{ShaderFunction, ShaderFunctionDesc, ShaderStage};

/// One GLSL shader stage
pub struct GlShaderFunction {
    desc: ShaderFunctionDesc,
    compile_errors: String,
}

impl GlShaderFunction {
    /// Check the stage and source; never fails, problems land in `compile_errors`
    pub(crate) fn compile(desc: ShaderFunctionDesc) -> Self {
        let mut errors = Vec::new();

        if !desc.stage.is_single() {
            errors.push(format!("expected exactly one stage, got {:?}", desc.stage));
        }
        if desc.shader_code.trim().is_empty() {
            errors.push("empty shader code".to_string());
        } else if !desc.shader_code.contains("main") {
            errors.push("no 'main' entry point".to_string());
        }

        Self {
            desc,
            compile_errors: errors.join("\n"),
        }
    }
}

impl ShaderFunction for GlShaderFunction {
    fn debug_name(&self) -> &str {
        &self.desc.debug_name
    }

    fn stage(&self) -> ShaderStage {
        self.desc.stage
    }

    fn is_valid(&self) -> bool {
        self.compile_errors.is_empty()
    }

    fn compile_errors(&self) -> &str {
        &self.compile_errors
    }
}
