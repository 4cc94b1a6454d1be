/// GlShaderProgram - OpenGL implementation of the ShaderProgram trait

use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use hgi_engine::hgi::{
    Config, ShaderFunction, ShaderFunctionHandle, ShaderProgram, ShaderProgramDesc, ShaderStage,
};
use hgi_engine::{engine_debug, engine_warn};

use crate::gl_shader_function::GlShaderFunction;

/// Linked GLSL program
///
/// Linking happens once, in [`link`](GlShaderProgram::link). The verdict,
/// the diagnostics and the handle sequence never change afterwards.
pub struct GlShaderProgram {
    desc: ShaderProgramDesc,
    compile_errors: String,
}

impl GlShaderProgram {
    /// Link the functions named by `desc`
    ///
    /// Always returns a program. When linking fails the program is invalid
    /// and `compile_errors` lists every problem found, one per line.
    pub(crate) fn link(
        desc: ShaderProgramDesc,
        functions: &SlotMap<ShaderFunctionHandle, GlShaderFunction>,
        config: &Config,
    ) -> Self {
        let mut errors = Vec::new();

        if desc.shader_functions.is_empty() && !config.allow_empty_shader_programs {
            errors.push("no shader functions".to_string());
        }

        let mut seen = FxHashSet::default();
        let mut stages = ShaderStage::empty();
        let mut duplicate_stages = ShaderStage::empty();

        for handle in &desc.shader_functions {
            if !seen.insert(*handle) {
                errors.push(format!("shader function {:?} is listed more than once", handle));
                continue;
            }

            let Some(function) = functions.get(*handle) else {
                errors.push(format!("unknown shader function {:?}", handle));
                continue;
            };

            if !function.is_valid() {
                errors.push(format!(
                    "shader function '{}' failed to compile: {}",
                    function.debug_name(),
                    function.compile_errors()
                ));
                continue;
            }

            if stages.intersects(function.stage()) {
                duplicate_stages |= function.stage();
            }
            stages |= function.stage();
        }

        if config.enable_validation {
            if !duplicate_stages.is_empty() {
                errors.push(format!("more than one function for stage {:?}", duplicate_stages));
            }
            if stages.contains(ShaderStage::COMPUTE) && stages.intersects(ShaderStage::GRAPHICS) {
                errors.push("compute stage cannot be linked with graphics stages".to_string());
            }
            if stages.intersects(ShaderStage::GRAPHICS) && !stages.contains(ShaderStage::VERTEX) {
                errors.push("graphics program without a vertex stage".to_string());
            }
        }

        let compile_errors = errors.join("\n");
        if compile_errors.is_empty() {
            engine_debug!("hgi::gl::ShaderProgram", "Linked '{}' ({} functions)",
                desc.debug_name, desc.shader_functions.len());
        } else {
            engine_warn!("hgi::gl::ShaderProgram", "Program '{}' failed to link: {}",
                desc.debug_name, compile_errors);
        }

        Self { desc, compile_errors }
    }
}

impl ShaderProgram for GlShaderProgram {
    fn debug_name(&self) -> &str {
        &self.desc.debug_name
    }

    fn is_valid(&self) -> bool {
        self.compile_errors.is_empty()
    }

    fn compile_errors(&self) -> &str {
        &self.compile_errors
    }

    fn shader_functions(&self) -> &[ShaderFunctionHandle] {
        &self.desc.shader_functions
    }
}
