/// Backend-facing API - handles, descriptors and the traits every backend implements

// Module declarations
pub mod handles;
pub mod enums;
pub mod blit_ops;
pub mod graphics_encoder_desc;
pub mod shader_function;
pub mod shader_program;
pub mod factory;
pub mod backend_registry;

// Re-export everything
pub use handles::*;
pub use enums::*;
pub use blit_ops::*;
pub use graphics_encoder_desc::*;
pub use shader_function::*;
pub use shader_program::*;
pub use factory::*;
pub use backend_registry::*;

// Mock backend for tests (no GPU required)
#[cfg(test)]
pub mod mock_hgi;
