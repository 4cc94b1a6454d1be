/*!
# HGI Engine

Core traits and types of the HGI graphics abstraction.

This crate provides the backend-agnostic API: resource handles, descriptor
value types, and the traits every backend implements. Backends (OpenGL,
Vulkan, Metal...) live in their own crates and are selected at runtime by
an explicit [`DeviceKind`](hgi::DeviceKind) through a
[`BackendRegistry`](hgi::BackendRegistry).

## Architecture

- **Hgi**: Backend factory trait creating and owning shader resources
- **ShaderFunction**: One compiled shader stage
- **ShaderProgram**: Linked, immutable aggregate of shader functions
- **Handles**: Opaque, copyable identifiers for buffers, textures, pipelines...
- **Blit / encoder descriptors**: Value types captured by backend commands
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod backend;

// Main hgi namespace module
pub mod hgi {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Backend API (traits, handles, descriptors)
    pub use crate::backend::*;

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}

// Re-export math library at crate root
pub use glam;
