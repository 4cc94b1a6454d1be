/// Opaque resource handles
///
/// Handles identify a resource owned by a backend. They are cheap to copy,
/// compare by identity and never give access to the resource contents, so an
/// op that stores one sees the resource as it is when the op executes.

use slotmap::{new_key_type, Key, KeyData};

new_key_type! {
    /// GPU buffer (vertex, index, uniform, storage...)
    pub struct BufferHandle;

    /// GPU texture
    pub struct TextureHandle;

    /// Host-visible destination for GPU-to-CPU copies
    pub struct HostBufferHandle;

    /// Graphics or compute pipeline state object
    pub struct PipelineHandle;

    /// Set of resource bindings (textures, buffers, samplers)
    pub struct ResourceBindingsHandle;

    /// One compiled shader stage
    pub struct ShaderFunctionHandle;

    /// Linked shader program
    pub struct ShaderProgramHandle;
}

/// Build a handle from a native integer id (e.g. a GL object name)
///
/// The id becomes the slot index and the version is fixed, so distinct ids
/// always give distinct handles and [`handle_to_raw`] returns the id again.
pub fn handle_from_raw<K: Key>(raw: u32) -> K {
    KeyData::from_ffi(u64::from(raw)).into()
}

/// Native id carried by a handle built with [`handle_from_raw`]
///
/// Only the slot index is returned. For handles allocated by a `SlotMap` the
/// version is lost, so `handle_from_raw(handle_to_raw(h))` gives back `h`
/// only when `h` itself came from [`handle_from_raw`].
pub fn handle_to_raw<K: Key>(handle: K) -> u32 {
    (handle.data().as_ffi() & 0xffff_ffff) as u32
}
