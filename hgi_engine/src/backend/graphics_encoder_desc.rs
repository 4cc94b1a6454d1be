/// Graphics encoder (framebuffer) description

use glam::Vec4;
use crate::error::{Error, Result};
use crate::backend::{TextureHandle, AttachmentLoadOp, AttachmentStoreOp};

/// How one attachment is loaded, stored and cleared
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttachmentDesc {
    pub load_op: AttachmentLoadOp,
    pub store_op: AttachmentStoreOp,
    /// RGBA for color attachments, (depth, stencil, 0, 0) for depth
    pub clear_value: Vec4,
}

/// Attachments an encoder renders into
///
/// `color_attachment_descs[i]` describes `color_textures[i]`. Resolve
/// textures, when present, pair with the color textures the same way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicsEncoderDesc {
    pub color_attachment_descs: Vec<AttachmentDesc>,
    pub depth_attachment_desc: Option<AttachmentDesc>,
    pub color_textures: Vec<TextureHandle>,
    pub color_resolve_textures: Vec<TextureHandle>,
    pub depth_texture: Option<TextureHandle>,
    pub depth_resolve_texture: Option<TextureHandle>,
    pub width: u32,
    pub height: u32,
}

impl GraphicsEncoderDesc {
    /// True when at least one color or depth texture is attached
    pub fn has_attachments(&self) -> bool {
        !self.color_textures.is_empty() || self.depth_texture.is_some()
    }

    /// Check the parallel attachment sequences line up
    pub fn validate(&self) -> Result<()> {
        if self.color_attachment_descs.len() != self.color_textures.len() {
            return Err(Error::InvalidArgument(format!(
                "{} color attachment descs for {} color textures",
                self.color_attachment_descs.len(),
                self.color_textures.len()
            )));
        }
        if !self.color_resolve_textures.is_empty()
            && self.color_resolve_textures.len() != self.color_textures.len()
        {
            return Err(Error::InvalidArgument(format!(
                "{} color resolve textures for {} color textures",
                self.color_resolve_textures.len(),
                self.color_textures.len()
            )));
        }
        if self.depth_attachment_desc.is_some() != self.depth_texture.is_some() {
            return Err(Error::InvalidArgument(
                "depth attachment desc and depth texture must be set together".to_string(),
            ));
        }
        if self.depth_resolve_texture.is_some() && self.depth_texture.is_none() {
            return Err(Error::InvalidArgument(
                "depth resolve texture without a depth texture".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "graphics_encoder_desc_tests.rs"]
mod tests;
