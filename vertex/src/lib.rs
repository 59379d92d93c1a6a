//! # RedLilium Vertex
//!
//! Fixed-capacity vertex layout descriptions for RedLilium Engine.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`VertexLayout`] - Ordered vertex components with byte offsets, stride and hashes
//! - [`Component`] - A single attribute/format/slot/step entry of a layout
//! - [`VertexAttr`] / [`VertexFormat`] - The attribute and format code spaces
//!
//! Layouts are GPU-agnostic. Backends read [`VertexLayout::byte_size`] and
//! [`VertexLayout::component_byte_offset`] to fill their binding descriptors
//! and key pipeline caches with [`VertexLayout::hash64`] or
//! [`VertexLayout::combined_hash`].

pub mod attr;
pub mod config;
pub mod error;
pub mod format;
pub mod layout;

pub use attr::VertexAttr;
pub use config::MAX_NUM_VERTEX_LAYOUT_COMPONENTS;
pub use error::LayoutError;
pub use format::{VertexFormat, VertexStepFunction};
pub use layout::{Component, VertexLayout};

/// Vertex library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version.
pub fn init() {
    log::info!("RedLilium Vertex v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_capacity_covers_all_attrs() {
        assert!(MAX_NUM_VERTEX_LAYOUT_COMPONENTS >= VertexAttr::NUM);
    }
}
