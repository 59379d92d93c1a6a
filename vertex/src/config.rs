//! Compile-time limits shared by all vertex layouts.

/// Maximum number of components a single [`VertexLayout`](crate::VertexLayout) can hold.
pub const MAX_NUM_VERTEX_LAYOUT_COMPONENTS: usize = 16;

/// Buffer slot used by per-vertex components unless told otherwise.
pub const DEFAULT_VERTEX_SLOT: u8 = 0;

/// Buffer slot used by per-instance components unless told otherwise.
pub const DEFAULT_INSTANCE_SLOT: u8 = 1;

// Indices into the component array are stored as `u8`.
static_assertions::const_assert!(MAX_NUM_VERTEX_LAYOUT_COMPONENTS <= u8::MAX as usize);
