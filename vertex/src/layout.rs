//! Vertex layout definitions.
//!
//! A [`VertexLayout`] describes one vertex record: which attributes it carries,
//! in which [`VertexFormat`], at which byte offset, from which buffer slot and
//! whether each component advances per vertex or per instance.
//!
//! Layouts are plain `Copy` values with fixed-capacity inline storage, so they
//! never allocate. The component order is the binding order and determines the
//! byte offsets. Attribute lookup is O(1) through a table indexed by the
//! attribute code.
//!
//! Layouts are built once at mesh/shader setup time and treated as immutable
//! afterwards. [`VertexLayout::hash64`] and [`VertexLayout::combined_hash`]
//! give deterministic cache keys for matching layouts to pipeline state.
//!
//! # Example
//!
//! ```
//! use redlilium_vertex::{VertexAttr, VertexFormat, VertexLayout, VertexStepFunction};
//!
//! let mut layout = VertexLayout::new();
//! layout
//!     .add_vertex(VertexAttr::Position, VertexFormat::Float3)
//!     .add_instanced(VertexAttr::Instance0, VertexFormat::Float4);
//!
//! assert_eq!(layout.byte_size(), 28);
//! assert_eq!(layout.component_byte_offset(1), 12);
//! assert_eq!(layout.component_at(1).step_function, VertexStepFunction::PerInstance);
//! assert_eq!(layout.component_at(1).slot, 1);
//! ```

use std::hash::Hasher;

use fnv::FnvHasher;

use crate::attr::VertexAttr;
use crate::config::{
    DEFAULT_INSTANCE_SLOT, DEFAULT_VERTEX_SLOT, MAX_NUM_VERTEX_LAYOUT_COMPONENTS,
};
use crate::error::LayoutError;
use crate::format::{VertexFormat, VertexStepFunction};

/// A single component of a vertex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Component {
    /// Semantic meaning of this component.
    pub attr: VertexAttr,
    /// Data format of this component.
    pub format: VertexFormat,
    /// Index of the vertex buffer binding this component reads from.
    pub slot: u8,
    /// Whether the component advances per vertex or per instance.
    pub step_function: VertexStepFunction,
    /// Instance step divisor, only meaningful for per-instance components.
    pub step_rate: u8,
}

impl Component {
    /// Create a per-vertex component reading from slot 0.
    pub fn new(attr: VertexAttr, format: VertexFormat) -> Self {
        Self {
            attr,
            format,
            slot: DEFAULT_VERTEX_SLOT,
            step_function: VertexStepFunction::PerVertex,
            step_rate: 0,
        }
    }

    /// Create a per-instance component with a step rate of 1, reading from slot 0.
    pub fn instanced(attr: VertexAttr, format: VertexFormat) -> Self {
        Self {
            step_function: VertexStepFunction::PerInstance,
            step_rate: 1,
            ..Self::new(attr, format)
        }
    }

    /// Set the buffer slot for this component.
    pub fn with_slot(mut self, slot: u8) -> Self {
        self.slot = slot;
        self
    }

    /// Set the instance step rate for this component.
    pub fn with_step_rate(mut self, step_rate: u8) -> Self {
        self.step_rate = step_rate;
        self
    }

    /// Check if the component has an attribute.
    ///
    /// Only the attribute is checked; a component with an unset format is
    /// still considered valid.
    pub fn is_valid(&self) -> bool {
        self.attr.is_valid()
    }

    /// Unset the attribute and format.
    pub fn clear(&mut self) {
        self.attr = VertexAttr::Invalid;
        self.format = VertexFormat::Invalid;
    }

    /// Size in bytes of this component, zero if the format is unset.
    pub fn byte_size(&self) -> u32 {
        self.format.byte_size()
    }
}

/// Layout of one vertex record inside one or more vertex buffers.
///
/// Invariants, kept after every mutation:
/// - at most [`MAX_NUM_VERTEX_LAYOUT_COMPONENTS`] components
/// - no two components share an attribute
/// - each component's byte offset is the sum of the sizes of the components before it
/// - the attribute lookup table matches the component array
/// - the byte size is the sum of all component sizes
#[derive(Clone, Copy)]
pub struct VertexLayout {
    comps: [Component; MAX_NUM_VERTEX_LAYOUT_COMPONENTS],
    byte_offsets: [u32; MAX_NUM_VERTEX_LAYOUT_COMPONENTS],
    attr_comp_indices: [Option<u8>; VertexAttr::NUM],
    num_comps: u8,
    byte_size: u32,
}

impl VertexLayout {
    /// Maximum number of components in a layout.
    pub const CAPACITY: usize = MAX_NUM_VERTEX_LAYOUT_COMPONENTS;

    /// Create a new empty vertex layout.
    pub fn new() -> Self {
        Self {
            comps: [Component::default(); MAX_NUM_VERTEX_LAYOUT_COMPONENTS],
            byte_offsets: [0; MAX_NUM_VERTEX_LAYOUT_COMPONENTS],
            attr_comp_indices: [None; VertexAttr::NUM],
            num_comps: 0,
            byte_size: 0,
        }
    }

    /// Reset to the empty layout.
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Check if the layout has no components.
    pub fn is_empty(&self) -> bool {
        self.num_comps == 0
    }

    /// Add a component at the end of the layout.
    ///
    /// # Panics
    ///
    /// Panics if the layout is full, if the component has no attribute or if
    /// its attribute is already part of the layout.
    pub fn add(&mut self, comp: Component) -> &mut Self {
        if let Err(err) = self.try_add(comp) {
            fail(err);
        }
        self
    }

    /// Add a component at the end of the layout, returning an error instead
    /// of panicking.
    ///
    /// The layout is left unchanged on error.
    pub fn try_add(&mut self, comp: Component) -> Result<&mut Self, LayoutError> {
        let attr_index = self.check(&comp, self.num_components())?;
        self.push(comp, attr_index);
        Ok(self)
    }

    /// Add a per-vertex component reading from slot 0.
    pub fn add_vertex(&mut self, attr: VertexAttr, format: VertexFormat) -> &mut Self {
        self.add_vertex_at(attr, format, DEFAULT_VERTEX_SLOT)
    }

    /// Add a per-vertex component reading from the given slot.
    pub fn add_vertex_at(
        &mut self,
        attr: VertexAttr,
        format: VertexFormat,
        slot: u8,
    ) -> &mut Self {
        self.add(Component::new(attr, format).with_slot(slot))
    }

    /// Add a per-instance component (step rate 1) reading from slot 1.
    pub fn add_instanced(&mut self, attr: VertexAttr, format: VertexFormat) -> &mut Self {
        self.add_instanced_at(attr, format, DEFAULT_INSTANCE_SLOT)
    }

    /// Add a per-instance component (step rate 1) reading from the given slot.
    pub fn add_instanced_at(
        &mut self,
        attr: VertexAttr,
        format: VertexFormat,
        slot: u8,
    ) -> &mut Self {
        self.add(Component::instanced(attr, format).with_slot(slot))
    }

    /// Append all components of `other`, in order.
    ///
    /// Typically used to combine a mesh layout with a per-instance layout.
    ///
    /// # Panics
    ///
    /// Panics if any attribute of `other` is already part of this layout or
    /// if the combined layout would exceed the capacity.
    pub fn append(&mut self, other: &VertexLayout) -> &mut Self {
        if let Err(err) = self.try_append(other) {
            fail(err);
        }
        self
    }

    /// Append all components of `other`, returning an error instead of panicking.
    ///
    /// Either every component is appended or, on error, none is.
    pub fn try_append(&mut self, other: &VertexLayout) -> Result<&mut Self, LayoutError> {
        let base = self.num_components();
        for (i, comp) in other.iter().enumerate() {
            self.check(comp, base + i)?;
        }

        log::trace!(
            "Appending {} vertex components to a layout of {}",
            other.num_components(),
            base
        );

        // `other` has no duplicate attributes of its own, so none of these can fail.
        for comp in other.iter() {
            let attr_index = self.check(comp, self.num_components())?;
            self.push(*comp, attr_index);
        }
        Ok(self)
    }

    /// Get the number of components.
    pub fn num_components(&self) -> usize {
        self.num_comps as usize
    }

    /// Get the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.num_components()`.
    pub fn component_at(&self, index: usize) -> &Component {
        &self.components()[index]
    }

    /// Get all components in binding order.
    pub fn components(&self) -> &[Component] {
        &self.comps[..self.num_components()]
    }

    /// Iterate over the components in binding order.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components().iter()
    }

    /// Get the index of the component carrying `attr`, if any.
    pub fn component_index_by_vertex_attr(&self, attr: VertexAttr) -> Option<usize> {
        let attr_index = attr.index()?;
        self.attr_comp_indices[attr_index].map(usize::from)
    }

    /// Get the component carrying `attr`, if any.
    pub fn component_by_vertex_attr(&self, attr: VertexAttr) -> Option<&Component> {
        self.component_index_by_vertex_attr(attr)
            .map(|index| &self.comps[index])
    }

    /// Check if this layout has a component for `attr`.
    pub fn contains(&self, attr: VertexAttr) -> bool {
        self.component_index_by_vertex_attr(attr).is_some()
    }

    /// Size of one vertex record in bytes (the vertex stride).
    pub fn byte_size(&self) -> u32 {
        self.byte_size
    }

    /// Byte offset of the component at `index` within one vertex record.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.num_components()`.
    pub fn component_byte_offset(&self, index: usize) -> u32 {
        self.byte_offsets[..self.num_components()][index]
    }

    /// Total size of the components reading from buffer `slot`.
    pub fn slot_byte_size(&self, slot: u8) -> u32 {
        self.iter()
            .filter(|comp| comp.slot == slot)
            .map(Component::byte_size)
            .sum()
    }

    /// Bitmask of the contained attributes, bit `n` set for attribute code `n`.
    pub fn attr_mask(&self) -> u32 {
        self.iter()
            .filter_map(|comp| comp.attr.index())
            .fold(0, |mask, index| mask | (1 << index))
    }

    /// Check if this layout is satisfied by a `provided` layout.
    ///
    /// Every attribute of `self` must exist in `provided` with the same
    /// format. Order, slots and extra attributes in `provided` don't matter,
    /// which makes this suitable for checking a mesh layout against the
    /// inputs a shader expects.
    pub fn is_compatible_with(&self, provided: &VertexLayout) -> bool {
        self.missing_attrs(provided).next().is_none()
    }

    /// Attributes of `self` that `provided` lacks or has in another format.
    pub fn missing_attrs<'a>(
        &'a self,
        provided: &'a VertexLayout,
    ) -> impl Iterator<Item = VertexAttr> + 'a {
        self.iter()
            .filter(move |comp| {
                provided
                    .component_by_vertex_attr(comp.attr)
                    .map_or(true, |other| other.format != comp.format)
            })
            .map(|comp| comp.attr)
    }

    /// Deterministic 64-bit hash of the ordered component sequence.
    ///
    /// Two layouts with the same hash are treated as binding-compatible. The
    /// value is stable across runs and platforms.
    pub fn hash64(&self) -> u64 {
        let mut hasher = FnvHasher::default();
        hasher.write_u8(self.num_comps);
        for comp in self.iter() {
            // Explicit byte codes keep the hash independent of enum discriminant width.
            hasher.write_u8(comp.attr as u8);
            hasher.write_u8(comp.format as u8);
            hasher.write_u8(comp.slot);
            hasher.write_u8(comp.step_function as u8);
            hasher.write_u8(comp.step_rate);
        }
        hasher.finish()
    }

    /// Combined hash of two layouts bound together, e.g. mesh geometry and
    /// per-instance data.
    ///
    /// The combination is order sensitive.
    pub fn combined_hash(l0: &VertexLayout, l1: &VertexLayout) -> u64 {
        let mut hasher = FnvHasher::default();
        hasher.write(&l0.hash64().to_le_bytes());
        hasher.write(&l1.hash64().to_le_bytes());
        hasher.finish()
    }

    fn check(&self, comp: &Component, index: usize) -> Result<usize, LayoutError> {
        if index >= Self::CAPACITY {
            return Err(LayoutError::CapacityExceeded {
                capacity: Self::CAPACITY,
            });
        }
        let attr_index = comp.attr.index().ok_or(LayoutError::InvalidAttribute)?;
        if self.attr_comp_indices[attr_index].is_some() {
            return Err(LayoutError::DuplicateAttribute(comp.attr));
        }
        Ok(attr_index)
    }

    fn push(&mut self, comp: Component, attr_index: usize) {
        let index = self.num_components();
        self.comps[index] = comp;
        self.byte_offsets[index] = self.byte_size;
        self.byte_size += comp.byte_size();
        self.attr_comp_indices[attr_index] = Some(self.num_comps);
        self.num_comps += 1;
    }
}

#[cold]
#[track_caller]
fn fail(err: LayoutError) -> ! {
    log::error!("Invalid vertex layout: {err}");
    panic!("{err}");
}

impl Default for VertexLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for VertexLayout {
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }
}

impl Eq for VertexLayout {}

impl std::hash::Hash for VertexLayout {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash64());
    }
}

impl std::fmt::Debug for VertexLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexLayout")
            .field("components", &self.components())
            .field("byte_offsets", &&self.byte_offsets[..self.num_components()])
            .field("byte_size", &self.byte_size)
            .finish()
    }
}

impl<'a> IntoIterator for &'a VertexLayout {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Component> for VertexLayout {
    fn extend<T: IntoIterator<Item = Component>>(&mut self, iter: T) {
        for comp in iter {
            self.add(comp);
        }
    }
}

impl FromIterator<Component> for VertexLayout {
    fn from_iter<T: IntoIterator<Item = Component>>(iter: T) -> Self {
        let mut layout = Self::new();
        layout.extend(iter);
        layout
    }
}

static_assertions::assert_impl_all!(VertexLayout: Send, Sync, Copy);

// ============================================================================
// Common Layouts
// ============================================================================

impl VertexLayout {
    /// Position-only layout (12 bytes per vertex).
    pub fn position_only() -> Self {
        let mut layout = Self::new();
        layout.add_vertex(VertexAttr::Position, VertexFormat::Float3);
        layout
    }

    /// Position + normal layout (24 bytes per vertex).
    pub fn position_normal() -> Self {
        let mut layout = Self::position_only();
        layout.add_vertex(VertexAttr::Normal, VertexFormat::Float3);
        layout
    }

    /// Position + normal + texcoord layout (32 bytes per vertex).
    pub fn position_normal_uv() -> Self {
        let mut layout = Self::position_normal();
        layout.add_vertex(VertexAttr::TexCoord0, VertexFormat::Float2);
        layout
    }

    /// Full PBR layout: position + normal + tangent + texcoord (48 bytes per vertex).
    pub fn pbr() -> Self {
        let mut layout = Self::position_normal();
        layout
            .add_vertex(VertexAttr::Tangent, VertexFormat::Float4)
            .add_vertex(VertexAttr::TexCoord0, VertexFormat::Float2);
        layout
    }

    /// Per-instance 4x4 transform as four `Float4` rows (64 bytes per instance).
    pub fn instance_transform(slot: u8) -> Self {
        let mut layout = Self::new();
        for attr in [
            VertexAttr::Instance0,
            VertexAttr::Instance1,
            VertexAttr::Instance2,
            VertexAttr::Instance3,
        ] {
            layout.add_instanced_at(attr, VertexFormat::Float4, slot);
        }
        layout
    }
}
