//! Error types for vertex layout construction.

use crate::attr::VertexAttr;

/// Errors that can occur while building a vertex layout.
///
/// `add` and `append` on [`VertexLayout`](crate::VertexLayout) treat the first
/// three variants as programming errors and panic; the `try_` variants return
/// them instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout already holds the maximum number of components.
    CapacityExceeded {
        /// Fixed component capacity of a layout.
        capacity: usize,
    },
    /// The attribute is already used by another component of the layout.
    DuplicateAttribute(VertexAttr),
    /// The component has no attribute set.
    InvalidAttribute,
    /// An attribute name did not match any known attribute.
    UnknownAttr(String),
    /// A format name did not match any known format.
    UnknownFormat(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "vertex layout capacity exceeded ({capacity} components)")
            }
            Self::DuplicateAttribute(attr) => {
                write!(f, "vertex attribute '{attr}' already in layout")
            }
            Self::InvalidAttribute => write!(f, "vertex component has no attribute"),
            Self::UnknownAttr(name) => write!(f, "unknown vertex attribute: {name}"),
            Self::UnknownFormat(name) => write!(f, "unknown vertex format: {name}"),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::CapacityExceeded { capacity: 16 };
        assert_eq!(
            err.to_string(),
            "vertex layout capacity exceeded (16 components)"
        );

        let err = LayoutError::DuplicateAttribute(VertexAttr::Normal);
        assert_eq!(err.to_string(), "vertex attribute 'normal' already in layout");

        let err = LayoutError::UnknownFormat("half3".to_string());
        assert_eq!(err.to_string(), "unknown vertex format: half3");
    }
}
