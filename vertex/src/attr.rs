//! Vertex attribute codes.
//!
//! Attributes give a vertex component its meaning and are used to match mesh
//! data with shader inputs. Each valid attribute has a small integer code in
//! `0..VertexAttr::NUM` which layouts use to index their lookup tables.

use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;

/// Semantic meaning of a vertex component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VertexAttr {
    /// Vertex position.
    Position = 0,
    /// Vertex normal.
    Normal,
    /// Texture coordinates set 0.
    TexCoord0,
    /// Texture coordinates set 1.
    TexCoord1,
    /// Texture coordinates set 2.
    TexCoord2,
    /// Texture coordinates set 3.
    TexCoord3,
    /// Vertex tangent.
    Tangent,
    /// Vertex binormal.
    Binormal,
    /// Skinning weights.
    Weights,
    /// Skinning joint indices.
    Indices,
    /// Vertex color set 0.
    Color0,
    /// Vertex color set 1.
    Color1,
    /// Generic per-instance data 0.
    Instance0,
    /// Generic per-instance data 1.
    Instance1,
    /// Generic per-instance data 2.
    Instance2,
    /// Generic per-instance data 3.
    Instance3,
    /// Unset attribute.
    #[default]
    Invalid,
}

impl VertexAttr {
    /// Number of valid attribute codes.
    pub const NUM: usize = 16;

    /// All valid attributes, in code order.
    pub const ALL: [VertexAttr; Self::NUM] = [
        Self::Position,
        Self::Normal,
        Self::TexCoord0,
        Self::TexCoord1,
        Self::TexCoord2,
        Self::TexCoord3,
        Self::Tangent,
        Self::Binormal,
        Self::Weights,
        Self::Indices,
        Self::Color0,
        Self::Color1,
        Self::Instance0,
        Self::Instance1,
        Self::Instance2,
        Self::Instance3,
    ];

    /// Integer code of this attribute.
    ///
    /// Returns `None` for [`VertexAttr::Invalid`].
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Invalid => None,
            attr => Some(attr as usize),
        }
    }

    /// Attribute for an integer code, if the code is in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Check if this is a real attribute (not the unset sentinel).
    pub fn is_valid(self) -> bool {
        self != Self::Invalid
    }

    /// Canonical name, as used by shader input declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Normal => "normal",
            Self::TexCoord0 => "texcoord0",
            Self::TexCoord1 => "texcoord1",
            Self::TexCoord2 => "texcoord2",
            Self::TexCoord3 => "texcoord3",
            Self::Tangent => "tangent",
            Self::Binormal => "binormal",
            Self::Weights => "weights",
            Self::Indices => "indices",
            Self::Color0 => "color0",
            Self::Color1 => "color1",
            Self::Instance0 => "instance0",
            Self::Instance1 => "instance1",
            Self::Instance2 => "instance2",
            Self::Instance3 => "instance3",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for VertexAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VertexAttr {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| LayoutError::UnknownAttr(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_dense() {
        for (i, attr) in VertexAttr::ALL.iter().enumerate() {
            assert_eq!(attr.index(), Some(i));
            assert_eq!(VertexAttr::from_index(i), Some(*attr));
        }
        assert_eq!(VertexAttr::Invalid.index(), None);
        assert_eq!(VertexAttr::from_index(VertexAttr::NUM), None);
    }

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(VertexAttr::default(), VertexAttr::Invalid);
        assert!(!VertexAttr::default().is_valid());
        assert!(VertexAttr::Position.is_valid());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("texcoord2".parse::<VertexAttr>(), Ok(VertexAttr::TexCoord2));
        assert_eq!("instance3".parse::<VertexAttr>(), Ok(VertexAttr::Instance3));
        assert_eq!(VertexAttr::Color1.to_string(), "color1");

        // The sentinel has a name but is not parseable.
        assert_eq!(
            "invalid".parse::<VertexAttr>(),
            Err(LayoutError::UnknownAttr("invalid".to_string()))
        );
        assert!("Position".parse::<VertexAttr>().is_err());
    }
}
