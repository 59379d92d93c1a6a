//! Vertex component formats and step functions.

use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;

/// Data format of a vertex component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VertexFormat {
    /// Single 32-bit float.
    Float = 0,
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
    /// Four 8-bit signed integers.
    Byte4,
    /// Four 8-bit signed integers (normalized to -1.0-1.0).
    Byte4N,
    /// Four 8-bit unsigned integers.
    UByte4,
    /// Four 8-bit unsigned integers (normalized to 0.0-1.0).
    UByte4N,
    /// Two 16-bit signed integers.
    Short2,
    /// Two 16-bit signed integers (normalized to -1.0-1.0).
    Short2N,
    /// Four 16-bit signed integers.
    Short4,
    /// Four 16-bit signed integers (normalized to -1.0-1.0).
    Short4N,
    /// Unset format.
    #[default]
    Invalid,
}

impl VertexFormat {
    /// Number of valid format codes.
    pub const NUM: usize = 12;

    /// All valid formats, in code order.
    pub const ALL: [VertexFormat; Self::NUM] = [
        Self::Float,
        Self::Float2,
        Self::Float3,
        Self::Float4,
        Self::Byte4,
        Self::Byte4N,
        Self::UByte4,
        Self::UByte4N,
        Self::Short2,
        Self::Short2N,
        Self::Short4,
        Self::Short4N,
    ];

    /// Get the size in bytes of this format.
    ///
    /// The unset format has a size of zero.
    pub fn byte_size(self) -> u32 {
        match self {
            Self::Float => 4,
            Self::Float2 => 8,
            Self::Float3 => 12,
            Self::Float4 => 16,
            Self::Byte4 | Self::Byte4N | Self::UByte4 | Self::UByte4N => 4,
            Self::Short2 | Self::Short2N => 4,
            Self::Short4 | Self::Short4N => 8,
            Self::Invalid => 0,
        }
    }

    /// Number of scalar elements in this format.
    pub fn num_components(self) -> u32 {
        match self {
            Self::Float => 1,
            Self::Float2 | Self::Short2 | Self::Short2N => 2,
            Self::Float3 => 3,
            Self::Float4
            | Self::Byte4
            | Self::Byte4N
            | Self::UByte4
            | Self::UByte4N
            | Self::Short4
            | Self::Short4N => 4,
            Self::Invalid => 0,
        }
    }

    /// Whether integer data is normalized to floats when read by the shader.
    pub fn is_normalized(self) -> bool {
        matches!(
            self,
            Self::Byte4N | Self::UByte4N | Self::Short2N | Self::Short4N
        )
    }

    /// Check if this is a real format (not the unset sentinel).
    pub fn is_valid(self) -> bool {
        self != Self::Invalid
    }

    /// Canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Float2 => "float2",
            Self::Float3 => "float3",
            Self::Float4 => "float4",
            Self::Byte4 => "byte4",
            Self::Byte4N => "byte4n",
            Self::UByte4 => "ubyte4",
            Self::UByte4N => "ubyte4n",
            Self::Short2 => "short2",
            Self::Short2N => "short2n",
            Self::Short4 => "short4",
            Self::Short4N => "short4n",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for VertexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VertexFormat {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| LayoutError::UnknownFormat(s.to_string()))
    }
}

/// How a vertex component advances: per-vertex or per-instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VertexStepFunction {
    /// Advances once per vertex (default).
    #[default]
    PerVertex = 0,
    /// Advances once per instance (for instanced rendering).
    PerInstance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_format_byte_size() {
        assert_eq!(VertexFormat::Float.byte_size(), 4);
        assert_eq!(VertexFormat::Float3.byte_size(), 12);
        assert_eq!(VertexFormat::Float4.byte_size(), 16);
        assert_eq!(VertexFormat::UByte4N.byte_size(), 4);
        assert_eq!(VertexFormat::Short2N.byte_size(), 4);
        assert_eq!(VertexFormat::Short4.byte_size(), 8);
        assert_eq!(VertexFormat::Invalid.byte_size(), 0);
    }

    #[test]
    fn test_normalized_formats() {
        let normalized: Vec<_> = VertexFormat::ALL
            .iter()
            .filter(|f| f.is_normalized())
            .collect();
        assert_eq!(normalized.len(), 4);
        assert!(!VertexFormat::Float4.is_normalized());
    }

    #[test]
    fn test_element_size_is_consistent() {
        for format in VertexFormat::ALL {
            assert_eq!(format.byte_size() % format.num_components(), 0, "{format}");
        }
    }

    #[test]
    fn test_parse_names() {
        for format in VertexFormat::ALL {
            assert_eq!(format.as_str().parse::<VertexFormat>(), Ok(format));
        }
        assert!("vec3".parse::<VertexFormat>().is_err());
    }

    #[test]
    fn test_default_step_function() {
        assert_eq!(VertexStepFunction::default(), VertexStepFunction::PerVertex);
    }
}
