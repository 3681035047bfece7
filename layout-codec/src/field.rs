//! Field descriptors and runtime-tagged field values.
//!
//! A [`FieldDescriptor`] names one fixed-width wire field: either an unsigned
//! little-endian integer of 1/2/4/8 bytes or a raw byte array of a declared
//! width. Values travel as [`FieldValue`] so one generic codec handles every
//! schema without generated code.

use std::fmt;

use crate::error::CodecError;

/// Wire shape of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Little-endian unsigned integer, `width` in {1, 2, 4, 8}.
    UInt { width: usize },
    /// Raw byte array of exactly `width` bytes, zero-padded on the right
    /// when the source value is shorter.
    Bytes { width: usize },
}

impl FieldKind {
    /// Encoded width in bytes.
    pub fn width(&self) -> usize {
        match self {
            FieldKind::UInt { width } | FieldKind::Bytes { width } => *width,
        }
    }
}

/// One named field in a fixed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
}

impl FieldDescriptor {
    /// Unsigned integer field of the given byte width.
    pub fn uint(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::UInt { width },
        }
    }

    /// Raw byte-array field of the given width.
    pub fn bytes(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Bytes { width },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Encoded width in bytes.
    pub fn width(&self) -> usize {
        self.kind.width()
    }

    /// Schema validation, run once at layout construction.
    pub(crate) fn validate(&self) -> Result<(), CodecError> {
        match self.kind {
            FieldKind::UInt { width } => {
                if !matches!(width, 1 | 2 | 4 | 8) {
                    return Err(CodecError::Schema(format!(
                        "field `{}`: unsupported integer width {width} (expected 1, 2, 4, or 8)",
                        self.name
                    )));
                }
            }
            FieldKind::Bytes { width } => {
                if width == 0 {
                    return Err(CodecError::Schema(format!(
                        "field `{}`: zero-width byte field",
                        self.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Append this field's encoding of `value` to `out`.
    pub(crate) fn encode_into(
        &self,
        value: &FieldValue,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        match (&self.kind, value) {
            (FieldKind::UInt { width }, FieldValue::UInt(v)) => {
                if *width < 8 && *v >> (8 * width) != 0 {
                    return Err(CodecError::Range {
                        field: self.name.clone(),
                        width: *width,
                        value: *v,
                    });
                }
                out.extend_from_slice(&v.to_le_bytes()[..*width]);
                Ok(())
            }
            (FieldKind::Bytes { width }, FieldValue::Bytes(b)) => {
                if b.len() > *width {
                    return Err(CodecError::Overflow {
                        field: self.name.clone(),
                        width: *width,
                        len: b.len(),
                    });
                }
                out.extend_from_slice(b);
                out.resize(out.len() + (width - b.len()), 0);
                Ok(())
            }
            (kind, value) => Err(CodecError::Schema(format!(
                "field `{}`: {kind:?} cannot encode {value:?}",
                self.name
            ))),
        }
    }

    /// Decode this field from `bytes`, which the caller guarantees to hold
    /// at least [`Self::width`] bytes.
    pub(crate) fn decode_from(&self, bytes: &[u8]) -> FieldValue {
        match self.kind {
            FieldKind::UInt { width } => {
                let mut buf = [0u8; 8];
                buf[..width].copy_from_slice(&bytes[..width]);
                FieldValue::UInt(u64::from_le_bytes(buf))
            }
            FieldKind::Bytes { width } => FieldValue::Bytes(bytes[..width].to_vec()),
        }
    }
}

/// Runtime-tagged value of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    UInt(u64),
    Bytes(Vec<u8>),
}

impl FieldValue {
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            FieldValue::UInt(v) => Some(*v),
            FieldValue::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::UInt(_) => None,
            FieldValue::Bytes(b) => Some(b),
        }
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::UInt(v)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(b: Vec<u8>) -> Self {
        FieldValue::Bytes(b)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(b: &[u8]) -> Self {
        FieldValue::Bytes(b.to_vec())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Bytes(s.as_bytes().to_vec())
    }
}

impl fmt::Display for FieldValue {
    /// Integers render in decimal; 32-byte arrays render as base58 (they are
    /// address-shaped); other byte arrays render as hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::UInt(v) => write!(f, "{v}"),
            FieldValue::Bytes(b) if b.len() == 32 => {
                write!(f, "{}", bs58::encode(b).into_string())
            }
            FieldValue::Bytes(b) => {
                write!(f, "0x")?;
                for byte in b {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}
