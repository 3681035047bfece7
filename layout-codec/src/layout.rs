//! Packed struct layouts and the generic encode/decode pair.
//!
//! A [`StructLayout`] composes an ordered list of [`FieldDescriptor`]s into a
//! fixed total byte width. Declaration order is wire order; there is no
//! padding between fields. Layouts are validated once at construction and
//! immutable afterwards.

use crate::{
    error::CodecError,
    field::{FieldDescriptor, FieldValue},
};

/// Ordered, packed sequence of fixed-width fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLayout {
    fields: Vec<FieldDescriptor>,
    size: usize,
}

impl StructLayout {
    /// Build a layout, rejecting malformed field descriptors.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, CodecError> {
        for field in &fields {
            field.validate()?;
        }
        let size = fields.iter().map(FieldDescriptor::width).sum();
        Ok(Self { fields, size })
    }

    /// Empty layout (instructions with no data fields).
    pub fn empty() -> Self {
        Self {
            fields: Vec::new(),
            size: 0,
        }
    }

    /// Total encoded width in bytes. Pure function of the schema, usable
    /// before any value exists (e.g. to size account allocations).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Encode `values` positionally against the layout's fields.
    ///
    /// The output is always exactly [`Self::size`] bytes. Arity and
    /// per-field type mismatches are schema errors; out-of-range integers
    /// and oversized byte inputs fail loudly per field.
    pub fn encode(&self, values: &[FieldValue]) -> Result<Vec<u8>, CodecError> {
        if values.len() != self.fields.len() {
            return Err(CodecError::Schema(format!(
                "expected {} values, got {}",
                self.fields.len(),
                values.len()
            )));
        }
        let mut out = Vec::with_capacity(self.size);
        for (field, value) in self.fields.iter().zip(values) {
            field.encode_into(value, &mut out)?;
        }
        Ok(out)
    }

    /// Decode the first [`Self::size`] bytes of `bytes` into a [`Record`].
    ///
    /// Fails only on length: any byte pattern is a legal instance of a
    /// fixed layout. Trailing bytes beyond the layout width are ignored.
    pub fn decode(&self, bytes: &[u8]) -> Result<Record, CodecError> {
        if bytes.len() < self.size {
            return Err(CodecError::Length {
                expected: self.size,
                actual: bytes.len(),
            });
        }
        let mut fields = Vec::with_capacity(self.fields.len());
        let mut offset = 0;
        for field in &self.fields {
            fields.push((field.name().to_string(), field.decode_from(&bytes[offset..])));
            offset += field.width();
        }
        Ok(Record { fields })
    }
}

/// Decoded instance of a [`StructLayout`]: ordered `(name, value)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Single-field record, used to seed a discriminator-prefixed decode.
    pub(crate) fn with_field(name: String, value: FieldValue) -> Self {
        Self {
            fields: vec![(name, value)],
        }
    }

    /// Append another record's fields, preserving order.
    pub(crate) fn extend(&mut self, other: Record) {
        self.fields.extend(other.fields);
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// Values in declaration order, consuming the record.
    pub fn into_values(self) -> Vec<FieldValue> {
        self.fields.into_iter().map(|(_, v)| v).collect()
    }
}
