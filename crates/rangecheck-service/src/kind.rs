//! Value kinds - the closed set of types a range can be checked over

use crate::error::ServiceError;

/// Supported value types
///
/// Type tags are resolved onto this enum once per request; nothing is looked
/// up by reflection or through a global registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 32-bit float, ordered by IEEE total order
    Float,
    /// 64-bit float, ordered by IEEE total order
    Double,
    /// Arbitrary-precision decimal
    BigDecimal,
    /// Arbitrary-precision integer
    BigInteger,
    /// Text, ordered lexicographically by bytes
    Text,
    /// Calendar date written `YYYY-MM-DD`
    LocalDate,
}

impl ValueKind {
    /// All value kinds, in declaration order
    pub const ALL: [ValueKind; 8] = [
        ValueKind::Integer,
        ValueKind::Long,
        ValueKind::Float,
        ValueKind::Double,
        ValueKind::BigDecimal,
        ValueKind::BigInteger,
        ValueKind::Text,
        ValueKind::LocalDate,
    ];

    /// Get the canonical type tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Integer => "Integer",
            ValueKind::Long => "Long",
            ValueKind::Float => "Float",
            ValueKind::Double => "Double",
            ValueKind::BigDecimal => "BigDecimal",
            ValueKind::BigInteger => "BigInteger",
            ValueKind::Text => "String",
            ValueKind::LocalDate => "LocalDate",
        }
    }

    /// Alternative lowercase names accepted by [`ValueKind::resolve`]
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ValueKind::Integer => &["int"],
            ValueKind::BigDecimal => &["decimal"],
            ValueKind::Text => &["text"],
            ValueKind::LocalDate => &["date"],
            _ => &[],
        }
    }

    /// Resolve a type tag such as `"Integer"`, `"integer"` or `"Integer.class"`
    ///
    /// # Errors
    /// Returns [`ServiceError::UnknownType`] if the tag names no value kind
    pub fn resolve(tag: &str) -> Result<Self, ServiceError> {
        let name = tag.trim().to_lowercase();
        let name = name.strip_suffix(".class").unwrap_or(&name);

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().to_lowercase() == name || kind.aliases().contains(&name))
            .ok_or_else(|| ServiceError::UnknownType(tag.to_string()))
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ValueKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}
