use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Length of a document-store object id in its hex form (12 bytes).
pub const PRODUCT_ID_LEN: usize = 24;

/// Identifier of a stored product.
///
/// Wraps the 24-character hex form of a document-store object id. The value
/// is always normalized to lowercase, so two ids compare equal exactly when
/// they refer to the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Parse a raw path or payload value into a product id.
    ///
    /// Rejects anything that is not exactly 24 hex digits.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.len() != PRODUCT_ID_LEN || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidId(raw.to_string()));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProductId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_24_hex_digits() {
        let id = ProductId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn normalizes_uppercase() {
        let id = ProductId::parse("65A1F0C2E4B0A1B2C3D4E5F6").unwrap();
        assert_eq!(id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_matches!(ProductId::parse("abc123"), Err(CoreError::InvalidId(_)));
        assert_matches!(
            ProductId::parse("65a1f0c2e4b0a1b2c3d4e5f6a"),
            Err(CoreError::InvalidId(_))
        );
        assert_matches!(ProductId::parse(""), Err(CoreError::InvalidId(_)));
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert_matches!(
            ProductId::parse("65a1f0c2e4b0a1b2c3d4e5fz"),
            Err(CoreError::InvalidId(_))
        );
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<ProductId, _> = serde_json::from_str("\"65a1f0c2e4b0a1b2c3d4e5f6\"");
        assert!(ok.is_ok());

        let bad: Result<ProductId, _> = serde_json::from_str("\"not-an-id\"");
        assert!(bad.is_err());
    }
}
