use uuid::Uuid;

use super::errors::ProductError;

/// Store-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Format check only; says nothing about whether the product exists.
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| ProductError::InvalidId)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}
