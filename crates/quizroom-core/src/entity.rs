//! Entity identity.
//!
//! Every entity gets a random v4 UUID at construction, stored in its
//! hyphenated textual form. The id never changes afterwards and is the only
//! key used for lookups.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the hyphenated UUID form.
pub const ID_LEN: usize = 36;

/// Unique identifier of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// The hyphenated textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Anything carrying an [`EntityId`].
pub trait Identified {
    /// Identifier assigned at construction.
    fn id(&self) -> &EntityId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn id_has_uuid_length() {
        let id = EntityId::new();
        assert_eq!(id.as_str().len(), ID_LEN);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn ids_do_not_collide_in_small_sample() {
        let ids: HashSet<EntityId> = (0..256).map(|_| EntityId::new()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn compares_against_str() {
        let id = EntityId::new();
        let text = id.to_string();
        assert_eq!(id, text.as_str());
        assert!(id != "not-an-id");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntityId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
