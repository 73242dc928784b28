//! Classrooms.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Identified};

/// A named room. The name is fixed at construction.
///
/// A clone is the same room and keeps its id; share rooms through `Rc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRoom {
    id: EntityId,
    name: String,
}

impl ClassRoom {
    /// Create a room with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
        }
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for ClassRoom {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
