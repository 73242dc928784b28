//! People and their classroom assignments.
//!
//! Students and teachers are not subtypes of [`Person`]; they embed one and
//! expose it through [`Enrolled`], which provides the shared behaviour.

use std::rc::Rc;

use crate::classroom::ClassRoom;
use crate::entity::{EntityId, Identified};

/// A named person assigned to zero or more classrooms.
#[derive(Debug, PartialEq)]
pub struct Person {
    id: EntityId,
    name: String,
    assigned_classes: Vec<Rc<ClassRoom>>,
}

impl Person {
    /// Create a person with a fresh id and no classes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            assigned_classes: Vec::new(),
        }
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned classrooms, in assignment order.
    pub fn assigned_classes(&self) -> &[Rc<ClassRoom>] {
        &self.assigned_classes
    }

    /// Append a classroom. Order is kept and duplicates are allowed.
    pub fn assign_to_class(&mut self, room: Rc<ClassRoom>) {
        tracing::debug!(person = %self.id, room = %room.id(), "assigned to class");
        self.assigned_classes.push(room);
    }
}

impl Identified for Person {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Capability of anything backed by a [`Person`].
pub trait Enrolled {
    /// The embedded person.
    fn person(&self) -> &Person;

    /// Mutable access to the embedded person.
    fn person_mut(&mut self) -> &mut Person;

    fn name(&self) -> &str {
        self.person().name()
    }

    fn assigned_classes(&self) -> &[Rc<ClassRoom>] {
        self.person().assigned_classes()
    }

    fn assign_to_class(&mut self, room: Rc<ClassRoom>) {
        self.person_mut().assign_to_class(room);
    }
}

impl Enrolled for Person {
    fn person(&self) -> &Person {
        self
    }

    fn person_mut(&mut self) -> &mut Person {
        self
    }
}
