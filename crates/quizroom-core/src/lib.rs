//! quizroom-core — Classroom quiz domain model and grading.
//!
//! Every entity carries a random identifier. Quizzes are shared between
//! students through [`quiz::SharedQuiz`] handles, so solving a quiz through
//! one student is visible to every student holding the same quiz.

pub mod classroom;
pub mod entity;
pub mod error;
pub mod parser;
pub mod person;
pub mod question;
pub mod quiz;
pub mod report;
pub mod student;
pub mod teacher;

pub use classroom::ClassRoom;
pub use entity::{EntityId, Identified};
pub use error::SolveError;
pub use person::{Enrolled, Person};
pub use question::Question;
pub use quiz::{Quiz, SharedQuiz};
pub use student::Student;
pub use teacher::Teacher;
