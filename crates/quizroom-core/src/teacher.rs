//! Teachers and the quiz-building helpers.
//!
//! Building and assigning quizzes needs no teacher state, so both are free
//! functions rather than methods on [`Teacher`].

use crate::entity::{EntityId, Identified};
use crate::person::{Enrolled, Person};
use crate::question::Question;
use crate::quiz::{Quiz, SharedQuiz};
use crate::student::Student;

/// A person who teaches. Carries no state beyond [`Person`].
#[derive(Debug)]
pub struct Teacher {
    person: Person,
}

impl Teacher {
    /// Create a teacher with no classes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            person: Person::new(name),
        }
    }
}

impl Identified for Teacher {
    fn id(&self) -> &EntityId {
        self.person.id()
    }
}

impl Enrolled for Teacher {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

/// Build a quiz holding `questions` in iteration order.
pub fn create_quiz(questions: impl IntoIterator<Item = Question>) -> Quiz {
    let mut quiz = Quiz::new();
    for question in questions {
        quiz.add_question(question);
    }
    quiz
}

/// Give `student` a handle to `quiz`.
///
/// The quiz is aliased, not copied. Assigning the same quiz twice, or to
/// several students, is allowed.
pub fn assign_quiz_to_student(student: &mut Student, quiz: &SharedQuiz) {
    tracing::debug!(student = %student.id(), quiz = %quiz.id(), "quiz assigned");
    student.push_quiz(quiz.clone());
}
