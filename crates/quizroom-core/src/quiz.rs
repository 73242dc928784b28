//! Quizzes and the shared quiz handle.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Identified};
use crate::question::Question;

/// An ordered collection of questions.
///
/// A clone is a snapshot of the same quiz and keeps its id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    id: EntityId,
    #[serde(default)]
    questions: Vec<Question>,
}

impl Quiz {
    /// Create an empty quiz with a fresh id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a question. Duplicates are not checked.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Questions in insertion order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the quiz holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// First question with the given id.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == question_id)
    }

    /// Sum of the grades of all questions.
    pub fn get_grade(&self) -> u64 {
        self.questions
            .iter()
            .map(|q| u64::from(q.get_grade()))
            .sum()
    }

    /// Grade obtained if every question were answered correctly.
    pub fn max_grade(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.weight())).sum()
    }

    /// Answer the question with the given id.
    ///
    /// Returns `false`, leaving every question untouched, when no question
    /// matches.
    pub fn solve_question(&mut self, question_id: &str, solution: &str) -> bool {
        match self.questions.iter_mut().find(|q| q.id() == question_id) {
            Some(question) => {
                question.solve(solution);
                tracing::debug!(quiz = %self.id, question = question_id, "question solved");
                true
            }
            None => false,
        }
    }
}

impl Identified for Quiz {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Reference-counted handle to a quiz.
///
/// Cloning the handle aliases the same quiz: a quiz assigned to several
/// students is graded from one shared state. Reads hand out owned copies, so
/// no borrow of the quiz outlives a method call.
#[derive(Debug, Clone)]
pub struct SharedQuiz {
    id: EntityId,
    inner: Rc<RefCell<Quiz>>,
}

impl SharedQuiz {
    /// Wrap a quiz in a new handle.
    pub fn new(quiz: Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            inner: Rc::new(RefCell::new(quiz)),
        }
    }

    /// Run `f` against the quiz. `f` must not solve through this handle.
    pub(crate) fn with_quiz<R>(&self, f: impl FnOnce(&Quiz) -> R) -> R {
        f(&*self.inner.borrow())
    }

    /// Copy of the quiz in its current state.
    pub fn snapshot(&self) -> Quiz {
        self.with_quiz(Quiz::clone)
    }

    /// Copy of the questions in their current state.
    pub fn questions(&self) -> Vec<Question> {
        self.with_quiz(|quiz| quiz.questions().to_vec())
    }

    /// Copy of the first question with the given id.
    pub fn question(&self, question_id: &str) -> Option<Question> {
        self.with_quiz(|quiz| quiz.question(question_id).cloned())
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.with_quiz(Quiz::len)
    }

    /// Whether the quiz holds no questions.
    pub fn is_empty(&self) -> bool {
        self.with_quiz(Quiz::is_empty)
    }

    /// See [`Quiz::get_grade`].
    pub fn get_grade(&self) -> u64 {
        self.with_quiz(Quiz::get_grade)
    }

    /// See [`Quiz::max_grade`].
    pub fn max_grade(&self) -> u64 {
        self.with_quiz(Quiz::max_grade)
    }

    /// See [`Quiz::solve_question`].
    pub fn solve_question(&self, question_id: &str, solution: &str) -> bool {
        self.inner.borrow_mut().solve_question(question_id, solution)
    }

    /// Whether both handles point at the same quiz.
    pub fn ptr_eq(&self, other: &SharedQuiz) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of handles currently aliasing this quiz.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl From<Quiz> for SharedQuiz {
    fn from(quiz: Quiz) -> Self {
        Self::new(quiz)
    }
}

impl Identified for SharedQuiz {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
