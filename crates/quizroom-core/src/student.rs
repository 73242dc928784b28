//! Students and quiz solving.

use crate::entity::{EntityId, Identified};
use crate::error::SolveError;
use crate::person::{Enrolled, Person};
use crate::quiz::SharedQuiz;

/// A person holding assigned quizzes.
#[derive(Debug)]
pub struct Student {
    person: Person,
    quizzes: Vec<SharedQuiz>,
}

impl Student {
    /// Create a student with no classes or quizzes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            person: Person::new(name),
            quizzes: Vec::new(),
        }
    }

    /// Assigned quizzes, in assignment order.
    pub fn quizzes(&self) -> &[SharedQuiz] {
        &self.quizzes
    }

    pub(crate) fn push_quiz(&mut self, quiz: SharedQuiz) {
        self.quizzes.push(quiz);
    }

    /// Answer a question of an assigned quiz.
    ///
    /// Returns `false` both when no quiz matches `quiz_id` and when the
    /// matching quiz has no question `question_id`. Use
    /// [`Student::try_solve_question`] to tell the two apart.
    pub fn solve_question(&self, quiz_id: &str, question_id: &str, solution: &str) -> bool {
        self.try_solve_question(quiz_id, question_id, solution).is_ok()
    }

    /// Answer a question of an assigned quiz, reporting which lookup failed.
    ///
    /// Only the first quiz with a matching id is searched.
    pub fn try_solve_question(
        &self,
        quiz_id: &str,
        question_id: &str,
        solution: &str,
    ) -> Result<(), SolveError> {
        let Some(quiz) = self.quizzes.iter().find(|q| q.id() == quiz_id) else {
            tracing::debug!(student = %self.id(), quiz = quiz_id, "quiz not assigned");
            return Err(SolveError::QuizNotFound {
                quiz_id: quiz_id.to_string(),
            });
        };

        if quiz.solve_question(question_id, solution) {
            Ok(())
        } else {
            Err(SolveError::QuestionNotFound {
                quiz_id: quiz.id().clone(),
                question_id: question_id.to_string(),
            })
        }
    }

    /// Sum of the grades of every assigned quiz.
    pub fn get_total_grade(&self) -> u64 {
        self.quizzes.iter().map(SharedQuiz::get_grade).sum()
    }

    /// Total obtainable across every assigned quiz.
    pub fn get_max_total_grade(&self) -> u64 {
        self.quizzes.iter().map(SharedQuiz::max_grade).sum()
    }
}

impl Identified for Student {
    fn id(&self) -> &EntityId {
        self.person.id()
    }
}

impl Enrolled for Student {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
