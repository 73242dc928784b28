//! Solve lookup errors.
//!
//! The boolean solve methods fold both variants into `false`; these are
//! returned by [`crate::Student::try_solve_question`] for callers that need
//! to tell them apart.

use thiserror::Error;

use crate::entity::EntityId;

/// Why a solve request did not reach a question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The student has no quiz with this id.
    #[error("quiz not found: {quiz_id}")]
    QuizNotFound { quiz_id: String },

    /// The quiz exists but holds no question with this id.
    #[error("question {question_id} not found in quiz {quiz_id}")]
    QuestionNotFound {
        quiz_id: EntityId,
        question_id: String,
    },
}

impl SolveError {
    /// Returns `true` if the quiz itself was found.
    pub fn quiz_found(&self) -> bool {
        matches!(self, SolveError::QuestionNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = SolveError::QuizNotFound {
            quiz_id: "q-1".into(),
        };
        assert_eq!(err.to_string(), "quiz not found: q-1");
        assert!(!err.quiz_found());

        let quiz_id = EntityId::new();
        let err = SolveError::QuestionNotFound {
            quiz_id: quiz_id.clone(),
            question_id: "x".into(),
        };
        assert_eq!(err.to_string(), format!("question x not found in quiz {quiz_id}"));
        assert!(err.quiz_found());
    }
}
