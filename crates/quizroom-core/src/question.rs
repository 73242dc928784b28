//! A single gradable question.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Identified};

/// A question with a fixed solution and the student's submitted answer.
///
/// A clone is a snapshot of the same question and keeps its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    id: EntityId,
    question_text: String,
    choices: Vec<String>,
    solution: String,
    #[serde(default)]
    student_solution: String,
    #[serde(default = "default_weight")]
    weight: u32,
}

pub(crate) fn default_weight() -> u32 {
    1
}

impl Question {
    /// Create a question worth one point.
    pub fn new(
        question_text: impl Into<String>,
        choices: Vec<String>,
        solution: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(),
            question_text: question_text.into(),
            choices,
            solution: solution.into(),
            student_solution: String::new(),
            weight: default_weight(),
        }
    }

    /// Set the number of points awarded for a correct answer.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Prompt shown to the student.
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    /// Offered answers, in order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The expected answer.
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// The recorded answer, empty until solved.
    pub fn student_solution(&self) -> &str {
        &self.student_solution
    }

    /// Points awarded for a correct answer.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Record an answer, replacing any earlier one.
    ///
    /// The answer is not checked against `choices`.
    pub fn solve(&mut self, candidate: impl Into<String>) {
        self.student_solution = candidate.into();
    }

    /// Exact, case-sensitive comparison with the solution.
    pub fn is_correct(&self) -> bool {
        self.student_solution == self.solution
    }

    /// Whether any answer has been recorded.
    pub fn is_answered(&self) -> bool {
        !self.student_solution.is_empty()
    }

    /// `weight` when correct, otherwise 0.
    pub fn get_grade(&self) -> u32 {
        if self.is_correct() {
            self.weight
        } else {
            0
        }
    }
}

impl Identified for Question {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
