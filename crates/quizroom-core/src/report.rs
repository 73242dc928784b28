//! Grade reports.
//!
//! Snapshots of student grades that serialize to JSON. Reports are plain
//! values; they do not track later changes to the quizzes they were built
//! from.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{EntityId, Identified};
use crate::person::Enrolled;
use crate::quiz::SharedQuiz;
use crate::student::Student;

/// Grade of one assigned quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizGrade {
    /// Id of the graded quiz.
    pub quiz_id: EntityId,
    /// Points earned.
    pub grade: u64,
    /// Points available.
    pub max_grade: u64,
    /// Questions with a recorded answer, right or wrong.
    pub answered: usize,
    /// Questions in the quiz.
    pub question_count: usize,
}

impl QuizGrade {
    /// Grade a quiz in its current state.
    pub fn from_quiz(quiz: &SharedQuiz) -> Self {
        quiz.with_quiz(|inner| Self {
            quiz_id: quiz.id().clone(),
            grade: inner.get_grade(),
            max_grade: inner.max_grade(),
            answered: inner.questions().iter().filter(|q| q.is_answered()).count(),
            question_count: inner.len(),
        })
    }
}

/// All quiz grades of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentReport {
    pub student_id: EntityId,
    pub name: String,
    /// One entry per assigned quiz, in assignment order.
    pub quizzes: Vec<QuizGrade>,
    /// Sum of quiz grades.
    pub total_grade: u64,
    /// Sum of quiz maximums.
    pub max_total_grade: u64,
}

impl StudentReport {
    /// Report a student's quizzes in their current state.
    pub fn from_student(student: &Student) -> Self {
        let quizzes: Vec<QuizGrade> = student
            .quizzes()
            .iter()
            .map(QuizGrade::from_quiz)
            .collect();
        Self {
            student_id: student.id().clone(),
            name: student.name().to_string(),
            total_grade: quizzes.iter().map(|q| q.grade).sum(),
            max_total_grade: quizzes.iter().map(|q| q.max_grade).sum(),
            quizzes,
        }
    }
}

/// Grade reports for a group of students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gradebook {
    /// Unique gradebook identifier.
    pub id: Uuid,
    /// When the snapshot was taken.
    pub created_at: DateTime<Utc>,
    /// One report per student, in input order.
    pub students: Vec<StudentReport>,
}

impl Gradebook {
    /// Snapshot the grades of `students`.
    pub fn from_students<'a>(students: impl IntoIterator<Item = &'a Student>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            students: students.into_iter().map(StudentReport::from_student).collect(),
        }
    }

    /// Report for the student with the given id.
    pub fn student(&self, student_id: &str) -> Option<&StudentReport> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize gradebook")
    }

    /// Parse a gradebook from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse gradebook JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::Question;
    use crate::teacher::{assign_quiz_to_student, create_quiz};

    fn graded_student() -> (Student, SharedQuiz) {
        let mut right = Question::new("a?", vec!["a".into(), "b".into()], "a").with_weight(3);
        right.solve("a");
        let mut wrong = Question::new("b?", vec!["a".into(), "b".into()], "b");
        wrong.solve("a");
        let unanswered = Question::new("c?", vec![], "c").with_weight(2);

        let quiz = SharedQuiz::new(create_quiz([right, wrong, unanswered]));
        let mut student = Student::new("ramadan");
        assign_quiz_to_student(&mut student, &quiz);
        (student, quiz)
    }

    #[test]
    fn quiz_grade_counts_answers() {
        let (_, quiz) = graded_student();
        let grade = QuizGrade::from_quiz(&quiz);
        assert_eq!(grade.grade, 3);
        assert_eq!(grade.max_grade, 6);
        assert_eq!(grade.answered, 2);
        assert_eq!(grade.question_count, 3);
    }

    #[test]
    fn student_report_matches_student_totals() {
        let (student, _) = graded_student();
        let report = StudentReport::from_student(&student);
        assert_eq!(report.name, "ramadan");
        assert_eq!(report.total_grade, student.get_total_grade());
        assert_eq!(report.max_total_grade, student.get_max_total_grade());
        assert_eq!(report.quizzes.len(), 1);
    }

    #[test]
    fn empty_student_report() {
        let report = StudentReport::from_student(&Student::new("nobody"));
        assert!(report.quizzes.is_empty());
        assert_eq!(report.total_grade, 0);
        assert_eq!(report.max_total_grade, 0);
    }

    #[test]
    fn gradebook_json_roundtrip() {
        let (student, _) = graded_student();
        let other = Student::new("other");
        let book = Gradebook::from_students([&student, &other]);

        let json = book.to_json().unwrap();
        assert!(json.contains("\"total_grade\": 3"));
        assert!(json.contains(student.id().as_str()));

        let back = Gradebook::from_json(&json).unwrap();
        assert_eq!(back.id, book.id);
        assert_eq!(back.students, book.students);
        assert_eq!(back.student(student.id().as_str()).unwrap().name, "ramadan");
        assert!(back.student("missing").is_none());
    }

    #[test]
    fn gradebook_from_bad_json() {
        assert!(Gradebook::from_json("{not json").is_err());
    }
}
