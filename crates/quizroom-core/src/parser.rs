//! TOML quiz bank loader.
//!
//! A quiz bank file describes one quiz. Questions are built in file order and
//! questions without a `weight` take the header's `default_weight`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::question::{default_weight, Question};
use crate::quiz::Quiz;
use crate::teacher::create_quiz;

/// Intermediate TOML structure for quiz bank files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    #[serde(default)]
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    #[serde(default)]
    name: String,
    #[serde(default = "default_weight")]
    default_weight: u32,
}

impl Default for TomlQuizHeader {
    fn default() -> Self {
        Self {
            name: String::new(),
            default_weight: default_weight(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    text: String,
    #[serde(default)]
    choices: Vec<String>,
    solution: String,
    #[serde(default)]
    weight: Option<u32>,
}

/// A quiz loaded from a quiz bank file.
#[derive(Debug, Clone)]
pub struct QuizBank {
    /// Informational name from the `[quiz]` header.
    pub name: String,
    /// Questions in file order.
    pub quiz: Quiz,
}

/// Parse a single quiz bank file.
pub fn parse_quiz(path: &Path) -> Result<QuizBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz bank: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse quiz bank TOML from a string. `source_path` is only used in errors.
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<QuizBank> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let default_weight = parsed.quiz.default_weight;
    let questions = parsed.questions.into_iter().map(|q| {
        let weight = q.weight.unwrap_or(default_weight);
        Question::new(q.text, q.choices, q.solution).with_weight(weight)
    });

    Ok(QuizBank {
        name: parsed.quiz.name,
        quiz: create_quiz(questions),
    })
}

/// Recursively load every `.toml` quiz bank under a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<QuizBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}
