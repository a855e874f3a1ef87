//! Turns the model's strict-format quiz text into [`QuizQuestion`] records.
//!
//! The text is split into blocks on `Q<n>:` markers. Each block is then fed line by
//! line through a small state machine:
//!
//! ```text
//! Question --first line--> Body --"Why others are wrong"--> Stopped
//!                           |  ^
//!                           +--+ option / correct answer / explanation / other
//! ```
//!
//! Parsing is total: any input yields a (possibly empty) list of questions.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{OptionLabel, QuizOption, QuizQuestion};

pub const DEFAULT_MAX_QUESTIONS: usize = 5;
pub const MAX_OPTIONS: usize = 4;

const CORRECT_ANSWER_PREFIX: &str = "Correct Answer:";
const EXPLANATION_PREFIX: &str = "Detailed Explanation:";
const STOP_MARKER: &str = "Why others are wrong";

static QUESTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Q\d+:").expect("QUESTION_MARKER is a valid regex pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Question,
    Body,
    Stopped,
}

#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Option(OptionLabel, &'a str),
    CorrectAnswer(&'a str),
    Explanation(&'a str),
    StopMarker,
    Other,
}

fn classify(line: &str) -> LineKind<'_> {
    let mut chars = line.chars();
    if let (Some(letter), Some(')')) = (chars.next(), chars.next()) {
        if let Some(label) = OptionLabel::from_char(letter) {
            return LineKind::Option(label, line[2..].trim());
        }
    }

    if let Some(rest) = line.strip_prefix(CORRECT_ANSWER_PREFIX) {
        LineKind::CorrectAnswer(rest)
    } else if let Some(rest) = line.strip_prefix(EXPLANATION_PREFIX) {
        LineKind::Explanation(rest.trim())
    } else if line.starts_with(STOP_MARKER) {
        LineKind::StopMarker
    } else {
        LineKind::Other
    }
}

#[derive(Default)]
struct BlockScanner {
    question: QuizQuestion,
}

impl BlockScanner {
    fn feed(&mut self, state: ScanState, line: &str) -> ScanState {
        match state {
            ScanState::Question => {
                self.question.question_text = line.to_string();
                ScanState::Body
            }
            ScanState::Body => self.accept(line),
            ScanState::Stopped => ScanState::Stopped,
        }
    }

    fn accept(&mut self, line: &str) -> ScanState {
        match classify(line) {
            LineKind::Option(label, text) => {
                if self.question.options.len() < MAX_OPTIONS {
                    self.question.options.push(QuizOption {
                        label,
                        text: text.to_string(),
                        line: line.to_string(),
                    });
                }
            }
            LineKind::CorrectAnswer(rest) => {
                self.question.correct_answer = line.to_string();
                self.question.correct_label = rest.chars().find_map(OptionLabel::from_char);
            }
            LineKind::Explanation(text) => {
                self.question.explanation = text.to_string();
            }
            LineKind::StopMarker => return ScanState::Stopped,
            LineKind::Other => {}
        }
        ScanState::Body
    }
}

fn parse_block(block: &str) -> QuizQuestion {
    let mut scanner = BlockScanner::default();
    let mut state = ScanState::Question;

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        state = scanner.feed(state, line);
        if state == ScanState::Stopped {
            break;
        }
    }

    scanner.question
}

/// Parses up to `max_questions` questions, in the order they appear in `raw`.
///
/// Text before the first `Q<n>:` marker is ignored.
pub fn parse(raw: &str, max_questions: usize) -> Vec<QuizQuestion> {
    QUESTION_MARKER
        .split(raw)
        .skip(1)
        .filter(|block| !block.trim().is_empty())
        .take(max_questions)
        .map(parse_block)
        .collect()
}

pub fn parse_default(raw: &str) -> Vec<QuizQuestion> {
    parse(raw, DEFAULT_MAX_QUESTIONS)
}

/// Consistency warnings for a parsed question. None of them reject the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizLint {
    MissingCorrectAnswer,
    CorrectLabelNotInOptions(OptionLabel),
    DuplicateOptionLabel(OptionLabel),
    ShortOptions(usize),
}

impl fmt::Display for QuizLint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizLint::MissingCorrectAnswer => write!(f, "no correct answer given"),
            QuizLint::CorrectLabelNotInOptions(label) => {
                write!(f, "correct answer {} is not among the options", label)
            }
            QuizLint::DuplicateOptionLabel(label) => {
                write!(f, "option {} appears more than once", label)
            }
            QuizLint::ShortOptions(n) => write!(f, "only {} of {} options present", n, MAX_OPTIONS),
        }
    }
}

pub fn lint(question: &QuizQuestion) -> Vec<QuizLint> {
    let mut warnings = Vec::new();

    let mut seen = Vec::with_capacity(MAX_OPTIONS);
    for label in question.option_labels() {
        if seen.contains(&label) {
            let warning = QuizLint::DuplicateOptionLabel(label);
            if !warnings.contains(&warning) {
                warnings.push(warning);
            }
        } else {
            seen.push(label);
        }
    }

    if question.options.len() < MAX_OPTIONS {
        warnings.push(QuizLint::ShortOptions(question.options.len()));
    }

    match question.correct_label {
        None => warnings.push(QuizLint::MissingCorrectAnswer),
        Some(label) if !seen.contains(&label) => {
            warnings.push(QuizLint::CorrectLabelNotInOptions(label))
        }
        Some(_) => {}
    }

    warnings
}
