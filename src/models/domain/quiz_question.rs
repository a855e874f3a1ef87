use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter identifying a multiple-choice option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(OptionLabel::A),
            'B' => Some(OptionLabel::B),
            'C' => Some(OptionLabel::C),
            'D' => Some(OptionLabel::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            OptionLabel::A => 'A',
            OptionLabel::B => 'B',
            OptionLabel::C => 'C',
            OptionLabel::D => 'D',
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOption {
    pub label: OptionLabel,
    pub text: String,
    /// The option line exactly as it appeared, label included.
    pub line: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    /// First line of the block with surrounding whitespace removed, so the space
    /// after `Q1:` is not kept.
    pub question_text: String,
    pub options: Vec<QuizOption>, // at most four
    /// The whole `Correct Answer:` line (trimmed), or empty when none was given.
    pub correct_answer: String,
    pub correct_label: Option<OptionLabel>,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn option_labels(&self) -> impl Iterator<Item = OptionLabel> + '_ {
        self.options.iter().map(|o| o.label)
    }
}
