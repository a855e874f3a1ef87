pub const TUTOR_SYSTEM_MESSAGE: &str = "You are a professional educational tutor who explains concepts clearly, deeply, and structurally.";

pub const DEFAULT_LEVEL: &str = "college";
pub const DEFAULT_SUMMARY_POINTS: u32 = 5;
pub const DEFAULT_QUIZ_COUNT: u32 = 5;

pub const EXPLAIN_PROMPT_BODY: &str = "Provide:
- A detailed definition (100+ words)
- Clear analogies and real-world examples
- Historical background
- Key concepts and relationships
- Practical applications
- Common misconceptions
- 5 practice questions with complete answers

Use structured headings and clean formatting.";

/// Literal line format the quiz parser expects back from the model.
pub const QUIZ_STRICT_FORMAT: &str = "Q[number]: Question text
A) Option A
B) Option B
C) Option C
D) Option D
Correct Answer: A/B/C/D
Detailed Explanation: 150+ word explanation";

pub const QUIZ_RULES: &str = "IMPORTANT:
- Provide ONLY 4 options.
- Do NOT include explanations for incorrect options separately.
- Do NOT add extra commentary.";
