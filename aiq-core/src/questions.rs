//! The fixed interview question bank.

/// Unique identifier for a question.
pub type QuestionId = &'static str;

/// Number of questions in the bank.
pub const QUESTION_COUNT: usize = 6;

/// A single interview question, seeded at startup and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    /// Two-digit display number, e.g. "01".
    pub number: &'static str,
    /// The prompt read to the candidate.
    pub text: &'static str,
    /// What the screener should listen for. Empty when the question
    /// carries no annotation.
    pub subtext: &'static str,
}

/// The fixed question bank, in display order.
pub fn question_bank() -> &'static [Question; QUESTION_COUNT] {
    &BANK
}

static BANK: [Question; QUESTION_COUNT] = [
    Question {
        id: "q1",
        number: "01",
        text: "\"Tell me about a time when you adopted a new technology or tool on your own. What motivated you, and what was the result?\"",
        subtext: "(Looks for curiosity and initiative)",
    },
    Question {
        id: "q2",
        number: "02",
        text: "\"How do you stay up to date with new trends or tools in your field? Have you come across anything AI-related?\"",
        subtext: "(Assesses awareness and interest)",
    },
    Question {
        id: "q3",
        number: "03",
        text: "\"Have you experimented with any AI tools, even casually? (e.g., ChatGPT, image generators, automation bots)\"",
        subtext: "(Gauges willingness to experiment)",
    },
    Question {
        id: "q4",
        number: "04",
        text: "\"Can you think of a repetitive or time-consuming task in your role that could benefit from automation or AI?\"",
        subtext: "(Tests ability to identify practical AI opportunities)",
    },
    Question {
        id: "q5",
        number: "05",
        text: "\"Tell me about a time you had to change your way of working because of a new process or tool. How did you respond?\"",
        subtext: "(Evaluates adaptability)",
    },
    Question {
        id: "q6",
        number: "06",
        text: "\"Can you open an AI tool of your choice and show me how you would use it to solve something or get a result? Pls walk me through the process, step by step\"",
        subtext: "",
    },
];
