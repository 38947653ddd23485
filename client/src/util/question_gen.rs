//! Example questions for the chat prompt placeholder.
//!
//! Questions are composed from a small set of templates and topics. Walking
//! `n = 0, 1, 2, ...` visits every template/topic pair once per period and
//! never shows the same topic twice in a row.

#[cfg(test)]
#[path = "question_gen_test.rs"]
mod question_gen_test;

const TEMPLATES: [&str; 5] = [
    "How could {} help our operations team?",
    "What does a first project with {} cost?",
    "Is {} ready for production today?",
    "What are the real risks of {}?",
    "How long would a pilot for {} take?",
];

const TOPICS: [&str; 8] = [
    "a private language model",
    "on-chain identity",
    "an autonomous support agent",
    "zero-knowledge proofs",
    "tokenized real-world assets",
    "a smart contract audit",
    "retrieval-augmented search",
    "a shared data marketplace",
];

/// Step between consecutive topic indices; coprime with the topic count.
const TOPIC_STRIDE: usize = 3;

/// Deterministic question sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuestionGenerator {
    offset: usize,
}

impl QuestionGenerator {
    /// Generator whose sequence starts at `offset`.
    #[must_use]
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    /// Number of distinct questions before the sequence repeats.
    #[must_use]
    pub fn period() -> usize {
        TEMPLATES.len() * TOPICS.len()
    }

    /// The `n`th question of the sequence.
    #[must_use]
    pub fn question(&self, n: usize) -> String {
        let i = n.wrapping_add(self.offset) % Self::period();
        let template = TEMPLATES[i % TEMPLATES.len()];
        let topic = TOPICS[(i * TOPIC_STRIDE) % TOPICS.len()];
        template.replacen("{}", topic, 1)
    }
}

/// Visible prefix of `text` after typing for `elapsed_ms` at `chars_per_sec`.
#[must_use]
pub fn typed_prefix(text: &str, elapsed_ms: u64, chars_per_sec: u32) -> &str {
    let typed = elapsed_ms.saturating_mul(u64::from(chars_per_sec)) / 1_000;
    let typed = usize::try_from(typed).unwrap_or(usize::MAX);
    match text.char_indices().nth(typed) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Time to type `text` fully at `chars_per_sec`, plus `hold_ms` on screen.
#[must_use]
pub fn cycle_duration_ms(text: &str, chars_per_sec: u32, hold_ms: u64) -> u64 {
    if chars_per_sec == 0 {
        return hold_ms;
    }
    let chars = u64::try_from(text.chars().count()).unwrap_or(u64::MAX);
    chars.saturating_mul(1_000).div_ceil(u64::from(chars_per_sec)).saturating_add(hold_ms)
}
