//! Placeholder paragraph generation.
//!
//! The synthesizer only needs something that turns a stream of draws into text.
//! [`LoremIpsum`] is the built-in implementation: random words from a fixed list,
//! grouped into capitalized sentences.

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::rng::UnitRng;

/// Inclusive `min..=max` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn validate(&self, what: &str) -> Result<(), GenError> {
        if self.min == 0 || self.min > self.max {
            return Err(GenError::InvalidBounds(format!(
                "{what}: need 0 < min <= max, got {}..={}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Size limits handed to a [`ParagraphSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphBounds {
    /// Words per sentence
    pub words_per_sentence: Bounds,

    /// Sentences per paragraph
    pub sentences_per_paragraph: Bounds,

    /// Paragraphs per call
    pub paragraphs: usize,

    /// Inserted between paragraphs
    pub separator: String,
}

impl Default for ParagraphBounds {
    fn default() -> Self {
        Self {
            words_per_sentence: Bounds::new(5, 20),
            sentences_per_paragraph: Bounds::new(3, 10),
            paragraphs: 1,
            separator: "\n\n".to_string(),
        }
    }
}

impl ParagraphBounds {
    pub fn validate(&self) -> Result<(), GenError> {
        self.words_per_sentence.validate("words_per_sentence")?;
        self.sentences_per_paragraph.validate("sentences_per_paragraph")?;
        if self.paragraphs == 0 {
            return Err(GenError::InvalidBounds("paragraphs must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Produces placeholder text. Output must depend only on the draws taken from `rng`.
pub trait ParagraphSource: Send + Sync {
    fn paragraph(&self, rng: &mut dyn UnitRng, bounds: &ParagraphBounds) -> String;
}

const LOREM_WORDS: &[&str] = &[
    "ad", "adipisicing", "aliqua", "aliquip", "amet", "anim", "aute", "cillum", "commodo",
    "consectetur", "consequat", "culpa", "cupidatat", "deserunt", "do", "dolor", "dolore",
    "duis", "ea", "eiusmod", "elit", "enim", "esse", "est", "et", "eu", "ex", "excepteur",
    "exercitation", "fugiat", "id", "in", "incididunt", "ipsum", "irure", "labore", "laboris",
    "laborum", "Lorem", "magna", "minim", "mollit", "nisi", "non", "nostrud", "nulla",
    "occaecat", "officia", "pariatur", "proident", "qui", "quis", "reprehenderit", "sint",
    "sit", "sunt", "tempor", "ullamco", "ut", "velit", "veniam", "voluptate",
];

/// Word-list lorem ipsum generator.
#[derive(Debug, Clone)]
pub struct LoremIpsum {
    words: Vec<String>,
}

impl Default for LoremIpsum {
    fn default() -> Self {
        Self {
            words: LOREM_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl LoremIpsum {
    /// Use a custom word list. Empty lists fall back to the built-in one.
    pub fn with_words(words: Vec<String>) -> Self {
        if words.is_empty() {
            return Self::default();
        }
        Self { words }
    }

    fn word(&self, rng: &mut dyn UnitRng) -> &str {
        let index = rng.next_in(0, self.words.len() - 1);
        &self.words[index]
    }

    fn sentence(&self, rng: &mut dyn UnitRng, bounds: &ParagraphBounds) -> String {
        let count = rng.next_in(bounds.words_per_sentence.min, bounds.words_per_sentence.max);
        let words: Vec<&str> = (0..count).map(|_| self.word(rng)).collect();
        let mut sentence = capitalize(&words.join(" "));
        sentence.push('.');
        sentence
    }

    fn single_paragraph(&self, rng: &mut dyn UnitRng, bounds: &ParagraphBounds) -> String {
        let count = rng.next_in(
            bounds.sentences_per_paragraph.min,
            bounds.sentences_per_paragraph.max,
        );
        let sentences: Vec<String> = (0..count).map(|_| self.sentence(rng, bounds)).collect();
        sentences.join(" ")
    }
}

impl ParagraphSource for LoremIpsum {
    fn paragraph(&self, rng: &mut dyn UnitRng, bounds: &ParagraphBounds) -> String {
        let paragraphs: Vec<String> = (0..bounds.paragraphs.max(1))
            .map(|_| self.single_paragraph(rng, bounds))
            .collect();
        paragraphs.join(&bounds.separator)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
