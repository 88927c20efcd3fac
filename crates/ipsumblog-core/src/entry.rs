//! Entry synthesis - turns one digest into a titled, dated document.

use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::digest::{validate_digest, SeedExtractor, MAX_WINDOW};
use crate::error::GenError;
use crate::lorem::{LoremIpsum, ParagraphBounds, ParagraphSource};
use crate::rng::Xorshift128Rng;

const TITLE_WINDOW: (usize, usize) = (0, MAX_WINDOW);
const BLOCK_COUNT_WINDOW: (usize, usize) = (7, 2);
const DATE_WINDOW: (usize, usize) = (9, MAX_WINDOW);
const BLOCK_BASE_OFFSET: usize = 9;

const TITLE_WORDS: usize = 5;
const HEADING_MODULUS: u32 = 7;

/// How the title and date are placed around the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// `---` bounded `title:`/`date:` header
    #[default]
    FrontMatter,
    /// `# title` first line
    Heading,
}

/// Synthesis options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Add a date derived from the digest
    pub include_date: bool,

    /// Extend the digest when a seed window runs past its end
    pub extend_digest_on_overflow: bool,

    pub layout: Layout,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            include_date: true,
            extend_digest_on_overflow: true,
            layout: Layout::FrontMatter,
        }
    }
}

/// One body block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
}

impl Block {
    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading(_))
    }

    fn render(&self) -> String {
        match self {
            Self::Heading(text) => format!("## {text}"),
            Self::Paragraph(text) => text.clone(),
        }
    }
}

/// A synthesized blog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Digest that seeded the entry, also its output name
    pub name: String,
    pub title: String,
    pub date: Option<DateTime<Utc>>,
    pub blocks: Vec<Block>,
    pub layout: Layout,
}

impl Entry {
    /// Date as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub fn date_string(&self) -> Option<String> {
        self.date.map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Blocks separated by blank lines.
    pub fn body(&self) -> String {
        self.blocks
            .iter()
            .map(Block::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Full file contents.
    pub fn render(&self) -> String {
        let body = self.body();
        let date = self.date_string();
        match self.layout {
            Layout::FrontMatter => {
                let mut out = format!("---\ntitle: {}\n", self.title);
                if let Some(date) = date {
                    out.push_str(&format!("date: {date}\n"));
                }
                out.push_str("---\n");
                out.push_str(&body);
                out.push('\n');
                out
            }
            Layout::Heading => {
                let mut out = format!("# {}\n\n", self.title);
                if let Some(date) = date {
                    out.push_str(&format!("_{date}_\n\n"));
                }
                out.push_str(&body);
                out.push('\n');
                out
            }
        }
    }
}

/// Base date that digest-derived offsets are added to.
pub fn date_anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// First five whitespace-delimited words.
pub fn title_words(text: &str) -> String {
    text.split_whitespace()
        .take(TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds entries from digests.
pub struct Synthesizer<P: ParagraphSource = LoremIpsum> {
    profile: Profile,
    bounds: ParagraphBounds,
    source: P,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(Profile::default(), ParagraphBounds::default())
    }
}

impl Synthesizer {
    pub fn new(profile: Profile, bounds: ParagraphBounds) -> Self {
        Self::with_source(profile, bounds, LoremIpsum::default())
    }
}

impl<P: ParagraphSource> Synthesizer<P> {
    pub fn with_source(profile: Profile, bounds: ParagraphBounds, source: P) -> Self {
        Self {
            profile,
            bounds,
            source,
        }
    }

    fn text(&self, seed: u32) -> String {
        let mut rng = Xorshift128Rng::from_seed(i64::from(seed));
        self.source.paragraph(&mut rng, &self.bounds)
    }

    /// Synthesize the entry for a 40-character hex digest.
    pub fn synthesize(&self, digest: &str) -> Result<Entry, GenError> {
        validate_digest(digest)?;
        self.bounds.validate()?;

        let mut seeds = SeedExtractor::new(digest);
        if !self.profile.extend_digest_on_overflow {
            seeds = seeds.without_extension();
        }

        let title = title_words(&self.text(seeds.seed(TITLE_WINDOW.0, TITLE_WINDOW.1)?));

        let date = if self.profile.include_date {
            let offset = seeds.seed(DATE_WINDOW.0, DATE_WINDOW.1)?;
            Some(date_anchor() + Duration::milliseconds(i64::from(offset) * 1000))
        } else {
            None
        };

        let count = seeds.seed(BLOCK_COUNT_WINDOW.0, BLOCK_COUNT_WINDOW.1)? as usize + 1;
        let mut blocks = Vec::with_capacity(count);
        for i in 0..count {
            let seed = seeds.seed(BLOCK_BASE_OFFSET + i, MAX_WINDOW)?;
            let text = self.text(seed);
            if seed % HEADING_MODULUS == 0 {
                blocks.push(Block::Heading(title_words(&text)));
            } else {
                blocks.push(Block::Paragraph(text));
            }
        }

        tracing::debug!(
            name = %digest,
            title = %title,
            blocks = blocks.len(),
            headings = blocks.iter().filter(|b| b.is_heading()).count(),
            "Entry content"
        );

        Ok(Entry {
            name: digest.to_string(),
            title,
            date,
            blocks,
            layout: self.profile.layout,
        })
    }
}
