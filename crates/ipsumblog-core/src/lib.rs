//! ipsumblog core - deterministic placeholder blog entries
//!
//! This crate turns a salt and an index into a SHA-1 digest, reads integer
//! seeds out of windows of that digest, and drives a seeded Xorshift128
//! generator through a lorem ipsum source to build titled, dated entries.

pub mod batch;
pub mod config;
pub mod digest;
pub mod entry;
pub mod error;
pub mod lorem;
pub mod rng;
pub mod store;

pub use batch::{entry_digest, BatchDriver, BatchReport};
pub use config::BlogConfig;
pub use digest::{seed_from, sha1_hex, SeedExtractor};
pub use entry::{Block, Entry, Layout, Profile, Synthesizer};
pub use error::GenError;
pub use lorem::{Bounds, LoremIpsum, ParagraphBounds, ParagraphSource};
pub use rng::{reduce, UnitRng, Xorshift128Rng, XorshiftState};
pub use store::{EntryStore, FsStore, MemoryStore};
