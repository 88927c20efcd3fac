//! Batch driver - synthesizes a run of entries and hands them to a store.

use futures::stream::{self, StreamExt};

use crate::digest::sha1_hex;
use crate::entry::{Entry, Synthesizer};
use crate::error::GenError;
use crate::lorem::ParagraphSource;
use crate::store::EntryStore;

/// Outcome of a batch once every write has settled.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Entries handed to the store
    pub attempted: usize,
    /// Names written, in index order
    pub written: Vec<String>,
    /// Failed writes as `(index, name, error)`, in index order
    pub failures: Vec<(u64, String, GenError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Attempted: {}, Written: {}, Failed: {}",
            self.attempted,
            self.written.len(),
            self.failures.len()
        )
    }

    /// The first failure by index, if any.
    pub fn into_result(self) -> Result<Vec<String>, GenError> {
        match self.failures.into_iter().next() {
            Some((_, _, err)) => Err(err),
            None => Ok(self.written),
        }
    }
}

/// Digest for entry `index` of a batch salted with `salt`.
pub fn entry_digest(salt: &str, index: u64) -> String {
    sha1_hex(format!("{salt}{index}"))
}

/// Drives synthesis and persistence for a whole batch.
pub struct BatchDriver<'a, P: ParagraphSource> {
    synthesizer: &'a Synthesizer<P>,
    max_in_flight: usize,
}

impl<'a, P: ParagraphSource> BatchDriver<'a, P> {
    pub fn new(synthesizer: &'a Synthesizer<P>) -> Self {
        Self {
            synthesizer,
            max_in_flight: 64,
        }
    }

    /// Limit concurrent writes.
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    /// Synthesize entries `0..count` without persisting them.
    pub fn synthesize_all(&self, count: u64, salt: &str) -> Result<Vec<Entry>, GenError> {
        (0..count)
            .map(|index| -> Result<Entry, GenError> {
                let digest = entry_digest(salt, index);
                let entry = self.synthesizer.synthesize(&digest)?;
                tracing::info!(index, name = %entry.name, "Synthesized entry");
                Ok(entry)
            })
            .collect()
    }

    /// Synthesize `count` entries and write them all to `store`.
    ///
    /// Synthesis errors abort before anything is written. Store errors are collected;
    /// the report is returned once every write has settled.
    pub async fn generate<S: EntryStore + ?Sized>(
        &self,
        count: u64,
        salt: &str,
        store: &S,
    ) -> Result<BatchReport, GenError> {
        let entries = self.synthesize_all(count, salt)?;
        let attempted = entries.len();

        let writes = entries.into_iter().zip(0u64..).map(|(entry, index)| async move {
            let content = entry.render();
            let result = store.create(&entry.name, &content).await;
            (index, entry.name, result)
        });

        let mut settled: Vec<(u64, String, Result<(), GenError>)> = stream::iter(writes)
            .buffer_unordered(self.max_in_flight)
            .collect()
            .await;
        settled.sort_by_key(|(index, _, _)| *index);

        let mut report = BatchReport {
            attempted,
            ..BatchReport::default()
        };
        for (index, name, result) in settled {
            match result {
                Ok(()) => report.written.push(name),
                Err(err) => {
                    tracing::warn!(index, name = %name, error = %err, "Failed to store entry");
                    report.failures.push((index, name, err));
                }
            }
        }

        tracing::info!(summary = %report.summary(), "Batch settled");
        Ok(report)
    }
}
