use crate::rewrite::FileOutcome;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub processed_files: u64,
    pub updated_files: u64,
    pub skipped_files: u64,
    pub failed_files: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &FileOutcome) {
        self.processed_files += 1;
        match outcome {
            FileOutcome::Updated => self.updated_files += 1,
            FileOutcome::Unchanged => self.skipped_files += 1,
            FileOutcome::Failed(_) => self.failed_files += 1,
        }
    }

    /// A directory that could not be listed counts as one failed entry.
    ///
    /// It is counted as processed too, otherwise `processed == updated + skipped + failed` would not hold.
    pub fn record_unreadable_directory(&mut self) {
        self.processed_files += 1;
        self.failed_files += 1;
    }

    pub fn is_balanced(&self) -> bool {
        self.processed_files == self.updated_files + self.skipped_files + self.failed_files
    }
}
