use std::fmt::Display;

/// Changes applied to a target repository.
///
/// When a synchronization fails midway, this holds what was applied before
/// the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
    pub unchanged: usize,
    pub prune: bool,
}

impl Display for SyncReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} created, {} updated, {} deleted, {} unchanged",
            self.created, self.updated, self.deleted, self.unchanged
        )?;
        if !self.prune {
            f.write_str(" (prune disabled)")?;
        }

        Ok(())
    }
}
