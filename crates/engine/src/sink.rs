use std::collections::{HashMap, HashSet};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use index_lab_model::Record;

use crate::layout::OutputLayout;

/// Append-only file sink that suppresses duplicate lines per target path and
/// records every write event in the access log.
///
/// Seen-sets cover the current process only: bucket files left over from an
/// earlier process run are appended to, not re-read, so stale output
/// directories duplicate data unless cleared first.
pub struct DedupSink {
    seen: HashMap<PathBuf, HashSet<String>>,
    log_path: PathBuf,
}

impl DedupSink {
    /// Creates the output root and truncates the access log.
    pub fn create(layout: &OutputLayout) -> Result<Self> {
        std::fs::create_dir_all(layout.root()).with_context(|| {
            format!("cannot create output directory {}", layout.root().display())
        })?;

        let log_path = layout.access_log_path();
        File::create(&log_path)
            .with_context(|| format!("cannot truncate access log {}", log_path.display()))?;

        Ok(DedupSink {
            seen: HashMap::new(),
            log_path,
        })
    }

    /// Appends `line` to `path` unless that exact line was already written
    /// there during this process. The access is logged either way.
    ///
    /// The file handle is scoped to the single write; nothing stays open
    /// between calls.
    pub fn write_unique(&mut self, path: &Path, line: &str) -> Result<()> {
        let seen = self.seen.entry(path.to_path_buf()).or_default();
        if seen.insert(line.to_string()) {
            let mut file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .with_context(|| format!("cannot open bucket file {}", path.display()))?;
            writeln!(file, "{line}")?;
        }
        self.log_access(path)
    }

    /// Truncates `path` and writes every record's canonical line, dropping
    /// duplicates within this single call. The per-bucket seen-sets are not
    /// consulted, so a later call fully replaces the file.
    pub fn write_final(&self, path: &Path, records: &[Record]) -> Result<()> {
        let mut file = File::create(path)
            .with_context(|| format!("cannot create result file {}", path.display()))?;

        let mut written = HashSet::new();
        for record in records {
            let line = record.canonical_line();
            if written.insert(line.clone()) {
                writeln!(file, "{line}")?;
            }
        }
        self.log_access(path)
    }

    fn log_access(&self, path: &Path) -> Result<()> {
        let mut log = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.log_path)
            .with_context(|| format!("cannot open access log {}", self.log_path.display()))?;
        writeln!(log, "Accessed: {}", path.display())?;
        Ok(())
    }
}
