use anyhow::{Context, Result};

use index_lab_model::Record;

use crate::layout::OutputLayout;
use crate::partition::{Mode, Strategy, bucket_files, sorted_by};
use crate::sink::DedupSink;

/// Runs one indexing strategy over the dataset: routes every record into its
/// bucket files, then rewrites the per-key result file with the sorted view.
///
/// Clustered strategies bucket a sorted copy; non-clustered strategies bucket
/// the dataset in its original order. The result file is sorted in both
/// modes. `records` itself is never mutated, so strategies compose freely
/// within one run.
pub fn run_strategy(
    strategy: Strategy,
    records: &[Record],
    layout: &OutputLayout,
    sink: &mut DedupSink,
) -> Result<()> {
    tracing::info!("Running {strategy} over {} records", records.len());

    let dir = layout.strategy_dir(strategy.key, strategy.mode);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create bucket directory {}", dir.display()))?;

    let sorted = sorted_by(records, strategy.key);
    let bucket_view: &[Record] = match strategy.mode {
        Mode::Clustered => &sorted,
        Mode::NonClustered => records,
    };

    for record in bucket_view {
        let line = record.canonical_line();
        for file in bucket_files(record, strategy.key, strategy.mode) {
            sink.write_unique(&dir.join(file), &line)?;
        }
    }

    sink.write_final(&layout.final_path(strategy.key), &sorted)?;

    tracing::debug!("{strategy} finished");
    Ok(())
}
