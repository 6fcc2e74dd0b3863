pub mod generator;
pub mod record;

pub use record::Record;

use anyhow::Context;

/// Loads the whole dataset into memory.
///
/// The file is headerless CSV, one `id,name,salary` row per line. Any
/// malformed row aborts the load; there is no skip-and-continue.
pub fn load_records(path: &std::path::Path) -> anyhow::Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("cannot open data file {}", path.display()))?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let record = record_from_row(&row)
            .with_context(|| format!("malformed record on line {}", index + 1))?;
        records.push(record);
    }
    Ok(records)
}

fn record_from_row(row: &csv::StringRecord) -> anyhow::Result<Record> {
    let mut fields = row.iter();
    let (Some(id), Some(name), Some(salary)) = (fields.next(), fields.next(), fields.next())
    else {
        anyhow::bail!("expected 3 fields, found {}", row.len());
    };
    // Trailing fields are ignored.
    Ok(Record {
        id: id.parse().with_context(|| format!("invalid id {id:?}"))?,
        name: name.to_string(),
        salary: salary
            .parse()
            .with_context(|| format!("invalid salary {salary:?}"))?,
    })
}

/// Writes `count` generated records to `path` as CSV, replacing the file.
pub fn generate_data(path: &std::path::Path, count: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("cannot create data file {}", path.display()))?;
    let generator = match seed {
        Some(seed) => generator::RecordGenerator::from_seed(seed),
        None => generator::RecordGenerator::new(),
    };
    write_data_file(file, generator.take(count))
}

fn write_data_file(
    file: std::fs::File,
    records: impl Iterator<Item = Record>,
) -> anyhow::Result<()> {
    let mut csv_file = csv::Writer::from_writer(file);
    for record in records {
        record.serialize_csv(&mut csv_file)?;
    }
    csv_file.flush()?;
    Ok(())
}
