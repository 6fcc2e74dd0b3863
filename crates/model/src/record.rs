use anyhow::Context;

/// One employee row of the flat data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub salary: i64,
}

impl Record {
    /// Canonical comma-joined line, used both for output files and as the
    /// dedup identity. Embedded commas in `name` are not escaped.
    pub fn canonical_line(&self) -> String {
        format!("{},{},{}", self.id, self.name, self.salary)
    }

    /// Parses a canonical `id,name,salary` line back into a record.
    ///
    /// Trailing fields beyond the third are ignored. Fewer than three fields
    /// or a non-numeric id/salary is an error.
    pub fn parse_line(line: &str) -> anyhow::Result<Self> {
        let mut fields = line.split(',');
        let (Some(id), Some(name), Some(salary)) = (fields.next(), fields.next(), fields.next())
        else {
            anyhow::bail!("expected 3 comma-separated fields in {line:?}");
        };
        Ok(Record {
            id: id.parse().with_context(|| format!("invalid id {id:?}"))?,
            name: name.to_string(),
            salary: salary
                .parse()
                .with_context(|| format!("invalid salary {salary:?}"))?,
        })
    }

    pub fn serialize_csv<W>(&self, writer: &mut csv::Writer<W>) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        writer.write_field(self.id.to_string())?;
        writer.write_field(self.name.as_str())?;
        writer.write_field(self.salary.to_string())?;
        writer.write_record(None::<&[u8]>)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Record;

    fn record(id: i64, name: &str, salary: i64) -> Record {
        Record {
            id,
            name: name.to_string(),
            salary,
        }
    }

    #[test]
    fn canonical_line_round_trips() {
        let original = record(42, "Ada", 45_000);
        let reparsed = Record::parse_line(&original.canonical_line()).unwrap();
        assert_eq!(reparsed, original);
        assert_eq!(reparsed.canonical_line(), "42,Ada,45000");
    }

    #[test]
    fn parse_line_ignores_trailing_fields() {
        let parsed = Record::parse_line("7,Bo,1200,ignored").unwrap();
        assert_eq!(parsed, record(7, "Bo", 1200));
    }

    #[test]
    fn parse_line_rejects_short_rows() {
        assert!(Record::parse_line("7,Bo").is_err());
        assert!(Record::parse_line("").is_err());
    }

    #[test]
    fn parse_line_rejects_non_numeric_fields() {
        assert!(Record::parse_line("x,Bo,1200").is_err());
        assert!(Record::parse_line("7,Bo,lots").is_err());
    }
}
