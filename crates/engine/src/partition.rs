use index_lab_model::Record;

/// Field a strategy sorts and buckets by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Id,
    Salary,
}

/// Whether the dataset is physically reordered before bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Clustered,
    NonClustered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub key: SortKey,
    pub mode: Mode,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self.mode {
            Mode::Clustered => "clustered",
            Mode::NonClustered => "non-clustered",
        };
        write!(f, "{mode} index by {}", self.key.field())
    }
}

/// Copy of `records` sorted by `key`. The sort is stable, so ties keep
/// their original relative order.
pub fn sorted_by(records: &[Record], key: SortKey) -> Vec<Record> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Id => sorted.sort_by_key(|r| r.id),
        SortKey::Salary => sorted.sort_by_key(|r| r.salary),
    }
    sorted
}

/// Bucket file names (within the strategy directory) one record routes to.
///
/// Clustered-by-name yields the 1/2/3-character prefix ladder; names shorter
/// than a prefix length degenerate into repeated paths, which the sink
/// collapses. Every other combination yields exactly one bucket.
pub fn bucket_files(record: &Record, key: SortKey, mode: Mode) -> Vec<String> {
    let field = key.field();
    match (mode, key) {
        (Mode::NonClustered, SortKey::Name) => vec![format!("{field}_{}.txt", record.name)],
        (Mode::NonClustered, SortKey::Id) => vec![format!("{field}_{}.txt", record.id)],
        (Mode::NonClustered, SortKey::Salary) => vec![format!("{field}_{}.txt", record.salary)],
        (Mode::Clustered, SortKey::Name) => (1..=3)
            .map(|len| format!("{field}_{}.txt", name_prefix(&record.name, len)))
            .collect(),
        (Mode::Clustered, SortKey::Id) => vec![format!("{field}_{}.txt", id_prefix(record.id))],
        (Mode::Clustered, SortKey::Salary) => {
            let (start, end) = salary_range(record.salary);
            vec![format!("{field}_{start}_{end}.txt")]
        }
    }
}

/// Leading `len` characters of `name`; the whole name when it is shorter.
fn name_prefix(name: &str, len: usize) -> &str {
    match name.char_indices().nth(len) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

/// First character of the decimal form of `id`. A lexical key, not a numeric
/// range: id 42 buckets under "4", a negative id under its sign.
fn id_prefix(id: i64) -> String {
    let mut digits = id.to_string();
    digits.truncate(1);
    digits
}

/// Thousand-wide salary band `[floor(salary/1000)*1000, start+999]`.
/// Floored euclidean so negative salaries land in well-formed bands.
fn salary_range(salary: i64) -> (i64, i64) {
    let start = salary.div_euclid(1000) * 1000;
    (start, start + 999)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, salary: i64) -> Record {
        Record {
            id,
            name: name.to_string(),
            salary,
        }
    }

    #[test]
    fn name_prefix_truncates_on_char_boundaries() {
        assert_eq!(name_prefix("Alice", 3), "Ali");
        assert_eq!(name_prefix("Al", 3), "Al");
        assert_eq!(name_prefix("", 1), "");
        assert_eq!(name_prefix("Åsa", 2), "Ås");
    }

    #[test]
    fn id_prefix_is_first_decimal_char() {
        assert_eq!(id_prefix(42), "4");
        assert_eq!(id_prefix(7), "7");
        assert_eq!(id_prefix(0), "0");
        assert_eq!(id_prefix(-3), "-");
    }

    #[test]
    fn salary_range_floors_toward_negative_infinity() {
        assert_eq!(salary_range(45_000), (45_000, 45_999));
        assert_eq!(salary_range(45_999), (45_000, 45_999));
        assert_eq!(salary_range(0), (0, 999));
        assert_eq!(salary_range(-500), (-1000, -1));
    }

    #[test]
    fn clustered_name_routes_to_prefix_ladder() {
        let files = bucket_files(&record(1, "Alice", 500), SortKey::Name, Mode::Clustered);
        assert_eq!(files, ["name_A.txt", "name_Al.txt", "name_Ali.txt"]);

        // Short names degenerate instead of failing.
        let files = bucket_files(&record(2, "Al", 500), SortKey::Name, Mode::Clustered);
        assert_eq!(files, ["name_A.txt", "name_Al.txt", "name_Al.txt"]);
    }

    #[test]
    fn non_clustered_routes_by_exact_value() {
        let r = record(42, "Bea", 45_250);
        assert_eq!(
            bucket_files(&r, SortKey::Name, Mode::NonClustered),
            ["name_Bea.txt"]
        );
        assert_eq!(
            bucket_files(&r, SortKey::Id, Mode::NonClustered),
            ["id_42.txt"]
        );
        assert_eq!(
            bucket_files(&r, SortKey::Salary, Mode::NonClustered),
            ["salary_45250.txt"]
        );
    }

    #[test]
    fn clustered_id_and_salary_route_to_single_buckets() {
        let r = record(42, "Bea", 45_250);
        assert_eq!(
            bucket_files(&r, SortKey::Id, Mode::Clustered),
            ["id_4.txt"]
        );
        assert_eq!(
            bucket_files(&r, SortKey::Salary, Mode::Clustered),
            ["salary_45000_45999.txt"]
        );
    }

    #[test]
    fn sorted_by_is_stable_on_ties() {
        let records = vec![
            record(2, "Ann", 500),
            record(1, "Ann", 500),
            record(3, "Al", 900),
        ];

        let by_name: Vec<i64> = sorted_by(&records, SortKey::Name).iter().map(|r| r.id).collect();
        assert_eq!(by_name, [3, 2, 1]);

        let by_salary: Vec<i64> = sorted_by(&records, SortKey::Salary)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(by_salary, [2, 1, 3]);

        // The input order is untouched.
        assert_eq!(records[0].id, 2);
    }
}
