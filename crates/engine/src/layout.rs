use std::path::{Path, PathBuf};

use const_format::concatcp;

use crate::partition::{Mode, SortKey};

const NAME: &str = "name";
const ID: &str = "id";
const SALARY: &str = "salary";

pub const ACCESS_LOG_FILE: &str = "access_log.txt";

impl SortKey {
    /// Field name as it appears in directory, bucket and result file names.
    pub const fn field(self) -> &'static str {
        match self {
            SortKey::Name => NAME,
            SortKey::Id => ID,
            SortKey::Salary => SALARY,
        }
    }
}

/// Root of the on-disk output tree. Every bucket, result and log path
/// derives from it, so tests can point the whole engine at a temp dir.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        OutputLayout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn access_log_path(&self) -> PathBuf {
        self.root.join(ACCESS_LOG_FILE)
    }

    /// Directory holding one strategy's bucket files.
    pub fn strategy_dir(&self, key: SortKey, mode: Mode) -> PathBuf {
        self.root.join(dir_name(key, mode))
    }

    /// Fixed per-key result file, shared by the clustered and non-clustered
    /// runs for that key.
    pub fn final_path(&self, key: SortKey) -> PathBuf {
        self.root.join(final_file(key))
    }
}

fn dir_name(key: SortKey, mode: Mode) -> &'static str {
    match (mode, key) {
        (Mode::Clustered, SortKey::Name) => concatcp!("clustered_", NAME, "_sort"),
        (Mode::Clustered, SortKey::Id) => concatcp!("clustered_", ID, "_sort"),
        (Mode::Clustered, SortKey::Salary) => concatcp!("clustered_", SALARY, "_sort"),
        (Mode::NonClustered, SortKey::Name) => concatcp!("non_clustered_", NAME, "_sort"),
        (Mode::NonClustered, SortKey::Id) => concatcp!("non_clustered_", ID, "_sort"),
        (Mode::NonClustered, SortKey::Salary) => concatcp!("non_clustered_", SALARY, "_sort"),
    }
}

fn final_file(key: SortKey) -> &'static str {
    match key {
        SortKey::Name => concatcp!("final_sorted_result_", NAME, ".txt"),
        SortKey::Id => concatcp!("final_sorted_result_", ID, ".txt"),
        SortKey::Salary => concatcp!("final_sorted_result_", SALARY, ".txt"),
    }
}

#[cfg(test)]
mod tests {
    use super::OutputLayout;
    use crate::partition::{Mode, SortKey};

    #[test]
    fn paths_follow_the_fixed_output_tree() {
        let layout = OutputLayout::new("output");

        assert_eq!(
            layout.strategy_dir(SortKey::Name, Mode::Clustered),
            std::path::Path::new("output/clustered_name_sort"),
        );
        assert_eq!(
            layout.strategy_dir(SortKey::Salary, Mode::NonClustered),
            std::path::Path::new("output/non_clustered_salary_sort"),
        );
        assert_eq!(
            layout.final_path(SortKey::Id),
            std::path::Path::new("output/final_sorted_result_id.txt"),
        );
        assert_eq!(
            layout.access_log_path(),
            std::path::Path::new("output/access_log.txt"),
        );
    }
}
