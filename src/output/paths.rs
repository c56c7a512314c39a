use std::path::PathBuf;

/// Where this run's CSV logs go. Built once at startup and passed down.
#[derive(Debug, Clone)]
pub(crate) struct OutputPaths {
    pub(crate) data_dir: PathBuf,
    pub(crate) run_stamp: String,
}

impl OutputPaths {
    pub(crate) fn new(data_dir: impl Into<PathBuf>, run_stamp: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            run_stamp: run_stamp.into(),
        }
    }

    /// `clones` logs to the clones file; every other op shares the views file.
    pub(crate) fn csv_path(&self, op: &str) -> PathBuf {
        let kind = if op == "clones" { "clones" } else { "views" };
        self.data_dir
            .join(format!("{}-traffic-stats-{kind}.csv", self.run_stamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn clones_and_views_get_separate_files() {
        let paths = OutputPaths::new("git-traffics/data", "2020-01-02-09h05m");
        assert_eq!(
            paths.csv_path("clones"),
            Path::new("git-traffics/data/2020-01-02-09h05m-traffic-stats-clones.csv")
        );
        assert_eq!(
            paths.csv_path("views"),
            Path::new("git-traffics/data/2020-01-02-09h05m-traffic-stats-views.csv")
        );
    }

    #[test]
    fn other_ops_share_the_views_file() {
        let paths = OutputPaths::new("/data", "stamp");
        assert_eq!(paths.csv_path("popular"), paths.csv_path("views"));
    }
}
