/// Calendar date prefix length of an ISO-8601 timestamp: "2025-01-15"
pub(crate) const DATE_PREFIX_LEN: usize = 10;

/// Run stamp used in CSV file names: "2025-01-15-09h05m"
pub(crate) const RUN_STAMP_FORMAT: &str = "%Y-%m-%d-%Hh%Mm";

pub(crate) const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Relative directory the CSV logs land in when nothing else is configured
pub(crate) const DEFAULT_DATA_DIR: &str = "git-traffics/data";

pub(crate) const TRAFFIC_ACCEPT: &str = "application/vnd.github.spiderman-preview";

/// Positional value that turns CSV logging on
pub(crate) const SAVE_CSV: &str = "save_csv";

pub(crate) const TRAFFIC_RESOURCE: &str = "traffic";
