mod csv;
mod format;
mod json;
mod paths;
mod table;

pub(crate) use csv::{AppendSummary, append_csv};
pub(crate) use json::output_traffic_json;
pub(crate) use paths::OutputPaths;
pub(crate) use table::{format_boxed_table, format_table};
