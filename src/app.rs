use std::io::Write;

use crate::consts::TRAFFIC_RESOURCE;
use crate::error::AppError;
use crate::github::{ApiReply, TrafficSource};
use crate::output::{
    AppendSummary, OutputPaths, append_csv, format_boxed_table, format_table, output_traffic_json,
};
use crate::utils::debug_log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Render {
    Plain,
    Boxed { use_color: bool },
    Json,
}

/// One traffic query as requested on the command line
#[derive(Debug, Clone)]
pub(crate) struct TrafficRequest {
    pub(crate) repo: String,
    pub(crate) op: String,
    pub(crate) save_csv: bool,
    pub(crate) render: Render,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RunOutcome {
    /// The API answered with an error message; nothing was rendered or logged
    ApiMessage(String),
    Reported { csv: Option<AppendSummary> },
}

fn write_out<W: Write>(out: &mut W, text: &str) -> Result<(), AppError> {
    writeln!(out, "{text}").map_err(|e| AppError::io("<stdout>", e))
}

/// Fetch, print and optionally log one repository's traffic
pub(crate) fn run<W: Write>(
    source: &dyn TrafficSource,
    request: &TrafficRequest,
    paths: &OutputPaths,
    out: &mut W,
) -> Result<RunOutcome, AppError> {
    let body = source.fetch(TRAFFIC_RESOURCE, &request.repo, &request.op)?;

    let traffic = match ApiReply::from_json(&body, &request.op)? {
        ApiReply::Message(message) => {
            write_out(out, &message)?;
            return Ok(RunOutcome::ApiMessage(message));
        }
        ApiReply::Traffic(traffic) => traffic,
    };

    let rendered = match request.render {
        Render::Plain => format_table(&request.repo, &traffic, &request.op),
        Render::Boxed { use_color } => {
            format_boxed_table(&request.repo, &traffic, &request.op, use_color)
        }
        Render::Json => output_traffic_json(&request.repo, &traffic, &request.op)?,
    };
    write_out(out, &rendered)?;

    if !request.save_csv {
        return Ok(RunOutcome::Reported { csv: None });
    }

    let path = paths.csv_path(&request.op);
    let summary = append_csv(&request.repo, &traffic, &path, &request.op)?;
    debug_log(format_args!(
        "appended {} rows to {}{}",
        summary.rows,
        path.display(),
        if summary.header_written {
            " (new file)"
        } else {
            ""
        }
    ));

    Ok(RunOutcome::Reported { csv: Some(summary) })
}
