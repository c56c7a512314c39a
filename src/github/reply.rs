use serde_json::Value;

use crate::core::{TrafficRecord, TrafficResponse, truncate_to_date};
use crate::error::AppError;

/// What a traffic endpoint answered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ApiReply {
    Traffic(TrafficResponse),
    /// Error body such as "Bad credentials" or "Not Found"
    Message(String),
}

impl ApiReply {
    pub(crate) fn from_json(body: &Value, op: &str) -> Result<Self, AppError> {
        // A null or empty message does not count as an error reply.
        if let Some(message) = body
            .get("message")
            .filter(|m| !m.is_null() && m.as_str() != Some(""))
        {
            let text = match message.as_str() {
                Some(s) => s.to_string(),
                None => message.to_string(),
            };
            return Ok(ApiReply::Message(text));
        }

        let total_count = read_count(body, "count", "count")?;
        let total_uniques = read_count(body, "uniques", "uniques")?;

        let entries = body
            .get(op)
            .and_then(Value::as_array)
            .ok_or_else(|| AppError::malformed(op))?;

        let mut records = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let timestamp = entry
                .get("timestamp")
                .and_then(Value::as_str)
                .ok_or_else(|| AppError::malformed(format!("{op}[{i}].timestamp")))?;
            records.push(TrafficRecord {
                date: truncate_to_date(timestamp).to_string(),
                count: read_count(entry, "count", &format!("{op}[{i}].count"))?,
                uniques: read_count(entry, "uniques", &format!("{op}[{i}].uniques"))?,
            });
        }

        Ok(ApiReply::Traffic(TrafficResponse {
            total_count,
            total_uniques,
            records,
        }))
    }
}

fn read_count(obj: &Value, key: &str, field: &str) -> Result<u64, AppError> {
    obj.get(key)
        .and_then(Value::as_u64)
        .ok_or_else(|| AppError::malformed(field))
}
