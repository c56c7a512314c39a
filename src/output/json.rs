use serde::Serialize;

use crate::core::{TrafficResponse, aggregate_daily};
use crate::error::AppError;

#[derive(Serialize)]
struct JsonDay<'a> {
    date: &'a str,
    count: u64,
    uniques: u64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    repository: &'a str,
    operation: &'a str,
    count: u64,
    uniques: u64,
    days: Vec<JsonDay<'a>>,
}

pub(crate) fn output_traffic_json(
    repo: &str,
    traffic: &TrafficResponse,
    op: &str,
) -> Result<String, AppError> {
    let daily = aggregate_daily(&traffic.records);
    let report = JsonReport {
        repository: repo,
        operation: op,
        count: traffic.total_count,
        uniques: traffic.total_uniques,
        days: daily
            .iter()
            .map(|(date, counts)| JsonDay {
                date,
                count: counts.count,
                uniques: counts.uniques,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report).map_err(AppError::Render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TrafficRecord;
    use serde_json::Value;

    #[test]
    fn days_follow_api_order() {
        let traffic = TrafficResponse {
            total_count: 4,
            total_uniques: 2,
            records: vec![
                TrafficRecord {
                    date: "2020-01-02".to_string(),
                    count: 3,
                    uniques: 1,
                },
                TrafficRecord {
                    date: "2020-01-01".to_string(),
                    count: 1,
                    uniques: 1,
                },
            ],
        };
        let json: Value = serde_json::from_str(&output_traffic_json("demo", &traffic, "views").unwrap()).unwrap();
        assert_eq!(json["repository"], "demo");
        assert_eq!(json["operation"], "views");
        assert_eq!(json["count"], 4);
        let days = json["days"].as_array().unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0]["date"], "2020-01-02");
        assert_eq!(days[1]["uniques"], 1);
    }
}
