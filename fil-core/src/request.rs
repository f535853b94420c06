//! The snapshot handed to the analysis collaborator when the form submits.

use crate::channel::Channel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters of one analysis run. Only built from a ready form, so every
/// field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub query: String,
    pub channels: Vec<Channel>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl AnalysisRequest {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_json_shape() {
        let request = AnalysisRequest {
            query: "flavor".to_string(),
            channels: vec![Channel::Paper, Channel::News],
            from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        };
        let value: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(value["query"], "flavor");
        assert_eq!(value["channels"], serde_json::json!(["논문", "뉴스"]));
        assert_eq!(value["from"], "2024-01-01");
        assert_eq!(value["to"], "2024-01-31");
    }
}
