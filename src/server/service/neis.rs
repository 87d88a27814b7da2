//! Client for the NEIS education open-data API.
//!
//! Every resource is queried with `GET {base}/{resource}` and answers
//! `{"<resource>": [{"head": [...]}, {"row": [...]}]}`. When a query matches nothing
//! NEIS answers with a `RESULT` object instead, which yields no rows.

use async_trait::async_trait;
use serde_json::Value;

use crate::server::{
    error::neis::NeisError,
    model::{schedule::DateWindow, student::SchoolRef},
    util::parse::format_compact_date,
};

/// NEIS resources used by the schedule aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeisResource {
    SchoolSchedule,
    Timetable,
    MealServiceDietInfo,
}

impl NeisResource {
    /// Path segment and top-level response key.
    pub fn name(self) -> &'static str {
        match self {
            Self::SchoolSchedule => "SchoolSchedule",
            Self::Timetable => "hisTimetable",
            Self::MealServiceDietInfo => "mealServiceDietInfo",
        }
    }

    /// Query keys of the from/to window.
    fn window_keys(self) -> (&'static str, &'static str) {
        match self {
            Self::SchoolSchedule => ("AA_FROM_YMD", "AA_TO_YMD"),
            Self::Timetable => ("TI_FROM_YMD", "TI_TO_YMD"),
            Self::MealServiceDietInfo => ("MLSV_FROM_YMD", "MLSV_TO_YMD"),
        }
    }
}

/// One query against a NEIS resource for a school and date window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeisRequest {
    pub resource: NeisResource,
    pub school: SchoolRef,
    pub window: DateWindow,
    params: Vec<(&'static str, String)>,
}

impl NeisRequest {
    pub fn new(resource: NeisResource, school: SchoolRef, window: DateWindow) -> Self {
        Self {
            resource,
            school,
            window,
            params: Vec::new(),
        }
    }

    /// Adds a resource-specific query parameter.
    pub fn with_param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    #[cfg(test)]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Query string pairs, without the API key.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let (from_key, to_key) = self.resource.window_keys();
        let mut query = vec![
            ("ATPT_OFCDC_SC_CODE", self.school.office.clone()),
            ("SD_SCHUL_CODE", self.school.school_code.clone()),
            ("Type", "json".to_string()),
            ("pIndex", "1".to_string()),
            ("pSize", "1000".to_string()),
            (from_key, format_compact_date(self.window.start)),
            (to_key, format_compact_date(self.window.end)),
        ];
        query.extend(self.params.iter().cloned());
        query
    }
}

/// Access to the NEIS API.
#[async_trait]
pub trait NeisApi: Send + Sync {
    /// Runs `request` and returns the decoded response body.
    async fn fetch(&self, request: &NeisRequest) -> Result<Value, NeisError>;
}

/// `NeisApi` over HTTP.
pub struct HttpNeisClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpNeisClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl NeisApi for HttpNeisClient {
    async fn fetch(&self, request: &NeisRequest) -> Result<Value, NeisError> {
        let url = url::Url::parse(&format!("{}/{}", self.base_url, request.resource.name()))?;

        let body = self
            .client
            .get(url)
            .query(&[("KEY", self.api_key.as_str())])
            .query(&request.query())
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(body)
    }
}

/// Extracts the data rows of `resource` from a response body.
///
/// Bodies without rows, such as the `RESULT` object returned for empty queries,
/// yield an empty list.
pub fn extract_rows(body: &Value, resource: NeisResource) -> Vec<Value> {
    body.get(resource.name())
        .and_then(|sections| sections.get(1))
        .and_then(|section| section.get("row"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Sets `field` to `"{field} not found"` on rows where it is missing, null or empty.
pub fn fill_missing(rows: &mut [Value], field: &str) {
    for row in rows.iter_mut() {
        let Some(object) = row.as_object_mut() else {
            continue;
        };
        let present = match object.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !present {
            object.insert(field.to_string(), Value::String(format!("{field} not found")));
        }
    }
}
