//! Navigation state derived from the query string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_STEP;

/// Query parameter carrying the highlighted wizard step.
pub const STEP_PARAM: &str = "step";

/// Decoded query parameters of the current navigation request.
///
/// When a key repeats, the first occurrence wins, matching
/// `URLSearchParams.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = BTreeMap::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }
        Self(params)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.0.entry(k.into()).or_insert_with(|| v.into());
        }
        params
    }
}

/// Which wizard step the progress bar highlights.
///
/// Derived on every activation; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub step: i32,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self { step: DEFAULT_STEP as i32 }
    }
}

impl NavigationState {
    /// Read `step` from the query, falling back to the default step.
    pub fn from_query(params: &QueryParams) -> Self {
        Self::from_query_or(params, DEFAULT_STEP)
    }

    /// Read `step` from the query, falling back to `default_step`.
    ///
    /// Absent, empty, non-numeric and zero values all fall back. Fractions
    /// are truncated toward zero and out-of-range values saturate.
    pub fn from_query_or(params: &QueryParams, default_step: u8) -> Self {
        let step = params
            .get(STEP_PARAM)
            .and_then(parse_step)
            .unwrap_or(default_step as i32);
        Self { step }
    }
}

fn parse_step(raw: &str) -> Option<i32> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.is_nan() || value == 0.0 {
        return None;
    }
    Some(value.trunc() as i32)
}
