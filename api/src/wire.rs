//! Raw serde shapes of the tournament data file.
//! These map to the validated records via `loader`.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct DataFile {
    pub meta: WireMeta,
    pub matches: Vec<WireMatch>,
    pub groups: Vec<WireGroup>,
    /// Category → recipient. Document order is kept (`preserve_order`).
    #[serde(default)]
    pub awards: Map<String, Value>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct WireMeta {
    pub year: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct WireMatch {
    #[serde(rename = "ID")]
    pub id: String,
    pub index: u32,
    pub tzone: f64,
    pub teams: Vec<String>,
    #[serde(rename = "Type")]
    pub kind: String,
    pub group: Option<String>,
    pub finished: bool,
    #[serde(default)]
    pub goals: Vec<WireGoal>,
    pub winner: Option<String>,
    pub stadium: Option<String>,
    #[serde(rename = "Man_of_the_Match")]
    pub man_of_the_match: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct WireGoal {
    pub when: u32,
    pub team: String,
    pub player: String,
    #[serde(rename = "Type")]
    pub kind: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct WireGroup {
    #[serde(rename = "ID")]
    pub id: String,
    pub teams: Vec<String>,
    /// Match ids. Membership is derived from each match's `Group` instead.
    #[serde(default)]
    pub matches: Vec<String>,
}
