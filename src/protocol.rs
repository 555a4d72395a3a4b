/// JSON wire format for location submissions.
///
/// A submission is a batch envelope `{"items": [record, ...]}`. Each record
/// carries the location fix, opaque cell info, an optional radio label and
/// the filtered WiFi list keyed by hash.
use serde::Serialize;
use serde_json::Value;

use crate::hash::HashKey;

/// Record timestamp format (UTC, minute precision)
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// One access point in a record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WifiEntry {
    /// SHA-1 of BSSID + SSID, uppercase hex
    pub key: HashKey,
    /// Centre frequency in MHz
    pub frequency: u32,
    /// Signal level in dBm
    pub signal: i32,
}

/// A single location submission.
///
/// Fields are filled in wire order during assembly. A field that was never
/// set is omitted from the JSON rather than sent as a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubmissionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Accuracy in meters, truncated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<i32>,
    /// Altitude in meters, truncated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<i32>,
    /// Cell tower info, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<Value>,
    /// Radio family label; only "gsm" is ever sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<Vec<WifiEntry>>,
}

/// Batch wrapper posted to the collection endpoint
#[derive(Debug, Serialize)]
pub struct BatchEnvelope {
    /// Serialized under the top-level "items" key
    pub items: Vec<SubmissionRecord>,
}

impl BatchEnvelope {
    /// Envelope holding exactly one record
    pub fn single(record: SubmissionRecord) -> Self {
        Self {
            items: vec![record],
        }
    }

    /// Serialize to UTF-8 JSON bytes
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
