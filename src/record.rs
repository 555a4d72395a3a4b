/// Submission record assembly.
///
/// Turns a location fix, a WiFi scan and the cell info into a
/// [`SubmissionRecord`]. Pure and synchronous: no I/O happens here.
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::filter::should_report;
use crate::hash::KeyHasher;
use crate::protocol::{SubmissionRecord, WifiEntry, TIME_FORMAT};
use crate::scanner::{LocationFix, Observation, RadioType};

/// Errors raised while assembling a record. Never returned to callers of
/// [`RecordBuilder::build`]; they are logged and assembly stops.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("fix time {0} ms is outside the representable range")]
    TimestampOutOfRange(i64),
    #[error("{field} is not a finite number: {value}")]
    NonFiniteCoordinate { field: &'static str, value: f64 },
}

/// Text hashed in place of a missing BSSID or SSID, so keys match clients
/// that concatenate a null field as "null".
pub const MISSING_FIELD: &str = "null";

/// Builds submission records. Owns the key hasher, so one builder serves
/// one caller at a time.
#[derive(Default)]
pub struct RecordBuilder {
    hasher: KeyHasher,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            hasher: KeyHasher::new(),
        }
    }

    /// Build a record. Never fails: on an assembly error the record is
    /// returned with every field set before the failure.
    pub fn build(
        &mut self,
        fix: &LocationFix,
        observations: Option<&[Observation]>,
        radio: RadioType,
        cell: Value,
    ) -> SubmissionRecord {
        let mut record = SubmissionRecord::default();
        if let Err(e) = self.assemble(&mut record, fix, observations, radio, cell) {
            log::warn!("Record assembly stopped early: {}", e);
        }
        record
    }

    fn assemble(
        &mut self,
        record: &mut SubmissionRecord,
        fix: &LocationFix,
        observations: Option<&[Observation]>,
        radio: RadioType,
        cell: Value,
    ) -> Result<(), RecordError> {
        record.time = Some(format_time(fix.time)?);
        record.lon = Some(finite("lon", fix.longitude)?);
        record.lat = Some(finite("lat", fix.latitude)?);
        record.accuracy = Some(fix.accuracy as i32);
        record.altitude = Some(fix.altitude as i32);
        record.cell = Some(cell);
        record.radio = radio.label();

        record.wifi = Some(
            observations
                .unwrap_or_default()
                .iter()
                .filter(|obs| should_report(obs))
                .map(|obs| self.wifi_entry(obs))
                .collect(),
        );

        Ok(())
    }

    fn wifi_entry(&mut self, obs: &Observation) -> WifiEntry {
        let bssid = obs.bssid.as_deref().unwrap_or(MISSING_FIELD);
        let ssid = obs.ssid.as_deref().unwrap_or(MISSING_FIELD);
        WifiEntry {
            key: self.hasher.hash_key(bssid, ssid),
            frequency: obs.frequency,
            signal: obs.level,
        }
    }
}

/// Format epoch milliseconds as `YYYY-MM-DDTHH:MMZ` in UTC.
pub fn format_time(millis: i64) -> Result<String, RecordError> {
    let t = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or(RecordError::TimestampOutOfRange(millis))?;
    Ok(t.format(TIME_FORMAT).to_string())
}

fn finite(field: &'static str, value: f64) -> Result<f64, RecordError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RecordError::NonFiniteCoordinate { field, value })
    }
}
