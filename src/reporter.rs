/// Single entry point tying record assembly to background submission.
use std::sync::Arc;

use serde_json::Value;

use crate::record::RecordBuilder;
use crate::scanner::{LocationFix, Observation, RadioType};
use crate::submit::{HttpTransport, ReporterConfig, SubmitError, Submitter, Transport};

/// Builds a record for each observation event and submits it.
pub struct Reporter {
    builder: RecordBuilder,
    submitter: Submitter,
}

impl Reporter {
    /// Reporter posting over HTTP to `config.endpoint`.
    pub fn new(config: ReporterConfig) -> Result<Self, SubmitError> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ReporterConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            builder: RecordBuilder::new(),
            submitter: Submitter::new(&config, transport),
        }
    }

    /// Build and submit one observation event. Returns once the record is
    /// built; the network write happens on a background thread.
    pub fn report_location(
        &mut self,
        fix: &LocationFix,
        observations: Option<&[Observation]>,
        radio: RadioType,
        cell: Value,
    ) {
        let record = self.builder.build(fix, observations, radio, cell);
        log::debug!(
            "Reporting fix with {} access points",
            record.wifi.as_ref().map_or(0, Vec::len)
        );
        self.submitter.submit(record);
    }
}
