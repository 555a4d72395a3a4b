//! Stumbler reporter — privacy-filtered WiFi/location submissions.
//!
//! Takes a location fix, the access points seen in a WiFi scan and the
//! phone's cell info, and posts them to a geolocation collection service.
//! Access points are filtered before anything leaves the device (ad-hoc
//! devices and `_nomap` networks are dropped) and each remaining BSSID is
//! replaced by a SHA-1 key.
//!
//! The crate is organized in three layers:
//! - `scanner`, `filter`, `hash`: platform inputs and the privacy rules.
//! - `protocol`, `record`: the JSON wire schema and record assembly,
//!   pure and synchronous.
//! - `submit`, `reporter`: fire-and-forget delivery on a background thread.
//!
//! Logging goes through the `log` facade; install any logger to see
//! submission failures.

pub mod filter;
pub mod hash;
pub mod protocol;
pub mod record;
pub mod reporter;
pub mod scanner;
pub mod submit;

pub use record::RecordBuilder;
pub use reporter::Reporter;
pub use scanner::{LocationFix, Observation, RadioType};
pub use submit::{ReporterConfig, Submitter, Transport};
