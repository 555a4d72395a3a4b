/// Scan inputs supplied by the host platform: location fixes, access point
/// observations and the phone radio type.
///
/// Platforms that expose a radio in monitor mode can feed raw 802.11 frames
/// through [`parse_beacon_frame`] instead of building observations by hand.
use core::fmt::Write;

use ieee80211::match_frames;
use ieee80211::mgmt_frame::{BeaconFrame, ProbeResponseFrame};

/// Maximum length for MAC address strings ("AA:BB:CC:DD:EE:FF")
pub type MacString = heapless::String<18>;

/// A location fix from the platform location provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    /// UTC time of the fix in milliseconds since the Unix epoch
    pub time: i64,
    pub longitude: f64,
    pub latitude: f64,
    /// Horizontal accuracy in meters
    pub accuracy: f32,
    /// Altitude in meters above the WGS84 ellipsoid
    pub altitude: f64,
}

/// A single access point seen during a WiFi scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Hardware address, normally "aa:bb:cc:dd:ee:ff". `None` when the
    /// platform reported no address.
    pub bssid: Option<String>,
    /// Network name. `None` for hidden networks on some platforms.
    pub ssid: Option<String>,
    /// Centre frequency in MHz
    pub frequency: u32,
    /// Signal level in dBm
    pub level: i32,
}

impl Observation {
    pub fn new(bssid: &str, ssid: &str, frequency: u32, level: i32) -> Self {
        Self {
            bssid: Some(bssid.into()),
            ssid: Some(ssid.into()),
            frequency,
            level,
        }
    }
}

/// Phone radio family, numbered like the platform telephony constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RadioType {
    None = 0,
    Gsm = 1,
    Cdma = 2,
    Sip = 3,
}

impl RadioType {
    /// Map a platform phone-type constant. Unknown values yield `None`.
    pub fn from_phone_type(value: i32) -> Option<Self> {
        match value {
            0 => Some(RadioType::None),
            1 => Some(RadioType::Gsm),
            2 => Some(RadioType::Cdma),
            3 => Some(RadioType::Sip),
            _ => None,
        }
    }

    /// Wire label for the `radio` field. Only GSM is labelled.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            RadioType::Gsm => Some("gsm"),
            _ => None,
        }
    }
}

/// Centre frequency in MHz for a 2.4 GHz or 5 GHz channel number.
pub fn channel_to_frequency(channel: u8) -> Option<u32> {
    let ch = channel as u32;
    match channel {
        1..=13 => Some(2407 + 5 * ch),
        14 => Some(2484),
        32..=177 => Some(5000 + 5 * ch),
        _ => None,
    }
}

/// Parse a raw 802.11 frame into an [`Observation`].
///
/// Only frames sent by access points (beacons and scan responses) carry a
/// usable BSSID/SSID pair; everything else is ignored. The transmitter
/// address is used as the BSSID.
pub fn parse_beacon_frame(frame: &[u8], rssi: i8, channel: u8) -> Option<Observation> {
    let frequency = channel_to_frequency(channel)?;

    let result = match_frames! {
        frame,
        beacon = BeaconFrame<'_> => {
            build_observation(
                &beacon.header.transmitter_address.0,
                beacon.body.ssid().unwrap_or(""),
                rssi, frequency,
            )
        }
        response = ProbeResponseFrame<'_> => {
            build_observation(
                &response.header.transmitter_address.0,
                response.body.ssid().unwrap_or(""),
                rssi, frequency,
            )
        }
    };

    result.ok()
}

fn build_observation(mac: &[u8; 6], ssid: &str, rssi: i8, frequency: u32) -> Observation {
    let mut bssid = MacString::new();
    format_mac(mac, &mut bssid);
    Observation {
        bssid: Some(bssid.as_str().into()),
        ssid: Some(ssid.into()),
        frequency,
        level: rssi as i32,
    }
}

/// Format a 6-byte MAC address into "AA:BB:CC:DD:EE:FF" string
pub fn format_mac(mac: &[u8; 6], buf: &mut MacString) {
    let _ = write!(
        buf,
        "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    );
}
