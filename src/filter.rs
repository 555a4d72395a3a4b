/// Privacy filter for WiFi access points.
///
/// Decides which scan results may be reported at all. Ad-hoc devices move
/// with their owners and are dropped. Networks whose SSID carries the
/// `_nomap` suffix have opted out of collection and are always dropped.

use crate::scanner::Observation;

/// Second-nybble hex digits that mark a locally administered (ad-hoc) MAC:
/// the low two bits of the first octet's low nybble are `10`.
pub const AD_HOC_HEX_VALUES: [char; 6] = ['2', '6', 'a', 'e', 'A', 'E'];

/// SSID suffix that opts a network out of collection.
pub const OPTOUT_SSID_SUFFIX: &str = "_nomap";

/// Length of a canonical colon-separated MAC string ("aa:bb:cc:dd:ee:ff").
pub const CANONICAL_MAC_LEN: usize = 17;

/// Whether an access point may be included in a submission.
///
/// The ad-hoc check only runs when the BSSID has the canonical 17-character
/// form; anything else (including a missing BSSID) falls through to the
/// opt-out check.
pub fn should_include(bssid: Option<&str>, ssid: Option<&str>) -> bool {
    if bssid.is_some_and(is_ad_hoc) {
        return false;
    }

    if ssid.is_some_and(|s| s.ends_with(OPTOUT_SSID_SUFFIX)) {
        return false;
    }

    true
}

/// [`should_include`] applied to a scan observation.
pub fn should_report(obs: &Observation) -> bool {
    should_include(obs.bssid.as_deref(), obs.ssid.as_deref())
}

/// Check the second character of a canonical MAC string against
/// [`AD_HOC_HEX_VALUES`].
fn is_ad_hoc(bssid: &str) -> bool {
    if bssid.len() != CANONICAL_MAC_LEN {
        return false;
    }
    bssid
        .as_bytes()
        .get(1)
        .is_some_and(|&b| AD_HOC_HEX_VALUES.contains(&(b as char)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Ad-hoc exclusion ────────────────────────────────────────────

    #[test]
    fn ad_hoc_second_nybble_excluded() {
        for c in AD_HOC_HEX_VALUES {
            let bssid = format!("0{c}:11:22:33:44:55");
            assert!(
                !should_include(Some(&bssid), Some("home")),
                "{bssid} should be excluded"
            );
        }
    }

    #[test]
    fn ad_hoc_excluded_regardless_of_ssid() {
        assert!(!should_include(Some("0a:11:22:33:44:55"), None));
        assert!(!should_include(Some("0a:11:22:33:44:55"), Some("")));
        assert!(!should_include(Some("0a:11:22:33:44:55"), Some("cafe_nomap")));
    }

    #[test]
    fn globally_administered_included() {
        for c in ['0', '1', '3', '4', '5', '7', '8', '9', 'b', 'c', 'd', 'f', 'B', 'C', 'D', 'F'] {
            let bssid = format!("0{c}:11:22:33:44:55");
            assert!(
                should_include(Some(&bssid), Some("home")),
                "{bssid} should be included"
            );
        }
    }

    #[test]
    fn non_canonical_length_skips_ad_hoc_check() {
        // Second character is '2' but the identifier is not 17 chars long
        assert!(should_include(Some("02:11:22:33:44"), Some("home")));
        assert!(should_include(Some("02:11:22:33:44:55:66"), Some("home")));
        assert!(should_include(Some("021122334455"), Some("home")));
        assert!(should_include(Some("0"), Some("home")));
        assert!(should_include(Some(""), Some("home")));
    }

    #[test]
    fn missing_bssid_skips_ad_hoc_check() {
        assert!(should_include(None, Some("home")));
        assert!(should_include(None, None));
    }

    #[test]
    fn multibyte_bssid_of_canonical_length_does_not_panic() {
        // 17 bytes, second byte is inside a multi-byte character
        let bssid = "\u{e9}1:22:33:44:55:6";
        assert_eq!(bssid.len(), 17);
        assert!(should_include(Some(bssid), Some("home")));
    }

    // ── Opt-out exclusion ───────────────────────────────────────────

    #[test]
    fn nomap_suffix_excluded() {
        assert!(!should_include(Some("00:11:22:33:44:55"), Some("home_nomap")));
        assert!(!should_include(Some("00:11:22:33:44:55"), Some("_nomap")));
    }

    #[test]
    fn nomap_excluded_regardless_of_bssid() {
        assert!(!should_include(None, Some("home_nomap")));
        assert!(!should_include(Some("bogus"), Some("home_nomap")));
    }

    #[test]
    fn nomap_must_be_a_suffix() {
        assert!(should_include(Some("00:11:22:33:44:55"), Some("home_nomap_5g")));
        assert!(should_include(Some("00:11:22:33:44:55"), Some("_nomapx")));
        assert!(should_include(Some("00:11:22:33:44:55"), Some("home_NOMAP")));
    }

    // ── Observations ────────────────────────────────────────────────

    #[test]
    fn should_report_uses_both_identifiers() {
        assert!(should_report(&Observation::new("00:11:22:33:44:55", "home", 2412, -50)));
        assert!(!should_report(&Observation::new("0e:11:22:33:44:55", "home", 2412, -50)));
        assert!(!should_report(&Observation::new("00:11:22:33:44:55", "x_nomap", 2412, -50)));

        let hidden = Observation {
            bssid: None,
            ssid: None,
            frequency: 2412,
            level: -50,
        };
        assert!(should_report(&hidden));
    }

    #[test]
    fn ordinary_access_point_included() {
        assert!(should_include(Some("00:11:22:33:44:55"), Some("home")));
        assert!(should_include(Some("00:11:22:33:44:55"), None));
    }
}
