// Property tests for station routing derived from badge identifiers.

use precinct_core::BadgeId;
use proptest::prelude::*;

proptest! {
    #[test]
    fn station_is_letters_before_digits(prefix in "[A-Z]{0,6}", digits in "[0-9]{1,6}", tail in "[A-Z0-9]{0,4}") {
        let badge = BadgeId::new(format!("{}{}{}", prefix, digits, tail));
        prop_assert_eq!(badge.station().as_str(), prefix.as_str());
    }

    #[test]
    fn badge_without_digits_is_its_own_station(raw in "[A-Za-z]{1,10}") {
        let badge = BadgeId::new(raw.clone());
        prop_assert_eq!(badge.station().as_str(), raw.as_str());
    }

    #[test]
    fn lookup_key_is_station_plus_suffix(raw in "[A-Z]{1,5}[0-9]{0,5}") {
        let badge = BadgeId::new(raw);
        let key = badge.station().lookup_key();
        prop_assert!(key.starts_with(badge.station().as_str()));
        prop_assert!(key.ends_with("StationServer"));
        prop_assert_eq!(key.len(), badge.station().as_str().len() + "StationServer".len());
    }

    #[test]
    fn badge_text_is_kept_verbatim(raw in "\\PC{0,12}") {
        let badge = BadgeId::new(raw.clone());
        prop_assert_eq!(badge.as_str(), raw.as_str());
        prop_assert!(raw.starts_with(badge.station().as_str()));
    }
}
