//! Officer badge identifiers and the station codes derived from them

use precinct_core_types::schema::STATION_SERVICE_SUFFIX;

/// Officer badge identifier, e.g. `PD1234`
///
/// The station code is derived once at construction: it is the leading run of
/// characters before the first ASCII digit `0-9`, or the whole identifier when
/// it has none. Digits from other scripts (e.g. `١` or `１`) do not end the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeId {
    raw: String,
    station: StationCode,
}

impl BadgeId {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let end = raw
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(raw.len());
        let station = StationCode(raw[..end].to_string());
        Self { raw, station }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Station this officer reports to
    pub fn station(&self) -> &StationCode {
        &self.station
    }
}

impl std::fmt::Display for BadgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Station acronym used to route to the station's record service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Registry name the station's record service is bound under
    pub fn lookup_key(&self) -> String {
        format!("{}{}", self.0, STATION_SERVICE_SUFFIX)
    }
}

impl std::fmt::Display for StationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_is_prefix_before_first_digit() {
        assert_eq!(BadgeId::new("PD1234").station().as_str(), "PD");
        assert_eq!(BadgeId::new("SPVM0001").station().as_str(), "SPVM");
    }

    #[test]
    fn test_station_without_digits_is_whole_badge() {
        assert_eq!(BadgeId::new("NARC").station().as_str(), "NARC");
    }

    #[test]
    fn test_station_empty_when_badge_starts_with_digit() {
        assert_eq!(BadgeId::new("7X").station().as_str(), "");
    }

    #[test]
    fn test_station_stops_at_first_digit_only() {
        assert_eq!(BadgeId::new("AB1CD2").station().as_str(), "AB");
    }

    #[test]
    fn test_only_ascii_digits_end_station() {
        assert_eq!(BadgeId::new("PD١٢٣٤").station().as_str(), "PD١٢٣٤");
        assert_eq!(BadgeId::new("PD１2").station().as_str(), "PD１");
    }

    #[test]
    fn test_lookup_key_appends_suffix() {
        let badge = BadgeId::new("SPB2001");
        assert_eq!(badge.station().lookup_key(), "SPBStationServer");
    }

    #[test]
    fn test_badge_display_is_raw() {
        assert_eq!(BadgeId::new("PD1234").to_string(), "PD1234");
    }
}
