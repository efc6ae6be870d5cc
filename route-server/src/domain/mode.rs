//! Transportation mode and mode filter types.

use std::fmt;

/// Error returned when parsing an unrecognised transportation mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transportation mode: {input:?}")]
pub struct InvalidMode {
    input: String,
}

/// A transportation category for an offer.
///
/// Currently a closed set of two modes; the enum is the single place to
/// extend when new categories are added.
///
/// # Examples
///
/// ```
/// use route_server::domain::TransportMode;
///
/// let bus = TransportMode::parse("bus").unwrap();
/// assert_eq!(bus.as_str(), "bus");
///
/// assert!(TransportMode::parse("train").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Bus,
    Carpool,
}

impl TransportMode {
    /// Parse a mode from its lowercase wire name.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        match s {
            "bus" => Ok(TransportMode::Bus),
            "carpool" => Ok(TransportMode::Carpool),
            other => Err(InvalidMode {
                input: other.to_string(),
            }),
        }
    }

    /// Returns the lowercase wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Carpool => "carpool",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active category filter over a batch of offers.
///
/// `All` keeps every offer; `Only(mode)` keeps offers of that mode.
///
/// # Examples
///
/// ```
/// use route_server::domain::{ModeFilter, TransportMode};
///
/// let filter = ModeFilter::parse("bus").unwrap();
/// assert!(filter.matches(TransportMode::Bus));
/// assert!(!filter.matches(TransportMode::Carpool));
///
/// assert_eq!(ModeFilter::default(), ModeFilter::All);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeFilter {
    #[default]
    All,
    Only(TransportMode),
}

impl ModeFilter {
    /// Parse a filter from its wire name: `"all"` or a mode name.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        if s == "all" {
            Ok(ModeFilter::All)
        } else {
            TransportMode::parse(s).map(ModeFilter::Only)
        }
    }

    /// Returns whether an offer of the given mode passes this filter.
    pub fn matches(&self, mode: TransportMode) -> bool {
        match self {
            ModeFilter::All => true,
            ModeFilter::Only(m) => *m == mode,
        }
    }

    /// Returns the lowercase wire name of the filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeFilter::All => "all",
            ModeFilter::Only(m) => m.as_str(),
        }
    }
}

impl fmt::Display for ModeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_modes() {
        assert_eq!(TransportMode::parse("bus"), Ok(TransportMode::Bus));
        assert_eq!(TransportMode::parse("carpool"), Ok(TransportMode::Carpool));
    }

    #[test]
    fn reject_unknown_modes() {
        assert!(TransportMode::parse("train").is_err());
        assert!(TransportMode::parse("").is_err());
        assert!(TransportMode::parse("Bus").is_err());
        assert!(TransportMode::parse("BUS").is_err());
    }

    #[test]
    fn mode_display_roundtrip() {
        for mode in [TransportMode::Bus, TransportMode::Carpool] {
            assert_eq!(TransportMode::parse(mode.as_str()), Ok(mode));
            assert_eq!(format!("{}", mode), mode.as_str());
        }
    }

    #[test]
    fn parse_valid_filters() {
        assert_eq!(ModeFilter::parse("all"), Ok(ModeFilter::All));
        assert_eq!(
            ModeFilter::parse("bus"),
            Ok(ModeFilter::Only(TransportMode::Bus))
        );
        assert_eq!(
            ModeFilter::parse("carpool"),
            Ok(ModeFilter::Only(TransportMode::Carpool))
        );
        assert!(ModeFilter::parse("everything").is_err());
    }

    #[test]
    fn all_matches_every_mode() {
        assert!(ModeFilter::All.matches(TransportMode::Bus));
        assert!(ModeFilter::All.matches(TransportMode::Carpool));
    }

    #[test]
    fn only_matches_its_own_mode() {
        let bus_only = ModeFilter::Only(TransportMode::Bus);
        assert!(bus_only.matches(TransportMode::Bus));
        assert!(!bus_only.matches(TransportMode::Carpool));
    }

    #[test]
    fn default_is_all() {
        assert_eq!(ModeFilter::default(), ModeFilter::All);
    }

    #[test]
    fn invalid_mode_display() {
        let err = TransportMode::parse("boat").unwrap_err();
        assert_eq!(err.to_string(), "invalid transportation mode: \"boat\"");
    }
}
