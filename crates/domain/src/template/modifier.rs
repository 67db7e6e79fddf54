//! Modifier tokens
//!
//! Modifiers follow a builtin name, e.g. `{now:utc:-1h:date}` or
//! `{random:1-10}`. Each raw token is classified into a closed set of
//! variants; tokens that match nothing become `Unrecognized` and are ignored
//! by the resolvers.

use std::str::FromStr;

use crate::error::DomainError;

const FORMAT_PREFIX: &str = "fmt:";

/// Timezone used when rendering a time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZone {
    /// Coordinated Universal Time (default).
    #[default]
    Utc,
    /// The host's local timezone.
    Local,
}

/// Named output formats for the time builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetFormat {
    /// ISO-8601 with milliseconds.
    Iso,
    /// Whole seconds since the Unix epoch.
    Unix,
    /// Whole milliseconds since the Unix epoch.
    UnixMs,
    /// `YYYY-MM-DD`.
    Date,
    /// `HH:mm:ss`.
    Time,
    /// `YYYY-MM-DD HH:mm:ss`.
    DateTime,
}

impl PresetFormat {
    /// Matches a preset keyword, ignoring ASCII case.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "iso" => Some(Self::Iso),
            "unix" => Some(Self::Unix),
            "unixms" => Some(Self::UnixMs),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "datetime" => Some(Self::DateTime),
            _ => None,
        }
    }
}

/// Unit of a time offset. `m` is minutes and `M` is months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    /// `s`
    Seconds,
    /// `m`
    Minutes,
    /// `h`
    Hours,
    /// `d`
    Days,
    /// `w`
    Weeks,
    /// `M`
    Months,
    /// `y`
    Years,
}

impl OffsetUnit {
    /// Maps a unit character to its unit. Case-sensitive.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Seconds),
            'm' => Some(Self::Minutes),
            'h' => Some(Self::Hours),
            'd' => Some(Self::Days),
            'w' => Some(Self::Weeks),
            'M' => Some(Self::Months),
            'y' => Some(Self::Years),
            _ => None,
        }
    }
}

/// A signed time offset such as `+30m` or `-1M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    /// Signed number of units.
    pub amount: i64,
    /// Unit the amount is expressed in.
    pub unit: OffsetUnit,
}

impl FromStr for Offset {
    type Err = DomainError;

    /// Parses `^([+-])(\d+)([smhdwMy])$`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidOffset(token.to_string());

        let mut chars = token.chars();
        let sign = match chars.next() {
            Some('+') => 1,
            Some('-') => -1,
            _ => return Err(invalid()),
        };
        let unit = chars
            .next_back()
            .and_then(OffsetUnit::from_char)
            .ok_or_else(invalid)?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let magnitude: i64 = digits.parse().map_err(|_| invalid())?;

        Ok(Self {
            amount: sign * magnitude,
            unit,
        })
    }
}

/// Inclusive numeric range for the random builtin, written `min-max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    /// Lower bound as written.
    pub min: u64,
    /// Upper bound as written.
    pub max: u64,
}

impl RangeSpec {
    /// Creates a range. Bounds are not reordered.
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }
}

impl FromStr for RangeSpec {
    type Err = DomainError;

    /// Parses `^(\d+)-(\d+)$`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidRange(token.to_string());

        let (min, max) = token.split_once('-').ok_or_else(invalid)?;
        let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !is_number(min) || !is_number(max) {
            return Err(invalid());
        }

        Ok(Self {
            min: min.parse().map_err(|_| invalid())?,
            max: max.parse().map_err(|_| invalid())?,
        })
    }
}

/// A classified modifier token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// `utc` or `local`.
    TimeZone(TimeZone),
    /// One of the preset output formats.
    Preset(PresetFormat),
    /// `fmt:<pattern>`; holds the pattern verbatim.
    CustomFormat(String),
    /// Signed time offset.
    Offset(Offset),
    /// Numeric range for `random`.
    Range(RangeSpec),
    /// Anything else. Resolvers ignore it.
    Unrecognized(String),
}

impl Modifier {
    /// Classifies a raw token. Never fails: unknown tokens become
    /// `Modifier::Unrecognized`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if let Some(pattern) = token
            .get(..FORMAT_PREFIX.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(FORMAT_PREFIX))
            .map(|_| &token[FORMAT_PREFIX.len()..])
            .filter(|pattern| !pattern.is_empty())
        {
            return Self::CustomFormat(pattern.to_string());
        }

        if token.eq_ignore_ascii_case("utc") {
            return Self::TimeZone(TimeZone::Utc);
        }
        if token.eq_ignore_ascii_case("local") {
            return Self::TimeZone(TimeZone::Local);
        }
        if let Some(preset) = PresetFormat::from_keyword(token) {
            return Self::Preset(preset);
        }
        if let Ok(offset) = token.parse() {
            return Self::Offset(offset);
        }
        if let Ok(range) = token.parse() {
            return Self::Range(range);
        }

        Self::Unrecognized(token.to_string())
    }

    /// Returns true for tokens no resolver understands.
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timezone_keywords_ignore_case() {
        assert_eq!(Modifier::parse("utc"), Modifier::TimeZone(TimeZone::Utc));
        assert_eq!(Modifier::parse("UTC"), Modifier::TimeZone(TimeZone::Utc));
        assert_eq!(Modifier::parse("Local"), Modifier::TimeZone(TimeZone::Local));
    }

    #[test]
    fn test_preset_keywords() {
        assert_eq!(Modifier::parse("iso"), Modifier::Preset(PresetFormat::Iso));
        assert_eq!(Modifier::parse("UNIX"), Modifier::Preset(PresetFormat::Unix));
        assert_eq!(Modifier::parse("unixms"), Modifier::Preset(PresetFormat::UnixMs));
        assert_eq!(Modifier::parse("date"), Modifier::Preset(PresetFormat::Date));
        assert_eq!(Modifier::parse("time"), Modifier::Preset(PresetFormat::Time));
        assert_eq!(
            Modifier::parse("DateTime"),
            Modifier::Preset(PresetFormat::DateTime)
        );
    }

    #[test]
    fn test_custom_format_keeps_colons() {
        assert_eq!(
            Modifier::parse("fmt:HH:mm:ss"),
            Modifier::CustomFormat("HH:mm:ss".into())
        );
        assert_eq!(
            Modifier::parse("FMT:YYYY"),
            Modifier::CustomFormat("YYYY".into())
        );
    }

    #[test]
    fn test_empty_custom_format_is_unrecognized() {
        assert!(Modifier::parse("fmt:").is_unrecognized());
        assert!(Modifier::parse("fmt").is_unrecognized());
    }

    #[test]
    fn test_offset_parsing() {
        assert_eq!(
            "+30m".parse::<Offset>(),
            Ok(Offset {
                amount: 30,
                unit: OffsetUnit::Minutes
            })
        );
        assert_eq!(
            "-1M".parse::<Offset>(),
            Ok(Offset {
                amount: -1,
                unit: OffsetUnit::Months
            })
        );
        assert_eq!(
            "+2y".parse::<Offset>().map(|o| o.unit),
            Ok(OffsetUnit::Years)
        );
    }

    #[test]
    fn test_offset_rejects_malformed_tokens() {
        for token in ["1h", "+h", "+1", "+1H", "+1.5h", "-", "+-1h", "+ 1h", ""] {
            assert_eq!(
                token.parse::<Offset>(),
                Err(DomainError::InvalidOffset(token.into())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_offset_too_large_is_unrecognized() {
        assert!(Modifier::parse("+99999999999999999999d").is_unrecognized());
    }

    #[test]
    fn test_range_parsing() {
        assert_eq!("1-10".parse::<RangeSpec>(), Ok(RangeSpec::new(1, 10)));
        assert_eq!("10-1".parse::<RangeSpec>(), Ok(RangeSpec::new(10, 1)));
        assert!("1-".parse::<RangeSpec>().is_err());
        assert!("-5".parse::<RangeSpec>().is_err());
        assert!("a-b".parse::<RangeSpec>().is_err());
        assert!("1-2-3".parse::<RangeSpec>().is_err());
    }

    #[test]
    fn test_signed_number_is_offset_not_range() {
        assert!(matches!(Modifier::parse("-5s"), Modifier::Offset(_)));
        assert_eq!(Modifier::parse("5-6"), Modifier::Range(RangeSpec::new(5, 6)));
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(
            Modifier::parse("tomorrow"),
            Modifier::Unrecognized("tomorrow".into())
        );
    }
}
