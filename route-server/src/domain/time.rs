//! 12-hour clock-face times for offer schedules.
//!
//! Offer departure and arrival times are display times on a 12-hour clock
//! ("06:00 AM"). There is no date component: the schedule is a fixed set of
//! daily slots and arrivals are derived by whole-hour offsets.

use std::fmt;

/// Error returned when parsing an invalid clock time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// AM/PM half of the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Returns the display form, `"AM"` or `"PM"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time of day on a 12-hour clock face: hour 1-12, minute, meridiem.
///
/// # Examples
///
/// ```
/// use route_server::domain::ClockTime;
///
/// let dep = ClockTime::parse("06:00 AM").unwrap();
/// assert_eq!(dep.to_string(), "06:00 AM");
///
/// // 24-hour and out-of-range forms are rejected
/// assert!(ClockTime::parse("13:00 PM").is_err());
/// assert!(ClockTime::parse("00:30 AM").is_err());
/// assert!(ClockTime::parse("0600 AM").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl ClockTime {
    /// Create a clock time from its components.
    ///
    /// # Panics
    ///
    /// Panics if `hour` is not in `1..=12` or `minute` is not in `0..=59`.
    /// Intended for fixed schedule constants; parse untrusted input with
    /// [`ClockTime::parse`] instead.
    pub const fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Self {
        assert!(hour >= 1 && hour <= 12, "hour must be 1-12");
        assert!(minute <= 59, "minute must be 0-59");
        Self {
            hour,
            minute,
            meridiem,
        }
    }

    /// Parse a time from `"HH:MM AM"` / `"HH:MM PM"` format.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 8 characters: HH:MM XM
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM AM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }
        if bytes[5] != b' ' {
            return Err(TimeError::new("expected space at position 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour < 1 || hour > 12 {
            return Err(TimeError::new("hour must be 1-12"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let meridiem = match &bytes[6..8] {
            b"AM" => Meridiem::Am,
            b"PM" => Meridiem::Pm,
            _ => return Err(TimeError::new("expected AM or PM")),
        };

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            meridiem,
        })
    }

    /// Returns the displayed hour (1-12).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the AM/PM half.
    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Advance the clock face by a whole number of hours.
    ///
    /// The displayed hour plus `hours` wraps modulo 12, with 0 rendered
    /// as 12. The result is PM exactly when that raw sum reaches 12; the
    /// starting meridiem does not participate in the arithmetic. The minute
    /// is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::ClockTime;
    ///
    /// let dep = ClockTime::parse("09:00 AM").unwrap();
    /// assert_eq!(dep.plus_hours(3).to_string(), "12:00 PM");
    /// assert_eq!(dep.plus_hours(5).to_string(), "02:00 PM");
    /// ```
    pub fn plus_hours(&self, hours: u32) -> Self {
        let sum = u32::from(self.hour) + hours;
        let wrapped = sum % 12;
        let hour = if wrapped == 0 { 12 } else { wrapped as u8 };
        let meridiem = if sum >= 12 { Meridiem::Pm } else { Meridiem::Am };

        Self {
            hour,
            minute: self.minute,
            meridiem,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

/// Parse exactly two ASCII digits into a number.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
        return None;
    }
    Some(u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0'))
}
