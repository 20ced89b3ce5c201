//! Match kick-off times in the user's zone.
//!
//! Match ids encode the local kick-off as `MMDDHH` in the host city's zone.
//! Shifting that into another zone only ever has to deal with the two months
//! the tournament is played in, so the calendar here is a fixed table rather
//! than general date arithmetic.

use chrono::Month;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label shown for the no-shift mode.
pub const NATIVE_LABEL: &str = "Local";

/// Zone abbreviations and their offset from UTC in hours.
pub const ZONE_TABLE: &[(&str, f64)] = &[
    ("ACDT", 10.5), ("ACST", 9.5), ("ACT", -5.0), ("ADT", -3.0), ("AEDT", 11.0),
    ("AEST", 10.0), ("AFT", 4.5), ("AKDT", -8.0), ("AKST", -9.0), ("AMST", -3.0),
    ("ABMT", -4.0), ("AMT", 4.0), ("ART", -3.0), ("AST", -4.0), ("AWST", 8.0),
    ("AZT", 4.0), ("BDT", 8.0), ("BIOT", 6.0), ("BIT", -12.0), ("BOT", -4.0),
    ("BRST", -2.0), ("BRT", -3.0), ("BST", 6.0), ("BTT", 6.0), ("CAT", 2.0),
    ("CCT", 6.5), ("CDT", -5.0), ("CEST", 2.0), ("CET", 1.0), ("CIT", 8.0),
    ("CKT", -10.0), ("COST", -4.0), ("COT", -5.0), ("CST", -6.0), ("CT", 8.0),
    ("CXT", 7.0), ("EAST", -6.0), ("EAT", 3.0), ("ECT", -5.0), ("EDT", -4.0),
    ("EEST", 3.0), ("EET", 2.0), ("EGST", 0.0), ("EGT", -1.0), ("EIT", 9.0),
    ("EST", -5.0), ("FET", 3.0), ("FJT", 12.0), ("FKT", -4.0), ("FNT", -2.0),
    ("GAMT", -9.0), ("GET", 4.0), ("GFT", -3.0), ("GILT", 12.0), ("GIT", -9.0),
    ("GMT", 0.0), ("GST", -2.0), ("GYT", -4.0), ("HDT", -9.0), ("HST", -10.0),
    ("HKT", 8.0), ("HMT", 5.0), ("ICT", 7.0), ("IDT", 3.0), ("IOT", 3.0),
    ("IRDT", 4.5), ("IRKT", 8.0), ("IRST", 3.5), ("INST", 5.5), ("IST", 1.0),
    ("ISRT", 2.0), ("JST", 9.0), ("KALT", 2.0), ("KGT", 6.0), ("KOST", 11.0),
    ("KRAT", 7.0), ("KST", 9.0), ("MDT", -6.0), ("MET", 1.0), ("MEST", 2.0),
    ("MHT", 12.0), ("MIST", 11.0), ("MIT", -9.5), ("MMT", 6.5), ("MSK", 3.0),
    ("MST", 8.0), ("MTST", -7.0), ("MUT", 4.0), ("MVT", 5.0), ("MYT", 8.0),
    ("NCT", 11.0), ("NDT", -2.5), ("NFT", 11.0), ("NPT", 5.75), ("NST", -3.5),
    ("NT", -3.5), ("NUT", -11.0), ("NZDT", 13.0), ("NZST", 12.0), ("OMST", 6.0),
    ("ORAT", 5.0), ("PDT", -7.0), ("PET", -5.0), ("PGT", 10.0), ("PHOT", 13.0),
    ("PHT", 8.0), ("PKT", 5.0), ("PST", -8.0), ("PEST", 8.0), ("PYST", -3.0),
    ("PYT", -4.0), ("RET", 4.0), ("SAKT", 11.0), ("SAMT", 4.0), ("SAST", 2.0),
    ("SBT", 11.0), ("SCT", 4.0), ("SDT", -10.0), ("SGT", 8.0), ("SRT", -3.0),
    ("SST", 8.0), ("TAHT", -10.0), ("THA", 7.0), ("TFT", 5.0), ("TJT", 5.0),
    ("TKT", 13.0), ("TLT", 9.0), ("TMT", 5.0), ("TRT", 3.0), ("TOT", 13.0),
    ("TVT", 12.0), ("UTC", 0.0), ("UYST", -2.0), ("UYT", -3.0), ("UZT", 5.0),
    ("VET", -4.0), ("VLAT", 10.0), ("VOLT", 4.0), ("WAKT", 12.0), ("WAST", 2.0),
    ("WAT", 1.0), ("WEST", 1.0), ("WET", 0.0), ("WIT", 7.0), ("WST", 8.0),
    ("YAKT", 9.0), ("YEKT", 5.0),
];

/// The two months the tournament spans, with their lengths.
const CALENDAR: [(Month, i32); 2] = [(Month::June, 30), (Month::July, 31)];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TzError {
    #[error("unknown time zone {0:?}")]
    UnknownZone(String),
    #[error("invalid match timestamp {0:?}")]
    BadTimestamp(String),
    #[error("a shift of {delta:+} hours crosses more than one day")]
    MultiDayShift { delta: f64 },
    #[error("day {day} of month {month} is outside the tournament calendar")]
    OutsideCalendar { month: u32, day: i32 },
}

/// The zone reports are rendered in.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UserZone {
    /// Report each match in its host city's time, unshifted.
    #[default]
    Native,
    Named { label: String, offset: f64 },
}

impl UserZone {
    /// Accepts `Local` or a known abbreviation, in any case.
    pub fn parse(label: &str) -> Result<Self, TzError> {
        let label = label.trim();
        if label.eq_ignore_ascii_case(NATIVE_LABEL) {
            return Ok(UserZone::Native);
        }
        let upper = label.to_ascii_uppercase();
        ZONE_TABLE
            .iter()
            .find(|(abbrev, _)| *abbrev == upper)
            .map(|(abbrev, offset)| UserZone::Named { label: abbrev.to_string(), offset: *offset })
            .ok_or_else(|| TzError::UnknownZone(label.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            UserZone::Native => NATIVE_LABEL,
            UserZone::Named { label, .. } => label,
        }
    }

    pub fn offset(&self) -> Option<f64> {
        match self {
            UserZone::Native => None,
            UserZone::Named { offset, .. } => Some(*offset),
        }
    }
}

impl fmt::Display for UserZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kick-off decoded from a match id. Minutes are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kickoff {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl FromStr for Kickoff {
    type Err = TzError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let bad = || TzError::BadTimestamp(id.to_string());
        if id.len() != 6 || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let field = |range: std::ops::Range<usize>| id[range].parse::<u32>().map_err(|_| bad());
        let kickoff = Kickoff { month: field(0..2)?, day: field(2..4)?, hour: field(4..6)? };
        if kickoff.hour >= 24 {
            return Err(bad());
        }
        Ok(kickoff)
    }
}

/// Render `kickoff` (in a zone `native_offset` hours from UTC) in `zone`.
///
/// Only one day-boundary crossing is supported. Anything that would land more
/// than a day away, or outside June/July, is an error rather than a guess.
pub fn localize(kickoff: Kickoff, native_offset: f64, zone: &UserZone) -> Result<String, TzError> {
    let delta = zone.offset().map_or(0.0, |target| target - native_offset);

    let mut shift_hours = delta.trunc() as i32;
    let mut minute = (delta.fract() * 60.0).round() as i32;
    if minute < 0 {
        shift_hours -= 1;
        minute = -minute;
    } else if minute == 60 {
        shift_hours += 1;
        minute = 0;
    }

    let mut hour = kickoff.hour as i32 + shift_hours;
    let mut day = kickoff.day as i32;
    if hour < 0 {
        hour += 24;
        day -= 1;
    } else if hour >= 24 {
        hour -= 24;
        day += 1;
    }
    if !(0..24).contains(&hour) {
        return Err(TzError::MultiDayShift { delta });
    }

    let (month, day) = normalize_day(kickoff.month, day)?;
    Ok(format!("{} {:02} @ {:02}:{:02} {}", month.name(), day, hour, minute, zone.label()))
}

/// Fold a day that rolled one step past either end of a month back into the
/// tournament calendar.
fn normalize_day(month: u32, day: i32) -> Result<(Month, i32), TzError> {
    let [(first, first_len), (second, second_len)] = CALENDAR;
    let outside = TzError::OutsideCalendar { month, day };

    if month == first.number_from_month() {
        if (1..=first_len).contains(&day) {
            Ok((first, day))
        } else if day == first_len + 1 {
            Ok((second, 1))
        } else {
            Err(outside)
        }
    } else if month == second.number_from_month() {
        if (1..=second_len).contains(&day) {
            Ok((second, day))
        } else if day == 0 {
            Ok((first, first_len))
        } else {
            Err(outside)
        }
    } else {
        Err(outside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kickoff(id: &str) -> Kickoff {
        id.parse().unwrap()
    }

    fn zone(label: &str) -> UserZone {
        UserZone::parse(label).unwrap()
    }

    fn fixed(offset: f64) -> UserZone {
        UserZone::Named { label: "TST".into(), offset }
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!(zone("edt"), UserZone::Named { label: "EDT".into(), offset: -4.0 });
        assert_eq!(zone("LOCAL"), UserZone::Native);
        assert_eq!(zone(" local "), UserZone::Native);
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(UserZone::parse("XYZ"), Err(TzError::UnknownZone("XYZ".into())));
    }

    #[test]
    fn kickoff_rejects_malformed_ids() {
        assert!("06141".parse::<Kickoff>().is_err());
        assert!("06a418".parse::<Kickoff>().is_err());
        assert!("061425".parse::<Kickoff>().is_err());
        assert_eq!(kickoff("061418"), Kickoff { month: 6, day: 14, hour: 18 });
    }

    #[test]
    fn no_shift_returns_encoded_time() {
        let text = localize(kickoff("061418"), 3.0, &UserZone::Native).unwrap();
        assert_eq!(text, "June 14 @ 18:00 Local");
    }

    #[test]
    fn same_offset_returns_encoded_time() {
        let text = localize(kickoff("070121"), 3.0, &zone("MSK")).unwrap();
        assert_eq!(text, "July 01 @ 21:00 MSK");
    }

    #[test]
    fn westward_shift_stays_on_same_day() {
        let text = localize(kickoff("061418"), 3.0, &zone("EDT")).unwrap();
        assert_eq!(text, "June 14 @ 11:00 EDT");
    }

    #[test]
    fn fractional_offset_adds_minutes() {
        let text = localize(kickoff("061418"), 4.0, &zone("NPT")).unwrap();
        assert_eq!(text, "June 14 @ 19:45 NPT");
    }

    #[test]
    fn eastward_shift_rolls_into_next_day() {
        let text = localize(kickoff("061521"), 4.0, &zone("JST")).unwrap();
        assert_eq!(text, "June 16 @ 02:00 JST");
    }

    #[test]
    fn negative_half_hour_borrows_from_previous_day() {
        let text = localize(kickoff("062000"), 0.0, &fixed(-0.5)).unwrap();
        assert_eq!(text, "June 19 @ 23:30 TST");
    }

    #[test]
    fn negative_quarter_hour_borrows_and_negates_minutes() {
        let text = localize(kickoff("061418"), 5.75, &zone("UTC")).unwrap();
        assert_eq!(text, "June 14 @ 12:45 UTC");
    }

    #[test]
    fn day_rolls_across_month_boundary() {
        let text = localize(kickoff("063022"), 3.0, &zone("JST")).unwrap();
        assert_eq!(text, "July 01 @ 04:00 JST");
        let text = localize(kickoff("070102"), 3.0, &zone("EDT")).unwrap();
        assert_eq!(text, "June 30 @ 19:00 EDT");
    }

    #[test]
    fn multi_day_shift_is_rejected() {
        let err = localize(kickoff("061423"), -12.0, &zone("PHOT")).unwrap_err();
        assert!(matches!(err, TzError::MultiDayShift { .. }), "{err}");
    }

    #[test]
    fn days_outside_calendar_are_rejected() {
        let err = localize(kickoff("060101"), 3.0, &zone("EDT")).unwrap_err();
        assert_eq!(err, TzError::OutsideCalendar { month: 6, day: 0 });
        let err = localize(kickoff("081212"), 3.0, &UserZone::Native).unwrap_err();
        assert_eq!(err, TzError::OutsideCalendar { month: 8, day: 12 });
    }
}
