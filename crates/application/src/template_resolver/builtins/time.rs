//! `now` / `timestamp` builtin
//!
//! Reads the clock, applies at most one offset, then renders using a custom
//! pattern, a preset, or ISO-8601 with milliseconds. Calendar offsets are
//! computed on the wall clock of the selected zone.

use chrono::{
    DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveDateTime, Offset as _, TimeDelta,
    TimeZone as _, Timelike, Utc,
};
use topiclab_domain::{Modifier, Offset, OffsetUnit, PresetFormat, TimeZone};
use tracing::trace;

use crate::ports::Clock;

/// The time-related settings collected from a modifier list.
///
/// For zone, preset, pattern and offset the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TimeSpec {
    zone: TimeZone,
    preset: Option<PresetFormat>,
    pattern: Option<String>,
    offset: Option<Offset>,
}

impl TimeSpec {
    fn from_modifiers(modifiers: &[Modifier]) -> Self {
        let mut spec = Self::default();
        for modifier in modifiers {
            match modifier {
                Modifier::TimeZone(zone) => spec.zone = *zone,
                Modifier::Preset(preset) => spec.preset = Some(*preset),
                Modifier::CustomFormat(pattern) => spec.pattern = Some(pattern.clone()),
                Modifier::Offset(offset) => spec.offset = Some(*offset),
                Modifier::Range(_) | Modifier::Unrecognized(_) => {
                    trace!(?modifier, "time builtin ignores modifier");
                }
            }
        }
        spec
    }
}

/// Resolves the time builtin against the given clock.
pub fn resolve(clock: &dyn Clock, modifiers: &[Modifier]) -> String {
    let spec = TimeSpec::from_modifiers(modifiers);
    let now = clock.now();

    let instant = match spec.offset {
        Some(offset) => apply_offset(clock, now, offset, spec.zone).unwrap_or_else(|| {
            trace!(?offset, "offset out of range, using current time");
            now
        }),
        None => now,
    };

    render(instant, &spec, zone_offset(clock, spec.zone, instant))
}

fn zone_offset(clock: &dyn Clock, zone: TimeZone, at: DateTime<Utc>) -> FixedOffset {
    match zone {
        TimeZone::Utc => Utc.fix(),
        TimeZone::Local => clock.local_offset(at),
    }
}

/// Shifts `instant` by `offset`.
///
/// Seconds, minutes and hours are elapsed time. Days and larger units move
/// the wall clock in `zone`, so `+1d` keeps the time of day across a DST
/// change.
fn apply_offset(
    clock: &dyn Clock,
    instant: DateTime<Utc>,
    offset: Offset,
    zone: TimeZone,
) -> Option<DateTime<Utc>> {
    let amount = offset.amount;
    match offset.unit {
        OffsetUnit::Seconds => instant.checked_add_signed(TimeDelta::try_seconds(amount)?),
        OffsetUnit::Minutes => instant.checked_add_signed(TimeDelta::try_minutes(amount)?),
        OffsetUnit::Hours => instant.checked_add_signed(TimeDelta::try_hours(amount)?),
        OffsetUnit::Days => shift_wall_clock(clock, zone, instant, |wall| {
            wall.checked_add_signed(TimeDelta::try_days(amount)?)
        }),
        OffsetUnit::Weeks => shift_wall_clock(clock, zone, instant, |wall| {
            wall.checked_add_signed(TimeDelta::try_weeks(amount)?)
        }),
        OffsetUnit::Months => shift_wall_clock(clock, zone, instant, |wall| shift_months(wall, amount)),
        OffsetUnit::Years => shift_wall_clock(clock, zone, instant, |wall| {
            shift_months(wall, amount.checked_mul(12)?)
        }),
    }
}

/// Applies `shift` to the wall clock of `instant` in `zone` and maps the
/// result back to an instant.
fn shift_wall_clock(
    clock: &dyn Clock,
    zone: TimeZone,
    instant: DateTime<Utc>,
    shift: impl FnOnce(NaiveDateTime) -> Option<NaiveDateTime>,
) -> Option<DateTime<Utc>> {
    let wall = instant.with_timezone(&zone_offset(clock, zone, instant)).naive_local();
    let target = shift(wall)?;
    from_wall_clock(clock, zone, &target, instant)
}

/// Upper bound on offset lookups when mapping a wall clock back to an
/// instant. A wall time inside a DST gap never settles.
const OFFSET_LOOKUPS: usize = 3;

/// Finds the instant whose wall clock in `zone` reads `wall`, re-reading the
/// zone's offset at each candidate until it stops changing.
fn from_wall_clock(
    clock: &dyn Clock,
    zone: TimeZone,
    wall: &NaiveDateTime,
    hint: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let mut offset = zone_offset(clock, zone, hint);
    let mut candidate = offset.from_local_datetime(wall).single()?.with_timezone(&Utc);

    for _ in 0..OFFSET_LOOKUPS {
        let actual = zone_offset(clock, zone, candidate);
        if actual == offset {
            break;
        }
        offset = actual;
        candidate = offset.from_local_datetime(wall).single()?.with_timezone(&Utc);
    }

    Some(candidate)
}

/// Calendar month arithmetic with day overflow carried forward, so
/// Jan 31 + 1 month lands on Mar 2 (or Mar 3 in a non-leap year).
fn shift_months(wall: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let total = i64::from(wall.year())
        .checked_mul(12)?
        .checked_add(i64::from(wall.month0()))?
        .checked_add(months)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;

    let date = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(wall.day0())))?;

    Some(date.and_time(wall.time()))
}

fn render(instant: DateTime<Utc>, spec: &TimeSpec, zone: FixedOffset) -> String {
    let wall = instant.with_timezone(&zone).naive_local();

    if let Some(pattern) = &spec.pattern {
        return apply_pattern(pattern, &wall);
    }

    match spec.preset {
        Some(PresetFormat::Unix) => instant.timestamp().to_string(),
        Some(PresetFormat::UnixMs) => instant.timestamp_millis().to_string(),
        Some(PresetFormat::Date) => wall.format("%Y-%m-%d").to_string(),
        Some(PresetFormat::Time) => wall.format("%H:%M:%S").to_string(),
        Some(PresetFormat::DateTime) => wall.format("%Y-%m-%d %H:%M:%S").to_string(),
        Some(PresetFormat::Iso) | None => iso_string(instant, spec.zone),
    }
}

/// ISO-8601 in UTC. For `local` the trailing `Z` is dropped but the wall
/// clock stays in UTC.
fn iso_string(instant: DateTime<Utc>, zone: TimeZone) -> String {
    let iso = instant.format("%Y-%m-%dT%H:%M:%S%.3f").to_string();
    match zone {
        TimeZone::Utc => format!("{iso}Z"),
        TimeZone::Local => iso,
    }
}

/// Replaces the first occurrence of each token, longest tokens first.
fn apply_pattern(pattern: &str, wall: &NaiveDateTime) -> String {
    let millis = (wall.nanosecond() / 1_000_000).min(999);
    let tokens = [
        ("YYYY", format!("{:04}", wall.year())),
        ("YY", format!("{:02}", wall.year().rem_euclid(100))),
        ("MM", format!("{:02}", wall.month())),
        ("M", wall.month().to_string()),
        ("DD", format!("{:02}", wall.day())),
        ("D", wall.day().to_string()),
        ("HH", format!("{:02}", wall.hour())),
        ("H", wall.hour().to_string()),
        ("mm", format!("{:02}", wall.minute())),
        ("ss", format!("{:02}", wall.second())),
        ("SSS", format!("{millis:03}")),
    ];

    tokens
        .iter()
        .fold(pattern.to_string(), |acc, (token, value)| acc.replacen(token, value, 1))
}
