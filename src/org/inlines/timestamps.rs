//! Active `<...>` and inactive `[...]` timestamps.
//!
//! A single timestamp is matched with an anchored regex over a bounded window of the text:
//!
//!     <2024-01-15 Mon 10:00-12:30 +1w -2d>
//!      date       day time range  repeater warning delay
//!
//! Two timestamps of the same kind joined by `--` form a range. Out of range date or time
//! fields reject the whole match, leaving the text plain.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::scanner::{Matched, Scanner};
use crate::org::ast::{
    ObjectKind, Repeater, RepeaterType, TimeUnit, Timestamp, TimestampPoint, TimestampType,
    Warning, WarningType,
};

/// No single timestamp is longer than this.
const WINDOW: usize = 128;

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([<\[])(\d{4})-(\d{2})-(\d{2})(?:[ \t]+([^\s\d+\]>-]+))?(?:[ \t]+(\d{1,2}):(\d{2})(?:-(\d{1,2}):(\d{2}))?)?(?:[ \t]+(\.\+|\+\+|\+)(\d+)([hdwmy]))?(?:[ \t]+(--?)(\d+)([hdwmy]))?([>\]])",
    )
    .expect("timestamp regex is valid")
});

/// One `<...>` or `[...]` as matched, before range joining.
struct Single {
    active: bool,
    start: TimestampPoint,
    end: Option<TimestampPoint>,
    repeater: Option<Repeater>,
    warning: Option<Warning>,
    /// Length in characters.
    len: usize,
}

pub(super) fn parse_timestamp(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    let first = match_single(scanner, pos)?;
    let mut end = pos + first.len;
    let mut range_end = first.end.clone();

    if scanner.starts_with(end, "--") {
        if let Some(second) = match_single(scanner, end + 2) {
            if second.active == first.active {
                end += 2 + second.len;
                range_end = Some(second.start);
            }
        }
    }

    let timestamp_type = match (first.active, range_end.is_some()) {
        (true, false) => TimestampType::Active,
        (false, false) => TimestampType::Inactive,
        (true, true) => TimestampType::ActiveRange,
        (false, true) => TimestampType::InactiveRange,
    };
    let timestamp = Timestamp {
        timestamp_type,
        raw: scanner.slice(pos, end),
        start: first.start,
        end: range_end,
        repeater: first.repeater,
        warning: first.warning,
    };
    Some(scanner.leaf(ObjectKind::Timestamp(timestamp), pos, end))
}

fn match_single(scanner: &Scanner<'_>, pos: usize) -> Option<Single> {
    let open = scanner.at(pos)?;
    if !matches!(open, '<' | '[') || !scanner.at(pos + 1).is_some_and(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let window_end = (pos + WINDOW).min(scanner.len());
    let window = scanner.slice(pos, window_end);
    let caps = TIMESTAMP_RE.captures(&window)?;

    let close = if open == '<' { ">" } else { "]" };
    if caps.get(16)?.as_str() != close {
        return None;
    }

    let year = number(&caps, 2)?;
    let month = number(&caps, 3)?;
    let day = number(&caps, 4)?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    let day_name = caps.get(5).map(|m| m.as_str().to_string());

    let (hour, minute) = match caps.get(6) {
        Some(_) => {
            let (h, m) = time(&caps, 6, 7)?;
            (Some(h), Some(m))
        }
        None => (None, None),
    };
    let end = match caps.get(8) {
        Some(_) => {
            let (h, m) = time(&caps, 8, 9)?;
            Some(TimestampPoint {
                year,
                month,
                day,
                day_name: day_name.clone(),
                hour: Some(h),
                minute: Some(m),
            })
        }
        None => None,
    };

    let repeater = match caps.get(10) {
        Some(kind) => {
            let repeater_type = match kind.as_str() {
                "++" => RepeaterType::CatchUp,
                ".+" => RepeaterType::Restart,
                _ => RepeaterType::Cumulate,
            };
            Some(Repeater {
                repeater_type,
                value: number(&caps, 11)?,
                unit: unit(&caps, 12)?,
            })
        }
        None => None,
    };
    let warning = match caps.get(13) {
        Some(kind) => {
            let warning_type = if kind.as_str() == "--" {
                WarningType::First
            } else {
                WarningType::All
            };
            Some(Warning {
                warning_type,
                value: number(&caps, 14)?,
                unit: unit(&caps, 15)?,
            })
        }
        None => None,
    };

    Some(Single {
        active: open == '<',
        start: TimestampPoint {
            year,
            month,
            day,
            day_name,
            hour,
            minute,
        },
        end,
        repeater,
        warning,
        len: caps.get(0)?.as_str().chars().count(),
    })
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn time(caps: &Captures<'_>, hour_group: usize, minute_group: usize) -> Option<(u32, u32)> {
    let hour = number(caps, hour_group)?;
    let minute = number(caps, minute_group)?;
    (hour <= 23 && minute <= 59).then_some((hour, minute))
}

fn unit(caps: &Captures<'_>, group: usize) -> Option<TimeUnit> {
    caps.get(group)?.as_str().chars().next().and_then(TimeUnit::from_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::ast::{ObjectType, Range};
    use crate::org::inlines::parse_objects;
    use rstest::rstest;

    fn timestamp(text: &str) -> Timestamp {
        let objects = parse_objects(text);
        objects
            .into_iter()
            .find_map(|o| match o.kind {
                ObjectKind::Timestamp(ts) => Some(ts),
                _ => None,
            })
            .expect("timestamp object")
    }

    #[test]
    fn active_with_repeater() {
        let ts = timestamp("<2024-01-15 Mon +1w>");
        assert_eq!(ts.timestamp_type, TimestampType::Active);
        assert_eq!(
            ts.repeater,
            Some(Repeater {
                repeater_type: RepeaterType::Cumulate,
                value: 1,
                unit: TimeUnit::Week,
            })
        );
        assert_eq!(ts.start.year, 2024);
        assert_eq!(ts.start.month, 1);
        assert_eq!(ts.start.day, 15);
        assert_eq!(ts.start.day_name.as_deref(), Some("Mon"));
        assert_eq!(ts.raw, "<2024-01-15 Mon +1w>");
    }

    #[test]
    fn inactive_with_time() {
        let ts = timestamp("Logged [2024-01-15 Mon 09:05] here");
        assert_eq!(ts.timestamp_type, TimestampType::Inactive);
        assert_eq!(ts.start.hour, Some(9));
        assert_eq!(ts.start.minute, Some(5));
        assert!(ts.end.is_none());
    }

    #[test]
    fn same_day_time_range() {
        let ts = timestamp("<2024-01-15 Mon 10:00-12:30>");
        assert_eq!(ts.timestamp_type, TimestampType::ActiveRange);
        let end = ts.end.expect("end point");
        assert_eq!((end.day, end.hour, end.minute), (15, Some(12), Some(30)));
    }

    #[test]
    fn range_across_two_timestamps() {
        let text = "<2024-01-15 Mon>--<2024-01-17 Wed>";
        let objects = parse_objects(text);
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].range, Range::new(0, 34));
        let ts = timestamp(text);
        assert_eq!(ts.timestamp_type, TimestampType::ActiveRange);
        assert_eq!(ts.end.map(|e| e.day), Some(17));
        assert_eq!(ts.raw, text);
    }

    #[test]
    fn mixed_kinds_do_not_join() {
        let objects = parse_objects("<2024-01-15 Mon>--[2024-01-17 Wed]");
        let types: Vec<_> = objects.iter().map(|o| o.object_type()).collect();
        assert_eq!(
            types,
            vec![
                ObjectType::Timestamp,
                ObjectType::PlainText,
                ObjectType::Timestamp
            ]
        );
    }

    #[rstest]
    #[case("<2024-01-15 Mon ++2d>", RepeaterType::CatchUp, 2, TimeUnit::Day)]
    #[case("<2024-01-15 Mon .+1m>", RepeaterType::Restart, 1, TimeUnit::Month)]
    #[case("<2024-01-15 Mon +3y>", RepeaterType::Cumulate, 3, TimeUnit::Year)]
    #[case("<2024-01-15 Mon 08:00 +6h>", RepeaterType::Cumulate, 6, TimeUnit::Hour)]
    fn repeater_kinds(
        #[case] text: &str,
        #[case] kind: RepeaterType,
        #[case] value: u32,
        #[case] unit: TimeUnit,
    ) {
        let repeater = timestamp(text).repeater.expect("repeater");
        assert_eq!(repeater.repeater_type, kind);
        assert_eq!(repeater.value, value);
        assert_eq!(repeater.unit, unit);
    }

    #[test]
    fn warning_delay_after_repeater() {
        let ts = timestamp("<2024-01-15 Mon +1w -2d>");
        assert_eq!(
            ts.warning,
            Some(Warning {
                warning_type: WarningType::All,
                value: 2,
                unit: TimeUnit::Day,
            })
        );
        let ts = timestamp("<2024-01-15 Mon --1w>");
        assert_eq!(ts.warning.map(|w| w.warning_type), Some(WarningType::First));
    }

    #[rstest]
    #[case("<2024-13-01 Mon>")]
    #[case("<2024-01-32 Mon>")]
    #[case("<2024-01-15 Mon 24:00>")]
    #[case("<2024-01-15 Mon 10:60>")]
    #[case("<2024-01-15 Mon]")]
    #[case("<2024-1-15 Mon>")]
    fn invalid_timestamps_are_plain(#[case] text: &str) {
        let objects = parse_objects(text);
        assert!(objects.iter().all(|o| o.is_plain()), "{text}");
    }

    #[test]
    fn day_name_is_optional() {
        let ts = timestamp("<2024-01-15>");
        assert!(ts.start.day_name.is_none());
    }
}
