//! iCalendar export for a study schedule.

use chrono::{DateTime, Duration, Utc};

use crate::coaching::schedule::StudyWeek;

const DEFAULT_TASK_TITLE: &str = "Study Session";
const DEFAULT_TASK_DESCRIPTION: &str = "Complete your study task";
/// Offsets outside this many days are clamped.
const MAX_DAY_OFFSET: i64 = 3650;

/// Renders one all-morning event per task, each with a 30-minute reminder.
///
/// `now` anchors day offsets and the DTSTAMP; tasks without an offset are spread
/// two days apart by their position in the plan.
pub fn render_ics(weeks: &[StudyWeek], now: DateTime<Utc>) -> String {
    let mut lines: Vec<String> = [
        "BEGIN:VCALENDAR",
        "VERSION:2.0",
        "PRODID:-//CareerCoach//Study Planner//EN",
        "CALSCALE:GREGORIAN",
        "METHOD:PUBLISH",
    ]
    .map(String::from)
    .to_vec();

    let dtstamp = now.format("%Y%m%dT%H%M%SZ").to_string();
    let tasks = weeks.iter().flat_map(|week| week.tasks.iter());
    for (uid, task) in (1i64..).zip(tasks) {
        let offset = task
            .day_offset
            .unwrap_or(uid * 2)
            .clamp(-MAX_DAY_OFFSET, MAX_DAY_OFFSET);
        let start = now
            .checked_add_signed(Duration::days(offset))
            .unwrap_or(now);
        let end = start + Duration::hours(2);
        let title = escape_text(task.title.as_deref().unwrap_or(DEFAULT_TASK_TITLE));
        let description =
            escape_text(task.description.as_deref().unwrap_or(DEFAULT_TASK_DESCRIPTION));

        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:{uid}-career-coach@calendar"),
            format!("DTSTAMP:{dtstamp}"),
            format!("DTSTART:{}", start.format("%Y%m%dT090000Z")),
            format!("DTEND:{}", end.format("%Y%m%dT110000Z")),
            format!("SUMMARY:CareerCoach - {title}"),
            format!("DESCRIPTION:{description}"),
            "BEGIN:VALARM".to_string(),
            "TRIGGER:-PT30M".to_string(),
            "ACTION:DISPLAY".to_string(),
            format!("DESCRIPTION:Reminder: {title}"),
            "END:VALARM".to_string(),
            "END:VEVENT".to_string(),
        ]);
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\r\n")
}

/// RFC 5545 TEXT escaping; model output may contain commas and newlines.
fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coaching::schedule::{fallback_schedule, StudyTask};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 14, 5, 9).unwrap()
    }

    #[test]
    fn test_empty_schedule_is_bare_calendar() {
        let ics = render_ics(&[], fixed_now());
        assert_eq!(
            ics,
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//CareerCoach//Study Planner//EN\r\n\
             CALSCALE:GREGORIAN\r\nMETHOD:PUBLISH\r\nEND:VCALENDAR"
        );
    }

    #[test]
    fn test_fallback_schedule_renders_four_events() {
        let schedule = fallback_schedule("Data Scientist", &["pandas"]);
        let ics = render_ics(&schedule.weeks, fixed_now());
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 4);
        assert_eq!(ics.matches("TRIGGER:-PT30M").count(), 4);
        assert!(ics.contains("UID:1-career-coach@calendar"));
        assert!(ics.contains("UID:4-career-coach@calendar"));
        assert!(ics.contains("DTSTAMP:20250310T140509Z"));
        // Week 1 offset is 1 day; week 4 is 22 days.
        assert!(ics.contains("DTSTART:20250311T090000Z"));
        assert!(ics.contains("DTEND:20250311T110000Z"));
        assert!(ics.contains("DTSTART:20250401T090000Z"));
        assert!(ics.contains("SUMMARY:CareerCoach - Study pandas"));
        assert!(ics.contains("DESCRIPTION:Reminder: Study core skills"));
        assert!(ics.ends_with("END:VCALENDAR"));
        assert!(!ics.contains("\n\n"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let weeks = vec![StudyWeek {
            tasks: vec![StudyTask::default(), StudyTask::default()],
            ..Default::default()
        }];
        let ics = render_ics(&weeks, fixed_now());
        // Counter-based offsets: 2 and 4 days.
        assert!(ics.contains("DTSTART:20250312T090000Z"));
        assert!(ics.contains("DTSTART:20250314T090000Z"));
        assert!(ics.contains("SUMMARY:CareerCoach - Study Session"));
        assert!(ics.contains("DESCRIPTION:Complete your study task"));
    }

    #[test]
    fn test_text_is_escaped() {
        let weeks = vec![StudyWeek {
            tasks: vec![StudyTask {
                title: Some("SQL, joins; windows".to_string()),
                description: Some("line one\nline two".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }];
        let ics = render_ics(&weeks, fixed_now());
        assert!(ics.contains("SUMMARY:CareerCoach - SQL\\, joins\\; windows"));
        assert!(ics.contains("DESCRIPTION:line one\\nline two"));
    }

    #[test]
    fn test_absurd_offsets_are_clamped() {
        let weeks = vec![StudyWeek {
            tasks: vec![StudyTask {
                day_offset: Some(i64::MAX),
                ..Default::default()
            }],
            ..Default::default()
        }];
        let ics = render_ics(&weeks, fixed_now());
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    }
}
