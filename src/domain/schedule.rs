//! Lesson-plan slot allocator.
//!
//! Lays an ordered topic list across fixed 9:00–18:00 days. Each day gets one
//! 45-minute lunch; the last day ends with a contiguous assessment block.
//! Topics that hit a barrier (lunch, assessment start, day end) are split and
//! continued in the next slot. Pure: no I/O and no state between calls.

use crate::domain::{DomainError, Topic};
use serde::{Deserialize, Serialize};

/// 9:00 AM, in minutes from midnight.
pub const DAY_START: u32 = 9 * 60;
/// 6:00 PM.
pub const DAY_END: u32 = 18 * 60;
/// 12:30 PM.
pub const LUNCH_START: u32 = 12 * 60 + 30;
/// 1:15 PM.
pub const LUNCH_END: u32 = 13 * 60 + 15;
pub const LUNCH_MINUTES: u32 = LUNCH_END - LUNCH_START;
/// Shorter gaps before a barrier are not worth a topic session.
pub const MIN_SESSION_MINUTES: u32 = 15;
/// Course hours that make up one training day when deriving the day count.
pub const HOURS_PER_DAY: i64 = 8;

/// Duration totals for one allocation call. Supplied by the caller; the
/// allocator never derives these itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBudget {
    pub num_days: i64,
    pub instructional_minutes: i64,
    pub assessment_minutes: i64,
}

/// Budget after validation, in the allocator's unsigned minute domain.
#[derive(Debug, Clone, Copy)]
struct Limits {
    num_days: u32,
    per_topic: u32,
    assessment: u32,
}

impl ScheduleBudget {
    pub fn new(num_days: i64, instructional_minutes: i64, assessment_minutes: i64) -> Self {
        Self {
            num_days,
            instructional_minutes,
            assessment_minutes,
        }
    }

    /// Derive a budget from user-entered hour counts: `days = max(1, course_hours / 8)`.
    pub fn from_hours(
        course_hours: i64,
        instructional_hours: i64,
        assessment_hours: i64,
    ) -> Result<Self, DomainError> {
        let minutes = |hours: i64, what: &str| {
            hours.checked_mul(60).ok_or_else(|| {
                DomainError::InvalidScheduleInput(format!("{} hours out of range: {}", what, hours))
            })
        };
        Ok(Self {
            num_days: (course_hours / HOURS_PER_DAY).max(1),
            instructional_minutes: minutes(instructional_hours, "instructional")?,
            assessment_minutes: minutes(assessment_hours, "assessment")?,
        })
    }

    /// Floor share of instructional minutes per topic. Zero when there are no topics.
    pub fn per_topic_minutes(&self, topic_count: usize) -> i64 {
        match i64::try_from(topic_count) {
            Ok(n) if n > 0 => self.instructional_minutes / n,
            _ => 0,
        }
    }

    /// Instructional minutes dropped by the floor division in [`Self::per_topic_minutes`].
    pub fn unscheduled_remainder(&self, topic_count: usize) -> i64 {
        match i64::try_from(topic_count) {
            Ok(n) if n > 0 => self.instructional_minutes % n,
            _ => 0,
        }
    }

    /// Reject budgets that cannot be laid out.
    pub fn validate(&self, topic_count: usize) -> Result<(), DomainError> {
        self.limits(topic_count).map(|_| ())
    }

    fn limits(&self, topic_count: usize) -> Result<Limits, DomainError> {
        if self.num_days < 1 {
            return Err(DomainError::InvalidScheduleInput(format!(
                "day count must be at least 1, got {}",
                self.num_days
            )));
        }
        if self.instructional_minutes < 0 {
            return Err(DomainError::InvalidScheduleInput(format!(
                "instructional minutes must not be negative, got {}",
                self.instructional_minutes
            )));
        }
        if self.assessment_minutes < 0 {
            return Err(DomainError::InvalidScheduleInput(format!(
                "assessment minutes must not be negative, got {}",
                self.assessment_minutes
            )));
        }
        // Lunch is never split, so the assessment block must fit after it.
        let max_assessment = i64::from(DAY_END - LUNCH_END);
        if self.assessment_minutes > max_assessment {
            return Err(DomainError::InvalidScheduleInput(format!(
                "assessment block of {} minutes does not fit after lunch (max {})",
                self.assessment_minutes, max_assessment
            )));
        }
        let per_topic = self.per_topic_minutes(topic_count);
        if topic_count > 0 && per_topic == 0 {
            return Err(DomainError::InvalidScheduleInput(format!(
                "{} instructional minutes cannot be shared across {} topics",
                self.instructional_minutes, topic_count
            )));
        }
        let to_u32 = |v: i64, what: &str| {
            u32::try_from(v).map_err(|_| {
                DomainError::InvalidScheduleInput(format!("{} out of range: {}", what, v))
            })
        };
        Ok(Limits {
            num_days: to_u32(self.num_days, "day count")?,
            per_topic: to_u32(per_topic, "per-topic minutes")?,
            assessment: to_u32(self.assessment_minutes, "assessment minutes")?,
        })
    }
}

/// What occupies a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotKind {
    Topic {
        /// 1-based position in the topic list.
        number: usize,
        name: String,
        /// True for the second and later pieces of a split topic.
        continued: bool,
    },
    Lunch,
    Break,
    Assessment {
        methods: Vec<String>,
    },
}

/// One contiguous block of a day, `[start, end)` in minutes from midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: u32,
    pub end: u32,
    pub kind: SlotKind,
    /// Instructional-method annotation; topic slots only.
    pub methods: Option<String>,
}

impl Slot {
    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// `H:MM AM – H:MM PM`, en-dash separated.
    pub fn time_range(&self) -> String {
        format!("{} \u{2013} {}", format_clock(self.start), format_clock(self.end))
    }

    pub fn duration_label(&self) -> String {
        format!("{} mins", self.duration_minutes())
    }

    pub fn description(&self) -> String {
        match &self.kind {
            SlotKind::Topic {
                number,
                name,
                continued,
            } => {
                if *continued {
                    format!("T{}: {} (Cont'd)", number, name)
                } else {
                    format!("T{}: {}", number, name)
                }
            }
            SlotKind::Lunch => "Lunch Break".to_string(),
            SlotKind::Break => "Break".to_string(),
            SlotKind::Assessment { methods } if methods.is_empty() => "Assessment".to_string(),
            SlotKind::Assessment { methods } => format!("Assessment: {}", methods.join(", ")),
        }
    }

    pub fn is_lunch(&self) -> bool {
        matches!(self.kind, SlotKind::Lunch)
    }

    pub fn is_assessment(&self) -> bool {
        matches!(self.kind, SlotKind::Assessment { .. })
    }
}

/// Slots for one training day, in time order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// 1-based, contiguous from 1.
    pub day: u32,
    pub slots: Vec<Slot>,
}

impl DaySchedule {
    pub fn total_minutes(&self) -> u32 {
        self.slots.iter().map(Slot::duration_minutes).sum()
    }
}

/// Format minutes from midnight as a 12-hour clock: 540 -> `9:00 AM`, 795 -> `1:15 PM`.
pub fn format_clock(minutes: u32) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    let suffix = if h % 24 < 12 { "AM" } else { "PM" };
    let h12 = match h % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", h12, m, suffix)
}

/// Builds one day left to right.
struct DayBuilder {
    current: u32,
    lunch_done: bool,
    slots: Vec<Slot>,
}

impl DayBuilder {
    fn new() -> Self {
        Self {
            current: DAY_START,
            lunch_done: false,
            slots: Vec::new(),
        }
    }

    fn push(&mut self, end: u32, kind: SlotKind, methods: Option<String>) {
        self.slots.push(Slot {
            start: self.current,
            end,
            kind,
            methods,
        });
        self.current = end;
    }

    fn fill_break_until(&mut self, end: u32) {
        if self.current < end {
            self.push(end, SlotKind::Break, None);
        }
        self.current = self.current.max(end);
    }

    /// Lunch always runs a full 45 minutes from the current time.
    fn place_lunch(&mut self) {
        self.push(self.current + LUNCH_MINUTES, SlotKind::Lunch, None);
        self.lunch_done = true;
    }
}

/// Where the allocator is in the topic list across days.
#[derive(Debug, Default)]
struct TopicCursor {
    index: usize,
    /// Minutes of the current topic already placed by earlier pieces.
    carried: u32,
}

/// Allocate `topics` into per-day slot lists.
///
/// Every topic receives `instructional_minutes / topic_count` minutes (floor);
/// the remainder is not scheduled. Topics still unplaced when the last day
/// runs out are dropped. Lunch appears exactly once per day, and when
/// `assessment_minutes > 0` the last day ends with
/// `[DAY_END - assessment_minutes, DAY_END)`.
pub fn allocate(
    topics: &[Topic],
    budget: &ScheduleBudget,
    instructional_methods: &[String],
    assessment_methods: &[String],
) -> Result<Vec<DaySchedule>, DomainError> {
    let limits = budget.limits(topics.len())?;
    let methods = (!instructional_methods.is_empty()).then(|| instructional_methods.join(", "));
    let assessment_start = DAY_END - limits.assessment;

    let mut cursor = TopicCursor::default();
    let mut days = Vec::with_capacity(limits.num_days as usize);

    for day in 1..=limits.num_days {
        let is_last_day = day == limits.num_days;
        let mut b = DayBuilder::new();

        while cursor.index < topics.len() {
            if !b.lunch_done && b.current >= LUNCH_START {
                b.place_lunch();
                continue;
            }
            if (is_last_day && b.current >= assessment_start) || b.current >= DAY_END {
                break;
            }

            let barrier = if !b.lunch_done {
                LUNCH_START
            } else if is_last_day {
                assessment_start
            } else {
                DAY_END
            };
            let available = barrier - b.current;

            if available < MIN_SESSION_MINUTES {
                if barrier == LUNCH_START {
                    // Start lunch early instead of leaving a stub before it.
                    b.place_lunch();
                } else {
                    b.fill_break_until(barrier);
                }
                continue;
            }

            let kind = SlotKind::Topic {
                number: cursor.index + 1,
                name: topics[cursor.index].name.clone(),
                continued: cursor.carried > 0,
            };
            let remaining = limits.per_topic - cursor.carried;

            if remaining <= available {
                b.push(b.current + remaining, kind, methods.clone());
                cursor.carried = 0;
                cursor.index += 1;
            } else {
                b.push(barrier, kind, methods.clone());
                cursor.carried += available;
            }
        }

        if !b.lunch_done {
            b.fill_break_until(LUNCH_START);
            b.place_lunch();
        }

        if is_last_day && limits.assessment > 0 {
            b.fill_break_until(assessment_start);
            b.push(
                DAY_END,
                SlotKind::Assessment {
                    methods: assessment_methods.to_vec(),
                },
                None,
            );
        }

        days.push(DaySchedule {
            day,
            slots: b.slots,
        });
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(names: &[&str]) -> Vec<Topic> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Topic::new(i + 1, *n))
            .collect()
    }

    fn spans(day: &DaySchedule) -> Vec<(u32, u32, String)> {
        day.slots
            .iter()
            .map(|s| (s.start, s.end, s.description()))
            .collect()
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(540), "9:00 AM");
        assert_eq!(format_clock(750), "12:30 PM");
        assert_eq!(format_clock(795), "1:15 PM");
        assert_eq!(format_clock(1080), "6:00 PM");
        assert_eq!(format_clock(0), "12:00 AM");
        assert_eq!(format_clock(605), "10:05 AM");
    }

    #[test]
    fn test_time_range_uses_en_dash() {
        let slot = Slot {
            start: 795,
            end: 1005,
            kind: SlotKind::Break,
            methods: None,
        };
        assert_eq!(slot.time_range(), "1:15 PM \u{2013} 4:45 PM");
        assert_eq!(slot.duration_label(), "210 mins");
    }

    #[test]
    fn test_from_hours_derives_days() {
        let b = ScheduleBudget::from_hours(16, 14, 2).unwrap();
        assert_eq!(b, ScheduleBudget::new(2, 840, 120));
        assert_eq!(ScheduleBudget::from_hours(4, 3, 1).unwrap().num_days, 1);
        assert_eq!(ScheduleBudget::from_hours(23, 20, 3).unwrap().num_days, 2);
    }

    #[test]
    fn test_from_hours_rejects_overflowing_hours() {
        for (instructional, assessment) in [(i64::MAX / 2, 2), (14, i64::MIN / 2)] {
            assert!(matches!(
                ScheduleBudget::from_hours(16, instructional, assessment),
                Err(DomainError::InvalidScheduleInput(_))
            ));
        }
    }

    #[test]
    fn test_floor_remainder_is_reported() {
        let b = ScheduleBudget::new(1, 100, 0);
        assert_eq!(b.per_topic_minutes(3), 33);
        assert_eq!(b.unscheduled_remainder(3), 1);
        assert_eq!(b.per_topic_minutes(0), 0);
    }

    #[test]
    fn test_rejects_invalid_budgets() {
        let t = topics(&["A"]);
        for budget in [
            ScheduleBudget::new(0, 60, 0),
            ScheduleBudget::new(-1, 60, 0),
            ScheduleBudget::new(1, -5, 0),
            ScheduleBudget::new(1, 60, -1),
            ScheduleBudget::new(1, 60, 300),
            ScheduleBudget::new(1, 0, 0),
        ] {
            let err = allocate(&t, &budget, &[], &[]).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidScheduleInput(_)),
                "{:?} -> {:?}",
                budget,
                err
            );
        }
    }

    #[test]
    fn test_zero_budget_without_topics_is_valid() {
        let days = allocate(&[], &ScheduleBudget::new(1, 0, 0), &[], &[]).unwrap();
        assert_eq!(
            spans(&days[0]),
            vec![
                (540, 750, "Break".to_string()),
                (750, 795, "Lunch Break".to_string()),
            ]
        );
    }

    #[test]
    fn test_lunch_pulled_forward_when_gap_is_short() {
        // 200-minute topics: first ends at 12:20, leaving 10 minutes before lunch.
        let days = allocate(&topics(&["A", "B"]), &ScheduleBudget::new(1, 400, 0), &[], &[])
            .unwrap();
        assert_eq!(
            spans(&days[0]),
            vec![
                (540, 740, "T1: A".to_string()),
                (740, 785, "Lunch Break".to_string()),
                (785, 985, "T2: B".to_string()),
            ]
        );
    }

    #[test]
    fn test_short_gap_before_day_end_becomes_break() {
        let days = allocate(
            &topics(&["A", "B", "C", "D"]),
            &ScheduleBudget::new(2, 648, 0),
            &[],
            &[],
        )
        .unwrap();
        assert_eq!(
            spans(&days[0]),
            vec![
                (540, 702, "T1: A".to_string()),
                (702, 750, "T2: B".to_string()),
                (750, 795, "Lunch Break".to_string()),
                (795, 909, "T2: B (Cont'd)".to_string()),
                (909, 1071, "T3: C".to_string()),
                (1071, 1080, "Break".to_string()),
            ]
        );
        assert_eq!(
            spans(&days[1]),
            vec![
                (540, 702, "T4: D".to_string()),
                (702, 750, "Break".to_string()),
                (750, 795, "Lunch Break".to_string()),
            ]
        );
    }

    #[test]
    fn test_methods_annotate_topic_slots_only() {
        let methods = vec!["Case studies".to_string(), "Discussions".to_string()];
        let days = allocate(
            &topics(&["A"]),
            &ScheduleBudget::new(1, 60, 60),
            &methods,
            &["Written Exam".to_string()],
        )
        .unwrap();
        let slots = &days[0].slots;
        assert_eq!(slots[0].methods.as_deref(), Some("Case studies, Discussions"));
        assert!(slots[1..].iter().all(|s| s.methods.is_none()));
        assert_eq!(
            slots.last().map(Slot::description).as_deref(),
            Some("Assessment: Written Exam")
        );
    }
}
