//! Structured repeat descriptions for indicator rendering.
//!
//! The returned triple is the contract; label wording belongs to the caller
//! and is supplied through [`RepeatLabels`].

use cadence_core::config::LabelSet;
use cadence_core::types::Frequency;
use serde::Serialize;

use crate::event::EventRecord;

/// What a UI needs to show a repeat indicator for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatDisplay {
    pub is_repeating: bool,
    pub display_text: String,
    pub should_show_indicator: bool,
}

impl RepeatDisplay {
    /// Description of a standalone record: no text, no indicator.
    #[must_use]
    pub const fn standalone() -> Self {
        Self {
            is_repeating: false,
            display_text: String::new(),
            should_show_indicator: false,
        }
    }
}

/// Wording for repeat descriptions.
pub trait RepeatLabels {
    /// Unit label for one period of `frequency`.
    fn unit(&self, frequency: Frequency) -> &'static str;

    /// Joins an interval and a unit label into display text.
    fn compose(&self, interval: u32, unit: &str) -> String;
}

/// `"2주마다"`-style labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct KoreanLabels;

impl RepeatLabels for KoreanLabels {
    fn unit(&self, frequency: Frequency) -> &'static str {
        match frequency {
            Frequency::Daily => "일",
            Frequency::Weekly => "주",
            Frequency::Monthly => "월",
            Frequency::Yearly => "년",
        }
    }

    fn compose(&self, interval: u32, unit: &str) -> String {
        format!("{interval}{unit}마다")
    }
}

/// `"every 2 weeks"`-style labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl RepeatLabels for EnglishLabels {
    fn unit(&self, frequency: Frequency) -> &'static str {
        match frequency {
            Frequency::Daily => "day",
            Frequency::Weekly => "week",
            Frequency::Monthly => "month",
            Frequency::Yearly => "year",
        }
    }

    fn compose(&self, interval: u32, unit: &str) -> String {
        if interval == 1 {
            format!("every {unit}")
        } else {
            format!("every {interval} {unit}s")
        }
    }
}

/// Describes the record's repeat settings with Korean labels.
#[must_use]
pub fn describe_repeat(record: &EventRecord) -> RepeatDisplay {
    describe_repeat_with(record, &KoreanLabels)
}

/// Describes the record's repeat settings with the configured label set.
#[must_use]
pub fn describe_repeat_for(record: &EventRecord, labels: LabelSet) -> RepeatDisplay {
    match labels {
        LabelSet::Korean => describe_repeat_with(record, &KoreanLabels),
        LabelSet::English => describe_repeat_with(record, &EnglishLabels),
    }
}

/// Describes the record's repeat settings with caller-supplied labels.
#[must_use]
pub fn describe_repeat_with(record: &EventRecord, labels: &impl RepeatLabels) -> RepeatDisplay {
    let Some(frequency) = record.repeat.repeat_type.frequency() else {
        return RepeatDisplay::standalone();
    };

    RepeatDisplay {
        is_repeating: true,
        display_text: labels.compose(record.repeat.interval, labels.unit(frequency)),
        should_show_indicator: true,
    }
}
