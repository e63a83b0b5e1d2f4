//! Occurrence expansion for recurrence rules.
//!
//! Every candidate is computed from the anchor and a step counter rather than
//! from the previously emitted date: the k-th monthly candidate is
//! `anchor month + k * interval` with the anchor's own day re-applied, so a
//! February clamp never carries over to later months.

use std::iter::FusedIterator;

use cadence_core::types::Frequency;
use chrono::Datelike;

use crate::date::CalendarDate;
use crate::error::RecurResult;
use crate::rule::{RecurrenceRule, RuleInput};

/// Result of resolving one step of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate {
    Date(CalendarDate),
    /// The period lacks the anchor day and the policy skips it.
    Skipped { period_start: CalendarDate },
    /// The step lands outside the representable date range.
    OutOfRange,
}

/// Lazy, ordered iterator over the occurrences of a [`RecurrenceRule`].
#[derive(Debug, Clone)]
pub struct Occurrences {
    rule: RecurrenceRule,
    step: u64,
    done: bool,
}

impl Occurrences {
    #[must_use]
    pub fn new(rule: RecurrenceRule) -> Self {
        Self {
            done: rule.anchor() > rule.end(),
            rule,
            step: 0,
        }
    }

    fn candidate(&self, step: u64) -> Candidate {
        let rule = &self.rule;
        let Some(periods) = step.checked_mul(u64::from(rule.interval())) else {
            return Candidate::OutOfRange;
        };

        match rule.frequency() {
            Frequency::Daily => offset_days(rule.anchor(), periods),
            Frequency::Weekly => periods
                .checked_mul(7)
                .map_or(Candidate::OutOfRange, |days| {
                    offset_days(rule.anchor(), days)
                }),
            Frequency::Monthly => {
                let Ok(months) = i64::try_from(periods) else {
                    return Candidate::OutOfRange;
                };
                let anchor = rule.anchor();
                let index = i64::from(anchor.as_naive().month0()) + months;
                let year = i64::from(anchor.year()) + index.div_euclid(12);
                let (Ok(year), Ok(month0)) =
                    (i32::try_from(year), u32::try_from(index.rem_euclid(12)))
                else {
                    return Candidate::OutOfRange;
                };
                self.resolve(year, month0 + 1)
            }
            Frequency::Yearly => {
                let anchor = rule.anchor();
                let year = i64::try_from(periods)
                    .ok()
                    .and_then(|years| i64::from(anchor.year()).checked_add(years))
                    .and_then(|year| i32::try_from(year).ok());
                year.map_or(Candidate::OutOfRange, |year| {
                    self.resolve(year, anchor.month())
                })
            }
        }
    }

    /// Places the anchor's day in (`year`, `month`), applying the short-month policy.
    fn resolve(&self, year: i32, month: u32) -> Candidate {
        let Some(period_start) = CalendarDate::new(year, month, 1) else {
            return Candidate::OutOfRange;
        };
        let day = self.rule.anchor().day();
        let last = period_start.days_in_month();

        if day > last && !self.rule.short_month().clamps(self.rule.frequency(), day) {
            return Candidate::Skipped { period_start };
        }
        CalendarDate::new(year, month, day.min(last)).map_or(Candidate::OutOfRange, Candidate::Date)
    }
}

fn offset_days(anchor: CalendarDate, days: u64) -> Candidate {
    anchor
        .checked_add_days(days)
        .map_or(Candidate::OutOfRange, Candidate::Date)
}

impl Iterator for Occurrences {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let candidate = self.candidate(self.step);
            self.step = self.step.saturating_add(1);

            match candidate {
                Candidate::Date(date) if date <= self.rule.end() => return Some(date),
                Candidate::Skipped { period_start } if period_start <= self.rule.end() => {
                    tracing::trace!(period = %period_start, "Period lacks anchor day, skipping");
                }
                _ => self.done = true,
            }
        }
        None
    }
}

impl FusedIterator for Occurrences {}

impl RecurrenceRule {
    #[must_use]
    pub fn occurrences(&self) -> Occurrences {
        Occurrences::new(*self)
    }

    /// ## Summary
    /// Expands the rule into every occurrence from the anchor through the end date, inclusive.
    #[must_use]
    pub fn expand(&self) -> Vec<CalendarDate> {
        tracing::debug!(
            anchor = %self.anchor(),
            end = %self.end(),
            frequency = %self.frequency(),
            interval = self.interval(),
            "Expanding recurrence rule"
        );
        let dates: Vec<CalendarDate> = self.occurrences().collect();
        tracing::trace!(count = dates.len(), "Expanded recurrence rule");
        dates
    }
}

/// ## Summary
/// Generates the ordered occurrence dates of a rule input.
///
/// Returns an empty list when the start date is after the end date.
///
/// ## Errors
/// - `InvalidDateFormat` if `date` or `endDate` cannot be parsed
/// - `NotRecurring` if `repeatType` is `none`
/// - `InvalidInterval` if `interval` is zero
pub fn generate(input: &RuleInput) -> RecurResult<Vec<CalendarDate>> {
    Ok(input.to_rule()?.expand())
}

/// ## Summary
/// Same as [`generate`], with each date in canonical `YYYY-MM-DD` form.
///
/// ## Errors
/// See [`generate`].
pub fn generate_strings(input: &RuleInput) -> RecurResult<Vec<String>> {
    Ok(generate(input)?
        .into_iter()
        .map(String::from)
        .collect())
}
