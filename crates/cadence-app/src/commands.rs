//! Subcommand implementations.
//!
//! Each command turns its input into the text printed on stdout. File reading
//! happens in [`run`]; the `*_json` functions work on already-read text.

use std::path::Path;

use cadence_core::config::Settings;
use cadence_recur::{CalendarDate, RecurrenceRule, RuleInput, ShortMonth};
use cadence_service::{
    EventRecord, delete_occurrence, describe_repeat_for, detach_occurrence, event_rule,
    materialize_series,
};
use serde::de::DeserializeOwned;

use crate::cli::{Command, GenerateArgs};
use crate::error::{AppError, AppResult};

/// ## Summary
/// Runs one subcommand and returns its output.
///
/// ## Errors
/// Returns an error if an input file cannot be read or parsed, the rule or
/// event is invalid, or the expansion exceeds `generation.max_occurrences`.
pub fn run(command: &Command, settings: &Settings) -> AppResult<String> {
    match command {
        Command::Generate(args) => generate(args, settings),
        Command::Expand(args) => expand_json(&read(&args.event)?, settings),
        Command::Describe(args) => describe_json(&read(&args.event)?, settings),
        Command::Detach(args) => detach_json(&read(&args.event)?, &args.date),
        Command::Delete(args) => delete_json(&read(&args.events)?, &args.id),
    }
}

fn read(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: DeserializeOwned>(text: &str) -> AppResult<T> {
    Ok(serde_json::from_str(text)?)
}

/// Expands `rule`, stopping as soon as the configured cap is exceeded.
fn capped_dates(rule: &RecurrenceRule, settings: &Settings) -> AppResult<Vec<CalendarDate>> {
    let Some(max) = settings.generation.max_occurrences else {
        return Ok(rule.expand());
    };

    let dates: Vec<CalendarDate> = rule.occurrences().take(max.saturating_add(1)).collect();
    if settings.generation.allows(dates.len()) {
        Ok(dates)
    } else {
        Err(AppError::TooManyOccurrences { max })
    }
}

/// ## Summary
/// Expands the rule given on the command line.
///
/// ## Errors
/// Returns an error for an invalid rule or when the configured cap is exceeded.
pub fn generate(args: &GenerateArgs, settings: &Settings) -> AppResult<String> {
    let input = RuleInput::new(
        args.date.as_str(),
        args.repeat_type,
        args.interval,
        args.end_date.as_str(),
    );
    let rule = input
        .to_rule()?
        .with_short_month(ShortMonth::from(args.short_month));
    let dates: Vec<String> = capped_dates(&rule, settings)?
        .into_iter()
        .map(String::from)
        .collect();
    if args.json {
        Ok(serde_json::to_string(&dates)?)
    } else {
        Ok(dates.join("\n"))
    }
}

/// ## Summary
/// Expands a recurring event into its series, as pretty JSON.
///
/// ## Errors
/// Returns an error for invalid JSON, a non-expandable event, or when the cap is exceeded.
pub fn expand_json(event: &str, settings: &Settings) -> AppResult<String> {
    let base: EventRecord = parse(event)?;
    let dates = capped_dates(&event_rule(&base)?, settings)?;
    Ok(serde_json::to_string_pretty(&materialize_series(&base, &dates))?)
}

/// ## Summary
/// Describes an event's repeat settings with the configured labels.
///
/// ## Errors
/// Returns an error for invalid JSON.
pub fn describe_json(event: &str, settings: &Settings) -> AppResult<String> {
    let record: EventRecord = parse(event)?;
    let display = describe_repeat_for(&record, settings.display.labels);
    Ok(serde_json::to_string_pretty(&display)?)
}

/// ## Summary
/// Detaches the occurrence on `date` from an event.
///
/// ## Errors
/// Returns an error for invalid JSON or an invalid date.
pub fn detach_json(event: &str, date: &str) -> AppResult<String> {
    let record: EventRecord = parse(event)?;
    let detached = detach_occurrence(&record, CalendarDate::parse(date)?);
    Ok(serde_json::to_string_pretty(&detached)?)
}

/// ## Summary
/// Removes the record with `id` from a JSON list of events.
///
/// ## Errors
/// Returns an error for invalid JSON.
pub fn delete_json(events: &str, id: &str) -> AppResult<String> {
    let records: Vec<EventRecord> = parse(events)?;
    Ok(serde_json::to_string_pretty(&delete_occurrence(&records, id))?)
}
