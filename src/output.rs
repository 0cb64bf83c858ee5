use std::io::Write;

use serde::Serialize;

use crate::error::{CalcError, Result};
use crate::history::{History, HistoryEntry};
use crate::session::{Inputs, Notification};
use crate::time::{Operation, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn parse(format: &str) -> Result<Self> {
        match format {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(CalcError::InvalidArg(format!(
                "Unknown output format: {other}"
            ))),
        }
    }
}

#[derive(Serialize)]
struct JsonCalculation {
    time1: TimeOfDay,
    time2: TimeOfDay,
    operation: Operation,
    result: TimeOfDay,
}

pub fn print_calculation(
    out: &mut impl Write,
    format: Format,
    time1: TimeOfDay,
    op: Operation,
    time2: TimeOfDay,
    result: TimeOfDay,
) -> Result<()> {
    match format {
        Format::Text => writeln!(out, "{result}")?,
        Format::Json => {
            let json = JsonCalculation {
                time1,
                time2,
                operation: op,
                result,
            };
            writeln!(out, "{}", serde_json::to_string(&json)?)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonNotification {
    notification: Notification,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<TimeOfDay>,
}

/// Prints a notification and, after a successful calculation, the result.
pub fn print_notification(
    out: &mut impl Write,
    format: Format,
    notification: Notification,
    result: Option<TimeOfDay>,
) -> Result<()> {
    let result = match notification {
        Notification::Success => result,
        Notification::InvalidInput => None,
    };
    match format {
        Format::Text => {
            writeln!(out, "{}", notification.message())?;
            if let Some(result) = result {
                writeln!(out, "= {result}")?;
            }
        }
        Format::Json => {
            let json = JsonNotification {
                notification,
                message: notification.message(),
                result,
            };
            writeln!(out, "{}", serde_json::to_string(&json)?)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonHistory<'a> {
    count: usize,
    history: &'a [HistoryEntry],
}

pub fn print_history(out: &mut impl Write, format: Format, history: &History) -> Result<()> {
    match format {
        Format::Text => {
            if history.is_empty() {
                writeln!(out, "(no history)")?;
            }
            for entry in history.entries() {
                writeln!(out, "[{}] {}", entry.id, entry.describe())?;
            }
        }
        Format::Json => {
            let json = JsonHistory {
                count: history.len(),
                history: history.entries(),
            };
            writeln!(out, "{}", serde_json::to_string(&json)?)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonState<'a> {
    inputs: &'a Inputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<TimeOfDay>,
}

pub fn print_state(
    out: &mut impl Write,
    format: Format,
    inputs: &Inputs,
    result: Option<TimeOfDay>,
) -> Result<()> {
    match format {
        Format::Text => {
            writeln!(
                out,
                "{}:{}  {}:{}",
                placeholder(&inputs.hours1),
                placeholder(&inputs.minutes1),
                placeholder(&inputs.hours2),
                placeholder(&inputs.minutes2)
            )?;
            if let Some(result) = result {
                writeln!(out, "= {result}")?;
            }
        }
        Format::Json => {
            let json = JsonState { inputs, result };
            writeln!(out, "{}", serde_json::to_string(&json)?)?;
        }
    }
    Ok(())
}

fn placeholder(value: &str) -> &str {
    if value.is_empty() { "--" } else { value }
}
