use serde::Serialize;
use tracing::debug;

use crate::error::{CalcError, INVALID_INPUT_MESSAGE, Result};
use crate::field::{self, Field};
use crate::history::{EntryId, History};
use crate::time::{Operation, TimeOfDay};

pub const SUCCESS_MESSAGE: &str = "calculation performed";

/// Raw contents of the four text inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inputs {
    pub hours1: String,
    pub minutes1: String,
    pub hours2: String,
    pub minutes2: String,
}

impl Inputs {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Hours1 => &self.hours1,
            Field::Minutes1 => &self.minutes1,
            Field::Hours2 => &self.hours2,
            Field::Minutes2 => &self.minutes2,
        }
    }

    fn with(&self, field: Field, value: &str) -> Self {
        let mut next = self.clone();
        let slot = match field {
            Field::Hours1 => &mut next.hours1,
            Field::Minutes1 => &mut next.minutes1,
            Field::Hours2 => &mut next.hours2,
            Field::Minutes2 => &mut next.minutes2,
        };
        *slot = value.to_string();
        next
    }

    fn time(&self, hours: Field, minutes: Field) -> Result<TimeOfDay> {
        let h = field::validate(self.get(hours), hours.max());
        let m = field::validate(self.get(minutes), minutes.max());
        match (h, m) {
            (Some(h), Some(m)) => TimeOfDay::new(h, m).ok_or(CalcError::InvalidInput),
            _ => Err(CalcError::InvalidInput),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Edit { field: Field, value: String },
    Calculate(Operation),
    Clear,
    RemoveHistory(EntryId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    Success,
    InvalidInput,
}

impl Notification {
    pub fn message(self) -> &'static str {
        match self {
            Notification::Success => SUCCESS_MESSAGE,
            Notification::InvalidInput => INVALID_INPUT_MESSAGE,
        }
    }
}

/// State of one calculator session; discarded when the session ends.
#[derive(Debug, Default)]
pub struct Session {
    inputs: Inputs,
    result: Option<TimeOfDay>,
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn result(&self) -> Option<TimeOfDay> {
        self.result
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Applies a keystroke edit; rejected edits leave the field untouched.
    pub fn edit(&mut self, field: Field, value: &str) -> bool {
        if !field::accept_edit(value, field.max()) {
            debug!(%field, value, "rejected edit");
            return false;
        }
        self.inputs = self.inputs.with(field, value);
        true
    }

    pub fn calculate(&mut self, op: Operation) -> Result<TimeOfDay> {
        let time1 = self.inputs.time(Field::Hours1, Field::Minutes1)?;
        let time2 = self.inputs.time(Field::Hours2, Field::Minutes2)?;
        let result = time1.apply(op, time2);
        let id = self.history.record(time1, time2, op, result);
        debug!(%time1, %op, %time2, %result, id, "calculated");
        self.result = Some(result);
        Ok(result)
    }

    /// Clears inputs and the current result; history is kept.
    pub fn reset(&mut self) {
        self.inputs = Inputs::default();
        self.result = None;
    }

    pub fn remove_history(&mut self, id: EntryId) -> bool {
        self.history.remove(id)
    }

    pub fn handle(&mut self, event: Event) -> Option<Notification> {
        match event {
            Event::Edit { field, value } => {
                self.edit(field, &value);
                None
            }
            Event::Calculate(op) => match self.calculate(op) {
                Ok(_) => Some(Notification::Success),
                Err(_) => Some(Notification::InvalidInput),
            },
            Event::Clear => {
                self.reset();
                None
            }
            Event::RemoveHistory(id) => {
                self.remove_history(id);
                None
            }
        }
    }
}
