//! Capabilities the engine calls but does not implement
//!
//! The current date and the answers to interactive questions are supplied by the
//! caller. The terminal implementations live in [`crate::ui`]; [`FixedClock`]
//! and [`ScriptedAnswers`] give deterministic answers for tests and for
//! non-interactive runs.

use crate::error::{ReleaseError, Result};
use chrono::{Datelike, Local, NaiveDate};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Source of "today"
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Yes/no question answered outside the engine
pub trait Confirm: Send + Sync {
    fn ask(&self, prompt: &str) -> Result<bool>;
}

/// Numeric question answered outside the engine
pub trait Prompt: Send + Sync {
    fn ask_int(&self, prompt: &str) -> Result<u32>;
}

/// The capabilities needed by release operations that may ask questions
#[derive(Clone, Copy)]
pub struct Interaction<'a> {
    pub clock: &'a dyn Clock,
    pub confirm: &'a dyn Confirm,
    pub prompt: &'a dyn Prompt,
}

impl<'a> Interaction<'a> {
    pub fn new(clock: &'a dyn Clock, confirm: &'a dyn Confirm, prompt: &'a dyn Prompt) -> Self {
        Interaction {
            clock,
            confirm,
            prompt,
        }
    }

    /// Whether the clock currently reads December
    pub fn is_december(&self) -> bool {
        self.clock.today().month() == 12
    }
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Clock for `year-month-day`, or `None` if that date does not exist
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Pre-recorded answers consumed in order
///
/// Running out of answers is an [`ReleaseError::Interaction`] error, so a
/// question nobody expected fails loudly instead of defaulting.
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    confirmations: Mutex<VecDeque<bool>>,
    numbers: Mutex<VecDeque<u32>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedAnswers {
    pub fn new() -> Self {
        ScriptedAnswers::default()
    }

    /// Queue an answer for the next yes/no question
    pub fn confirm(self, answer: bool) -> Self {
        if let Ok(mut queue) = self.confirmations.lock() {
            queue.push_back(answer);
        }
        self
    }

    /// Queue an answer for the next numeric question
    pub fn number(self, answer: u32) -> Self {
        if let Ok(mut queue) = self.numbers.lock() {
            queue.push_back(answer);
        }
        self
    }

    /// Prompts asked so far, in order
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }

    fn record(&self, prompt: &str) -> Result<()> {
        self.asked
            .lock()
            .map_err(|_| ReleaseError::interaction("answer log poisoned"))?
            .push(prompt.to_string());
        Ok(())
    }
}

impl Confirm for ScriptedAnswers {
    fn ask(&self, prompt: &str) -> Result<bool> {
        self.record(prompt)?;
        self.confirmations
            .lock()
            .map_err(|_| ReleaseError::interaction("answer queue poisoned"))?
            .pop_front()
            .ok_or_else(|| ReleaseError::interaction(format!("no answer for '{}'", prompt)))
    }
}

impl Prompt for ScriptedAnswers {
    fn ask_int(&self, prompt: &str) -> Result<u32> {
        self.record(prompt)?;
        self.numbers
            .lock()
            .map_err(|_| ReleaseError::interaction("answer queue poisoned"))?
            .pop_front()
            .ok_or_else(|| ReleaseError::interaction(format!("no answer for '{}'", prompt)))
    }
}
