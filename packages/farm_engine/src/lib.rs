//! Scripted controller automation: turns the compiled watt-farming macro into
//! one HID input report per host poll.
//!
//! The poll path is allocation free and never blocks. [`ReportDriver`] owns
//! the whole automation state; callers keep exactly one per emulated pad.

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod driver;
pub mod echo;
pub mod engine;
pub mod interpreter;
pub mod phase;
pub mod program;
pub mod report;
pub mod script;
pub mod status;
pub mod trace;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use driver::{DriverStats, ReportDriver};
pub use echo::{EchoScheduler, ECHOES};
pub use engine::AutomationEngine;
pub use interpreter::{step, Cursor, StepOutcome};
pub use phase::{is_year_rollover, next_phase, Phase};
pub use program::active_program;
pub use report::{Buttons, Hat, HidReport, REPORT_LEN, STICK_CENTER, STICK_MAX, STICK_MIN};
pub use script::{Command, MacroProgram, Script, ScriptSet};
pub use status::AutomationStatus;
pub use trace::{TransitionRecord, TransitionTrace, TRANSITION_TRACE_LEN};
