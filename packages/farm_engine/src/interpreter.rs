use crate::{report::HidReport, script::Script};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cursor {
    pub index: usize,
    pub elapsed: u32,
}

impl Cursor {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    Running,
    Completed,
}

/// Advances `script` by one poll.
///
/// The report is recentered before the current command's action is applied,
/// so it never carries state from an earlier command. On the completion tick
/// the cursor rewinds and the report goes back to neutral.
pub fn step(script: Script, cursor: &mut Cursor, report: &mut HidReport) -> StepOutcome {
    report.reset();

    let Some(command) = script.get(cursor.index) else {
        cursor.reset();
        return StepOutcome::Completed;
    };

    command.action.apply(report);
    cursor.elapsed += 1;

    if cursor.elapsed > u32::from(command.ticks) {
        cursor.index += 1;
        cursor.elapsed = 0;
    }

    if cursor.index >= script.len() {
        cursor.reset();
        report.reset();
        return StepOutcome::Completed;
    }

    StepOutcome::Running
}
