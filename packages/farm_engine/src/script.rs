use crate::{action::Action, phase::Phase};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Command {
    pub action: Action,
    /// Extra polls the action stays asserted; a command lasts `ticks + 1`
    /// polls.
    pub ticks: u16,
}

impl Command {
    pub const fn new(action: Action, ticks: u16) -> Self {
        Self { action, ticks }
    }

    pub const fn polls(self) -> u32 {
        self.ticks as u32 + 1
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Script {
    commands: &'static [Command],
}

impl Script {
    pub const fn new(commands: &'static [Command]) -> Self {
        Self { commands }
    }

    pub const fn commands(self) -> &'static [Command] {
        self.commands
    }

    pub const fn len(self) -> usize {
        self.commands.len()
    }

    pub const fn is_empty(self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(self, index: usize) -> Option<Command> {
        self.commands.get(index).copied()
    }

    /// Engine ticks needed to run the script once, completion tick included.
    pub fn total_ticks(self) -> u32 {
        self.commands.iter().map(|command| command.polls()).sum()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ScriptSet {
    pub wake_up: Script,
    pub start_farm: Script,
    pub open_settings: Script,
    pub change_month: Script,
    pub change_year: Script,
    pub reset_target: Script,
    pub take_reward: Script,
}

impl ScriptSet {
    pub const fn script_for(&self, phase: Phase) -> Option<Script> {
        match phase {
            Phase::Breathe => Some(self.wake_up),
            Phase::StartFarm => Some(self.start_farm),
            Phase::OpenSettings => Some(self.open_settings),
            Phase::ChangeMonth => Some(self.change_month),
            Phase::ChangeYear => Some(self.change_year),
            Phase::ResetTarget => Some(self.reset_target),
            Phase::TakeReward => Some(self.take_reward),
            Phase::Sync | Phase::Done => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MacroProgram {
    pub target_cycles: u16,
    pub year_rollover_every: u16,
    pub scripts: ScriptSet,
}

impl MacroProgram {
    /// Engine ticks for one reward pass that takes the month branch.
    pub fn cycle_ticks(&self) -> u32 {
        self.scripts.open_settings.total_ticks()
            + self.scripts.change_month.total_ticks()
            + self.scripts.reset_target.total_ticks()
            + self.scripts.take_reward.total_ticks()
    }
}
