use log::{debug, info};
use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use crate::{
    interpreter::{step, Cursor, StepOutcome},
    phase::{next_phase, Phase},
    program::active_program,
    report::HidReport,
    script::MacroProgram,
    status::AutomationStatus,
    trace::{TransitionRecord, TransitionTrace},
};

#[derive(Clone, Copy, Debug)]
enum AutomationEvent {
    Tick,
}

#[derive(Default)]
struct DispatchContext {
    report: HidReport,
}

/// Sequences the macro scripts and counts reward passes. One call to
/// [`AutomationEngine::tick`] computes one report.
pub struct AutomationEngine {
    machine: statig::blocking::StateMachine<AutomationMachine>,
}

impl Default for AutomationEngine {
    fn default() -> Self {
        Self::new(active_program())
    }
}

impl AutomationEngine {
    pub fn new(program: &'static MacroProgram) -> Self {
        Self::resume(program, Phase::Breathe, 0)
    }

    /// Starts from `phase` with `completed_cycles` passes already counted.
    /// The controller sync frame still runs first.
    pub fn resume(program: &'static MacroProgram, phase: Phase, completed_cycles: u16) -> Self {
        Self {
            machine: AutomationMachine::new(program, phase, completed_cycles).state_machine(),
        }
    }

    pub fn tick(&mut self) -> HidReport {
        let mut context = DispatchContext::default();
        self.machine
            .handle_with_context(&AutomationEvent::Tick, &mut context);
        context.report
    }

    pub fn program(&self) -> &'static MacroProgram {
        self.machine.inner().program
    }

    pub fn phase(&self) -> Phase {
        self.machine.inner().phase
    }

    pub fn completed_cycles(&self) -> u16 {
        self.machine.inner().completed_cycles
    }

    pub fn cursor(&self) -> Cursor {
        self.machine.inner().cursor
    }

    pub fn is_finished(&self) -> bool {
        self.machine.inner().target_reached()
    }

    pub fn trace(&self) -> &TransitionTrace {
        &self.machine.inner().trace
    }

    pub fn status(&self) -> AutomationStatus {
        let inner = self.machine.inner();
        AutomationStatus {
            phase: inner.phase,
            completed_cycles: inner.completed_cycles,
            cursor_index: inner.cursor.index.min(u8::MAX as usize) as u8,
            finished: inner.target_reached(),
        }
    }
}

struct AutomationMachine {
    program: &'static MacroProgram,
    resume_phase: Phase,
    phase: Phase,
    cursor: Cursor,
    completed_cycles: u16,
    ticks: u32,
    trace: TransitionTrace,
}

impl AutomationMachine {
    fn new(program: &'static MacroProgram, resume_phase: Phase, completed_cycles: u16) -> Self {
        Self {
            program,
            resume_phase,
            phase: Phase::Sync,
            cursor: Cursor::default(),
            completed_cycles,
            ticks: 0,
            trace: TransitionTrace::new(),
        }
    }

    fn target_reached(&self) -> bool {
        self.completed_cycles >= self.program.target_cycles
    }

    fn run_phase(&mut self, phase: Phase, context: &mut DispatchContext) -> Outcome<State> {
        self.ticks = self.ticks.wrapping_add(1);

        // Checked every tick so a reached target stops the macro mid-script.
        if self.target_reached() {
            return self.enter(Phase::Done);
        }

        let Some(script) = self.program.scripts.script_for(phase) else {
            return Handled;
        };

        match step(script, &mut self.cursor, &mut context.report) {
            StepOutcome::Running => Handled,
            StepOutcome::Completed => {
                if phase == Phase::TakeReward {
                    self.completed_cycles = self.completed_cycles.saturating_add(1);
                    info!(
                        "farm: cycle complete cycles={}/{}",
                        self.completed_cycles, self.program.target_cycles
                    );
                }
                let next = if self.target_reached() {
                    Phase::Done
                } else {
                    next_phase(
                        phase,
                        self.completed_cycles,
                        self.program.year_rollover_every,
                    )
                };
                self.enter(next)
            }
        }
    }

    fn enter(&mut self, next: Phase) -> Outcome<State> {
        let from = self.phase;
        self.cursor.reset();
        self.phase = next;
        self.trace.push(TransitionRecord {
            tick: self.ticks,
            from,
            to: next,
            completed_cycles: self.completed_cycles,
        });

        if next == Phase::Done {
            info!(
                "farm: target reached cycles={} tick={}",
                self.completed_cycles, self.ticks
            );
        } else {
            debug!(
                "farm: phase {} -> {} cycles={}",
                from.as_str(),
                next.as_str(),
                self.completed_cycles
            );
        }

        Transition(Self::state_for(next))
    }

    fn state_for(phase: Phase) -> State {
        match phase {
            Phase::Sync => State::sync_controller(),
            Phase::Breathe => State::breathe(),
            Phase::StartFarm => State::start_farm(),
            Phase::OpenSettings => State::open_settings(),
            Phase::ChangeMonth => State::change_month(),
            Phase::ChangeYear => State::change_year(),
            Phase::ResetTarget => State::reset_target(),
            Phase::TakeReward => State::take_reward(),
            Phase::Done => State::done(),
        }
    }
}

#[state_machine(initial = "State::sync_controller()")]
impl AutomationMachine {
    #[state]
    fn sync_controller(
        &mut self,
        context: &mut DispatchContext,
        event: &AutomationEvent,
    ) -> Outcome<State> {
        let _ = context;
        match event {
            AutomationEvent::Tick => {
                self.ticks = self.ticks.wrapping_add(1);
                let target = match self.resume_phase {
                    Phase::Sync => Phase::Breathe,
                    phase => phase,
                };
                self.enter(target)
            }
        }
    }

    #[state]
    fn breathe(&mut self, context: &mut DispatchContext, event: &AutomationEvent) -> Outcome<State> {
        match event {
            AutomationEvent::Tick => self.run_phase(Phase::Breathe, context),
        }
    }

    #[state]
    fn start_farm(
        &mut self,
        context: &mut DispatchContext,
        event: &AutomationEvent,
    ) -> Outcome<State> {
        match event {
            AutomationEvent::Tick => self.run_phase(Phase::StartFarm, context),
        }
    }

    #[state]
    fn open_settings(
        &mut self,
        context: &mut DispatchContext,
        event: &AutomationEvent,
    ) -> Outcome<State> {
        match event {
            AutomationEvent::Tick => self.run_phase(Phase::OpenSettings, context),
        }
    }

    #[state]
    fn change_month(
        &mut self,
        context: &mut DispatchContext,
        event: &AutomationEvent,
    ) -> Outcome<State> {
        match event {
            AutomationEvent::Tick => self.run_phase(Phase::ChangeMonth, context),
        }
    }

    #[state]
    fn change_year(
        &mut self,
        context: &mut DispatchContext,
        event: &AutomationEvent,
    ) -> Outcome<State> {
        match event {
            AutomationEvent::Tick => self.run_phase(Phase::ChangeYear, context),
        }
    }

    #[state]
    fn reset_target(
        &mut self,
        context: &mut DispatchContext,
        event: &AutomationEvent,
    ) -> Outcome<State> {
        match event {
            AutomationEvent::Tick => self.run_phase(Phase::ResetTarget, context),
        }
    }

    #[state]
    fn take_reward(
        &mut self,
        context: &mut DispatchContext,
        event: &AutomationEvent,
    ) -> Outcome<State> {
        match event {
            AutomationEvent::Tick => self.run_phase(Phase::TakeReward, context),
        }
    }

    /// Terminal: the context report stays neutral and nothing is counted.
    #[state]
    fn done(&mut self, context: &mut DispatchContext, event: &AutomationEvent) -> Outcome<State> {
        let _ = (context, event);
        Handled
    }
}
