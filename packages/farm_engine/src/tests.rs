use crate::{
    active_program, Action, AutomationEngine, Buttons, Command, HidReport, MacroProgram, Phase,
    ReportDriver, Script, ScriptSet, ECHOES,
};

static HANG_ONCE: [Command; 1] = [Command::new(Action::Hang, 0)];
static PRESS_A_HELD: [Command; 2] = [
    Command::new(Action::PressA, 3),
    Command::new(Action::Hang, 0),
];

static MINIMAL: MacroProgram = MacroProgram {
    target_cycles: 1,
    year_rollover_every: 12,
    scripts: ScriptSet {
        wake_up: Script::new(&HANG_ONCE),
        start_farm: Script::new(&HANG_ONCE),
        open_settings: Script::new(&HANG_ONCE),
        change_month: Script::new(&HANG_ONCE),
        change_year: Script::new(&HANG_ONCE),
        reset_target: Script::new(&HANG_ONCE),
        take_reward: Script::new(&HANG_ONCE),
    },
};

static PRESSING: MacroProgram = MacroProgram {
    target_cycles: 3,
    year_rollover_every: 12,
    scripts: ScriptSet {
        wake_up: Script::new(&PRESS_A_HELD),
        start_farm: Script::new(&PRESS_A_HELD),
        open_settings: Script::new(&PRESS_A_HELD),
        change_month: Script::new(&PRESS_A_HELD),
        change_year: Script::new(&PRESS_A_HELD),
        reset_target: Script::new(&PRESS_A_HELD),
        take_reward: Script::new(&HANG_ONCE),
    },
};

/// Runs `driver` until the engine has computed `ticks` reports and returns
/// the phase observed after each computation.
fn phases_after_ticks(driver: &mut ReportDriver, ticks: usize) -> std::vec::Vec<Phase> {
    let mut phases = std::vec::Vec::new();
    while phases.len() < ticks {
        let computes = driver.computes_next();
        let _ = driver.next_report();
        if computes {
            phases.push(driver.engine().phase());
        }
    }
    phases
}

#[test]
fn minimal_program_visits_every_phase_once_then_stops() {
    let mut driver = ReportDriver::new(&MINIMAL);
    let phases = phases_after_ticks(&mut driver, 9);

    assert_eq!(
        phases,
        [
            Phase::Breathe,
            Phase::StartFarm,
            Phase::OpenSettings,
            Phase::ChangeMonth,
            Phase::ResetTarget,
            Phase::TakeReward,
            Phase::Done,
            Phase::Done,
            Phase::Done,
        ]
    );
    assert_eq!(driver.engine().completed_cycles(), 1);
    assert!(driver.engine().is_finished());
}

#[test]
fn each_computed_report_is_sent_three_times() {
    let mut driver = ReportDriver::new(&PRESSING);
    let mut reports = std::vec::Vec::new();
    for _ in 0..(3 * (usize::from(ECHOES) + 1)) {
        reports.push(driver.next_report());
    }

    for frame in reports.chunks(usize::from(ECHOES) + 1) {
        assert!(frame.iter().all(|report| *report == frame[0]));
    }
    assert!(reports[0].is_neutral());
    assert!(reports[3].buttons.contains(Buttons::A));

    let stats = driver.stats();
    assert_eq!(stats.computed_reports, 3);
    assert_eq!(stats.echoed_reports, 6);
}

#[test]
fn finished_driver_keeps_sending_neutral_reports() {
    let mut driver = ReportDriver::new(&MINIMAL);
    let _ = phases_after_ticks(&mut driver, 7);
    assert_eq!(driver.engine().phase(), Phase::Done);

    let status = driver.engine().status();
    for _ in 0..1_000 {
        assert_eq!(driver.next_report(), HidReport::NEUTRAL);
    }
    assert_eq!(driver.engine().status(), status);
    assert_eq!(driver.engine().completed_cycles(), 1);
}

#[test]
fn cycle_count_grows_only_on_reward_completion() {
    let mut engine = AutomationEngine::new(&PRESSING);
    let mut last = engine.completed_cycles();

    while !engine.is_finished() {
        let before = engine.phase();
        let _ = engine.tick();
        let now = engine.completed_cycles();
        if now != last {
            assert_eq!(before, Phase::TakeReward);
            assert_eq!(now, last + 1);
            last = now;
        }
    }

    assert_eq!(engine.completed_cycles(), PRESSING.target_cycles);
    assert_eq!(engine.phase(), Phase::Done);
}

#[test]
fn active_program_matches_repository_macro() {
    let program = active_program();
    assert_eq!(program.target_cycles, 400);
    assert_eq!(program.year_rollover_every, 12);

    let scripts = &program.scripts;
    assert_eq!(scripts.wake_up.len(), 1);
    assert_eq!(scripts.start_farm.len(), 17);
    assert_eq!(scripts.open_settings.len(), 59);
    assert_eq!(scripts.change_month.len(), 23);
    assert_eq!(scripts.change_year.len(), 25);
    assert_eq!(scripts.reset_target.len(), 5);
    assert_eq!(scripts.take_reward.len(), 10);
}

#[test]
fn active_program_phases_take_their_total_ticks() {
    let program = active_program();
    let mut engine = AutomationEngine::new(program);
    let _ = engine.tick();

    for phase in [Phase::Breathe, Phase::StartFarm] {
        let ticks = program.scripts.script_for(phase).map_or(0, Script::total_ticks);
        for _ in 0..ticks {
            assert_eq!(engine.phase(), phase);
            let _ = engine.tick();
        }
    }
    assert_eq!(engine.phase(), Phase::OpenSettings);

    for _ in 0..program.cycle_ticks() {
        let _ = engine.tick();
    }
    assert_eq!(engine.completed_cycles(), 1);
    assert_eq!(engine.phase(), Phase::OpenSettings);
}

#[test]
fn default_driver_runs_the_active_program() {
    let driver = ReportDriver::default();
    assert!(core::ptr::eq(driver.engine().program(), active_program()));
    assert_eq!(driver.engine().phase(), Phase::Sync);
    assert!(driver.computes_next());
}
