// @generated by macro_script_compiler; edit config/macro.toml instead.

static WAKE_UP_STEPS: [Command; 1] = [
    Command::new(Action::Hang, 100),
];

static START_FARM_STEPS: [Command; 17] = [
    Command::new(Action::Hang, 10),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 10),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 40),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 40),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 100),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 40),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 40),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 40),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 80),
];

static OPEN_SETTINGS_STEPS: [Command; 59] = [
    Command::new(Action::Hang, 70),
    Command::new(Action::PressHome, 5),
    Command::new(Action::Hang, 40),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 40),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveDown, 5),
    Command::new(Action::Hang, 5),
];

static CHANGE_MONTH_STEPS: [Command; 23] = [
    Command::new(Action::Hang, 10),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
    Command::new(Action::MoveUp, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
    Command::new(Action::PressHome, 5),
    Command::new(Action::Hang, 40),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
];

static CHANGE_YEAR_STEPS: [Command; 25] = [
    Command::new(Action::Hang, 10),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
    Command::new(Action::MoveUp, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveUp, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::MoveRight, 5),
    Command::new(Action::Hang, 5),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
    Command::new(Action::PressHome, 5),
    Command::new(Action::Hang, 40),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
];

static RESET_TARGET_STEPS: [Command; 5] = [
    Command::new(Action::Hang, 60),
    Command::new(Action::PressB, 5),
    Command::new(Action::Hang, 40),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 210),
];

static TAKE_REWARD_STEPS: [Command; 10] = [
    Command::new(Action::Hang, 40),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
    Command::new(Action::PressA, 5),
    Command::new(Action::Hang, 30),
    Command::new(Action::Hang, 170),
];

pub static MACRO_PROGRAM: MacroProgram = MacroProgram {
    target_cycles: 400,
    year_rollover_every: 12,
    scripts: ScriptSet {
        wake_up: Script::new(&WAKE_UP_STEPS),
        start_farm: Script::new(&START_FARM_STEPS),
        open_settings: Script::new(&OPEN_SETTINGS_STEPS),
        change_month: Script::new(&CHANGE_MONTH_STEPS),
        change_year: Script::new(&CHANGE_YEAR_STEPS),
        reset_target: Script::new(&RESET_TARGET_STEPS),
        take_reward: Script::new(&TAKE_REWARD_STEPS),
    },
};
