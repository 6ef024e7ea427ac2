use crate::report::{Buttons, HidReport, STICK_MAX, STICK_MIN};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    PressA,
    PressB,
    PressX,
    PressY,
    PressR,
    PressHome,
    Hang,
}

impl Action {
    /// Writes this action's fields into `report`. Fields the action does not
    /// own are left untouched; `Hang` recenters the whole report.
    pub fn apply(self, report: &mut HidReport) {
        match self {
            Self::MoveUp => report.ly = STICK_MIN,
            Self::MoveDown => report.ly = STICK_MAX,
            Self::MoveLeft => report.lx = STICK_MIN,
            Self::MoveRight => report.lx = STICK_MAX,
            Self::PressA => report.buttons.press(Buttons::A),
            Self::PressB => report.buttons.press(Buttons::B),
            Self::PressX => report.buttons.press(Buttons::X),
            Self::PressY => report.buttons.press(Buttons::Y),
            Self::PressR => report.buttons.press(Buttons::R),
            Self::PressHome => report.buttons.press(Buttons::HOME),
            Self::Hang => report.reset(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::PressA => "press_a",
            Self::PressB => "press_b",
            Self::PressX => "press_x",
            Self::PressY => "press_y",
            Self::PressR => "press_r",
            Self::PressHome => "press_home",
            Self::Hang => "hang",
        }
    }
}
