use crate::phase::Phase;

/// Progress summary small enough to publish through a single atomic word.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AutomationStatus {
    pub phase: Phase,
    pub completed_cycles: u16,
    pub cursor_index: u8,
    pub finished: bool,
}

impl AutomationStatus {
    const PHASE_SHIFT: u32 = 0;
    const FINISHED_SHIFT: u32 = 4;
    const CURSOR_SHIFT: u32 = 8;
    const CYCLES_SHIFT: u32 = 16;

    pub const fn initial() -> Self {
        Self {
            phase: Phase::Sync,
            completed_cycles: 0,
            cursor_index: 0,
            finished: false,
        }
    }

    pub const fn packed(self) -> u32 {
        ((self.phase.as_u8() as u32) << Self::PHASE_SHIFT)
            | ((self.finished as u32) << Self::FINISHED_SHIFT)
            | ((self.cursor_index as u32) << Self::CURSOR_SHIFT)
            | ((self.completed_cycles as u32) << Self::CYCLES_SHIFT)
    }

    pub fn from_packed(raw: u32) -> Self {
        Self {
            phase: Phase::from_u8(((raw >> Self::PHASE_SHIFT) & 0b1111) as u8)
                .unwrap_or(Phase::Sync),
            finished: (raw >> Self::FINISHED_SHIFT) & 1 != 0,
            cursor_index: ((raw >> Self::CURSOR_SHIFT) & 0xFF) as u8,
            completed_cycles: ((raw >> Self::CYCLES_SHIFT) & 0xFFFF) as u16,
        }
    }
}
