use crate::report::HidReport;

/// Deliveries of a computed report after the first one.
pub const ECHOES: u8 = 2;

#[derive(Clone, Copy, Debug, Default)]
pub struct EchoScheduler {
    last: HidReport,
    remaining: u8,
}

impl EchoScheduler {
    pub const fn new() -> Self {
        Self {
            last: HidReport::NEUTRAL,
            remaining: 0,
        }
    }

    /// Returns the cached report while echoes remain.
    pub fn replay(&mut self) -> Option<HidReport> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.last)
    }

    pub fn remember(&mut self, report: HidReport) {
        self.last = report;
        self.remaining = ECHOES;
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Buttons;

    #[test]
    fn fresh_scheduler_has_nothing_to_replay() {
        let mut echo = EchoScheduler::new();
        assert_eq!(echo.replay(), None);
    }

    #[test]
    fn remembered_report_is_replayed_twice() {
        let mut report = HidReport::NEUTRAL;
        report.buttons.press(Buttons::B);

        let mut echo = EchoScheduler::new();
        echo.remember(report);
        assert_eq!(echo.remaining(), ECHOES);
        assert_eq!(echo.replay(), Some(report));
        assert_eq!(echo.replay(), Some(report));
        assert_eq!(echo.replay(), None);
        assert_eq!(echo.remaining(), 0);
    }

    #[test]
    fn remember_rearms_the_counter() {
        let mut echo = EchoScheduler::new();
        echo.remember(HidReport::NEUTRAL);
        let _ = echo.replay();

        let mut report = HidReport::NEUTRAL;
        report.lx = 0;
        echo.remember(report);
        assert_eq!(echo.replay(), Some(report));
        assert_eq!(echo.replay(), Some(report));
        assert_eq!(echo.replay(), None);
    }
}
