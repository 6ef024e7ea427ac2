use crate::{
    echo::EchoScheduler, engine::AutomationEngine, report::HidReport, script::MacroProgram,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DriverStats {
    pub computed_reports: u32,
    pub echoed_reports: u32,
}

/// Entry point for the transport: one call per host poll.
pub struct ReportDriver {
    engine: AutomationEngine,
    echo: EchoScheduler,
    stats: DriverStats,
}

impl Default for ReportDriver {
    fn default() -> Self {
        Self::from_engine(AutomationEngine::default())
    }
}

impl ReportDriver {
    pub fn new(program: &'static MacroProgram) -> Self {
        Self::from_engine(AutomationEngine::new(program))
    }

    pub fn from_engine(engine: AutomationEngine) -> Self {
        Self {
            engine,
            echo: EchoScheduler::new(),
            stats: DriverStats::default(),
        }
    }

    pub fn next_report(&mut self) -> HidReport {
        if let Some(report) = self.echo.replay() {
            self.stats.echoed_reports = self.stats.echoed_reports.wrapping_add(1);
            return report;
        }

        let report = self.engine.tick();
        self.echo.remember(report);
        self.stats.computed_reports = self.stats.computed_reports.wrapping_add(1);
        report
    }

    /// True when the next call will run the engine instead of echoing.
    pub fn computes_next(&self) -> bool {
        self.echo.remaining() == 0
    }

    pub fn engine(&self) -> &AutomationEngine {
        &self.engine
    }

    pub fn stats(&self) -> DriverStats {
        self.stats
    }
}
