use heapless::Deque;

use crate::phase::Phase;

pub const TRANSITION_TRACE_LEN: usize = 16;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TransitionRecord {
    pub tick: u32,
    pub from: Phase,
    pub to: Phase,
    pub completed_cycles: u16,
}

/// Most recent phase transitions, oldest first.
#[derive(Clone, Debug)]
pub struct TransitionTrace {
    records: Deque<TransitionRecord, TRANSITION_TRACE_LEN>,
}

impl Default for TransitionTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionTrace {
    pub const fn new() -> Self {
        Self {
            records: Deque::new(),
        }
    }

    pub fn push(&mut self, record: TransitionRecord) {
        if self.records.is_full() {
            let _ = self.records.pop_front();
        }
        let _ = self.records.push_back(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tick: u32) -> TransitionRecord {
        TransitionRecord {
            tick,
            from: Phase::TakeReward,
            to: Phase::OpenSettings,
            completed_cycles: 0,
        }
    }

    #[test]
    fn keeps_newest_records_when_full() {
        let mut trace = TransitionTrace::new();
        for tick in 0..(TRANSITION_TRACE_LEN as u32 + 4) {
            trace.push(record(tick));
        }

        assert_eq!(trace.len(), TRANSITION_TRACE_LEN);
        assert_eq!(trace.iter().next().map(|r| r.tick), Some(4));
        assert_eq!(
            trace.latest().map(|r| r.tick),
            Some(TRANSITION_TRACE_LEN as u32 + 3)
        );
    }
}
