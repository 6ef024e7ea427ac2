#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    #[default]
    Sync,
    Breathe,
    StartFarm,
    OpenSettings,
    ChangeMonth,
    ChangeYear,
    ResetTarget,
    TakeReward,
    Done,
}

impl Phase {
    pub const ALL: [Self; 9] = [
        Self::Sync,
        Self::Breathe,
        Self::StartFarm,
        Self::OpenSettings,
        Self::ChangeMonth,
        Self::ChangeYear,
        Self::ResetTarget,
        Self::TakeReward,
        Self::Done,
    ];

    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Sync => 0,
            Self::Breathe => 1,
            Self::StartFarm => 2,
            Self::OpenSettings => 3,
            Self::ChangeMonth => 4,
            Self::ChangeYear => 5,
            Self::ResetTarget => 6,
            Self::TakeReward => 7,
            Self::Done => 8,
        }
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Sync),
            1 => Some(Self::Breathe),
            2 => Some(Self::StartFarm),
            3 => Some(Self::OpenSettings),
            4 => Some(Self::ChangeMonth),
            5 => Some(Self::ChangeYear),
            6 => Some(Self::ResetTarget),
            7 => Some(Self::TakeReward),
            8 => Some(Self::Done),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Breathe => "breathe",
            Self::StartFarm => "start_farm",
            Self::OpenSettings => "open_settings",
            Self::ChangeMonth => "change_month",
            Self::ChangeYear => "change_year",
            Self::ResetTarget => "reset_target",
            Self::TakeReward => "take_reward",
            Self::Done => "done",
        }
    }

    pub const fn is_scripted(self) -> bool {
        !matches!(self, Self::Sync | Self::Done)
    }
}

/// Phase that follows `phase` once its script completes.
///
/// `completed_cycles` is the counter as it stands after the completing
/// script has been accounted for. The settings pass rolls the year over when
/// the counter is a positive multiple of `year_rollover_every`.
pub const fn next_phase(phase: Phase, completed_cycles: u16, year_rollover_every: u16) -> Phase {
    match phase {
        Phase::Sync => Phase::Breathe,
        Phase::Breathe => Phase::StartFarm,
        Phase::StartFarm => Phase::OpenSettings,
        Phase::OpenSettings => {
            if is_year_rollover(completed_cycles, year_rollover_every) {
                Phase::ChangeYear
            } else {
                Phase::ChangeMonth
            }
        }
        Phase::ChangeMonth | Phase::ChangeYear => Phase::ResetTarget,
        Phase::ResetTarget => Phase::TakeReward,
        Phase::TakeReward => Phase::OpenSettings,
        Phase::Done => Phase::Done,
    }
}

pub const fn is_year_rollover(completed_cycles: u16, year_rollover_every: u16) -> bool {
    completed_cycles != 0
        && year_rollover_every != 0
        && completed_cycles % year_rollover_every == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_route_follows_table() {
        let route = [
            (Phase::Sync, Phase::Breathe),
            (Phase::Breathe, Phase::StartFarm),
            (Phase::StartFarm, Phase::OpenSettings),
            (Phase::OpenSettings, Phase::ChangeMonth),
            (Phase::ChangeMonth, Phase::ResetTarget),
            (Phase::ChangeYear, Phase::ResetTarget),
            (Phase::ResetTarget, Phase::TakeReward),
            (Phase::TakeReward, Phase::OpenSettings),
            (Phase::Done, Phase::Done),
        ];
        for (from, to) in route {
            assert_eq!(next_phase(from, 1, 12), to, "{}", from.as_str());
        }
    }

    #[test]
    fn settings_branch_takes_year_on_positive_multiples_only() {
        assert_eq!(next_phase(Phase::OpenSettings, 0, 12), Phase::ChangeMonth);
        assert_eq!(next_phase(Phase::OpenSettings, 10, 12), Phase::ChangeMonth);
        assert_eq!(next_phase(Phase::OpenSettings, 11, 12), Phase::ChangeMonth);
        assert_eq!(next_phase(Phase::OpenSettings, 12, 12), Phase::ChangeYear);
        assert_eq!(next_phase(Phase::OpenSettings, 13, 12), Phase::ChangeMonth);
        assert_eq!(next_phase(Phase::OpenSettings, 24, 12), Phase::ChangeYear);
    }

    #[test]
    fn rollover_counter_only_matters_for_settings() {
        for phase in Phase::ALL {
            if phase == Phase::OpenSettings {
                continue;
            }
            assert_eq!(next_phase(phase, 12, 12), next_phase(phase, 5, 12));
        }
    }

    #[test]
    fn zero_rollover_never_branches() {
        assert!(!is_year_rollover(12, 0));
    }

    #[test]
    fn phase_codes_round_trip() {
        for phase in Phase::ALL {
            assert_eq!(Phase::from_u8(phase.as_u8()), Some(phase));
        }
        assert_eq!(Phase::from_u8(9), None);
    }
}
