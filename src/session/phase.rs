//! Breathing phases and their fixed ordering.

use serde::{Deserialize, Serialize};

/// Number of ticks every phase lasts.
pub const PHASE_TICKS: u8 = 4;

/// Number of phases in one breathing cycle.
pub const PHASE_COUNT: usize = 4;

/// One step of the box-breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Breathe in
    Inhale,
    /// Hold with full lungs
    Hold,
    /// Breathe out
    Exhale,
    /// Hold with empty lungs
    Wait,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Self; PHASE_COUNT] = [Self::Inhale, Self::Hold, Self::Exhale, Self::Wait];

    /// Phase at a cycle position. Indices wrap around.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % PHASE_COUNT]
    }

    /// Position of this phase in the cycle.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Inhale => 0,
            Self::Hold => 1,
            Self::Exhale => 2,
            Self::Wait => 3,
        }
    }

    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Inhale => "Inhale",
            Self::Hold => "Hold",
            Self::Exhale => "Exhale",
            Self::Wait => "Wait",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_cycle_order() {
        assert_eq!(Phase::Inhale.next(), Phase::Hold);
        assert_eq!(Phase::Hold.next(), Phase::Exhale);
        assert_eq!(Phase::Exhale.next(), Phase::Wait);
        assert_eq!(Phase::Wait.next(), Phase::Inhale);
    }

    #[test]
    fn test_phase_index_round_trip() {
        for phase in Phase::ALL {
            assert_eq!(Phase::from_index(phase.index()), phase);
        }
        assert_eq!(Phase::from_index(5), Phase::Hold);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Phase::Exhale.to_string(), "Exhale");
        assert_eq!(Phase::Wait.display_name(), "Wait");
    }
}
