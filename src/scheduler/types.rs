/*!
 * Scheduler Types
 * Algorithm selector and time quantum
 */

use crate::core::errors::SimulationError;
use crate::core::types::Tick;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling discipline for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-come, first-served
    Fcfs,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Shortest remaining time first (preemptive SJF)
    Srtf,
    /// Priority, non-preemptive
    PriorityNonPreemptive,
    /// Priority, preemptive on arrival
    PriorityPreemptive,
    /// Round robin with a fixed quantum
    RoundRobin,
    /// Highest response ratio next
    Hrrn,
    /// Two-level queue: round robin over FCFS
    MultilevelQueue,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::PriorityNonPreemptive,
        Self::PriorityPreemptive,
        Self::RoundRobin,
        Self::Hrrn,
        Self::MultilevelQueue,
    ];

    /// Stable identifier, used for parsing and serialization
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf_np",
            Self::Srtf => "sjf_p",
            Self::PriorityNonPreemptive => "priority_np",
            Self::PriorityPreemptive => "priority_p",
            Self::RoundRobin => "rr",
            Self::Hrrn => "hrrn",
            Self::MultilevelQueue => "mqs",
        }
    }

    /// Human-readable name
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come, First-Served",
            Self::Sjf => "Shortest Job First (Non-Preemptive)",
            Self::Srtf => "Shortest Remaining Time First",
            Self::PriorityNonPreemptive => "Priority (Non-Preemptive)",
            Self::PriorityPreemptive => "Priority (Preemptive)",
            Self::RoundRobin => "Round Robin",
            Self::Hrrn => "Highest Response Ratio Next",
            Self::MultilevelQueue => "Multilevel Queue (RR/FCFS)",
        }
    }

    /// Whether an arrival can take the CPU away from a running process
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::PriorityPreemptive | Self::MultilevelQueue
        )
    }

    /// Whether execution is bounded by a time quantum
    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin | Self::MultilevelQueue)
    }

    /// Whether processes are split across queue levels
    pub const fn uses_levels(&self) -> bool {
        matches!(self, Self::MultilevelQueue)
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "sjf_np" | "sjn" => Ok(Self::Sjf),
            "srtf" | "sjf_p" => Ok(Self::Srtf),
            "priority" | "priority_np" | "prio" => Ok(Self::PriorityNonPreemptive),
            "priority_p" | "prio_p" => Ok(Self::PriorityPreemptive),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "hrrn" => Ok(Self::Hrrn),
            "mqs" | "mlq" | "multilevel" | "multilevel_queue" => Ok(Self::MultilevelQueue),
            _ => Err(SimulationError::UnknownAlgorithm(s.into())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Time quantum in ticks, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Use `requested` when it is a valid quantum, otherwise `fallback`
    ///
    /// Invalid quanta are replaced, never rejected.
    pub fn normalize(requested: Option<Tick>, fallback: Tick) -> Self {
        match requested {
            Some(ticks) if ticks >= 1 => Self(ticks),
            _ => Self(fallback.max(1)),
        }
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Tick {
        self.0
    }
}
