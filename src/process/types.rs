/*!
 * Process Types
 * Caller-supplied definitions and the per-run process record
 */

use crate::core::data_structures::InlineString;
use crate::core::serialization::{is_false, skip_serializing_none};
use crate::core::types::{Priority, ProcessId, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Process as supplied by the caller
///
/// The engine only ever reads these; every run builds its own [`Process`]
/// records from them.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDefinition {
    pub id: ProcessId,
    #[serde(default)]
    pub name: InlineString,
    #[serde(default)]
    pub arrival_time: Tick,
    pub burst_time: Tick,
    #[serde(default)]
    pub priority: Priority,
    /// Display color chosen by the front end; passed through untouched
    #[serde(default)]
    pub color: Option<String>,
}

impl ProcessDefinition {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ProcessId>, arrival_time: Tick, burst_time: Tick) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            arrival_time,
            burst_time,
            priority: 0,
            color: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<InlineString>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Lifecycle position of a process within one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Arrival time not reached yet
    NotArrived,
    /// Waiting in a ready queue
    Ready,
    /// Holding the CPU
    Running,
    /// Remaining burst reached zero, or completed synthetically
    Completed,
}

/// Multilevel queue level
///
/// Serialized as `1` (high priority, round robin) or `2` (low priority, FCFS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueLevel {
    High,
    Low,
}

impl QueueLevel {
    #[inline(always)]
    pub const fn as_number(&self) -> u8 {
        match self {
            Self::High => 1,
            Self::Low => 2,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High-Prio (RR)",
            Self::Low => "Low-Prio (FCFS)",
        }
    }
}

impl Serialize for QueueLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_number())
    }
}

impl<'de> Deserialize<'de> for QueueLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            1 => Ok(Self::High),
            2 => Ok(Self::Low),
            other => Err(serde::de::Error::custom(format!(
                "invalid queue level {}, expected 1 or 2",
                other
            ))),
        }
    }
}

/// Process record for one simulation run
///
/// Input fields are copied from the definition; everything else starts
/// reset and is filled in as the run progresses.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: ProcessId,
    pub name: InlineString,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
    pub color: Option<String>,
    pub state: ProcessState,
    pub remaining_burst_time: Tick,
    pub start_time: Option<Tick>,
    pub completion_time: Option<Tick>,
    pub turnaround_time: Option<Tick>,
    pub waiting_time: Option<Tick>,
    pub response_time: Option<Tick>,
    /// Only assigned by the multilevel queue policy
    pub queue_level: Option<QueueLevel>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub force_completed: bool,
}

impl Process {
    /// Fresh record with all derived fields reset
    #[must_use]
    pub fn from_definition(definition: &ProcessDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            name: definition.name.clone(),
            arrival_time: definition.arrival_time,
            burst_time: definition.burst_time,
            priority: definition.priority,
            color: definition.color.clone(),
            state: ProcessState::NotArrived,
            remaining_burst_time: definition.burst_time,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
            response_time: None,
            queue_level: None,
            force_completed: false,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.state, ProcessState::Completed)
    }

    /// CPU time consumed so far
    #[inline]
    #[must_use]
    pub const fn executed_time(&self) -> Tick {
        self.burst_time.saturating_sub(self.remaining_burst_time)
    }

    /// Time spent waiting since arrival, as of `now`
    #[inline]
    #[must_use]
    pub const fn waited_until(&self, now: Tick) -> Tick {
        now.saturating_sub(self.arrival_time)
            .saturating_sub(self.executed_time())
    }
}
