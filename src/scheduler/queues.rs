/*!
 * Ready Queues
 * Queue storage owned by a single simulation run
 */

use crate::process::QueueLevel;
use std::collections::VecDeque;

/// Index of a process in the run's process table
pub type ProcessIndex = usize;

/// Ready structures for one run
///
/// Single-queue policies only use the [`QueueLevel::Low`] queue; the
/// multilevel policy uses both levels. Queues hold indices into the run's
/// process table in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueues {
    high: VecDeque<ProcessIndex>,
    low: VecDeque<ProcessIndex>,
}

impl ReadyQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail of a level
    #[inline]
    pub fn push(&mut self, level: QueueLevel, index: ProcessIndex) {
        self.level_mut(level).push_back(index);
    }

    #[inline]
    pub fn pop_front(&mut self, level: QueueLevel) -> Option<ProcessIndex> {
        self.level_mut(level).pop_front()
    }

    #[inline]
    pub fn level(&self, level: QueueLevel) -> &VecDeque<ProcessIndex> {
        match level {
            QueueLevel::High => &self.high,
            QueueLevel::Low => &self.low,
        }
    }

    #[inline]
    fn level_mut(&mut self, level: QueueLevel) -> &mut VecDeque<ProcessIndex> {
        match level {
            QueueLevel::High => &mut self.high,
            QueueLevel::Low => &mut self.low,
        }
    }

    /// Position of the best entry of a level
    ///
    /// `better(a, b)` must return true only when `a` is strictly preferable
    /// to `b`; among equals the earliest queue position wins.
    fn best_position<F>(&self, level: QueueLevel, better: F) -> Option<usize>
    where
        F: Fn(ProcessIndex, ProcessIndex) -> bool,
    {
        let queue = self.level(level);
        let mut best: Option<usize> = None;
        for (position, &candidate) in queue.iter().enumerate() {
            match best {
                Some(current) if !better(candidate, queue[current]) => {}
                _ => best = Some(position),
            }
        }
        best
    }

    /// Best entry of a level without removing it
    pub fn peek_best<F>(&self, level: QueueLevel, better: F) -> Option<ProcessIndex>
    where
        F: Fn(ProcessIndex, ProcessIndex) -> bool,
    {
        self.best_position(level, better)
            .map(|position| self.level(level)[position])
    }

    /// Remove and return the best entry of a level
    pub fn take_best<F>(&mut self, level: QueueLevel, better: F) -> Option<ProcessIndex>
    where
        F: Fn(ProcessIndex, ProcessIndex) -> bool,
    {
        let position = self.best_position(level, better)?;
        self.level_mut(level).remove(position)
    }

    pub fn len(&self) -> usize {
        self.high.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.low.is_empty()
    }

    pub fn clear(&mut self) {
        self.high.clear();
        self.low.clear();
    }
}
