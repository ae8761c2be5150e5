use std::collections::VecDeque;

use crate::traits::{InputProvider, InputSnapshot};

/// Replays a fixed list of snapshots, then reports idle input forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputSnapshot>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Append `count` copies of `snapshot`
    pub fn repeat(mut self, snapshot: InputSnapshot, count: usize) -> Self {
        self.frames.extend(std::iter::repeat(snapshot).take(count));
        self
    }

    pub fn then(mut self, snapshot: InputSnapshot) -> Self {
        self.frames.push_back(snapshot);
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn is_finished(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputProvider for ScriptedInput {
    fn snapshot(&mut self) -> InputSnapshot {
        self.frames.pop_front().unwrap_or_default()
    }
}
