use crate::geometry::Vec2;
use std::collections::VecDeque;

/// Raw input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Pointer position in screen space (y-up). `None` when no pointer is present.
    pub pointer: Option<Vec2>,
    /// Analog stick direction. `None` when no stick is connected.
    pub axis: Option<Vec2>,
    /// Submit or primary-click edge raised since the previous tick.
    pub submit: bool,
}

impl InputSample {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_pointer(mut self, position: Vec2) -> Self {
        self.pointer = Some(position);
        self
    }

    pub fn with_axis(mut self, direction: Vec2) -> Self {
        self.axis = Some(direction);
        self
    }

    pub fn with_submit(mut self) -> Self {
        self.submit = true;
        self
    }

    /// A missing stick reads as a centred one.
    pub fn axis_or_zero(&self) -> Vec2 {
        self.axis.unwrap_or(Vec2::ZERO)
    }
}

/// Supplies one [`InputSample`] per tick.
pub trait InputProvider {
    fn sample(&mut self) -> InputSample;
}

impl InputProvider for InputSample {
    fn sample(&mut self) -> InputSample {
        *self
    }
}

/// Replays a queue of samples, then reports idle input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<InputSample>,
}

impl ScriptedInput {
    pub fn new(samples: impl IntoIterator<Item = InputSample>) -> Self {
        Self {
            queue: samples.into_iter().collect(),
        }
    }

    pub fn push(&mut self, sample: InputSample) {
        self.queue.push_back(sample);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputProvider for ScriptedInput {
    fn sample(&mut self) -> InputSample {
        self.queue.pop_front().unwrap_or_default()
    }
}

/// Holds the most recent pointer and stick state. The submit edge is consumed by the
/// tick that samples it.
#[derive(Debug, Clone, Default)]
pub struct LatestInput {
    pointer: Option<Vec2>,
    axis: Option<Vec2>,
    submit: bool,
}

impl LatestInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_pointer(&mut self, position: Option<Vec2>) {
        self.pointer = position;
    }

    pub fn set_axis(&mut self, direction: Option<Vec2>) {
        self.axis = direction;
    }

    pub fn press_submit(&mut self) {
        self.submit = true;
    }
}

impl InputProvider for LatestInput {
    fn sample(&mut self) -> InputSample {
        InputSample {
            pointer: self.pointer,
            axis: self.axis,
            submit: std::mem::take(&mut self.submit),
        }
    }
}
