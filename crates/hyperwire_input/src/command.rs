//! Discrete input commands
//!
//! Commands are the only thing that crosses from a presentation adapter into
//! the core: movement along one of the four axes, a rotation in one of the
//! six planes, orbit/zoom adjustments, and quit.

use std::collections::VecDeque;

use hyperwire_math::{RotationPlane, Vec4};

/// The four coordinate axes of 4-space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis4 {
    X,
    Y,
    Z,
    W,
}

impl Axis4 {
    /// Unit vector along this axis
    pub const fn unit(self) -> Vec4 {
        match self {
            Axis4::X => Vec4::X,
            Axis4::Y => Vec4::Y,
            Axis4::Z => Vec4::Z,
            Axis4::W => Vec4::W,
        }
    }
}

/// A discrete command produced by an input adapter
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputCommand {
    /// Move the camera eye along a world axis
    Move { axis: Axis4, delta: f32 },
    /// Rotate the scene's polytopes in a plane
    RotatePlane { plane: RotationPlane, delta: f32 },
    /// Orbit the camera around its target
    Orbit { dx: f32, dy: f32 },
    /// Adjust the projection distance (positive = zoom in)
    Zoom { delta: f32 },
    /// Request shutdown
    Quit,
}

/// A source of input commands
pub trait InputSource {
    /// Take the next pending command, if any
    fn poll(&mut self) -> Option<InputCommand>;
}

/// A pre-recorded command sequence
///
/// Useful for tests and scripted demo runs.
pub struct ScriptedInput {
    queue: VecDeque<InputCommand>,
}

impl ScriptedInput {
    /// Create from a command list, delivered in order
    pub fn new(commands: impl IntoIterator<Item = InputCommand>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
        }
    }

    /// Create an empty source that never produces commands
    pub fn empty() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Append a command to the end of the script
    pub fn push(&mut self, command: InputCommand) {
        self.queue.push_back(command);
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<InputCommand> {
        self.queue.pop_front()
    }
}
