//! Command routing
//!
//! The CommandRouter drains an input source each frame and applies scaled
//! commands to a [`ViewControl`] target. Speeds are configured with the
//! builder methods; the router tracks whether quit was requested.

use crate::command::{Axis4, InputCommand, InputSource};
use hyperwire_math::RotationPlane;

/// Operations a router target must support
///
/// Implemented by the renderer, which forwards camera commands to its camera
/// and rotation commands to the polytopes in its scene.
pub trait ViewControl {
    /// Translate the camera eye along a world axis
    fn move_camera(&mut self, axis: Axis4, delta: f32);
    /// Rotate the scene's polytopes in a plane
    fn rotate_objects(&mut self, plane: RotationPlane, delta: f32);
    /// Orbit the camera around its target
    fn orbit_camera(&mut self, dx: f32, dy: f32);
    /// Scale the projection distance by a factor
    fn zoom_camera(&mut self, factor: f32);
}

/// Applies input commands to a view target with configured speeds
pub struct CommandRouter {
    pub move_speed: f32,
    pub rotate_speed: f32,
    pub orbit_sensitivity: f32,
    /// Distance multiplier per zoom step
    pub zoom_step: f32,
    quit_requested: bool,
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRouter {
    pub fn new() -> Self {
        Self {
            move_speed: 0.1,
            rotate_speed: 1.0,
            orbit_sensitivity: 0.01,
            zoom_step: 1.1,
            quit_requested: false,
        }
    }

    /// Builder: set movement speed (units per command unit)
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set rotation speed (radians per command unit)
    pub fn with_rotate_speed(mut self, speed: f32) -> Self {
        self.rotate_speed = speed;
        self
    }

    /// Builder: set orbit sensitivity (radians per command unit)
    pub fn with_orbit_sensitivity(mut self, sensitivity: f32) -> Self {
        self.orbit_sensitivity = sensitivity;
        self
    }

    /// Builder: set the distance multiplier per zoom step
    pub fn with_zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }

    /// True once a quit command has been seen
    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Apply a single command to the target
    pub fn apply<T: ViewControl>(&mut self, command: InputCommand, target: &mut T) {
        match command {
            InputCommand::Move { axis, delta } => {
                target.move_camera(axis, delta * self.move_speed);
            }
            InputCommand::RotatePlane { plane, delta } => {
                target.rotate_objects(plane, delta * self.rotate_speed);
            }
            InputCommand::Orbit { dx, dy } => {
                target.orbit_camera(dx * self.orbit_sensitivity, dy * self.orbit_sensitivity);
            }
            InputCommand::Zoom { delta } => {
                // Positive delta zooms in (shrinks the projection distance)
                target.zoom_camera(self.zoom_step.powf(-delta));
            }
            InputCommand::Quit => {
                log::info!("quit requested");
                self.quit_requested = true;
            }
        }
    }

    /// Drain every pending command from the source into the target.
    ///
    /// Returns true if a quit command was seen during this drain.
    pub fn drain<S: InputSource, T: ViewControl>(
        &mut self,
        source: &mut S,
        target: &mut T,
    ) -> bool {
        while let Some(command) = source.poll() {
            self.apply(command, target);
        }
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ScriptedInput;

    #[derive(Default)]
    struct Recorded {
        moves: Vec<(Axis4, f32)>,
        rotations: Vec<(RotationPlane, f32)>,
        orbits: Vec<(f32, f32)>,
        zooms: Vec<f32>,
    }

    impl ViewControl for Recorded {
        fn move_camera(&mut self, axis: Axis4, delta: f32) {
            self.moves.push((axis, delta));
        }
        fn rotate_objects(&mut self, plane: RotationPlane, delta: f32) {
            self.rotations.push((plane, delta));
        }
        fn orbit_camera(&mut self, dx: f32, dy: f32) {
            self.orbits.push((dx, dy));
        }
        fn zoom_camera(&mut self, factor: f32) {
            self.zooms.push(factor);
        }
    }

    #[test]
    fn test_move_scaled_by_speed() {
        let mut router = CommandRouter::new().with_move_speed(2.0);
        let mut target = Recorded::default();
        router.apply(
            InputCommand::Move { axis: Axis4::W, delta: 3.0 },
            &mut target,
        );
        assert_eq!(target.moves, [(Axis4::W, 6.0)]);
    }

    #[test]
    fn test_rotate_scaled_by_speed() {
        let mut router = CommandRouter::new().with_rotate_speed(0.5);
        let mut target = Recorded::default();
        router.apply(
            InputCommand::RotatePlane { plane: RotationPlane::Xw, delta: 0.2 },
            &mut target,
        );
        assert_eq!(target.rotations, [(RotationPlane::Xw, 0.1)]);
    }

    #[test]
    fn test_zoom_in_shrinks_distance() {
        let mut router = CommandRouter::new().with_zoom_step(1.1);
        let mut target = Recorded::default();
        router.apply(InputCommand::Zoom { delta: 1.0 }, &mut target);
        assert_eq!(target.zooms.len(), 1);
        assert!(target.zooms[0] < 1.0);

        router.apply(InputCommand::Zoom { delta: -1.0 }, &mut target);
        assert!((target.zooms[1] - 1.1).abs() < 0.0001);
    }

    #[test]
    fn test_drain_reports_quit() {
        let mut router = CommandRouter::new();
        let mut target = Recorded::default();
        let mut source = ScriptedInput::new([
            InputCommand::Orbit { dx: 1.0, dy: 0.0 },
            InputCommand::Quit,
        ]);
        assert!(router.drain(&mut source, &mut target));
        assert!(router.quit_requested());
        assert_eq!(target.orbits.len(), 1);
    }

    #[test]
    fn test_drain_without_quit() {
        let mut router = CommandRouter::new();
        let mut target = Recorded::default();
        let mut source = ScriptedInput::empty();
        assert!(!router.drain(&mut source, &mut target));
    }
}
