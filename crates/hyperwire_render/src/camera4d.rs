//! 4D Camera
//!
//! The camera is defined by an eye position, a look-at target, and an up
//! direction, all in 4-space, plus the projection distance used by the
//! 4D->3D stage. The view transform is cached and recomputed lazily when any
//! of the three vectors change.

use hyperwire_math::{cross4, mat4, Affine4, RotationPlane, Vec4};

/// Forward vectors shorter than this are considered degenerate
const MIN_FORWARD_LENGTH: f32 = 1e-6;

/// The smallest allowed projection distance
pub const MIN_DISTANCE: f32 = 0.1;

/// Camera errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    /// No view basis exists: eye and target coincide, or up is parallel to
    /// the view direction
    Degenerate,
}

impl std::fmt::Display for CameraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraError::Degenerate => write!(f, "degenerate camera basis"),
        }
    }
}

impl std::error::Error for CameraError {}

/// Build the 4D look-at view transform.
///
/// The orthonormal basis comes from repeated generalized cross products:
/// forward is the view direction, right is perpendicular to up and forward,
/// up is re-derived perpendicular to both, and ana completes the basis. The
/// basis vectors form the rows of the rotation, composed with a translation
/// by -eye, so `apply(p)` yields camera-space coordinates with depth growing
/// along the view direction.
///
/// Fails with [`CameraError::Degenerate`] when eye and target coincide.
pub fn look_at(eye: Vec4, target: Vec4, up: Vec4) -> Result<Affine4, CameraError> {
    let forward_raw = target - eye;
    if forward_raw.length() < MIN_FORWARD_LENGTH {
        return Err(CameraError::Degenerate);
    }
    let forward = forward_raw.normalized();

    // The cross product needs a third independent vector; pick the first
    // fixed axis that is not spanned by up and forward.
    let over = [Vec4::W, Vec4::X, Vec4::Y, Vec4::Z]
        .into_iter()
        .find(|&axis| cross4(up, axis, forward).length() >= MIN_FORWARD_LENGTH)
        .unwrap_or(Vec4::W);

    let right = cross4(up, over, forward).normalized();
    if right.length() < MIN_FORWARD_LENGTH {
        // up is parallel to the view direction
        return Err(CameraError::Degenerate);
    }
    let true_up = cross4(over, right, forward).normalized();
    let ana = cross4(right, true_up, forward);

    let mut basis = mat4::IDENTITY;
    mat4::set_row(&mut basis, 0, right);
    mat4::set_row(&mut basis, 1, true_up);
    mat4::set_row(&mut basis, 2, forward);
    mat4::set_row(&mut basis, 3, ana);

    let translation = -mat4::transform(basis, eye);
    Ok(Affine4::new(basis, translation))
}

/// 4D camera with cached view transform
pub struct Camera4D {
    eye: Vec4,
    target: Vec4,
    up: Vec4,
    distance: f32,
    view: Affine4,
    dirty: bool,
}

impl Camera4D {
    /// Create a camera; fails if eye and target coincide
    pub fn new(eye: Vec4, target: Vec4, up: Vec4, distance: f32) -> Result<Self, CameraError> {
        let view = look_at(eye, target, up)?;
        Ok(Self {
            eye,
            target,
            up,
            distance: distance.max(MIN_DISTANCE),
            view,
            dirty: false,
        })
    }

    /// Default viewing position: back along -Z, looking at the origin
    pub fn front_view(distance: f32) -> Self {
        let distance = distance.max(MIN_DISTANCE);
        // Eye at -2x the projection distance mirrors the classic framing
        // where the whole unit polytope fits the viewport.
        let eye = Vec4::new(0.0, 0.0, -2.0 * distance, 0.0);
        match Self::new(eye, Vec4::ZERO, Vec4::Y, distance) {
            Ok(camera) => camera,
            // Unreachable: the eye sits at least 0.2 units from the origin
            Err(_) => unreachable!("front_view eye cannot coincide with origin"),
        }
    }

    /// Camera position
    #[inline]
    pub fn eye(&self) -> Vec4 {
        self.eye
    }

    /// Look-at target
    #[inline]
    pub fn target(&self) -> Vec4 {
        self.target
    }

    /// Projection distance for the 4D->3D stage
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Move the eye, rejecting a move onto the target
    pub fn move_by(&mut self, delta: Vec4) -> Result<(), CameraError> {
        let new_eye = self.eye + delta;
        if (self.target - new_eye).length() < MIN_FORWARD_LENGTH {
            return Err(CameraError::Degenerate);
        }
        self.eye = new_eye;
        self.dirty = true;
        Ok(())
    }

    /// Orbit the eye around the target: `dx` rotates in the XY plane, `dy`
    /// in the XZ plane (radians). The eye-target distance is preserved.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        let offset = self.eye - self.target;
        let rot = mat4::mul(
            RotationPlane::Xy.rotation(dx),
            RotationPlane::Xz.rotation(dy),
        );
        self.eye = self.target + mat4::transform(rot, offset);
        self.dirty = true;
    }

    /// Scale the projection distance, clamped to [`MIN_DISTANCE`]
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).max(MIN_DISTANCE);
    }

    /// The current view transform, recomputed if any input changed
    pub fn view(&mut self) -> Result<Affine4, CameraError> {
        if self.dirty {
            self.view = look_at(self.eye, self.target, self.up)?;
            self.dirty = false;
        }
        Ok(self.view)
    }
}
