//! Model element rotation values and the legacy single-axis gate.

/// A 3-component float vector. Rotation components are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One of the three rotation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis3 {
    X,
    Y,
    Z,
}

/// Angle tolerance for the legacy checks.
const EPSILON: f32 = 1e-4;
/// The angle grid of the legacy encoding.
const ANGLE_STEP: f32 = 22.5;
/// The largest angle magnitude the legacy encoding can carry.
const MAX_ANGLE: f32 = 45.0;

/// A model element rotation: pivot origin, per-axis angles, and the
/// rescale flag.
///
/// Angles are conventionally within `[-45.0, 45.0]` but that is not
/// enforced at construction; [`contains_legacy_rotation`] reports whether
/// the stricter legacy encoding can represent the value.
///
/// [`contains_legacy_rotation`]: ElementRotation::contains_legacy_rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRotation {
    /// The rotation origin (pivot point).
    pub origin: Vector3,
    /// Per-axis rotation angles, in degrees.
    pub rotation: Vector3,
    /// Whether faces are scaled across the whole block.
    pub rescale: bool,
}

impl ElementRotation {
    /// Default value of the rescale flag.
    pub const DEFAULT_RESCALE: bool = false;

    /// Creates a rotation from its parts.
    pub const fn new(origin: Vector3, rotation: Vector3, rescale: bool) -> Self {
        Self {
            origin,
            rotation,
            rescale,
        }
    }

    /// Builds a rotation from the legacy single-axis form.
    #[deprecated(note = "construct with a full rotation vector instead")]
    pub fn from_axis_angle(origin: Vector3, axis: Axis3, angle: f32, rescale: bool) -> Self {
        let rotation = match axis {
            Axis3::X => Vector3::new(angle, 0.0, 0.0),
            Axis3::Y => Vector3::new(0.0, angle, 0.0),
            Axis3::Z => Vector3::new(0.0, 0.0, angle),
        };
        Self::new(origin, rotation, rescale)
    }

    /// Reports whether this rotation can be written in the legacy
    /// single-axis, 22.5-degree-step encoding without changing meaning.
    ///
    /// An all-zero rotation carries no encoding preference of its own, so
    /// the caller's `write_legacy` flag is returned unchanged. When the
    /// rotation satisfies every legacy constraint the flag is also
    /// returned as-is: this gate decides eligibility, the caller decides
    /// intent.
    pub fn contains_legacy_rotation(&self, write_legacy: bool) -> bool {
        let Vector3 { x, y, z } = self.rotation;

        // All zero: nothing to decide either way.
        if x.abs() < EPSILON && y.abs() < EPSILON && z.abs() < EPSILON {
            return write_legacy;
        }

        // Legacy angles live in [-45, 45].
        if x.abs() > MAX_ANGLE || y.abs() > MAX_ANGLE || z.abs() > MAX_ANGLE {
            return false;
        }

        // Legacy rotation is about exactly one axis.
        let non_zero = [x, y, z].iter().filter(|v| v.abs() > EPSILON).count();
        if non_zero > 1 {
            return false;
        }

        // Every angle must sit on the 22.5-degree grid.
        if !is_multiple_of_step(x) || !is_multiple_of_step(y) || !is_multiple_of_step(z) {
            return false;
        }

        write_legacy
    }

    /// The rotation axis of the legacy single-axis view, picked with
    /// x -> y -> z priority; Y when all angles are zero.
    #[deprecated(note = "inspect the rotation vector instead")]
    pub fn axis(&self) -> Axis3 {
        if self.rotation.x != 0.0 {
            Axis3::X
        } else if self.rotation.y != 0.0 {
            Axis3::Y
        } else if self.rotation.z != 0.0 {
            Axis3::Z
        } else {
            Axis3::Y
        }
    }

    /// The rotation angle of the legacy single-axis view, picked with
    /// x -> y -> z priority.
    #[deprecated(note = "inspect the rotation vector instead")]
    pub fn angle(&self) -> f32 {
        if self.rotation.x != 0.0 {
            self.rotation.x
        } else if self.rotation.y != 0.0 {
            self.rotation.y
        } else {
            self.rotation.z
        }
    }

    /// Returns a copy with a different origin.
    pub fn with_origin(mut self, origin: Vector3) -> Self {
        self.origin = origin;
        self
    }

    /// Returns a copy with a different rotation vector.
    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy with a different rescale flag.
    pub fn with_rescale(mut self, rescale: bool) -> Self {
        self.rescale = rescale;
        self
    }
}

fn is_multiple_of_step(value: f32) -> bool {
    let quotient = value / ANGLE_STEP;
    (quotient - quotient.round()).abs() < EPSILON
}
