use serde::{Deserialize, Serialize};

use crate::error::GasketError;
use crate::gasket::{Point3, BASE_TETRAHEDRON};

/// Rotation axis, doubles as the index into `theta` and `rotate_xyz`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Extra rotation applied while the gasket bounces around in free roam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TransMode {
    #[default]
    Still,
    /// Spin about z
    Rotating,
    /// Spin about y
    Dancing,
    /// Spin about x
    Flipping,
    /// Jitter randomly about all axes
    Paralysing,
}

impl TransMode {
    pub const ALL: [TransMode; 5] = [
        TransMode::Still,
        TransMode::Rotating,
        TransMode::Dancing,
        TransMode::Flipping,
        TransMode::Paralysing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransMode::Still => "Still",
            TransMode::Rotating => "Rotating",
            TransMode::Dancing => "Dancing",
            TransMode::Flipping => "Flipping",
            TransMode::Paralysing => "Paralysing",
        }
    }
}

impl TryFrom<u8> for TransMode {
    type Error = GasketError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TransMode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| {
                GasketError::InvalidConfiguration(format!(
                    "translation mode must be 0..=4, got {}",
                    value
                ))
            })
    }
}

impl From<TransMode> for u8 {
    fn from(mode: TransMode) -> u8 {
        mode as u8
    }
}

/// Mutable simulation state of the gasket: transform, velocity and settings
#[derive(Debug, Clone, PartialEq)]
pub struct GasketObject {
    /// Reference shape, never transformed in place
    pub vertices: [Point3; 4],
    /// Rotation angles in degrees, never wrapped
    pub theta: [f64; 3],
    pub scale: f64,
    pub trans: [f64; 2],
    pub delta: [f64; 2],

    pub division: i32,
    pub speed: f64,
    pub degree: f64,
    pub rotate_xyz: [bool; 3],
    pub scale_fac: f64,
    pub trans_mode: TransMode,
    pub pause: bool,
}

impl GasketObject {
    /// Per-tick rotation increment in degrees
    pub fn rotation_step(&self) -> f64 {
        self.speed * 0.01
    }

    /// Per-tick scale increment
    pub fn scale_step(&self) -> f64 {
        self.speed * 0.0005
    }

    pub fn is_axis_enabled(&self, axis: Axis) -> bool {
        self.rotate_xyz[axis.index()]
    }

    pub fn reset_transform(&mut self, scale: f64) {
        self.theta = [0.0; 3];
        self.trans = [0.0; 2];
        self.scale = scale;
    }
}

impl Default for GasketObject {
    fn default() -> Self {
        Self {
            vertices: BASE_TETRAHEDRON,
            theta: [0.0; 3],
            scale: 1.0,
            trans: [0.0; 2],
            delta: [0.0; 2],
            division: 3,
            speed: 200.0,
            degree: 180.0,
            rotate_xyz: [false, false, true],
            scale_fac: 3.0,
            trans_mode: TransMode::Still,
            pause: true,
        }
    }
}
