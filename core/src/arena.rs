//! Arena geometry and the drawing seam
//!
//! Positions are on the arena floor (X/Z plane). North is -Z, east is +X.

use std::fmt;

use wavecannon_types::Color;

/// World position on the arena floor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WPos {
    pub x: f32,
    pub z: f32,
}

impl WPos {
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for WPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.z)
    }
}

/// Facing or direction, stored in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f32);

impl Angle {
    pub const fn from_radians(rad: f32) -> Self {
        Self(rad)
    }

    pub fn from_degrees(deg: f32) -> Self {
        Self(deg.to_radians())
    }

    pub fn rad(self) -> f32 {
        self.0
    }

    pub fn deg(self) -> f32 {
        self.0.to_degrees()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}°", self.deg())
    }
}

/// Drawing primitives the host renderer provides.
/// Implement this for whatever draws on top of the arena.
pub trait ArenaDraw {
    /// Outline a circle; an all-zero color means "use the renderer default"
    fn add_circle(&mut self, center: WPos, radius: f32, color: Color);
}

/// A recorded `add_circle` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleDraw {
    pub center: WPos,
    pub radius: f32,
    pub color: Color,
}

/// Collects draw calls instead of rendering them (text front ends, tests)
impl ArenaDraw for Vec<CircleDraw> {
    fn add_circle(&mut self, center: WPos, radius: f32, color: Color) {
        self.push(CircleDraw {
            center,
            radius,
            color,
        });
    }
}
