use std::ops::{Add, Neg};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RotationError {
    #[error("Rotation must be a multiple of 90 degrees (found: {0})")]
    NotQuarterTurn(i32),
}

/// Quarter turn about an axis
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default, Debug)]
pub enum Rotate90 {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotate90 {
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Normalizes any number of quarter turns, negative counts turn the other way
    pub const fn from_turns(turns: i64) -> Self {
        match turns.rem_euclid(4) {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }

    pub const fn from_degrees(degrees: i32) -> Result<Self, RotationError> {
        if degrees % 90 != 0 {
            return Err(RotationError::NotQuarterTurn(degrees));
        }

        Ok(Self::from_turns((degrees / 90) as i64))
    }

    pub const fn index(&self) -> usize {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }

    pub const fn degrees(&self) -> i32 {
        self.index() as i32 * 90
    }

    pub const fn inverse(&self) -> Self {
        match self {
            Self::R0 => Self::R0,
            Self::R90 => Self::R270,
            Self::R180 => Self::R180,
            Self::R270 => Self::R90,
        }
    }
}

impl Neg for Rotate90 {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl Add for Rotate90 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_turns((self.index() + rhs.index()) as i64)
    }
}

impl TryFrom<i32> for Rotate90 {
    type Error = RotationError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}
