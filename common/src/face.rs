use std::fmt;

use glam::IVec3;

/// Represents one face of a cube, either as a fixed slot or as the label that occupies it
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Face {
    West,
    Down,
    North,
    South,
    Up,
    East,
}

impl Face {
    /// Faces in slot order
    pub const ALL: [Self; 6] = [
        Self::West,
        Self::Down,
        Self::North,
        Self::South,
        Self::Up,
        Self::East,
    ];

    pub const fn index(&self) -> usize {
        match self {
            Self::West => 0,
            Self::Down => 1,
            Self::North => 2,
            Self::South => 3,
            Self::Up => 4,
            Self::East => 5,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::West),
            1 => Some(Self::Down),
            2 => Some(Self::North),
            3 => Some(Self::South),
            4 => Some(Self::Up),
            5 => Some(Self::East),
            _ => None,
        }
    }

    pub const fn opposite(&self) -> Self {
        match self {
            Self::West => Self::East,
            Self::Down => Self::Up,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::Up => Self::Down,
            Self::East => Self::West,
        }
    }

    /// Outward unit normal (+Y is up, +Z is south)
    pub const fn normal(&self) -> IVec3 {
        match self {
            Self::West => IVec3::new(-1, 0, 0),
            Self::Down => IVec3::new(0, -1, 0),
            Self::North => IVec3::new(0, 0, -1),
            Self::South => IVec3::new(0, 0, 1),
            Self::Up => IVec3::new(0, 1, 0),
            Self::East => IVec3::new(1, 0, 0),
        }
    }

    pub fn from_normal(normal: IVec3) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.normal() == normal)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::West => "West",
            Self::Down => "Down",
            Self::North => "North",
            Self::South => "South",
            Self::Up => "Up",
            Self::East => "East",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
