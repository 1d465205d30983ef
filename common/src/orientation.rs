use crate::{face::Face, rotation::Rotate90};

/// Assignment of face labels to the six fixed slots of a cube.
///
/// Every field holds a distinct [`Face`]. Rotations only permute the fields,
/// so the assignment stays a bijection.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Orientation {
    pub west: Face,
    pub down: Face,
    pub north: Face,
    pub south: Face,
    pub up: Face,
    pub east: Face,
}

impl Orientation {
    pub const IDENTITY: Self = Self::new();

    /// Every slot holds the label with its own name
    pub const fn new() -> Self {
        Self {
            west: Face::West,
            down: Face::Down,
            north: Face::North,
            south: Face::South,
            up: Face::Up,
            east: Face::East,
        }
    }

    /// Starts from the identity, turns `x` about the X axis, then `y` about the Y axis
    pub const fn from_rotation(x: Rotate90, y: Rotate90) -> Self {
        Self::new()
            .rotate_x_n(x.index() as i64)
            .rotate_y_n(y.index() as i64)
    }

    /// Builds an orientation from labels in slot order, `None` unless every face appears once
    pub fn from_faces(faces: [Face; 6]) -> Option<Self> {
        let [west, down, north, south, up, east] = faces;
        let orientation = Self {
            west,
            down,
            north,
            south,
            up,
            east,
        };

        orientation.is_bijection().then_some(orientation)
    }

    /// Quarter turn about the vertical axis, up and down stay in place
    #[must_use]
    pub const fn rotate_y(self) -> Self {
        Self {
            west: self.south,
            south: self.east,
            east: self.north,
            north: self.west,
            ..self
        }
    }

    /// Quarter turn about the west-east axis, west and east stay in place
    #[must_use]
    pub const fn rotate_x(self) -> Self {
        Self {
            down: self.south,
            south: self.up,
            up: self.north,
            north: self.down,
            ..self
        }
    }

    /// Applies [`Self::rotate_y`] `n` times. Negative `n` turns the other way.
    #[must_use]
    pub const fn rotate_y_n(self, n: i64) -> Self {
        let mut orientation = self;
        let mut turns = Rotate90::from_turns(n).index();
        while turns > 0 {
            orientation = orientation.rotate_y();
            turns -= 1;
        }
        orientation
    }

    /// Applies [`Self::rotate_x`] `n` times. Negative `n` turns the other way.
    #[must_use]
    pub const fn rotate_x_n(self, n: i64) -> Self {
        let mut orientation = self;
        let mut turns = Rotate90::from_turns(n).index();
        while turns > 0 {
            orientation = orientation.rotate_x();
            turns -= 1;
        }
        orientation
    }

    /// Labels in slot order: west, down, north, south, up, east
    pub const fn display(&self) -> [Face; 6] {
        [
            self.west, self.down, self.north, self.south, self.up, self.east,
        ]
    }

    /// Label currently occupying `slot`
    pub const fn slot(&self, slot: Face) -> Face {
        match slot {
            Face::West => self.west,
            Face::Down => self.down,
            Face::North => self.north,
            Face::South => self.south,
            Face::Up => self.up,
            Face::East => self.east,
        }
    }

    /// Slot currently holding `label`
    pub fn slot_of(&self, label: Face) -> Face {
        Face::ALL
            .into_iter()
            .find(|&slot| self.slot(slot) == label)
            // A bijection always contains every label
            .unwrap_or(label)
    }

    /// Orientation that undoes this one
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            west: self.slot_of(Face::West),
            down: self.slot_of(Face::Down),
            north: self.slot_of(Face::North),
            south: self.slot_of(Face::South),
            up: self.slot_of(Face::Up),
            east: self.slot_of(Face::East),
        }
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; 6];
        for face in self.display() {
            if seen[face.index()] {
                return false;
            }
            seen[face.index()] = true;
        }
        seen.iter().all(|&s| s)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use glam::{IVec3, Mat3};
    use std::f32::consts::FRAC_PI_2;

    use super::Orientation;
    use crate::{face::Face, rotation::Rotate90};

    /// Walks through every orientation reachable by the two quarter turns
    fn reachable() -> Vec<Orientation> {
        let mut found = vec![Orientation::new()];
        let mut i = 0;
        while i < found.len() {
            for next in [found[i].rotate_x(), found[i].rotate_y()] {
                if !found.contains(&next) {
                    found.push(next);
                }
            }
            i += 1;
        }
        found
    }

    #[test]
    fn identity() {
        use Face::*;

        assert_eq!(
            Orientation::new().display(),
            [West, Down, North, South, Up, East]
        );
        assert_eq!(Orientation::default(), Orientation::IDENTITY);
    }

    #[test]
    fn single_y_turn() {
        let o = Orientation::new().rotate_y();

        assert_eq!(o.west, Face::South);
        assert_eq!(o.down, Face::Down);
        assert_eq!(o.north, Face::West);
        assert_eq!(o.south, Face::East);
        assert_eq!(o.up, Face::Up);
        assert_eq!(o.east, Face::North);
    }

    #[test]
    fn single_x_turn() {
        let o = Orientation::new().rotate_x();

        assert_eq!(o.west, Face::West);
        assert_eq!(o.down, Face::South);
        assert_eq!(o.north, Face::Down);
        assert_eq!(o.south, Face::Up);
        assert_eq!(o.up, Face::North);
        assert_eq!(o.east, Face::East);
    }

    #[test]
    fn full_turns_are_identity() {
        let o = Orientation::new().rotate_y_n(8);
        assert_eq!(o, Orientation::IDENTITY);
        assert_eq!(o.rotate_x_n(4), Orientation::IDENTITY);

        for state in reachable() {
            assert_eq!(state.rotate_x_n(4), state);
            assert_eq!(state.rotate_y_n(4), state);
            assert_eq!(state.rotate_x().rotate_x().rotate_x().rotate_x(), state);
        }
    }

    #[test]
    fn turns_add_up() {
        for state in reachable() {
            for a in 0..9 {
                for b in 0..9 {
                    assert_eq!(state.rotate_y_n(a + b), state.rotate_y_n(a).rotate_y_n(b));
                    assert_eq!(state.rotate_x_n(a + b), state.rotate_x_n(a).rotate_x_n(b));
                }
            }
        }
    }

    #[test]
    fn negative_turns_go_backwards() {
        let o = Orientation::new().rotate_x().rotate_y();

        assert_eq!(o.rotate_y_n(-1), o.rotate_y_n(3));
        assert_eq!(o.rotate_x_n(-6), o.rotate_x_n(2));
        assert_eq!(o.rotate_y_n(1).rotate_y_n(-1), o);
    }

    #[test]
    fn axes_do_not_commute() {
        let xy = Orientation::new().rotate_x_n(1).rotate_y_n(1);
        let yx = Orientation::new().rotate_y_n(1).rotate_x_n(1);

        assert_ne!(xy, yx);
    }

    #[test]
    fn cube_has_24_orientations() {
        let all = reachable();

        assert_eq!(all.len(), 24);
        assert!(all.iter().all(Orientation::is_bijection));
    }

    #[test]
    fn from_rotation_matches_turns() {
        for x in Rotate90::ALL {
            for y in Rotate90::ALL {
                let expected = Orientation::new()
                    .rotate_x_n(x.index() as i64)
                    .rotate_y_n(y.index() as i64);
                assert_eq!(Orientation::from_rotation(x, y), expected);
            }
        }
    }

    #[test]
    fn from_faces_rejects_duplicates() {
        use Face::*;

        assert_eq!(
            Orientation::from_faces([South, Down, West, East, Up, North]),
            Some(Orientation::new().rotate_y())
        );
        assert_eq!(
            Orientation::from_faces([West, West, North, South, Up, East]),
            None
        );
    }

    #[test]
    fn inverse_undoes_rotation() {
        for state in reachable() {
            let inv = state.inverse();
            for slot in Face::ALL {
                assert_eq!(inv.slot(state.slot(slot)), slot);
                assert_eq!(state.slot_of(state.slot(slot)), slot);
            }
            assert_eq!(inv.inverse(), state);
        }

        let x = Rotate90::R90;
        let y = Rotate90::R180;
        assert_eq!(
            Orientation::from_rotation(x, y).inverse(),
            Orientation::new()
                .rotate_y_n(4 - y.index() as i64)
                .rotate_x_n(4 - x.index() as i64)
        );
    }

    #[test]
    fn turns_match_geometry() {
        let rotate = |mat: Mat3, normal: IVec3| (mat * normal.as_vec3()).round().as_ivec3();
        let around_y = Mat3::from_rotation_y(-FRAC_PI_2);
        let around_x = Mat3::from_rotation_x(FRAC_PI_2);

        let y = Orientation::new().rotate_y();
        let x = Orientation::new().rotate_x();

        for slot in Face::ALL {
            // The label at `slot` moves to the slot the normal is carried to
            let y_target = Face::from_normal(rotate(around_y, slot.normal()));
            assert_eq!(y_target.map(|s| y.slot(s)), Some(slot));

            let x_target = Face::from_normal(rotate(around_x, slot.normal()));
            assert_eq!(x_target.map(|s| x.slot(s)), Some(slot));
        }
    }
}
