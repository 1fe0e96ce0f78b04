//! Grid coordinates and cardinal directions
//!
//! The play volume is a cube of `GRID_SIZE` cells centered at the origin.
//! Cells at `±GRID_SIZE/2` on any axis are the boundary wall; the playable
//! interior is everything strictly inside it. Gameplay happens on the y = 0
//! plane, so headings are the four horizontal cardinals.

use glam::{IVec3, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::GRID_SIZE;

/// Lowest interior coordinate per axis
pub const INTERIOR_MIN: i32 = -GRID_SIZE / 2 + 1;
/// Highest interior coordinate per axis
pub const INTERIOR_MAX: i32 = GRID_SIZE / 2 - 1;

/// A horizontal cardinal heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dir {
    PosX,
    NegX,
    PosZ,
    NegZ,
}

impl Dir {
    /// All four headings, for iteration and sampling
    pub const ALL: [Dir; 4] = [Dir::PosX, Dir::NegX, Dir::PosZ, Dir::NegZ];

    /// Unit step in grid coordinates
    #[inline]
    pub const fn ivec(self) -> IVec3 {
        match self {
            Dir::PosX => IVec3::new(1, 0, 0),
            Dir::NegX => IVec3::new(-1, 0, 0),
            Dir::PosZ => IVec3::new(0, 0, 1),
            Dir::NegZ => IVec3::new(0, 0, -1),
        }
    }

    /// Unit vector in world coordinates
    #[inline]
    pub fn vec(self) -> Vec3 {
        self.ivec().as_vec3()
    }

    /// The exact reverse heading
    #[inline]
    pub const fn opposite(self) -> Dir {
        match self {
            Dir::PosX => Dir::NegX,
            Dir::NegX => Dir::PosX,
            Dir::PosZ => Dir::NegZ,
            Dir::NegZ => Dir::PosZ,
        }
    }

    /// 90° turn counter-clockwise about +Y: (x, z) -> (z, -x)
    #[inline]
    pub const fn turned_left(self) -> Dir {
        match self {
            Dir::PosX => Dir::NegZ,
            Dir::NegZ => Dir::NegX,
            Dir::NegX => Dir::PosZ,
            Dir::PosZ => Dir::PosX,
        }
    }

    /// 90° turn clockwise about +Y: (x, z) -> (-z, x)
    #[inline]
    pub const fn turned_right(self) -> Dir {
        match self {
            Dir::PosX => Dir::PosZ,
            Dir::PosZ => Dir::NegX,
            Dir::NegX => Dir::NegZ,
            Dir::NegZ => Dir::PosX,
        }
    }
}

/// Whether a cell lies strictly inside the boundary wall
#[inline]
pub fn in_interior(cell: IVec3) -> bool {
    cell.x.abs() < GRID_SIZE / 2 && cell.y.abs() < GRID_SIZE / 2 && cell.z.abs() < GRID_SIZE / 2
}

/// Sample a uniformly random interior cell on the y = 0 plane
pub fn random_interior_cell(rng: &mut impl Rng) -> IVec3 {
    IVec3::new(
        rng.random_range(INTERIOR_MIN..=INTERIOR_MAX),
        0,
        rng.random_range(INTERIOR_MIN..=INTERIOR_MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_interior_bounds() {
        assert!(in_interior(IVec3::ZERO));
        assert!(in_interior(IVec3::new(INTERIOR_MAX, 0, INTERIOR_MIN)));
        assert!(!in_interior(IVec3::new(GRID_SIZE / 2, 0, 0)));
        assert!(!in_interior(IVec3::new(0, 0, -GRID_SIZE / 2)));
        assert!(!in_interior(IVec3::new(0, GRID_SIZE / 2, 0)));
    }

    #[test]
    fn test_turns_match_axis_rotation() {
        // Facing +X, left is -Z and right is +Z (y-up, right-handed)
        assert_eq!(Dir::PosX.turned_left(), Dir::NegZ);
        assert_eq!(Dir::PosX.turned_right(), Dir::PosZ);
        for dir in Dir::ALL {
            let v = dir.ivec();
            let left = dir.turned_left().ivec();
            assert_eq!(left, IVec3::new(v.z, 0, -v.x));
            let right = dir.turned_right().ivec();
            assert_eq!(right, IVec3::new(-v.z, 0, v.x));
        }
    }

    #[test]
    fn test_random_interior_cell_stays_inside() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let cell = random_interior_cell(&mut rng);
            assert!(in_interior(cell));
            assert_eq!(cell.y, 0);
        }
    }

    fn any_dir() -> impl Strategy<Value = Dir> {
        prop_oneof![
            Just(Dir::PosX),
            Just(Dir::NegX),
            Just(Dir::PosZ),
            Just(Dir::NegZ),
        ]
    }

    proptest! {
        #[test]
        fn prop_headings_are_horizontal_units(dir in any_dir()) {
            let v = dir.ivec();
            prop_assert_eq!(v.x.abs() + v.z.abs(), 1);
            prop_assert_eq!(v.y, 0);
        }

        #[test]
        fn prop_turn_algebra(dir in any_dir()) {
            prop_assert_eq!(dir.turned_left().turned_right(), dir);
            prop_assert_eq!(
                dir.turned_left().turned_left(),
                dir.opposite()
            );
            prop_assert_eq!(dir.opposite().opposite(), dir);
            // Four lefts come back around
            let mut d = dir;
            for _ in 0..4 {
                d = d.turned_left();
            }
            prop_assert_eq!(d, dir);
        }
    }
}
