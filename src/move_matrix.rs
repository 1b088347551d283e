use std::{fmt, ops};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};


// Reachability matrix: `true` at every square a piece may currently move to.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveMatrix {
    data: [[bool; NUM_COLS as usize]; NUM_ROWS as usize],
}

impl MoveMatrix {
    pub fn new() -> Self { Self::default() }

    pub fn contains(&self, pos: Coord) -> bool { self[pos] }
    pub fn insert(&mut self, pos: Coord) { self[pos] = true; }

    pub fn is_empty(&self) -> bool { self.data.iter().flatten().all(|&reachable| !reachable) }
    pub fn len(&self) -> usize { self.data.iter().flatten().filter(|&&reachable| reachable).count() }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|&pos| self[pos])
    }

    pub fn to_array(self) -> [[bool; NUM_COLS as usize]; NUM_ROWS as usize] { self.data }
}

impl ops::Index<Coord> for MoveMatrix {
    type Output = bool;
    fn index(&self, pos: Coord) -> &bool {
        &self.data[pos.row.to_zero_based() as usize][pos.col.to_zero_based() as usize]
    }
}

impl ops::IndexMut<Coord> for MoveMatrix {
    fn index_mut(&mut self, pos: Coord) -> &mut bool {
        &mut self.data[pos.row.to_zero_based() as usize][pos.col.to_zero_based() as usize]
    }
}

impl ops::BitOrAssign for MoveMatrix {
    fn bitor_assign(&mut self, other: Self) {
        for pos in Coord::all() {
            self[pos] |= other[pos];
        }
    }
}

impl FromIterator<Coord> for MoveMatrix {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut matrix = Self::new();
        for pos in iter {
            matrix.insert(pos);
        }
        matrix
    }
}

impl fmt::Debug for MoveMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveMatrix ")?;
        f.debug_set().entries(self.coords().map(|pos| pos.to_algebraic())).finish()
    }
}
