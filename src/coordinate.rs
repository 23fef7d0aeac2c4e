use core::fmt;

/// A grid cell addressed by column (`x`) and row (`y`). Rows grow downwards, so "up" is `y - 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the von Neumann neighbourhood in expansion order: left, right, up, down.
/// Every solver sees neighbours in this order, which fixes how ties are broken.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four orthogonal neighbours, unfiltered. Some of them may lie off the grid.
    pub fn neumann_neighborhood(&self) -> [Coordinate; 4] {
        NEUMANN_OFFSETS.map(|(dx, dy)| Coordinate::new(self.x + dx, self.y + dy))
    }

    /// True if `other` differs by exactly one unit along exactly one axis.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_order() {
        let c = Coordinate::new(2, 2);
        assert_eq!(
            c.neumann_neighborhood(),
            [
                Coordinate::new(1, 2),
                Coordinate::new(3, 2),
                Coordinate::new(2, 1),
                Coordinate::new(2, 3)
            ]
        );
    }

    #[test]
    fn manhattan() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(3, -4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
        assert!(a.is_adjacent(&Coordinate::new(0, 1)));
        assert!(!a.is_adjacent(&Coordinate::new(1, 1)));
        assert!(!a.is_adjacent(&a));
    }

    #[test]
    fn display_and_from_tuple() {
        let c: Coordinate = (4, 7).into();
        assert_eq!(c.to_string(), "(4, 7)");
    }
}
