use std::fmt;

use clap::ValueEnum;

/// Compass direction a row of the sheet faces.
///
/// Rows are laid out top to bottom in the order of [`Direction::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Direction {
    #[value(name = "n")]
    North,
    #[value(name = "s")]
    South,
    #[value(name = "e")]
    East,
    #[value(name = "w")]
    West,
    #[value(name = "se")]
    SouthEast,
    #[value(name = "sw")]
    SouthWest,
    #[value(name = "ne")]
    NorthEast,
    #[value(name = "nw")]
    NorthWest,
}

impl Direction {
    /// Row order of a walk sheet, top to bottom
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthEast,
        Direction::NorthWest,
    ];

    /// Direction for the 0-based row index, if the sheet has such a row
    pub fn from_row(row: usize) -> Option<Self> {
        Self::ALL.get(row).copied()
    }

    /// Short tag used in output filenames
    pub fn tag(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East => "e",
            Direction::West => "w",
            Direction::SouthEast => "se",
            Direction::SouthWest => "sw",
            Direction::NorthEast => "ne",
            Direction::NorthWest => "nw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_order() {
        let tags: Vec<_> = (0..8)
            .filter_map(Direction::from_row)
            .map(Direction::tag)
            .collect();
        assert_eq!(tags, ["n", "s", "e", "w", "se", "sw", "ne", "nw"]);
    }

    #[test]
    fn test_rows_past_eighth_have_no_direction() {
        assert_eq!(Direction::from_row(8), None);
        assert_eq!(Direction::from_row(100), None);
    }

    #[test]
    fn test_value_enum_matches_tag() {
        for dir in Direction::ALL {
            let parsed = <Direction as ValueEnum>::from_str(dir.tag(), false);
            assert_eq!(parsed, Ok(dir));
        }
    }
}
