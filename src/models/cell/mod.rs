// Cell module
// Grid cell identity for the availability grid

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single (date, time-slot) unit of the availability grid.
///
/// Cells are addressed by column (`date_index`) and row (`time_index`)
/// within a fully materialized grid. The canonical text form is
/// `"{date_index}-{time_index}"`, e.g. `"0-3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    pub date_index: usize,
    pub time_index: usize,
}

impl CellId {
    /// Create a cell id from its grid coordinates.
    pub fn new(date_index: usize, time_index: usize) -> Self {
        Self {
            date_index,
            time_index,
        }
    }

    /// All cells in the axis-aligned rectangle spanned by `self` and
    /// `other`, both corners inclusive. Either corner may come first;
    /// each axis is normalized by min/max.
    pub fn rectangle_to(self, other: CellId) -> Vec<CellId> {
        let date_lo = self.date_index.min(other.date_index);
        let date_hi = self.date_index.max(other.date_index);
        let time_lo = self.time_index.min(other.time_index);
        let time_hi = self.time_index.max(other.time_index);

        let mut cells = Vec::with_capacity((date_hi - date_lo + 1) * (time_hi - time_lo + 1));
        for date_index in date_lo..=date_hi {
            for time_index in time_lo..=time_hi {
                cells.push(CellId::new(date_index, time_index));
            }
        }
        cells
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.date_index, self.time_index)
    }
}

impl FromStr for CellId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, time) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid cell id '{}': expected 'date-time'", s))?;
        let date_index = date
            .parse()
            .map_err(|_| format!("Invalid date index in cell id '{}'", s))?;
        let time_index = time
            .parse()
            .map_err(|_| format!("Invalid time index in cell id '{}'", s))?;
        Ok(Self {
            date_index,
            time_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        let cell = CellId::new(3, 12);
        assert_eq!(cell.to_string(), "3-12");
        assert_eq!("3-12".parse::<CellId>().unwrap(), cell);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<CellId>().is_err());
        assert!("3".parse::<CellId>().is_err());
        assert!("a-b".parse::<CellId>().is_err());
        assert!("1-".parse::<CellId>().is_err());
    }

    #[test]
    fn test_rectangle_single_cell() {
        let cell = CellId::new(2, 3);
        assert_eq!(cell.rectangle_to(cell), vec![cell]);
    }

    #[test]
    fn test_rectangle_spans_both_axes() {
        let cells = CellId::new(2, 3).rectangle_to(CellId::new(4, 5));
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&CellId::new(2, 3)));
        assert!(cells.contains(&CellId::new(3, 4)));
        assert!(cells.contains(&CellId::new(4, 5)));
    }

    #[test]
    fn test_rectangle_direction_independent() {
        let mut forward = CellId::new(2, 3).rectangle_to(CellId::new(0, 1));
        let mut backward = CellId::new(0, 1).rectangle_to(CellId::new(2, 3));
        forward.sort();
        backward.sort();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 6);
    }
}
