use std::fs;
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;
use serde::Deserialize;
use tracing::debug;

use super::{Cell, CellId, HexMap, MapError, VisitState, NEIGHBOR_SLOTS};

/// On-disk map description: a JSON object with one string per grid row.
///
/// Cell codes: `.` open, `O` origin, `D` destination, `N` no-fly,
/// `T` interference tower. Rows must be non-empty and of equal length;
/// exactly one origin and one destination are required.
#[derive(Debug, Deserialize)]
struct RawMap {
    rows: Vec<String>,
}

impl HexMap {
    /// Reads and parses a map description from `path`.
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let text = fs::read_to_string(path)?;
        let map = text.parse()?;
        debug!(path = ?path, "loaded map");
        Ok(map)
    }
}

impl FromStr for HexMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawMap = serde_json::from_str(s)
            .map_err(|e| MapError::Invalid(format!("malformed map description: {e}")))?;

        if raw.rows.is_empty() {
            return Err(MapError::Invalid("map has no rows".into()));
        }
        if !raw.rows.iter().map(|r| r.chars().count()).all_equal() {
            return Err(MapError::Invalid("rows have differing lengths".into()));
        }
        let width = raw.rows[0].chars().count();
        if width == 0 {
            return Err(MapError::Invalid("rows are empty".into()));
        }
        let height = raw.rows.len();

        let mut cells = Vec::with_capacity(width * height);
        let mut origin: Option<CellId> = None;
        let mut destination: Option<CellId> = None;

        for (row, line) in raw.rows.iter().enumerate() {
            for (col, code) in line.chars().enumerate() {
                let id = cells.len();
                let mut cell = Cell {
                    col,
                    row,
                    neighbors: [None; NEIGHBOR_SLOTS],
                    no_fly: false,
                    interference: false,
                    is_destination: false,
                    distance: u32::MAX,
                    predecessor: None,
                    state: VisitState::Unvisited,
                };
                match code {
                    '.' => {}
                    'O' => {
                        if origin.replace(id).is_some() {
                            return Err(MapError::Invalid("more than one origin cell".into()));
                        }
                    }
                    'D' => {
                        cell.is_destination = true;
                        if destination.replace(id).is_some() {
                            return Err(MapError::Invalid("more than one destination cell".into()));
                        }
                    }
                    'N' => cell.no_fly = true,
                    'T' => cell.interference = true,
                    other => {
                        return Err(MapError::Invalid(format!(
                            "unknown cell code {other:?} at row {row}, column {col}"
                        )));
                    }
                }
                cells.push(cell);
            }
        }

        let origin = origin.ok_or_else(|| MapError::Invalid("no origin cell".into()))?;
        let destination =
            destination.ok_or_else(|| MapError::Invalid("no destination cell".into()))?;

        let mut map = HexMap { cells, width, height, origin, destination };
        map.build_adjacency();
        Ok(map)
    }
}
