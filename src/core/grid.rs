use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use log::debug;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::cell::Cell;
use crate::core::consts::{COMMENT_PREFIX, DEFAULT_SEPARATOR, PADDING_GLYPH, ROW_SEPARATORS};
use crate::core::error::{LevelError, MalformedLevel};
use crate::core::models::{DynamicKind, StaticKind, Vec2};

/// A loaded level: the cells plus the cached player position.
///
/// Cells only change through [`Grid::do_move`] and its inverse, which keep
/// the cached position in sync.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: BoundedGrid<Cell>,
    pub(crate) player: Vec2,
}

impl Grid {
    /// Builds a grid from level lines.
    ///
    /// Lines starting with `;` are comments. Any other line may pack several
    /// rows separated by `|` or newlines. Blank lines are kept as rows, and rows
    /// shorter than the widest one are padded with floor.
    pub fn parse<I, S>(lines: I) -> Result<Grid, MalformedLevel>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = split_rows(lines);
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err(MalformedLevel::NoRows);
        }
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for row in &rows {
            let mut glyphs = row.chars();
            for _ in 0..width {
                cells.push(Cell::from_char(glyphs.next().unwrap_or(PADDING_GLYPH)));
            }
        }

        let bounds = BoundsOriginRoot::new(width as i32, height as i32);
        let cells = BoundedGrid::from_cells(bounds, cells);

        let player = {
            let mut players = cells.iter_positions().filter(|(_, cell)| cell.is_player()).map(|(pos, _)| pos);
            let first = players.next().ok_or(MalformedLevel::NoPlayer)?;
            if let Some(second) = players.next() {
                return Err(MalformedLevel::MultiplePlayers { first, second });
            }
            first
        };

        debug!("parsed level {}x{} with player at ({}, {})", width, height, player.x, player.y);
        Ok(Grid { cells, player })
    }

    /// Reads a level from a text stream. I/O failures are passed through unchanged.
    pub fn load<R: BufRead>(reader: R) -> Result<Grid, LevelError> {
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
        Ok(Grid::parse(lines)?)
    }

    pub fn save<W: Write>(&self, mut writer: W) -> Result<(), LevelError> {
        write!(writer, "{}", self)?;
        writer.flush()?;
        Ok(())
    }

    /// Encodes every cell, placing `separator` between rows but not after the last one.
    pub fn serialize(&self, separator: &str) -> String {
        let mut result = String::with_capacity(self.cells.size().area() as usize + self.height() as usize * separator.len());
        for (y, row) in self.cells.rows().enumerate() {
            if y > 0 {
                result.push_str(separator);
            }
            result.extend(row.iter().map(Cell::to_char));
        }
        result
    }

    pub fn width(&self) -> i32 {
        self.cells.size().extent.x
    }

    pub fn height(&self) -> i32 {
        self.cells.size().extent.y
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.cells.get(&Vec2::new(x, y))
    }

    pub fn get_static_cell_value(&self, x: i32, y: i32) -> Option<u8> {
        self.get_cell(x, y).map(Cell::static_value)
    }

    pub fn get_dynamic_cell_value(&self, x: i32, y: i32) -> Option<u8> {
        self.get_cell(x, y).map(Cell::dynamic_value)
    }

    /// Counts cells matching both filters; `None` matches any kind.
    pub fn count_cells(&self, static_filter: Option<StaticKind>, dynamic_filter: Option<DynamicKind>) -> usize {
        self.cells
            .iter()
            .filter(|cell| static_filter.is_none_or(|kind| cell.static_kind() == kind))
            .filter(|cell| dynamic_filter.is_none_or(|kind| cell.dynamic_kind() == kind))
            .count()
    }
}

fn split_rows<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rows = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if line.starts_with(COMMENT_PREFIX) {
            continue;
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            rows.push(String::new());
            continue;
        }
        // runs of separators collapse; a leading separator still yields an empty first row
        for (i, row) in line.split(ROW_SEPARATORS).enumerate() {
            let row = row.strip_suffix('\r').unwrap_or(row);
            if i > 0 && row.is_empty() {
                continue;
            }
            rows.push(row.to_string());
        }
    }
    rows
}

impl FromStr for Grid {
    type Err = MalformedLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s.lines())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(DEFAULT_SEPARATOR))
    }
}
