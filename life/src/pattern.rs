use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use crate::{Cell, Universe};

impl FromStr for Universe {
    type Err = String;

    /// Parses a plaintext pattern: `o` is alive, `.` or a space is dead.
    ///
    /// The width is the longest line, the height the line count; short lines
    /// pad with dead cells. Blank lines at either end and any indentation
    /// common to every line are ignored, so indented string literals work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .skip_while(|line| line.is_empty())
            .collect();
        let Some(last) = lines.iter().rposition(|line| !line.is_empty()) else {
            return Err("empty pattern".to_owned());
        };
        let indent = lines[..=last]
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| line.len() - line.trim_start().len())
            .min()
            .unwrap_or_default();
        let lines = lines[..=last]
            .iter()
            .map(|line| line.get(indent..).unwrap_or_default());

        let mut alive = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (row, line) in lines.enumerate() {
            for (col, c) in line.chars().enumerate() {
                match c {
                    'o' => alive.push((row as u32, col as u32)),
                    '.' | ' ' => (),
                    _ => return Err(format!("unexpected character {c}")),
                }
            }
            width = width.max(line.chars().count() as u32);
            height = row as u32 + 1;
        }
        let mut universe = Universe::new(width, height);
        universe.set_cells(&alive);
        Ok(universe)
    }
}

impl Display for Universe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells().chunks(self.width() as usize).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for &cell in row {
                f.write_char(match cell {
                    Cell::Alive => 'o',
                    Cell::Dead => '.',
                })?;
            }
        }
        Ok(())
    }
}
