//! The observable per-cell feature used by the sensor model.

use std::fmt;
use std::str::FromStr;

use crate::GridError;

/// A static, per-cell categorical label.
///
/// The sensor compares the class under the robot against every cell's class;
/// nothing else about the label is interpreted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorClass {
    #[default]
    Light,
    Dark,
}

impl ColorClass {
    pub const ALL: [ColorClass; 2] = [ColorClass::Light, ColorClass::Dark];

    /// Lowercase label used in CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorClass::Light => "light",
            ColorClass::Dark  => "dark",
        }
    }

    /// Single-character glyph used by text patterns and the grid renderer.
    pub fn glyph(self) -> char {
        match self {
            ColorClass::Light => '.',
            ColorClass::Dark  => '#',
        }
    }

    pub fn from_glyph(c: char) -> Option<ColorClass> {
        match c {
            '.' => Some(ColorClass::Light),
            '#' => Some(ColorClass::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ColorClass {
    type Err = GridError;

    fn from_str(s: &str) -> Result<ColorClass, GridError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "white" | "." => Ok(ColorClass::Light),
            "dark" | "grey" | "gray" | "#" => Ok(ColorClass::Dark),
            other => Err(GridError::Parse(format!(
                "invalid color class {other:?}: expected \"light\" or \"dark\""
            ))),
        }
    }
}
