//! Palette module - the six color names a cube is painted with
//!
//! Cells store a [`Color`] index; the palette turns it back into a name the
//! renderer can map to pixels. Names are opaque here.

use crate::error::CubeError;
use crate::types::{Color, DEFAULT_PALETTE, PALETTE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    names: [String; PALETTE_SIZE],
}

impl Palette {
    /// Build a palette from a list of names.
    ///
    /// Duplicates are dropped in first-seen order and the first six distinct
    /// names are kept. Fewer than six distinct names is an error.
    pub fn new<I, S>(names: I) -> Result<Self, CubeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distinct: Vec<String> = Vec::with_capacity(PALETTE_SIZE);
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || distinct.iter().any(|d| d == name) {
                continue;
            }
            distinct.push(name.to_string());
            if distinct.len() == PALETTE_SIZE {
                break;
            }
        }

        let count = distinct.len();
        let names: [String; PALETTE_SIZE] = distinct
            .try_into()
            .map_err(|_| CubeError::InvalidPalette { distinct: count })?;
        Ok(Self { names })
    }

    /// Name of a color, `None` if the index is outside the palette
    pub fn name(&self, color: Color) -> Option<&str> {
        self.names.get(color.index()).map(String::as_str)
    }

    pub fn names(&self) -> &[String; PALETTE_SIZE] {
        &self.names
    }

    /// The six colors in palette order
    pub fn colors(&self) -> impl Iterator<Item = Color> {
        (0..PALETTE_SIZE as u8).map(Color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            names: DEFAULT_PALETTE.map(String::from),
        }
    }
}
