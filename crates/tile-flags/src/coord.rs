//! Tile coordinates and their `"x,y"` text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chunk::ChunkKey;
use crate::error::CoordError;

/// Tile coordinate on the signed 32-bit plane
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        TileCoord { x, y }
    }

    /// Key of the chunk this tile belongs to
    pub const fn chunk_key(&self) -> ChunkKey {
        ChunkKey::from_tile(self.x, self.y)
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from((x, y): (i32, i32)) -> Self {
        TileCoord { x, y }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parse from `"x,y"` (e.g. `"-65, 130"`)
impl FromStr for TileCoord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let x_str = parts.next().unwrap_or_default();
        let y_str = parts
            .next()
            .ok_or_else(|| CoordError::MissingSeparator(s.to_string()))?;
        if parts.next().is_some() {
            return Err(CoordError::TooManyComponents(s.to_string()));
        }

        Ok(TileCoord {
            x: parse_component('x', x_str)?,
            y: parse_component('y', y_str)?,
        })
    }
}

fn parse_component(axis: char, raw: &str) -> Result<i32, CoordError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| CoordError::InvalidComponent {
        axis,
        value: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord() {
        assert_eq!("0,0".parse::<TileCoord>(), Ok(TileCoord::new(0, 0)));
        assert_eq!(" -65 , 130 ".parse::<TileCoord>(), Ok(TileCoord::new(-65, 130)));
        assert_eq!(
            "-2147483648,2147483647".parse::<TileCoord>(),
            Ok(TileCoord::new(i32::MIN, i32::MAX))
        );
    }

    #[test]
    fn test_parse_coord_errors() {
        assert_eq!(
            "12".parse::<TileCoord>(),
            Err(CoordError::MissingSeparator("12".to_string()))
        );
        assert_eq!(
            "1,2,3".parse::<TileCoord>(),
            Err(CoordError::TooManyComponents("1,2,3".to_string()))
        );
        assert_eq!(
            "a,2".parse::<TileCoord>(),
            Err(CoordError::InvalidComponent {
                axis: 'x',
                value: "a".to_string()
            })
        );
        assert_eq!(
            "1,".parse::<TileCoord>(),
            Err(CoordError::InvalidComponent {
                axis: 'y',
                value: String::new()
            })
        );
        assert!("1,2147483648".parse::<TileCoord>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let coord = TileCoord::new(-1_000_000, 2_000_000_000);
        assert_eq!(coord.to_string(), "-1000000,2000000000");
        assert_eq!(coord.to_string().parse::<TileCoord>(), Ok(coord));
    }

    #[test]
    fn test_chunk_key() {
        assert_eq!(TileCoord::new(-65, 130).chunk_key(), ChunkKey::from_chunk_index(-2, 2));
        assert_eq!(TileCoord::from((63, 63)).chunk_key(), ChunkKey::from_tile(0, 0));
    }
}
