pub mod chunk;
pub mod config;
pub mod coord;
pub mod error;
pub mod grid;

pub use chunk::{ChunkKey, TileChunk, CHUNK_MASK, CHUNK_SHIFT, CHUNK_SIZE};
pub use config::GridConfig;
pub use coord::TileCoord;
pub use error::{ConfigError, CoordError};
pub use grid::TileFlags;
