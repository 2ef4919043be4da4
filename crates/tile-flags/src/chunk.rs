//! Chunk addressing and bit storage for the tile flag grid.
//!
//! The tile plane is split into 64x64 chunks. A chunk stores one `u64` per row,
//! with bit `c` of row `r` holding the flag for local column `c`:
//! - `x >> CHUNK_SHIFT` / `y >> CHUNK_SHIFT` pick the chunk (floor division,
//!   so negative tiles land in negative chunks)
//! - `x & CHUNK_MASK` / `y & CHUNK_MASK` pick the bit inside it

use std::fmt;

/// Number of bits to shift a tile coordinate to get its chunk index.
pub const CHUNK_SHIFT: u32 = 6;

/// Size of each chunk in both dimensions (64x64 tiles per chunk).
pub const CHUNK_SIZE: usize = 1 << CHUNK_SHIFT;

/// Mask extracting the in-chunk offset of a tile coordinate.
pub const CHUNK_MASK: i32 = (CHUNK_SIZE as i32) - 1;

/// Packed identifier of a 64x64 chunk.
///
/// The chunk x-index occupies the high 32 bits and the chunk y-index the low
/// 32 bits, so every pair of `i32` chunk indices maps to a distinct key.
///
/// # Examples
///
/// ```
/// use tile_flags::ChunkKey;
///
/// let key = ChunkKey::from_tile(-65, 130);
/// assert_eq!(key.chunk_x(), -2);
/// assert_eq!(key.chunk_y(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkKey(i64);

impl ChunkKey {
    /// Key of the chunk containing tile `(x, y)`.
    #[inline]
    pub const fn from_tile(x: i32, y: i32) -> Self {
        Self::from_chunk_index(x >> CHUNK_SHIFT, y >> CHUNK_SHIFT)
    }

    /// Key of the chunk at chunk-space position `(cx, cy)`.
    #[inline]
    pub const fn from_chunk_index(cx: i32, cy: i32) -> Self {
        ChunkKey(((cx as i64) << 32) | (cy as u32 as i64))
    }

    /// Chunk-space x index.
    #[inline]
    pub const fn chunk_x(self) -> i32 {
        (self.0 >> 32) as i32
    }

    /// Chunk-space y index.
    #[inline]
    pub const fn chunk_y(self) -> i32 {
        self.0 as i32
    }

    /// The raw packed value.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for ChunkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkKey({}, {})", self.chunk_x(), self.chunk_y())
    }
}

/// Convert tile coordinates to `(row, col)` inside their chunk (0-63 each).
#[inline]
pub const fn to_local(x: i32, y: i32) -> (usize, usize) {
    ((y & CHUNK_MASK) as usize, (x & CHUNK_MASK) as usize)
}

/// A single 64x64 block of flags.
///
/// Always holds exactly `CHUNK_SIZE` rows; a freshly created chunk has every
/// flag unset.
#[derive(Clone, PartialEq, Eq)]
pub struct TileChunk {
    rows: [u64; CHUNK_SIZE],
}

impl TileChunk {
    /// Create a chunk with every flag unset.
    pub const fn new() -> Self {
        Self {
            rows: [0; CHUNK_SIZE],
        }
    }

    /// Whether the flag at local `(row, col)` is set.
    ///
    /// # Arguments
    ///
    /// * `row` - Row within this chunk (0-63)
    /// * `col` - Column within this chunk (0-63)
    ///
    /// # Panics
    ///
    /// Panics if `row >= CHUNK_SIZE`. `col` must also be below `CHUNK_SIZE`;
    /// larger values panic on shift overflow in debug builds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row] & (1u64 << col) != 0
    }

    /// Set the flag at local `(row, col)`.
    ///
    /// # Panics
    ///
    /// Same argument ranges as [`TileChunk::get`].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize) {
        self.rows[row] |= 1u64 << col;
    }

    /// Unset the flag at local `(row, col)`.
    ///
    /// # Panics
    ///
    /// Same argument ranges as [`TileChunk::get`].
    #[inline]
    pub fn unset(&mut self, row: usize, col: usize) {
        self.rows[row] &= !(1u64 << col);
    }

    /// Check if every flag in this chunk is unset.
    pub fn is_clear(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Raw row words, index = local row, bit = local column.
    pub fn rows(&self) -> &[u64; CHUNK_SIZE] {
        &self.rows
    }
}

impl Default for TileChunk {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TileChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set: u32 = self.rows.iter().map(|row| row.count_ones()).sum();
        f.debug_struct("TileChunk").field("set", &set).finish()
    }
}
