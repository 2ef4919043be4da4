//! Sparse tile flag grid.
//!
//! [`TileFlags`] stores one boolean per `(x, y)` tile over the full `i32`
//! plane. Storage is allocated a 64x64 chunk at a time, the first time a flag
//! inside that chunk is set. Unallocated chunks read as all-unset.
//!
//! # Example
//!
//! ```
//! use tile_flags::TileFlags;
//!
//! let mut flags = TileFlags::new();
//! flags.set(-65, -65, true);
//! assert!(flags.get(-65, -65));
//! assert!(!flags.get(-1, -1)); // different chunk
//!
//! flags.set(-65, -65, false);
//! assert!(!flags.get(-65, -65));
//! assert_eq!(flags.chunk_count(), 1); // emptied chunks are kept until clear()
//!
//! flags.clear();
//! assert!(flags.is_empty());
//! ```

use std::cell::Cell;

use rustc_hash::FxHashMap as HashMap;

use crate::chunk::{to_local, ChunkKey, TileChunk};
use crate::config::GridConfig;
use crate::coord::TileCoord;

/// Last chunk key looked up and the slot it resolved to (`None` if the chunk
/// was not allocated at the time).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CachedChunk {
    key: ChunkKey,
    slot: Option<usize>,
}

/// A sparse 2D grid of boolean flags, chunked into 64x64 blocks.
///
/// Repeated accesses to the same chunk skip the hash lookup through a
/// one-entry cache. The cache uses interior mutability so `get` can take
/// `&self`; as a result the grid is `Send` but not `Sync`.
#[derive(Clone, Debug)]
pub struct TileFlags {
    /// Chunk key to index into `chunks`.
    slots: HashMap<ChunkKey, usize>,
    /// Allocated chunks. Only ever grows until `clear`.
    chunks: Vec<TileChunk>,
    last: Cell<Option<CachedChunk>>,
}

impl TileFlags {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            slots: HashMap::default(),
            chunks: Vec::new(),
            last: Cell::new(None),
        }
    }

    /// Create an empty grid with storage reserved per `config`.
    ///
    /// A capacity that cannot be reserved is ignored and the grid starts
    /// with no reservation, growing on demand as with [`TileFlags::new`].
    pub fn with_config(config: &GridConfig) -> Self {
        let mut grid = Self::new();
        let capacity = config.chunk_capacity;

        let reserved = grid
            .slots
            .try_reserve(capacity)
            .and_then(|_| grid.chunks.try_reserve_exact(capacity));
        if let Err(e) = reserved {
            tracing::warn!("Could not reserve {} chunks, starting unreserved: {}", capacity, e);
            grid = Self::new();
        }

        grid
    }

    /// Whether the flag at `(x, y)` is set.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        let (row, col) = to_local(x, y);
        match self.lookup(ChunkKey::from_tile(x, y)) {
            Some(slot) => self.chunks[slot].get(row, col),
            None => false,
        }
    }

    /// Set or unset the flag at `(x, y)`.
    ///
    /// Setting allocates the covering chunk if needed. Unsetting never
    /// allocates and never frees a chunk, even one left with no flags set.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, flag: bool) {
        let key = ChunkKey::from_tile(x, y);
        let (row, col) = to_local(x, y);
        let slot = self.lookup(key);

        if flag {
            let slot = match slot {
                Some(slot) => slot,
                None => self.allocate(key),
            };
            self.chunks[slot].set(row, col);
        } else if let Some(slot) = slot {
            self.chunks[slot].unset(row, col);
        }
    }

    /// Whether the flag at `coord` is set.
    pub fn get_at(&self, coord: TileCoord) -> bool {
        self.get(coord.x, coord.y)
    }

    /// Set or unset the flag at `coord`.
    pub fn set_at(&mut self, coord: TileCoord, flag: bool) {
        self.set(coord.x, coord.y, flag)
    }

    /// Drop every chunk and reset the lookup cache.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing tile flags, dropping {} chunks", self.chunks.len());
        self.slots.clear();
        self.chunks.clear();
        self.last.set(None);
    }

    /// Number of allocated chunks, including ones with no flags left set.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Check if no chunk is allocated.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Whether the chunk covering `(x, y)` is allocated.
    ///
    /// Goes straight to the map and leaves the lookup cache untouched.
    pub fn has_chunk(&self, x: i32, y: i32) -> bool {
        self.slots.contains_key(&ChunkKey::from_tile(x, y))
    }

    /// Resolve `key` to a chunk slot, going through the one-entry cache.
    ///
    /// Misses are cached too, so repeated reads of an unallocated chunk stay
    /// off the map.
    #[inline]
    fn lookup(&self, key: ChunkKey) -> Option<usize> {
        if let Some(cached) = self.last.get() {
            if cached.key == key {
                return cached.slot;
            }
        }

        let slot = self.slots.get(&key).copied();
        self.last.set(Some(CachedChunk { key, slot }));
        slot
    }

    /// Allocate an unset chunk for `key` and make it the cached chunk.
    fn allocate(&mut self, key: ChunkKey) -> usize {
        let slot = self.chunks.len();
        self.chunks.push(TileChunk::new());
        self.slots.insert(key, slot);
        self.last.set(Some(CachedChunk {
            key,
            slot: Some(slot),
        }));
        tracing::trace!("Allocated chunk {:?} (total {})", key, self.chunks.len());
        slot
    }
}

impl Default for TileFlags {
    fn default() -> Self {
        Self::new()
    }
}
