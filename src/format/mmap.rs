//! Memory-mapped .rmap inspection without a full parse.

use std::path::Path;

use memmap2::Mmap;

use crate::types::error::{MapError, MapResult};
use crate::types::header::{FileHeader, HEADER_SIZE};

use super::compression::decompress_block;
use super::reader::parse_names;

/// Memory-mapped view of an .rmap file.
///
/// Parses only the fixed header up front; the name block is
/// decompressed on demand.
#[derive(Debug)]
pub struct MmapReader {
    mmap: Mmap,
    header: FileHeader,
}

impl MmapReader {
    /// Open and map an .rmap file.
    pub fn open(path: &Path) -> MapResult<Self> {
        let file = std::fs::File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < HEADER_SIZE as usize {
            return Err(MapError::Truncated);
        }
        let header =
            FileHeader::read_from(&mut std::io::Cursor::new(&mmap[..HEADER_SIZE as usize]))?;
        Ok(Self { mmap, header })
    }

    /// The parsed file header.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Number of cities recorded in the header.
    pub fn city_count(&self) -> u64 {
        self.header.city_count
    }

    /// Number of undirected links recorded in the header.
    pub fn link_count(&self) -> u64 {
        self.header.link_count
    }

    /// When the file was written (Unix epoch microseconds).
    pub fn written_at(&self) -> u64 {
        self.header.written_at
    }

    /// Mapped file length in bytes.
    pub fn file_len(&self) -> u64 {
        self.mmap.len() as u64
    }

    /// Decompress and list the city names, in stored order.
    pub fn city_names(&self) -> MapResult<Vec<String>> {
        let start = HEADER_SIZE as usize;
        let end = start + self.header.name_block_len as usize;
        if end > self.mmap.len() {
            return Err(MapError::Truncated);
        }
        let block = decompress_block(&self.mmap[start..end])?;
        parse_names(&block, self.header.city_count as usize)
    }
}
