//! File header for .rmap binary files.

use std::io::{Read, Write};

use crate::types::error::{MapError, MapResult};
use crate::types::{FORMAT_VERSION, RMAP_MAGIC};

/// Header of an .rmap file. Fixed size: 40 bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileHeader {
    /// Magic bytes: [0x52, 0x4D, 0x41, 0x50] ("RMAP").
    pub magic: [u8; 4],
    /// Format version (currently 1).
    pub version: u32,
    /// Total number of cities in the file.
    pub city_count: u64,
    /// Total number of undirected links in the file.
    pub link_count: u64,
    /// When the file was written (Unix epoch microseconds).
    pub written_at: u64,
    /// Compressed byte length of the name block.
    pub name_block_len: u64,
}

/// The fixed size of a FileHeader on disk: 40 bytes.
pub const HEADER_SIZE: u64 = 40;

impl FileHeader {
    /// Create a new header with default magic and version.
    pub fn new() -> Self {
        Self {
            magic: RMAP_MAGIC,
            version: FORMAT_VERSION,
            city_count: 0,
            link_count: 0,
            written_at: 0,
            name_block_len: 0,
        }
    }

    /// Write this header to the given writer. Writes exactly 40 bytes.
    ///
    /// Layout (all little-endian):
    /// - 0x00..0x04: magic (4 bytes)
    /// - 0x04..0x08: version (u32, 4 bytes)
    /// - 0x08..0x10: city_count (u64, 8 bytes)
    /// - 0x10..0x18: link_count (u64, 8 bytes)
    /// - 0x18..0x20: written_at (u64, 8 bytes)
    /// - 0x20..0x28: name_block_len (u64, 8 bytes)
    ///   Total: 40 bytes
    pub fn write_to(&self, writer: &mut impl Write) -> MapResult<()> {
        writer.write_all(&self.magic)?;
        writer.write_all(&self.version.to_le_bytes())?;
        writer.write_all(&self.city_count.to_le_bytes())?;
        writer.write_all(&self.link_count.to_le_bytes())?;
        writer.write_all(&self.written_at.to_le_bytes())?;
        writer.write_all(&self.name_block_len.to_le_bytes())?;
        Ok(())
    }

    /// Read a header from the given reader. Reads exactly 40 bytes.
    pub fn read_from(reader: &mut impl Read) -> MapResult<Self> {
        let mut buf = [0u8; HEADER_SIZE as usize];
        reader.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                MapError::Truncated
            } else {
                MapError::Io(e)
            }
        })?;

        let magic = [buf[0], buf[1], buf[2], buf[3]];
        if magic != RMAP_MAGIC {
            return Err(MapError::InvalidMagic);
        }

        let version = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        if version != FORMAT_VERSION {
            return Err(MapError::UnsupportedVersion(version));
        }

        let city_count = u64::from_le_bytes(buf[8..16].try_into().unwrap());
        let link_count = u64::from_le_bytes(buf[16..24].try_into().unwrap());
        let written_at = u64::from_le_bytes(buf[24..32].try_into().unwrap());
        let name_block_len = u64::from_le_bytes(buf[32..40].try_into().unwrap());

        Ok(Self {
            magic,
            version,
            city_count,
            link_count,
            written_at,
            name_block_len,
        })
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}
