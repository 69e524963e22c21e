//! Writes .rmap files from an in-memory map.

use std::io::Write;
use std::path::Path;

use log::debug;

use crate::graph::RouteMap;
use crate::types::error::{MapError, MapResult};
use crate::types::header::FileHeader;
use crate::types::{now_micros, FORMAT_VERSION, RMAP_MAGIC};

use super::compression::compress_block;

/// Writer for .rmap binary files.
pub struct RmapWriter;

impl RmapWriter {
    /// Write a complete RouteMap to an .rmap file.
    pub fn write_to_file(map: &RouteMap, path: &Path) -> MapResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(map, &mut writer)
    }

    /// Write a complete RouteMap to any writer.
    ///
    /// Layout: 40-byte header, LZ4-compressed name block
    /// (length-prefixed UTF-8 names in insertion order), then one
    /// adjacency record per city (neighbor count + u32 name-table
    /// indices, neighbors in insertion order).
    pub fn write_to(map: &RouteMap, writer: &mut impl Write) -> MapResult<()> {
        let cities = map.cities();

        // Step 1: Validate records and build the raw name block.
        let mut name_block: Vec<u8> = Vec::new();
        for city in cities {
            city.validate()?;
            name_block.extend_from_slice(&(city.name.len() as u16).to_le_bytes());
            name_block.extend_from_slice(city.name.as_bytes());
        }
        let compressed_names = compress_block(&name_block);

        // Step 2: Write header.
        let header = FileHeader {
            magic: RMAP_MAGIC,
            version: FORMAT_VERSION,
            city_count: cities.len() as u64,
            link_count: map.link_count() as u64,
            written_at: now_micros(),
            name_block_len: compressed_names.len() as u64,
        };
        header.write_to(writer)?;

        // Step 3: Write name block.
        writer.write_all(&compressed_names)?;

        // Step 4: Write adjacency records as name-table indices.
        for city in cities {
            writer.write_all(&(city.neighbors.len() as u16).to_le_bytes())?;
            for neighbor in &city.neighbors {
                let Some(pos) = map.position_of(neighbor) else {
                    return Err(MapError::InvalidNeighbor(neighbor.clone()));
                };
                writer.write_all(&(pos as u32).to_le_bytes())?;
            }
        }

        writer.flush()?;
        debug!("wrote {} cities, {} links", cities.len(), header.link_count);
        Ok(())
    }
}
