//! Reads .rmap files into an in-memory map.

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::graph::RouteMap;
use crate::types::error::{MapError, MapResult};
use crate::types::header::{FileHeader, HEADER_SIZE};
use crate::types::City;

use super::compression::decompress_block;

/// Reader for .rmap binary files.
pub struct RmapReader;

impl RmapReader {
    /// Read an .rmap file into a RouteMap.
    pub fn read_from_file(path: &Path) -> MapResult<RouteMap> {
        let data = std::fs::read(path)?;
        let mut cursor = std::io::Cursor::new(data);
        Self::read_from(&mut cursor)
    }

    /// Read from any reader into a RouteMap.
    pub fn read_from(reader: &mut impl Read) -> MapResult<RouteMap> {
        // Read all data into a buffer
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        if data.len() < HEADER_SIZE as usize {
            return Err(MapError::Truncated);
        }

        // Parse header
        let header =
            FileHeader::read_from(&mut std::io::Cursor::new(&data[..HEADER_SIZE as usize]))?;
        let city_count = header.city_count as usize;

        // Name block
        let names_start = HEADER_SIZE as usize;
        let names_end = names_start + header.name_block_len as usize;
        if names_end > data.len() {
            return Err(MapError::Truncated);
        }
        let name_block = decompress_block(&data[names_start..names_end])?;
        let names = parse_names(&name_block, city_count)?;

        // Adjacency block: one variable-length record per city, in the
        // same order as the name table.
        let mut cities: Vec<City> = names.iter().map(|n| City::new(n.as_str())).collect();
        let mut offset = names_end;
        for city in cities.iter_mut() {
            let count = read_u16(&data, &mut offset)? as usize;
            city.neighbors.reserve(count);
            for _ in 0..count {
                let idx = read_u32(&data, &mut offset)? as usize;
                let name = names.get(idx).ok_or(MapError::Corrupt(offset as u64))?;
                city.neighbors.push(name.clone());
            }
        }

        debug!("read {} cities, {} links", city_count, header.link_count);

        // from_parts re-validates names, self-links, and symmetry.
        RouteMap::from_parts(cities)
    }
}

/// Parse `count` length-prefixed UTF-8 names from the decompressed block.
pub(crate) fn parse_names(block: &[u8], count: usize) -> MapResult<Vec<String>> {
    let mut names = Vec::with_capacity(count);
    let mut offset = 0usize;
    for _ in 0..count {
        let len = read_u16(block, &mut offset)? as usize;
        if offset + len > block.len() {
            return Err(MapError::Truncated);
        }
        let name = std::str::from_utf8(&block[offset..offset + len])
            .map_err(|_| MapError::Corrupt(offset as u64))?;
        names.push(name.to_string());
        offset += len;
    }
    if offset != block.len() {
        return Err(MapError::Corrupt(offset as u64));
    }
    Ok(names)
}

fn read_u16(data: &[u8], offset: &mut usize) -> MapResult<u16> {
    let end = *offset + 2;
    if end > data.len() {
        return Err(MapError::Truncated);
    }
    let value = u16::from_le_bytes(data[*offset..end].try_into().unwrap());
    *offset = end;
    Ok(value)
}

fn read_u32(data: &[u8], offset: &mut usize) -> MapResult<u32> {
    let end = *offset + 4;
    if end > data.len() {
        return Err(MapError::Truncated);
    }
    let value = u32::from_le_bytes(data[*offset..end].try_into().unwrap());
    *offset = end;
    Ok(value)
}
