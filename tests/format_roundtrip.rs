//! Binary format tests: header, writer/reader round-trips, validation.

use std::io::Cursor;

use routemap::format::{MmapReader, RmapReader, RmapWriter};
use routemap::graph::{RouteMap, RouteMapBuilder};
use routemap::types::{FileHeader, MapError, FORMAT_VERSION, HEADER_SIZE, RMAP_MAGIC};

use tempfile::NamedTempFile;

fn write_to_vec(map: &RouteMap) -> Vec<u8> {
    let mut buf = Vec::new();
    RmapWriter::write_to(map, &mut buf).unwrap();
    buf
}

fn sample_map() -> RouteMap {
    RouteMapBuilder::new()
        .link("abc", "def")
        .link("abc", "ghi")
        .link("def", "ghi")
        .city("island")
        .build()
        .unwrap()
}

/// Byte offset where the adjacency block starts.
fn adjacency_offset(buf: &[u8]) -> usize {
    let name_block_len = u64::from_le_bytes(buf[32..40].try_into().unwrap());
    HEADER_SIZE as usize + name_block_len as usize
}

// ==================== File Header Tests ====================

#[test]
fn test_header_write_read_roundtrip() {
    let header = FileHeader {
        magic: RMAP_MAGIC,
        version: FORMAT_VERSION,
        city_count: 42,
        link_count: 100,
        written_at: 1_700_000_000_000_000,
        name_block_len: 777,
    };

    let mut buf = Vec::new();
    header.write_to(&mut buf).unwrap();

    let read_header = FileHeader::read_from(&mut Cursor::new(&buf)).unwrap();
    assert_eq!(header, read_header);
}

#[test]
fn test_header_size_is_40_bytes() {
    let header = FileHeader::new();
    let mut buf = Vec::new();
    header.write_to(&mut buf).unwrap();
    assert_eq!(buf.len(), HEADER_SIZE as usize);
}

#[test]
fn test_header_magic_validation() {
    let header = FileHeader::new();
    let mut buf = Vec::new();
    header.write_to(&mut buf).unwrap();

    // Corrupt magic bytes
    buf[0] = 0xFF;
    let result = FileHeader::read_from(&mut Cursor::new(&buf));
    match result.unwrap_err() {
        MapError::InvalidMagic => {}
        e => panic!("Expected InvalidMagic error, got {:?}", e),
    }
}

#[test]
fn test_header_version_validation() {
    let header = FileHeader::new();
    let mut buf = Vec::new();
    header.write_to(&mut buf).unwrap();

    // Set version to 99
    buf[4..8].copy_from_slice(&99u32.to_le_bytes());

    let result = FileHeader::read_from(&mut Cursor::new(&buf));
    match result.unwrap_err() {
        MapError::UnsupportedVersion(99) => {}
        e => panic!("Expected UnsupportedVersion(99), got {:?}", e),
    }
}

#[test]
fn test_header_truncated() {
    let buf = [0u8; 10];
    let result = FileHeader::read_from(&mut Cursor::new(&buf[..]));
    assert!(matches!(result.unwrap_err(), MapError::Truncated));
}

// ==================== Round-trip Tests ====================

#[test]
fn test_empty_map_roundtrip() {
    let map = RouteMap::new();
    let buf = write_to_vec(&map);
    let read = RmapReader::read_from(&mut Cursor::new(buf)).unwrap();
    assert_eq!(read.city_count(), 0);
    assert_eq!(read.link_count(), 0);
}

#[test]
fn test_roundtrip_preserves_cities_and_links() {
    let map = sample_map();
    let buf = write_to_vec(&map);
    let read = RmapReader::read_from(&mut Cursor::new(buf)).unwrap();
    assert_eq!(read.cities(), map.cities());
    assert_eq!(read.link_count(), map.link_count());
}

#[test]
fn test_roundtrip_after_mutations() {
    let mut map = sample_map();
    map.add_city("late");
    map.link_cities("late", "island");
    map.unlink_cities("abc", "def");
    map.remove_city("ghi");

    let buf = write_to_vec(&map);
    let read = RmapReader::read_from(&mut Cursor::new(buf)).unwrap();
    assert_eq!(read.cities(), map.cities());
}

#[test]
fn test_file_roundtrip() {
    let map = sample_map();
    let file = NamedTempFile::new().unwrap();
    RmapWriter::write_to_file(&map, file.path()).unwrap();
    let read = RmapReader::read_from_file(file.path()).unwrap();
    assert_eq!(read.cities(), map.cities());
}

#[test]
fn test_unicode_names_roundtrip() {
    let map = RouteMapBuilder::new()
        .link("Zürich", "São Paulo")
        .link("São Paulo", "北京")
        .build()
        .unwrap();
    let buf = write_to_vec(&map);
    let read = RmapReader::read_from(&mut Cursor::new(buf)).unwrap();
    assert_eq!(read.cities(), map.cities());
    assert!(read.is_linked("Zürich", "São Paulo"));
}

// ==================== Validation Tests ====================

#[test]
fn test_reader_rejects_bad_magic() {
    let mut buf = write_to_vec(&sample_map());
    buf[0] = 0xFF;
    let result = RmapReader::read_from(&mut Cursor::new(buf));
    assert!(matches!(result.unwrap_err(), MapError::InvalidMagic));
}

#[test]
fn test_reader_rejects_truncated_adjacency() {
    let mut buf = write_to_vec(&sample_map());
    buf.truncate(buf.len() - 1);
    let result = RmapReader::read_from(&mut Cursor::new(buf));
    assert!(matches!(result.unwrap_err(), MapError::Truncated));
}

#[test]
fn test_reader_rejects_truncated_names() {
    let buf = write_to_vec(&sample_map());
    let result = RmapReader::read_from(&mut Cursor::new(&buf[..HEADER_SIZE as usize + 4]));
    assert!(matches!(
        result.unwrap_err(),
        MapError::Truncated | MapError::Compression(_)
    ));
}

#[test]
fn test_reader_rejects_out_of_range_neighbor() {
    // Map: "aa" linked to "bb". First adjacency record belongs to
    // "aa": count u16, then one u32 index.
    let map = RouteMapBuilder::new().link("aa", "bb").build().unwrap();
    let mut buf = write_to_vec(&map);
    let adj = adjacency_offset(&buf);
    buf[adj + 2..adj + 6].copy_from_slice(&99u32.to_le_bytes());
    let result = RmapReader::read_from(&mut Cursor::new(buf));
    assert!(matches!(result.unwrap_err(), MapError::Corrupt(_)));
}

#[test]
fn test_reader_rejects_asymmetric_adjacency() {
    // Patch "bb"'s single neighbor from "aa" (index 0) to "cc"
    // (index 2): "aa" then lists "bb" without the reciprocal.
    let map = RouteMapBuilder::new()
        .link("aa", "bb")
        .city("cc")
        .build()
        .unwrap();
    let mut buf = write_to_vec(&map);
    let adj = adjacency_offset(&buf);
    // "aa" record: 2 + 4 bytes; "bb" record starts after it.
    buf[adj + 8..adj + 12].copy_from_slice(&2u32.to_le_bytes());
    let result = RmapReader::read_from(&mut Cursor::new(buf));
    assert!(matches!(
        result.unwrap_err(),
        MapError::AsymmetricLink(_, _)
    ));
}

// ==================== Mmap Tests ====================

#[test]
fn test_mmap_matches_full_reader() {
    let map = sample_map();
    let file = NamedTempFile::new().unwrap();
    RmapWriter::write_to_file(&map, file.path()).unwrap();

    let mmap = MmapReader::open(file.path()).unwrap();
    assert_eq!(mmap.city_count(), map.city_count() as u64);
    assert_eq!(mmap.link_count(), map.link_count() as u64);
    assert!(mmap.written_at() > 0);
    assert_eq!(
        mmap.file_len(),
        std::fs::metadata(file.path()).unwrap().len()
    );

    let names: Vec<String> = map.cities().iter().map(|c| c.name.clone()).collect();
    assert_eq!(mmap.city_names().unwrap(), names);
}

#[test]
fn test_mmap_rejects_truncated_file() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), [0u8; 10]).unwrap();
    let result = MmapReader::open(file.path());
    assert!(matches!(result.unwrap_err(), MapError::Truncated));
}
