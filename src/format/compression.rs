//! LZ4 block compression for the name block.

use crate::types::error::{MapError, MapResult};

/// Compress a block of bytes with LZ4 (prepend size for decompression).
pub fn compress_block(data: &[u8]) -> Vec<u8> {
    lz4_flex::compress_prepend_size(data)
}

/// Decompress an LZ4-compressed block.
pub fn decompress_block(data: &[u8]) -> MapResult<Vec<u8>> {
    lz4_flex::decompress_size_prepended(data).map_err(|e| MapError::Compression(e.to_string()))
}
