//! Binary file I/O for .rmap files.

pub mod compression;
pub mod mmap;
pub mod reader;
pub mod writer;

pub use mmap::MmapReader;
pub use reader::RmapReader;
pub use writer::RmapWriter;
