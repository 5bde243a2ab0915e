//! Decoder for the binary key/value tree format used by the local app cache.
//!
//! The format is a stream of type-tagged, named nodes. Arrays nest until a
//! matching end tag. A cache file holds one such tree per title, and the
//! `common` section of each tree carries the fields [`extract_record`] reads.
//!
//! ```text
//! tag:u8  name:cstr  payload
//! 0x00    array      children..., 0x08
//! 0x01    string     cstr (UTF-8)
//! 0x02    int32      i32 LE
//! 0x03    float32    f32 LE
//! 0x04    pointer    u32 LE
//! 0x05    wstring    UTF-16LE, 0x0000 terminated
//! 0x06    color      i32 LE
//! 0x07    int64      u64 LE
//! 0x08    end        (no name)
//! ```

pub mod decoder;
pub mod error;
pub mod extract;
pub mod node;
pub mod scan;
#[cfg(any(test, feature = "test-util"))]
pub mod writer;

pub use decoder::{Decoder, Tag};
pub use error::VdfError;
pub use extract::extract_record;
pub use node::{Entry, Node};
pub use scan::{CacheScan, RECORD_BOUNDARY, scan_file, scan_records};
#[cfg(any(test, feature = "test-util"))]
pub use writer::VdfWriter;
