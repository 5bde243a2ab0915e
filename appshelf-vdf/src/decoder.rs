//! Stack-based decoder over an in-memory byte stream.

use crate::error::VdfError;
use crate::node::{Entry, Node};

/// Type tag that precedes every node in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Array,
    String,
    Int32,
    Float32,
    Pointer,
    WideString,
    Color,
    Int64,
    End,
}

impl Tag {
    pub fn from_byte(byte: u8) -> Option<Tag> {
        Some(match byte {
            0x00 => Tag::Array,
            0x01 => Tag::String,
            0x02 => Tag::Int32,
            0x03 => Tag::Float32,
            0x04 => Tag::Pointer,
            0x05 => Tag::WideString,
            0x06 => Tag::Color,
            0x07 => Tag::Int64,
            0x08 => Tag::End,
            _ => return None,
        })
    }

    pub fn byte(self) -> u8 {
        match self {
            Tag::Array => 0x00,
            Tag::String => 0x01,
            Tag::Int32 => 0x02,
            Tag::Float32 => 0x03,
            Tag::Pointer => 0x04,
            Tag::WideString => 0x05,
            Tag::Color => 0x06,
            Tag::Int64 => 0x07,
            Tag::End => 0x08,
        }
    }
}

/// Cursor over a byte slice that never reads past `limit`.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    limit: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_limit(data, data.len())
    }

    /// Decoder that treats `limit` as the end of the stream.
    pub fn with_limit(data: &'a [u8], limit: usize) -> Self {
        Self {
            data,
            pos: 0,
            limit: limit.min(data.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.limit
    }

    /// Advance to just past the next occurrence of `pattern`.
    ///
    /// Returns `false` and moves to the limit when the pattern does not occur
    /// before it.
    pub fn seek_to(&mut self, pattern: &[u8]) -> bool {
        if pattern.is_empty() {
            return true;
        }
        let window = self.data.get(self.pos..self.limit).unwrap_or_default();
        match window.windows(pattern.len()).position(|w| w == pattern) {
            Some(found) => {
                self.pos += found + pattern.len();
                true
            }
            None => {
                self.pos = self.limit;
                false
            }
        }
    }

    /// Decode the body of one array, up to and including its end tag.
    ///
    /// The cursor must sit on the first child tag, which is where
    /// [`seek_to`](Self::seek_to) leaves it after a section header. Returns
    /// `Ok(None)` when the stream is already exhausted. On error the cursor
    /// stays where decoding stopped so the caller can resynchronize.
    pub fn decode(&mut self) -> Result<Option<Node>, VdfError> {
        if self.is_at_end() {
            return Ok(None);
        }

        // Open arrays above the current one, with the name they will get.
        let mut open: Vec<(String, Vec<Entry>)> = Vec::new();
        let mut current: Vec<Entry> = Vec::new();

        loop {
            let offset = self.pos;
            let byte = self.read_u8()?;
            let tag = Tag::from_byte(byte).ok_or(VdfError::MalformedStream { offset, tag: byte })?;

            if tag == Tag::End {
                match open.pop() {
                    None => return Ok(Some(Node::Array(current))),
                    Some((name, parent)) => {
                        let finished = std::mem::replace(&mut current, parent);
                        current.push(Entry::new(name, Node::Array(finished)));
                    }
                }
                continue;
            }

            let name = self.read_cstr()?;
            if tag == Tag::Array {
                open.push((name, std::mem::take(&mut current)));
                continue;
            }
            let node = self.read_value(tag, offset)?;
            current.push(Entry::new(name, node));
        }
    }

    fn read_value(&mut self, tag: Tag, offset: usize) -> Result<Node, VdfError> {
        Ok(match tag {
            Tag::String => Node::String(self.read_cstr()?),
            Tag::Int32 => Node::Int32(i32::from_le_bytes(self.read_array()?)),
            Tag::Float32 => Node::Float32(f32::from_le_bytes(self.read_array()?)),
            Tag::Pointer => Node::Pointer(u32::from_le_bytes(self.read_array()?)),
            Tag::WideString => Node::WideString(self.read_wide_cstr()?),
            Tag::Color => Node::Color(i32::from_le_bytes(self.read_array()?)),
            Tag::Int64 => Node::Int64(u64::from_le_bytes(self.read_array()?)),
            Tag::Array | Tag::End => {
                return Err(VdfError::MalformedStream {
                    offset,
                    tag: tag.byte(),
                });
            }
        })
    }

    // -----------------------------------------------------------------------
    // Primitive reads
    // -----------------------------------------------------------------------

    fn read_u8(&mut self) -> Result<u8, VdfError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], VdfError> {
        let end = self.pos + N;
        if end > self.limit {
            return Err(self.truncated());
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(out)
    }

    /// Null-terminated UTF-8, decoded lossily.
    fn read_cstr(&mut self) -> Result<String, VdfError> {
        let data = self.data;
        let rest = &data[self.pos..self.limit];
        let Some(len) = rest.iter().position(|&b| b == 0) else {
            return Err(self.truncated());
        };
        let text = String::from_utf8_lossy(&rest[..len]).into_owned();
        self.pos += len + 1;
        Ok(text)
    }

    /// UTF-16LE terminated by a zero code unit, decoded lossily.
    fn read_wide_cstr(&mut self) -> Result<String, VdfError> {
        let mut units = Vec::new();
        loop {
            let unit = u16::from_le_bytes(self.read_array()?);
            if unit == 0 {
                break;
            }
            units.push(unit);
        }
        Ok(String::from_utf16_lossy(&units))
    }

    fn truncated(&mut self) -> VdfError {
        self.pos = self.limit;
        VdfError::UnexpectedEnd { offset: self.limit }
    }
}

#[cfg(test)]
#[path = "tests/decoder_tests.rs"]
mod tests;
