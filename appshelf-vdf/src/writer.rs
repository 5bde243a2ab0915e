//! Encoder for the same tree format.
//!
//! Used to build cache fixtures for tests. Only compiled for this crate's
//! tests or with the `test-util` feature. Arrays are opened with
//! [`begin`](VdfWriter::begin) and closed with [`end`](VdfWriter::end); the
//! writer does not check that they balance.

use crate::decoder::Tag;

#[derive(Debug, Clone, Default)]
pub struct VdfWriter {
    buf: Vec<u8>,
}

impl VdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, name: &str) -> &mut Self {
        self.header(Tag::Array, name)
    }

    pub fn end(&mut self) -> &mut Self {
        self.buf.push(Tag::End.byte());
        self
    }

    pub fn string(&mut self, name: &str, value: &str) -> &mut Self {
        self.header(Tag::String, name);
        self.cstr(value)
    }

    pub fn int32(&mut self, name: &str, value: i32) -> &mut Self {
        self.header(Tag::Int32, name);
        self.raw(&value.to_le_bytes())
    }

    pub fn float32(&mut self, name: &str, value: f32) -> &mut Self {
        self.header(Tag::Float32, name);
        self.raw(&value.to_le_bytes())
    }

    pub fn pointer(&mut self, name: &str, value: u32) -> &mut Self {
        self.header(Tag::Pointer, name);
        self.raw(&value.to_le_bytes())
    }

    pub fn wide_string(&mut self, name: &str, value: &str) -> &mut Self {
        self.header(Tag::WideString, name);
        for unit in value.encode_utf16() {
            self.buf.extend_from_slice(&unit.to_le_bytes());
        }
        self.raw(&[0, 0])
    }

    pub fn color(&mut self, name: &str, value: i32) -> &mut Self {
        self.header(Tag::Color, name);
        self.raw(&value.to_le_bytes())
    }

    pub fn int64(&mut self, name: &str, value: u64) -> &mut Self {
        self.header(Tag::Int64, name);
        self.raw(&value.to_le_bytes())
    }

    /// Append bytes verbatim, e.g. a file header or deliberate garbage.
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn header(&mut self, tag: Tag, name: &str) -> &mut Self {
        self.buf.push(tag.byte());
        self.cstr(name)
    }

    fn cstr(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.push(0);
        self
    }
}
