//! Builder for synthetic world buffers used by the unit tests.

use crate::layout::HEADER_LEN;

pub(crate) struct WorldBytes {
    buf: Vec<u8>,
}

impl WorldBytes {
    /// A zeroed buffer just large enough for the header.
    pub(crate) fn new() -> Self {
        Self {
            buf: vec![0; HEADER_LEN],
        }
    }

    fn ensure(&mut self, end: usize) {
        if self.buf.len() < end {
            self.buf.resize(end, 0);
        }
    }

    pub(crate) fn i32(mut self, at: usize, value: i32) -> Self {
        self.ensure(at + 4);
        self.buf[at..at + 4].copy_from_slice(&value.to_le_bytes());
        self
    }

    pub(crate) fn i16s(mut self, at: usize, values: &[i16]) -> Self {
        self.ensure(at + values.len() * 2);
        for (i, v) in values.iter().enumerate() {
            let pos = at + i * 2;
            self.buf[pos..pos + 2].copy_from_slice(&v.to_le_bytes());
        }
        self
    }

    /// Header with the offset table at `table` holding `offsets`.
    pub(crate) fn table(self, rows: i32, cols: i32, table: usize, offsets: &[i32]) -> Self {
        let mut this = self
            .i32(0x10, rows)
            .i32(0x14, cols)
            .i32(0x18, table as i32);
        for (i, off) in offsets.iter().enumerate() {
            this = this.i32(table + i * 4, *off);
        }
        this
    }

    pub(crate) fn build(self) -> Vec<u8> {
        self.buf
    }
}
