use std::io::{self, Write};

/// Default line width after which output is wrapped.
pub const DEFAULT_WRAP: usize = 100;

/// Buffered writer that breaks long polynomial lines.
///
/// Once the pending line is longer than the wrap width, the next `.` or `+`
/// written ends it. Everything buffered is written out on [`flush`] or
/// when the writer is dropped. A width of 0 never wraps.
///
/// [`flush`]: Write::flush
pub struct WrappingWriter<W: Write> {
  inner: W,
  buf: Vec<u8>,
  width: usize,
}

impl<W: Write> WrappingWriter<W> {
  pub fn new(inner: W) -> Self {
    Self::with_width(inner, DEFAULT_WRAP)
  }

  pub fn with_width(inner: W, width: usize) -> Self {
    WrappingWriter {
      inner,
      buf: Vec::new(),
      width,
    }
  }

  fn dump(&mut self) -> io::Result<()> {
    self.inner.write_all(&self.buf)?;
    self.buf.clear();
    Ok(())
  }
}

impl<W: Write> Write for WrappingWriter<W> {
  fn write(&mut self, data: &[u8]) -> io::Result<usize> {
    for &c in data {
      self.buf.push(c);
      if c == b'\n' {
        self.dump()?;
      } else if self.width > 0
        && (c == b'.' || c == b'+')
        && self.buf.len() > self.width
      {
        self.dump()?;
        self.buf.push(b'\n');
      }
    }
    Ok(data.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    self.dump()?;
    self.inner.flush()
  }
}

impl<W: Write> Drop for WrappingWriter<W> {
  fn drop(&mut self) {
    let _ = self.flush();
  }
}
