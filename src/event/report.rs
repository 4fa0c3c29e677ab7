use heapless::Vec;

use super::TouchPoint;
use crate::reg::IDLE_STATUS;

/// Most simultaneous contacts the controller reports.
pub const MAX_TOUCH_POINTS: usize = 5;

/// Bytes fetched by the first read of every cycle: the status byte, the first
/// record and the point count.
pub(crate) const HEADER_LEN: usize = 7;

/// Offset of the byte carrying the point count in its low nibble. The tail read
/// starts here as well.
pub(crate) const COUNT_OFFSET: usize = 5;

const RECORD_LEN: usize = 5;
const REPORT_LEN: usize = 40;

/// Raw report block as assembled from one or two bus reads.
///
/// Layout:
///
/// | bytes            | content                                    |
/// |------------------|--------------------------------------------|
/// | `0..5`           | status byte / record 0                     |
/// | `5`              | point count (low nibble, header read only) |
/// | `5*i+4..5*i+9`   | record `i` for `i >= 1`                    |
/// | two bytes        | big-endian checksum after the last record  |
///
/// Records after the first are shifted by four bytes because the controller
/// omits a field ahead of record 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Report {
  buf: [u8; REPORT_LEN],
}

impl Report {
  pub(crate) const fn new() -> Self {
    Self { buf: [0; REPORT_LEN] }
  }

  pub(crate) fn header_mut(&mut self) -> &mut [u8] {
    &mut self.buf[..HEADER_LEN]
  }

  /// Window the tail read of a `count` point report lands in.
  pub(crate) fn tail_mut(&mut self, count: usize) -> &mut [u8] {
    let len = Self::tail_len(count);
    &mut self.buf[COUNT_OFFSET..COUNT_OFFSET + len]
  }

  /// Bytes still to fetch after the header for a `count` point report.
  pub(crate) const fn tail_len(count: usize) -> usize {
    match count {
      0 => 0,
      1 => 2,
      n => RECORD_LEN * (n - 1) + 3,
    }
  }

  /// `true` when the controller has nothing to report.
  pub(crate) fn is_idle(&self) -> bool {
    self.buf[0] == IDLE_STATUS
  }

  /// Point count announced by the header. Must be read before the tail read
  /// overwrites the count byte.
  pub(crate) fn announced_points(&self) -> usize {
    (self.buf[COUNT_OFFSET] & 0x0F) as usize
  }

  /// Checksum transmitted by the controller for a `count` point report.
  /// Counts above [`MAX_TOUCH_POINTS`] carry no checksum and yield 0.
  pub(crate) fn claimed_checksum(&self, count: usize) -> u32 {
    let at = match count {
      0 => return 0,
      1 => COUNT_OFFSET,
      n if n <= MAX_TOUCH_POINTS => RECORD_LEN * n + 1,
      _ => return 0,
    };
    u16::from_be_bytes([self.buf[at], self.buf[at + 1]]) as u32
  }

  /// Sum of the record bytes covered by the checksum, 0 for counts above
  /// [`MAX_TOUCH_POINTS`].
  pub(crate) fn actual_checksum(&self, count: usize) -> u32 {
    if count > MAX_TOUCH_POINTS {
      return 0;
    }
    self.buf[..RECORD_LEN * count].iter().map(|b| *b as u32).sum()
  }

  /// `true` when `count` is in range and both checksums agree.
  pub(crate) fn is_valid(&self, count: usize) -> bool {
    count <= MAX_TOUCH_POINTS && self.claimed_checksum(count) == self.actual_checksum(count)
  }

  pub(crate) const fn record_offset(index: usize) -> usize {
    match index {
      0 => 0,
      i => RECORD_LEN * i + 4,
    }
  }

  fn record(&self, index: usize) -> &[u8] {
    let at = Self::record_offset(index);
    &self.buf[at..at + RECORD_LEN]
  }

  /// Decode the contacts of a report announcing `count` points.
  ///
  /// A count that is out of range or fails the checksum is treated as "no
  /// contact", which yields a single released point built from record 0.
  pub(crate) fn decode(&self, count: usize) -> Vec<TouchPoint, MAX_TOUCH_POINTS> {
    let count = if self.is_valid(count) { count } else { 0 };

    let mut points = Vec::new();
    if count == 0 {
      // Capacity is never below one
      _ = points.push(TouchPoint::released_from_record(self.record(0)));
    } else {
      for index in 0..count {
        _ = points.push(TouchPoint::from_record(self.record(index)));
      }
    }
    points
  }

  #[cfg(test)]
  pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
    let mut report = Self::new();
    report.buf[..bytes.len()].copy_from_slice(bytes);
    report
  }
}
