/// One decoded contact sample.
///
/// Coordinates are 12-bit values in the controller's native resolution. No
/// scaling or rotation is applied by the driver; see
/// [`Touchscreen::rotation`](crate::Touchscreen::rotation) for the display
/// orientation consumers should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
  pub x: u16,
  pub y: u16,
  /// Multi-touch slot assigned by the controller.
  pub id: u8,
  /// Raw state nibble, see [`TouchPoint::RELEASED`] and [`TouchPoint::PRESSED`].
  pub state: u8,
}

impl TouchPoint {
  /// State code of a lifted contact.
  pub const RELEASED: u8 = 0x06;
  /// State code of a contact that is down or moving.
  pub const PRESSED: u8 = 0x07;

  pub const fn new(x: u16, y: u16, id: u8, state: u8) -> Self {
    Self { x, y, id, state }
  }

  /// Decode a contact record.
  ///
  /// The controller reports pressed contacts as either `6` or `7`; both are
  /// folded into [`TouchPoint::PRESSED`]. Every other state passes through.
  pub(crate) fn from_record(record: &[u8]) -> Self {
    let mut point = Self::from_record_raw(record);
    if point.state == Self::RELEASED {
      point.state = Self::PRESSED;
    }
    point
  }

  /// Decode a record keeping its coordinates and id but marking it released.
  pub(crate) fn released_from_record(record: &[u8]) -> Self {
    let mut point = Self::from_record_raw(record);
    point.state = Self::RELEASED;
    point
  }

  fn from_record_raw(record: &[u8]) -> Self {
    let id = (record[0] >> 4) & 0x0F;
    let state = record[0] & 0x0F;
    let y = ((record[1] as u16) << 4) | ((record[3] >> 4) & 0x0F) as u16;
    let x = ((record[2] as u16) << 4) | (record[3] & 0x0F) as u16;
    Self { x, y, id, state }
  }

  /// Returns `true` if this point marks a lifted contact.
  pub const fn is_released(&self) -> bool {
    self.state == Self::RELEASED
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_record_fields() {
    let point = TouchPoint::from_record(&[0x1F, 0x02, 0x03, 0x34, 0x00]);
    assert_eq!(point.id, 1);
    assert_eq!(point.state, 0x0F);
    assert_eq!(point.y, 0x23);
    assert_eq!(point.x, 0x34);
  }

  #[test]
  fn coordinates_use_full_twelve_bits() {
    let point = TouchPoint::from_record(&[0x07, 0xFF, 0xEE, 0xAB, 0x00]);
    assert_eq!(point.y, 0xFFA);
    assert_eq!(point.x, 0xEEB);
  }

  #[test]
  fn state_six_folds_into_pressed() {
    assert_eq!(TouchPoint::from_record(&[0x26, 0, 0, 0, 0]).state, TouchPoint::PRESSED);
    assert_eq!(TouchPoint::from_record(&[0x27, 0, 0, 0, 0]).state, TouchPoint::PRESSED);
    for raw in (0u8..=0x0F).filter(|s| *s != 0x06) {
      assert_eq!(TouchPoint::from_record(&[raw, 0, 0, 0, 0]).state, raw);
    }
  }

  #[test]
  fn released_keeps_coordinates() {
    let point = TouchPoint::released_from_record(&[0x37, 0x10, 0x20, 0x35, 0x00]);
    assert!(point.is_released());
    assert_eq!(point.id, 3);
    assert_eq!((point.x, point.y), (0x205, 0x103));
  }
}
