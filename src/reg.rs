/******************************************************************************
 * The L58 ships without a public datasheet. Register usage below matches the *
 * vendor firmware for the LilyGo T5 4.7" (ESP32) e-paper board.              *
 * ========================================================================== *
 *                       L58 - Registers & Commands                           *
*******************************************************************************/

pub(crate) const I2C_ADDR: u8 = 0x5A;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg {
  // Touch status/report window, also accepts report commands
  Touch = 0xD0,
  // Power management
  Power = 0xD6,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

/// Leave sleep mode, written to [`Reg::Power`] during setup.
pub(crate) const WAKEUP: [u8; 1] = [0x06];
/// Select the status block at the start of the report.
pub(crate) const READ_STATUS: [u8; 1] = [0x00];
/// Continue reading the remaining contact records.
pub(crate) const READ_TOUCH: [u8; 1] = [0x07];
/// Release the report latch so the controller can raise the next edge.
pub(crate) const CLEAR_FLAGS: [u8; 2] = [0x00, IDLE_STATUS];

/// Longest command payload written after a register address.
pub(crate) const MAX_COMMAND_LEN: usize = 2;

const _: () = assert!(WAKEUP.len() <= MAX_COMMAND_LEN);
const _: () = assert!(READ_STATUS.len() <= MAX_COMMAND_LEN);
const _: () = assert!(READ_TOUCH.len() <= MAX_COMMAND_LEN);
const _: () = assert!(CLEAR_FLAGS.len() <= MAX_COMMAND_LEN);

/// Status byte reported when no touch data is pending.
pub(crate) const IDLE_STATUS: u8 = 0xAB;
