use crate::reg::I2C_ADDR;

/// Driver settings staged before [`L58::setup`](crate::L58::setup).
///
/// ```no_run
/// use l58::Config;
///
/// let config = Config::default().with_address(0x5A);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  /// Seven-bit I²C address of the controller.
  pub address: u8,
}

impl Config {
  pub const fn new(address: u8) -> Self {
    Self { address }
  }

  pub const fn with_address(mut self, address: u8) -> Self {
    self.address = address;
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(I2C_ADDR)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_address() {
    assert_eq!(Config::default().address, 0x5A);
    assert_eq!(Config::default().with_address(0x14).address, 0x14);
  }
}
