use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Reg, L58, MAX_COMMAND_LEN};

impl<'a, I, E, const N: usize> L58<'a, I, N>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Address the controller with an empty write to check it acknowledges.
  pub(crate) fn ping(&mut self) -> Result<(), Error<E>> {
    self.i2c.write(self.config.address, &[]).map_err(Error::I2c)
  }

  /// Write `data` to `reg` in a single transaction.
  ///
  /// `data` is one of the command constants in [`crate::reg`], all of which
  /// are checked against [`MAX_COMMAND_LEN`] at compile time.
  pub(crate) fn write_register(&mut self, reg: Reg, data: &[u8]) -> Result<(), Error<E>> {
    let len = data.len();
    let mut buf = [0u8; MAX_COMMAND_LEN + 1];
    buf[0] = reg.into();
    buf[1..=len].copy_from_slice(data);
    self.i2c.write(self.config.address, &buf[..=len]).map_err(Error::I2c)
  }

  /// Plain read continuing from the register selected by the previous write.
  pub(crate) fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), Error<E>> {
    self.i2c.read(self.config.address, buf).map_err(Error::I2c)
  }
}
