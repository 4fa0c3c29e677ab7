use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{EdgeInterrupt, Error, Reg, Status, L58, WAKEUP};

impl<'a, I, E, const N: usize> L58<'a, I, N>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Attach the INT line and wake the controller.
  ///
  /// A bus error here is fatal: the interrupt is detached again, the driver
  /// moves to [`Status::Failed`] and every later [`L58::poll`] is a no-op.
  pub fn setup<P: EdgeInterrupt>(&mut self, int: &mut P) -> Result<(), Error<E>> {
    info!("Setting up L58 touchscreen at {:#x}", self.config.address);
    int.listen_falling_edge();

    if let Err(e) = self.wake() {
      error!("Failed to communicate with the touch controller");
      int.unlisten();
      self.status = Status::Failed;
      return Err(e);
    }

    self.status = Status::Ready;
    Ok(())
  }

  fn wake(&mut self) -> Result<(), Error<E>> {
    self.ping()?;
    self.write_register(Reg::Power, &WAKEUP)
  }
}

#[cfg(test)]
mod tests {
  use crate::mock::{Op, ScriptedBus, TestPin};
  use crate::{Config, Status, TouchSignal, L58};

  #[test]
  fn setup_pings_and_wakes() {
    let signal = TouchSignal::new();
    let mut pin = TestPin::default();
    let mut touch: L58<'_, _> = L58::new(ScriptedBus::new(), &signal, Config::default());

    assert!(touch.setup(&mut pin).is_ok());
    assert!(pin.listening);
    assert_eq!(touch.status(), Status::Ready);

    let bus = touch.release();
    assert_eq!(bus.log, [Op::Write(0x5A, vec![]), Op::Write(0x5A, vec![0xD6, 0x06])]);
  }

  #[test]
  fn setup_failure_is_fatal() {
    let signal = TouchSignal::new();
    let mut pin = TestPin::default();
    let mut touch: L58<'_, _> = L58::new(ScriptedBus::new().fail_at(0), &signal, Config::default());

    assert!(touch.setup(&mut pin).is_err());
    assert!(!pin.listening);
    assert_eq!(touch.status(), Status::Failed);

    signal.notify();
    assert_eq!(touch.poll(), Ok(0));
    assert_eq!(touch.release().log.len(), 1);
  }

  #[test]
  fn wakeup_failure_is_fatal() {
    let signal = TouchSignal::new();
    let mut pin = TestPin::default();
    let mut touch: L58<'_, _> = L58::new(ScriptedBus::new().fail_at(1), &signal, Config::default());

    assert!(touch.setup(&mut pin).is_err());
    assert!(!pin.listening);
    assert_eq!(touch.status(), Status::Failed);
  }

  #[test]
  fn setup_uses_configured_address() {
    let signal = TouchSignal::new();
    let mut pin = TestPin::default();
    let config = Config::default().with_address(0x14);
    let mut touch: L58<'_, _> = L58::new(ScriptedBus::new(), &signal, config);

    assert!(touch.setup(&mut pin).is_ok());
    assert!(touch.release().log.iter().all(|op| op.address() == 0x14));
  }
}
