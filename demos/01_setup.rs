//! Bring-up example: attach the INT line, wake the controller, poll forever.
#![allow(unused)]
use embedded_hal::i2c::{I2c, SevenBitAddress};
use l58::{Config, EdgeInterrupt, Rotation, Status, TouchPoint, TouchSignal, L58};

static TOUCH: TouchSignal = TouchSignal::new();

// Wire this to the GPIO falling-edge interrupt of the INT pin.
fn on_int_falling_edge() {
  TOUCH.notify();
}

#[allow(dead_code)]
fn main_loop<I2C, INT, E>(i2c: I2C, mut int: INT) -> Result<(), l58::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  INT: EdgeInterrupt,
{
  let on_touch = |tp: TouchPoint| {
    let _ = (tp.id, tp.x, tp.y, tp.is_released());
  };

  let mut dev: L58<'_, I2C> = L58::new(i2c, &TOUCH, Config::default());
  dev.touchscreen_mut().set_display_details(960, 540, Rotation::Rotate0);
  dev.touchscreen_mut().set_on_touch(&on_touch);
  dev.setup(&mut int)?;
  dev.log_config();

  loop {
    // Bus errors are reported through `status()` and retried on the next edge
    _ = dev.run();
    if dev.status() == Status::Warning {
      // surface to a health indicator
    }
  }
}

fn main() {}
