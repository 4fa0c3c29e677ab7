//! Listener example: fan touches out to several consumers, with the INT line
//! watched from an async task instead of a raw interrupt handler.
#![allow(unused)]
use core::cell::Cell;

use embedded_hal::i2c::{I2c, SevenBitAddress};
use embedded_hal_async::digital::Wait;
use l58::{Config, EdgeInterrupt, TouchListener, TouchPoint, TouchSignal, L58};

static TOUCH: TouchSignal = TouchSignal::new();

/// Tracks whether a finger is currently down.
#[derive(Default)]
struct Pressed(Cell<bool>);

impl TouchListener for Pressed {
  fn touch(&self, point: TouchPoint) {
    self.0.set(!point.is_released());
  }
}

/// Remembers the last contact position.
#[derive(Default)]
struct LastPosition(Cell<(u16, u16)>);

impl TouchListener for LastPosition {
  fn touch(&self, point: TouchPoint) {
    self.0.set((point.x, point.y));
  }
}

#[allow(dead_code)]
async fn watch_int<P: Wait>(mut pin: P) -> Result<(), P::Error> {
  loop {
    TOUCH.wait_for_edge(&mut pin).await?;
  }
}

#[allow(dead_code)]
fn poll_loop<I2C, INT, E>(i2c: I2C, mut int: INT) -> Result<(), l58::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  INT: EdgeInterrupt,
{
  let pressed = Pressed::default();
  let position = LastPosition::default();

  let mut dev: L58<'_, I2C, 2> = L58::new(i2c, &TOUCH, Config::default());
  _ = dev.touchscreen_mut().register_listener(&pressed);
  _ = dev.touchscreen_mut().register_listener(&position);
  dev.setup(&mut int)?;

  loop {
    if dev.poll()? > 0 {
      dev.dispatch();
    }
  }
}

fn main() {}
