#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `no_std` driver for the L58 capacitive touch controller found on the LilyGo
//! T5 4.7" e-paper board.
//!
//! The controller raises a falling edge on its INT line whenever a report is
//! ready. The driver splits the work the way the hardware expects:
//!
//! - the interrupt handler only calls [`TouchSignal::notify`]
//! - [`L58::poll`] reads and validates the report over I²C and queues the
//!   decoded [`TouchPoint`]s
//! - [`L58::dispatch`] hands queued points to the [`Touchscreen`], which fires
//!   its on-touch trigger and every registered [`TouchListener`]
//!
//! Bus access goes through `embedded-hal` 1.0 so the driver works across MCU
//! families. Failures never stop the loop: a failed cycle sets
//! [`Status::Warning`] until the next good one, while a failure during
//! [`L58::setup`] leaves the driver in [`Status::Failed`].
//!
//! ```no_run
//! use embedded_hal::i2c::{I2c, SevenBitAddress};
//! use l58::{Config, EdgeInterrupt, L58, Rotation, TouchPoint, TouchSignal};
//!
//! static TOUCH: TouchSignal = TouchSignal::new();
//!
//! fn example<I2C, INT, E>(i2c: I2C, mut int: INT) -> Result<(), l58::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//!   INT: EdgeInterrupt,
//! {
//!   let on_touch = |tp: TouchPoint| {
//!     let _ = (tp.x, tp.y);
//!   };
//!
//!   let mut touch: L58<'_, I2C> = L58::new(i2c, &TOUCH, Config::default());
//!   touch.touchscreen_mut().set_display_details(960, 540, Rotation::Rotate0);
//!   touch.touchscreen_mut().set_on_touch(&on_touch);
//!   touch.setup(&mut int)?;
//!
//!   loop {
//!     _ = touch.run();
//!   }
//! }
//! ```
mod fmt;

mod config;
mod event;
mod interrupt;
#[cfg(test)]
mod mock;
mod poll;
mod reg;
mod rw;
mod setup;
mod signal;
mod touchscreen;

use heapless::Deque;

pub use config::*;
pub use event::{TouchPoint, MAX_TOUCH_POINTS};
pub use interrupt::*;
use reg::*;
pub use signal::*;
pub use touchscreen::*;

/// Points that can wait for [`L58::dispatch`]: two full reports.
const QUEUE_DEPTH: usize = 2 * MAX_TOUCH_POINTS;

/// Errors that can occur while interacting with the controller.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  I2c(E),
}

/// Health of the driver as seen by a supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
  #[default]
  Ready,
  /// The last cycle hit a bus error or dropped points on a full queue.
  /// Cleared by the next cycle that decodes a report and queues all of it.
  Warning,
  /// Setup could not reach the controller. The driver stays idle.
  Failed,
}

/// Driver for the L58 touch controller.
///
/// Owns the I²C peripheral and the [`Touchscreen`] the decoded points are
/// delivered to. `N` bounds the number of listeners.
pub struct L58<'a, I, const N: usize = 4> {
  i2c: I,
  signal: &'a TouchSignal,
  config: Config,
  status: Status,
  screen: Touchscreen<'a, N>,
  queue: Deque<TouchPoint, QUEUE_DEPTH>,
}

impl<'a, I, const N: usize> L58<'a, I, N> {
  /// Create a new driver instance.
  ///
  /// Nothing is sent to the device until [`L58::setup`] is called.
  pub fn new(i2c: I, signal: &'a TouchSignal, config: Config) -> Self {
    Self { i2c, signal, config, status: Status::Ready, screen: Touchscreen::new(), queue: Deque::new() }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn status(&self) -> Status {
    self.status
  }

  pub fn touchscreen(&self) -> &Touchscreen<'a, N> {
    &self.screen
  }

  pub fn touchscreen_mut(&mut self) -> &mut Touchscreen<'a, N> {
    &mut self.screen
  }

  /// Number of decoded points waiting for [`L58::dispatch`].
  pub fn pending(&self) -> usize {
    self.queue.len()
  }

  /// Log the driver configuration.
  pub fn log_config(&self) {
    info!("L58 touchscreen:");
    info!("  Address: {:#x}", self.config.address);
    info!("  Width: {}", self.screen.width());
    info!("  Height: {}", self.screen.height());
    info!("  Rotation: {} degrees", self.screen.rotation().degrees());
  }

  /// Give the bus back.
  pub fn release(self) -> I {
    self.i2c
  }

  fn mark_warning(&mut self) {
    if self.status != Status::Failed {
      self.status = Status::Warning;
    }
  }

  fn clear_warning(&mut self) {
    if self.status == Status::Warning {
      self.status = Status::Ready;
    }
  }
}
