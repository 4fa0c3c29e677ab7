use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal_async::digital::Wait;

/// Pending-touch flag shared between the interrupt handler and the polling
/// loop.
///
/// The interrupt side only ever calls [`TouchSignal::notify`], a single atomic
/// store, so it is safe to use from an ISR. The driver clears the flag with
/// [`TouchSignal::take`] at the start of every cycle. An edge arriving between
/// that clear and the next poll is picked up by the next cycle; the controller
/// keeps raising edges while it holds undelivered data.
///
/// ```no_run
/// use l58::TouchSignal;
///
/// static TOUCH: TouchSignal = TouchSignal::new();
///
/// fn on_gpio_falling_edge() {
///   TOUCH.notify();
/// }
/// ```
#[derive(Debug, Default)]
pub struct TouchSignal {
  pending: AtomicBool,
}

impl TouchSignal {
  pub const fn new() -> Self {
    Self { pending: AtomicBool::new(false) }
  }

  /// Mark a report as pending. Call from the falling-edge interrupt.
  #[inline]
  pub fn notify(&self) {
    self.pending.store(true, Ordering::Release);
  }

  /// Clear the flag, returning whether it was set.
  #[inline]
  pub fn take(&self) -> bool {
    self.pending.swap(false, Ordering::Acquire)
  }

  /// Peek at the flag without clearing it.
  #[inline]
  pub fn is_pending(&self) -> bool {
    self.pending.load(Ordering::Relaxed)
  }

  /// Wait for the interrupt line to fall and raise the flag.
  ///
  /// For executors that can park a task on a pin instead of running a raw
  /// interrupt handler. Loop over this in its own task alongside the polling
  /// task.
  pub async fn wait_for_edge<P: Wait>(&self, pin: &mut P) -> Result<(), P::Error> {
    pin.wait_for_falling_edge().await?;
    self.notify();
    Ok(())
  }
}
