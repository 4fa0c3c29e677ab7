use embedded_hal::i2c::{I2c, SevenBitAddress};
use heapless::Vec;

use crate::event::{Report, MAX_TOUCH_POINTS};
use crate::{Error, Reg, Status, TouchPoint, CLEAR_FLAGS, L58, READ_STATUS, READ_TOUCH};

impl<'a, I, E, const N: usize> L58<'a, I, N>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Run one polling cycle.
  ///
  /// Does nothing unless the [`TouchSignal`](crate::TouchSignal) fired since
  /// the last cycle. Otherwise reads one report, queues its points for
  /// [`L58::dispatch`] and returns how many were queued.
  ///
  /// A report that fails its checksum still produces one released point built
  /// from the first record. A bus error aborts the cycle without queueing
  /// anything and sets [`Status::Warning`]; the flag is already cleared, so
  /// the cycle is not retried until the controller signals again. Points that
  /// do not fit the queue are dropped and also set [`Status::Warning`].
  pub fn poll(&mut self) -> Result<usize, Error<E>> {
    if self.status == Status::Failed || !self.signal.take() {
      return Ok(0);
    }

    let points = match self.read_points() {
      Ok(Some(points)) => points,
      // Idle cycles leave the health status alone
      Ok(None) => return Ok(0),
      Err(e) => {
        error!("Failed to communicate with the touch controller");
        self.mark_warning();
        return Err(e);
      }
    };

    let mut queued = 0;
    let mut dropped = false;
    for point in points {
      if self.queue.push_back(point).is_err() {
        warn!("Touch queue full, dropping point {}", point.id);
        dropped = true;
        continue;
      }
      queued += 1;
    }

    if dropped {
      self.mark_warning();
    } else {
      self.clear_warning();
    }
    Ok(queued)
  }

  /// Deliver every queued point to the [`Touchscreen`](crate::Touchscreen) in
  /// the order it was decoded. Returns the number of points delivered.
  pub fn dispatch(&mut self) -> usize {
    let mut delivered = 0;
    while let Some(point) = self.queue.pop_front() {
      self.screen.deliver(point);
      delivered += 1;
    }
    delivered
  }

  /// [`L58::poll`] followed by [`L58::dispatch`], for a main loop.
  ///
  /// Points queued before a failing cycle are still delivered.
  pub fn run(&mut self) -> Result<usize, Error<E>> {
    let polled = self.poll();
    self.dispatch();
    polled
  }

  /// Fetch and decode one report. Returns `None` when the controller is idle.
  fn read_points(&mut self) -> Result<Option<Vec<TouchPoint, MAX_TOUCH_POINTS>>, Error<E>> {
    let mut report = Report::new();

    self.write_register(Reg::Touch, &READ_STATUS)?;
    self.read_bytes(report.header_mut())?;

    if report.is_idle() {
      trace!("Touch controller idle");
      self.write_register(Reg::Touch, &CLEAR_FLAGS)?;
      return Ok(None);
    }

    let count = report.announced_points();
    if count > MAX_TOUCH_POINTS {
      warn!("Touch report announced {} points, ignoring", count);
    } else if count > 0 {
      self.write_register(Reg::Touch, &READ_TOUCH)?;
      self.read_bytes(report.tail_mut(count))?;
    }

    // Always release the latch, even for reports that fail validation
    self.write_register(Reg::Touch, &CLEAR_FLAGS)?;

    if count > 0 && count <= MAX_TOUCH_POINTS && !report.is_valid(count) {
      debug!("Touch report checksum mismatch");
    }

    let points = report.decode(count);
    debug!("Touch report with {} of {} points", points.len(), count);
    Ok(Some(points))
  }
}
