//! Display-facing side of the driver: geometry metadata and fan-out of decoded
//! points to interested listeners.
//!
//! The driver does not transform coordinates. Width, height and rotation are
//! stored here so consumers can map raw controller coordinates onto the panel
//! themselves.

use heapless::Vec;

use crate::TouchPoint;

/// Receives every point delivered by a [`Touchscreen`].
///
/// Methods take `&self` so one listener can be registered several times or
/// shared with other code; use interior mutability for state.
pub trait TouchListener {
  fn touch(&self, point: TouchPoint);

  /// Hook for consumers that track whole touch sessions. Never invoked by the
  /// driver itself.
  fn release(&self) {}
}

/// Orientation of the panel relative to the controller's native axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Rotation {
  #[default]
  Rotate0 = 0,
  Rotate90,
  Rotate180,
  Rotate270,
}

impl Rotation {
  pub const fn degrees(self) -> u16 {
    self as u16 * 90
  }
}

impl TryFrom<u16> for Rotation {
  type Error = ();

  fn try_from(degrees: u16) -> Result<Self, Self::Error> {
    match degrees {
      0 => Ok(Self::Rotate0),
      90 => Ok(Self::Rotate90),
      180 => Ok(Self::Rotate180),
      270 => Ok(Self::Rotate270),
      _ => Err(()),
    }
  }
}

impl From<Rotation> for u16 {
  fn from(r: Rotation) -> Self {
    r.degrees()
  }
}

/// Fan-out point for decoded touches.
///
/// Holds up to `N` listeners without allocating. Every delivered point first
/// goes to the on-touch trigger, then to each listener in registration order.
pub struct Touchscreen<'a, const N: usize = 4> {
  width: u16,
  height: u16,
  rotation: Rotation,
  on_touch: Option<&'a dyn Fn(TouchPoint)>,
  listeners: Vec<&'a dyn TouchListener, N>,
}

impl<'a, const N: usize> Touchscreen<'a, N> {
  pub const fn new() -> Self {
    Self { width: 0, height: 0, rotation: Rotation::Rotate0, on_touch: None, listeners: Vec::new() }
  }

  pub fn with_display_details(mut self, width: u16, height: u16, rotation: Rotation) -> Self {
    self.width = width;
    self.height = height;
    self.rotation = rotation;
    self
  }

  pub fn set_display_details(&mut self, width: u16, height: u16, rotation: Rotation) {
    self.width = width;
    self.height = height;
    self.rotation = rotation;
  }

  pub fn width(&self) -> u16 {
    self.width
  }

  pub fn height(&self) -> u16 {
    self.height
  }

  pub fn rotation(&self) -> Rotation {
    self.rotation
  }

  /// Install the trigger fired for every delivered point, replacing any
  /// previous one.
  pub fn set_on_touch(&mut self, trigger: &'a dyn Fn(TouchPoint)) {
    self.on_touch = Some(trigger);
  }

  /// Append a listener. Listeners cannot be removed, and registering the same
  /// listener twice delivers each point to it twice.
  ///
  /// Hands the listener back when all `N` slots are taken.
  pub fn register_listener(&mut self, listener: &'a dyn TouchListener) -> Result<(), &'a dyn TouchListener> {
    self.listeners.push(listener)
  }

  pub fn listeners(&self) -> usize {
    self.listeners.len()
  }

  pub fn deliver(&self, point: TouchPoint) {
    trace!("touch {}: (x={}, y={}) state={}", point.id, point.x, point.y, point.state);
    if let Some(trigger) = self.on_touch {
      trigger(point);
    }
    for listener in self.listeners.iter() {
      listener.touch(point);
    }
  }
}

impl<const N: usize> Default for Touchscreen<'_, N> {
  fn default() -> Self {
    Self::new()
  }
}
