/// Edge interrupt control for the controller's INT line.
///
/// `embedded-hal` has no interrupt trait, so HALs are bridged with a thin
/// wrapper. The pin itself must already be an input with pull-up enabled; the
/// line idles high and the controller pulls it low when a report is ready.
///
/// ```ignore
/// struct Int<'d>(esp_hal::gpio::Input<'d>);
///
/// impl l58::EdgeInterrupt for Int<'_> {
///   fn listen_falling_edge(&mut self) {
///     self.0.listen(esp_hal::gpio::Event::FallingEdge);
///   }
///
///   fn unlisten(&mut self) {
///     self.0.unlisten();
///   }
/// }
/// ```
///
/// The interrupt handler should do nothing but call
/// [`TouchSignal::notify`](crate::TouchSignal::notify).
pub trait EdgeInterrupt {
  /// Start raising interrupts on falling edges.
  fn listen_falling_edge(&mut self);

  /// Stop raising interrupts.
  fn unlisten(&mut self);
}
