//! Logging shims over `defmt` and `log`.
//!
//! Both backends are optional. With neither feature enabled the macros only
//! borrow their arguments so call sites stay warning-free.
#![macro_use]
#![allow(unused_macros)]

macro_rules! trace {
  ($s:literal $(, $x:expr)* $(,)?) => {
    {
      #[cfg(feature = "defmt")]
      ::defmt::trace!($s $(, $x)*);
      #[cfg(feature = "log")]
      ::log::trace!($s $(, $x)*);
      #[cfg(not(any(feature = "defmt", feature = "log")))]
      let _ = ($( & $x ),*);
    }
  };
}

macro_rules! debug {
  ($s:literal $(, $x:expr)* $(,)?) => {
    {
      #[cfg(feature = "defmt")]
      ::defmt::debug!($s $(, $x)*);
      #[cfg(feature = "log")]
      ::log::debug!($s $(, $x)*);
      #[cfg(not(any(feature = "defmt", feature = "log")))]
      let _ = ($( & $x ),*);
    }
  };
}

macro_rules! info {
  ($s:literal $(, $x:expr)* $(,)?) => {
    {
      #[cfg(feature = "defmt")]
      ::defmt::info!($s $(, $x)*);
      #[cfg(feature = "log")]
      ::log::info!($s $(, $x)*);
      #[cfg(not(any(feature = "defmt", feature = "log")))]
      let _ = ($( & $x ),*);
    }
  };
}

macro_rules! warn {
  ($s:literal $(, $x:expr)* $(,)?) => {
    {
      #[cfg(feature = "defmt")]
      ::defmt::warn!($s $(, $x)*);
      #[cfg(feature = "log")]
      ::log::warn!($s $(, $x)*);
      #[cfg(not(any(feature = "defmt", feature = "log")))]
      let _ = ($( & $x ),*);
    }
  };
}

macro_rules! error {
  ($s:literal $(, $x:expr)* $(,)?) => {
    {
      #[cfg(feature = "defmt")]
      ::defmt::error!($s $(, $x)*);
      #[cfg(feature = "log")]
      ::log::error!($s $(, $x)*);
      #[cfg(not(any(feature = "defmt", feature = "log")))]
      let _ = ($( & $x ),*);
    }
  };
}
