//! Scripted stand-ins for the bus, the INT pin and a listener.

use core::cell::RefCell;
use std::collections::VecDeque;
use std::vec::Vec;

use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

use crate::{EdgeInterrupt, TouchListener, TouchPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BusError;

impl i2c::Error for BusError {
  fn kind(&self) -> ErrorKind {
    ErrorKind::Other
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Op {
  Write(u8, Vec<u8>),
  Read(u8, usize),
}

impl Op {
  pub(crate) fn address(&self) -> u8 {
    match self {
      Op::Write(address, _) | Op::Read(address, _) => *address,
    }
  }
}

/// I²C bus that records every operation and answers reads from a script.
///
/// `fail_at` makes the operation with that index (counted over the whole log)
/// fail without serving data.
#[derive(Debug, Default)]
pub(crate) struct ScriptedBus {
  pub(crate) log: Vec<Op>,
  reads: VecDeque<Vec<u8>>,
  fail_at: Option<usize>,
}

impl ScriptedBus {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn respond(mut self, bytes: &[u8]) -> Self {
    self.reads.push_back(bytes.to_vec());
    self
  }

  pub(crate) fn fail_at(mut self, index: usize) -> Self {
    self.fail_at = Some(index);
    self
  }

  pub(crate) fn writes(&self) -> Vec<Vec<u8>> {
    self
      .log
      .iter()
      .filter_map(|op| match op {
        Op::Write(_, bytes) => Some(bytes.clone()),
        Op::Read(..) => None,
      })
      .collect()
  }

  pub(crate) fn read_lengths(&self) -> Vec<usize> {
    self
      .log
      .iter()
      .filter_map(|op| match op {
        Op::Read(_, len) => Some(*len),
        Op::Write(..) => None,
      })
      .collect()
  }
}

impl ErrorType for ScriptedBus {
  type Error = BusError;
}

impl I2c<SevenBitAddress> for ScriptedBus {
  fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    for op in operations.iter_mut() {
      let index = self.log.len();
      let fail = self.fail_at == Some(index);
      match op {
        Operation::Write(bytes) => self.log.push(Op::Write(address, bytes.to_vec())),
        Operation::Read(buf) => {
          self.log.push(Op::Read(address, buf.len()));
          if !fail {
            let data = self.reads.pop_front().unwrap_or_default();
            let n = data.len().min(buf.len());
            buf[..n].copy_from_slice(&data[..n]);
          }
        }
      }
      if fail {
        return Err(BusError);
      }
    }
    Ok(())
  }
}

#[derive(Debug, Default)]
pub(crate) struct TestPin {
  pub(crate) listening: bool,
}

impl EdgeInterrupt for TestPin {
  fn listen_falling_edge(&mut self) {
    self.listening = true;
  }

  fn unlisten(&mut self) {
    self.listening = false;
  }
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
  pub(crate) points: RefCell<Vec<TouchPoint>>,
}

impl TouchListener for Recorder {
  fn touch(&self, point: TouchPoint) {
    self.points.borrow_mut().push(point);
  }
}
