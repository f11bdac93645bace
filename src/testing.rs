//! Simulated hardware shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::capability::{Clock, PinReader};

/// Pin identifiers used by the simulated board.
pub const CLK: u8 = 17;
pub const DT: u8 = 18;
pub const SW: u8 = 27;

#[derive(Debug, Default)]
struct BoardState {
    clk: bool,
    dt: bool,
    sw: bool,
    now_us: u64,
    reads: Vec<u8>,
    clock_reads: usize,
    delays_ms: Vec<u32>,
    fail_pin: Option<u8>,
}

/// Simulated encoder board.
///
/// Clones share state, so one clone can be moved into the encoder as each
/// capability while the test keeps another to drive the levels.
#[derive(Debug, Clone, Default)]
pub struct FakeBoard {
    state: Rc<RefCell<BoardState>>,
}

/// Error produced by [`FakeBoard`] for a pin marked as failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault(pub u8);

impl FakeBoard {
    /// Board with phase A at `clk`, phase B low and the button released.
    pub fn new(clk: bool) -> Self {
        let board = Self::default();
        board.set_levels(clk, false, true);
        board
    }

    pub fn set_levels(&self, clk: bool, dt: bool, sw: bool) {
        let mut state = self.state.borrow_mut();
        state.clk = clk;
        state.dt = dt;
        state.sw = sw;
    }

    pub fn set_phases(&self, clk: bool, dt: bool) {
        let mut state = self.state.borrow_mut();
        state.clk = clk;
        state.dt = dt;
    }

    pub fn set_button(&self, high: bool) {
        self.state.borrow_mut().sw = high;
    }

    pub fn set_time(&self, now_us: u64) {
        self.state.borrow_mut().now_us = now_us;
    }

    pub fn fail_pin(&self, pin: Option<u8>) {
        self.state.borrow_mut().fail_pin = pin;
    }

    /// Pins read since the last call, in order.
    pub fn take_reads(&self) -> Vec<u8> {
        core::mem::take(&mut self.state.borrow_mut().reads)
    }

    pub fn clock_reads(&self) -> usize {
        self.state.borrow().clock_reads
    }

    pub fn delays_ms(&self) -> Vec<u32> {
        self.state.borrow().delays_ms.clone()
    }
}

impl PinReader<u8> for FakeBoard {
    type Error = PinFault;

    fn read(&mut self, pin: u8) -> Result<bool, PinFault> {
        let mut state = self.state.borrow_mut();
        state.reads.push(pin);
        if state.fail_pin == Some(pin) {
            return Err(PinFault(pin));
        }
        Ok(match pin {
            CLK => state.clk,
            DT => state.dt,
            SW => state.sw,
            other => panic!("read of unknown pin {}", other),
        })
    }
}

impl Clock for FakeBoard {
    fn now_micros(&mut self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.clock_reads += 1;
        state.now_us
    }
}

impl embedded_hal::delay::DelayNs for FakeBoard {
    fn delay_ns(&mut self, _ns: u32) {
        panic!("encoder should delay in whole milliseconds");
    }

    fn delay_ms(&mut self, ms: u32) {
        self.state.borrow_mut().delays_ms.push(ms);
    }
}

impl embedded_hal_async::delay::DelayNs for FakeBoard {
    async fn delay_ns(&mut self, _ns: u32) {
        panic!("encoder should delay in whole milliseconds");
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.state.borrow_mut().delays_ms.push(ms);
    }
}

/// Drive a future that never actually waits to completion.
pub fn block_on<F: core::future::Future>(future: F) -> F::Output {
    use core::task::{Context, Poll, Waker};

    let mut future = core::pin::pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}
