//! Time-based debounce for the active-low push-button.
//!
//! Every low sample moves the stored timestamp forward. A low sample is
//! reported as a press only when the previous low sample is older than the
//! debounce window. Holding the button while polling slower than the window
//! therefore reports a press on every poll; polling faster reports it once.

/// Debounce state for one button.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonDebouncer {
    window_us: u64,
    last_press_us: u64,
}

impl ButtonDebouncer {
    pub fn new(window_us: u64) -> Self {
        Self {
            window_us,
            last_press_us: 0,
        }
    }

    /// Feed one sample of the button pin.
    ///
    /// `now` is only consulted when the pin is low. Returns `true` for a
    /// debounced press.
    pub fn sample(&mut self, pin_high: bool, now: impl FnOnce() -> u64) -> bool {
        if pin_high {
            return false;
        }

        let now = now();
        let pressed = now.saturating_sub(self.last_press_us) > self.window_us;
        self.last_press_us = now;
        pressed
    }

    /// Timestamp of the latest low sample, `0` if there was none.
    pub fn last_press(&self) -> u64 {
        self.last_press_us
    }

    pub fn window_us(&self) -> u64 {
        self.window_us
    }
}
