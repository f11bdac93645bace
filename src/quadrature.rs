//! Quadrature decoding on the rising edge of phase A.
//!
//! Only the low-to-high transition of phase A is acted upon, which yields
//! one step per detent on KY-040 style encoders. At that edge the level of
//! phase B tells the direction: opposite to A means clockwise, equal means
//! counter-clockwise.

/// Direction of the most recent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
    /// No step has been observed yet (or the encoder was reset).
    #[default]
    None,
}

impl Direction {
    /// Direction implied by the phase levels at a rising edge of phase A.
    pub fn from_phases(phase_a: bool, phase_b: bool) -> Self {
        if phase_b != phase_a {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// Signed view: `+1`, `-1`, or `0`.
    pub fn as_i8(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
            Direction::None => 0,
        }
    }
}

/// Tracks phase A and accumulates steps.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureDecoder {
    last_phase_a: bool,
    count: i32,
    direction: Direction,
}

impl QuadratureDecoder {
    /// Start from an initial phase-A sample, so the first poll does not see
    /// a phantom edge.
    pub fn new(initial_phase_a: bool) -> Self {
        Self {
            last_phase_a: initial_phase_a,
            count: 0,
            direction: Direction::None,
        }
    }

    /// Feed one phase-A sample.
    ///
    /// `sample_b` is only invoked on a rising edge. If it fails, the error is
    /// returned and the decoder is left untouched, so the same edge is seen
    /// again on the next poll.
    ///
    /// Returns the direction of the step taken, if any.
    pub fn step<E>(
        &mut self,
        phase_a: bool,
        sample_b: impl FnOnce() -> Result<bool, E>,
    ) -> Result<Option<Direction>, E> {
        let mut stepped = None;

        if phase_a && !self.last_phase_a {
            let direction = Direction::from_phases(phase_a, sample_b()?);
            self.count = self.count.wrapping_add(direction.as_i8() as i32);
            self.direction = direction;
            stepped = Some(direction);
        }

        self.last_phase_a = phase_a;
        Ok(stepped)
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Level of phase A seen by the latest [`step`](Self::step).
    pub fn last_phase_a(&self) -> bool {
        self.last_phase_a
    }

    /// Overwrite the accumulated count. Direction is left as is.
    pub fn set_count(&mut self, count: i32) {
        self.count = count;
    }

    /// Zero the count and forget the direction. Phase-A history is kept.
    pub fn reset(&mut self) {
        self.count = 0;
        self.direction = Direction::None;
    }
}
