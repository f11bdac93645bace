//! Error types for the encoder driver.

use core::fmt;

/// Errors that can occur while polling the encoder.
///
/// The decoding and debounce logic cannot fail on its own; the only source
/// of errors is the injected pin reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderError<E> {
    /// The pin reader failed to sample a line.
    Pin(E),
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for EncoderError<E> {
    fn from(error: E) -> Self {
        EncoderError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EncoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Pin(e) => write!(f, "pin read error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for EncoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Pin(e) => defmt::write!(f, "pin read error: {}", e),
        }
    }
}
