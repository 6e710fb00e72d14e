use crate::domain::model::Signal;
use crate::utils::error::Result;
use std::time::Duration;

/// A sink for timed Morse events.
///
/// Every operation blocks for the pauses it applies. Implementations are
/// driven by one sender at a time.
pub trait Transmitter {
    /// Key one element, hold it, unkey, then wait the intra-character gap.
    fn transmit(&mut self, signal: Signal) -> Result<()>;

    /// Wait out the rest of the inter-character gap.
    fn end_of_character(&mut self) -> Result<()>;

    /// Wait the inter-word gap.
    fn end_of_word(&mut self) -> Result<()>;

    /// Tear the transmitter down. Calling it again must be a no-op.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transmitter + ?Sized> Transmitter for &mut T {
    fn transmit(&mut self, signal: Signal) -> Result<()> {
        (**self).transmit(signal)
    }

    fn end_of_character(&mut self) -> Result<()> {
        (**self).end_of_character()
    }

    fn end_of_word(&mut self) -> Result<()> {
        (**self).end_of_word()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<T: Transmitter + ?Sized> Transmitter for Box<T> {
    fn transmit(&mut self, signal: Signal) -> Result<()> {
        (**self).transmit(signal)
    }

    fn end_of_character(&mut self) -> Result<()> {
        (**self).end_of_character()
    }

    fn end_of_word(&mut self) -> Result<()> {
        (**self).end_of_word()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// Blocks the calling thread. Returns an error if the wait was cut short.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration) -> Result<()>;
}
