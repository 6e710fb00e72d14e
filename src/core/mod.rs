pub mod alphabet;
pub mod cancel;
pub mod driver;
pub mod timing;

pub use crate::domain::model::{Polarity, Signal};
pub use crate::domain::ports::{Sleeper, Transmitter};
pub use crate::utils::error::Result;
