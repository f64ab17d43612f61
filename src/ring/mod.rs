pub mod buffer;
pub mod consume;
pub mod peek;
pub mod ring_error;
pub mod span;
pub mod write;

pub use buffer::RingBuffer;
pub use ring_error::*;
pub use span::{Direction, Spans};
