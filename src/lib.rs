#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod ring;
#[cfg(feature = "std")]
pub mod storage;

pub use ring::{RingBuffer, RingError, status_code};
