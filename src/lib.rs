#![no_std]

mod error;
#[macro_use]
mod log;

pub mod device;
pub mod fifo;
pub mod interface;
pub mod params;
pub mod registers;
pub mod sample;
pub mod spsc;
pub mod state;

pub use crate::device::Adxl314;
pub use crate::error::{Error, Result};
