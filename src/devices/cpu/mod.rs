//! The CPU module provides the host reference device.

pub use cpu_device::*;
pub use cpu_ptr::*;

mod cpu_device;
mod cpu_ptr;
mod ops;
