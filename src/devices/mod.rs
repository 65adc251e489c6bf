//! This module defines all available compute devices

#[cfg(feature = "cpu")]
pub mod cpu;

#[cfg(feature = "opencl")]
pub mod opencl;

mod cdatatype;
pub use cdatatype::*;
