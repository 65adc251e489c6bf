//! Element-wise vector addition on an OpenCL GPU, with the host CPU as reference device.
//!
//! A device owns the memory of its [`Buffer`]s. Operations are traits implemented per device:
//! [`Read`], [`WriteBuf`] and [`AddBuf`].
//! The [`sum`] module holds the fixed addition of two ten element arrays, which the `clsum`
//! binary runs on the GPU.
//!
//! Add two buffers on the `CPU`:
//!
#![cfg_attr(feature = "cpu", doc = "```")]
#![cfg_attr(not(feature = "cpu"), doc = "```ignore")]
//! use clsum::{AddBuf, Buffer, CPU};
//!
//! fn main() -> clsum::Result<()> {
//!     let device = CPU::new();
//!
//!     let lhs = Buffer::from((&device, [1., 2., 3., 4.]));
//!     let rhs = Buffer::from((&device, [9., 8., 7., 6.]));
//!
//!     let out = device.add(&lhs, &rhs)?;
//!     assert_eq!(out.read()?, vec![10.; 4]);
//!     Ok(())
//! }
//! ```
//!
//! The same on an OpenCL GPU:
//!
#![cfg_attr(feature = "opencl", doc = "```no_run")]
#![cfg_attr(not(feature = "opencl"), doc = "```ignore")]
//! use clsum::{AddBuf, Buffer, OpenCL};
//!
//! fn main() -> clsum::Result<()> {
//!     let device = OpenCL::new(0)?;
//!
//!     let lhs = Buffer::from((&device, [1f32, 2., 3., 4.]));
//!     let rhs = Buffer::from((&device, [9f32, 8., 7., 6.]));
//!
//!     let out = device.add(&lhs, &rhs)?;
//!     assert_eq!(out.read()?, vec![10.; 4]);
//!     Ok(())
//! }
//! ```

pub use buffer::*;
pub use devices::*;

pub use error::*;

use flag::AllocFlag;

#[cfg(feature = "cpu")]
pub use devices::cpu::CPU;

#[cfg(feature = "opencl")]
pub use devices::opencl::OpenCL;

pub mod devices;

mod buffer;
mod error;

mod device_traits;
pub mod flag;
pub mod number;
mod op_traits;
pub mod sum;

pub use device_traits::*;
pub use op_traits::*;

/// This trait is implemented for every pointer type.
pub trait PtrType {
    /// Returns the element count.
    fn size(&self) -> usize;
    /// Returns the [`AllocFlag`].
    fn flag(&self) -> AllocFlag;
}
