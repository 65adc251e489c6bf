use min_cl::CLDevice;

use min_cl::api::{create_buffer, MemFlags};

use super::{enqueue_kernel, AsClCvoidPtr, CLPtr, KernelCacheCL};
use crate::flag::AllocFlag;
use crate::{Alloc, Buffer, Device, DeviceError};

use core::cell::RefCell;
use core::ops::Deref;
use std::fmt::Debug;

/// Used to perform calculations with an OpenCL capable device.
/// To make new calculations invocable, a trait providing new operations should be implemented for [OpenCL].
///
/// Dropping an `OpenCL` device first releases the compiled kernels, then the command queue and the context.
/// # Example
/// ```no_run
/// use clsum::{OpenCL, Read, Buffer};
///
/// fn main() -> clsum::Result<()> {
///     let device = OpenCL::new(0)?;
///
///     let a = Buffer::from((&device, [1.3; 25]));
///     let out = device.read_to_vec(&a)?;
///
///     assert_eq!(out, vec![1.3; 5*5]);
///     Ok(())
/// }
/// ```
pub struct OpenCL {
    /// Kernels compiled for this device.
    pub kernel_cache: RefCell<KernelCacheCL>,
    /// The underlying OpenCL device, holding the context and the command queue.
    pub device: CLDevice,
}

impl Deref for OpenCL {
    type Target = CLDevice;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.device
    }
}

impl OpenCL {
    /// Returns an [OpenCL] device at the specified device index.
    /// This creates the context and the command queue of the device.
    /// # Errors
    /// - No device was found at the given device index
    /// - some other OpenCL related errors
    pub fn new(device_idx: usize) -> crate::Result<OpenCL> {
        let device = CLDevice::new(device_idx)?;
        log::info!(
            "created context and command queue for device {device_idx}: {:?} ({:?})",
            device.name(),
            device.version()
        );

        Ok(OpenCL {
            kernel_cache: RefCell::new(KernelCacheCL::default()),
            device,
        })
    }

    /// Executes a cached OpenCL kernel.
    /// # Example
    ///
    /// ```no_run
    /// use clsum::{OpenCL, Buffer};
    ///
    /// fn main() -> clsum::Result<()> {
    ///     let device = OpenCL::new(0)?;
    ///     let mut buf = Buffer::<f32, _>::new(&device, 10);
    ///
    ///     device.launch_kernel("
    ///      __kernel void add(__global float* buf, float num) {
    ///         int idx = get_global_id(0);
    ///         buf[idx] += num;
    ///      }
    ///     ", [buf.len(), 0, 0], None, &[&mut buf, &4f32])?;
    ///
    ///     Ok(())
    /// }
    /// ```
    #[inline]
    pub fn launch_kernel(
        &self,
        src: &str,
        gws: [usize; 3],
        lws: Option<[usize; 3]>,
        args: &[&dyn AsClCvoidPtr],
    ) -> crate::Result<()> {
        enqueue_kernel(self, src, gws, lws, args)
    }

    /// Creates a memory object of `len` elements with the given [`MemFlags`] bits.
    /// `data` is copied into the memory object if `flags` contains `MemCopyHostPtr`.
    /// # Errors
    /// - [`DeviceError::EmptyBuffer`] if `len` is 0
    /// - [`DeviceError::LengthMismatch`] if `data` does not hold `len` elements
    /// - the memory object could not be created
    pub fn alloc_with_flags<T>(
        &self,
        flags: u64,
        len: usize,
        data: Option<&[T]>,
    ) -> crate::Result<CLPtr<T>> {
        if len == 0 {
            return Err(DeviceError::EmptyBuffer.into());
        }
        if data.is_some_and(|data| data.len() != len) {
            return Err(DeviceError::LengthMismatch.into());
        }

        let ptr = create_buffer::<T>(self.ctx(), flags, len, data)?;
        log::debug!("allocated memory object {ptr:p} ({len} elements, flags {flags:#b})");

        Ok(unsafe { CLPtr::from_raw(ptr, len, AllocFlag::None) })
    }
}

impl<'a, T> Buffer<'a, T, OpenCL> {
    /// Creates a `Buffer` whose memory object is created with the given [`MemFlags`] bits,
    /// e.g. read-only kernel inputs.
    /// # Errors
    /// See [`OpenCL::alloc_with_flags`].
    #[inline]
    pub fn try_with_mem_flags(
        device: &'a OpenCL,
        flags: u64,
        len: usize,
        data: Option<&[T]>,
    ) -> crate::Result<Buffer<'a, T, OpenCL>> {
        Ok(Buffer {
            data: device.alloc_with_flags(flags, len, data)?,
            device,
        })
    }
}

impl Device for OpenCL {
    type Data<T> = CLPtr<T>;
}

impl Debug for OpenCL {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OpenCL {{
            name: {name:?},
            version: {version:?},
            cached_kernels: {kernels},
        }}",
            name = self.name(),
            version = self.version(),
            kernels = self.kernel_cache.borrow().len(),
        )
    }
}

impl Drop for OpenCL {
    fn drop(&mut self) {
        log::debug!("releasing command queue and context");
    }
}

impl<T> Alloc<T> for OpenCL {
    fn alloc(&self, len: usize, flag: AllocFlag) -> crate::Result<CLPtr<T>> {
        assert!(len > 0, "invalid buffer len: 0");

        let mut ptr = self.alloc_with_flags::<T>(MemFlags::MemReadWrite as u64, len, None)?;
        ptr.flag = flag;
        Ok(ptr)
    }

    fn alloc_from_slice(&self, data: &[T]) -> crate::Result<CLPtr<T>> {
        assert!(!data.is_empty(), "invalid buffer len: 0");

        self.alloc_with_flags(
            MemFlags::MemReadWrite | MemFlags::MemCopyHostPtr,
            data.len(),
            Some(data),
        )
    }
}
