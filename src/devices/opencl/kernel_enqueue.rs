use crate::{number::Number, Buffer, OpenCL};
use min_cl::api::{enqueue_nd_range_kernel, set_kernel_arg, OCLErrorKind};
use std::{ffi::c_void, mem::size_of};

/// Converts `Self` to a *const c_void.
/// This enables taking `Buffer` and a number `T` as an argument to an OpenCL kernel.
/// # Example
/// ```no_run
/// use clsum::{OpenCL, Buffer, opencl::AsClCvoidPtr};
///
/// fn args(args: &[&dyn AsClCvoidPtr]) {
///     // ...
/// }
///
/// fn main() -> clsum::Result<()> {
///     let device = OpenCL::new(0)?;
///
///     let buf = Buffer::<f32, _>::new(&device, 10);
///     let num = 4;
///     args(&[&num, &buf]);
///     Ok(())
/// }
/// ```
pub trait AsClCvoidPtr {
    fn as_cvoid_ptr(&self) -> *const c_void;
    #[inline]
    fn is_num(&self) -> bool {
        false
    }
    #[inline]
    fn ptr_size(&self) -> usize {
        size_of::<*const c_void>()
    }
}

impl<T> AsClCvoidPtr for &Buffer<'_, T, OpenCL> {
    #[inline]
    fn as_cvoid_ptr(&self) -> *const c_void {
        self.data.ptr
    }
}

impl<T> AsClCvoidPtr for Buffer<'_, T, OpenCL> {
    #[inline]
    fn as_cvoid_ptr(&self) -> *const c_void {
        self.data.ptr
    }
}

impl<T: Number> AsClCvoidPtr for T {
    #[inline]
    fn as_cvoid_ptr(&self) -> *const c_void {
        self as *const T as *const c_void
    }

    #[inline]
    fn ptr_size(&self) -> usize {
        size_of::<T>()
    }

    #[inline]
    fn is_num(&self) -> bool {
        true
    }
}

/// Returns the work dimension of a global work size.
/// Trailing zeros mark unused dimensions.
pub fn work_dim(gws: &[usize; 3]) -> crate::Result<usize> {
    if gws[0] == 0 {
        Err(OCLErrorKind::InvalidGlobalWorkSize.into())
    } else if gws[1] == 0 {
        Ok(1)
    } else if gws[2] == 0 {
        Ok(2)
    } else {
        Ok(3)
    }
}

/// Compiles (or fetches from the kernel cache) `src`, binds `args` in order and
/// enqueues the kernel over `gws`.
/// The launch is asynchronous; a following blocking read synchronizes with it.
pub fn enqueue_kernel(
    device: &OpenCL,
    src: &str,
    gws: [usize; 3],
    lws: Option<[usize; 3]>,
    args: &[&dyn AsClCvoidPtr],
) -> crate::Result<()> {
    let wd = work_dim(&gws)?;

    let mut binding = device.kernel_cache.borrow_mut();
    let kernel = binding.kernel(device, src)?;

    for (idx, arg) in args.iter().enumerate() {
        set_kernel_arg(kernel, idx, arg.as_cvoid_ptr(), arg.ptr_size(), arg.is_num())?;
    }

    enqueue_nd_range_kernel(device.queue(), kernel, wd, &gws, lws.as_ref(), None)?;
    log::debug!("enqueued kernel over {gws:?} (work dim {wd})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::c_void;

    use super::{work_dim, AsClCvoidPtr};

    #[test]
    fn test_work_dim() -> crate::Result<()> {
        assert_eq!(work_dim(&[10, 0, 0])?, 1);
        assert_eq!(work_dim(&[10, 4, 0])?, 2);
        assert_eq!(work_dim(&[10, 4, 2])?, 3);
        assert!(work_dim(&[0, 0, 0]).is_err());
        Ok(())
    }

    #[test]
    fn test_as_cl_cvoid_num() {
        let x = 5f32;
        assert_eq!(x.as_cvoid_ptr(), &x as *const f32 as *const c_void);
        assert_eq!(x.ptr_size(), 4);
        assert!(x.is_num());
    }
}
