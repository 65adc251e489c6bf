use core::{ffi::c_void, marker::PhantomData, ptr::null_mut};

use min_cl::api::release_mem_object;

use crate::{flag::AllocFlag, PtrType};

/// The pointer used for `OpenCL` [`Buffer`](crate::Buffer)s
#[derive(Debug, PartialEq, Eq)]
pub struct CLPtr<T> {
    /// The pointer to the OpenCL memory object
    pub ptr: *mut c_void,
    /// The number of elements allocated
    pub len: usize,
    /// The flag of the memory object
    pub flag: AllocFlag,
    _marker: PhantomData<T>,
}

unsafe impl<T: Sync> Sync for CLPtr<T> {}
unsafe impl<T: Send> Send for CLPtr<T> {}

impl<T> CLPtr<T> {
    /// Wraps a raw OpenCL memory object holding `len` elements of `T`.
    /// # Safety
    /// `ptr` must be a valid memory object. If `flag` is [`AllocFlag::None`],
    /// the returned `CLPtr` owns it and releases it on drop.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut c_void, len: usize, flag: AllocFlag) -> CLPtr<T> {
        CLPtr {
            ptr,
            len,
            flag,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for CLPtr<T> {
    #[inline]
    fn default() -> Self {
        Self {
            ptr: null_mut(),
            len: 0,
            flag: AllocFlag::default(),
            _marker: PhantomData,
        }
    }
}

impl<T> PtrType for CLPtr<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn flag(&self) -> AllocFlag {
        self.flag
    }
}

impl<T> Drop for CLPtr<T> {
    fn drop(&mut self) {
        if !self.flag.continue_deallocation() {
            return;
        }

        if self.ptr.is_null() {
            return;
        }

        log::trace!("releasing memory object {:p} ({} elements)", self.ptr, self.len);
        if let Err(e) = unsafe { release_mem_object(self.ptr) } {
            log::warn!("failed to release memory object {:p}: {e:?}", self.ptr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CLPtr;
    use crate::{flag::AllocFlag, PtrType};

    #[test]
    fn test_default_cl_ptr_is_not_released() {
        // a null pointer never reaches the OpenCL runtime on drop
        let ptr = CLPtr::<f32>::default();
        assert!(ptr.is_empty());
        assert_eq!(ptr.flag(), AllocFlag::None);
    }

    #[test]
    fn test_wrapper_is_not_released() {
        let ptr = unsafe {
            CLPtr::<f32>::from_raw(0x10 as *mut core::ffi::c_void, 4, AllocFlag::Wrapper)
        };
        assert_eq!(ptr.size(), 4);
        drop(ptr);
    }
}
