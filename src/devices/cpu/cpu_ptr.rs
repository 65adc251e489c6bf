use core::{
    alloc::Layout,
    mem::size_of,
    ops::{Deref, DerefMut},
    ptr::null_mut,
};

use std::alloc::handle_alloc_error;

use crate::{flag::AllocFlag, PtrType};

/// The pointer used for `CPU` [`Buffer`](crate::Buffer)s
#[derive(Debug)]
pub struct CPUPtr<T> {
    /// The pointer to the data
    pub ptr: *mut T,
    /// The length of the data
    pub len: usize,
    /// Allocation flag for the pointer
    pub flag: AllocFlag,
}

unsafe impl<T: Send> Send for CPUPtr<T> {}
unsafe impl<T: Sync> Sync for CPUPtr<T> {}

impl<T: PartialEq> PartialEq for CPUPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> CPUPtr<T> {
    /// Create a new `CPUPtr` with the given length and allocation flag.
    /// The memory is zeroed, which is a valid value for every [`Number`](crate::number::Number).
    /// # Example
    /// ```
    /// use clsum::{cpu::CPUPtr, flag::AllocFlag};
    ///
    /// let ptr = CPUPtr::<f32>::new_zeroed(10, AllocFlag::None);
    /// assert_eq!(ptr.len, 10);
    /// assert_eq!(ptr.as_slice(), &[0.; 10]);
    /// ```
    pub fn new_zeroed(len: usize, flag: AllocFlag) -> CPUPtr<T> {
        assert!(len > 0, "invalid buffer len: 0");
        assert!(size_of::<T>() > 0, "zero sized types are not supported");

        let layout = Layout::array::<T>(len).unwrap();
        let ptr = unsafe { std::alloc::alloc_zeroed(layout) };

        if ptr.is_null() {
            handle_alloc_error(layout);
        }

        CPUPtr {
            ptr: ptr.cast(),
            len,
            flag,
        }
    }

    /// Extracts a slice containing the entire `CPUPtr`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Extracts a mutable slice of the entire `CPUPtr`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    pub fn current_memory(&self) -> Option<(*mut u8, Layout)> {
        if self.ptr.is_null() || size_of::<T>() == 0 {
            return None;
        }
        let layout = Layout::array::<T>(self.len).ok()?;
        Some((self.ptr.cast(), layout))
    }
}

impl<T> Deref for CPUPtr<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        if self.ptr.is_null() {
            return &[];
        }
        unsafe { core::slice::from_raw_parts(self.ptr, self.len) }
    }
}

impl<T> DerefMut for CPUPtr<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        if self.ptr.is_null() {
            return &mut [];
        }
        unsafe { core::slice::from_raw_parts_mut(self.ptr, self.len) }
    }
}

impl<T> Default for CPUPtr<T> {
    fn default() -> Self {
        Self {
            ptr: null_mut(),
            flag: AllocFlag::default(),
            len: 0,
        }
    }
}

impl<T> Drop for CPUPtr<T> {
    fn drop(&mut self) {
        if !self.flag.continue_deallocation() {
            return;
        }

        if let Some((ptr, layout)) = self.current_memory() {
            unsafe {
                std::alloc::dealloc(ptr, layout);
            }
        }
    }
}

impl<T> PtrType for CPUPtr<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn flag(&self) -> AllocFlag {
        self.flag
    }
}

#[cfg(test)]
mod tests {
    use core::alloc::Layout;

    use super::CPUPtr;
    use crate::flag::AllocFlag;

    #[test]
    fn test_return_current_memory() {
        let data = CPUPtr::<f32>::new_zeroed(10, AllocFlag::None);

        let ret = data.current_memory().unwrap();
        assert_eq!(ret.0, data.ptr as *mut u8);
        assert_eq!(ret.1, Layout::from_size_align(data.len * 4, 4).unwrap());
    }

    #[test]
    fn test_default_is_empty() {
        let data = CPUPtr::<i32>::default();
        assert!(data.as_slice().is_empty());
        assert!(data.current_memory().is_none());
    }

    #[test]
    #[should_panic]
    fn test_zero_len_panics() {
        CPUPtr::<f32>::new_zeroed(0, AllocFlag::None);
    }
}
