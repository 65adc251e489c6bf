use crate::{flag::AllocFlag, number::Number, Alloc, Device};

use super::CPUPtr;

/// A CPU is used to perform calculations on the host CPU.
/// It runs the same operations as [`OpenCL`](crate::OpenCL) and serves as the reference
/// result for them.
///
/// # Example
/// ```
/// use clsum::{CPU, Read, Buffer};
///
/// let device = CPU::new();
/// let a = Buffer::from((&device, [1, 2, 3]));
///
/// let out = device.read_to_vec(&a).unwrap();
///
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CPU;

impl CPU {
    #[must_use]
    #[inline]
    pub fn new() -> CPU {
        CPU
    }
}

impl Device for CPU {
    type Data<T> = CPUPtr<T>;
}

impl<T: Number> Alloc<T> for CPU {
    #[inline]
    fn alloc(&self, len: usize, flag: AllocFlag) -> crate::Result<CPUPtr<T>> {
        Ok(CPUPtr::new_zeroed(len, flag))
    }

    fn alloc_from_slice(&self, data: &[T]) -> crate::Result<CPUPtr<T>> {
        assert!(!data.is_empty(), "invalid buffer len: 0");

        let mut ptr = CPUPtr::new_zeroed(data.len(), AllocFlag::None);
        ptr.copy_from_slice(data);
        Ok(ptr)
    }
}
