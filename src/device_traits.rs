use crate::{flag::AllocFlag, PtrType};

/// A compute device that owns the memory of its [`Buffer`](crate::Buffer)s.
pub trait Device: Sized {
    /// The pointer type that holds the memory of a buffer on this device.
    type Data<T>: PtrType;
}

pub trait Alloc<T>: Device {
    /// Allocate memory on the implemented device.
    /// The memory is zeroed where the device allows it.
    /// # Panics
    /// If `len` is 0.
    /// # Example
    #[cfg_attr(feature = "cpu", doc = "```")]
    #[cfg_attr(not(feature = "cpu"), doc = "```ignore")]
    /// use clsum::{CPU, Alloc, Buffer, Read, flag::AllocFlag};
    ///
    /// let device = CPU::new();
    /// let data = Alloc::<f32>::alloc(&device, 12, AllocFlag::None).unwrap();
    ///
    /// let buf = Buffer { data, device: &device };
    /// assert_eq!(vec![0.; 12], device.read_to_vec(&buf).unwrap());
    /// ```
    fn alloc(&self, len: usize, flag: AllocFlag) -> crate::Result<Self::Data<T>>;

    /// Allocate new memory and copy `data` into it.
    /// # Panics
    /// If `data` is empty.
    fn alloc_from_slice(&self, data: &[T]) -> crate::Result<Self::Data<T>>
    where
        T: Clone;
}
