use crate::{Buffer, Device};

/// Trait for reading buffers back to the host.
pub trait Read<T>: Device {
    /// Read the data of a buffer into a vector.
    /// On devices with dedicated memory this is a blocking transfer.
    /// # Example
    #[cfg_attr(feature = "cpu", doc = "```")]
    #[cfg_attr(not(feature = "cpu"), doc = "```ignore")]
    /// use clsum::{CPU, Buffer, Read};
    ///
    /// let device = CPU::new();
    /// let a = Buffer::from((&device, [1., 2., 3., 3., 2., 1.,]));
    /// let read = device.read_to_vec(&a).unwrap();
    /// assert_eq!(vec![1., 2., 3., 3., 2., 1.,], read);
    /// ```
    fn read_to_vec(&self, buf: &Buffer<T, Self>) -> crate::Result<Vec<T>>;
}

/// Trait for writing host data to buffers.
pub trait WriteBuf<T>: Device {
    /// Write data to the buffer.
    /// `data` must have the same length as `buf`.
    /// # Example
    #[cfg_attr(feature = "cpu", doc = "```")]
    #[cfg_attr(not(feature = "cpu"), doc = "```ignore")]
    /// use clsum::{CPU, Buffer, WriteBuf};
    ///
    /// let device = CPU::new();
    /// let mut buf = Buffer::new(&device, 4);
    /// device.write(&mut buf, &[9, 3, 2, -4]).unwrap();
    /// assert_eq!(&*buf, &[9, 3, 2, -4])
    /// ```
    fn write(&self, buf: &mut Buffer<T, Self>, data: &[T]) -> crate::Result<()>;
}

/// Element-wise addition of two buffers: `out[i] = lhs[i] + rhs[i]`.
pub trait AddBuf<T>: Device {
    /// Adds `lhs` and `rhs` into a newly allocated buffer.
    /// # Errors
    /// [`DeviceError::LengthMismatch`](crate::DeviceError::LengthMismatch) if the lengths differ.
    /// # Example
    #[cfg_attr(feature = "cpu", doc = "```")]
    #[cfg_attr(not(feature = "cpu"), doc = "```ignore")]
    /// use clsum::{CPU, Buffer, AddBuf};
    ///
    /// let device = CPU::new();
    /// let lhs = Buffer::from((&device, [1, 2, 3]));
    /// let rhs = Buffer::from((&device, [3, 2, 1]));
    /// let out = device.add(&lhs, &rhs).unwrap();
    /// assert_eq!(&*out, &[4, 4, 4]);
    /// ```
    fn add(&self, lhs: &Buffer<T, Self>, rhs: &Buffer<T, Self>) -> crate::Result<Buffer<'_, T, Self>>;
}
