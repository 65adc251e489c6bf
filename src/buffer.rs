use core::{
    fmt::Debug,
    ops::{Deref, DerefMut},
};

use crate::{flag::AllocFlag, Alloc, Device, DeviceError, PtrType, Read};

/// The underlying non-growable array structure. A `Buffer` may be encapsulated in other structs.
/// The memory is released when the `Buffer` is dropped, so buffers created one after another
/// in a scope are released in reverse order.
/// # Example
#[cfg_attr(feature = "cpu", doc = "```")]
#[cfg_attr(not(feature = "cpu"), doc = "```ignore")]
/// use clsum::{Buffer, CPU};
///
/// let device = CPU::new();
/// let buf = Buffer::from((&device, [1, 2, 3]));
/// assert_eq!(buf.read().unwrap(), vec![1, 2, 3]);
/// ```
pub struct Buffer<'a, T, D: Device> {
    /// the type of pointer
    pub data: D::Data<T>,
    /// A reference to the corresponding device. Used to call operations on the buffer.
    pub device: &'a D,
}

impl<'a, T, D: Alloc<T>> Buffer<'a, T, D> {
    /// Creates a `Buffer` with the given length.
    /// Host memory is zeroed, device memory is left uninitialized.
    /// # Errors
    /// - [`DeviceError::EmptyBuffer`] if `len` is 0
    /// - the device fails to allocate the memory
    #[inline]
    pub fn try_new(device: &'a D, len: usize) -> crate::Result<Buffer<'a, T, D>> {
        if len == 0 {
            return Err(DeviceError::EmptyBuffer.into());
        }
        Ok(Buffer {
            data: device.alloc(len, AllocFlag::None)?,
            device,
        })
    }

    /// Creates a new `Buffer` that holds a copy of `data`.
    /// # Errors
    /// - [`DeviceError::EmptyBuffer`] if `data` is empty
    /// - the device fails to allocate the memory
    #[inline]
    pub fn try_from_slice(device: &'a D, data: &[T]) -> crate::Result<Buffer<'a, T, D>>
    where
        T: Clone,
    {
        if data.is_empty() {
            return Err(DeviceError::EmptyBuffer.into());
        }
        Ok(Buffer {
            data: device.alloc_from_slice(data)?,
            device,
        })
    }

    /// Creates a `Buffer` with the given length.
    /// # Panics
    /// If the length is 0 or the device fails to allocate.
    /// # Example
    #[cfg_attr(feature = "cpu", doc = "```")]
    #[cfg_attr(not(feature = "cpu"), doc = "```ignore")]
    /// use clsum::{Buffer, CPU};
    ///
    /// let device = CPU::new();
    /// let buf = Buffer::<f32, _>::new(&device, 6);
    /// assert_eq!(&*buf, &[0.; 6]);
    /// ```
    #[inline]
    pub fn new(device: &'a D, len: usize) -> Buffer<'a, T, D> {
        match Buffer::try_new(device, len) {
            Ok(buf) => buf,
            Err(e) => panic!("Could not allocate a buffer of length {len}: {e}"),
        }
    }
}

impl<'a, T, D: Device> Buffer<'a, T, D> {
    /// Returns the number of elements of the `Buffer`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the contents of the `Buffer` back to the host.
    #[inline]
    pub fn read(&self) -> crate::Result<Vec<T>>
    where
        D: Read<T>,
    {
        self.device.read_to_vec(self)
    }
}

impl<T, D: Device> Deref for Buffer<'_, T, D>
where
    D::Data<T>: Deref<Target = [T]>,
{
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T, D: Device> DerefMut for Buffer<'_, T, D>
where
    D::Data<T>: DerefMut<Target = [T]>,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T, D: Device> Debug for Buffer<'_, T, D>
where
    D::Data<T>: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len())
            .field("data", &self.data)
            .finish()
    }
}

fn from_slice_or_panic<'a, T: Clone, D: Alloc<T>>(device: &'a D, data: &[T]) -> Buffer<'a, T, D> {
    match Buffer::try_from_slice(device, data) {
        Ok(buf) => buf,
        Err(e) => panic!("Could not create a buffer from host data: {e}"),
    }
}

impl<'a, T: Clone, D: Alloc<T>, const N: usize> From<(&'a D, [T; N])> for Buffer<'a, T, D> {
    #[inline]
    fn from((device, array): (&'a D, [T; N])) -> Self {
        from_slice_or_panic(device, &array)
    }
}

impl<'a, T: Clone, D: Alloc<T>, const N: usize> From<(&'a D, &[T; N])> for Buffer<'a, T, D> {
    #[inline]
    fn from((device, array): (&'a D, &[T; N])) -> Self {
        from_slice_or_panic(device, array)
    }
}

impl<'a, T: Clone, D: Alloc<T>> From<(&'a D, &[T])> for Buffer<'a, T, D> {
    #[inline]
    fn from((device, slice): (&'a D, &[T])) -> Self {
        from_slice_or_panic(device, slice)
    }
}

impl<'a, T: Clone, D: Alloc<T>> From<(&'a D, Vec<T>)> for Buffer<'a, T, D> {
    #[inline]
    fn from((device, vec): (&'a D, Vec<T>)) -> Self {
        from_slice_or_panic(device, &vec)
    }
}

#[cfg(feature = "cpu")]
#[cfg(test)]
mod tests {
    use crate::{Buffer, DeviceError, ErrorKind, CPU};

    #[test]
    fn test_from_conversions() {
        let device = CPU::new();

        let buf = Buffer::from((&device, [1, 2, 3]));
        assert_eq!(&*buf, &[1, 2, 3]);

        let buf = Buffer::from((&device, &[4, 5]));
        assert_eq!(&*buf, &[4, 5]);

        let buf = Buffer::from((&device, vec![1.5, 2.5]));
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.read().unwrap(), vec![1.5, 2.5]);
    }

    #[test]
    fn test_deref_mut() {
        let device = CPU::new();
        let mut buf = Buffer::<i32, _>::new(&device, 3);
        buf[1] = 7;
        assert_eq!(&*buf, &[0, 7, 0]);
    }

    #[test]
    fn test_try_zero_len_buffer() {
        let device = CPU::new();

        let err = Buffer::<f32, _>::try_new(&device, 0).unwrap_err();
        assert_eq!(err.kind(), Some(&DeviceError::EmptyBuffer));

        let err = Buffer::<f32, _>::try_from_slice(&device, &[]).unwrap_err();
        assert_eq!(err.kind(), Some(&DeviceError::EmptyBuffer));
    }

    #[test]
    #[should_panic]
    fn test_zero_len_buffer() {
        let device = CPU::new();
        let _buf = Buffer::<f32, _>::new(&device, 0);
    }
}
