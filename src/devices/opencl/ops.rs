use min_cl::api::{enqueue_read_buffer, enqueue_write_buffer, wait_for_event};

use crate::{number::Number, AddBuf, Buffer, CDatatype, DeviceError, OpenCL, Read, WriteBuf};

use super::enqueue_kernel;

/// Returns the source of the element-wise `sum` kernel for `T`.
/// # Example
/// ```
/// use clsum::opencl::sum_src;
///
/// let src = sum_src::<f32>();
/// assert!(src.contains("__kernel void sum(__global const float* a"));
/// ```
pub fn sum_src<T: CDatatype>() -> String {
    format!(
        "
        __kernel void sum(__global const {datatype}* a, __global const {datatype}* b, __global {datatype}* answer) {{
            size_t xid = get_global_id(0);
            answer[xid] = a[xid] + b[xid];
        }}
    ",
        datatype = T::as_c_type_str()
    )
}

impl<T: CDatatype + Number> AddBuf<T> for OpenCL {
    #[inline]
    fn add(&self, lhs: &Buffer<T, OpenCL>, rhs: &Buffer<T, OpenCL>) -> crate::Result<Buffer<'_, T, OpenCL>> {
        cl_add(self, lhs, rhs)
    }
}

/// Adds two OpenCL buffers element-wise into a new buffer.
/// # Example
/// ```no_run
/// use clsum::{OpenCL, Buffer, opencl::cl_add};
///
/// fn main() -> clsum::Result<()> {
///     let device = OpenCL::new(0)?;
///     let lhs = Buffer::from((&device, [15, 30, 21, 5, 8]));
///     let rhs = Buffer::from((&device, [1, 2, 3, 4, 5]));
///
///     let out = cl_add(&device, &lhs, &rhs)?;
///     assert_eq!(out.read()?, vec![16, 32, 24, 9, 13]);
///     Ok(())
/// }
/// ```
pub fn cl_add<'a, T: CDatatype>(
    device: &'a OpenCL,
    lhs: &Buffer<T, OpenCL>,
    rhs: &Buffer<T, OpenCL>,
) -> crate::Result<Buffer<'a, T, OpenCL>> {
    if lhs.len() != rhs.len() {
        return Err(DeviceError::LengthMismatch.into());
    }

    let out = Buffer::try_new(device, lhs.len())?;
    enqueue_kernel(device, &sum_src::<T>(), [lhs.len(), 0, 0], None, &[lhs, rhs, &out])?;
    Ok(out)
}

impl<T> WriteBuf<T> for OpenCL {
    fn write(&self, buf: &mut Buffer<T, OpenCL>, data: &[T]) -> crate::Result<()> {
        if buf.len() != data.len() {
            return Err(DeviceError::LengthMismatch.into());
        }
        let event = unsafe { enqueue_write_buffer(&self.queue(), buf.data.ptr, data, true)? };
        wait_for_event(event)?;
        Ok(())
    }
}

impl<T: Clone + Default> Read<T> for OpenCL {
    #[inline]
    fn read_to_vec(&self, buf: &Buffer<T, OpenCL>) -> crate::Result<Vec<T>> {
        read_cl_buf_to_vec(self, buf)
    }
}

fn read_cl_buf_to_vec<T: Clone + Default>(
    device: &OpenCL,
    buf: &Buffer<T, OpenCL>,
) -> crate::Result<Vec<T>> {
    let mut read = vec![T::default(); buf.len()];
    let event = unsafe { enqueue_read_buffer(&device.queue(), buf.data.ptr, &mut read, true)? };
    wait_for_event(event)?;
    Ok(read)
}

#[cfg(test)]
mod tests {
    use crate::{AddBuf, Buffer, DeviceError, ErrorKind, OpenCL, WriteBuf};

    #[test]
    fn test_cl_add() -> crate::Result<()> {
        let device = OpenCL::new(0)?;
        let lhs = Buffer::from((&device, [1, 5, 3, 2, 7, 8]));
        let rhs = Buffer::from((&device, [-2, -6, -4, -3, -8, -9]));

        let out = device.add(&lhs, &rhs)?;
        assert_eq!(out.read()?, vec![-1; 6]);
        Ok(())
    }

    #[test]
    fn test_cl_add_len_mismatch() -> crate::Result<()> {
        let device = OpenCL::new(0)?;
        let lhs = Buffer::from((&device, [1f32, 2.]));
        let rhs = Buffer::from((&device, [1f32]));

        let err = device.add(&lhs, &rhs).unwrap_err();
        assert_eq!(err.kind(), Some(&DeviceError::LengthMismatch));
        Ok(())
    }

    #[test]
    fn test_write_cl() -> crate::Result<()> {
        let device = OpenCL::new(0)?;
        let mut buf = Buffer::new(&device, 5);
        device.write(&mut buf, &[1., 2., 3., 4., 5.])?;
        assert_eq!(buf.read()?, vec![1., 2., 3., 4., 5.]);
        Ok(())
    }
}
