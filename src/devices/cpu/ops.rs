use crate::{number::Number, AddBuf, Buffer, DeviceError, Read, WriteBuf, CPU};

impl<T: Clone> Read<T> for CPU {
    #[inline]
    fn read_to_vec(&self, buf: &Buffer<T, CPU>) -> crate::Result<Vec<T>> {
        Ok(buf.to_vec())
    }
}

impl<T: Clone> WriteBuf<T> for CPU {
    fn write(&self, buf: &mut Buffer<T, CPU>, data: &[T]) -> crate::Result<()> {
        if buf.len() != data.len() {
            return Err(DeviceError::LengthMismatch.into());
        }
        buf.clone_from_slice(data);
        Ok(())
    }
}

impl<T: Number> AddBuf<T> for CPU {
    fn add(&self, lhs: &Buffer<T, CPU>, rhs: &Buffer<T, CPU>) -> crate::Result<Buffer<'_, T, CPU>> {
        if lhs.len() != rhs.len() {
            return Err(DeviceError::LengthMismatch.into());
        }

        let mut out = Buffer::try_new(self, lhs.len())?;
        add_slice(lhs, rhs, &mut out);
        Ok(out)
    }
}

/// Element-wise `out[i] = lhs[i] + rhs[i]` over the shortest of the three slices.
#[inline]
fn add_slice<T: Number>(lhs: &[T], rhs: &[T], out: &mut [T]) {
    for ((lhs, rhs), out) in lhs.iter().zip(rhs).zip(out) {
        *out = *lhs + *rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{AddBuf, Buffer, DeviceError, ErrorKind, WriteBuf, CPU};

    #[test]
    fn test_add_cpu() -> crate::Result<()> {
        let device = CPU::new();
        let lhs = Buffer::from((&device, [1, 2, 3, 4]));
        let rhs = Buffer::from((&device, [4, 3, 2, 1]));

        let out = device.add(&lhs, &rhs)?;
        assert_eq!(out.read()?, vec![5; 4]);
        Ok(())
    }

    #[test]
    fn test_add_len_mismatch() {
        let device = CPU::new();
        let lhs = Buffer::from((&device, [1., 2.]));
        let rhs = Buffer::from((&device, [1., 2., 3.]));

        let err = device.add(&lhs, &rhs).unwrap_err();
        assert_eq!(err.kind(), Some(&DeviceError::LengthMismatch));
    }

    #[test]
    fn test_write_cpu() -> crate::Result<()> {
        let device = CPU::new();
        let mut buf = Buffer::new(&device, 5);
        device.write(&mut buf, &[1., 2., 3., 4., 5.])?;
        assert_eq!(&*buf, &[1., 2., 3., 4., 5.]);

        assert!(device.write(&mut buf, &[1.]).is_err());
        Ok(())
    }
}
