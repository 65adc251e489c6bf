mod std_err {
    pub type Error = Box<dyn std::error::Error + Send + Sync>;

    pub trait ErrorKind {
        fn kind<E: std::error::Error + PartialEq + 'static>(&self) -> Option<&E>;
    }

    impl ErrorKind for Error {
        fn kind<E: std::error::Error + PartialEq + 'static>(&self) -> Option<&E> {
            self.downcast_ref::<E>()
        }
    }

    impl std::error::Error for crate::DeviceError {}
}

pub use std_err::{Error, ErrorKind};

pub type Result<T> = core::result::Result<T, self::std_err::Error>;

#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DeviceError {
    NoPlatform,
    NoGpuDevice,
    InvalidDeviceIdx,
    LengthMismatch,
    EmptyBuffer,
    MissingKernel,
    InvalidEnvValue,
}

impl DeviceError {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceError::NoPlatform => "No OpenCL platform was found.",
            DeviceError::NoGpuDevice => "The OpenCL platform does not expose a GPU device.",
            DeviceError::InvalidDeviceIdx => "No GPU device exists at the given device index.",
            DeviceError::LengthMismatch => "The operand buffers must have the same length.",
            DeviceError::EmptyBuffer => "A buffer must contain at least one element.",
            DeviceError::MissingKernel => "The compiled program does not contain a kernel.",
            DeviceError::InvalidEnvValue => {
                "Environment variable 'CLSUM_CL_DEVICE_IDX' contains an invalid device index."
            }
        }
    }
}

impl core::fmt::Debug for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use crate::{DeviceError, Error, ErrorKind};

    #[test]
    fn test_kind_downcast() {
        let err: Error = DeviceError::LengthMismatch.into();
        assert_eq!(err.kind(), Some(&DeviceError::LengthMismatch));
        assert_eq!(err.kind::<std::fmt::Error>(), None);
    }

    #[test]
    fn test_display_uses_message() {
        assert_eq!(
            DeviceError::EmptyBuffer.to_string(),
            "A buffer must contain at least one element."
        );
    }
}
