//! The OpenCL module provides the OpenCL GPU device.

pub use cl_device::OpenCL;
pub use cl_devices::*;
pub use cl_ptr::*;
pub use kernel_cache::*;
pub use kernel_enqueue::*;
pub use ops::*;

mod cl_device;
mod cl_devices;
mod cl_ptr;
mod kernel_cache;
mod kernel_enqueue;
mod ops;

pub use min_cl::{api, CLDevice};

use crate::DeviceError;

/// The environment variable that selects the OpenCL GPU by index.
pub const CL_DEVICE_IDX_VAR: &str = "CLSUM_CL_DEVICE_IDX";

/// Reads the environment variable `CLSUM_CL_DEVICE_IDX` and returns the value as a `usize`.
/// Defaults to 0 if the variable is not set.
/// # Errors
/// [`DeviceError::InvalidEnvValue`] if the variable does not hold a valid index.
pub fn chosen_cl_idx() -> crate::Result<usize> {
    parse_cl_idx(std::env::var(CL_DEVICE_IDX_VAR).ok().as_deref())
}

pub(crate) fn parse_cl_idx(value: Option<&str>) -> crate::Result<usize> {
    match value {
        None => Ok(0),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| DeviceError::InvalidEnvValue.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_cl_idx;
    use crate::{DeviceError, ErrorKind};

    #[test]
    fn test_parse_cl_idx() -> crate::Result<()> {
        assert_eq!(parse_cl_idx(None)?, 0);
        assert_eq!(parse_cl_idx(Some("2"))?, 2);
        assert_eq!(parse_cl_idx(Some(" 1\n"))?, 1);

        let err = parse_cl_idx(Some("gpu")).unwrap_err();
        assert_eq!(err.kind(), Some(&DeviceError::InvalidEnvValue));
        Ok(())
    }
}
