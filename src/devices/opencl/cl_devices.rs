use min_cl::api::{get_device_ids, get_platforms, DeviceType};

use crate::DeviceError;

/// The GPU devices exposed by the first OpenCL platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CLDevices {
    /// The number of GPU devices of the platform.
    pub gpu_count: usize,
}

impl CLDevices {
    /// Enumerates the first platform and its GPU devices.
    /// # Errors
    /// - [`DeviceError::NoPlatform`] if no platform is installed
    /// - [`DeviceError::NoGpuDevice`] if the platform has no GPU
    /// - some other OpenCL related errors
    pub fn new() -> crate::Result<CLDevices> {
        let Some(platform) = get_platforms()?.into_iter().next() else {
            return Err(DeviceError::NoPlatform.into());
        };
        log::info!("found OpenCL platform");

        let devices = get_device_ids(platform, &(DeviceType::GPU as u64))?;
        if devices.is_empty() {
            return Err(DeviceError::NoGpuDevice.into());
        }
        log::info!("found {} GPU device(s)", devices.len());

        Ok(CLDevices {
            gpu_count: devices.len(),
        })
    }

    /// Returns `device_idx` if a GPU exists at this index.
    pub fn checked_idx(&self, device_idx: usize) -> crate::Result<usize> {
        if device_idx >= self.gpu_count {
            return Err(DeviceError::InvalidDeviceIdx.into());
        }
        Ok(device_idx)
    }
}
