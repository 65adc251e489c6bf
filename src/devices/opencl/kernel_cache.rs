use std::collections::HashMap;

use min_cl::{
    api::{build_program, create_kernels_in_program, create_program_with_source, Kernel},
    CLDevice,
};

use crate::DeviceError;

/// The build options every kernel source is compiled with.
pub const BUILD_OPTIONS: &str = "-cl-std=CL1.2";

#[derive(Debug, Default)]
/// This stores the previously compiled OpenCL kernels.
/// Every kernel is released when the cache is dropped.
pub struct KernelCacheCL {
    pub(crate) kernels: HashMap<String, Kernel>,
}

impl KernelCacheCL {
    /// Returns the kernel of `src`, compiling the source on the first call.
    /// The source must define exactly one kernel function.
    pub fn kernel(&mut self, device: &CLDevice, src: &str) -> crate::Result<&Kernel> {
        if !self.kernels.contains_key(src) {
            let program = create_program_with_source(&device.ctx(), src)?;
            build_program(&program, &[device.device()], Some(BUILD_OPTIONS))?;
            log::debug!("built program with options {BUILD_OPTIONS:?}");

            let kernel = create_kernels_in_program(&program)?
                .into_iter()
                .next()
                .ok_or(DeviceError::MissingKernel)?;

            self.kernels.insert(src.to_string(), kernel);
        }

        Ok(self
            .kernels
            .get(src)
            .ok_or(DeviceError::MissingKernel)?)
    }

    /// The number of compiled kernels.
    #[inline]
    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    /// Releases every compiled kernel.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            log::debug!("releasing {} kernel(s)", self.kernels.len());
        }
        for (_, mut kernel) in self.kernels.drain() {
            kernel.release()
        }
    }
}

impl Drop for KernelCacheCL {
    #[inline]
    fn drop(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::KernelCacheCL;
    use crate::{sum::SUM_SRC, OpenCL};

    #[test]
    fn test_kernel_cache_compiles_once() -> crate::Result<()> {
        let device = OpenCL::new(0)?;
        let mut cache = KernelCacheCL::default();
        assert!(cache.is_empty());

        cache.kernel(&device, SUM_SRC)?;
        cache.kernel(&device, SUM_SRC)?;
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }
}
