//! The fixed vector addition: two constant input arrays are added element-wise on a device
//! and the three arrays are printed.

use core::fmt::{self, Debug, Display};

use crate::{number::Number, AddBuf, Alloc, Buffer, DeviceError, Read};

/// The number of elements of every array.
pub const SUM_LEN: usize = 10;

/// The first input array.
pub const LHS: [f32; SUM_LEN] = [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.];

/// The second input array.
pub const RHS: [f32; SUM_LEN] = [9., 8., 7., 6., 5., 4., 3., 2., 1., 0.];

/// The OpenCL source of the addition kernel. `sum` is its entry point.
pub const SUM_SRC: &str = "
    __kernel void sum(__global const float* a, __global const float* b, __global float* answer) {
        unsigned int xid = get_global_id(0);
        answer[xid] = a[xid] + b[xid];
    }
";

/// The host side result of one addition: both inputs and the output read back from the device.
/// All three arrays have the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SumReport<T> {
    pub lhs: Vec<T>,
    pub rhs: Vec<T>,
    pub out: Vec<T>,
}

impl<T> SumReport<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }
}

#[cfg(feature = "json")]
impl<T: serde::Serialize> SumReport<T> {
    /// Serializes the report to a JSON object with the fields `lhs`, `rhs` and `out`.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Formats the values separated by spaces.
/// Every value is followed by a single space. Floats keep at least one fractional digit.
/// # Example
/// ```
/// use clsum::sum::format_values;
///
/// assert_eq!(format_values(&[1., 2.5, 10.]), "1.0 2.5 10.0 ");
/// assert_eq!(format_values(&[3, -1]), "3 -1 ");
/// ```
pub fn format_values<T: Debug>(values: &[T]) -> String {
    values.iter().map(|value| format!("{value:?} ")).collect()
}

impl<T: Debug> Display for SumReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format_values(&self.lhs))?;
        writeln!(f, "+")?;
        writeln!(f, "{}", format_values(&self.rhs))?;
        writeln!(f, "=")?;
        write!(f, "{}", format_values(&self.out))
    }
}

/// Adds `lhs` and `rhs` on `device` and reads all three arrays back.
/// # Errors
/// - [`DeviceError::EmptyBuffer`] if the inputs are empty
/// - [`DeviceError::LengthMismatch`] if the inputs differ in length
/// - any error of the device
/// # Example
#[cfg_attr(feature = "cpu", doc = "```")]
#[cfg_attr(not(feature = "cpu"), doc = "```ignore")]
/// use clsum::{CPU, sum::{sum_on, LHS, RHS}};
///
/// let report = sum_on(&CPU::new(), &LHS, &RHS).unwrap();
/// assert_eq!(report.out, vec![10.; 10]);
/// ```
pub fn sum_on<T, D>(device: &D, lhs: &[T], rhs: &[T]) -> crate::Result<SumReport<T>>
where
    T: Number,
    D: Alloc<T> + AddBuf<T> + Read<T>,
{
    if lhs.is_empty() {
        return Err(DeviceError::EmptyBuffer.into());
    }
    if lhs.len() != rhs.len() {
        return Err(DeviceError::LengthMismatch.into());
    }

    let a = Buffer::try_from_slice(device, lhs)?;
    let b = Buffer::try_from_slice(device, rhs)?;
    let out = device.add(&a, &b)?;

    Ok(SumReport {
        lhs: a.read()?,
        rhs: b.read()?,
        out: out.read()?,
    })
}

/// Runs the complete addition of [`LHS`] and [`RHS`] on the OpenCL GPU at `device_idx`.
///
/// Every step is traced at `info` level. The handles are released in reverse order of creation,
/// also when a step fails.
#[cfg(feature = "opencl")]
pub fn run_cl_sum(device_idx: usize) -> crate::Result<SumReport<f32>> {
    use crate::{
        opencl::{api::MemFlags, CLDevices},
        OpenCL,
    };
    use log::info;

    info!("initializing OpenCL");
    let devices = CLDevices::new()?;
    let device = OpenCL::new(devices.checked_idx(device_idx)?)?;

    let input_flags = MemFlags::MemReadOnly | MemFlags::MemCopyHostPtr;
    let a = Buffer::try_with_mem_flags(&device, input_flags, SUM_LEN, Some(LHS.as_slice()))?;
    let b = Buffer::try_with_mem_flags(&device, input_flags, SUM_LEN, Some(RHS.as_slice()))?;
    let output_flags = MemFlags::MemWriteOnly as u64;
    let answer = Buffer::<f32, _>::try_with_mem_flags(&device, output_flags, SUM_LEN, None)?;
    info!("created buffers a, b and answer ({SUM_LEN} elements each)");

    device.kernel_cache.borrow_mut().kernel(&device, SUM_SRC)?;
    info!("built program and created kernel 'sum'");

    device.launch_kernel(SUM_SRC, [SUM_LEN, 0, 0], None, &[&a, &b, &answer])?;
    info!("enqueued kernel 'sum' over {SUM_LEN} work items");

    let out = answer.read()?;
    info!("read back answer");

    info!("releasing kernel, buffers, command queue and context");
    device.kernel_cache.borrow_mut().clear();
    drop(answer);
    drop(b);
    drop(a);
    drop(device);

    Ok(SumReport {
        lhs: LHS.to_vec(),
        rhs: RHS.to_vec(),
        out,
    })
}
