use std::ffi::c_void;

use clsum::{
    opencl::{enqueue_kernel, AsClCvoidPtr},
    sum::{run_cl_sum, sum_on, LHS, RHS, SUM_SRC},
    AddBuf, Buffer, CDatatype, OpenCL, CPU,
};

#[test]
fn test_as_cl_cvoid() -> clsum::Result<()> {
    let x = 5f64;
    let ptr = x.as_cvoid_ptr();
    assert_eq!(ptr, &x as *const f64 as *const c_void);

    let device = OpenCL::new(0)?;
    let buf = Buffer::<f32, _>::new(&device, 100);
    let ptr = buf.as_cvoid_ptr();
    assert_eq!(ptr, buf.data.ptr as *const c_void);

    Ok(())
}

#[test]
fn test_fixed_sum_cl() -> clsum::Result<()> {
    let report = run_cl_sum(0)?;
    assert_eq!(report.out, vec![10.; 10]);
    assert_eq!(report.lhs, LHS.to_vec());
    assert_eq!(report.rhs, RHS.to_vec());
    Ok(())
}

#[test]
fn test_cl_matches_cpu() -> clsum::Result<()> {
    let device = OpenCL::new(0)?;

    let lhs = [1.5f32, -2., 3.25, 4., 0., 7.];
    let rhs = [0.5f32, 2., -3.25, 1., 0., -8.];

    let cl_report = sum_on(&device, &lhs, &rhs)?;
    let cpu_report = sum_on(&CPU::new(), &lhs, &rhs)?;
    assert_eq!(cl_report, cpu_report);
    Ok(())
}

#[test]
fn test_kernel_launch_sum_src() -> clsum::Result<()> {
    let device = OpenCL::new(0)?;

    let a = Buffer::from((&device, LHS));
    let b = Buffer::from((&device, RHS));
    let answer = Buffer::<f32, _>::new(&device, a.len());

    enqueue_kernel(&device, SUM_SRC, [a.len(), 0, 0], None, &[&a, &b, &answer])?;
    assert_eq!(answer.read()?, vec![10.; 10]);

    // the second launch reuses the compiled kernel
    enqueue_kernel(&device, SUM_SRC, [a.len(), 0, 0], None, &[&a, &answer, &answer])?;
    assert_eq!(answer.read()?, vec![11., 12., 13., 14., 15., 16., 17., 18., 19., 20.]);
    assert_eq!(device.kernel_cache.borrow().len(), 1);
    Ok(())
}

#[test]
fn test_kernel_launch_scalar() -> clsum::Result<()> {
    let device = OpenCL::new(0)?;

    let src_add = format!(
        "
        __kernel void operation(__global const {datatype}* lhs, __global {datatype}* out, const {datatype} add) {{
            size_t id = get_global_id(0);
            out[id] = lhs[id] + add;
        }}
    ",
        datatype = f32::as_c_type_str()
    );

    let lhs = Buffer::from((&device, [1f32, 3., 6., 4., 1., 4.]));
    let out = Buffer::<f32, _>::new(&device, lhs.len());

    enqueue_kernel(&device, &src_add, [lhs.len(), 0, 0], None, &[&lhs, &out, &4f32])?;
    assert_eq!(out.read()?, vec![5., 7., 10., 8., 5., 8.]);
    Ok(())
}

#[test]
fn test_kernel_launch_zero_gws() -> clsum::Result<()> {
    let device = OpenCL::new(0)?;
    let buf = Buffer::<f32, _>::new(&device, 4);

    assert!(enqueue_kernel(&device, SUM_SRC, [0, 0, 0], None, &[&buf, &buf, &buf]).is_err());
    Ok(())
}

#[test]
fn test_add_i32_cl() -> clsum::Result<()> {
    let device = OpenCL::new(0)?;

    let lhs = Buffer::from((&device, [1, 5, 3, 2, 7, 8]));
    let rhs = Buffer::from((&device, [-2, -6, -4, -3, -8, -9]));

    let out = device.add(&lhs, &rhs)?;
    assert_eq!(out.read()?, vec![-1, -1, -1, -1, -1, -1]);
    Ok(())
}
