use clsum::{opencl::chosen_cl_idx, sum::run_cl_sum};

fn main() -> clsum::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run().inspect_err(|e| log::error!("{e}"))
}

fn run() -> clsum::Result<()> {
    let device_idx = chosen_cl_idx()?;
    let report = run_cl_sum(device_idx)?;
    println!("{report}");
    Ok(())
}
