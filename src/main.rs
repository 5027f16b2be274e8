use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use env_logger::Builder;
use log::error;
use rr_model::{InputError, Report, Sim, SimConfig, SimError, input};

fn main() -> ExitCode {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    match run() {
        Ok(report) => {
            println!("Average waiting time: {:.2}", report.average_waiting_time);
            println!("Average response time: {:.2}", report.average_response_time);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(u8::try_from(exit_code(&err)).unwrap_or(1))
        }
    }
}

fn run() -> anyhow::Result<Report> {
    let config = SimConfig::from_args(std::env::args().skip(1))?;
    let jobs = input::read_jobs(&config.input)
        .with_context(|| format!("reading workload from {}", config.input.display()))?;
    let quantum = config.quantum()?;

    let finished = Sim::new(jobs, quantum)?.run_to_completion();
    let report = Report::from_finished(&finished).context("no processes were simulated")?;
    report.log_summary();
    Ok(report)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<InputError>() {
        return err.exit_code();
    }
    if let Some(err) = err.downcast_ref::<SimError>() {
        return err.exit_code();
    }
    input::EINVAL
}
