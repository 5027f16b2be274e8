//! Workload decoding.
//!
//! A workload is a stream of decimal integers separated by any non-digit
//! bytes: a process count `N` followed by `N` `(pid, arrival, burst)`
//! triplets.

use std::{fmt, fs, io, path::Path, path::PathBuf};

use log::debug;

use crate::{core::Ticks, sim::Job};

pub const EINVAL: i32 = 22;
pub const EIO: i32 = 5;

#[derive(Debug)]
pub enum InputError {
    Usage { got: usize },
    Io { path: PathBuf, source: io::Error },
    // End of input while `expected` was still to be read
    Truncated { expected: String },
    Overflow { offset: usize },
    InvalidQuantum(String),
    QuantumOverflow(String),
    ZeroQuantum,
}

impl InputError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { source, .. } => source.raw_os_error().unwrap_or(EIO),
            _ => EINVAL,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage { got } => write!(
                f,
                "usage: rr_model <input-file> <quantum> (got {got} arguments)"
            ),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Truncated { expected } => write!(
                f,
                "reached end of input while looking for the {expected}"
            ),
            Self::Overflow { offset } => {
                write!(f, "integer at byte {offset} does not fit in 32 bits")
            }
            Self::InvalidQuantum(arg) => write!(f, "quantum {arg:?} is not a decimal number"),
            Self::QuantumOverflow(arg) => write!(f, "quantum {arg} does not fit in 32 bits"),
            Self::ZeroQuantum => write!(f, "quantum must be greater than zero"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Pulls successive decimal integers out of a byte buffer.
struct IntScanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> IntScanner<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn next_u32(&mut self, expected: impl FnOnce() -> String) -> Result<u32, InputError> {
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == self.data.len() {
            return Err(InputError::Truncated {
                expected: expected(),
            });
        }

        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(digit) = self.data.get(self.pos).filter(|b| b.is_ascii_digit()) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(digit - b'0')))
                .ok_or(InputError::Overflow { offset: start })?;
            self.pos += 1;
        }
        Ok(value)
    }
}

pub fn parse_jobs(data: &[u8]) -> Result<Vec<Job>, InputError> {
    let mut scanner = IntScanner::new(data);
    let count = scanner.next_u32(|| "process count".to_owned())?;

    let mut jobs = Vec::new();
    for index in 1..=count {
        let pid = scanner.next_u32(|| format!("pid of process {index}"))?;
        let arrival = scanner.next_u32(|| format!("arrival time of process {index}"))?;
        let burst = scanner.next_u32(|| format!("burst time of process {index}"))?;
        jobs.push(Job {
            pid,
            arrival_time: Ticks::from(arrival),
            burst_time: Ticks::from(burst),
        });
    }
    Ok(jobs)
}

pub fn read_jobs(path: &Path) -> Result<Vec<Job>, InputError> {
    let data = fs::read(path).map_err(|source| InputError::Io {
        path: path.to_owned(),
        source,
    })?;
    let jobs = parse_jobs(&data)?;
    debug!("loaded {} processes from {}", jobs.len(), path.display());
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(pid: u32, arrival_time: Ticks, burst_time: Ticks) -> Job {
        Job {
            pid,
            arrival_time,
            burst_time,
        }
    }

    #[test]
    fn parses_count_and_triplets() {
        let jobs = parse_jobs(b"2\n1, 0, 4\n2, 0, 4\n").unwrap();
        assert_eq!(jobs, vec![job(1, 0, 4), job(2, 0, 4)]);
    }

    #[test]
    fn any_non_digit_separates() {
        let jobs = parse_jobs(b"count=1 -> [pid 7 @ t-3 burst:12]").unwrap();
        assert_eq!(jobs, vec![job(7, 3, 12)]);
    }

    #[test]
    fn integer_ending_the_input_is_accepted() {
        let jobs = parse_jobs(b"1 5 1 2").unwrap();
        assert_eq!(jobs, vec![job(5, 1, 2)]);
    }

    #[test]
    fn trailing_data_is_ignored() {
        let jobs = parse_jobs(b"1\n1 0 5\n99 99\n").unwrap();
        assert_eq!(jobs, vec![job(1, 0, 5)]);
    }

    #[test]
    fn missing_triplet_is_truncated() {
        let err = parse_jobs(b"2\n1 0 4\n2 0\n").unwrap_err();
        assert!(matches!(
            &err,
            InputError::Truncated { expected } if expected == "burst time of process 2"
        ));
        assert_eq!(err.exit_code(), EINVAL);
    }

    #[test]
    fn empty_input_is_truncated() {
        let err = parse_jobs(b"  \n").unwrap_err();
        assert_eq!(err.to_string(), "reached end of input while looking for the process count");
    }

    #[test]
    fn zero_count_yields_no_jobs() {
        assert_eq!(parse_jobs(b"0\n").unwrap(), Vec::new());
    }

    #[test]
    fn oversized_integer_overflows() {
        let err = parse_jobs(b"1 4294967296 0 1").unwrap_err();
        assert!(matches!(err, InputError::Overflow { offset: 2 }));
    }

    #[test]
    fn missing_file_keeps_os_error_code() {
        let err = read_jobs(Path::new("/nonexistent/rr_model/workload.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
