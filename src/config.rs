use std::{num::NonZeroU64, path::PathBuf};

use crate::{core::Ticks, input::InputError};

/// Maximum number of contiguous ticks a task may hold the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantum(NonZeroU64);

impl Quantum {
    pub fn new(ticks: Ticks) -> Option<Self> {
        NonZeroU64::new(ticks).map(Self)
    }

    pub fn get(self) -> Ticks {
        self.0.get()
    }

    /// Parses a quantum given as plain decimal digits.
    pub fn parse(arg: &str) -> Result<Self, InputError> {
        if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::InvalidQuantum(arg.to_owned()));
        }
        let ticks: u32 = arg
            .parse()
            .map_err(|_| InputError::QuantumOverflow(arg.to_owned()))?;
        Self::new(Ticks::from(ticks)).ok_or(InputError::ZeroQuantum)
    }
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub input: PathBuf,
    // Kept raw: the workload is read before the quantum is validated
    pub quantum_arg: String,
}

impl SimConfig {
    /// Builds the config from positional arguments, program name excluded.
    /// Only the argument count is checked here.
    pub fn from_args<I>(args: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let [input, quantum_arg] = args.as_slice() else {
            return Err(InputError::Usage { got: args.len() });
        };

        Ok(Self {
            input: PathBuf::from(input),
            quantum_arg: quantum_arg.clone(),
        })
    }

    pub fn quantum(&self) -> Result<Quantum, InputError> {
        Quantum::parse(&self.quantum_arg)
    }
}
