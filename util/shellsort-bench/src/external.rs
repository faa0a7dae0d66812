//! Times a separate sort executable that follows the `shellsort` CLI contract: numbers on stdin,
//! sorted numbers on stdout, gap sequence selected with `--sequence`.

use std::io::BufWriter;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::thread;

use log::debug;
use shellsort::io::{read_numbers, write_numbers};
use shellsort::GapSequence;

use crate::benchmark::Runner;
use crate::error::{BenchError, Result};
use crate::measure::{as_millis_f64, measure};

pub struct External {
    program: PathBuf,
    sequence: GapSequence,
}

impl External {
    pub fn new(program: PathBuf, sequence: GapSequence) -> Self {
        Self { program, sequence }
    }

    fn run_once(&self, data: &[i64]) -> Result<Output> {
        let mut child = Command::new(&self.program)
            .arg("--sequence")
            .arg(self.sequence.name())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| self.failure(err.to_string()))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.failure("stdin was not captured".to_owned()))?;

        // Feed stdin from another thread, otherwise a child that fills its stdout pipe before
        // reading all of its input deadlocks against us.
        let (output, written) = thread::scope(|s| {
            let writer = s.spawn(move || write_numbers(BufWriter::new(stdin), data));
            let output = child.wait_with_output();
            (output, writer.join())
        });

        let output = output.map_err(|err| self.failure(err.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.failure(format!("{}: {}", output.status, stderr.trim())));
        }

        match written {
            Ok(Ok(())) => Ok(output),
            Ok(Err(err)) => Err(self.failure(format!("writing input failed: {err}"))),
            Err(_) => Err(self.failure("input writer panicked".to_owned())),
        }
    }

    fn failure(&self, message: String) -> BenchError {
        BenchError::ExternalProcess {
            program: self.program.clone(),
            message,
        }
    }
}

impl Runner for External {
    fn label(&self) -> &str {
        "external"
    }

    fn time_ms(&mut self, data: &[i64]) -> Result<f64> {
        let (output, duration) = measure(|| self.run_once(data));
        let output = output?;

        let returned = read_numbers(output.stdout.as_slice())?;
        check_sorted_output(data, &returned).map_err(|message| self.failure(message))?;

        debug!(
            "{} sorted {} numbers in {:.3} ms",
            self.program.display(),
            data.len(),
            as_millis_f64(duration)
        );

        Ok(as_millis_f64(duration))
    }
}

/// Checks that `returned` is exactly `input` in ascending order.
fn check_sorted_output(input: &[i64], returned: &[i64]) -> std::result::Result<(), String> {
    let mut expected = input.to_vec();
    expected.sort_unstable();

    if returned.len() != expected.len() {
        return Err(format!(
            "returned {} numbers for {} inputs",
            returned.len(),
            expected.len()
        ));
    }

    match expected.iter().zip(returned).position(|(a, b)| a != b) {
        Some(idx) => Err(format!(
            "returned numbers are not the sorted input, index {idx} is {} instead of {}",
            returned[idx], expected[idx]
        )),
        None => Ok(()),
    }
}
