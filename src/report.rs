//! Drives the Fibonacci and primality routines over a list of inputs and
//! renders the result.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::{fibonacci, is_prime, Error};

pub const DEFAULT_INPUTS: [u32; 4] = [5, 10, 15, 20];

const HEADER: &str = "C++ Complex Example - Fibonacci and Prime Check";
const RULE_WIDTH: usize = 50;
const BANNER: [&str; 2] = [
    "🚀 C++ calculation completed successfully!",
    "Docker containerization working perfectly!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub n: u32,
    pub value: i64,
    pub is_prime: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entries: Vec<Entry>,
}

impl Report {
    /// One entry per input, in input order.
    pub fn compute(inputs: &[u32]) -> Self {
        let entries = inputs
            .iter()
            .map(|&n| {
                let value = fibonacci(n);
                let is_prime = is_prime(value);
                debug!(n, value, is_prime, "computed entry");
                Entry { n, value, is_prime }
            })
            .collect();
        Self { entries }
    }

    pub fn write_text<W: Write>(&self, mut out: W) -> Result<(), Error> {
        writeln!(out, "{}", HEADER)?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        for entry in &self.entries {
            writeln!(
                out,
                "fibonacci({}) = {}, is_prime = {}",
                entry.n, entry.value, entry.is_prime
            )?;
        }
        writeln!(out)?;
        for line in BANNER {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, mut out: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::compute(&DEFAULT_INPUTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &Report) -> String {
        let mut buf = Vec::new();
        report.write_text(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_entries() {
        let report = Report::default();
        let got: Vec<_> = report
            .entries
            .iter()
            .map(|e| (e.n, e.value, e.is_prime))
            .collect();
        assert_eq!(
            got,
            vec![
                (5, 5, true),
                (10, 55, false),
                (15, 610, false),
                (20, 6765, false),
            ]
        );
    }

    #[test]
    fn keeps_input_order() {
        let report = Report::compute(&[20, 0, 3, 3]);
        let ns: Vec<_> = report.entries.iter().map(|e| e.n).collect();
        assert_eq!(ns, vec![20, 0, 3, 3]);
        assert_eq!(report.entries[2].value, 2);
        assert!(report.entries[2].is_prime);
    }

    #[test]
    fn empty_input_still_prints_frame() {
        let text = render(&Report::compute(&[]));
        assert_eq!(
            text,
            format!(
                "{HEADER}\n{}\n\n{}\n{}\n",
                "=".repeat(50),
                BANNER[0],
                BANNER[1]
            )
        );
    }

    #[test]
    fn json_rendering() {
        let mut buf = Vec::new();
        Report::compute(&[5]).write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "entries": [{ "n": 5, "value": 5, "is_prime": true }] })
        );
    }
}
