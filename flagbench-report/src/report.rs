//! Report Data Structures

use chrono::{DateTime, Utc};
use flagbench_core::{FlagAlphabet, FlagVector};
use serde::{Deserialize, Serialize};

/// Complete suite report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    /// Flag symbols in column order
    pub alphabet: Vec<char>,
    /// Workload argument every test received
    pub workload: String,
    /// Executions averaged into each row
    pub iterations: u32,
    /// One row per test, in suite order
    pub rows: Vec<ResultRow>,
}

impl Report {
    /// Assemble a report from finished rows
    pub fn new(
        meta: ReportMeta,
        alphabet: &FlagAlphabet,
        workload: impl Into<String>,
        iterations: u32,
        rows: Vec<ResultRow>,
    ) -> Self {
        Self {
            meta,
            alphabet: alphabet.symbols().to_vec(),
            workload: workload.into(),
            iterations,
            rows,
        }
    }
}

/// Aggregated result of one test: decoded flags plus mean elapsed time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub test_id: String,
    pub flags: FlagVector,
    /// Mean of all iterations, in nanoseconds
    pub average_ns: f64,
}

impl ResultRow {
    pub fn new(test_id: impl Into<String>, flags: FlagVector, average_ns: f64) -> Self {
        Self {
            test_id: test_id.into(),
            flags,
            average_ns,
        }
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Absent when probing was disabled
    pub environment: Option<EnvironmentInfo>,
}

/// Host and runtime the suite ran on. Informational only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    pub os: String,
    pub arch: String,
    pub cpu: String,
    pub cpu_cores: u32,
    pub cpu_mhz: Option<f64>,
    /// First line reported by the runtime's version command
    pub runtime_version: Option<String>,
}

impl EnvironmentInfo {
    /// Clock speed as `"3.6000 GHz"`, or `"unknown clock"`
    pub fn clock_display(&self) -> String {
        match self.cpu_mhz {
            Some(mhz) => format!("{:.4} GHz", mhz / 1000.0),
            None => "unknown clock".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_display() {
        let mut env = EnvironmentInfo::default();
        assert_eq!(env.clock_display(), "unknown clock");
        env.cpu_mhz = Some(3600.0);
        assert_eq!(env.clock_display(), "3.6000 GHz");
    }

    #[test]
    fn test_report_copies_alphabet() {
        let meta = ReportMeta {
            version: "0.1.0".to_string(),
            timestamp: Utc::now(),
            environment: None,
        };
        let alphabet: FlagAlphabet = "AL".parse().unwrap();
        let rows = vec![ResultRow::new("Test_A", alphabet.decode("Test_A", 5), 10.0)];
        let report = Report::new(meta, &alphabet, "A5000", 3, rows);
        assert_eq!(report.alphabet, vec!['A', 'L']);
        assert_eq!(report.workload, "A5000");
        assert_eq!(report.rows.len(), 1);
    }
}
