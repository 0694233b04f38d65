//! CSV Output
//!
//! One header line (`test`, one column per flag, `average_ns`) and one line
//! per result. Flags are written as `1`/`0`.

use crate::report::Report;

/// Generate a CSV report
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::from("test");
    for symbol in &report.alphabet {
        output.push(',');
        output.push_str(&escape(&symbol.to_string()));
    }
    output.push_str(",average_ns\n");

    for row in &report.rows {
        output.push_str(&escape(&row.test_id));
        for on in row.flags.iter() {
            output.push_str(if on { ",1" } else { ",0" });
        }
        output.push_str(&format!(",{}\n", row.average_ns));
    }
    output
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportMeta, ResultRow};
    use chrono::Utc;
    use flagbench_core::FlagAlphabet;

    fn report(rows: Vec<ResultRow>, alphabet: &FlagAlphabet) -> Report {
        let meta = ReportMeta {
            version: "0.1.0".to_string(),
            timestamp: Utc::now(),
            environment: None,
        };
        Report::new(meta, alphabet, "A5000", 10, rows)
    }

    #[test]
    fn test_csv_rows() {
        let alphabet: FlagAlphabet = "AIE".parse().unwrap();
        let rows = vec![
            ResultRow::new("Test_AI", alphabet.decode("Test_AI", 5), 1500.5),
            ResultRow::new("Test_E", alphabet.decode("Test_E", 5), 20.0),
        ];
        let csv = generate_csv_report(&report(rows, &alphabet));
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "test,A,I,E,average_ns");
        assert_eq!(lines[1], "Test_AI,1,1,0,1500.5");
        assert_eq!(lines[2], "Test_E,0,0,1,20");
    }

    #[test]
    fn test_csv_escapes_ids() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
