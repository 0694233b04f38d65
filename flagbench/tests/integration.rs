//! Integration tests for FlagBench
//!
//! These tests drive a whole suite through the public API with scripted
//! runners and check the report that comes out the other end.

use flagbench::{
    BenchError, CommandRunner, ExecutionConfig, Executor, FlagAlphabet, InvocationFailure,
    OutputFormat, Report, TableOptions, TableStyle, build_plan, build_report_meta,
    format_human_output, generate_csv_report, generate_json_report, render_table, run_suite,
};
use std::collections::HashMap;

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Runner that answers from a table of per-test outputs and records every call
fn table_runner<'a>(
    outputs: HashMap<&'static str, Vec<&'static str>>,
    calls: &'a mut Vec<(String, String)>,
) -> impl FnMut(&str, &str) -> Result<String, InvocationFailure> + 'a {
    let mut cursors: HashMap<String, usize> = HashMap::new();
    move |test_id: &str, workload: &str| -> Result<String, InvocationFailure> {
        calls.push((test_id.to_string(), workload.to_string()));
        let script = &outputs[test_id];
        let cursor = cursors.entry(test_id.to_string()).or_default();
        let out = script[*cursor % script.len()].to_string();
        *cursor += 1;
        Ok(out)
    }
}

#[test]
fn test_suite_rows_follow_plan_order() {
    let mut calls = Vec::new();
    let outputs = HashMap::from([
        ("Test_LI", vec!["100\n", "200\n", "300\n"]),
        ("Test_AICBF", vec!["10\n"]),
        ("Test_one_liner", vec!["7\n", "8\n", "9\n"]),
    ]);
    let plan = build_plan(
        ids(&["Test_LI", "Test_AICBF", "Test_one_liner"]),
        None,
        FlagAlphabet::default(),
        5,
    );

    let config = ExecutionConfig::new("A5000", 3).unwrap();
    let mut executor = Executor::new(table_runner(outputs, &mut calls), config);
    let rows = run_suite(&mut executor, &plan).unwrap();
    drop(executor);

    let names: Vec<&str> = rows.iter().map(|r| r.test_id.as_str()).collect();
    assert_eq!(names, vec!["Test_LI", "Test_AICBF", "Test_one_liner"]);
    assert_eq!(rows[0].average_ns, 200.0);
    assert_eq!(rows[1].average_ns, 10.0);
    assert_eq!(rows[2].average_ns, 8.0);

    // A L I E C B F R
    let flags: Vec<bool> = rows[1].flags.iter().collect();
    assert_eq!(flags, vec![true, false, true, false, true, true, true, false]);
    // Lowercase letters are not flags
    assert!(rows[2].flags.iter().all(|on| !on));
    assert_eq!(rows[2].flags.len(), 8);

    assert_eq!(calls.len(), 9);
    assert!(calls.iter().all(|(_, w)| w == "A5000"));
    assert_eq!(calls[0].0, "Test_LI");
    assert_eq!(calls[3].0, "Test_AICBF");
}

#[test]
fn test_parse_failure_stops_suite() {
    let mut calls = Vec::new();
    let outputs = HashMap::from([
        ("Test_AE", vec!["5\n"]),
        ("Test_AI", vec!["5\n", "oops\n"]),
        ("Test_LI", vec!["5\n"]),
    ]);
    let plan = build_plan(
        ids(&["Test_AE", "Test_AI", "Test_LI"]),
        None,
        FlagAlphabet::default(),
        5,
    );

    let config = ExecutionConfig::new("A5000", 2).unwrap();
    let mut executor = Executor::new(table_runner(outputs, &mut calls), config);
    let err = run_suite(&mut executor, &plan).unwrap_err();
    drop(executor);

    match err {
        BenchError::MeasurementParse {
            test_id,
            iteration,
            output,
        } => {
            assert_eq!(test_id, "Test_AI");
            assert_eq!(iteration, 2);
            assert_eq!(output, "oops\n");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // Test_LI never ran
    assert!(calls.iter().all(|(id, _)| id != "Test_LI"));
    assert_eq!(calls.len(), 4);
}

#[test]
fn test_process_failure_stops_suite() {
    let runner = |test_id: &str, _workload: &str| -> Result<String, InvocationFailure> {
        if test_id == "Test_AEB" {
            Err(InvocationFailure::ExitCode {
                code: 1,
                stderr: "Exception in thread \"main\"".to_string(),
            })
        } else {
            Ok("42".to_string())
        }
    };
    let plan = build_plan(
        ids(&["Test_AE", "Test_AEB"]),
        None,
        FlagAlphabet::default(),
        5,
    );

    let mut executor = Executor::new(runner, ExecutionConfig::new("A5000", 1).unwrap());
    let err = run_suite(&mut executor, &plan).unwrap_err();
    assert!(matches!(
        err,
        BenchError::Execution { ref test_id, iteration: 1, .. } if test_id == "Test_AEB"
    ));
    assert!(err.to_string().contains("Exception in thread"));
}

#[test]
fn test_report_outputs() {
    let runner = |test_id: &str, _workload: &str| -> Result<String, InvocationFailure> {
        Ok(if test_id == "Test_AE" { "1234567" } else { "89" }.to_string())
    };
    let plan = build_plan(
        ids(&["Test_AE", "Test_LI"]),
        None,
        FlagAlphabet::default(),
        5,
    );
    let mut executor = Executor::new(runner, ExecutionConfig::new("B100", 4).unwrap());
    let rows = run_suite(&mut executor, &plan).unwrap();
    let report = Report::new(build_report_meta(None), &plan.alphabet, "B100", 4, rows);

    let options = TableOptions::default();
    let table = render_table(&report.rows, &plan.alphabet, 4, &options);
    let lines: Vec<&str> = table.lines().collect();
    // top rule, header, header rule, two rows, bottom rule
    assert_eq!(lines.len(), 6);
    assert!(lines[1].contains("Average time over 4 iterations (ns)"));
    assert!(lines[3].starts_with("│ Test_AE │ 🟢 │ 🔴 │ 🔴 │ 🟢 │"));
    assert!(lines[3].ends_with(" 1,234,567.0 │"));
    // Test + 8 flags + average
    assert_eq!(lines[3].matches('│').count(), 11);

    let human = format_human_output(&report, &options).unwrap();
    assert!(human.contains("Workload: B100  Iterations: 4  Tests: 2"));
    assert!(human.ends_with(&table));

    let plain = TableOptions {
        style: TableStyle::Plain,
        ..TableOptions::default()
    };
    assert_eq!(render_table(&report.rows, &plan.alphabet, 4, &plain).lines().count(), 3);

    let json = generate_json_report(&report).unwrap();
    let parsed: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.rows, report.rows);
    assert_eq!(parsed.workload, "B100");
    assert!(parsed.meta.environment.is_none());

    let csv = generate_csv_report(&report);
    assert_eq!(
        csv,
        "test,A,L,I,E,C,B,F,R,average_ns\n\
         Test_AE,1,0,0,1,0,0,0,0,1234567\n\
         Test_LI,0,1,1,0,0,0,0,0,89\n"
    );

    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
}

#[cfg(unix)]
#[test]
fn test_command_runner_suite() {
    // `sh -c script id workload`: $0 is the test id, $1 the workload
    let runner = CommandRunner::new(
        "sh",
        [
            "-c",
            "case \"$0\" in Test_AE) echo 300 ;; *) echo ${#1} ;; esac",
        ],
    );
    let plan = build_plan(
        ids(&["Test_AE", "Test_LEB"]),
        None,
        FlagAlphabet::default(),
        5,
    );
    let mut executor = Executor::new(runner, ExecutionConfig::new("A5000", 2).unwrap());
    let rows = run_suite(&mut executor, &plan).unwrap();

    assert_eq!(rows[0].average_ns, 300.0);
    // length of "A5000"
    assert_eq!(rows[1].average_ns, 5.0);
    assert_eq!(rows[1].flags.active_symbols(&plan.alphabet), vec!['L', 'E', 'B']);
}
