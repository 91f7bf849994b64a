// src/report.rs

//! The final summary: sort completed runs by elapsed time and print one
//! human-readable line per runner.

use crate::orchestrator::RunResult;

const BANNER: &str = "-*-*-*-*-*-*-*-*-*-*-\n      RESULTS\n-*-*-*-*-*-*-*-*-*-*-";

/// Return a copy of `results` sorted ascending by execution time.
///
/// The sort is stable: results with equal times keep their input order.
/// The input slice is left untouched.
pub fn sort_results(results: &[RunResult]) -> Vec<RunResult> {
    let mut sorted = results.to_vec();
    sorted.sort_by_key(|r| r.execution_time_millis);
    sorted
}

/// Format one result line, e.g.
/// `AVA  "npm run test-ava" took 7.989s to execute.`
///
/// Seconds are rendered minimally (500 ms is `0.5s`, 2000 ms is `2s`).
pub fn format_result(result: &RunResult) -> String {
    let title = result.name.to_uppercase();
    let invocation = format!("npm {}", result.command.join(" "));
    let seconds = result.execution_time_millis as f64 / 1000.0;
    format!("{title}  \"{invocation}\" took {seconds}s to execute.")
}

/// Print the results banner followed by one line per result, sorted
/// ascending by execution time.
///
/// Only reachable once every runner succeeded; consumes already-validated
/// data and cannot fail.
pub fn print_report(results: &[RunResult]) {
    println!("{BANNER}");
    for result in sort_results(results) {
        println!("{}", format_result(&result));
    }
}
