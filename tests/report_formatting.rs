// tests/report_formatting.rs

use testpace::orchestrator::RunResult;
use testpace::report::{format_result, sort_results};

fn result(name: &str, millis: u64) -> RunResult {
    RunResult {
        name: name.to_string(),
        command: vec!["run".to_string(), format!("test-{name}")],
        execution_time_millis: millis,
    }
}

#[test]
fn half_second_run_formats_like_the_npm_invocation() {
    let line = format_result(&result("ava", 500));
    assert_eq!(line, "AVA  \"npm run test-ava\" took 0.5s to execute.");
}

#[test]
fn seconds_are_rendered_minimally() {
    assert!(format_result(&result("jest", 7989)).contains("took 7.989s"));
    assert!(format_result(&result("mocha", 2000)).contains("took 2s"));
    assert!(format_result(&result("ava", 0)).contains("took 0s"));
}

#[test]
fn formatting_is_idempotent() {
    let r = result("parallel", 12345);
    assert_eq!(format_result(&r), format_result(&r));
}

#[test]
fn results_sort_ascending_by_execution_time() {
    let input = vec![result("slow", 2000), result("fast", 500)];

    let sorted = sort_results(&input);

    let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["fast", "slow"]);
    // Input order is untouched.
    assert_eq!(input[0].name, "slow");
}

#[test]
fn equal_times_keep_input_order() {
    let input = vec![
        result("first", 100),
        result("second", 100),
        result("third", 50),
        result("fourth", 100),
    ];

    let sorted = sort_results(&input);

    let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["third", "first", "second", "fourth"]);
}
