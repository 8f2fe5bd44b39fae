//! Headless CLI smoke tests

use std::process::Command;

fn run_headless(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--no-default-features", "--"])
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute game")
}

/// Test that the game runs in headless mode without crashing
#[test]
fn test_headless_game_runs() {
    let output = run_headless(&[]);

    assert!(
        output.status.success(),
        "Game failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("=== Final State ==="),
        "Game did not print a final state. stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("score 0"),
        "Expected an untouched park to end with score 0. stdout: {}",
        stdout
    );
}

/// Test that a move script collects items and reports the score
#[test]
fn test_moves_collect_items() {
    let output = run_headless(&["--moves", "RRRRRRRDDDDRRRRRDDDDD"]);

    assert!(output.status.success(), "Game failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Collected an item (+10). Score: 10"),
        "Missing first pickup. stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("Collected an item (+10). Score: 20"),
        "Missing second pickup. stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("score 20"),
        "Final summary should report score 20. stdout: {}",
        stdout
    );
}

/// Test that placements show up in the summary and fire visit
/// notifications when reached
#[test]
fn test_placement_and_visit() {
    let output = run_headless(&["--place", "carousel:3,3", "--moves", "RRRDDD"]);

    assert!(output.status.success(), "Game failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Placed a Carousel at (3, 3)"),
        "Missing placement narration. stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("You have reached the Carousel!"),
        "Missing visit notification. stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("Carousel at (3, 3): visited"),
        "Summary should list the visited ride. stdout: {}",
        stdout
    );
}

/// Test that a bad move script fails with a useful error
#[test]
fn test_bad_move_script_errors() {
    let output = run_headless(&["--moves", "RRQ"]);

    assert!(
        !output.status.success(),
        "A bad move script should exit non-zero"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown move"),
        "Missing parse error. stderr: {}",
        stderr
    );
}
