use clap::Parser;
use tabq::cli::commands::train::{TrainArgs, execute};
use tempfile::tempdir;

fn parse_args<I, T>(args: I) -> TrainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    TrainArgs::parse_from(args)
}

#[test]
fn summary_without_extension_appends_json() {
    let tmp = tempdir().unwrap();
    let summary_stem = tmp.path().join("run_overview");

    let args = parse_args([
        "tabq-train",
        "--episodes",
        "5",
        "--seed",
        "7",
        "--summary",
        summary_stem.to_str().unwrap(),
    ]);

    execute(args).expect("training with summary should succeed");

    let expected_path = summary_stem.with_extension("json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["episodes"], 5);
    assert_eq!(parsed["episode_rewards"].as_array().unwrap().len(), 5);
}

#[test]
fn rewards_csv_has_one_row_per_episode() {
    let tmp = tempdir().unwrap();
    let csv_path = tmp.path().join("rewards.csv");

    let args = parse_args([
        "tabq-train",
        "--episodes",
        "4",
        "--seed",
        "3",
        "--rewards-csv",
        csv_path.to_str().unwrap(),
    ]);

    execute(args).expect("training with rewards CSV should succeed");

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "episode,total_reward");
    assert_eq!(lines.len(), 5, "header plus one row per episode");
    assert!(lines[1].starts_with("0,"));
    assert!(lines[4].starts_with("3,"));
}

#[test]
fn observations_jsonl_written_when_requested() {
    let tmp = tempdir().unwrap();
    let obs_path = tmp.path().join("observations.jsonl");

    let args = parse_args([
        "tabq-train",
        "--episodes",
        "2",
        "--seed",
        "11",
        "--observations",
        obs_path.to_str().unwrap(),
    ]);

    execute(args).expect("training with observations should succeed");

    let contents = std::fs::read_to_string(&obs_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2, "one JSONL record per episode");

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["episode"], 0);
    assert!(first["total_steps"].as_u64().unwrap() >= 1);
}

#[test]
fn progress_bar_defaults_on_and_can_be_disabled() {
    let defaulted = parse_args(["tabq-train"]);
    assert!(defaulted.progress);

    let disabled = parse_args(["tabq-train", "--progress", "false"]);
    assert!(!disabled.progress);

    let enabled = parse_args(["tabq-train", "--progress", "true"]);
    assert!(enabled.progress);
}

#[test]
fn training_runs_with_reward_lines_instead_of_progress_bar() {
    let args = parse_args([
        "tabq-train",
        "--episodes",
        "2",
        "--seed",
        "5",
        "--progress",
        "false",
    ]);

    execute(args).expect("training without the progress bar should succeed");
}

#[test]
fn invalid_learning_rate_fails_before_training() {
    let args = parse_args([
        "tabq-train",
        "--episodes",
        "5",
        "--learning-rate",
        "1.5",
    ]);

    let err = execute(args).expect_err("invalid learning rate must be rejected");
    assert!(err.to_string().contains("learning rate"));
}
