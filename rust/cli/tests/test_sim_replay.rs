use pokerduel_cli::run;
use std::fs;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).to_string(),
        String::from_utf8_lossy(&err).to_string(),
    )
}

#[test]
fn sim_writes_one_record_per_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let (code, stdout, _) = run_cli(&[
        "pokerduel", "sim", "--matches", "4", "--seed", "1", "--output", &path_str,
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Simulated 4 match(es)"));

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 4);
    // every record is a JSON object with the derivation pair
    for line in &lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("seed").is_some());
        assert!(v.get("moves").is_some());
        assert!(v.get("match_id").is_some());
    }
}

#[test]
fn replay_verifies_a_simulated_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let (code, _, _) = run_cli(&[
        "pokerduel", "sim", "--matches", "3", "--seed", "42", "--output", &path_str,
    ]);
    assert_eq!(code, 0);

    let (code, stdout, stderr) = run_cli(&["pokerduel", "replay", "--input", &path_str]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Replayed 3 match(es), 0 failure(s)"));
    assert!(stdout.contains("[ok]"));
}

#[test]
fn replay_flags_a_tampered_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tampered.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let (code, _, _) = run_cli(&[
        "pokerduel", "sim", "--matches", "1", "--seed", "42", "--output", &path_str,
    ]);
    assert_eq!(code, 0);

    // flip the stored winner
    let contents = fs::read_to_string(&path).unwrap();
    let tampered = contents.replace("player 1 wins", "player 2 wins");
    assert_ne!(contents, tampered, "seed 42 should be a player 1 win");
    fs::write(&path, tampered).unwrap();

    let (code, stdout, stderr) = run_cli(&["pokerduel", "replay", "--input", &path_str]);
    assert_eq!(code, 2);
    assert!(stdout.contains("1 failure(s)"));
    assert!(stderr.contains("stored result"));
}

#[test]
fn replay_skips_unparseable_lines_with_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let (code, _, _) = run_cli(&[
        "pokerduel", "sim", "--matches", "1", "--seed", "7", "--output", &path_str,
    ]);
    assert_eq!(code, 0);

    let mut contents = fs::read_to_string(&path).unwrap();
    contents.push_str("this is not json\n");
    fs::write(&path, contents).unwrap();

    let (code, stdout, stderr) = run_cli(&["pokerduel", "replay", "--input", &path_str]);
    assert_eq!(code, 0, "a skipped line is a warning, not a failure");
    assert!(stdout.contains("Replayed 1 match(es), 0 failure(s)"));
    assert!(stderr.contains("WARNING"));
    assert!(stderr.contains("skipped"));
}
