use std::fs;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_blocksizer"))
}

#[test]
fn size_for_known_filesize() {
    let output = bin().arg("4587520").output().expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "131072\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn count_mode_all_tokens() {
    for token in ["count", "--count", "-c"] {
        let output = bin().args([token, "4587520"]).output().expect("run failed");
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "35 blocks of 131072 blocksize\n"
        );
    }
}

#[test]
fn no_args_prints_usage_only() {
    let output = bin().output().expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "USAGE:  blocksizer [[--]count] <FILENAME|FILESIZE>",
            "        blocksizer -c <FILENAME|FILESIZE>",
            "        blocksizer [--]help",
            "        blocksizer -h",
        ]
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn help_prints_usage_then_sections() {
    for token in ["help", "--help", "-h"] {
        let output = bin().arg(token).output().expect("run failed");
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("USAGE:"));
        let synopsis = stdout.find("SYNOPSIS:").expect("missing SYNOPSIS");
        let options = stdout.find("OPTIONS:").expect("missing OPTIONS");
        let examples = stdout.find("EXAMPLES:").expect("missing EXAMPLES");
        assert!(synopsis < options && options < examples);
    }
}

#[test]
fn help_lines_fit_eighty_columns() {
    let output = bin().arg("help").output().expect("run failed");
    for line in String::from_utf8_lossy(&output.stdout).lines() {
        assert!(line.len() <= 80, "overlong line: {line:?}");
    }
}

#[test]
fn file_argument_uses_file_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.bin");
    let file = fs::File::create(&path).unwrap();
    file.set_len(4_587_520).unwrap();
    let output = bin().arg(&path).output().expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "131072\n");
}

#[test]
fn digit_named_file_beats_numeric_parse() {
    // A file literally named "1024" holding 2048 bytes: the file's size wins.
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1024"), vec![0u8; 2048]).unwrap();
    let output = bin()
        .arg("1024")
        .current_dir(dir.path())
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2048\n");
}

#[test]
fn malformed_number_fails_with_stderr_diagnostic() {
    let output = bin().arg("123abc").output().expect("run failed");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("123abc"));
    assert!(output.stdout.is_empty());
}

#[test]
fn overflowing_number_fails() {
    let output = bin()
        .arg("99999999999999999999999")
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("99999999999999999999999"));
}

#[test]
fn out_of_bounds_diagnostic_names_the_byte_count() {
    // 2^20 + 1 is odd, so no candidate divides it.
    let output = bin().arg("1048577").output().expect("run failed");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1048577"));
    assert!(stderr.contains("512"));
    assert!(stderr.contains("2^20"));
}

#[test]
fn zero_filesize_is_invalid_input() {
    let output = bin().arg("0").output().expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid input"));
    assert!(stdout.contains("USAGE:"));
}

#[test]
fn empty_file_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty");
    fs::write(&path, b"").unwrap();
    let output = bin().arg(&path).output().expect("run failed");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("invalid input"));
}

#[test]
fn unrecognized_shape_prints_guidance() {
    let output = bin()
        .args(["count", "1024", "extra"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid input"));
    assert!(stdout.contains("USAGE:"));
}
