use std::io::Write;
use std::process::{Command, Stdio};

fn run(input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_markov-cli"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start markov-cli");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("markov-cli did not finish")
}

#[test]
fn singleton_chain_is_echoed() {
    let output = run("the cat\nsat on   the mat\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "the cat sat on the mat \n");
}

#[test]
fn empty_input_prints_a_newline() {
    let output = run("");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"\n");
}

#[test]
fn output_is_capped() {
    let output = run(&"again ".repeat(500));
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.split_whitespace().count(), 200);
    assert!(text.ends_with(" \n"));
}

#[test]
fn missing_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_markov-cli"))
        .arg("this/file/does/not/exist.txt")
        .output()
        .expect("failed to start markov-cli");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
