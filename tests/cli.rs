use std::{
    io::Write,
    process::{Command, Stdio},
};

fn dentaku() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dentaku"))
}

fn run_with_stdin(args: &[&str], input: impl AsRef<[u8]>) -> String {
    let mut child = dentaku().args(args)
                             .stdin(Stdio::piped())
                             .stdout(Stdio::piped())
                             .stderr(Stdio::null())
                             .spawn()
                             .expect("failed to spawn dentaku");

    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(input.as_ref())
         .expect("failed to write stdin");

    let output = child.wait_with_output().expect("dentaku did not exit");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn quiet_repl_prints_one_result_per_line() {
    let stdout = run_with_stdin(&["-q"], "2 + 3 * 4\n\n1 / 0\n(2 + 3) * 4\n");
    assert_eq!(stdout, "14\nerror: Division by zero.\n20\n");
}

#[test]
fn session_state_survives_across_lines() {
    let stdout = run_with_stdin(&["-q"], "a = 1\na = a + 1\na\n");
    assert_eq!(stdout, "1\n2\n1\n");
}

#[test]
fn prompt_is_shown_unless_quiet() {
    let stdout = run_with_stdin(&[], "1 + 1\n");
    assert_eq!(stdout, "> 2\n> \n");
}

#[test]
fn echo_setting_shows_parsed_statement() {
    let stdout = run_with_stdin(&["-q"], ".echo = 1\n1 + 2 * 3\n");
    assert_eq!(stdout, "parsed: .echo = 1\n1\nparsed: (1 + (2 * 3))\n7\n");
}

#[test]
fn undecodable_line_fails_alone() {
    let stdout = run_with_stdin(&["-q"], b"1\n\xff\n2\n");
    assert_eq!(stdout, "1\nerror: invalid utf-8 sequence of 1 bytes from index 0\n2\n");
}

#[test]
fn undecodable_line_in_file_fails_alone() {
    let path = std::env::temp_dir().join(format!("dentaku-utf8-{}.dtk", std::process::id()));
    std::fs::write(&path, b"3 * 3\n\xfe\xff\n4 * 4\n").expect("failed to write script");

    let output = dentaku().arg("-f")
                          .arg(&path)
                          .output()
                          .expect("failed to run dentaku");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "9");
    assert!(lines[1].starts_with("error: "));
    assert_eq!(lines[2], "16");
}

#[test]
fn unparsed_input_produces_warning() {
    let stdout = run_with_stdin(&["-q"], "1 + 2 )\n");
    assert_eq!(stdout, "3\nwarning: unparsed: )\n");
}

#[test]
fn print_base_flag_sets_initial_radix() {
    let stdout = run_with_stdin(&["-q", "-b", "16"], "255\n");
    assert_eq!(stdout, "0xff\n");

    let status = dentaku().args(["-b", "7", "1"])
                          .stdout(Stdio::null())
                          .stderr(Stdio::null())
                          .status()
                          .expect("failed to run dentaku");
    assert!(!status.success());
}

#[test]
fn contents_argument_is_evaluated_as_script() {
    let output = dentaku().arg("x = 2\nx * 21")
                          .output()
                          .expect("failed to run dentaku");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2\n42\n");
}

#[test]
fn file_flag_reads_script_from_path() {
    let path = std::env::temp_dir().join(format!("dentaku-cli-{}.dtk", std::process::id()));
    std::fs::write(&path, "0x10 + 0b1\nfoo(1)\n").expect("failed to write script");

    let output = dentaku().arg("-f")
                          .arg(&path)
                          .output()
                          .expect("failed to run dentaku");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "17\nerror: No such function: 'foo'.\n");
}

#[test]
fn missing_file_exits_with_failure() {
    let output = dentaku().args(["-f", "/nonexistent/dentaku/script.dtk"])
                          .output()
                          .expect("failed to run dentaku");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
