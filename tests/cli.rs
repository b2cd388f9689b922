mod helpers;

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use helpers::sjis;

fn csv2tsv(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_csv2tsv"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn pipe_csv_to_tsv() {
    let out = csv2tsv(&[], b"name,age\nAlice,30\nBob,25\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"name\tage\nAlice\t30\nBob\t25\n");
}

#[test]
fn pipe_tsv_to_csv() {
    let out = csv2tsv(&["-r"], b"a\tb\tc\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"a,b,c\n");
}

#[test]
fn pipe_shift_jis() {
    let out = csv2tsv(&["-s"], &sjis("名前,年齢\n山田,30\n"));
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "名前\t年齢\n山田\t30\n");
}

#[test]
fn pipe_keeps_bare_quotes_inside_quoted_fields() {
    let out = csv2tsv(&[], b"\"a \"quoted\" word\",x\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"a \"quoted\" word\tx\n");
}

#[test]
fn pipe_ignores_file_flag() {
    let out = csv2tsv(&["-f", "/nonexistent/input.csv"], b"x,y\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"x\ty\n");
}

#[test]
fn empty_pipe() {
    let out = csv2tsv(&[], b"");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn malformed_input_exits_nonzero() {
    let out = csv2tsv(&[], b"a,b\n\"c,d\ne,f\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stdout, b"a\tb\n");
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("failed to parse record 2"), "{stderr}");
}

#[test]
fn version() {
    let out = csv2tsv(&["-v"], b"");
    assert!(out.status.success());
    assert_eq!(out.stdout, format!("Version: {}\n", env!("CARGO_PKG_VERSION")).as_bytes());
}

#[test]
fn help_wins_over_version() {
    let out = csv2tsv(&["-h", "-v"], b"");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Usage 1 [file input]"), "{stdout}");
    assert!(!stdout.contains("Version:"), "{stdout}");
}

#[test]
fn help() {
    let out = csv2tsv(&["-h"], b"");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Usage 3 [reverse, TSV to CSV]"), "{stdout}");
}
