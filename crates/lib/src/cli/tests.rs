use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tempfile::NamedTempFile;

use super::{run, Opts, Output, DEFAULT_INPUT};

fn parse(args: &[&str]) -> anyhow::Result<Opts> {
    Opts::parse_from(args.iter().map(OsString::from))
}

#[test]
fn test_default_input() {
    let opts = parse(&[]).unwrap();
    assert_eq!(opts.input(), Path::new(DEFAULT_INPUT));
    assert!(!opts.help);
    assert!(!opts.verbose);
    assert!(!opts.elapsed);
}

#[test]
fn test_flags() {
    let opts = parse(&["--elapsed", "data.txt", "-v"]).unwrap();
    assert_eq!(opts.input(), Path::new("data.txt"));
    assert!(opts.verbose);
    assert!(opts.elapsed);

    assert!(parse(&["--help"]).unwrap().help);
    assert!(parse(&["-h"]).unwrap().help);
}

#[test]
fn test_separator() {
    let opts = parse(&["--", "-odd-name.txt"]).unwrap();
    assert_eq!(opts.input(), Path::new("-odd-name.txt"));
}

#[test]
fn test_bad_arguments() {
    let error = parse(&["--bench"]).unwrap_err();
    assert_eq!(error.to_string(), "unsupported argument: --bench");

    let error = parse(&["a.txt", "b.txt"]).unwrap_err();
    assert_eq!(error.to_string(), "unexpected argument: b.txt");
}

#[test]
fn test_run() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n")
        .unwrap();

    let opts = Opts::parse_from([file.path().as_os_str().to_owned()]).unwrap();

    let mut o = Output::new(Vec::new());
    run(&opts, &mut o).unwrap();
    assert_eq!(o.into_inner(), b"11\n31\n");
}

#[test]
fn test_run_elapsed() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"1 1\n").unwrap();

    let opts = Opts::parse_from([
        OsString::from("--elapsed"),
        file.path().as_os_str().to_owned(),
    ])
    .unwrap();

    let mut o = Output::new(Vec::new());
    run(&opts, &mut o).unwrap();

    let output = String::from_utf8(o.into_inner()).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(&lines[..2], ["0", "1"]);
    assert!(lines[2].starts_with("elapsed: "));
}

#[test]
fn test_run_failure_writes_nothing() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"1 1\n2\n").unwrap();

    let opts = Opts::parse_from([file.path().as_os_str().to_owned()]).unwrap();

    let mut o = Output::new(Vec::new());
    assert!(run(&opts, &mut o).is_err());
    assert!(o.into_inner().is_empty());
}

#[test]
fn test_elapsed_truncated() {
    let mut o = Output::new(Vec::new());
    o.elapsed(Duration::new(0, 1_234_567)).unwrap();
    assert_eq!(o.into_inner(), b"elapsed: 1.234ms\n");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument() {
    use std::os::unix::ffi::OsStringExt;

    let error = Opts::parse_from([OsString::from_vec(vec![0xff, 0xfe])]).unwrap_err();
    assert_eq!(error.to_string(), "non-utf8 argument");

    let error =
        Opts::parse_from([OsString::from("--"), OsString::from_vec(vec![b'a', 0xff])]).unwrap_err();
    assert_eq!(error.to_string(), "non-utf8 argument");
}
