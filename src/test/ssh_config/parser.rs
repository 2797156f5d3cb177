use super::{parse_hosts, read_hosts};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn test_dir(name: &str) -> io::Result<PathBuf> {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock drift").as_nanos();
    let serial = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("sshpick_parser_{name}_{nanos}_{serial}"));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[test]
fn captures_first_alias_of_each_host_line_in_order() {
    let hosts = parse_hosts("Host a\nHost b c\nHost   d\n");
    assert_eq!(hosts, vec!["a", "b", "d"]);
}

#[test]
fn ignores_indented_lowercase_and_other_keywords() {
    let text = "  Host indented\nhost lower\nHostName example.com\nHostKeyAlias alias\nUser deploy\nHost\tapp\n";
    assert_eq!(parse_hosts(text), vec!["app"]);
}

#[test]
fn keeps_wildcard_aliases_and_handles_crlf() {
    let text = "Host *\r\n  User root\r\nHost web-?\r\nHost db\r\n";
    assert_eq!(parse_hosts(text), vec!["*", "web-?", "db"]);
}

#[test]
fn host_keyword_without_alias_does_not_swallow_next_line() {
    assert_eq!(parse_hosts("Host\nbastion\nHost jump\n"), vec!["jump"]);
}

#[test]
fn missing_file_yields_no_hosts() {
    let dir = test_dir("missing").expect("temp dir");
    let hosts = read_hosts(&dir.join("does-not-exist")).expect("missing file is not an error");
    assert!(hosts.is_empty());
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn reads_hosts_from_existing_file() {
    let dir = test_dir("existing").expect("temp dir");
    let config_path = dir.join("config");
    fs::write(&config_path, "Host alpha\n  HostName 10.0.0.1\n\nHost beta gamma\n").expect("write config");

    let hosts = read_hosts(&config_path).expect("read config");
    assert_eq!(hosts, vec!["alpha", "beta"]);
    let _ = fs::remove_dir_all(dir);
}

#[cfg(unix)]
#[test]
fn unreadable_path_is_reported() {
    let dir = test_dir("unreadable").expect("temp dir");
    // A directory in place of the file fails with something other than NotFound.
    let err = read_hosts(&dir).expect_err("directory is not a config file");
    assert_ne!(err.kind(), io::ErrorKind::NotFound);
    let _ = fs::remove_dir_all(dir);
}
