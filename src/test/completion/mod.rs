use super::{CompletionKind, completions_for_line, completions_for_request, is_keyword_position, option_entries, parse_option_table};
use std::thread;

#[test]
fn keyword_position_accepts_blank_or_single_partial_word() {
    assert!(is_keyword_position(""));
    assert!(is_keyword_position("    "));
    assert!(is_keyword_position("\tHostN"));
    assert!(is_keyword_position("Port"));

    assert!(!is_keyword_position("Host "));
    assert!(!is_keyword_position("  User de"));
    assert!(!is_keyword_position("# comment"));
}

#[test]
fn eligible_line_gets_every_option_plus_host_snippet() {
    let items = completions_for_line("  Ho").expect("completions");
    let options = option_entries().expect("option table");

    assert_eq!(items.len(), options.len() + 1);
    assert!(items.iter().any(|item| item.label == "HostName" && item.kind == CompletionKind::Option));
    // Not filtered against the typed prefix.
    assert!(items.iter().any(|item| item.label == "User"));

    let snippet = items.last().expect("snippet item");
    assert_eq!(snippet.kind, CompletionKind::Snippet);
    let body = snippet.insert_text.as_deref().expect("snippet body");
    for keyword in ["Host ${1:", "HostName ${2:", "LocalForward ", "User ${6:"] {
        assert!(body.contains(keyword), "snippet should contain {keyword}");
    }
}

#[test]
fn value_position_gets_nothing() {
    assert!(completions_for_line("HostName exa").expect("completions").is_empty());
}

#[test]
fn only_space_trigger_is_honoured() {
    assert!(!completions_for_request("", Some(' ')).expect("space trigger").is_empty());
    assert!(!completions_for_request("", None).expect("manual request").is_empty());
    assert!(completions_for_request("", Some('.')).expect("other trigger").is_empty());
}

#[test]
fn bundled_table_is_loaded_once_and_shared() {
    let addresses: Vec<usize> = (0..4)
        .map(|_| thread::spawn(|| option_entries().expect("option table").as_ptr() as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().expect("loader thread"))
        .collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn option_table_entries_have_documentation() {
    let entries = option_entries().expect("option table");
    assert!(entries.iter().all(|entry| !entry.label.is_empty() && !entry.documentation.is_empty()));
}

#[test]
fn malformed_table_is_rejected() {
    assert!(parse_option_table("[{\"label\": \"Port\"}]").is_err());
    let parsed = parse_option_table("[{\"label\": \"Port\", \"documentation\": \"Remote port.\"}]").expect("valid table");
    assert_eq!(parsed[0].label, "Port");
}

#[test]
fn items_serialize_with_lowercase_kind_and_optional_insert_text() {
    let items = completions_for_line("").expect("completions");
    let json = serde_json::to_value(&items).expect("serialize");
    let first = &json[0];
    assert_eq!(first["kind"], "option");
    assert!(first.get("insert_text").is_none());
    let last = &json[items.len() - 1];
    assert_eq!(last["kind"], "snippet");
    assert!(last["insert_text"].is_string());
}
