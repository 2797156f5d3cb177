use super::{filter_items, format_item, is_search_input, visible_window};
use crossterm::event::KeyModifiers;
use crate::ui::PickItem;

fn items() -> Vec<PickItem> {
    vec![
        PickItem::new("Alpha", Some("proj/.vscode/ssh.config".to_string())),
        PickItem::new("bastion", Some("~/.ssh/config".to_string())),
        PickItem::new("db", None),
    ]
}

#[test]
fn empty_query_keeps_every_item_in_order() {
    assert_eq!(filter_items(&items(), ""), vec![0, 1, 2]);
}

#[test]
fn query_matches_label_or_description_ignoring_case() {
    assert_eq!(filter_items(&items(), "ALP"), vec![0]);
    assert_eq!(filter_items(&items(), ".ssh/"), vec![1]);
    assert_eq!(filter_items(&items(), "vscode"), vec![0]);
    assert!(filter_items(&items(), "zzz").is_empty());
}

#[test]
fn window_scrolls_to_keep_selection_visible() {
    assert_eq!(visible_window(0, 3, 10), (0, 3));
    assert_eq!(visible_window(0, 20, 5), (0, 5));
    assert_eq!(visible_window(4, 20, 5), (0, 5));
    assert_eq!(visible_window(5, 20, 5), (1, 6));
    assert_eq!(visible_window(19, 20, 5), (15, 20));
}

#[test]
fn labels_are_padded_to_align_descriptions() {
    let item = PickItem::new("db", Some("~/.ssh/config".to_string()));
    assert_eq!(format_item(&item, 5, ""), "db     ~/.ssh/config");

    let wide = PickItem::new("服务器", Some("x".to_string()));
    assert_eq!(format_item(&wide, 8, ""), "服务器    x");

    let bare = PickItem::new("solo", None);
    assert_eq!(format_item(&bare, 10, ""), "solo");
}

#[test]
fn control_and_alt_chords_do_not_reach_the_query() {
    assert!(is_search_input(KeyModifiers::NONE));
    assert!(is_search_input(KeyModifiers::SHIFT));
    assert!(!is_search_input(KeyModifiers::CONTROL));
    assert!(!is_search_input(KeyModifiers::ALT));
    assert!(!is_search_input(KeyModifiers::CONTROL | KeyModifiers::SHIFT));
}
