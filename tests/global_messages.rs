mod common;

use common::*;
use sonar_store::config::StoreConfig;
use sonar_store::selectors::get_global_messages;
use sonar_store::slices::global_messages::{GlobalMessagesAction, MessageLevel};
use sonar_store::Store;

fn ids(store: &Store) -> Vec<&str> {
    get_global_messages(store.state())
        .iter()
        .map(|m| m.id.as_str())
        .collect()
}

#[test]
fn overflow_drops_oldest_first() {
    let mut store = make_store();
    for i in 1..=7 {
        store.dispatch(message_added(&format!("m{}", i), "msg"));
    }

    assert_eq!(ids(&store), vec!["m3", "m4", "m5", "m6", "m7"]);
}

#[test]
fn capacity_comes_from_config() {
    let config = StoreConfig {
        max_global_messages: 2,
        ..StoreConfig::default()
    };
    let mut store = Store::from_config(&config).unwrap();
    store.dispatch(message_added("a", "one"));
    store.dispatch(message_added("b", "two"));
    store.dispatch(message_added("c", "three"));

    assert_eq!(ids(&store), vec!["b", "c"]);
}

#[test]
fn re_adding_an_id_replaces_in_place() {
    let mut store = make_store();
    store.dispatch(message_added("a", "one"));
    store.dispatch(message_added("b", "two"));
    store.dispatch(GlobalMessagesAction::Added {
        id: "a".into(),
        message: "failed".into(),
        level: MessageLevel::Error,
    });

    let messages = get_global_messages(store.state());
    assert_eq!(ids(&store), vec!["a", "b"]);
    assert_eq!(messages[0].message, "failed");
    assert_eq!(messages[0].level, MessageLevel::Error);
}

#[test]
fn close_all_empties_and_closing_unknown_is_a_no_op() {
    let mut store = make_store();
    store.dispatch(message_added("a", "one"));

    let before = store.snapshot();
    store.dispatch(message_closed("zzz"));
    assert!(store.state().changed_slices(&before).is_empty());

    store.dispatch(GlobalMessagesAction::ClosedAll);
    assert!(ids(&store).is_empty());
}

#[test]
fn minted_ids_are_unique() {
    let mut store = make_store();
    store.dispatch(GlobalMessagesAction::success("Saved"));
    store.dispatch(GlobalMessagesAction::error("Saved"));

    let found = ids(&store);
    assert_eq!(found.len(), 2);
    assert_ne!(found[0], found[1]);
    assert!(found.iter().all(|id| id.starts_with("global-message-")));
}
