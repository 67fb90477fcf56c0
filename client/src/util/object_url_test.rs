#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;

use super::*;

thread_local! {
    static RELEASED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

pub(super) fn record_release(url: &str) {
    RELEASED.with(|released| released.borrow_mut().push(url.to_owned()));
}

pub(crate) fn released_count(url: &str) -> usize {
    RELEASED.with(|released| released.borrow().iter().filter(|u| *u == url).count())
}

#[test]
fn dropping_last_handle_releases_once() {
    let url = ObjectUrl::from_raw("blob:test/one");
    let copy = url.clone();
    drop(url);
    assert_eq!(released_count("blob:test/one"), 0);
    drop(copy);
    assert_eq!(released_count("blob:test/one"), 1);
}

#[test]
fn as_str_returns_wrapped_url() {
    let url = ObjectUrl::from_raw("blob:test/two");
    assert_eq!(url.as_str(), "blob:test/two");
}
