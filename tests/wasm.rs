//! Browser-only smoke tests (run with `wasm-pack test --headless`).

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn storage_round_trips() {
    let key = "serenia-test-key";
    let window = web_sys::window().unwrap();
    if let Ok(Some(storage)) = window.local_storage() {
        storage.set_item(key, "42.5").unwrap();
        assert_eq!(storage.get_item(key).unwrap().as_deref(), Some("42.5"));
        storage.remove_item(key).unwrap();
    }
}

#[wasm_bindgen_test]
fn theme_attribute_lands_on_document_element() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.document_element().unwrap();
    root.set_attribute("data-theme", "light").unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
}
