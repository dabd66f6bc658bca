use assistant_core::{update, AppState, Msg, Page};

#[test]
fn registered_paths_resolve_exactly() {
    assert_eq!(Page::resolve("/"), Page::Landing);
    assert_eq!(Page::resolve("/app"), Page::MainApp);
    assert_eq!(Page::resolve("/dashboard"), Page::Dashboard);
    assert_eq!(Page::resolve("/reports"), Page::Reports);
    assert_eq!(Page::resolve("/billing"), Page::Billing);
    assert_eq!(Page::resolve("/profile"), Page::Profile);
}

#[test]
fn unregistered_paths_resolve_to_not_found() {
    assert_eq!(Page::resolve(""), Page::NotFound);
    assert_eq!(Page::resolve("/missing"), Page::NotFound);
    assert_eq!(Page::resolve("/APP"), Page::NotFound);
    // No partial matching: substrings and superstrings of registered
    // paths are still unknown.
    assert_eq!(Page::resolve("/app/"), Page::NotFound);
    assert_eq!(Page::resolve("/app/settings"), Page::NotFound);
    assert_eq!(Page::resolve("app"), Page::NotFound);
    assert_eq!(Page::resolve("/dashboard2"), Page::NotFound);
    assert_eq!(Page::resolve("x/billing"), Page::NotFound);
}

#[test]
fn only_landing_renders_without_chrome() {
    assert!(!Page::Landing.uses_chrome());
    assert!(Page::MainApp.uses_chrome());
    assert!(Page::Dashboard.uses_chrome());
    assert!(Page::Reports.uses_chrome());
    assert!(Page::Billing.uses_chrome());
    assert!(Page::Profile.uses_chrome());
    assert!(Page::NotFound.uses_chrome());
}

#[test]
fn navigate_mounts_resolved_page() {
    let state = AppState::new();
    assert_eq!(state.page(), Page::Landing);

    let (state, effects) = update(state, Msg::Navigate("/dashboard".to_string()));
    assert_eq!(state.page(), Page::Dashboard);
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::Navigate("/nowhere".to_string()));
    assert_eq!(state.page(), Page::NotFound);
}

#[test]
fn navigate_to_current_page_is_noop() {
    let state = AppState::new();
    let (state, _) = update(state, Msg::Navigate("/app".to_string()));
    let before = state.clone();

    let (next, effects) = update(state, Msg::Navigate("/app".to_string()));
    assert_eq!(next, before);
    assert!(effects.is_empty());
}
