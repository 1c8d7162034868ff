//! `click` command.
//!
//! Simulates a shopper clicking an icon inside a button: a detached
//! `<button data-action=... data-args=...><span>` is built and the click is
//! delivered to the inner span, so it goes through the same ancestor search
//! a real page click does.

use std::io::Write;

use shopfront_widget::ClickOutcome;
use shopfront_widget::dom::layout::PageKind;
use shopfront_widget::dom::{MemoryDocument, NodeId, RenderTarget};
use shopfront_widget::markup::{ACTION_ATTR, ARGS_ATTR};

use super::{CliError, Session};

/// Mount, click once, then print the outcome and the re-rendered page.
///
/// # Errors
///
/// Returns `CliError` if stdout cannot be written.
pub fn run(
    mut session: Session,
    action: &str,
    args: Option<&str>,
    kind: PageKind,
    location: Option<&str>,
) -> Result<(), CliError> {
    click(
        &mut session,
        action,
        args,
        kind,
        location,
        &mut std::io::stdout().lock(),
    )
    .map(|_| ())
}

/// Mount, click once, then write the outcome and the re-rendered page.
///
/// # Errors
///
/// Returns `CliError` if `out` cannot be written.
pub fn click(
    session: &mut Session,
    action: &str,
    args: Option<&str>,
    kind: PageKind,
    location: Option<&str>,
    out: &mut impl Write,
) -> Result<ClickOutcome, CliError> {
    let doc = Session::page(kind, location);
    session.widget.mount(&doc);

    let clicked = synthetic_click_target(&doc, action, args);
    let outcome = session.widget.handle_click(&doc, &clicked);

    writeln!(out, "{}", describe(&outcome))?;
    writeln!(out, "{}", doc.to_html(doc.root()))?;
    Ok(outcome)
}

fn synthetic_click_target(doc: &MemoryDocument, action: &str, args: Option<&str>) -> NodeId {
    let holder = doc.create_fragment();
    let button = doc.append_element(holder, "button");
    doc.set_attribute(&button, ACTION_ATTR, action);
    if let Some(args) = args {
        doc.set_attribute(&button, ARGS_ATTR, args);
    }
    doc.append_element(button, "span")
}

fn describe(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Dispatched(action) => {
            format!("dispatched {} {}", action.name(), action.args())
        }
        ClickOutcome::Rejected(e) => format!("rejected: {e}"),
        ClickOutcome::Ignored => "ignored".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_core::ProductId;
    use shopfront_widget::{Action, FileStorage, KeyValueStore, Store};

    use super::*;

    fn session(dir: &tempfile::TempDir) -> Session {
        let catalog = dir.path().join("catalog.json");
        std::fs::write(
            &catalog,
            r#"[{"id": 1, "title": "Ring", "price": "10"}, {"id": 2, "title": "Band", "price": "4"}]"#,
        )
        .unwrap();
        Session::open(&catalog, &dir.path().join("state.json")).unwrap()
    }

    #[test]
    fn test_click_add_to_cart_writes_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        let mut out = Vec::new();

        let outcome = click(&mut session, "addToCart", Some("2"), PageKind::Cart, None, &mut out).unwrap();

        assert!(matches!(
            outcome,
            ClickOutcome::Dispatched(Action::AddToCart(id)) if id == ProductId::new(2)
        ));
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("dispatched addToCart 2\n"));
        assert!(output.contains(">$4.00<"));

        let storage = FileStorage::new(dir.path().join("state.json"));
        let key = &session.widget.config().storage_key;
        let raw = storage.get_item(key).unwrap().unwrap();
        assert_eq!(raw, r#"{"cartItems":[{"id":2,"count":1}],"favorites":[]}"#);
    }

    #[test]
    fn test_consecutive_sessions_share_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let mut first = session(&dir);
        click(&mut first, "addToCart", Some("1"), PageKind::Full, None, &mut out).unwrap();
        let mut second = session(&dir);
        click(&mut second, "incrementCount", Some("1"), PageKind::Full, None, &mut out).unwrap();
        let mut third = session(&dir);
        click(&mut third, "incrementCount", Some(r#"{"id": 1}"#), PageKind::Full, None, &mut out).unwrap();

        let key = third.widget.config().storage_key.clone();
        let store = Store::restore(FileStorage::new(dir.path().join("state.json")), key);
        assert_eq!(store.state().cart_items[0].count, 3);
    }

    #[test]
    fn test_click_unknown_action_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        let mut out = Vec::new();

        let outcome = click(&mut session, "checkout", Some("1"), PageKind::Full, None, &mut out).unwrap();

        assert!(matches!(outcome, ClickOutcome::Rejected(_)));
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("rejected: Unknown action: checkout"));
    }
}
