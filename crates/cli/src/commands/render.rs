//! `render` command.

use std::io::Write;

use shopfront_widget::dom::layout::PageKind;
use tracing::info;

use super::{CliError, Session};

/// Mount the widget on a `kind` page and print its HTML to stdout.
///
/// # Errors
///
/// Returns `CliError` if stdout cannot be written.
pub fn run(session: Session, kind: PageKind, location: Option<&str>) -> Result<(), CliError> {
    write_page(&session, kind, location, &mut std::io::stdout().lock())
}

/// Mount the widget on a `kind` page and write its HTML to `out`.
///
/// # Errors
///
/// Returns `CliError` if `out` cannot be written.
pub fn write_page(
    session: &Session,
    kind: PageKind,
    location: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let doc = Session::page(kind, location);
    let report = session.widget.mount(&doc);
    info!(page = %kind, ?report, "Page rendered");

    writeln!(out, "{}", doc.to_html(doc.root()))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn session(dir: &tempfile::TempDir) -> Session {
        let catalog = dir.path().join("catalog.json");
        let mut file = std::fs::File::create(&catalog).unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "Ring", "price": "10"}}, {{"id": 2, "title": "Band", "price": "4"}}]"#
        )
        .unwrap();
        Session::open(&catalog, &dir.path().join("state.json")).unwrap()
    }

    #[test]
    fn test_render_catalog_page() {
        let dir = tempfile::tempdir().unwrap();
        let session = session(&dir);
        let mut out = Vec::new();

        write_page(&session, PageKind::Catalog, None, &mut out).unwrap();

        let html = String::from_utf8(out).unwrap();
        assert!(html.contains(">Ring<"));
        assert!(html.contains(">Band<"));
        assert!(html.contains(r#"data-action="addToCart""#));
        assert!(!html.contains(r#"data-role="cart-list""#));
    }

    #[test]
    fn test_render_details_page_uses_location() {
        let dir = tempfile::tempdir().unwrap();
        let session = session(&dir);
        let mut out = Vec::new();

        let location = session.widget.config().details_url(2);
        write_page(&session, PageKind::Details, Some(location.as_str()), &mut out).unwrap();

        let html = String::from_utf8(out).unwrap();
        assert!(html.contains(">Band<"));
        assert!(!html.contains(">Ring<"));
    }
}
