//! `state` command.

use std::io::Write;

use shopfront_core::Price;

use super::{CliError, Session};

/// Print the saved state, cart count and cart total to stdout.
///
/// # Errors
///
/// Returns `CliError` if stdout cannot be written.
pub fn run(session: &Session) -> Result<(), CliError> {
    write_state(session, &mut std::io::stdout().lock())
}

/// Write the saved state, cart count and cart total to `out`.
///
/// # Errors
///
/// Returns `CliError` if the state cannot be encoded or `out` written.
pub fn write_state(session: &Session, out: &mut impl Write) -> Result<(), CliError> {
    let widget = &session.widget;
    let state = widget.store().state();
    let total = Price::new(state.cart_total(widget.catalog()), widget.config().currency);

    let json = serde_json::to_string_pretty(state).map_err(std::io::Error::other)?;
    writeln!(out, "{json}")?;
    writeln!(out, "favorites: {}", state.favorites_count())?;
    writeln!(out, "cart count: {}", state.cart_count())?;
    writeln!(out, "cart total: {total}")?;
    Ok(())
}
