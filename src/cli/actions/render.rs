//! Terminal rendering of flow results.

use crate::flows::{business::BusinessView, Notice, NoticeKind, Outcome, Route};
use std::io::{self, Write};

pub(super) fn notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    let tag = match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
        NoticeKind::Info => "info",
    };
    writeln!(out, "[{tag}] {notice}")
}

pub(super) fn outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match &outcome.notice {
        Some(n) => notice(out, n),
        None => Ok(()),
    }
}

/// Command that continues the onboarding at `route`.
fn command_for(route: &Route) -> Option<String> {
    match route {
        Route::Register => Some("billbharat register".to_string()),
        Route::Verify { email: Some(email) } => Some(format!("billbharat verify --email {email}")),
        Route::Verify { email: None } => Some("billbharat verify --email <email>".to_string()),
        Route::Login => Some("billbharat login --email <email>".to_string()),
        Route::SelectBusiness => Some("billbharat businesses".to_string()),
        Route::Home => None,
    }
}

pub(super) fn next_step<W: Write>(out: &mut W, route: &Route) -> io::Result<()> {
    match command_for(route) {
        Some(command) => writeln!(out, "next: {route}  ({command})"),
        None => Ok(()),
    }
}

pub(super) fn businesses<W: Write>(out: &mut W, view: BusinessView<'_>) -> io::Result<()> {
    match view {
        BusinessView::Loading => writeln!(out, "Loading..."),
        BusinessView::Empty(message) => writeln!(out, "{message}"),
        BusinessView::Entries(entries) => {
            for (index, business) in entries.iter().enumerate() {
                writeln!(out, "{:>3}. {} ({})", index + 1, business.name, business.id)?;
            }
            Ok(())
        }
    }
}
