//! Plain-text rendering of the page for terminals

use std::fmt::{self, Display, Formatter, Write};

use crate::origin::SERVE_TIP;
use crate::view::{
    ActivityCard, ListRegion, Notice, NoticeKind, Page, Roster, LOADING_TEXT,
    NO_PARTICIPANTS_TEXT, SELECT_PLACEHOLDER,
};

/// Render the whole page: list region, selector options, visible notice and
/// serve tip.
pub fn render_page(page: &Page) -> String {
    PageText(page).to_string()
}

/// One activity card
pub fn render_card(card: &ActivityCard) -> String {
    CardText(card).to_string()
}

struct PageText<'a>(&'a Page);

impl Display for PageText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_page(f, self.0)
    }
}

struct CardText<'a>(&'a ActivityCard);

impl Display for CardText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_card(f, self.0)
    }
}

fn write_page(out: &mut impl Write, page: &Page) -> fmt::Result {
    writeln!(out, "Extracurricular Activities\n")?;

    match &page.list {
        ListRegion::Loading => writeln!(out, "{}", LOADING_TEXT)?,
        ListRegion::Activities(cards) => {
            for card in cards {
                write_card(out, card)?;
                writeln!(out)?;
            }
        }
        ListRegion::Diagnostic(diagnostic) => {
            writeln!(out, "error: {}", diagnostic.message())?;
            if let Some(hint) = diagnostic.hint() {
                writeln!(out, "info: {}", hint)?;
            }
        }
    }

    writeln!(out, "\nSign up for an activity")?;
    writeln!(out, "  {}", SELECT_PLACEHOLDER)?;
    for option in &page.activity_options {
        writeln!(out, "  {}", option)?;
    }

    if let Some(notice) = page.notice.visible() {
        writeln!(out, "\n{}", render_notice(notice))?;
    }

    if page.serve_tip_visible {
        writeln!(out, "\ntip: {}", SERVE_TIP)?;
    }

    Ok(())
}

fn write_card(out: &mut impl Write, card: &ActivityCard) -> fmt::Result {
    writeln!(out, "{}", card.name)?;
    writeln!(out, "  {}", card.description)?;
    writeln!(out, "  Schedule: {}", card.schedule)?;
    writeln!(out, "  Availability: {}", card.availability())?;

    match &card.roster {
        Roster::Empty => writeln!(out, "  {}", NO_PARTICIPANTS_TEXT)?,
        Roster::Members(items) => {
            writeln!(out, "  {}", card.roster.heading())?;
            for item in items {
                writeln!(out, "    [{:>2}] {}", item.initials, item.email)?;
            }
        }
    }

    Ok(())
}

/// Notice line with its success/error marker
pub fn render_notice(notice: &Notice) -> String {
    let marker = match notice.kind {
        NoticeKind::Success => "✓",
        NoticeKind::Error => "✕",
    };
    format!("{} {}", marker, notice.text)
}
