//! Plain-text pieces shared by the listing commands.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_core::{DisplayRecord, LocaleTable, PageInfo};

/// National number as shown in listings, e.g. `No. 025`.
pub(crate) fn entry_number(id: u32) -> String {
    format!("No. {:03}", id)
}

/// Localized type labels joined with `/`.
pub(crate) fn type_labels(types: &[String], locale: &LocaleTable) -> String {
    types
        .iter()
        .map(|t| locale.type_label(t))
        .collect::<Vec<_>>()
        .join("/")
}

pub(crate) fn page_footer(info: &PageInfo) -> String {
    let mut footer = format!("Page {} / {}", info.current_page, info.total_pages);
    if info.has_prev {
        footer.push_str(&format!("  (prev: --page {})", info.current_page - 1));
    }
    if info.has_next {
        footer.push_str(&format!("  (next: --page {})", info.current_page + 1));
    }
    footer
}

/// One listing row: `No. 001 フシギダネ [くさ/どく]`.
pub(crate) fn log_record_row(record: &DisplayRecord, locale: &LocaleTable) {
    log::info!(
        "  {} {} {}",
        entry_number(record.id).if_supports_color(Stdout, |t| t.dimmed()),
        record.localized_name.if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", type_labels(&record.types, locale))
            .if_supports_color(Stdout, |t| t.cyan()),
    );
}
