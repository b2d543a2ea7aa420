use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::format::{log_record_row, page_footer};
use crate::spinner::with_spinner;

pub(crate) fn run_search(query: &str, page: u32, quiet: bool) -> Result<(), CliError> {
    let (settings, catalog) = super::connect()?;

    let rt = super::runtime()?;
    let result = rt.block_on(with_spinner(
        quiet,
        format!("Searching the first {} entries...", settings.search_scope),
        catalog.search(query, page, settings.search_page_size, settings.search_scope),
    ))?;

    log::info!(
        "{} {}",
        format!("Search \"{}\":", result.query).if_supports_color(Stdout, |t| t.bold()),
        match result.total_matches {
            1 => "1 match".to_string(),
            n => format!("{} matches", n),
        },
    );

    if result.total_matches == 0 {
        return Ok(());
    }

    crate::log_blank();
    for record in &result.records {
        log_record_row(record, catalog.locale());
    }
    crate::log_blank();
    log::info!(
        "{}",
        page_footer(&result.page_info).if_supports_color(Stdout, |t| t.dimmed()),
    );

    Ok(())
}
