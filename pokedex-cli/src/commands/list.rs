use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::format::{log_record_row, page_footer};
use crate::spinner::with_spinner;

pub(crate) fn run_list(page: u32, page_size: Option<u32>, quiet: bool) -> Result<(), CliError> {
    let (settings, catalog) = super::connect()?;
    let page_size = page_size.unwrap_or(settings.page_size);

    let rt = super::runtime()?;
    let result = rt.block_on(with_spinner(
        quiet,
        format!("Loading page {}...", page),
        catalog.get_page(page, page_size),
    ))?;

    if result.records.is_empty() {
        log::info!(
            "{}",
            "No entries on this page.".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
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
