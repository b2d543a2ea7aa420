use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_client::FetchError;

use crate::CliError;
use crate::format::{entry_number, type_labels};
use crate::spinner::with_spinner;

/// Show one entry with its abilities and neighboring ids.
pub(crate) fn run_show(id: u32, quiet: bool) -> Result<(), CliError> {
    let (_settings, catalog) = super::connect()?;

    let rt = super::runtime()?;
    let record = rt
        .block_on(with_spinner(
            quiet,
            format!("Loading {}...", entry_number(id)),
            catalog.get_one(id),
        ))
        .map_err(|e| match e {
            FetchError::NotFound { .. } => {
                CliError::not_found(format!("{} is not in the catalog", entry_number(id)))
            }
            other => other.into(),
        })?;
    let locale = catalog.locale();

    log::info!(
        "{} {} {}",
        entry_number(record.id).if_supports_color(Stdout, |t| t.dimmed()),
        record.localized_name.if_supports_color(Stdout, |t| t.bold()),
        format!("({})", record.canonical_name).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  Category: {}", record.category);
    log::info!(
        "  Types:    {}",
        type_labels(&record.types, locale).if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("  Height:   {:.1} m", record.height_meters);
    log::info!("  Weight:   {:.1} kg", record.mass_kilograms);
    log::info!("  Image:    {}", record.image_url);

    crate::log_blank();
    log::info!("{}", "Abilities".if_supports_color(Stdout, |t| t.bold()));
    for ability in &record.abilities {
        log::info!(
            "  {} {}{}",
            ability.localized_name.if_supports_color(Stdout, |t| t.bold()),
            format!("({})", ability.canonical_name).if_supports_color(Stdout, |t| t.dimmed()),
            if ability.is_hidden {
                format!(" {}", "[hidden]".if_supports_color(Stdout, |t| t.yellow()))
            } else {
                String::new()
            },
        );
        log::info!("    {}", ability.description);
    }

    let neighbors = catalog.neighbors(record.id);
    let prev = neighbors.prev.map(entry_number).unwrap_or_else(|| "-".to_string());
    let next = neighbors.next.map(entry_number).unwrap_or_else(|| "-".to_string());
    crate::log_blank();
    log::info!(
        "{}",
        format!("prev: {}  next: {}", prev, next).if_supports_color(Stdout, |t| t.dimmed()),
    );

    Ok(())
}
