use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_client::{SettingSource, Settings};

use crate::CliError;

/// Show resolved settings and where each value came from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = pokedex_client::settings_path();
    let settings = Settings::load()?;
    let sources = pokedex_client::setting_sources();

    log::info!(
        "{}",
        "Pokedex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let locale = &settings.locale;
    let fields: &[(&str, String, &SettingSource)] = &[
        ("base_url", settings.base_url.clone(), &sources.base_url),
        (
            "max_concurrency",
            settings.max_concurrency.to_string(),
            &sources.max_concurrency,
        ),
        ("page_size", settings.page_size.to_string(), &sources.page_size),
        (
            "search_page_size",
            settings.search_page_size.to_string(),
            &sources.search_page_size,
        ),
        (
            "search_scope",
            settings.search_scope.to_string(),
            &sources.search_scope,
        ),
        (
            "max_entry_id",
            settings.max_entry_id.to_string(),
            &sources.max_entry_id,
        ),
        (
            "fallback_image",
            settings.fallback_image.clone(),
            &sources.fallback_image,
        ),
        (
            "name_preference",
            locale.name_preference.join(", "),
            &sources.locale,
        ),
        (
            "text_language",
            format!("{} (fallback {})", locale.text_language, locale.fallback_language),
            &sources.locale,
        ),
    ];

    for (name, value, source) in fields {
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            value,
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match pokedex_client::settings_path() {
        Some(p) => {
            log::info!("{}", p.display());
            Ok(())
        }
        None => Err(CliError::Config(
            "could not determine config directory".to_string(),
        )),
    }
}
