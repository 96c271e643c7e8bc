use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rayting_lib::sort::DEFAULT_SORT_FIELD;
use rayting_lib::{Catalogued, FilterKind};

fn kind_name<T>(kind: &FilterKind<T>) -> &'static str {
    match kind {
        FilterKind::Rating => "rating",
        FilterKind::NumericRange(_) => "range",
        FilterKind::Categorical(_) => "tag",
        FilterKind::FreeText(_) => "text",
        FilterKind::ExactYear(_) => "year",
    }
}

/// Print the filter dimensions and sort fields of a collection.
pub(crate) fn run_filters<T: Catalogued>() {
    let config = T::config();

    log::info!(
        "{}",
        format!("Filters for {}", config.collection.plural()).if_supports_color(Stdout, |t| t.bold()),
    );
    for dim in &config.dimensions {
        log::info!(
            "  {} {} {}",
            format!("{:<12}", dim.key).if_supports_color(Stdout, |t| t.cyan()),
            dim.label,
            format!("({})", kind_name(&dim.kind)).if_supports_color(Stdout, |t| t.dimmed()),
        );
        if !dim.options.is_empty() {
            log::info!(
                "  {:<12} {}",
                "",
                dim.options.join(", ").if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    log::info!("");
    log::info!("{}", "Sort fields".if_supports_color(Stdout, |t| t.bold()));
    for field in &config.sort_fields {
        let marker = if field.key == DEFAULT_SORT_FIELD { " (default)" } else { "" };
        log::info!(
            "  {} {}{}",
            format!("{:<12}", field.key).if_supports_color(Stdout, |t| t.cyan()),
            field.label,
            marker.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
