use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rayting_catalog::Collection;
use rayting_client::{AnalyticsRow, ClientError};

use super::{Session, runtime};
use crate::error::CliError;
use crate::spinner::spinner;

/// Render rows as an aligned three-column table.
pub(crate) fn format_table(dimension: &str, rows: &[AnalyticsRow]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|r| r.dimension_value.chars().count())
        .chain(std::iter::once(dimension.chars().count()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!("{:<width$}  {:>6}  {:>9}", dimension, "count", "avg score")];
    for row in rows {
        let avg = row
            .avg_score
            .map(|a| format!("{a:.1}"))
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:<width$}  {:>6}  {:>9}",
            row.dimension_value, row.count, avg
        ));
    }
    lines
}

/// Fetch and print one analytics breakdown.
pub(crate) fn run_analytics(
    session: &Session,
    collection: Collection,
    dimension: &str,
) -> Result<(), CliError> {
    let client = session.client()?;
    let rt = runtime()?;
    let pb = spinner(format!("Loading {} analytics...", collection.singular()), session.quiet);
    let result = rt.block_on(client.analytics(collection, dimension));
    pb.finish_and_clear();

    let rows = match result {
        Ok(rows) => rows,
        Err(ClientError::NotFound) => {
            return Err(CliError::usage(format!(
                "No '{}' analytics for {}",
                dimension,
                collection
            )));
        }
        Err(e) => return Err(e.into()),
    };

    if rows.is_empty() {
        log::info!("{}", "No data.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    let mut lines = format_table(dimension, &rows).into_iter();
    if let Some(header) = lines.next() {
        log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));
    }
    for line in lines {
        log::info!("{}", line);
    }
    let total: u32 = rows.iter().map(|r| r.count).sum();
    log::info!("");
    log::info!("{} {} total", total, collection);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns() {
        let rows = vec![
            AnalyticsRow {
                dimension_value: "2023".into(),
                count: 12,
                avg_score: Some(14.456),
            },
            AnalyticsRow {
                dimension_value: "Pre-2006".into(),
                count: 3,
                avg_score: None,
            },
        ];
        let lines = format_table("year", &rows);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2023          12       14.5");
        assert_eq!(lines[2], "Pre-2006       3          -");
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }
}
