//! Download filenames for generated contracts.

use chrono::NaiveDate;

const MISSING_NAME: &str = "sem_nome";

/// `contrato_<type>_<name>_<YYYY-MM-DD>.<extension>`.
///
/// The name segment is lowercased and whitespace runs become a single
/// underscore. The template type is used as given. Path separators in either
/// segment become underscores so the result is always a bare file name.
pub fn contract_filename(
    template_type: &str,
    counter_party_name: Option<&str>,
    date: NaiveDate,
    extension: &str,
) -> String {
    let name = counter_party_name
        .map(slugify_name)
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| MISSING_NAME.to_string());

    format!(
        "contrato_{}_{}_{}.{}",
        strip_separators(template_type),
        strip_separators(&name),
        date.format("%Y-%m-%d"),
        extension
    )
}

fn slugify_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn strip_separators(segment: &str) -> String {
    segment.replace(['/', '\\'], "_")
}
