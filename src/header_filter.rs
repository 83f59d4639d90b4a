//src/header_filter.rs

/// Column-name prefix that marks a QIIME2 taxonomy column.
pub const TAXA_PREFIX: &str = "D_0_";

/// Selects the column names that carry an encoded taxonomy string,
/// preserving input order. Non-taxonomy columns (sample ids, metadata)
/// are simply left out; an input with no matches yields an empty list.
pub fn filter_taxa_headers<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    let selected: Vec<String> = headers
        .iter()
        .map(|h| h.as_ref())
        .filter(|h| h.starts_with(TAXA_PREFIX))
        .map(str::to_string)
        .collect();

    log::debug!(
        "selected {} taxonomy columns out of {} headers",
        selected.len(),
        headers.len()
    );
    selected
}
