//src/name_split.rs

/// Splits an encoded name on its `D_` segment markers, trimming the `.`
/// that joins consecutive segments and dropping empty pieces.
/// `"D_0__Bacteria.D_1__Firmicutes"` yields `["0__Bacteria", "1__Firmicutes"]`.
pub fn split_full_name(full_name: &str) -> Vec<&str> {
    full_name
        .split("D_")
        .map(|piece| piece.trim_matches('.'))
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Splits one segment into its level digit and taxon name.
///
/// Parts without a single letter or digit (leftover underscores, stray
/// dots) are discarded. A segment that does not come out to exactly two
/// parts carries no assignment; `None` marks the end of the
/// classification depth for that OTU.
pub fn split_level_taxon(segment: &str) -> Option<(&str, &str)> {
    let mut parts = segment
        .split("__")
        .map(|part| part.trim_matches('.'))
        .filter(|part| part.chars().any(|c| c.is_ascii_alphanumeric()));

    match (parts.next(), parts.next(), parts.next()) {
        (Some(level), Some(taxon), None) => Some((level, taxon)),
        _ => None,
    }
}

/// Lazily walks the `(level, taxon)` pairs of an encoded name, stopping
/// at the first segment without a usable assignment. Segments after the
/// stop are never inspected.
pub fn rank_fragments(full_name: &str) -> impl Iterator<Item = (&str, &str)> {
    split_full_name(full_name)
        .into_iter()
        .map_while(split_level_taxon)
}
