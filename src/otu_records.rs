//src/otu_records.rs

use crate::types::TaxonRecord;

/// Wraps each selected column name in a `TaxonRecord`, numbering the OTUs
/// `1..=N` in input order. Rank fields are left for the assigner to fill.
pub fn make_taxon_records(full_names: Vec<String>) -> Vec<TaxonRecord> {
    full_names
        .into_iter()
        .enumerate()
        .map(|(i, name)| TaxonRecord::new(name, i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_records_one_based_in_input_order() {
        let names = vec![
            "D_0__Bacteria".to_string(),
            "D_0__Archaea".to_string(),
            "D_0__Eukaryota".to_string(),
        ];
        let records = make_taxon_records(names.clone());

        assert_eq!(records.len(), names.len());
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.otu_number, i + 1);
            assert_eq!(record.full_name, names[i]);
        }
    }

    #[test]
    fn empty_input_makes_no_records() {
        assert!(make_taxon_records(Vec::new()).is_empty());
    }
}
