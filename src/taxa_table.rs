//src/taxa_table.rs

use std::fmt::Write as FmtWrite;

use crate::types::{Rank, TaxonRecord, NUM_RANKS};

/// The finished OTU-to-taxonomy key table: fixed headers plus one row of
/// strings per record, rows in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxaTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TaxaTable {
    fn column_headers() -> Vec<String> {
        let mut headers = vec!["fullName".to_string(), "OTUnumber".to_string()];
        headers.extend(Rank::ALL.iter().map(|rank| rank.label().to_string()));
        headers
    }

    /// Flattens processed records into rows. Cell values are copied as
    /// they stand; nothing is re-parsed here, and unset ranks come out as
    /// empty strings.
    pub fn from_records(records: &[TaxonRecord]) -> Self {
        let rows = records
            .iter()
            .map(|record| {
                let mut row = Vec::with_capacity(2 + NUM_RANKS);
                row.push(record.full_name.clone());
                row.push(record.otu_label());
                row.extend(Rank::ALL.iter().map(|&rank| record.rank(rank).to_string()));
                row
            })
            .collect();

        TaxaTable {
            headers: Self::column_headers(),
            rows,
        }
    }

    /// Generate tab-separated text on demand, header line first.
    pub fn to_tsv(&self) -> String {
        let mut output = String::new();
        writeln!(output, "{}", self.headers.join("\t")).unwrap();
        for row in &self.rows {
            writeln!(output, "{}", row.join("\t")).unwrap();
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TaxonRecord {
        let mut record = TaxonRecord::new("D_0__Bacteria.D_1__Firmicutes", 1);
        record.set_rank(Rank::Kingdom, "Bacteria");
        record.set_rank(Rank::Phylum, "Firmicutes");
        record
    }

    #[test]
    fn headers_are_fixed_and_ordered() {
        let table = TaxaTable::from_records(&[]);
        assert_eq!(
            table.headers,
            vec![
                "fullName",
                "OTUnumber",
                "Kingdom",
                "Phylum",
                "Class",
                "Order",
                "Family",
                "Genus",
                "Species",
            ]
        );
        assert!(table.rows.is_empty());
    }

    #[test]
    fn one_row_per_record_with_empty_strings_for_unset_ranks() {
        let table = TaxaTable::from_records(&[sample_record()]);
        assert_eq!(table.rows.len(), 1);

        let row = &table.rows[0];
        assert_eq!(row.len(), table.headers.len());
        assert_eq!(row[0], "D_0__Bacteria.D_1__Firmicutes");
        assert_eq!(row[1], "OTU_1");
        assert_eq!(row[2], "Bacteria");
        assert_eq!(row[3], "Firmicutes");
        assert!(row[4..].iter().all(String::is_empty));
    }

    #[test]
    fn tsv_has_header_line_then_rows() {
        let table = TaxaTable::from_records(&[sample_record()]);
        let text = table.to_tsv();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "fullName\tOTUnumber\tKingdom\tPhylum\tClass\tOrder\tFamily\tGenus\tSpecies"
        );
        assert_eq!(
            lines.next().unwrap(),
            "D_0__Bacteria.D_1__Firmicutes\tOTU_1\tBacteria\tFirmicutes\t\t\t\t\t"
        );
        assert!(lines.next().is_none());
    }
}
