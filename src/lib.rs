// src/lib.rs
pub mod header_filter;
pub mod name_split;
pub mod otu_records;
pub mod rank_assign;
pub mod taxa_table;
pub mod types;

use crate::header_filter::filter_taxa_headers;
use crate::otu_records::make_taxon_records;
use crate::rank_assign::assign_ranks;
use crate::taxa_table::TaxaTable;
use crate::types::RankError;

/// Runs the whole conversion over a set of column headers:
/// 1. Select the QIIME2 taxonomy columns (prefix `D_0_`).
/// 2. Wrap each in a record numbered `OTU_1..OTU_N` in input order.
/// 3. Parse each encoded name and fill in the rank fields.
/// 4. Flatten the records into a `TaxaTable`.
///
/// Headers with no taxonomy columns produce an empty table. The only
/// error path is a level digit outside `0..=6`, which well-formed QIIME2
/// output never contains.
pub fn make_otu_taxa_table<S: AsRef<str>>(headers: &[S]) -> Result<TaxaTable, RankError> {
    let full_names = filter_taxa_headers(headers);
    let mut records = make_taxon_records(full_names);
    assign_ranks(&mut records)?;

    log::info!("built taxonomy key table for {} OTUs", records.len());
    Ok(TaxaTable::from_records(&records))
}
