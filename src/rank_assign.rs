//src/rank_assign.rs

use crate::name_split::rank_fragments;
use crate::types::{Rank, RankError, TaxonRecord};

/// Parses each record's full name and writes the taxon names into the
/// matching rank fields, in place. Records whose name runs out of usable
/// segments keep empty strings for the deeper ranks.
///
/// `UnknownLevel` can only come from a level digit outside `0..=6`, which
/// no QIIME2 export produces; it is surfaced rather than skipped because
/// it means the input is not what this crate was handed before.
pub fn assign_ranks(records: &mut [TaxonRecord]) -> Result<(), RankError> {
    for record in records.iter_mut() {
        // The fragments borrow the name while the record is written to.
        let full_name = record.full_name.clone();
        for (level, taxon) in rank_fragments(&full_name) {
            let rank = Rank::from_level(level)?;
            record.set_rank(rank, taxon);
        }
    }
    Ok(())
}
