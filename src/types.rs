//src/types.rs

use thiserror::Error;

/// Number of taxonomic levels tracked per OTU (Kingdom through Species).
pub const NUM_RANKS: usize = 7;

/// The seven standard taxonomic ranks, in QIIME2 level order.
/// The discriminant of each variant is its level index (`D_0` .. `D_6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Kingdom = 0,
    Phylum = 1,
    Class = 2,
    Order = 3,
    Family = 4,
    Genus = 5,
    Species = 6,
}

impl Rank {
    /// All ranks in level order; position in this array equals the level index.
    pub const ALL: [Rank; NUM_RANKS] = [
        Rank::Kingdom,
        Rank::Phylum,
        Rank::Class,
        Rank::Order,
        Rank::Family,
        Rank::Genus,
        Rank::Species,
    ];

    /// Maps a QIIME2 level digit (`"0"`..`"6"`) to its rank.
    ///
    /// Well-formed taxonomy strings never carry any other level, so an
    /// `UnknownLevel` error here means corrupt input or a caller bug.
    pub fn from_level(level: &str) -> Result<Rank, RankError> {
        match level {
            "0" => Ok(Rank::Kingdom),
            "1" => Ok(Rank::Phylum),
            "2" => Ok(Rank::Class),
            "3" => Ok(Rank::Order),
            "4" => Ok(Rank::Family),
            "5" => Ok(Rank::Genus),
            "6" => Ok(Rank::Species),
            other => Err(RankError::UnknownLevel(other.to_string())),
        }
    }

    /// Column header used for this rank in the output table.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Kingdom => "Kingdom",
            Rank::Phylum => "Phylum",
            Rank::Class => "Class",
            Rank::Order => "Order",
            Rank::Family => "Family",
            Rank::Genus => "Genus",
            Rank::Species => "Species",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("unknown taxonomic level {0:?}, expected \"0\" through \"6\"")]
    UnknownLevel(String),
}

/// One OTU column name plus the taxonomy assignment parsed out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonRecord {
    /// The original encoded column name, e.g. `D_0__Bacteria.D_1__Firmicutes`.
    pub full_name: String,
    /// 1-based position of this OTU among the selected columns.
    pub otu_number: usize,
    /// Rank names indexed by level; levels never assigned stay empty.
    ranks: [String; NUM_RANKS],
}

impl TaxonRecord {
    pub fn new(full_name: impl Into<String>, otu_number: usize) -> Self {
        TaxonRecord {
            full_name: full_name.into(),
            otu_number,
            ranks: Default::default(),
        }
    }

    /// Identifier used in the output table, e.g. `OTU_12`.
    pub fn otu_label(&self) -> String {
        format!("OTU_{}", self.otu_number)
    }

    pub fn rank(&self, rank: Rank) -> &str {
        &self.ranks[rank.index()]
    }

    pub fn set_rank(&mut self, rank: Rank, name: impl Into<String>) {
        self.ranks[rank.index()] = name.into();
    }
}
