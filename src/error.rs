//! Domain errors raised while building the catalog or classifying a record.
//!
//! Catalog problems (duplicate names, bad motif sequences) are detected once,
//! when [`crate::catalog::AdapterCatalog`] is built, and are not recoverable.
//! [`AdapterError::MissingMotifs`] is a caller contract violation reported at
//! the call site of [`crate::adapter::Adapter::get_barcode_name`]. The two
//! score-table errors report misuse of [`crate::catalog::ScoreTable`].

use crate::adapter::Orientation;

/// Convenience alias used by the catalog and adapter modules.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors produced by the adapter data model.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// Two catalog records share the same name.
    #[error("duplicate adapter name in catalog: {name:?}")]
    DuplicateName { name: String },

    /// A motif was declared with an empty sequence.
    #[error("adapter {adapter:?}: motif {label:?} has an empty sequence")]
    EmptySequence { adapter: String, label: String },

    /// A motif sequence contains something other than A, C, G or T.
    #[error(
        "adapter {adapter:?}: motif {label:?} contains non-nucleotide character \
         {base:?} at position {pos}"
    )]
    InvalidBase { adapter: String, label: String, base: char, pos: usize },

    /// The explicit kind tag disagrees with the barcode naming convention.
    #[error(
        "adapter {name:?}: kind {kind} does not match its name \
         (names of barcode records must contain \"barcod\")"
    )]
    KindMismatch { name: String, kind: &'static str },

    /// A barcode label was requested from a record without motifs on one side.
    #[error("adapter {adapter:?} has no {orientation} motifs; cannot derive a barcode name")]
    MissingMotifs { adapter: String, orientation: Orientation },

    /// Both-ends motifs were supplied together with different start/end motifs.
    #[error("adapter {adapter:?}: both-ends motifs conflict with explicit {orientation} motifs")]
    ConflictingMotifs { adapter: String, orientation: Orientation },

    /// A score was written past the end of a [`crate::catalog::ScoreTable`].
    #[error("score index {index} out of range for a table of {len} records")]
    ScoreIndexOutOfRange { index: usize, len: usize },

    /// A score table was installed into a catalog it was not created for.
    #[error("score table was created for a different catalog")]
    ForeignScoreTable,
}

impl AdapterError {
    /// `true` for errors that mean the catalog itself is corrupt.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AdapterError::DuplicateName { .. }
                | AdapterError::EmptySequence { .. }
                | AdapterError::InvalidBase { .. }
                | AdapterError::KindMismatch { .. }
        )
    }
}
