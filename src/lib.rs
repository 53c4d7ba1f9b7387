#![forbid(unsafe_code)]
//! # adapterdb
//!
//! Catalog of Oxford Nanopore **library-preparation adapters** and the
//! **native** / **PCR barcode** families, with per-read match scores and the
//! naming rules used to trim reads and route them into barcode bins.
//!
//! ## Highlights
//! - 🧭 **Deterministic data**: every motif is a `&'static str` constant in
//!   `data`, validated once when the catalog is built.
//! - 🔒 **No shared mutable scores**: detection returns a private
//!   [`catalog::ScoreTable`] per read, so one catalog serves any number of
//!   worker threads.
//! - 🏷️ **Barcode labels**: [`adapter::Adapter::get_barcode_name`] gives the
//!   concise, filename-safe bin name (`"NB01"`, `"BC41"`).
//!
//! ## Examples
//! ```rust
//! let catalog = adapterdb::AdapterCatalog::builtin().unwrap();
//! assert_eq!(catalog.family(adapterdb::AdapterKind::PcrBarcode).count(), 96);
//!
//! let nb01 = catalog.get("Native barcoding 1").unwrap();
//! assert!(nb01.is_barcode());
//! assert_eq!(nb01.get_barcode_name().unwrap(), "NB01");
//!
//! // The Rapid adapter has no end motifs, so it has no barcode name.
//! assert!(catalog.get("Rapid").unwrap().get_barcode_name().is_err());
//! ```
//!
//! ## Version
//! See [`VERSION`].

pub mod adapter;
pub mod catalog;
pub mod classify;
pub mod detect;
pub mod error;
pub mod seqio;
pub mod data {
    pub mod kit_adapters;
    pub mod native_barcodes;
    pub mod pcr_barcodes;
}

pub use adapter::{Adapter, AdapterKind, Motif, Orientation, Scores};
pub use catalog::{AdapterCatalog, ScoreTable};
pub use error::AdapterError;

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Join the labels of a motif list with `,` (empty string when there are none).
pub fn motif_labels(motifs: &[Motif]) -> String {
    motifs.iter().map(|m| m.label).collect::<Vec<_>>().join(",")
}

/// `(name, kind, start_labels, end_labels, barcode_label)`.
pub type CatalogRow = (String, String, String, String, String);

/// Return one [`CatalogRow`] per
/// catalog record, in catalog order.
///
/// `barcode_label` is empty for records that are not barcodes.
///
/// # Errors
/// [`AdapterError::MissingMotifs`] if a barcode record lacks motifs on one side.
///
/// # Examples
/// ```
/// let catalog = adapterdb::AdapterCatalog::builtin().unwrap();
/// let rows = adapterdb::catalog_rows(&catalog).unwrap();
/// let bc96 = rows.iter().find(|r| r.0 == "PCR barcoding 96").unwrap();
/// assert_eq!((bc96.1.as_str(), bc96.4.as_str()), ("pcr_barcode", "BC96"));
/// ```
pub fn catalog_rows(catalog: &AdapterCatalog) -> Result<Vec<CatalogRow>, AdapterError> {
    catalog
        .iter()
        .map(|a| -> Result<_, AdapterError> {
            let label = if a.is_barcode() { a.get_barcode_name()? } else { String::new() };
            Ok((
                a.name.to_string(),
                a.kind.as_str().to_string(),
                motif_labels(a.start_motifs),
                motif_labels(a.end_motifs),
                label,
            ))
        })
        .collect()
}

/// Return `(orientation, label, sequence)` rows for one record, start side
/// first. `None` if the name is unknown.
pub fn adapter_motif_rows(
    catalog: &AdapterCatalog,
    name: &str,
) -> Option<Vec<(String, String, String)>> {
    let a = catalog.get(name)?;
    let rows = a
        .motifs()
        .map(|(o, m)| (o.to_string(), m.label.to_string(), m.sequence.to_string()))
        .collect();
    Some(rows)
}

#[cfg(test)]
mod rows_tests {
    use super::*;

    #[test]
    fn rows_cover_catalog_in_order() {
        let c = AdapterCatalog::builtin().unwrap();
        let rows = catalog_rows(&c).unwrap();
        assert_eq!(rows.len(), c.len());
        assert_eq!(rows[0].0, "SQK-MAP006");
        assert_eq!(rows.last().unwrap().0, "PCR barcoding 96");
        let rapid = rows.iter().find(|r| r.0 == "Rapid").unwrap();
        let (start, end, label) = (rapid.2.as_str(), rapid.3.as_str(), rapid.4.as_str());
        assert_eq!((start, end, label), ("Rapid_adapter", "", ""));
    }

    #[test]
    fn motif_rows_for_native_barcode() {
        let c = AdapterCatalog::builtin().unwrap();
        let rows = adapter_motif_rows(&c, "Native barcoding 3").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].0.as_str(), rows[0].1.as_str()), ("start", "NB03_rev"));
        assert_eq!((rows[1].0.as_str(), rows[1].1.as_str()), ("end", "NB03"));
        assert!(adapter_motif_rows(&c, "nope").is_none());
    }
}
