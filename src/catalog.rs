//! The adapter **catalog**: an ordered, validated list of [`Adapter`]s.
//!
//! The catalog is built once at startup ([`AdapterCatalog::builtin`]) and then
//! only read. Detection results for a read go into a [`ScoreTable`] owned by
//! whoever processes that read, so any number of workers can share one
//! `&AdapterCatalog` without racing on score state. Sequential callers that
//! want the scores written onto the records can use
//! [`AdapterCatalog::install`], which needs `&mut self`.
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use log::info;

use crate::adapter::{Adapter, AdapterDef, AdapterKind, Motif, Scores};
use crate::data::kit_adapters::KIT_ADAPTERS;
use crate::data::native_barcodes::NATIVE_BARCODES;
use crate::data::pcr_barcodes::PCR_BARCODES;
use crate::error::{AdapterError, Result};

static NEXT_CATALOG_ID: AtomicU64 = AtomicU64::new(1);

/// Ordered collection of uniquely named adapters.
///
/// Clones share the id of the original, so a [`ScoreTable`] from one can be
/// installed into the other.
#[derive(Clone, Debug)]
pub struct AdapterCatalog {
    id: u64,
    adapters: Vec<Adapter>,
}

impl AdapterCatalog {
    /// Validate and wrap `adapters`, keeping their order.
    ///
    /// # Errors
    /// A configuration error on the first duplicate name, empty or
    /// non-ACGT motif sequence, or a kind tag that contradicts the `"barcod"`
    /// naming convention.
    pub fn new(adapters: Vec<Adapter>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(adapters.len());
        for a in &adapters {
            if !seen.insert(a.name) {
                return Err(AdapterError::DuplicateName { name: a.name.to_string() });
            }
            // `kind` is a public field, so recheck what the builder enforced.
            if a.kind.is_barcode() != a.name.contains("barcod") {
                let name = a.name.to_string();
                return Err(AdapterError::KindMismatch { name, kind: a.kind.as_str() });
            }
            for (_, m) in a.motifs() {
                validate_motif(a.name, m)?;
            }
        }
        let id = NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed);
        Ok(AdapterCatalog { id, adapters })
    }

    /// Build from literal definitions.
    pub fn from_defs<'a, I>(defs: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a AdapterDef>,
    {
        let adapters = defs.into_iter().map(AdapterDef::build).collect::<Result<Vec<_>>>()?;
        Self::new(adapters)
    }

    /// The shipped catalog: kit adapters, then native barcodes (12), then
    /// PCR barcodes (96).
    pub fn builtin() -> Result<Self> {
        let defs = KIT_ADAPTERS.iter().chain(NATIVE_BARCODES).chain(PCR_BARCODES);
        let catalog = Self::from_defs(defs)?;
        info!(
            "adapter catalog: {} records ({} kit, {} native barcodes, {} PCR barcodes)",
            catalog.len(),
            catalog.family(AdapterKind::Kit).count(),
            catalog.family(AdapterKind::NativeBarcode).count(),
            catalog.family(AdapterKind::PcrBarcode).count(),
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Adapter> {
        self.adapters.iter()
    }

    /// Record at catalog position `index`.
    pub fn adapter(&self, index: usize) -> Option<&Adapter> {
        self.adapters.get(index)
    }

    /// Exact, case-sensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&Adapter> {
        self.adapters.iter().find(|a| a.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.adapters.iter().position(|a| a.name == name)
    }

    /// Records of one kind, in catalog order.
    pub fn family(&self, kind: AdapterKind) -> impl Iterator<Item = &Adapter> + '_ {
        self.adapters.iter().filter(move |a| a.kind == kind)
    }

    pub fn barcodes(&self) -> impl Iterator<Item = &Adapter> + '_ {
        self.adapters.iter().filter(|a| a.is_barcode())
    }

    /// A fresh, zeroed score table sized for this catalog.
    pub fn score_table(&self) -> ScoreTable {
        ScoreTable { catalog: self.id, scores: vec![Scores::ZERO; self.len()] }
    }

    /// Write every pair of `table` onto the matching record.
    ///
    /// # Errors
    /// [`AdapterError::ForeignScoreTable`] if `table` was not created by
    /// [`AdapterCatalog::score_table`] on this catalog (or a clone of it).
    pub fn install(&mut self, table: &ScoreTable) -> Result<()> {
        if table.catalog != self.id || table.len() != self.len() {
            return Err(AdapterError::ForeignScoreTable);
        }
        for (a, s) in self.adapters.iter_mut().zip(table.scores.iter()) {
            a.set_scores(*s);
        }
        Ok(())
    }

    pub fn reset_scores(&mut self) {
        self.adapters.iter_mut().for_each(Adapter::reset_scores);
    }
}

impl<'a> IntoIterator for &'a AdapterCatalog {
    type Item = &'a Adapter;
    type IntoIter = std::slice::Iter<'a, Adapter>;
    fn into_iter(self) -> Self::IntoIter {
        self.adapters.iter()
    }
}

/// Check one motif sequence: non-empty, A/C/G/T only. Length is not capped.
pub fn validate_motif(adapter: &str, motif: &Motif) -> Result<()> {
    let (adapter, label) = (adapter.to_string(), motif.label.to_string());
    if motif.sequence.is_empty() {
        return Err(AdapterError::EmptySequence { adapter, label });
    }
    let mut bases = motif.sequence.chars().enumerate();
    if let Some((pos, base)) = bases.find(|(_, c)| !matches!(c, 'A' | 'C' | 'G' | 'T')) {
        return Err(AdapterError::InvalidBase { adapter, label, base, pos });
    }
    Ok(())
}

/// Per-read score pairs, indexed by catalog position.
///
/// Each worker allocates its own table for the read it is processing; the
/// table is only meaningful for that read. Tables come from
/// [`AdapterCatalog::score_table`] and remember which catalog made them.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreTable {
    catalog: u64,
    scores: Vec<Scores>,
}

impl ScoreTable {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Scores> {
        self.scores.get(index).copied()
    }

    /// # Errors
    /// [`AdapterError::ScoreIndexOutOfRange`] if `index` is not a catalog
    /// position.
    pub fn set(&mut self, index: usize, scores: Scores) -> Result<()> {
        let len = self.scores.len();
        let slot = self.scores.get_mut(index);
        *slot.ok_or(AdapterError::ScoreIndexOutOfRange { index, len })? = scores;
        Ok(())
    }

    /// Slots in catalog order, for filling a whole table in one pass.
    pub(crate) fn slots_mut(&mut self) -> std::slice::IterMut<'_, Scores> {
        self.scores.iter_mut()
    }

    /// Same as [`Adapter::best_start_or_end_score`], for the record at `index`.
    pub fn best_start_or_end_score(&self, index: usize) -> Option<f64> {
        self.get(index).map(|s| s.best_start_or_end_score())
    }

    /// `(catalog index, scores)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Scores)> + '_ {
        self.scores.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bio::alphabets::dna::revcomp;

    const A: &[Motif] = &[Motif::new("A", "ACGT")];
    const EMPTY_SEQ: &[Motif] = &[Motif::new("E", "")];
    const BAD_BASE: &[Motif] = &[Motif::new("B", "ACGN")];
    // 72 nt, longer than one machine word of the bit-parallel matcher.
    const LONG: &[Motif] = &[Motif::new(
        "Long",
        "ACGTTGCAAGCTTCGAGGATCCATGCAATGCGTACGATCGATCGGCTAGCTAGGCATCGATCGTACGTAGCA",
    )];

    fn catalog() -> AdapterCatalog {
        AdapterCatalog::builtin().unwrap()
    }

    #[test]
    fn builtin_family_sizes() {
        let c = catalog();
        assert_eq!(c.family(AdapterKind::NativeBarcode).count(), 12);
        assert_eq!(c.family(AdapterKind::PcrBarcode).count(), 96);
        assert_eq!(c.family(AdapterKind::Kit).count(), KIT_ADAPTERS.len());
        assert_eq!(c.len(), KIT_ADAPTERS.len() + 108);
        assert_eq!(c.barcodes().count(), 108);
    }

    #[test]
    fn builtin_is_barcode_matches_names() {
        for a in &catalog() {
            assert_eq!(a.is_barcode(), a.name.contains("barcod"), "{}", a.name);
        }
    }

    #[test]
    fn builtin_barcode_names_are_short_labels() {
        let c = catalog();
        assert_eq!(c.get("Native barcoding 1").unwrap().get_barcode_name().unwrap(), "NB01");
        assert_eq!(c.get("PCR barcoding 41").unwrap().get_barcode_name().unwrap(), "BC41");
        for a in c.barcodes() {
            let label = a.get_barcode_name().unwrap();
            assert_eq!(label.len(), 4, "{}", a.name);
        }
    }

    #[test]
    fn pcr_barcodes_pair_their_strands() {
        let c = catalog();
        for k in 1..=96 {
            let a = c.get(&format!("PCR barcoding {k}")).unwrap();
            let (start, end) = (a.start_motifs[0], a.end_motifs[0]);
            assert_eq!(start.label, format!("BC{k:02}"));
            assert_eq!(end.label, format!("BC{k:02}_rev"));
            assert_eq!(revcomp(end.sequence.as_bytes()), start.sequence.as_bytes());
        }
    }

    #[test]
    fn native_and_pcr_barcodes_share_sequences_in_swapped_roles() {
        let c = catalog();
        for k in 1..=12 {
            let nb = c.get(&format!("Native barcoding {k}")).unwrap();
            let bc = c.get(&format!("PCR barcoding {k}")).unwrap();
            assert_eq!(nb.end_motifs[0].sequence, bc.start_motifs[0].sequence);
            assert_eq!(nb.start_motifs[0].sequence, bc.end_motifs[0].sequence);
        }
    }

    #[test]
    fn lookup_by_name_and_index() {
        let c = catalog();
        let i = c.index_of("SQK-NSK007").unwrap();
        assert_eq!(c.adapter(i).unwrap().name, "SQK-NSK007");
        assert!(c.get("native barcoding 1").is_none());
        assert!(c.adapter(c.len()).is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let a = Adapter::builder("Dup").start(A).build().unwrap();
        let err = AdapterCatalog::new(vec![a.clone(), a]).unwrap_err();
        assert_eq!(err, AdapterError::DuplicateName { name: "Dup".into() });
        assert!(err.is_configuration());
    }

    #[test]
    fn empty_sequences_are_rejected() {
        let a = Adapter::builder("Empty").end(EMPTY_SEQ).build().unwrap();
        let err = AdapterCatalog::new(vec![a]).unwrap_err();
        assert!(matches!(err, AdapterError::EmptySequence { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn non_nucleotides_are_rejected() {
        let a = Adapter::builder("Bad").start(BAD_BASE).build().unwrap();
        match AdapterCatalog::new(vec![a]).unwrap_err() {
            AdapterError::InvalidBase { base, pos, .. } => assert_eq!((base, pos), ('N', 3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn long_motifs_are_accepted() {
        assert!(LONG[0].sequence.len() > 64);
        let a = Adapter::builder("Long adapter").start(LONG).end(A).build().unwrap();
        let c = AdapterCatalog::new(vec![a]).unwrap();
        assert_eq!(c.get("Long adapter").unwrap().start_motifs[0].sequence.len(), 72);
    }

    #[test]
    fn kind_must_match_name() {
        // The builder refuses the mismatch; a record edited afterwards is caught here.
        let mut a = Adapter::builder("Plain").start(A).build().unwrap();
        a.kind = AdapterKind::PcrBarcode;
        let err = AdapterCatalog::new(vec![a]).unwrap_err();
        assert_eq!(err, AdapterError::KindMismatch { name: "Plain".into(), kind: "pcr_barcode" });
    }

    #[test]
    fn score_tables_are_private_and_installable() {
        let mut c = catalog();
        let i = c.index_of("PCR barcoding 7").unwrap();
        let mut t1 = c.score_table();
        let t2 = c.score_table();
        t1.set(i, Scores::new(91.0, 40.0)).unwrap();
        assert_eq!(t1.best_start_or_end_score(i), Some(91.0));
        assert_eq!(t2.best_start_or_end_score(i), Some(0.0));
        assert_eq!(c.adapter(i).unwrap().best_start_or_end_score(), 0.0);

        c.install(&t1).unwrap();
        assert_eq!(c.adapter(i).unwrap().best_start_or_end_score(), 91.0);
        c.reset_scores();
        assert!(c.iter().all(|a| a.scores() == Scores::ZERO));
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        let c = catalog();
        let mut t = c.score_table();
        let err = t.set(c.len(), Scores::new(50.0, 50.0)).unwrap_err();
        assert_eq!(err, AdapterError::ScoreIndexOutOfRange { index: c.len(), len: c.len() });
        assert!(t.iter().all(|(_, s)| s == Scores::ZERO));
    }

    #[test]
    fn tables_only_install_into_their_own_catalog() {
        let mut c = catalog();
        let other = catalog();
        assert_eq!(other.len(), c.len());
        let mut foreign = other.score_table();
        foreign.set(0, Scores::new(99.0, 0.0)).unwrap();
        assert_eq!(c.install(&foreign), Err(AdapterError::ForeignScoreTable));
        assert_eq!(c.adapter(0).unwrap().scores(), Scores::ZERO);

        // A clone is the same catalog.
        let mut copy = other.clone();
        copy.install(&foreign).unwrap();
        assert_eq!(copy.adapter(0).unwrap().best_start_or_end_score(), 99.0);
    }
}
