//! Core types for **adapters**, **motifs** and per-read **scores**.
//!
//! An [`Adapter`] is one catalog entry: a unique name, an [`AdapterKind`] tag,
//! and two ordered lists of [`Motif`]s, one for each read orientation. Motif
//! lists are `&'static` slices so the whole catalog can live in the binary as
//! constants (see `crate::data`).
//!
//! # Scores
//! Every adapter carries a [`Scores`] pair that starts at `(0.0, 0.0)`. Only a
//! caller holding `&mut Adapter` can overwrite it, which makes the shared
//! catalog read-only by construction. Concurrent classification uses a
//! private [`crate::catalog::ScoreTable`] per read instead.
use core::fmt;

use crate::error::{AdapterError, Result};

/// Which end of a read a motif is expected at.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// 5' / start of the read.
    Start,
    /// 3' / end of the read.
    End,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Start => "start",
            Orientation::End => "end",
        })
    }
}

/// One adapter fragment: a short label and its nucleotide sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Motif {
    /// Short label (e.g. `"NB01"`, `"BC41_rev"`, `"SQK-NSK007_Y_Top"`).
    pub label: &'static str,
    /// Uppercase A/C/G/T string.
    pub sequence: &'static str,
}

impl Motif {
    pub const fn new(label: &'static str, sequence: &'static str) -> Self {
        Motif { label, sequence }
    }
}

/// Category of a catalog record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AdapterKind {
    /// Library-preparation adapter (ligation, rapid, legacy Y-adapters).
    Kit,
    /// Native barcoding family (NB01..NB12).
    NativeBarcode,
    /// PCR barcoding family (BC01..BC96).
    PcrBarcode,
}

impl AdapterKind {
    /// Stable lowercase name, used in TSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            AdapterKind::Kit => "kit",
            AdapterKind::NativeBarcode => "native_barcode",
            AdapterKind::PcrBarcode => "pcr_barcode",
        }
    }

    pub fn is_barcode(self) -> bool {
        !matches!(self, AdapterKind::Kit)
    }

    /// Kind implied by the naming convention: any name containing `"barcod"`
    /// (case-sensitive) is a barcode; `"Native"` selects the native family.
    pub fn infer(name: &str) -> Self {
        if !name.contains("barcod") {
            AdapterKind::Kit
        } else if name.contains("Native") {
            AdapterKind::NativeBarcode
        } else {
            AdapterKind::PcrBarcode
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best match scores of one adapter against one read.
///
/// Values are percent identities (`0.0..=100.0`) from the detection pass; a
/// side with no motifs stays at `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scores {
    pub best_start_score: f64,
    pub best_end_score: f64,
}

impl Scores {
    pub const ZERO: Scores = Scores { best_start_score: 0.0, best_end_score: 0.0 };

    pub fn new(best_start_score: f64, best_end_score: f64) -> Self {
        Scores { best_start_score, best_end_score }
    }

    /// Strength of the dominant orientation.
    pub fn best_start_or_end_score(&self) -> f64 {
        self.best_start_score.max(self.best_end_score)
    }
}

/// A catalog entry. Build one with [`Adapter::builder`].
#[derive(Clone, Debug)]
pub struct Adapter {
    /// Unique human-readable name (e.g. `"Native barcoding 3"`).
    pub name: &'static str,
    /// Explicit category; see [`AdapterKind::infer`] for the default.
    pub kind: AdapterKind,
    /// Fragments expected at the start of a read (may be empty).
    pub start_motifs: &'static [Motif],
    /// Fragments expected at the end of a read (may be empty).
    pub end_motifs: &'static [Motif],
    scores: Scores,
}

impl Adapter {
    pub fn builder(name: &'static str) -> AdapterBuilder {
        AdapterBuilder { name, kind: None, start: None, end: None, both_ends: None }
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Install the result of the latest detection pass. This replaces the
    /// previous pair; it is not a running maximum.
    pub fn set_scores(&mut self, scores: Scores) {
        self.scores = scores;
    }

    pub fn reset_scores(&mut self) {
        self.scores = Scores::ZERO;
    }

    /// `max(best_start_score, best_end_score)` of the installed scores.
    pub fn best_start_or_end_score(&self) -> f64 {
        self.scores.best_start_or_end_score()
    }

    /// Whether reads matching this record belong to a barcode bin.
    ///
    /// Driven by the kind tag, which [`AdapterBuilder::build`] and
    /// [`crate::catalog::AdapterCatalog::new`] both check against the
    /// `"barcod"` naming convention.
    pub fn is_barcode(&self) -> bool {
        self.kind.is_barcode()
    }

    /// Concise, filename-safe label for output routing.
    ///
    /// Picks the shortest of the record name, the first start label and the
    /// first end label (the earliest one wins a tie, in that order), then
    /// replaces spaces with underscores.
    ///
    /// # Errors
    /// [`AdapterError::MissingMotifs`] if either motif list is empty.
    pub fn get_barcode_name(&self) -> Result<String> {
        let start = self.first_motif(Orientation::Start)?;
        let end = self.first_motif(Orientation::End)?;
        let candidates = [self.name, start.label, end.label];
        let mut best = candidates[0];
        for c in &candidates[1..] {
            if c.chars().count() < best.chars().count() {
                best = *c;
            }
        }
        Ok(best.replace(' ', "_"))
    }

    pub fn motifs_for(&self, orientation: Orientation) -> &'static [Motif] {
        match orientation {
            Orientation::Start => self.start_motifs,
            Orientation::End => self.end_motifs,
        }
    }

    /// All motifs, start side first.
    pub fn motifs(&self) -> impl Iterator<Item = (Orientation, &'static Motif)> + '_ {
        let start = self.start_motifs.iter().map(|m| (Orientation::Start, m));
        start.chain(self.end_motifs.iter().map(|m| (Orientation::End, m)))
    }

    /// `true` if both orientations share one motif list (both-ends adapter).
    pub fn is_both_ends(&self) -> bool {
        !self.start_motifs.is_empty() && core::ptr::eq(self.start_motifs, self.end_motifs)
    }

    fn first_motif(&self, orientation: Orientation) -> Result<&'static Motif> {
        self.motifs_for(orientation).first().ok_or_else(|| AdapterError::MissingMotifs {
            adapter: self.name.to_string(),
            orientation,
        })
    }
}

/// Builder mirroring the `(name, start, end, both_ends)` construction contract.
#[derive(Clone, Debug)]
pub struct AdapterBuilder {
    name: &'static str,
    kind: Option<AdapterKind>,
    start: Option<&'static [Motif]>,
    end: Option<&'static [Motif]>,
    both_ends: Option<&'static [Motif]>,
}

impl AdapterBuilder {
    pub fn kind(mut self, kind: AdapterKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn start(mut self, motifs: &'static [Motif]) -> Self {
        self.start = Some(motifs);
        self
    }

    pub fn end(mut self, motifs: &'static [Motif]) -> Self {
        self.end = Some(motifs);
        self
    }

    /// Same motifs at both read ends. An empty slice is ignored.
    pub fn both_ends(mut self, motifs: &'static [Motif]) -> Self {
        self.both_ends = Some(motifs);
        self
    }

    /// # Errors
    /// - [`AdapterError::ConflictingMotifs`] if both-ends motifs were given
    ///   along with a different start or end list.
    /// - [`AdapterError::KindMismatch`] if an explicit kind disagrees with the
    ///   `"barcod"` naming convention.
    pub fn build(self) -> Result<Adapter> {
        let (start_motifs, end_motifs) = match self.both_ends.filter(|b| !b.is_empty()) {
            Some(both) => {
                let explicit = [(Orientation::Start, self.start), (Orientation::End, self.end)];
                for (orientation, motifs) in explicit {
                    if motifs.is_some_and(|m| m != both) {
                        let adapter = self.name.to_string();
                        return Err(AdapterError::ConflictingMotifs { adapter, orientation });
                    }
                }
                (both, both)
            }
            None => (self.start.unwrap_or(&[]), self.end.unwrap_or(&[])),
        };
        let kind = self.kind.unwrap_or_else(|| AdapterKind::infer(self.name));
        if kind.is_barcode() != self.name.contains("barcod") {
            let name = self.name.to_string();
            return Err(AdapterError::KindMismatch { name, kind: kind.as_str() });
        }
        Ok(Adapter { name: self.name, kind, start_motifs, end_motifs, scores: Scores::ZERO })
    }
}

/// Literal definition of a catalog record, as stored in `crate::data`.
#[derive(Clone, Copy, Debug)]
pub struct AdapterDef {
    pub name: &'static str,
    pub kind: AdapterKind,
    pub start: &'static [Motif],
    pub end: &'static [Motif],
}

impl AdapterDef {
    pub const fn new(
        name: &'static str,
        kind: AdapterKind,
        start: &'static [Motif],
        end: &'static [Motif],
    ) -> Self {
        AdapterDef { name, kind, start, end }
    }

    pub fn build(&self) -> Result<Adapter> {
        Adapter::builder(self.name).kind(self.kind).start(self.start).end(self.end).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NB01_REV: &[Motif] = &[Motif::new("NB01_rev", "AGGTTAACACAAAGACACCGACAACTTTCTTCAGCACC")];
    const NB01: &[Motif] = &[Motif::new("NB01", "GGTGCTGAAGAAAGTTGTCGGTGTCTTTGTGTTAACCT")];
    const L: &[Motif] = &[Motif::new("L", "ACGT")];
    const OTHER: &[Motif] = &[Motif::new("O", "TTTT")];

    fn native_1() -> Adapter {
        Adapter::builder("Native barcoding 1").start(NB01_REV).end(NB01).build().unwrap()
    }

    #[test]
    fn scores_start_at_zero() {
        let a = native_1();
        assert_eq!(a.scores(), Scores::ZERO);
        assert_eq!(a.best_start_or_end_score(), 0.0);
    }

    #[test]
    fn best_start_or_end_score_is_the_max() {
        let mut a = native_1();
        for (s, e) in [(12.5, 80.0), (99.0, 3.0), (40.0, 40.0)] {
            a.set_scores(Scores::new(s, e));
            assert_eq!(a.best_start_or_end_score(), f64::max(s, e));
        }
        a.reset_scores();
        assert_eq!(a.best_start_or_end_score(), 0.0);
    }

    #[test]
    fn set_scores_overwrites_rather_than_accumulates() {
        let mut a = native_1();
        a.set_scores(Scores::new(95.0, 0.0));
        a.set_scores(Scores::new(10.0, 20.0));
        assert_eq!(a.best_start_or_end_score(), 20.0);
    }

    #[test]
    fn barcode_name_picks_shortest_candidate() {
        assert_eq!(native_1().get_barcode_name().unwrap(), "NB01");
    }

    #[test]
    fn barcode_name_replaces_spaces() {
        const LONG_START: &[Motif] = &[Motif::new("a_very_long_start_label", "ACGT")];
        const LONG_END: &[Motif] = &[Motif::new("an_even_longer_end_label", "ACGT")];
        let a = Adapter::builder("Native barcoding 1")
            .start(LONG_START)
            .end(LONG_END)
            .build()
            .unwrap();
        assert_eq!(a.get_barcode_name().unwrap(), "Native_barcoding_1");
    }

    #[test]
    fn barcode_name_tie_goes_to_earliest_candidate() {
        const S: &[Motif] = &[Motif::new("BC", "ACGT")];
        const E: &[Motif] = &[Motif::new("CB", "ACGT")];
        let a = Adapter::builder("X Y").start(S).end(E).build().unwrap();
        // "X Y" is 3 chars, both labels 2: start label is seen first.
        assert_eq!(a.get_barcode_name().unwrap(), "BC");
        let b = Adapter::builder("AB").start(S).end(E).build().unwrap();
        assert_eq!(b.get_barcode_name().unwrap(), "AB");
    }

    #[test]
    fn barcode_name_requires_both_orientations() {
        let a = Adapter::builder("PCR barcoding 1").start(NB01).build().unwrap();
        let err = a.get_barcode_name().unwrap_err();
        let adapter = "PCR barcoding 1".to_string();
        assert_eq!(err, AdapterError::MissingMotifs { adapter, orientation: Orientation::End });
        let b = Adapter::builder("PCR barcoding 2").end(NB01).build().unwrap();
        assert!(matches!(
            b.get_barcode_name(),
            Err(AdapterError::MissingMotifs { orientation: Orientation::Start, .. })
        ));
    }

    #[test]
    fn is_barcode_follows_naming_convention() {
        for (name, expected) in [
            ("Native barcoding 3", true),
            ("PCR barcode 7", true),
            ("Barcoding kit", false),
            ("SQK-NSK007", false),
            ("Rapid", false),
        ] {
            let a = Adapter::builder(name).start(L).build().unwrap();
            assert_eq!(a.is_barcode(), expected, "{name}");
            assert_eq!(a.is_barcode(), name.contains("barcod"));
        }
    }

    #[test]
    fn explicit_kind_must_agree_with_name() {
        let build = |name, kind| Adapter::builder(name).kind(kind).start(L).build();
        let err = build("PCR barcoding 1", AdapterKind::Kit).unwrap_err();
        assert_eq!(err, AdapterError::KindMismatch { name: "PCR barcoding 1".into(), kind: "kit" });
        assert!(err.is_configuration());
        let err = build("Plain", AdapterKind::PcrBarcode).unwrap_err();
        assert_eq!(err, AdapterError::KindMismatch { name: "Plain".into(), kind: "pcr_barcode" });
        // Either barcode family is fine as long as the name says "barcod".
        assert!(build("PCR barcoding 1", AdapterKind::NativeBarcode).unwrap().is_barcode());
        assert!(!build("Plain", AdapterKind::Kit).unwrap().is_barcode());
    }

    #[test]
    fn inferred_kinds() {
        assert_eq!(AdapterKind::infer("Native barcoding 12"), AdapterKind::NativeBarcode);
        assert_eq!(AdapterKind::infer("PCR barcoding 96"), AdapterKind::PcrBarcode);
        assert_eq!(AdapterKind::infer("SQK-MAP006 Short"), AdapterKind::Kit);
    }

    #[test]
    fn both_ends_shares_one_list() {
        let a = Adapter::builder("Both").both_ends(L).build().unwrap();
        assert_eq!(a.start_motifs, L);
        assert_eq!(a.end_motifs, L);
        assert!(a.is_both_ends());
        assert!(core::ptr::eq(a.start_motifs, a.end_motifs));
        assert_eq!(a.scores(), Scores::ZERO);
    }

    #[test]
    fn both_ends_conflicts_with_distinct_lists() {
        let err = Adapter::builder("Both").both_ends(L).start(OTHER).build().unwrap_err();
        let conflict =
            |orientation| AdapterError::ConflictingMotifs { adapter: "Both".into(), orientation };
        assert_eq!(err, conflict(Orientation::Start));
        let err = Adapter::builder("Both").both_ends(L).end(OTHER).build().unwrap_err();
        assert_eq!(err, conflict(Orientation::End));
        // Repeating the same list is not a conflict.
        assert!(Adapter::builder("Both").both_ends(L).start(L).build().is_ok());
    }

    #[test]
    fn missing_orientations_default_to_empty() {
        let a = Adapter::builder("Rapid").start(L).build().unwrap();
        assert!(a.end_motifs.is_empty());
        assert!(!a.is_both_ends());
        assert_eq!(a.motifs().count(), 1);
        let empty = Adapter::builder("Nothing").both_ends(&[]).build().unwrap();
        assert!(empty.start_motifs.is_empty() && empty.end_motifs.is_empty());
    }
}
