//! Adapter detection: score one read against every catalog record.
//!
//! Each motif is compiled once into a bit-parallel Myers matcher
//! (`bio::pattern_matching::myers`): a single 64-bit word for motifs up to
//! 64 nt, the multi-word `myers::long` variant beyond that. For a read,
//! start motifs are searched in the first `end_size` bases and end motifs in
//! the last `end_size` bases.
//! The motif must align end to end while the read side is free, and the best
//! placement is reported as percent identity:
//! `100 * (motif_len - edits) / motif_len`.
//!
//! A [`Detector`] only reads the catalog, so one instance can be shared by
//! all worker threads; every call to [`Detector::score_read`] returns a new
//! [`ScoreTable`] private to that read.
//!
//! # Examples
//! ```
//! use adapterdb::catalog::AdapterCatalog;
//! use adapterdb::detect::{Detector, ScanOptions};
//! let catalog = AdapterCatalog::builtin().unwrap();
//! let detector = Detector::new(&catalog, ScanOptions::default());
//! let read = b"AATGTACTTCGTTCAGTTACGTATTGCTCCCCAAAGGGTTTCCCAAAGGGTTTCCC";
//! let table = detector.score_read(read);
//! let i = catalog.index_of("SQK-NSK007").unwrap();
//! assert_eq!(table.get(i).unwrap().best_start_score, 100.0);
//! ```
use bio::pattern_matching::myers::{long, Myers, MyersBuilder};

use crate::adapter::{Motif, Scores};
use crate::catalog::{AdapterCatalog, ScoreTable};

/// How much of each read end is searched.
#[derive(Clone, Copy, Debug)]
pub struct ScanOptions {
    /// Number of bases at each end of the read searched for motifs.
    pub end_size: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions { end_size: 150 }
    }
}

/// Longest pattern that fits the single-word matcher.
const WORD_BITS: usize = 64;

enum Matcher {
    Word(Myers<u64>),
    Long(long::Myers<u64>),
}

struct CompiledMotif {
    len: usize,
    matcher: Matcher,
}

impl CompiledMotif {
    fn new(motif: &Motif) -> Self {
        let pattern = motif.sequence.as_bytes();
        let matcher = if pattern.len() <= WORD_BITS {
            Matcher::Word(MyersBuilder::new().build_64(pattern.iter().copied()))
        } else {
            Matcher::Long(long::Myers::<u64>::new(pattern.iter().copied()))
        };
        CompiledMotif { len: pattern.len(), matcher }
    }

    /// Smallest edit distance of the whole motif against any substring of `region`.
    fn min_distance(&self, region: &[u8]) -> Option<usize> {
        let text = region.iter().copied();
        // With max_dist == len every end position reports a distance.
        match &self.matcher {
            Matcher::Word(m) => {
                m.find_all_end(text, self.len as u8).map(|(_, d)| usize::from(d)).min()
            }
            Matcher::Long(m) => m.find_all_end(text, self.len).map(|(_, d)| d).min(),
        }
    }

    fn identity(&self, region: &[u8]) -> f64 {
        if region.is_empty() {
            return 0.0;
        }
        match self.min_distance(region) {
            Some(d) => 100.0 * (self.len - d.min(self.len)) as f64 / self.len as f64,
            None => 0.0,
        }
    }
}

fn compile(motifs: &[Motif]) -> Vec<CompiledMotif> {
    motifs.iter().map(CompiledMotif::new).collect()
}

fn best_identity(motifs: &[CompiledMotif], region: &[u8]) -> f64 {
    motifs.iter().map(|m| m.identity(region)).fold(0.0, f64::max)
}

/// Compiled matchers for a whole catalog.
pub struct Detector<'c> {
    catalog: &'c AdapterCatalog,
    compiled: Vec<(Vec<CompiledMotif>, Vec<CompiledMotif>)>,
    opts: ScanOptions,
}

impl<'c> Detector<'c> {
    /// Compile every motif of `catalog`, whatever its length.
    pub fn new(catalog: &'c AdapterCatalog, opts: ScanOptions) -> Self {
        let compiled = catalog
            .iter()
            .map(|a| (compile(a.start_motifs), compile(a.end_motifs)))
            .collect();
        Detector { catalog, compiled, opts }
    }

    pub fn catalog(&self) -> &'c AdapterCatalog {
        self.catalog
    }

    pub fn options(&self) -> ScanOptions {
        self.opts
    }

    /// Score `seq` against every record. Lowercase bases are accepted.
    pub fn score_read(&self, seq: &[u8]) -> ScoreTable {
        let seq = normalize_seq(seq);
        let n = seq.len();
        let head = &seq[..self.opts.end_size.min(n)];
        let tail = &seq[n.saturating_sub(self.opts.end_size)..];
        let mut table = self.catalog.score_table();
        for (slot, (start, end)) in table.slots_mut().zip(&self.compiled) {
            *slot = Scores::new(best_identity(start, head), best_identity(end, tail));
        }
        table
    }
}

/// One-shot convenience around [`Detector`].
pub fn score_read(catalog: &AdapterCatalog, seq: &[u8], opts: ScanOptions) -> ScoreTable {
    Detector::new(catalog, opts).score_read(seq)
}

fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(u8::to_ascii_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Adapter;

    const FILLER: &str = "CCCCAAAGGGTTTCCCAAAGGGTTTCCCAAAGGGTTTCCCAAAGGGTTT";

    // Plain semi-global DP: motif fully aligned, free gaps in the region.
    fn brute_identity(motif: &[u8], region: &[u8]) -> f64 {
        let mut prev: Vec<usize> = (0..=motif.len()).collect();
        let mut best = prev[motif.len()];
        for &r in region {
            let mut curr = vec![0usize; motif.len() + 1];
            for (j, &m) in motif.iter().enumerate() {
                let sub = prev[j] + usize::from(m != r);
                curr[j + 1] = sub.min(prev[j + 1] + 1).min(curr[j] + 1);
            }
            best = best.min(curr[motif.len()]);
            prev = curr;
        }
        100.0 * (motif.len() - best) as f64 / motif.len() as f64
    }

    fn catalog() -> AdapterCatalog {
        AdapterCatalog::builtin().unwrap()
    }

    #[test]
    fn exact_adapters_score_100_on_their_side() {
        let c = catalog();
        let d = Detector::new(&c, ScanOptions::default());
        let (top, bottom) = ("AATGTACTTCGTTCAGTTACGTATTGCT", "GCAATACGTAACTGAACGAAGT");
        let read = format!("{top}{FILLER}{bottom}");
        let t = d.score_read(read.as_bytes());
        let s = t.get(c.index_of("SQK-NSK007").unwrap()).unwrap();
        assert_eq!(s.best_start_score, 100.0);
        assert_eq!(s.best_end_score, 100.0);
    }

    #[test]
    fn mismatches_lower_identity() {
        let c = catalog();
        let d = Detector::new(&c, ScanOptions::default());
        // One substitution in a 28 nt motif.
        let read = format!("{}{}", "AATGTACTTCGTTGAGTTACGTATTGCT", FILLER);
        let t = d.score_read(read.as_bytes());
        let s = t.get(c.index_of("SQK-NSK007").unwrap()).unwrap();
        assert!((s.best_start_score - 100.0 * 27.0 / 28.0).abs() < 1e-9);
    }

    #[test]
    fn end_motifs_are_only_searched_in_the_tail() {
        let c = catalog();
        let d = Detector::new(&c, ScanOptions { end_size: 20 });
        let bc07 = c.get("PCR barcoding 7").unwrap();
        // Barcode start motif sits at the read end: outside the head window.
        let read = format!("{}{}{}", FILLER, FILLER, bc07.start_motifs[0].sequence);
        let s = d.score_read(read.as_bytes()).get(c.index_of("PCR barcoding 7").unwrap()).unwrap();
        assert!(s.best_start_score < 70.0);
    }

    #[test]
    fn matches_brute_force_dp() {
        let c = catalog();
        let d = Detector::new(&c, ScanOptions::default());
        let read = format!("{}GGTGCTGAAGAATGTTGTCGGTGTCTTTGTGTTAACCT{}", FILLER, FILLER);
        let t = d.score_read(read.as_bytes());
        let head = &read.as_bytes()[..150.min(read.len())];
        for (i, a) in c.iter().enumerate().filter(|(_, a)| a.name.starts_with("PCR barcoding 1")) {
            let expected = brute_identity(a.start_motifs[0].sequence.as_bytes(), head);
            assert!((t.get(i).unwrap().best_start_score - expected).abs() < 1e-9, "{}", a.name);
        }
    }

    #[test]
    fn lowercase_reads_and_empty_sides() {
        const ONLY_START: &[Motif] = &[Motif::new("S", "ACGTACGTAC")];
        let a = Adapter::builder("Start only").start(ONLY_START).build().unwrap();
        let c = AdapterCatalog::new(vec![a]).unwrap();
        let t = score_read(&c, b"acgtacgtacTTTTTTTTTT", ScanOptions::default());
        assert_eq!(t.get(0).unwrap(), Scores::new(100.0, 0.0));
        let empty = score_read(&c, b"", ScanOptions::default());
        assert_eq!(empty.get(0).unwrap(), Scores::ZERO);
    }

    #[test]
    fn motifs_longer_than_a_word_are_scored() {
        // 80 nt: two words for the multi-word matcher.
        const LONG: &[Motif] = &[Motif::new(
            "Long",
            "GATCGGAAGAGCACACGTCTGAACTCCAGTCACTTAGGCATCTCGTATGCCGTCTTCTGCTTGAACGTAGCATGCATCGT",
        )];
        let motif = LONG[0].sequence;
        assert_eq!(motif.len(), 80);
        let a = Adapter::builder("Long adapter").start(LONG).end(LONG).build().unwrap();
        let c = AdapterCatalog::new(vec![a]).unwrap();
        let d = Detector::new(&c, ScanOptions::default());

        let exact = format!("{motif}{FILLER}");
        assert_eq!(d.score_read(exact.as_bytes()).get(0).unwrap().best_start_score, 100.0);

        // One substitution near the end of the motif.
        let mut edited = motif.as_bytes().to_vec();
        edited[75] = b'T';
        let read = [&edited[..], FILLER.as_bytes(), FILLER.as_bytes()].concat();
        let s = d.score_read(&read).get(0).unwrap();
        assert!((s.best_start_score - 100.0 * 79.0 / 80.0).abs() < 1e-9);
        let tail = &read[read.len() - 150..];
        assert!((s.best_end_score - brute_identity(motif.as_bytes(), tail)).abs() < 1e-9);
    }
}
