//! Read disposition from per-read scores: trim decision and barcode bin.
//!
//! The rules follow the usual nanopore trimming thresholds:
//! - an end is trimmed when any adapter scores at least `adapter_threshold`
//!   on that side;
//! - a read is binned to the best-scoring barcode record only when that
//!   score reaches `barcode_threshold` **and** beats the runner-up barcode
//!   by at least `barcode_diff`; otherwise it stays unbinned.
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use log::info;
use rayon::prelude::*;

use crate::adapter::Scores;
use crate::catalog::{AdapterCatalog, ScoreTable};
use crate::detect::{Detector, ScanOptions};
use crate::error::AdapterError;
use crate::seqio::{self, NARead};

/// Label written for reads without a barcode call.
pub const NO_BARCODE: &str = "none";

/// Reads handed to the thread pool at a time.
pub const CHUNK: usize = 2000;

#[derive(Clone, Copy, Debug)]
pub struct ClassifyOptions {
    /// Bases searched at each read end.
    pub end_size: usize,
    /// Minimum identity (%) for an adapter to trigger trimming.
    pub adapter_threshold: f64,
    /// Minimum identity (%) for a barcode call.
    pub barcode_threshold: f64,
    /// Required lead (%) of the best barcode over the second best.
    pub barcode_diff: f64,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        ClassifyOptions {
            end_size: 150,
            adapter_threshold: 90.0,
            barcode_threshold: 75.0,
            barcode_diff: 5.0,
        }
    }
}

impl ClassifyOptions {
    pub fn scan(&self) -> ScanOptions {
        ScanOptions { end_size: self.end_size }
    }
}

/// A confident barcode assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct BarcodeCall {
    /// Catalog record that won.
    pub adapter: &'static str,
    /// Output label from [`crate::adapter::Adapter::get_barcode_name`].
    pub label: String,
    pub score: f64,
}

/// Disposition of one read.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadCall {
    pub id: String,
    pub length: usize,
    /// Record with the highest `best_start_or_end_score`, if any scored above 0.
    pub best_adapter: Option<&'static str>,
    /// Scores of `best_adapter` (zero when there is none).
    pub scores: Scores,
    pub trim_start: bool,
    pub trim_end: bool,
    pub barcode: Option<BarcodeCall>,
}

impl ReadCall {
    pub fn barcode_label(&self) -> &str {
        self.barcode.as_ref().map_or(NO_BARCODE, |b| b.label.as_str())
    }
}

/// Decide the disposition of a read from its private score table.
///
/// # Errors
/// Propagates [`AdapterError::MissingMotifs`] if the winning barcode record
/// lacks motifs on one side.
pub fn call_read(
    catalog: &AdapterCatalog,
    table: &ScoreTable,
    id: &str,
    length: usize,
    opts: &ClassifyOptions,
) -> Result<ReadCall, AdapterError> {
    let mut best: Option<(usize, Scores)> = None;
    let mut max_start = 0.0f64;
    let mut max_end = 0.0f64;
    for (i, s) in table.iter() {
        max_start = max_start.max(s.best_start_score);
        max_end = max_end.max(s.best_end_score);
        let score = s.best_start_or_end_score();
        if score > 0.0 && best.map_or(true, |(_, b)| score > b.best_start_or_end_score()) {
            best = Some((i, s));
        }
    }
    let best_adapter = best.and_then(|(i, _)| catalog.adapter(i)).map(|a| a.name);

    Ok(ReadCall {
        id: id.to_string(),
        length,
        best_adapter,
        scores: best.map_or(Scores::ZERO, |(_, s)| s),
        trim_start: max_start >= opts.adapter_threshold,
        trim_end: max_end >= opts.adapter_threshold,
        barcode: call_barcode(catalog, table, opts)?,
    })
}

fn call_barcode(
    catalog: &AdapterCatalog,
    table: &ScoreTable,
    opts: &ClassifyOptions,
) -> Result<Option<BarcodeCall>, AdapterError> {
    let mut first: Option<(usize, f64)> = None;
    let mut second = 0.0f64;
    for (i, a) in catalog.iter().enumerate() {
        if !a.is_barcode() {
            continue;
        }
        let score = table.best_start_or_end_score(i).unwrap_or(0.0);
        match first {
            Some((_, top)) if score <= top => second = second.max(score),
            Some((_, top)) => {
                second = top;
                first = Some((i, score));
            }
            None => first = Some((i, score)),
        }
    }
    let Some((i, score)) = first else { return Ok(None) };
    if score < opts.barcode_threshold || score - second < opts.barcode_diff {
        return Ok(None);
    }
    match catalog.adapter(i) {
        Some(a) => Ok(Some(BarcodeCall { adapter: a.name, label: a.get_barcode_name()?, score })),
        None => Ok(None),
    }
}

/// Score and call a chunk of reads on the current Rayon pool.
pub fn classify_reads(
    detector: &Detector<'_>,
    reads: &[NARead],
    opts: &ClassifyOptions,
) -> Result<Vec<ReadCall>> {
    let calls = reads
        .par_iter()
        .map(|r| {
            let table = detector.score_read(&r.seq);
            call_read(detector.catalog(), &table, &r.id, r.seq.len(), opts)
        })
        .collect::<Result<Vec<_>, AdapterError>>()?;
    Ok(calls)
}

/// Totals reported after a classification run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub reads: usize,
    pub trimmed_start: usize,
    pub trimmed_end: usize,
    /// Reads per barcode label; unbinned reads are counted under [`NO_BARCODE`].
    pub bins: BTreeMap<String, usize>,
}

impl Summary {
    fn add(&mut self, call: &ReadCall) {
        self.reads += 1;
        self.trimmed_start += usize::from(call.trim_start);
        self.trimmed_end += usize::from(call.trim_end);
        *self.bins.entry(call.barcode_label().to_string()).or_default() += 1;
    }
}

pub const TSV_HEADER: [&str; 9] = [
    "read_id",
    "length",
    "best_adapter",
    "start_score",
    "end_score",
    "trim_start",
    "trim_end",
    "barcode",
    "barcode_score",
];

/// Append `calls` as tab-separated rows.
pub fn write_calls<W: Write>(w: &mut csv::Writer<W>, calls: &[ReadCall]) -> Result<()> {
    for c in calls {
        w.write_record([
            c.id.clone(),
            c.length.to_string(),
            c.best_adapter.unwrap_or(NO_BARCODE).to_string(),
            format!("{:.1}", c.scores.best_start_score),
            format!("{:.1}", c.scores.best_end_score),
            c.trim_start.to_string(),
            c.trim_end.to_string(),
            c.barcode_label().to_string(),
            format!("{:.1}", c.barcode.as_ref().map_or(0.0, |b| b.score)),
        ])?;
    }
    Ok(())
}

pub fn tsv_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().delimiter(b'\t').from_writer(out)
}

/// Classify every read of `files`, streaming TSV rows to `out`.
pub fn run<W: Write>(
    catalog: &AdapterCatalog,
    files: Vec<PathBuf>,
    opts: &ClassifyOptions,
    out: W,
) -> Result<Summary> {
    let (ok, bad) = seqio::split_supported_files(files);
    if !bad.is_empty() {
        let mut msg = String::from("Unsupported file type(s):\n");
        for p in &bad {
            msg.push_str(&format!("  - {}\n", p.display()));
        }
        msg.push_str("Allowed: FASTQ (.fastq/.fq) and FASTA (.fasta/.fa/.fna), ");
        msg.push_str("optionally gzipped.");
        anyhow::bail!(msg);
    }

    let detector = Detector::new(catalog, opts.scan());
    let mut wtr = tsv_writer(out);
    wtr.write_record(TSV_HEADER)?;
    let mut summary = Summary::default();
    for path in ok {
        let n = seqio::for_each_chunk(&path, CHUNK, |chunk| {
            let calls = classify_reads(&detector, &chunk, opts)?;
            calls.iter().for_each(|c| summary.add(c));
            write_calls(&mut wtr, &calls)
        })?;
        info!("{}: {} reads classified", path.display(), n);
    }
    wtr.flush()?;
    info!(
        "classified {} reads: {} start-trimmed, {} end-trimmed, {} barcode bins",
        summary.reads,
        summary.trimmed_start,
        summary.trimmed_end,
        summary.bins.keys().filter(|k| k.as_str() != NO_BARCODE).count(),
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> AdapterCatalog {
        AdapterCatalog::builtin().unwrap()
    }

    fn filler(n: usize) -> String {
        "CCCAAAGGGTTT".chars().cycle().take(n).collect()
    }

    fn table_with(c: &AdapterCatalog, entries: &[(&str, f64, f64)]) -> ScoreTable {
        let mut t = c.score_table();
        for (name, s, e) in entries {
            t.set(c.index_of(name).unwrap(), Scores::new(*s, *e)).unwrap();
        }
        t
    }

    #[test]
    fn confident_barcode_is_binned() {
        let c = catalog();
        let t = table_with(&c, &[("PCR barcoding 41", 96.0, 80.0), ("PCR barcoding 3", 70.0, 0.0)]);
        let call = call_read(&c, &t, "r1", 1000, &ClassifyOptions::default()).unwrap();
        let bc = call.barcode.unwrap();
        assert_eq!(bc.label, "BC41");
        assert_eq!(bc.adapter, "PCR barcoding 41");
        assert_eq!(call.best_adapter, Some("PCR barcoding 41"));
        assert!(call.trim_start && !call.trim_end);
    }

    #[test]
    fn barcode_needs_threshold_and_margin() {
        let c = catalog();
        let opts = ClassifyOptions::default();
        let low = table_with(&c, &[("Native barcoding 2", 74.0, 0.0)]);
        assert!(call_read(&c, &low, "r", 1, &opts).unwrap().barcode.is_none());
        let with_runner_up = |end: f64| {
            table_with(&c, &[("Native barcoding 2", 90.0, 0.0), ("PCR barcoding 9", 0.0, end)])
        };
        let close = with_runner_up(86.0);
        assert!(call_read(&c, &close, "r", 1, &opts).unwrap().barcode.is_none());
        let clear = with_runner_up(85.0);
        assert_eq!(call_read(&c, &clear, "r", 1, &opts).unwrap().barcode_label(), "NB02");
    }

    #[test]
    fn kit_adapters_never_bin() {
        let c = catalog();
        let t = table_with(&c, &[("SQK-NSK007", 100.0, 100.0)]);
        let call = call_read(&c, &t, "r", 1, &ClassifyOptions::default()).unwrap();
        assert_eq!(call.best_adapter, Some("SQK-NSK007"));
        assert!(call.trim_start && call.trim_end);
        assert_eq!(call.barcode_label(), NO_BARCODE);
    }

    #[test]
    fn empty_table_has_no_calls() {
        let c = catalog();
        let call = call_read(&c, &c.score_table(), "r", 0, &ClassifyOptions::default()).unwrap();
        assert_eq!(call.best_adapter, None);
        assert_eq!(call.scores, Scores::ZERO);
        assert!(!call.trim_start && !call.trim_end && call.barcode.is_none());
    }

    #[test]
    fn reads_are_scored_independently_in_parallel() {
        let c = catalog();
        let opts = ClassifyOptions::default();
        let d = Detector::new(&c, opts.scan());
        let bc05 = c.get("PCR barcoding 5").unwrap();
        let bc77 = c.get("PCR barcoding 77").unwrap();
        let read = |a: &crate::adapter::Adapter| -> Vec<u8> {
            let (start, end) = (a.start_motifs[0].sequence, a.end_motifs[0].sequence);
            format!("{start}{}{end}", filler(400)).into_bytes()
        };
        let reads: Vec<NARead> = (0..64)
            .map(|i| {
                let seq = read(if i % 2 == 0 { bc05 } else { bc77 });
                NARead { id: format!("r{i}"), seq, qual: None }
            })
            .collect();
        let calls = classify_reads(&d, &reads, &opts).unwrap();
        for (i, call) in calls.iter().enumerate() {
            let expected = if i % 2 == 0 { "BC05" } else { "BC77" };
            assert_eq!(call.barcode_label(), expected, "{}", call.id);
            assert!(call.trim_start && call.trim_end);
        }
    }

    #[test]
    fn tsv_rows_and_summary() {
        let c = catalog();
        let t = table_with(&c, &[("PCR barcoding 41", 96.0, 80.0)]);
        let call = call_read(&c, &t, "r1", 1000, &ClassifyOptions::default()).unwrap();
        let mut summary = Summary::default();
        summary.add(&call);
        assert_eq!(summary.bins.get("BC41"), Some(&1));
        assert_eq!(summary.trimmed_start, 1);

        let mut w = tsv_writer(Vec::new());
        w.write_record(TSV_HEADER).unwrap();
        write_calls(&mut w, &[call]).unwrap();
        let text = String::from_utf8(w.into_inner().ok().unwrap()).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row, "r1\t1000\tPCR barcoding 41\t96.0\t80.0\ttrue\tfalse\tBC41\t96.0");
    }

    #[test]
    fn unsupported_files_are_rejected() {
        let c = catalog();
        let opts = ClassifyOptions::default();
        let err = run(&c, vec!["reads.bam".into()], &opts, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("reads.bam"));
    }
}
