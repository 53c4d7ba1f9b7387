//! Read iteration for **FASTA / FASTQ** (plain or gzipped).
//!
//! ### Design
//! - Parsing with `needletail` (format and compression are sniffed from the file).
//! - Records are collected into fixed-size chunks; each chunk is handed to a
//!   callback that typically fans out over the Rayon pool.
//!
//! ### Errors
//! Parsing/IO errors are bubbled via `anyhow::Result` to the caller.
//!
//! ### Example
//! ```no_run
//! use adapterdb::seqio;
//! let n = seqio::for_each_chunk("reads.fastq.gz", 2000, |chunk| {
//!     for r in chunk { let _ = (&r.id, r.seq.len()); }
//!     Ok(())
//! }).unwrap();
//! println!("processed {n} records");
//! ```
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use needletail::parse_fastx_file;

/// A normalized read passed to callbacks.
#[derive(Debug, Clone)]
pub struct NARead {
    pub id: String,
    pub seq: Vec<u8>,
    pub qual: Option<Vec<u8>>,
}

/// Parse `path` and call `on_chunk` with up to `chunk` records at a time.
/// Returns the number of records read.
pub fn for_each_chunk<P, F>(path: P, chunk: usize, mut on_chunk: F) -> Result<usize>
where
    P: AsRef<Path>,
    F: FnMut(Vec<NARead>) -> Result<()>,
{
    let p = path.as_ref();
    let chunk = chunk.max(1);
    let mut reader = parse_fastx_file(p).with_context(|| format!("cannot open {}", p.display()))?;
    let mut total = 0usize;
    let mut buf: Vec<NARead> = Vec::with_capacity(chunk);
    while let Some(record) = reader.next() {
        let rec = record.with_context(|| format!("malformed record in {}", p.display()))?;
        buf.push(NARead {
            id: String::from_utf8_lossy(rec.id()).to_string(),
            seq: rec.seq().to_vec(),
            qual: rec.qual().map(|q| q.to_vec()),
        });
        if buf.len() >= chunk {
            total += buf.len();
            debug!("{}: chunk of {} reads ({} so far)", p.display(), buf.len(), total);
            on_chunk(std::mem::replace(&mut buf, Vec::with_capacity(chunk)))?;
        }
    }
    if !buf.is_empty() {
        total += buf.len();
        on_chunk(buf)?;
    }
    Ok(total)
}

/// Read file extensions accepted by [`split_supported_files`], before any `.gz`.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = [".fastq", ".fq", ".fasta", ".fa", ".fna"];

/// Split paths into supported read files and everything else.
pub fn split_supported_files(paths: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut ok = Vec::new();
    let mut bad = Vec::new();
    for p in paths {
        let name = p.file_name().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
        let stem = name.strip_suffix(".gz").unwrap_or(&name);
        if SUPPORTED_EXTENSIONS.iter().any(|ext| stem.ends_with(ext)) {
            ok.push(p);
        } else {
            bad.push(p);
        }
    }
    (ok, bad)
}
