use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use adapterdb::classify::{self, ClassifyOptions};
use adapterdb::AdapterCatalog;

/// adapterdb CLI
#[derive(Parser)]
#[command(name = "adapterdb")]
#[command(version)]
#[command(
    about = "ONT adapter and barcode catalog, read scoring and barcode binning",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all catalog records as TSV
    List,

    /// Describe a record by name (e.g., "Native barcoding 3")
    Describe {
        /// Adapter name (case-sensitive)
        name: String,
    },

    /// Score reads against the catalog and report trim/barcode calls as TSV
    Classify {
        /// Input files (FASTQ/FASTA, optionally gzipped)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Bases searched at each read end
        #[arg(long, default_value_t = 150)]
        end_size: usize,
        /// Minimum identity (%) for an adapter to be trimmed
        #[arg(long, default_value_t = 90.0)]
        adapter_threshold: f64,
        /// Minimum identity (%) for a barcode call
        #[arg(long, default_value_t = 75.0)]
        barcode_threshold: f64,
        /// Required identity lead (%) of the best barcode over the runner-up
        #[arg(long, default_value_t = 5.0)]
        barcode_diff: f64,
        /// Threads (0/None = all)
        #[arg(long)]
        threads: Option<usize>,
        /// Write TSV here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let catalog = AdapterCatalog::builtin().context("built-in adapter catalog is invalid")?;

    match cli.command {
        Commands::List => cmd_list(&catalog),
        Commands::Describe { name } => cmd_describe(&catalog, &name),
        Commands::Classify {
            files,
            end_size,
            adapter_threshold,
            barcode_threshold,
            barcode_diff,
            threads,
            output,
        } => {
            let n = init_thread_pool(threads);
            log::info!("classify: threads={} | inputs={} | end_size={}", n, files.len(), end_size);

            let opts =
                ClassifyOptions { end_size, adapter_threshold, barcode_threshold, barcode_diff };
            let summary = match output {
                Some(p) => {
                    let f = std::fs::File::create(&p)
                        .with_context(|| format!("cannot create {}", p.display()))?;
                    classify::run(&catalog, files, &opts, std::io::BufWriter::new(f))?
                }
                None => classify::run(&catalog, files, &opts, std::io::stdout().lock())?,
            };
            for (label, count) in &summary.bins {
                log::info!("  {label}\t{count}");
            }
            Ok(())
        }
    }
}

/// Size the global Rayon pool; `None` or `0` means one thread per CPU.
/// Returns the number of threads actually in use.
fn init_thread_pool(threads: Option<usize>) -> usize {
    let n = threads.filter(|&t| t > 0).unwrap_or_else(num_cpus::get).max(1);
    match rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
        Ok(()) => n,
        Err(e) => {
            let current = rayon::current_num_threads();
            log::warn!("could not configure {n} worker threads ({e}); using {current}");
            current
        }
    }
}

fn cmd_list(catalog: &AdapterCatalog) -> anyhow::Result<()> {
    let mut w = classify::tsv_writer(std::io::stdout().lock());
    w.write_record(["name", "kind", "start_motifs", "end_motifs", "barcode"])?;
    for (name, kind, start, end, barcode) in adapterdb::catalog_rows(catalog)? {
        w.write_record([name, kind, start, end, barcode])?;
    }
    w.flush()?;
    Ok(())
}

fn cmd_describe(catalog: &AdapterCatalog, name: &str) -> anyhow::Result<()> {
    let Some(a) = catalog.get(name) else {
        anyhow::bail!("Unknown adapter: {name:?}. Use `adapterdb list` to see valid names.");
    };
    let mut out = std::io::stdout().lock();
    writeln!(out, "name: {}", a.name)?;
    writeln!(out, "kind: {}", a.kind)?;
    writeln!(out, "barcode: {}", a.is_barcode())?;
    if a.is_barcode() {
        writeln!(out, "barcode_name: {}", a.get_barcode_name()?)?;
    }
    writeln!(out, "both_ends: {}", a.is_both_ends())?;
    let rows = adapterdb::adapter_motif_rows(catalog, name).unwrap_or_default();
    for (orientation, label, sequence) in rows {
        writeln!(out, "{orientation}\t{label}\t{sequence}")?;
    }
    Ok(())
}
