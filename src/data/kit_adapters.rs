//! Library-preparation adapters that do not encode a sample.
//!
//! - Legacy Y-adapters (SQK-MAP006, SQK-NSK007): top strand expected at the
//!   read start, bottom strand at the read end.
//! - Kit 14 Ligation Adapter (LA), CHTD Appendix 15.
//! - Rapid adapter: transposase-attached, only ever seen at the read start,
//!   so it has no end motifs.
//!
//! None of these names contain "barcod"; they never route reads into a
//! barcode bin.
use crate::adapter::{AdapterDef, AdapterKind, Motif};

/// SQK-MAP006 Y-adapter (SK63 top / SK64 bottom).
pub const SQK_MAP006: AdapterDef = AdapterDef::new(
    "SQK-MAP006",
    AdapterKind::Kit,
    &[Motif::new("SQK-MAP006_Y_Top_SK63", "GGTTGTTTCTGTTGGTGCTGATATTGCT")],
    &[Motif::new("SQK-MAP006_Y_Bottom_SK64", "GCAATATCAGCACCAACAGAAA")],
);

/// Short SQK-MAP006 Y-adapter (LI32 top / LI33 bottom).
pub const SQK_MAP006_SHORT: AdapterDef = AdapterDef::new(
    "SQK-MAP006 Short",
    AdapterKind::Kit,
    &[Motif::new("SQK-MAP006_Short_Y_Top_LI32", "CGGCGTCTGCTTGGGTGTTTAACCT")],
    &[Motif::new("SQK-MAP006_Short_Y_Bottom_LI33", "GGTTAAACACCCAAGCAGACGCCG")],
);

/// SQK-NSK007 Y-adapter trunk; also used by LSK108/LSK109.
pub const SQK_NSK007: AdapterDef = AdapterDef::new(
    "SQK-NSK007",
    AdapterKind::Kit,
    &[Motif::new("SQK-NSK007_Y_Top", "AATGTACTTCGTTCAGTTACGTATTGCT")],
    &[Motif::new("SQK-NSK007_Y_Bottom", "GCAATACGTAACTGAACGAAGT")],
);

/// Kit 14 Ligation Adapter. 5'-TTTTTTTTCCTGTACTTCGTTCAGTTACGTATTGCT-3' top,
/// 5'-GCAATACGTAACTGAACGAAGTACAGG-3' bottom.
pub const SQK_LSK114: AdapterDef = AdapterDef::new(
    "SQK-LSK114",
    AdapterKind::Kit,
    &[Motif::new("LA_top", "TTTTTTTTCCTGTACTTCGTTCAGTTACGTATTGCT")],
    &[Motif::new("LA_bottom", "GCAATACGTAACTGAACGAAGTACAGG")],
);

/// Rapid adapter (RBK rear sequence).
pub const RAPID: AdapterDef = AdapterDef::new(
    "Rapid",
    AdapterKind::Kit,
    &[Motif::new("Rapid_adapter", "GTTTTCGCATTTATCGTGAAACGCTTTCGCGTTTTTCGTGCGCCGCTTCA")],
    &[],
);

/// All kit adapters, in catalog order.
pub const KIT_ADAPTERS: &[AdapterDef] =
    &[SQK_MAP006, SQK_MAP006_SHORT, SQK_NSK007, SQK_LSK114, RAPID];
