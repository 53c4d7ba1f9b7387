//! Native barcoding family: NB01..NB12.
//!
//! The start side carries the `_rev` strand and the end side the forward
//! barcode, the reverse of the PCR family layout. NBnn's end motif is
//! textually identical to BCnn's start motif, so both strands of the same
//! physical adapter are present as separate records.
use crate::adapter::{AdapterDef, AdapterKind, Motif};

pub const NATIVE_BARCODES: &[AdapterDef] = &[
    AdapterDef::new("Native barcoding 1", AdapterKind::NativeBarcode,
        &[Motif::new("NB01_rev", "AGGTTAACACAAAGACACCGACAACTTTCTTCAGCACC")],
        &[Motif::new("NB01", "GGTGCTGAAGAAAGTTGTCGGTGTCTTTGTGTTAACCT")]),
    AdapterDef::new("Native barcoding 2", AdapterKind::NativeBarcode,
        &[Motif::new("NB02_rev", "AGGTTAAACAGACGACTACAAACGGAATCGACAGCACC")],
        &[Motif::new("NB02", "GGTGCTGTCGATTCCGTTTGTAGTCGTCTGTTTAACCT")]),
    AdapterDef::new("Native barcoding 3", AdapterKind::NativeBarcode,
        &[Motif::new("NB03_rev", "AGGTTAACCTGGTAACTGGGACACAAGACTCCAGCACC")],
        &[Motif::new("NB03", "GGTGCTGGAGTCTTGTGTCCCAGTTACCAGGTTAACCT")]),
    AdapterDef::new("Native barcoding 4", AdapterKind::NativeBarcode,
        &[Motif::new("NB04_rev", "AGGTTAATAGGGAAACACGATAGAATCCGAACAGCACC")],
        &[Motif::new("NB04", "GGTGCTGTTCGGATTCTATCGTGTTTCCCTATTAACCT")]),
    AdapterDef::new("Native barcoding 5", AdapterKind::NativeBarcode,
        &[Motif::new("NB05_rev", "AGGTTAAAAGGTTACACAAACCCTGGACAAGCAGCACC")],
        &[Motif::new("NB05", "GGTGCTGCTTGTCCAGGGTTTGTGTAACCTTTTAACCT")]),
    AdapterDef::new("Native barcoding 6", AdapterKind::NativeBarcode,
        &[Motif::new("NB06_rev", "AGGTTAAGACTACTTTCTGCCTTTGCGAGAACAGCACC")],
        &[Motif::new("NB06", "GGTGCTGTTCTCGCAAAGGCAGAAAGTAGTCTTAACCT")]),
    AdapterDef::new("Native barcoding 7", AdapterKind::NativeBarcode,
        &[Motif::new("NB07_rev", "AGGTTAAAAGGATTCATTCCCACGGTAACACCAGCACC")],
        &[Motif::new("NB07", "GGTGCTGGTGTTACCGTGGGAATGAATCCTTTTAACCT")]),
    AdapterDef::new("Native barcoding 8", AdapterKind::NativeBarcode,
        &[Motif::new("NB08_rev", "AGGTTAAACGTAACTTGGTTTGTTCCCTGAACAGCACC")],
        &[Motif::new("NB08", "GGTGCTGTTCAGGGAACAAACCAAGTTACGTTTAACCT")]),
    AdapterDef::new("Native barcoding 9", AdapterKind::NativeBarcode,
        &[Motif::new("NB09_rev", "AGGTTAAAACCAAGACTCGCTGTGCCTAGTTCAGCACC")],
        &[Motif::new("NB09", "GGTGCTGAACTAGGCACAGCGAGTCTTGGTTTTAACCT")]),
    AdapterDef::new("Native barcoding 10", AdapterKind::NativeBarcode,
        &[Motif::new("NB10_rev", "AGGTTAAGAGAGGACAAAGGTTTCAACGCTTCAGCACC")],
        &[Motif::new("NB10", "GGTGCTGAAGCGTTGAAACCTTTGTCCTCTCTTAACCT")]),
    AdapterDef::new("Native barcoding 11", AdapterKind::NativeBarcode,
        &[Motif::new("NB11_rev", "AGGTTAATCCATTCCCTCCGATAGATGAAACCAGCACC")],
        &[Motif::new("NB11", "GGTGCTGGTTTCATCTATCGGAGGGAATGGATTAACCT")]),
    AdapterDef::new("Native barcoding 12", AdapterKind::NativeBarcode,
        &[Motif::new("NB12_rev", "AGGTTAATCCGATTCTGCTTCTTTCTACCTGCAGCACC")],
        &[Motif::new("NB12", "GGTGCTGCAGGTAGAAAGAAGCAGAATCGGATTAACCT")]),
];
