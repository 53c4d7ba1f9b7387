//! PCR barcoding family: BC01..BC96 (forward barcode at the read start,
//! its reverse complement, labelled `_rev`, at the read end).
use crate::adapter::{AdapterDef, AdapterKind, Motif};

pub const PCR_BARCODES: &[AdapterDef] = &[
    AdapterDef::new("PCR barcoding 1", AdapterKind::PcrBarcode,
        &[Motif::new("BC01", "GGTGCTGAAGAAAGTTGTCGGTGTCTTTGTGTTAACCT")],
        &[Motif::new("BC01_rev", "AGGTTAACACAAAGACACCGACAACTTTCTTCAGCACC")]),
    AdapterDef::new("PCR barcoding 2", AdapterKind::PcrBarcode,
        &[Motif::new("BC02", "GGTGCTGTCGATTCCGTTTGTAGTCGTCTGTTTAACCT")],
        &[Motif::new("BC02_rev", "AGGTTAAACAGACGACTACAAACGGAATCGACAGCACC")]),
    AdapterDef::new("PCR barcoding 3", AdapterKind::PcrBarcode,
        &[Motif::new("BC03", "GGTGCTGGAGTCTTGTGTCCCAGTTACCAGGTTAACCT")],
        &[Motif::new("BC03_rev", "AGGTTAACCTGGTAACTGGGACACAAGACTCCAGCACC")]),
    AdapterDef::new("PCR barcoding 4", AdapterKind::PcrBarcode,
        &[Motif::new("BC04", "GGTGCTGTTCGGATTCTATCGTGTTTCCCTATTAACCT")],
        &[Motif::new("BC04_rev", "AGGTTAATAGGGAAACACGATAGAATCCGAACAGCACC")]),
    AdapterDef::new("PCR barcoding 5", AdapterKind::PcrBarcode,
        &[Motif::new("BC05", "GGTGCTGCTTGTCCAGGGTTTGTGTAACCTTTTAACCT")],
        &[Motif::new("BC05_rev", "AGGTTAAAAGGTTACACAAACCCTGGACAAGCAGCACC")]),
    AdapterDef::new("PCR barcoding 6", AdapterKind::PcrBarcode,
        &[Motif::new("BC06", "GGTGCTGTTCTCGCAAAGGCAGAAAGTAGTCTTAACCT")],
        &[Motif::new("BC06_rev", "AGGTTAAGACTACTTTCTGCCTTTGCGAGAACAGCACC")]),
    AdapterDef::new("PCR barcoding 7", AdapterKind::PcrBarcode,
        &[Motif::new("BC07", "GGTGCTGGTGTTACCGTGGGAATGAATCCTTTTAACCT")],
        &[Motif::new("BC07_rev", "AGGTTAAAAGGATTCATTCCCACGGTAACACCAGCACC")]),
    AdapterDef::new("PCR barcoding 8", AdapterKind::PcrBarcode,
        &[Motif::new("BC08", "GGTGCTGTTCAGGGAACAAACCAAGTTACGTTTAACCT")],
        &[Motif::new("BC08_rev", "AGGTTAAACGTAACTTGGTTTGTTCCCTGAACAGCACC")]),
    AdapterDef::new("PCR barcoding 9", AdapterKind::PcrBarcode,
        &[Motif::new("BC09", "GGTGCTGAACTAGGCACAGCGAGTCTTGGTTTTAACCT")],
        &[Motif::new("BC09_rev", "AGGTTAAAACCAAGACTCGCTGTGCCTAGTTCAGCACC")]),
    AdapterDef::new("PCR barcoding 10", AdapterKind::PcrBarcode,
        &[Motif::new("BC10", "GGTGCTGAAGCGTTGAAACCTTTGTCCTCTCTTAACCT")],
        &[Motif::new("BC10_rev", "AGGTTAAGAGAGGACAAAGGTTTCAACGCTTCAGCACC")]),
    AdapterDef::new("PCR barcoding 11", AdapterKind::PcrBarcode,
        &[Motif::new("BC11", "GGTGCTGGTTTCATCTATCGGAGGGAATGGATTAACCT")],
        &[Motif::new("BC11_rev", "AGGTTAATCCATTCCCTCCGATAGATGAAACCAGCACC")]),
    AdapterDef::new("PCR barcoding 12", AdapterKind::PcrBarcode,
        &[Motif::new("BC12", "GGTGCTGCAGGTAGAAAGAAGCAGAATCGGATTAACCT")],
        &[Motif::new("BC12_rev", "AGGTTAATCCGATTCTGCTTCTTTCTACCTGCAGCACC")]),
    AdapterDef::new("PCR barcoding 13", AdapterKind::PcrBarcode,
        &[Motif::new("BC13", "GGTGCTGAGAACGACTTCCATACTCGTGTGATTAACCT")],
        &[Motif::new("BC13_rev", "AGGTTAATCACACGAGTATGGAAGTCGTTCTCAGCACC")]),
    AdapterDef::new("PCR barcoding 14", AdapterKind::PcrBarcode,
        &[Motif::new("BC14", "GGTGCTGAACGAGTCTCTTGGGACCCATAGATTAACCT")],
        &[Motif::new("BC14_rev", "AGGTTAATCTATGGGTCCCAAGAGACTCGTTCAGCACC")]),
    AdapterDef::new("PCR barcoding 15", AdapterKind::PcrBarcode,
        &[Motif::new("BC15", "GGTGCTGAGGTCTACCTCGCTAACACCACTGTTAACCT")],
        &[Motif::new("BC15_rev", "AGGTTAACAGTGGTGTTAGCGAGGTAGACCTCAGCACC")]),
    AdapterDef::new("PCR barcoding 16", AdapterKind::PcrBarcode,
        &[Motif::new("BC16", "GGTGCTGCGTCAACTGACAGTGGTTCGTACTTTAACCT")],
        &[Motif::new("BC16_rev", "AGGTTAAAGTACGAACCACTGTCAGTTGACGCAGCACC")]),
    AdapterDef::new("PCR barcoding 17", AdapterKind::PcrBarcode,
        &[Motif::new("BC17", "GGTGCTGACCCTCCAGGAAAGTACCTCTGATTTAACCT")],
        &[Motif::new("BC17_rev", "AGGTTAAATCAGAGGTACTTTCCTGGAGGGTCAGCACC")]),
    AdapterDef::new("PCR barcoding 18", AdapterKind::PcrBarcode,
        &[Motif::new("BC18", "GGTGCTGCCAAACCCAACAACCTAGATAGGCTTAACCT")],
        &[Motif::new("BC18_rev", "AGGTTAAGCCTATCTAGGTTGTTGGGTTTGGCAGCACC")]),
    AdapterDef::new("PCR barcoding 19", AdapterKind::PcrBarcode,
        &[Motif::new("BC19", "GGTGCTGGTTCCTCGTGCAGTGTCAAGAGATTTAACCT")],
        &[Motif::new("BC19_rev", "AGGTTAAATCTCTTGACACTGCACGAGGAACCAGCACC")]),
    AdapterDef::new("PCR barcoding 20", AdapterKind::PcrBarcode,
        &[Motif::new("BC20", "GGTGCTGTTGCGTCCTGTTACGAGAACTCATTTAACCT")],
        &[Motif::new("BC20_rev", "AGGTTAAATGAGTTCTCGTAACAGGACGCAACAGCACC")]),
    AdapterDef::new("PCR barcoding 21", AdapterKind::PcrBarcode,
        &[Motif::new("BC21", "GGTGCTGGAGCCTCTCATTGTCCGTTCTCTATTAACCT")],
        &[Motif::new("BC21_rev", "AGGTTAATAGAGAACGGACAATGAGAGGCTCCAGCACC")]),
    AdapterDef::new("PCR barcoding 22", AdapterKind::PcrBarcode,
        &[Motif::new("BC22", "GGTGCTGACCACTGCCATGTATCAAAGTACGTTAACCT")],
        &[Motif::new("BC22_rev", "AGGTTAACGTACTTTGATACATGGCAGTGGTCAGCACC")]),
    AdapterDef::new("PCR barcoding 23", AdapterKind::PcrBarcode,
        &[Motif::new("BC23", "GGTGCTGCTTACTACCCAGTGAACCTCCTCGTTAACCT")],
        &[Motif::new("BC23_rev", "AGGTTAACGAGGAGGTTCACTGGGTAGTAAGCAGCACC")]),
    AdapterDef::new("PCR barcoding 24", AdapterKind::PcrBarcode,
        &[Motif::new("BC24", "GGTGCTGGCATAGTTCTGCATGATGGGTTAGTTAACCT")],
        &[Motif::new("BC24_rev", "AGGTTAACTAACCCATCATGCAGAACTATGCCAGCACC")]),
    AdapterDef::new("PCR barcoding 25", AdapterKind::PcrBarcode,
        &[Motif::new("BC25", "GGTGCTGGTAAGTTGGGTATGCAACGCAATGTTAACCT")],
        &[Motif::new("BC25_rev", "AGGTTAACATTGCGTTGCATACCCAACTTACCAGCACC")]),
    AdapterDef::new("PCR barcoding 26", AdapterKind::PcrBarcode,
        &[Motif::new("BC26", "GGTGCTGCATACAGCGACTACGCATTCTCATTTAACCT")],
        &[Motif::new("BC26_rev", "AGGTTAAATGAGAATGCGTAGTCGCTGTATGCAGCACC")]),
    AdapterDef::new("PCR barcoding 27", AdapterKind::PcrBarcode,
        &[Motif::new("BC27", "GGTGCTGCGACGGTTAGATTCACCTCTTACATTAACCT")],
        &[Motif::new("BC27_rev", "AGGTTAATGTAAGAGGTGAATCTAACCGTCGCAGCACC")]),
    AdapterDef::new("PCR barcoding 28", AdapterKind::PcrBarcode,
        &[Motif::new("BC28", "GGTGCTGTGAAACCTAAGAAGGCACCGTATCTTAACCT")],
        &[Motif::new("BC28_rev", "AGGTTAAGATACGGTGCCTTCTTAGGTTTCACAGCACC")]),
    AdapterDef::new("PCR barcoding 29", AdapterKind::PcrBarcode,
        &[Motif::new("BC29", "GGTGCTGCTAGACACCTTGGGTTGACAGACCTTAACCT")],
        &[Motif::new("BC29_rev", "AGGTTAAGGTCTGTCAACCCAAGGTGTCTAGCAGCACC")]),
    AdapterDef::new("PCR barcoding 30", AdapterKind::PcrBarcode,
        &[Motif::new("BC30", "GGTGCTGTCAGTGAGGATCTACTTCGACCCATTAACCT")],
        &[Motif::new("BC30_rev", "AGGTTAATGGGTCGAAGTAGATCCTCACTGACAGCACC")]),
    AdapterDef::new("PCR barcoding 31", AdapterKind::PcrBarcode,
        &[Motif::new("BC31", "GGTGCTGTGCGTACAGCAATCAGTTACATTGTTAACCT")],
        &[Motif::new("BC31_rev", "AGGTTAACAATGTAACTGATTGCTGTACGCACAGCACC")]),
    AdapterDef::new("PCR barcoding 32", AdapterKind::PcrBarcode,
        &[Motif::new("BC32", "GGTGCTGCCAGTAGAAGTCCGACAACGTCATTTAACCT")],
        &[Motif::new("BC32_rev", "AGGTTAAATGACGTTGTCGGACTTCTACTGGCAGCACC")]),
    AdapterDef::new("PCR barcoding 33", AdapterKind::PcrBarcode,
        &[Motif::new("BC33", "GGTGCTGCAGACTTGGTACGGTTGGGTAACTTTAACCT")],
        &[Motif::new("BC33_rev", "AGGTTAAAGTTACCCAACCGTACCAAGTCTGCAGCACC")]),
    AdapterDef::new("PCR barcoding 34", AdapterKind::PcrBarcode,
        &[Motif::new("BC34", "GGTGCTGGGACGAAGAACTCAAGTCAAAGGCTTAACCT")],
        &[Motif::new("BC34_rev", "AGGTTAAGCCTTTGACTTGAGTTCTTCGTCCCAGCACC")]),
    AdapterDef::new("PCR barcoding 35", AdapterKind::PcrBarcode,
        &[Motif::new("BC35", "GGTGCTGCTACTTACGAAGCTGAGGGACTGCTTAACCT")],
        &[Motif::new("BC35_rev", "AGGTTAAGCAGTCCCTCAGCTTCGTAAGTAGCAGCACC")]),
    AdapterDef::new("PCR barcoding 36", AdapterKind::PcrBarcode,
        &[Motif::new("BC36", "GGTGCTGATGTCCCAGTTAGAGGAGGAAACATTAACCT")],
        &[Motif::new("BC36_rev", "AGGTTAATGTTTCCTCCTCTAACTGGGACATCAGCACC")]),
    AdapterDef::new("PCR barcoding 37", AdapterKind::PcrBarcode,
        &[Motif::new("BC37", "GGTGCTGGCTTGCGATTGATGCTTAGTATCATTAACCT")],
        &[Motif::new("BC37_rev", "AGGTTAATGATACTAAGCATCAATCGCAAGCCAGCACC")]),
    AdapterDef::new("PCR barcoding 38", AdapterKind::PcrBarcode,
        &[Motif::new("BC38", "GGTGCTGACCACAGGAGGACGATACAGAGAATTAACCT")],
        &[Motif::new("BC38_rev", "AGGTTAATTCTCTGTATCGTCCTCCTGTGGTCAGCACC")]),
    AdapterDef::new("PCR barcoding 39", AdapterKind::PcrBarcode,
        &[Motif::new("BC39", "GGTGCTGCCACAGTGTCAACTAGAGCCTCTCTTAACCT")],
        &[Motif::new("BC39_rev", "AGGTTAAGAGAGGCTCTAGTTGACACTGTGGCAGCACC")]),
    AdapterDef::new("PCR barcoding 40", AdapterKind::PcrBarcode,
        &[Motif::new("BC40", "GGTGCTGTAGTTTGGATGACCAAGGATAGCCTTAACCT")],
        &[Motif::new("BC40_rev", "AGGTTAAGGCTATCCTTGGTCATCCAAACTACAGCACC")]),
    AdapterDef::new("PCR barcoding 41", AdapterKind::PcrBarcode,
        &[Motif::new("BC41", "GGTGCTGGGAGTTCGTCCAGAGAAGTACACGTTAACCT")],
        &[Motif::new("BC41_rev", "AGGTTAACGTGTACTTCTCTGGACGAACTCCCAGCACC")]),
    AdapterDef::new("PCR barcoding 42", AdapterKind::PcrBarcode,
        &[Motif::new("BC42", "GGTGCTGCTACGTGTAAGGCATACCTGCCAGTTAACCT")],
        &[Motif::new("BC42_rev", "AGGTTAACTGGCAGGTATGCCTTACACGTAGCAGCACC")]),
    AdapterDef::new("PCR barcoding 43", AdapterKind::PcrBarcode,
        &[Motif::new("BC43", "GGTGCTGCTTTCGTTGTTGACTCGACGGTAGTTAACCT")],
        &[Motif::new("BC43_rev", "AGGTTAACTACCGTCGAGTCAACAACGAAAGCAGCACC")]),
    AdapterDef::new("PCR barcoding 44", AdapterKind::PcrBarcode,
        &[Motif::new("BC44", "GGTGCTGAGTAGAAAGGGTTCCTTCCCACTCTTAACCT")],
        &[Motif::new("BC44_rev", "AGGTTAAGAGTGGGAAGGAACCCTTTCTACTCAGCACC")]),
    AdapterDef::new("PCR barcoding 45", AdapterKind::PcrBarcode,
        &[Motif::new("BC45", "GGTGCTGGATCCAACAGAGATGCCTTCAGTGTTAACCT")],
        &[Motif::new("BC45_rev", "AGGTTAACACTGAAGGCATCTCTGTTGGATCCAGCACC")]),
    AdapterDef::new("PCR barcoding 46", AdapterKind::PcrBarcode,
        &[Motif::new("BC46", "GGTGCTGGCTGTGTTCCACTTCATTCTCCTGTTAACCT")],
        &[Motif::new("BC46_rev", "AGGTTAACAGGAGAATGAAGTGGAACACAGCCAGCACC")]),
    AdapterDef::new("PCR barcoding 47", AdapterKind::PcrBarcode,
        &[Motif::new("BC47", "GGTGCTGGTGCAACTTTCCCACAGGTAGTTCTTAACCT")],
        &[Motif::new("BC47_rev", "AGGTTAAGAACTACCTGTGGGAAAGTTGCACCAGCACC")]),
    AdapterDef::new("PCR barcoding 48", AdapterKind::PcrBarcode,
        &[Motif::new("BC48", "GGTGCTGCATCTGGAACGTGGTACACCTGTATTAACCT")],
        &[Motif::new("BC48_rev", "AGGTTAATACAGGTGTACCACGTTCCAGATGCAGCACC")]),
    AdapterDef::new("PCR barcoding 49", AdapterKind::PcrBarcode,
        &[Motif::new("BC49", "GGTGCTGACTGGTGCAGCTTTGAACATCTAGTTAACCT")],
        &[Motif::new("BC49_rev", "AGGTTAACTAGATGTTCAAAGCTGCACCAGTCAGCACC")]),
    AdapterDef::new("PCR barcoding 50", AdapterKind::PcrBarcode,
        &[Motif::new("BC50", "GGTGCTGATGGACTTTGGTAACTTCCTGCGTTTAACCT")],
        &[Motif::new("BC50_rev", "AGGTTAAACGCAGGAAGTTACCAAAGTCCATCAGCACC")]),
    AdapterDef::new("PCR barcoding 51", AdapterKind::PcrBarcode,
        &[Motif::new("BC51", "GGTGCTGGTTGAATGAGCCTACTGGGTCCTCTTAACCT")],
        &[Motif::new("BC51_rev", "AGGTTAAGAGGACCCAGTAGGCTCATTCAACCAGCACC")]),
    AdapterDef::new("PCR barcoding 52", AdapterKind::PcrBarcode,
        &[Motif::new("BC52", "GGTGCTGTGAGAGACAAGATTGTTCGTGGACTTAACCT")],
        &[Motif::new("BC52_rev", "AGGTTAAGTCCACGAACAATCTTGTCTCTCACAGCACC")]),
    AdapterDef::new("PCR barcoding 53", AdapterKind::PcrBarcode,
        &[Motif::new("BC53", "GGTGCTGAGATTCAGACCGTCTCATGCAAAGTTAACCT")],
        &[Motif::new("BC53_rev", "AGGTTAACTTTGCATGAGACGGTCTGAATCTCAGCACC")]),
    AdapterDef::new("PCR barcoding 54", AdapterKind::PcrBarcode,
        &[Motif::new("BC54", "GGTGCTGCAAGAGCTTTGACTAAGGAGCATGTTAACCT")],
        &[Motif::new("BC54_rev", "AGGTTAACATGCTCCTTAGTCAAAGCTCTTGCAGCACC")]),
    AdapterDef::new("PCR barcoding 55", AdapterKind::PcrBarcode,
        &[Motif::new("BC55", "GGTGCTGTGGAAGATGAGACCCTGATCTACGTTAACCT")],
        &[Motif::new("BC55_rev", "AGGTTAACGTAGATCAGGGTCTCATCTTCCACAGCACC")]),
    AdapterDef::new("PCR barcoding 56", AdapterKind::PcrBarcode,
        &[Motif::new("BC56", "GGTGCTGTCACTACTCAACAGGTGGCATGAATTAACCT")],
        &[Motif::new("BC56_rev", "AGGTTAATTCATGCCACCTGTTGAGTAGTGACAGCACC")]),
    AdapterDef::new("PCR barcoding 57", AdapterKind::PcrBarcode,
        &[Motif::new("BC57", "GGTGCTGGCTAGGTCAATCTCCTTCGGAAGTTTAACCT")],
        &[Motif::new("BC57_rev", "AGGTTAAACTTCCGAAGGAGATTGACCTAGCCAGCACC")]),
    AdapterDef::new("PCR barcoding 58", AdapterKind::PcrBarcode,
        &[Motif::new("BC58", "GGTGCTGCAGGTTACTCCTCCGTGAGTCTGATTAACCT")],
        &[Motif::new("BC58_rev", "AGGTTAATCAGACTCACGGAGGAGTAACCTGCAGCACC")]),
    AdapterDef::new("PCR barcoding 59", AdapterKind::PcrBarcode,
        &[Motif::new("BC59", "GGTGCTGTCAATCAAGAAGGGAAAGCAAGGTTTAACCT")],
        &[Motif::new("BC59_rev", "AGGTTAAACCTTGCTTTCCCTTCTTGATTGACAGCACC")]),
    AdapterDef::new("PCR barcoding 60", AdapterKind::PcrBarcode,
        &[Motif::new("BC60", "GGTGCTGCATGTTCAACCAAGGCTTCTATGGTTAACCT")],
        &[Motif::new("BC60_rev", "AGGTTAACCATAGAAGCCTTGGTTGAACATGCAGCACC")]),
    AdapterDef::new("PCR barcoding 61", AdapterKind::PcrBarcode,
        &[Motif::new("BC61", "GGTGCTGAGAGGGTACTATGTGCCTCAGCACTTAACCT")],
        &[Motif::new("BC61_rev", "AGGTTAAGTGCTGAGGCACATAGTACCCTCTCAGCACC")]),
    AdapterDef::new("PCR barcoding 62", AdapterKind::PcrBarcode,
        &[Motif::new("BC62", "GGTGCTGCACCCACACTTACTTCAGGACGTATTAACCT")],
        &[Motif::new("BC62_rev", "AGGTTAATACGTCCTGAAGTAAGTGTGGGTGCAGCACC")]),
    AdapterDef::new("PCR barcoding 63", AdapterKind::PcrBarcode,
        &[Motif::new("BC63", "GGTGCTGTTCTGAAGTTCCTGGGTCTTGAACTTAACCT")],
        &[Motif::new("BC63_rev", "AGGTTAAGTTCAAGACCCAGGAACTTCAGAACAGCACC")]),
    AdapterDef::new("PCR barcoding 64", AdapterKind::PcrBarcode,
        &[Motif::new("BC64", "GGTGCTGGACAGACACCGTTCATCGACTTTCTTAACCT")],
        &[Motif::new("BC64_rev", "AGGTTAAGAAAGTCGATGAACGGTGTCTGTCCAGCACC")]),
    AdapterDef::new("PCR barcoding 65", AdapterKind::PcrBarcode,
        &[Motif::new("BC65", "GGTGCTGTTCTCAGTCTTCCTCCAGACAAGGTTAACCT")],
        &[Motif::new("BC65_rev", "AGGTTAACCTTGTCTGGAGGAAGACTGAGAACAGCACC")]),
    AdapterDef::new("PCR barcoding 66", AdapterKind::PcrBarcode,
        &[Motif::new("BC66", "GGTGCTGCCGATCCTTGTGGCTTCTAACTTCTTAACCT")],
        &[Motif::new("BC66_rev", "AGGTTAAGAAGTTAGAAGCCACAAGGATCGGCAGCACC")]),
    AdapterDef::new("PCR barcoding 67", AdapterKind::PcrBarcode,
        &[Motif::new("BC67", "GGTGCTGGTTTGTCATACTCGTGTGCTCACCTTAACCT")],
        &[Motif::new("BC67_rev", "AGGTTAAGGTGAGCACACGAGTATGACAAACCAGCACC")]),
    AdapterDef::new("PCR barcoding 68", AdapterKind::PcrBarcode,
        &[Motif::new("BC68", "GGTGCTGGAATCTAAGCAAACACGAAGGTGGTTAACCT")],
        &[Motif::new("BC68_rev", "AGGTTAACCACCTTCGTGTTTGCTTAGATTCCAGCACC")]),
    AdapterDef::new("PCR barcoding 69", AdapterKind::PcrBarcode,
        &[Motif::new("BC69", "GGTGCTGTACAGTCCGAGCCTCATGTGATCTTTAACCT")],
        &[Motif::new("BC69_rev", "AGGTTAAAGATCACATGAGGCTCGGACTGTACAGCACC")]),
    AdapterDef::new("PCR barcoding 70", AdapterKind::PcrBarcode,
        &[Motif::new("BC70", "GGTGCTGACCGAGATCCTACGAATGGAGTGTTTAACCT")],
        &[Motif::new("BC70_rev", "AGGTTAAACACTCCATTCGTAGGATCTCGGTCAGCACC")]),
    AdapterDef::new("PCR barcoding 71", AdapterKind::PcrBarcode,
        &[Motif::new("BC71", "GGTGCTGCCTGGGAGCATCAGGTAGTAACAGTTAACCT")],
        &[Motif::new("BC71_rev", "AGGTTAACTGTTACTACCTGATGCTCCCAGGCAGCACC")]),
    AdapterDef::new("PCR barcoding 72", AdapterKind::PcrBarcode,
        &[Motif::new("BC72", "GGTGCTGTAGCTGACTGTCTTCCATACCGACTTAACCT")],
        &[Motif::new("BC72_rev", "AGGTTAAGTCGGTATGGAAGACAGTCAGCTACAGCACC")]),
    AdapterDef::new("PCR barcoding 73", AdapterKind::PcrBarcode,
        &[Motif::new("BC73", "GGTGCTGAAGAAACAGGATGACAGAACCCTCTTAACCT")],
        &[Motif::new("BC73_rev", "AGGTTAAGAGGGTTCTGTCATCCTGTTTCTTCAGCACC")]),
    AdapterDef::new("PCR barcoding 74", AdapterKind::PcrBarcode,
        &[Motif::new("BC74", "GGTGCTGTACAAGCATCCCAACACTTCCACTTTAACCT")],
        &[Motif::new("BC74_rev", "AGGTTAAAGTGGAAGTGTTGGGATGCTTGTACAGCACC")]),
    AdapterDef::new("PCR barcoding 75", AdapterKind::PcrBarcode,
        &[Motif::new("BC75", "GGTGCTGGACCATTGTGATGAACCCTGTTGTTTAACCT")],
        &[Motif::new("BC75_rev", "AGGTTAAACAACAGGGTTCATCACAATGGTCCAGCACC")]),
    AdapterDef::new("PCR barcoding 76", AdapterKind::PcrBarcode,
        &[Motif::new("BC76", "GGTGCTGATGCTTGTTACATCAACCCTGGACTTAACCT")],
        &[Motif::new("BC76_rev", "AGGTTAAGTCCAGGGTTGATGTAACAAGCATCAGCACC")]),
    AdapterDef::new("PCR barcoding 77", AdapterKind::PcrBarcode,
        &[Motif::new("BC77", "GGTGCTGCGACCTGTTTCTCAGGGATACAACTTAACCT")],
        &[Motif::new("BC77_rev", "AGGTTAAGTTGTATCCCTGAGAAACAGGTCGCAGCACC")]),
    AdapterDef::new("PCR barcoding 78", AdapterKind::PcrBarcode,
        &[Motif::new("BC78", "GGTGCTGAACAACCGAACCTTTGAATCAGAATTAACCT")],
        &[Motif::new("BC78_rev", "AGGTTAATTCTGATTCAAAGGTTCGGTTGTTCAGCACC")]),
    AdapterDef::new("PCR barcoding 79", AdapterKind::PcrBarcode,
        &[Motif::new("BC79", "GGTGCTGTCTCGGAGATAGTTCTCACTGCTGTTAACCT")],
        &[Motif::new("BC79_rev", "AGGTTAACAGCAGTGAGAACTATCTCCGAGACAGCACC")]),
    AdapterDef::new("PCR barcoding 80", AdapterKind::PcrBarcode,
        &[Motif::new("BC80", "GGTGCTGCGGATGAACATAGGATAGCGATTCTTAACCT")],
        &[Motif::new("BC80_rev", "AGGTTAAGAATCGCTATCCTATGTTCATCCGCAGCACC")]),
    AdapterDef::new("PCR barcoding 81", AdapterKind::PcrBarcode,
        &[Motif::new("BC81", "GGTGCTGCCTCATCTTGTGAAGTTGTTTCGGTTAACCT")],
        &[Motif::new("BC81_rev", "AGGTTAACCGAAACAACTTCACAAGATGAGGCAGCACC")]),
    AdapterDef::new("PCR barcoding 82", AdapterKind::PcrBarcode,
        &[Motif::new("BC82", "GGTGCTGACGGTATGTCGAGTTCCAGGACTATTAACCT")],
        &[Motif::new("BC82_rev", "AGGTTAATAGTCCTGGAACTCGACATACCGTCAGCACC")]),
    AdapterDef::new("PCR barcoding 83", AdapterKind::PcrBarcode,
        &[Motif::new("BC83", "GGTGCTGTGGCTTGATCTAGGTAAGGTCGAATTAACCT")],
        &[Motif::new("BC83_rev", "AGGTTAATTCGACCTTACCTAGATCAAGCCACAGCACC")]),
    AdapterDef::new("PCR barcoding 84", AdapterKind::PcrBarcode,
        &[Motif::new("BC84", "GGTGCTGGTAGTGGACCTAGAACCTGTGCCATTAACCT")],
        &[Motif::new("BC84_rev", "AGGTTAATGGCACAGGTTCTAGGTCCACTACCAGCACC")]),
    AdapterDef::new("PCR barcoding 85", AdapterKind::PcrBarcode,
        &[Motif::new("BC85", "GGTGCTGAACGGAGGAGTTAGTTGGATGATCTTAACCT")],
        &[Motif::new("BC85_rev", "AGGTTAAGATCATCCAACTAACTCCTCCGTTCAGCACC")]),
    AdapterDef::new("PCR barcoding 86", AdapterKind::PcrBarcode,
        &[Motif::new("BC86", "GGTGCTGAGGTGATCCCAACAAGCGTAAGTATTAACCT")],
        &[Motif::new("BC86_rev", "AGGTTAATACTTACGCTTGTTGGGATCACCTCAGCACC")]),
    AdapterDef::new("PCR barcoding 87", AdapterKind::PcrBarcode,
        &[Motif::new("BC87", "GGTGCTGTACATGCTCCTGTTGTTAGGGAGGTTAACCT")],
        &[Motif::new("BC87_rev", "AGGTTAACCTCCCTAACAACAGGAGCATGTACAGCACC")]),
    AdapterDef::new("PCR barcoding 88", AdapterKind::PcrBarcode,
        &[Motif::new("BC88", "GGTGCTGTCTTCTACTACCGATCCGAAGCAGTTAACCT")],
        &[Motif::new("BC88_rev", "AGGTTAACTGCTTCGGATCGGTAGTAGAAGACAGCACC")]),
    AdapterDef::new("PCR barcoding 89", AdapterKind::PcrBarcode,
        &[Motif::new("BC89", "GGTGCTGACAGCATCAATGTTTGGCTAGTTGTTAACCT")],
        &[Motif::new("BC89_rev", "AGGTTAACAACTAGCCAAACATTGATGCTGTCAGCACC")]),
    AdapterDef::new("PCR barcoding 90", AdapterKind::PcrBarcode,
        &[Motif::new("BC90", "GGTGCTGGATGTAGAGGGTACGGTTTGAGGCTTAACCT")],
        &[Motif::new("BC90_rev", "AGGTTAAGCCTCAAACCGTACCCTCTACATCCAGCACC")]),
    AdapterDef::new("PCR barcoding 91", AdapterKind::PcrBarcode,
        &[Motif::new("BC91", "GGTGCTGGGCTCCATAGGAACTCACGCTACTTTAACCT")],
        &[Motif::new("BC91_rev", "AGGTTAAAGTAGCGTGAGTTCCTATGGAGCCCAGCACC")]),
    AdapterDef::new("PCR barcoding 92", AdapterKind::PcrBarcode,
        &[Motif::new("BC92", "GGTGCTGTTGTGAGTGGAAAGATACAGGACCTTAACCT")],
        &[Motif::new("BC92_rev", "AGGTTAAGGTCCTGTATCTTTCCACTCACAACAGCACC")]),
    AdapterDef::new("PCR barcoding 93", AdapterKind::PcrBarcode,
        &[Motif::new("BC93", "GGTGCTGAGTTTCCATCACTTCAGACTTGGGTTAACCT")],
        &[Motif::new("BC93_rev", "AGGTTAACCCAAGTCTGAAGTGATGGAAACTCAGCACC")]),
    AdapterDef::new("PCR barcoding 94", AdapterKind::PcrBarcode,
        &[Motif::new("BC94", "GGTGCTGGATTGTCCTCAAACTGCCACCTACTTAACCT")],
        &[Motif::new("BC94_rev", "AGGTTAAGTAGGTGGCAGTTTGAGGACAATCCAGCACC")]),
    AdapterDef::new("PCR barcoding 95", AdapterKind::PcrBarcode,
        &[Motif::new("BC95", "GGTGCTGCCTGTCTGGAAGAAGAATGGACTTTTAACCT")],
        &[Motif::new("BC95_rev", "AGGTTAAAAGTCCATTCTTCTTCCAGACAGGCAGCACC")]),
    AdapterDef::new("PCR barcoding 96", AdapterKind::PcrBarcode,
        &[Motif::new("BC96", "GGTGCTGCTGAACGGTCATAGAGTCCACCATTTAACCT")],
        &[Motif::new("BC96_rev", "AGGTTAAATGGTGGACTCTATGACCGTTCAGCAGCACC")]),
];
