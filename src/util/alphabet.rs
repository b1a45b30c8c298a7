use std::fmt;

/// 序列类型，仅用于输出展示，不参与比对
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceKind {
    Dna,
    Protein,
}

#[inline]
pub fn is_nucleotide(b: u8) -> bool {
    matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T')
}

impl SequenceKind {
    /// 只含 A/C/G/T（大小写不敏感）即为 DNA，否则视为蛋白。空序列算 DNA。
    pub fn classify(seq: &[u8]) -> Self {
        if seq.iter().all(|&b| is_nucleotide(b)) {
            SequenceKind::Dna
        } else {
            SequenceKind::Protein
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKind::Dna => f.write_str("DNA Sequence"),
            SequenceKind::Protein => f.write_str("Protein Sequence"),
        }
    }
}
