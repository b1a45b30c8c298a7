//! 文本报告输出。
//!
//! 报告格式（每项一行）：
//!
//! ```text
//! Global Alignment
//! DNA Sequence | Protein Sequence
//! <gap penalty>
//! <aligned sequence 1>
//! <match line>
//! <aligned sequence 2>
//! <score>
//! ```

use std::io::{self, Write};

use crate::align::{GlobalAlignment, ScoreMatrix};
use crate::util::alphabet::SequenceKind;

pub fn write_report<W: Write>(out: &mut W, seq1: &[u8], result: &GlobalAlignment) -> io::Result<()> {
    let aln = &result.alignment;
    writeln!(out, "Global Alignment")?;
    writeln!(out, "{}", SequenceKind::classify(seq1))?;
    writeln!(out, "{}", result.gap_penalty)?;
    writeln!(out, "{}", aln.aligned1)?;
    writeln!(out, "{}", aln.match_line)?;
    writeln!(out, "{}", aln.aligned2)?;
    writeln!(out, "{}", aln.score)?;
    Ok(())
}

/// 以制表符分隔输出得分矩阵，首行为 seq2，首列为 seq1，原点位置记作 `-`。
///
/// 矩阵尺寸必须是 `(len1 + 1) × (len2 + 1)`，否则返回 `InvalidInput`，不输出任何内容。
pub fn write_score_matrix<W: Write>(
    out: &mut W,
    matrix: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
) -> io::Result<()> {
    if matrix.rows() != seq1.len() + 1 || matrix.cols() != seq2.len() + 1 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "score matrix is {}x{} but sequences need {}x{}",
                matrix.rows(),
                matrix.cols(),
                seq1.len() + 1,
                seq2.len() + 1
            ),
        ));
    }

    write!(out, "\t-")?;
    for &b in seq2 {
        write!(out, "\t{}", char::from(b))?;
    }
    writeln!(out)?;

    for i in 0..matrix.rows() {
        let label = if i == 0 { '-' } else { char::from(seq1[i - 1]) };
        write!(out, "{}", label)?;
        for v in matrix.row(i) {
            write!(out, "\t{}", v)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align_global;
    use crate::error::AlignError;
    use crate::io::read_sequence_pair;
    use crate::scoring::{MatchMismatch, SubstitutionMatrix};

    #[test]
    fn dna_report_layout() {
        let res = align_global(b"GATTACA", b"GCATGCU", -1, &MatchMismatch::default()).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, b"GATTACA", &res).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Global Alignment\nDNA Sequence\n-1\nG-ATTACA\n| ||  | \nGCATG-CU\n0\n"
        );
    }

    #[test]
    fn protein_report_from_text_inputs() {
        let table: SubstitutionMatrix = "\
   H  E  A  G  W
H 10  0 -2 -2 -3
E  0  6 -1 -2 -3
A -2 -1  4  0 -3
G -2 -2  0  6 -2
W -3 -3 -3 -2 11
"
        .parse()
        .unwrap();
        // P is not in the table
        let pair = read_sequence_pair(&b"HEAGAWGHEE\n\nPAWHEAE\n"[..], "inline").unwrap();
        let err = align_global(&pair.first.seq, &pair.second.seq, -8, &table).unwrap_err();
        assert!(matches!(err, AlignError::UnknownSymbol { symbol: 'P', .. }));

        let res = align_global(b"HEAGAWGHEE", b"HEAWHEAE", -8, &table).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, b"HEAGAWGHEE", &res).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Global Alignment");
        assert_eq!(lines[1], "Protein Sequence");
        assert_eq!(lines[2], "-8");
        assert_eq!(lines[3].replace('-', ""), "HEAGAWGHEE");
        assert_eq!(lines[5].replace('-', ""), "HEAWHEAE");
        assert_eq!(lines[6], res.score().to_string());
    }

    #[test]
    fn blosum62_fasta_end_to_end() {
        let table: SubstitutionMatrix = include_str!("../data/blosum62.txt").parse().unwrap();
        let pair = read_sequence_pair(include_str!("../data/proteins.fa").as_bytes(), "proteins.fa").unwrap();
        assert_eq!(pair.first.id.as_deref(), Some("seq1"));

        let res = align_global(&pair.first.seq, &pair.second.seq, -8, &table).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &pair.first.seq, &res).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Protein Sequence");
        assert_eq!(lines[3].replace('-', ""), "HEAGAWGHEE");
        assert_eq!(lines[5].replace('-', ""), "PAWHEAE");
        assert_eq!(lines[6], res.matrix.final_score().to_string());
    }

    #[test]
    fn bundled_dna_sample_runs() {
        let table: SubstitutionMatrix = include_str!("../data/dna.txt").parse().unwrap();
        let pair = read_sequence_pair(include_str!("../data/gattaca.txt").as_bytes(), "gattaca.txt").unwrap();
        let res = align_global(&pair.first.seq, &pair.second.seq, -2, &table).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &pair.first.seq, &res).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Global Alignment\nDNA Sequence\n-2\nG-ATTACA\n| ||  | \nGCATG-CU\n2\n"
        );
    }

    #[test]
    fn score_matrix_dump() {
        let res = align_global(b"AC", b"CA", -1, &MatchMismatch::default()).unwrap();
        let mut out = Vec::new();
        write_score_matrix(&mut out, &res.matrix, b"AC", b"CA").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\t-\tC\tA\n-\t0\t-1\t-2\nA\t-1\t-1\t0\nC\t-2\t0\t-1\n"
        );
    }

    #[test]
    fn score_matrix_dump_rejects_mismatched_sequences() {
        let res = align_global(b"AC", b"CA", -1, &MatchMismatch::default()).unwrap();
        let mut out = Vec::new();
        let err = write_score_matrix(&mut out, &res.matrix, b"ACGT", b"CA").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());

        let err = write_score_matrix(&mut out, &res.matrix, b"A", b"CA").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
