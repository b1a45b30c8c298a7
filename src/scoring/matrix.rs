use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use crate::error::{AlignError, Result};

use super::Scorer;

const NO_SYMBOL: u8 = u8::MAX;

/// 由文本表格加载的替换打分矩阵。
///
/// - 第一行是列头符号，之后每行是行头符号加上按列头顺序排列的整数得分。
/// - 行头集合必须与列头集合完全一致（顺序可以不同，加载时按列头顺序重排）。
/// - 得分按行优先展平存储，`index` 把字节（大小写两种形式）映射到行/列下标。
#[derive(Clone, Debug)]
pub struct SubstitutionMatrix {
    symbols: Vec<u8>,
    index: [u8; 256],
    scores: Vec<i32>,
}

impl SubstitutionMatrix {
    pub fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self> {
        let mut header: Option<Vec<u8>> = None;
        let mut index = [NO_SYMBOL; 256];
        let mut rows: Vec<Option<Vec<i32>>> = Vec::new();

        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| AlignError::missing(origin, e.to_string()))?;
            let lineno = lineno + 1;
            let mut tokens = line.split_whitespace().peekable();
            if tokens.peek().is_none() {
                continue;
            }

            if header.is_none() {
                let mut symbols = Vec::new();
                for tok in tokens {
                    let sym = parse_symbol(tok).ok_or_else(|| {
                        AlignError::missing(origin, format!("line {}: bad column header {:?}", lineno, tok))
                    })?;
                    if index[sym as usize] != NO_SYMBOL {
                        return Err(AlignError::missing(
                            origin,
                            format!("line {}: duplicate column header {:?}", lineno, sym as char),
                        ));
                    }
                    let idx = symbols.len() as u8;
                    index[sym.to_ascii_uppercase() as usize] = idx;
                    index[sym.to_ascii_lowercase() as usize] = idx;
                    symbols.push(sym);
                }
                rows = vec![None; symbols.len()];
                header = Some(symbols);
                continue;
            }

            // row: symbol followed by one score per column
            let tok = tokens.next().unwrap_or_default();
            let sym = parse_symbol(tok).ok_or_else(|| {
                AlignError::missing(origin, format!("line {}: bad row header {:?}", lineno, tok))
            })?;
            let r = index[sym as usize];
            if r == NO_SYMBOL {
                return Err(AlignError::missing(
                    origin,
                    format!("line {}: row {:?} has no matching column header", lineno, sym as char),
                ));
            }
            if rows[r as usize].is_some() {
                return Err(AlignError::missing(
                    origin,
                    format!("line {}: duplicate row {:?}", lineno, sym as char),
                ));
            }

            let values = tokens
                .map(|t| {
                    t.parse::<i32>().map_err(|_| {
                        AlignError::missing(origin, format!("line {}: cannot parse score {:?}", lineno, t))
                    })
                })
                .collect::<Result<Vec<i32>>>()?;
            if values.len() != rows.len() {
                return Err(AlignError::missing(
                    origin,
                    format!(
                        "line {}: row {:?} has {} scores, expected {}",
                        lineno,
                        sym as char,
                        values.len(),
                        rows.len()
                    ),
                ));
            }
            rows[r as usize] = Some(values);
        }

        let symbols = header.ok_or_else(|| AlignError::missing(origin, "empty substitution table"))?;
        let k = symbols.len();
        let mut scores = Vec::with_capacity(k * k);
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.ok_or_else(|| {
                AlignError::missing(origin, format!("no row for column header {:?}", symbols[i] as char))
            })?;
            scores.extend(row);
        }

        Ok(Self { symbols, index, scores })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let f = std::fs::File::open(path).map_err(|e| AlignError::missing(&origin, e.to_string()))?;
        Self::from_reader(std::io::BufReader::new(f), &origin)
    }

    /// 列头符号（即表中定义的全部符号），按文件中的顺序
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.index[symbol as usize] != NO_SYMBOL
    }

    pub fn is_symmetric(&self) -> bool {
        let k = self.len();
        (0..k).all(|i| (i + 1..k).all(|j| self.scores[i * k + j] == self.scores[j * k + i]))
    }
}

impl Scorer for SubstitutionMatrix {
    #[inline]
    fn score(&self, a: u8, b: u8) -> Result<i32> {
        let i = self.index[a as usize];
        if i == NO_SYMBOL {
            return Err(AlignError::unknown(a, "substitution matrix lookup"));
        }
        let j = self.index[b as usize];
        if j == NO_SYMBOL {
            return Err(AlignError::unknown(b, "substitution matrix lookup"));
        }
        Ok(self.scores[i as usize * self.len() + j as usize])
    }

    fn check_sequence(&self, seq: &[u8], label: &str) -> Result<()> {
        match seq.iter().position(|&b| !self.contains(b)) {
            Some(pos) => Err(AlignError::unknown(seq[pos], format!("{} at position {}", label, pos))),
            None => Ok(()),
        }
    }
}

impl FromStr for SubstitutionMatrix {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes(), "<string>")
    }
}

fn parse_symbol(tok: &str) -> Option<u8> {
    match tok.as_bytes() {
        [b] if b.is_ascii_graphic() => Some(*b),
        _ => None,
    }
}
