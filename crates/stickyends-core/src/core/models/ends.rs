use super::base::{self, complement};
use super::error::SequenceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shortest sequence the scorers accept: one pair-step.
pub const MIN_SEQUENCE_LENGTH: usize = 2;

/// Which side of a sticky end carries the adjacent (tile-bound) base.
///
/// `DT` rows are stored as `[adjacent base] + sticky end`, `TD` rows as
/// `sticky end + [adjacent base]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EndType {
    DT,
    TD,
}

impl fmt::Display for EndType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndType::DT => write!(f, "DT"),
            EndType::TD => write!(f, "TD"),
        }
    }
}

impl FromStr for EndType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DT" => Ok(EndType::DT),
            "TD" => Ok(EndType::TD),
            _ => Err(format!("Unknown end type '{}'. Expected 'DT' or 'TD'.", s)),
        }
    }
}

/// An immutable batch of equal-length encoded sequences sharing one end type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndArray {
    end_type: EndType,
    width: usize,
    bases: Vec<u8>,
}

impl EndArray {
    pub fn new(end_type: EndType, rows: Vec<Vec<u8>>) -> Result<Self, SequenceError> {
        let width = rows.first().ok_or(SequenceError::EmptyBatch)?.len();
        if width < MIN_SEQUENCE_LENGTH {
            return Err(SequenceError::TooShort {
                minimum: MIN_SEQUENCE_LENGTH,
                found: width,
            });
        }

        let mut bases = Vec::with_capacity(rows.len() * width);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(SequenceError::RaggedBatch {
                    index,
                    expected: width,
                    found: row.len(),
                });
            }
            bases.extend(row);
        }

        Ok(Self {
            end_type,
            width,
            bases,
        })
    }

    pub fn from_strs<S: AsRef<str>>(end_type: EndType, seqs: &[S]) -> Result<Self, SequenceError> {
        let rows = seqs
            .iter()
            .map(|s| base::encode(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(end_type, rows)
    }

    pub fn single(end_type: EndType, seq: &str) -> Result<Self, SequenceError> {
        Self::from_strs(end_type, &[seq])
    }

    #[inline]
    pub fn end_type(&self) -> EndType {
        self.end_type
    }

    /// Number of sequences in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.bases.len() / self.width
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Length of every sequence in the batch, adjacent base included.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.width)
    }

    #[inline]
    pub fn row(&self, index: usize) -> &[u8] {
        &self.bases[index * self.width..(index + 1) * self.width]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> {
        self.bases.chunks_exact(self.width)
    }

    pub fn revcomp(&self) -> Self {
        let bases = self
            .rows()
            .flat_map(|row| base::reverse_complement(row))
            .collect();
        Self {
            end_type: self.end_type,
            width: self.width,
            bases,
        }
    }

    /// Repeats a single-sequence batch `count` times.
    pub fn repeat(&self, count: usize) -> Result<Self, SequenceError> {
        if self.len() != 1 {
            return Err(SequenceError::NotBroadcastable { rows: self.len() });
        }
        Ok(Self {
            end_type: self.end_type,
            width: self.width,
            bases: self.bases.repeat(count),
        })
    }

    /// Joins each end with its fully complementary partner into the top strand
    /// of the complete junction, both adjacent base pairs included.
    pub fn duplex_with(&self, partner: &EndArray) -> Result<Self, SequenceError> {
        if self.end_type != partner.end_type {
            return Err(SequenceError::MixedEndTypes {
                left: self.end_type,
                right: partner.end_type,
            });
        }
        if self.shape() != partner.shape() {
            return Err(SequenceError::ShapeMismatch {
                left: self.shape(),
                right: partner.shape(),
            });
        }

        let last = self.width - 1;
        let mut bases = Vec::with_capacity(self.len() * (self.width + 1));
        for (index, (own, other)) in self.rows().zip(partner.rows()).enumerate() {
            let (own_end, other_end) = match self.end_type {
                EndType::DT => (&own[1..], &other[1..]),
                EndType::TD => (&own[..last], &other[..last]),
            };
            if base::reverse_complement(own_end) != other_end {
                return Err(SequenceError::NotComplementary { index });
            }
            match self.end_type {
                EndType::DT => {
                    bases.extend_from_slice(own);
                    bases.push(complement(other[0]));
                }
                EndType::TD => {
                    bases.push(complement(other[last]));
                    bases.extend_from_slice(own);
                }
            }
        }

        Ok(Self {
            end_type: self.end_type,
            width: self.width + 1,
            bases,
        })
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.rows().map(base::decode).collect()
    }
}
