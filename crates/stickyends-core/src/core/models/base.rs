use super::error::SequenceError;

/// Number of symbols in the nucleotide alphabet.
pub const ALPHABET_SIZE: usize = 4;

/// Number of distinct ordered dinucleotides, i.e. the size of every
/// nearest-neighbor table.
pub const PAIR_STEP_COUNT: usize = ALPHABET_SIZE * ALPHABET_SIZE;

pub const A: u8 = 0;
pub const C: u8 = 1;
pub const G: u8 = 2;
pub const T: u8 = 3;

const SYMBOLS: [char; ALPHABET_SIZE] = ['a', 'c', 'g', 't'];

#[inline]
pub fn complement(base: u8) -> u8 {
    3 - base
}

/// Encodes a single nucleotide character (case-insensitive).
pub fn encode_base(symbol: char, position: usize) -> Result<u8, SequenceError> {
    match symbol.to_ascii_lowercase() {
        'a' => Ok(A),
        'c' => Ok(C),
        'g' => Ok(G),
        't' => Ok(T),
        found => Err(SequenceError::InvalidBase { position, found }),
    }
}

pub fn encode(sequence: &str) -> Result<Vec<u8>, SequenceError> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, symbol)| encode_base(symbol, position))
        .collect()
}

pub fn decode(bases: &[u8]) -> String {
    bases.iter().map(|&b| SYMBOLS[b as usize]).collect()
}

/// Index of the ordered dinucleotide `prev`-`next` into a nearest-neighbor table.
#[inline]
pub fn pair_step(prev: u8, next: u8) -> u8 {
    4 * prev + next
}

/// The pair-step of the same dinucleotide read along the complementary strand.
#[inline]
pub fn reverse_pair_step(step: u8) -> u8 {
    4 * (3 - step % 4) + (3 - step / 4)
}

/// First base of a pair-step.
#[inline]
pub fn step_head(step: u8) -> u8 {
    step / 4
}

/// Second base of a pair-step.
#[inline]
pub fn step_tail(step: u8) -> u8 {
    step % 4
}

pub fn pair_steps(bases: &[u8]) -> Vec<u8> {
    bases.windows(2).map(|w| pair_step(w[0], w[1])).collect()
}

pub fn reverse_complement(bases: &[u8]) -> Vec<u8> {
    bases.iter().rev().map(|&b| complement(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_accepts_mixed_case() {
        assert_eq!(encode("AcGt").unwrap(), vec![A, C, G, T]);
    }

    #[test]
    fn encode_reports_position_of_invalid_symbol() {
        let err = encode("acnt").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidBase {
                position: 2,
                found: 'n'
            }
        );
    }

    #[test]
    fn decode_inverts_encode() {
        assert_eq!(decode(&encode("gattaca").unwrap()), "gattaca");
    }

    #[test]
    fn complement_pairs_a_with_t_and_c_with_g() {
        assert_eq!(complement(A), T);
        assert_eq!(complement(C), G);
        assert_eq!(complement(G), C);
        assert_eq!(complement(T), A);
    }

    #[test]
    fn pair_steps_cover_every_adjacent_window() {
        let seq = encode("gatc").unwrap();
        assert_eq!(pair_steps(&seq), vec![8, 3, 13]);
        assert!(pair_steps(&[A]).is_empty());
    }

    #[test]
    fn reverse_pair_step_matches_steps_of_reverse_complement() {
        let seq = encode("gattacca").unwrap();
        let forward = pair_steps(&seq);
        let reverse = pair_steps(&reverse_complement(&seq));
        let mapped: Vec<u8> = forward.iter().rev().map(|&s| reverse_pair_step(s)).collect();
        assert_eq!(mapped, reverse);
    }

    #[test]
    fn reverse_pair_step_is_an_involution() {
        for step in 0..PAIR_STEP_COUNT as u8 {
            assert_eq!(reverse_pair_step(reverse_pair_step(step)), step);
        }
    }

    #[test]
    fn step_head_and_tail_split_a_pair_step() {
        let step = pair_step(G, T);
        assert_eq!(step_head(step), G);
        assert_eq!(step_tail(step), T);
    }
}
