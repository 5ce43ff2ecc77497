//! Random board generation from physical dice sets or letter frequencies.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Tile};
use crate::error::BoardError;

/// The 16 classic dice (1992 edition)
pub const CLASSIC: [&str; 16] = [
    "LRYTTE", "VTHRWE", "EGHWNE", "SEOTIS", "ANAEEG", "IDSYTT", "OATTOW", "MTOICU", "AFPKFS",
    "XLDERI", "HCPOAS", "ENSIEU", "YLDEVR", "ZNRNHL", "NMIQHU", "OBBAOJ",
];

/// The 16 classic dice (1983 edition)
pub const CLASSIC_1983: [&str; 16] = [
    "AACIOT", "ABILTY", "ABJMOQ", "ACDEMP", "ACELRS", "ADENVZ", "AHMORS", "BIFORX", "DENOSW",
    "DKNOTU", "EEFHIY", "EGINTV", "EGKLUY", "EHINPS", "ELPSTU", "GILRUW",
];

/// The 25 Boggle Master / Deluxe dice
pub const MASTER: [&str; 25] = [
    "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM", "AEEGMU", "AEGMNN", "AFIRSY", "BJKQXZ",
    "CCNSTW", "CEIILT", "CEILPT", "CEIPST", "DDLNOR", "DHHLOR", "DHHNOT", "DHLNOR", "EIIITT",
    "EMOTTT", "ENSSSU", "FIPRSY", "GORRVW", "HIPRRY", "NOOTUW", "OOOTTU",
];

/// The 25 Big Boggle dice
pub const BIG: [&str; 25] = [
    "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM", "AEEGMU", "AEGMNN", "AFIRSY", "BJKQXZ",
    "CCENST", "CEIILT", "CEILPT", "CEIPST", "DDHNOT", "DHHLOR", "DHLNOR", "DHLNOR", "EIIITT",
    "EMOTTT", "ENSSSU", "FIPRSY", "GORRVW", "IPRRRY", "NOOTUW", "OOOTTU",
];

/// Relative frequency of each letter A-Z in English text
pub const FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12703, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// A named set of dice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceSet {
    Classic,
    Classic1983,
    Master,
    Big,
}

impl DiceSet {
    pub fn dice(self) -> &'static [&'static str] {
        match self {
            DiceSet::Classic => &CLASSIC,
            DiceSet::Classic1983 => &CLASSIC_1983,
            DiceSet::Master => &MASTER,
            DiceSet::Big => &BIG,
        }
    }

    /// Side length of the square board this set fills
    pub fn side(self) -> usize {
        match self {
            DiceSet::Classic | DiceSet::Classic1983 => 4,
            DiceSet::Master | DiceSet::Big => 5,
        }
    }
}

impl Board {
    /// Shake the dice into the tray: shuffle the dice, then roll one face each.
    pub fn roll<R: Rng + ?Sized>(set: DiceSet, rng: &mut R) -> Board {
        let mut dice = set.dice().to_vec();
        dice.shuffle(rng);

        let side = set.side();
        let grid = dice
            .chunks(side)
            .map(|row| row.iter().map(|die| roll_die(die, rng)).collect())
            .collect();

        // Every dice set is a full square of valid letters
        match Board::new(grid) {
            Ok(board) => board,
            Err(e) => unreachable!("dice set {:?} produced an invalid board: {}", set, e),
        }
    }

    /// Draw each tile independently from English letter frequencies
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Board, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyGrid);
        }
        let grid = (0..rows)
            .map(|_| (0..cols).map(|_| weighted_letter(rng)).collect())
            .collect();
        Board::new(grid)
    }
}

fn roll_die<R: Rng + ?Sized>(faces: &str, rng: &mut R) -> Tile {
    let face = faces.as_bytes()[rng.gen_range(0..faces.len())];
    Tile::new(face as char).unwrap_or(Tile::QU)
}

fn weighted_letter<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    let total: f64 = FREQUENCIES.iter().sum();
    let target = rng.gen_range(0.0..total);
    let mut sum = 0.0;
    for (i, &freq) in FREQUENCIES.iter().enumerate() {
        sum += freq;
        if sum > target {
            return Tile::new((b'A' + i as u8) as char).unwrap_or(Tile::QU);
        }
    }
    // Rounding can leave `target` just past the last cumulative sum
    Tile::new('Z').unwrap_or(Tile::QU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dice_sets_are_valid() {
        for set in [DiceSet::Classic, DiceSet::Classic1983, DiceSet::Master, DiceSet::Big] {
            assert_eq!(set.dice().len(), set.side() * set.side());
            for die in set.dice() {
                assert_eq!(die.len(), 6);
                assert!(die.chars().all(|c| c.is_ascii_uppercase()));
            }
        }
    }

    #[test]
    fn test_roll_faces_come_from_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::roll(DiceSet::Classic, &mut rng);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 4);

        for tile in board.tiles() {
            assert!(CLASSIC.iter().any(|die| die.contains(tile.letter())));
        }
    }

    #[test]
    fn test_roll_is_reproducible() {
        let a = Board::roll(DiceSet::Big, &mut StdRng::seed_from_u64(42));
        let b = Board::roll(DiceSet::Big, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.rows(), 5);
    }

    #[test]
    fn test_random_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::random(3, 7, &mut rng).unwrap();
        assert_eq!(board.len(), 21);
        assert_eq!(Board::random(0, 3, &mut rng).unwrap_err(), BoardError::EmptyGrid);
    }
}
