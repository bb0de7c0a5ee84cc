//! Random password generation and the shared validity predicate.
//!
//! A valid password is 8 to 12 characters long and contains at least one
//! symbol from [`SYMBOLS`] and at least one digit. The same predicate gates
//! freshly generated passwords and passwords submitted for saving.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::ValidationError;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 12;

const MAX_SYMBOLS: usize = 4;
const MAX_DIGITS: usize = 4;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"@!#$%&()*+";

/// Checks a password against the validity predicate.
///
/// Character classes are checked before length, so a password lacking a
/// symbol reports `MissingSymbol` whatever its length. Length counts
/// characters, not bytes.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if !password.chars().any(is_symbol) {
        return Err(ValidationError::MissingSymbol);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::MissingNumber);
    }
    let length = password.chars().count();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(ValidationError::InvalidLength);
    }
    Ok(())
}

fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOLS.contains(&(c as u8))
}

/// Generates a password using the thread-local RNG.
pub fn generate() -> Result<String, ValidationError> {
    generate_with(&mut rand::rng())
}

/// Generates a password from the given RNG.
///
/// The length is drawn from `[8, 12]`, then between one and four symbols,
/// then between one and four digits, leaving at least one letter. The
/// groups are drawn with replacement, shuffled together, and the result is
/// re-checked with [`validate_password`].
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Result<String, ValidationError> {
    let total = rng.random_range(MIN_LENGTH..=MAX_LENGTH);
    let symbols = rng.random_range(1..=MAX_SYMBOLS.min(total - 2));
    let digits = rng.random_range(1..=MAX_DIGITS.min(total - symbols - 1));
    let letters = total - symbols - digits;

    let mut chars = Vec::with_capacity(total);
    draw(rng, LETTERS, letters, &mut chars);
    draw(rng, SYMBOLS, symbols, &mut chars);
    draw(rng, DIGITS, digits, &mut chars);
    chars.shuffle(rng);

    let password: String = chars.into_iter().map(char::from).collect();
    validate_password(&password)?;

    log::debug!(
        "Generated password: {} letters, {} symbols, {} digits",
        letters,
        symbols,
        digits
    );
    Ok(password)
}

fn draw<R: Rng + ?Sized>(rng: &mut R, pool: &[u8], count: usize, out: &mut Vec<u8>) {
    for _ in 0..count {
        if let Some(&c) = pool.choose(rng) {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_passwords_always_valid() {
        for _ in 0..1000 {
            let password = generate().expect("generation should succeed");
            let length = password.chars().count();
            assert!((MIN_LENGTH..=MAX_LENGTH).contains(&length), "{}", password);
            assert!(password.bytes().any(|b| SYMBOLS.contains(&b)), "{}", password);
            assert!(password.bytes().any(|b| b.is_ascii_digit()), "{}", password);
        }
    }

    #[test]
    fn test_generated_characters_come_from_pools() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let password = generate_with(&mut rng).unwrap();
            assert!(password.bytes().all(|b| {
                LETTERS.contains(&b) || DIGITS.contains(&b) || SYMBOLS.contains(&b)
            }));
            assert!(password.bytes().any(|b| LETTERS.contains(&b)));
        }
    }

    #[test]
    fn test_group_sizes_are_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let password = generate_with(&mut rng).unwrap();
            let symbols = password.bytes().filter(|b| SYMBOLS.contains(b)).count();
            let digits = password.bytes().filter(|b| b.is_ascii_digit()).count();
            assert!((1..=MAX_SYMBOLS).contains(&symbols));
            assert!((1..=MAX_DIGITS).contains(&digits));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let first = generate_with(&mut StdRng::seed_from_u64(1234)).unwrap();
        let second = generate_with(&mut StdRng::seed_from_u64(1234)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_length_is_reachable() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; MAX_LENGTH + 1];
        for _ in 0..1000 {
            seen[generate_with(&mut rng).unwrap().len()] = true;
        }
        assert!(seen[MIN_LENGTH..=MAX_LENGTH].iter().all(|&s| s));
    }

    #[test]
    fn test_validate_length() {
        assert_eq!(
            validate_password("short1!"),
            Err(ValidationError::InvalidLength)
        );
        assert_eq!(
            validate_password("waytoolong12!"),
            Err(ValidationError::InvalidLength)
        );
        assert_eq!(validate_password("Abc12345!"), Ok(()));
        assert_eq!(validate_password("abcdef1!"), Ok(()));
        assert_eq!(validate_password("abcdefghi1!x"), Ok(()));
    }

    #[test]
    fn test_validate_missing_symbol() {
        assert_eq!(
            validate_password("NoSymbolHere1"),
            Err(ValidationError::MissingSymbol)
        );
        assert_eq!(
            validate_password("NoSymbol1"),
            Err(ValidationError::MissingSymbol)
        );
        // Symbols outside the fixed set do not count.
        assert_eq!(
            validate_password("abc-def_1"),
            Err(ValidationError::MissingSymbol)
        );
    }

    #[test]
    fn test_validate_missing_number() {
        assert_eq!(
            validate_password("NoDigits!"),
            Err(ValidationError::MissingNumber)
        );
        assert_eq!(validate_password("!"), Err(ValidationError::MissingNumber));
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_password(""), Err(ValidationError::MissingSymbol));
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // Eight characters, more than twelve bytes.
        assert_eq!(validate_password("ééééé1!é"), Ok(()));
    }

    #[test]
    fn test_validate_allows_whitespace() {
        assert_eq!(validate_password("pass 1234!"), Ok(()));
    }
}
