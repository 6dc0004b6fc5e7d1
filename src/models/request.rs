use crate::services::generator::GenerationError;
use std::fmt;

/// Uppercase ASCII letters
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase ASCII letters
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// ASCII digits
pub const DIGITS: &str = "0123456789";

/// The 32 ASCII punctuation characters
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// A character class that can be requested for a password.
///
/// The declaration order is the fixed class-priority order used when
/// building the alphabet and when seeding one character per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes in priority order
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// Canonical alphabet for this class
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Check whether `c` belongs to this class's alphabet
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// Parameters for a single password generation.
///
/// A plain value consumed once by the generator. Validation of the
/// length/class combination happens in
/// [`generate`](crate::services::generator::generate) so that a request can be
/// assembled field by field from prompt answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub shuffle: bool,
}

impl GenerationRequest {
    /// Request with every class selected and shuffling enabled
    pub fn new(length: usize) -> Self {
        Self {
            length,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            shuffle: true,
        }
    }

    /// Build a request from a length typed by a user, which may be negative.
    ///
    /// Zero and negative values are rejected with
    /// [`GenerationError::InvalidLength`].
    pub fn with_signed_length(length: i64) -> Result<Self, GenerationError> {
        match usize::try_from(length) {
            Ok(len) if len > 0 => Ok(Self::new(len)),
            _ => Err(GenerationError::InvalidLength(length)),
        }
    }

    pub fn uppercase(mut self, enabled: bool) -> Self {
        self.uppercase = enabled;
        self
    }

    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    pub fn digits(mut self, enabled: bool) -> Self {
        self.digits = enabled;
        self
    }

    pub fn symbols(mut self, enabled: bool) -> Self {
        self.symbols = enabled;
        self
    }

    pub fn shuffle(mut self, enabled: bool) -> Self {
        self.shuffle = enabled;
        self
    }

    /// Check whether a class is selected
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    /// Selected classes in priority order
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    /// Concatenation of the selected alphabets in priority order
    pub fn alphabet(&self) -> String {
        self.selected_classes()
            .into_iter()
            .map(CharacterClass::alphabet)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_set_is_ascii_punctuation() {
        assert_eq!(SYMBOLS.len(), 32);
        assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));

        let expected: String = (0u8..=127)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        assert_eq!(SYMBOLS, expected);
    }

    #[test]
    fn test_new_selects_everything() {
        let request = GenerationRequest::new(12);
        assert_eq!(request.length, 12);
        assert_eq!(request.selected_classes(), CharacterClass::ALL.to_vec());
        assert!(request.shuffle);
    }

    #[test]
    fn test_alphabet_follows_class_order() {
        let request = GenerationRequest::new(8).uppercase(false).digits(false);
        assert_eq!(request.alphabet(), format!("{}{}", LOWERCASE, SYMBOLS));

        let request = GenerationRequest::new(8);
        assert!(request.alphabet().starts_with('A'));
        assert!(request.alphabet().ends_with('~'));
        assert_eq!(request.alphabet().len(), 26 + 26 + 10 + 32);
    }

    #[test]
    fn test_signed_length_rejects_non_positive() {
        assert!(matches!(
            GenerationRequest::with_signed_length(0),
            Err(GenerationError::InvalidLength(0))
        ));
        assert!(matches!(
            GenerationRequest::with_signed_length(-5),
            Err(GenerationError::InvalidLength(-5))
        ));
        assert_eq!(GenerationRequest::with_signed_length(3).unwrap().length, 3);
    }

    #[test]
    fn test_class_membership() {
        assert!(CharacterClass::Uppercase.contains('Q'));
        assert!(!CharacterClass::Uppercase.contains('q'));
        assert!(CharacterClass::Digits.contains('7'));
        assert!(CharacterClass::Symbols.contains('\\'));
        assert!(!CharacterClass::Symbols.contains(' '));
    }
}
