//! Property tests for password generation
//!
//! These tests verify, across random requests:
//! - Output length always equals the requested length
//! - Every selected class is present when the length allows it
//! - No character outside the selected alphabets ever appears
//! - A request without classes always fails, whatever its length or shuffle flag

use passforge::models::{CharacterClass, GenerationRequest};
use passforge::services::{GenerationError, RngSource, generate};
use proptest::prelude::*;

fn request_strategy() -> impl Strategy<Value = GenerationRequest> {
    (
        1usize..128,
        any::<[bool; 4]>().prop_filter("at least one class", |flags| flags.iter().any(|f| *f)),
        any::<bool>(),
    )
        .prop_map(|(length, [upper, lower, digits, symbols], shuffle)| {
            GenerationRequest::new(length)
                .uppercase(upper)
                .lowercase(lower)
                .digits(digits)
                .symbols(symbols)
                .shuffle(shuffle)
        })
}

/// Fewer positions than selected classes, unshuffled
fn short_request_strategy() -> impl Strategy<Value = GenerationRequest> {
    (1usize..4, any::<[bool; 4]>())
        .prop_filter("fewer positions than classes", |(length, flags)| {
            flags.iter().filter(|f| **f).count() > *length
        })
        .prop_map(|(length, [upper, lower, digits, symbols])| {
            GenerationRequest::new(length)
                .uppercase(upper)
                .lowercase(lower)
                .digits(digits)
                .symbols(symbols)
                .shuffle(false)
        })
}

proptest! {
    #[test]
    fn length_matches_request(request in request_strategy(), seed in any::<u64>()) {
        let password = generate(&request, &mut RngSource::seeded(seed)).unwrap();
        prop_assert_eq!(password.chars().count(), request.length);
    }

    #[test]
    fn every_selected_class_present(request in request_strategy(), seed in any::<u64>()) {
        let classes = request.selected_classes();
        prop_assume!(request.length >= classes.len());

        let password = generate(&request, &mut RngSource::seeded(seed)).unwrap();
        for class in classes {
            prop_assert!(
                password.chars().any(|c| class.contains(c)),
                "{} missing from {:?}",
                class,
                password
            );
        }
    }

    #[test]
    fn only_selected_alphabets_used(request in request_strategy(), seed in any::<u64>()) {
        let password = generate(&request, &mut RngSource::seeded(seed)).unwrap();
        for c in password.chars() {
            prop_assert!(
                CharacterClass::ALL
                    .into_iter()
                    .any(|class| request.includes(class) && class.contains(c)),
                "unexpected {:?} in {:?}",
                c,
                password
            );
        }
    }

    #[test]
    fn short_length_keeps_earliest_seeds(request in short_request_strategy(), seed in any::<u64>()) {
        let classes = request.selected_classes();
        let password = generate(&request, &mut RngSource::seeded(seed)).unwrap();

        prop_assert_eq!(password.chars().count(), request.length);
        for (c, class) in password.chars().zip(classes) {
            prop_assert!(class.contains(c));
        }
    }

    #[test]
    fn no_class_always_fails(length in 0usize..64, shuffle in any::<bool>(), seed in any::<u64>()) {
        let request = GenerationRequest::new(length)
            .uppercase(false)
            .lowercase(false)
            .digits(false)
            .symbols(false)
            .shuffle(shuffle);

        prop_assert_eq!(
            generate(&request, &mut RngSource::seeded(seed)),
            Err(GenerationError::NoCharacterClassSelected)
        );
    }
}

#[test]
fn unshuffled_seeds_lead_in_class_order() {
    let request = GenerationRequest::new(40).shuffle(false);
    let password = generate(&request, &mut RngSource::seeded(3)).unwrap();
    let chars: Vec<char> = password.chars().collect();

    assert!(CharacterClass::Uppercase.contains(chars[0]));
    assert!(CharacterClass::Lowercase.contains(chars[1]));
    assert!(CharacterClass::Digits.contains(chars[2]));
    assert!(CharacterClass::Symbols.contains(chars[3]));
}

#[test]
fn zero_length_is_invalid() {
    let request = GenerationRequest::new(0);
    assert_eq!(
        generate(&request, &mut RngSource::os()),
        Err(GenerationError::InvalidLength(0))
    );
}

#[test]
fn single_class_uses_only_that_class() {
    let request = GenerationRequest::new(64)
        .uppercase(false)
        .lowercase(false)
        .symbols(false);
    let password = generate(&request, &mut RngSource::os()).unwrap();

    assert!(password.chars().all(|c| c.is_ascii_digit()));
}
