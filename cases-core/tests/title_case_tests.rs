//! End-to-end tests for AP-style title casing

use cases_core::{title_case, ClassifierError, LexicalClassifier, TaggedSpan, TitleCaser};

#[test]
fn test_first_and_last_words_capitalized() {
    assert_eq!(title_case("the quick brown fox"), "The Quick Brown Fox");
}

#[test]
fn test_mixed_case_words_kept() {
    let result = title_case("use macOS now");
    assert!(result.contains("macOS"), "got {result}");
    assert_eq!(result, "Use macOS Now");
}

#[test]
fn test_dotted_words_kept() {
    let result = title_case("visit example.com today");
    assert!(result.contains("example.com"), "got {result}");
    assert_eq!(result, "Visit example.com Today");
}

#[test]
fn test_capitalized_after_sentence_end() {
    assert_eq!(title_case("stop. go now"), "Stop. Go Now");
}

#[test]
fn test_articles_and_short_prepositions() {
    // Position wins over the article rule for the first word
    assert_eq!(title_case("a tale of the city"), "A Tale of the City");
}

#[test]
fn test_smart_quotes_in_output() {
    let result = title_case("He said \"hi\"");
    assert!(result.contains("“hi”"), "got {result}");
    assert!(!result.contains('"'));
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(title_case(""), "");
    assert_eq!(title_case("   \t\n  "), "");
}

#[test]
fn test_whitespace_normalized() {
    assert_eq!(title_case("  gone   with\tthe\nwind  "), "Gone With the Wind");
}

#[test]
fn test_always_lowercase_words() {
    assert_eq!(title_case("this is how to win"), "This is How to Win");
}

#[test]
fn test_long_prepositions_capitalized() {
    assert_eq!(title_case("a walk through the park"), "A Walk Through the Park");
    assert_eq!(title_case("life without limits"), "Life Without Limits");
}

#[test]
fn test_short_conjunctions_lowercased() {
    assert_eq!(title_case("salt and pepper or sugar"), "Salt and Pepper or Sugar");
}

#[test]
fn test_last_word_preposition_capitalized() {
    assert_eq!(title_case("what it is made of"), "What It is Made Of");
}

#[test]
fn test_hyphenated_words() {
    assert_eq!(
        title_case("a well-known state-of-the-art tool"),
        "A Well-Known State-Of-The-Art Tool"
    );
}

#[test]
fn test_interior_quote_capitalization_is_literal() {
    // The quotation mark is the first character, the word after it is
    // lowercased with the rest
    assert_eq!(title_case("she said \"wow\" loudly"), "She Said “wow” Loudly");
    // An inner capital still protects the quoted word
    assert_eq!(title_case("she said \"WOW\" loudly"), "She Said “WOW” Loudly");
}

#[test]
fn test_contractions_use_right_quote() {
    assert_eq!(title_case("don't stop believing"), "Don’t Stop Believing");
}

#[test]
fn test_all_caps_input() {
    assert_eq!(title_case("THE LORD OF THE RINGS"), "The Lord of the Rings");
}

#[test]
fn test_all_caps_acronym_in_mixed_input_kept() {
    assert_eq!(title_case("the NASA report"), "The NASA Report");
}

#[test]
fn test_question_and_exclamation_restart() {
    assert_eq!(title_case("why? the answer! of course"), "Why? The Answer! Of Course");
}

#[test]
fn test_single_word() {
    assert_eq!(title_case("of"), "Of");
    assert_eq!(title_case("THE"), "The");
    assert_eq!(title_case("iPhone"), "iPhone");
}

#[test]
fn test_unavailable_classifier_still_converts() {
    struct Offline;

    impl LexicalClassifier for Offline {
        fn classify<'a>(&self, _text: &'a str) -> Result<Vec<TaggedSpan<'a>>, ClassifierError> {
            Err(ClassifierError::Unavailable("tagger offline".to_string()))
        }
    }

    let caser = TitleCaser::builder().classifier(Offline).build();
    // "of" is no longer known to be a preposition; articles still apply
    assert_eq!(caser.title_case("a tale of the city"), "A Tale Of the City");
}

#[test]
fn test_caser_shared_across_threads() {
    let caser = std::sync::Arc::new(TitleCaser::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let caser = caser.clone();
            std::thread::spawn(move || caser.title_case("war and peace"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "War and Peace");
    }
}
