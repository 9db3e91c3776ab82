use super::*;

fn accents(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn concat(runs: &[TextRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[test]
fn single_accent_splits_into_three_runs() {
    let runs = highlight_accent_words("Grow revenue by 40%", &accents(&["revenue"]));
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0].text, "Grow ");
    assert!(!runs[0].emphasized);
    assert_eq!(runs[1].text, "revenue");
    assert!(runs[1].emphasized);
    assert_eq!(runs[2].text, " by 40%");
    assert!(!runs[2].emphasized);
    assert_eq!(concat(&runs), "Grow revenue by 40%");
}

#[test]
fn matching_is_case_insensitive_but_preserves_source_casing() {
    let runs = highlight_accent_words("Revenue is up", &accents(&["revenue"]));
    assert_eq!(runs[0].text, "Revenue");
    assert!(runs[0].emphasized);
    assert_eq!(concat(&runs), "Revenue is up");
}

#[test]
fn substrings_inside_longer_words_do_not_match() {
    let runs = highlight_accent_words("Grow revenue by 40%", &accents(&["rev"]));
    assert_eq!(runs.len(), 1);
    assert!(!runs[0].emphasized);
    assert_eq!(runs[0].text, "Grow revenue by 40%");
}

#[test]
fn every_occurrence_is_emphasized() {
    let runs = highlight_accent_words("growth drives growth", &accents(&["growth"]));
    let emphasized: Vec<&str> = runs
        .iter()
        .filter(|r| r.emphasized)
        .map(|r| r.text.as_str())
        .collect();
    assert_eq!(emphasized, vec!["growth", "growth"]);
    assert_eq!(concat(&runs), "growth drives growth");
}

#[test]
fn punctuation_is_a_word_boundary() {
    let runs = highlight_accent_words("Revenue, then margin.", &accents(&["revenue", "margin"]));
    assert_eq!(concat(&runs), "Revenue, then margin.");
    assert!(runs.iter().any(|r| r.emphasized && r.text == "Revenue"));
    assert!(runs.iter().any(|r| r.emphasized && r.text == "margin"));
    assert!(runs.iter().any(|r| !r.emphasized && r.text == ", then "));
}

#[test]
fn accent_at_both_ends_leaves_no_empty_runs() {
    let runs = highlight_accent_words("margin to margin", &accents(&["margin"]));
    assert_eq!(runs.len(), 3);
    assert!(runs.iter().all(|r| !r.text.is_empty()));
    assert_eq!(concat(&runs), "margin to margin");
}

#[test]
fn no_accents_yields_one_plain_run() {
    let runs = highlight_accent_words("plain text", &[]);
    assert_eq!(runs.len(), 1);
    assert!(!runs[0].emphasized);

    let runs = highlight_accent_words("plain text", &accents(&["  ", ""]));
    assert_eq!(runs.len(), 1);
    assert!(!runs[0].emphasized);
}

#[test]
fn empty_text_yields_no_runs() {
    assert!(highlight_accent_words("", &accents(&["x"])).is_empty());
}

#[test]
fn non_ascii_words_match_on_char_boundaries() {
    let runs = highlight_accent_words("Umsatz wächst stark", &accents(&["wächst"]));
    assert_eq!(concat(&runs), "Umsatz wächst stark");
    assert!(runs.iter().any(|r| r.emphasized && r.text == "wächst"));
}
