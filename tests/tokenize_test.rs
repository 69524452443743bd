use email_vocab::Tokenizer;

#[test]
fn test_tokens_are_stemmed() {
    let tokenizer = Tokenizer::new();

    assert_eq!(
        tokenizer.tokenize("dollars mailing numbers running"),
        vec!["dollar", "mail", "number", "run"]
    );
}

#[test]
fn test_residual_symbols_stripped() {
    let tokenizer = Tokenizer::new();

    // Underscores and Unicode punctuation survive the ASCII punctuation
    // pass; the tokenizer drops them per character.
    assert_eq!(tokenizer.tokenize("foo_bar ab\u{2014}cd"), vec!["foobar", "abcd"]);
}

#[test]
fn test_symbol_only_candidates_dropped() {
    let tokenizer = Tokenizer::new();

    assert!(tokenizer.tokenize("\u{2014} \u{00a1} \u{2026}").is_empty());
    assert!(tokenizer.tokenize("").is_empty());
}

#[test]
fn test_no_empty_tokens_and_alphanumeric_only() {
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize("Hello WORLD 42 caf\u{e9} mixed123");

    assert!(!tokens.is_empty());
    for token in &tokens {
        assert!(!token.is_empty());
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "token {token:?} is not lowercase alphanumeric"
        );
    }
}

#[test]
fn test_idempotent_on_stemmed_input() {
    let tokenizer = Tokenizer::new();

    let once = tokenizer.tokenize("contact emailaddr or visit httpaddr time date cost dollar percent number");
    let joined = once.join(" ");
    let twice = tokenizer.tokenize(&joined);

    assert_eq!(once, twice);
}

#[test]
fn test_order_and_duplicates_preserved() {
    let tokenizer = Tokenizer::new();

    assert_eq!(
        tokenizer.tokenize("free offer free offer free"),
        vec!["free", "offer", "free", "offer", "free"]
    );
}

#[test]
fn test_join_resplit_round_trip() {
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize("winning prizes delivered daily");

    let rejoined: Vec<String> = tokens
        .join(" ")
        .split_whitespace()
        .map(str::to_string)
        .collect();

    assert_eq!(tokens, rejoined);
}

#[test]
fn test_joined_form_matches_token_content() {
    let tokenizer = Tokenizer::new();
    let text = "winning prizes delivered daily";

    assert_eq!(tokenizer.tokenize_joined(text), tokenizer.tokenize(text).join(" "));
}
