use email_vocab::{CorpusOptions, Vocabulary, process_directory};
use std::fs;

const GOOD_MESSAGE: &[u8] = b"From: sender@example.com\r\n\
    To: recipient@example.com\r\n\
    Subject: Free dollars\r\n\
    \r\n\
    Free free FREE";

#[test]
fn test_corpus_counts_tokens_across_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("0001.msg"), GOOD_MESSAGE).unwrap();
    fs::write(dir.path().join("0002.msg"), GOOD_MESSAGE).unwrap();

    let report = process_directory(dir.path(), CorpusOptions::default()).unwrap();

    assert_eq!(report.readable, 2);
    assert_eq!(report.unreadable, 0);
    // "Free" once in the subject and three times in each body.
    assert_eq!(report.vocabulary.count("free"), 8);
    assert_eq!(report.vocabulary.count("emailaddr"), 4);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_skipped_and_counted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.msg"), GOOD_MESSAGE).unwrap();
    std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("broken.msg")).unwrap();

    let report = process_directory(dir.path(), CorpusOptions::default()).unwrap();

    assert_eq!(report.readable, 1);
    assert_eq!(report.unreadable, 1);
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].ends_with("broken.msg"));
}

#[test]
fn test_legacy_mode_skips_binary_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("text.msg"), "Plain spam text, act now").unwrap();
    fs::write(dir.path().join("blob.bin"), [0u8, 1, 2, 255]).unwrap();

    let options = CorpusOptions { legacy: true };
    let report = process_directory(dir.path(), options).unwrap();

    assert_eq!(report.readable, 1);
    assert_eq!(report.unreadable, 1);
    assert!(report.vocabulary.count("spam") > 0);
}

#[test]
fn test_subdirectories_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.msg"), GOOD_MESSAGE).unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let report = process_directory(dir.path(), CorpusOptions::default()).unwrap();

    assert_eq!(report.readable, 1);
    assert_eq!(report.unreadable, 0);
}

#[test]
fn test_most_common_is_deterministic() {
    let mut vocab = Vocabulary::new();
    vocab.add_tokens(["b", "a", "b", "c", "a", "b"]);

    assert_eq!(
        vocab.most_common(2),
        vec![("b".to_string(), 3), ("a".to_string(), 2)]
    );
    // Ties break alphabetically.
    let mut tied = Vocabulary::new();
    tied.add_tokens(["z", "y"]);
    assert_eq!(
        tied.most_common(10),
        vec![("y".to_string(), 1), ("z".to_string(), 1)]
    );
}

#[test]
fn test_vocabulary_totals() {
    let mut vocab = Vocabulary::new();
    assert!(vocab.is_empty());

    vocab.add_tokens(["spam", "spam", "ham"]);

    assert_eq!(vocab.total(), 3);
    assert_eq!(vocab.distinct(), 2);
    assert_eq!(vocab.count("spam"), 2);
    assert_eq!(vocab.count("eggs"), 0);
}
