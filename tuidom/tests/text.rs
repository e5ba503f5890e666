use tuidom::text::{char_width, display_width, truncate_to_width, wrap_words};

#[test]
fn test_display_width() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("a日b"), 4);
    assert_eq!(char_width('▲'), 1);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello world", 6), "hello…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_wrap_words_greedy() {
    let lines = wrap_words("the quick brown fox jumps", 10);
    assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    for line in &lines {
        assert!(display_width(line) <= 10);
    }
}

#[test]
fn test_wrap_long_word_is_split() {
    let lines = wrap_words("abcdefghij xy", 4);
    assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
}

#[test]
fn test_wrap_long_word_tail_joins_next_word() {
    let lines = wrap_words("abcdef g", 4);
    assert_eq!(lines, vec!["abcd", "ef g"]);
}

#[test]
fn test_wrap_keeps_paragraphs() {
    assert_eq!(wrap_words("a\n\nb", 5), vec!["a", "", "b"]);
}

#[test]
fn test_wrap_zero_width() {
    assert!(wrap_words("anything", 0).is_empty());
    assert_eq!(wrap_words("", 5), vec![""]);
}
