use std::{sync::Arc, thread};
use swear_filter::{Filter, FilterBuilder, Normalizations, WHITESPACE_SENTINEL};

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

#[test]
fn empty_filter_finds_nothing() {
    let filter = Filter::new(true, Vec::<String>::new());

    for text in &["", " ", "hello", "h3ll0", "\u{200b}"] {
        assert!(filter.check(text).is_empty());
    }
}

#[test]
fn case_insensitive() {
    let filter = Filter::new(true, &["hello", "farty"]);

    for text in &["hello", "h3ll0", "pharty", "h e l l o", "cafè"] {
        assert_eq!(
            sorted(filter.check(text)),
            sorted(filter.check(&text.to_uppercase()))
        );
    }

    // A final `Σ` must not lower-case to the word-final form `ς`.
    let filter = Filter::new(false, &["οδοσ"]);
    assert_eq!(filter.check("οδοσ"), vec!["οδοσ"]);
    assert_eq!(filter.check(&"οδοσ".to_uppercase()), vec!["οδοσ"]);

    let mut filter = Filter::new(false, &["οδοσ"]);
    filter.normalizations.remove(Normalizations::LEET_SPEAK);
    assert_eq!(filter.check("ΟΔΟΣ"), vec!["οδοσ"]);
}

#[test]
fn leet_speak() {
    let filter = Filter::new(false, &["hello"]);

    assert_eq!(filter.check("h3ll0"), vec!["hello"]);
}

#[test]
fn multi_character_leet_precedence() {
    let filter = Filter::new(false, &["farty"]);

    assert_eq!(filter.check("pharty"), vec!["farty"]);
}

#[test]
fn ambiguous_leet() {
    let filter = Filter::new(false, &["hello"]);

    assert_eq!(filter.check("h3||o"), vec!["hello"]);
}

#[test]
fn ambiguous_leet_is_not_cross_product() {
    // Differing ambiguous symbols are expanded one at a time, so "kill" cannot be formed from
    // both `!` and `1` at once.
    let filter = Filter::new(false, &["kill", "ki11"]);

    assert_eq!(filter.check("k!11"), vec!["ki11"]);
}

#[test]
fn diacritics() {
    let mut filter = Filter::new(false, &["cafe"]);

    assert_eq!(filter.check("cafè"), vec!["cafe"]);

    filter.normalizations.remove(Normalizations::DIACRITICS);
    assert!(filter.check("cafè").is_empty());
}

#[test]
fn spaced_bypass() {
    let mut filter = Filter::new(true, &["hello"]);

    assert_eq!(filter.check("h e l l o"), vec!["hello"]);

    filter.spaced_bypass = false;
    assert!(filter.check("h e l l o").is_empty());
}

#[test]
fn zero_width_spaces() {
    let mut filter = Filter::new(false, &["hello"]);

    assert_eq!(filter.check("hel\u{200b}lo"), vec!["hello"]);

    filter.normalizations.remove(Normalizations::ZERO_WIDTH);
    assert!(filter.check("hel\u{200b}lo").is_empty());
}

#[test]
fn whitespace_runs_are_removed() {
    // Runs of whitespace are deleted rather than collapsed to one space, so the words on either
    // side are joined. Do not "fix" this.
    let mut filter = Filter::new(false, &["helloworld"]);

    assert_eq!(filter.check("hello   world"), vec!["helloworld"]);
    assert_eq!(filter.check("hello\t\tworld"), vec!["helloworld"]);
    assert!(filter.check("hello world").is_empty());

    filter.normalizations.remove(Normalizations::WHITESPACE);
    assert!(filter.check("hello   world").is_empty());
}

#[test]
fn tabs_become_spaces() {
    let mut filter = Filter::new(false, &["hello world"]);

    assert_eq!(filter.check("hello\tworld"), vec!["hello world"]);

    filter.normalizations.remove(Normalizations::TABS);
    assert!(filter.check("hello\tworld").is_empty());
}

#[test]
fn whitespace_sentinel() {
    let filter = Filter::new(false, &[WHITESPACE_SENTINEL, "foo"]);

    assert_eq!(filter.check("\t \u{200b}\u{3000}\n"), vec![WHITESPACE_SENTINEL]);
    assert!(filter.check(" bar ").is_empty());
    assert_eq!(filter.check(" foo "), vec!["foo"]);
}

#[test]
fn whitespace_sentinel_requires_stripping() {
    let mut filter = Filter::new(false, &[WHITESPACE_SENTINEL]);
    filter.normalizations.remove(Normalizations::ZERO_WIDTH);

    assert!(filter.check("\u{200b}").is_empty());
}

#[test]
fn builder() {
    let filter = FilterBuilder::new()
        .words(&["hello", "world"])
        .spaced_bypass(true)
        .build();

    assert_eq!(
        sorted(filter.check("H 3 L L 0   W0RLD")),
        vec!["hello", "world"]
    );
}

#[test]
fn malformed_bytes() {
    let filter = Filter::new(false, &["foo"]);

    assert!(filter.check_bytes(b"foo\xff").is_err());
    assert_eq!(filter.check_bytes(b"foo").unwrap(), vec!["foo"]);
}

#[test]
fn words_round_trip() {
    let filter = Filter::new(false, &["foo"]);
    filter.add(&["bar", "baz"]);
    filter.delete(&["baz"]);

    assert_eq!(sorted(filter.words()), vec!["bar", "foo"]);
}

#[test]
fn concurrent_access() {
    // Leet speak would rewrite the digits in the generated words.
    let mut filter = Filter::new(false, &["base"]);
    filter.normalizations = Normalizations::empty();
    let filter = Arc::new(filter);

    let handles = (0..8)
        .map(|i| {
            let filter = Arc::clone(&filter);
            thread::spawn(move || {
                for j in 0..100 {
                    let word = format!("word{}x{}", i, j);
                    filter.add(&[&word]);
                    assert!(filter.check(&format!("a {} b", word)).contains(&word));
                    if j % 2 == 0 {
                        filter.delete(&[&word]);
                    }
                    assert!(filter.check("base").contains(&"base".to_owned()));
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(filter.len(), 1 + 8 * 50);
    let words = filter.words();
    for i in 0..8 {
        for j in (1..100).step_by(2) {
            assert!(words.contains(&format!("word{}x{}", i, j)));
        }
    }
}
