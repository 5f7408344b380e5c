/*! End-to-end tests.*/
use itertools::Itertools;
use pretty_assertions::assert_eq;

use crate::nfa::Nfa;
use crate::{regex_match, Error, Flag, Flags, Regex, SyntaxError};

macro_rules! test_match {
    ($pattern:expr, $input:expr, $expected:expr) => {{
        let re = crate::Regex::new($pattern).unwrap_or_else(|err| {
            panic!("\n\n`{}` should compile, but it failed: {}", $pattern, err)
        });
        assert_eq!(
            re.is_match($input),
            $expected,
            "\n\n`{}` should be {} for `{}`, but it is {}",
            $pattern,
            $expected,
            $input,
            !$expected
        );
        if let Ok(nfa) = crate::nfa::Nfa::new(re.ast()) {
            assert_eq!(
                nfa.is_match($input),
                $expected,
                "\n\nNFA for `{}` should be {} for `{}`, but it is {}",
                $pattern,
                $expected,
                $input,
                !$expected
            );
        }
    }};
}

macro_rules! match_true {
    ($pattern:expr, $input:expr) => {{
        test_match!($pattern, $input, true);
    }};
}

macro_rules! match_false {
    ($pattern:expr, $input:expr) => {{
        test_match!($pattern, $input, false);
    }};
}

macro_rules! syntax_error {
    ($pattern:expr) => {{
        match crate::Regex::new($pattern) {
            Err(crate::Error::Syntax(_)) => {}
            Err(err) => panic!(
                "\n\n`{}` should be a syntax error, but it is: {}",
                $pattern, err
            ),
            Ok(_) => panic!(
                "\n\n`{}` should be a syntax error, but it compiled",
                $pattern
            ),
        }
    }};
}

#[test]
fn literals() {
    for s in ["a", "abc", "hello world", "x{y}z]", "a]-", "añb", "1+1=2"] {
        match_true!(s, s);
        match_false!(s, &format!("{}x", s));
        match_false!(s, &s[..s.len() - 1]);
    }

    match_true!("", "");
    match_false!("", "a");
    match_false!("b", "abc");
}

#[test]
fn any_char() {
    match_true!("a.c", "abc");
    match_true!("a.c", "a.c");
    match_true!("a.c", "a c");
    match_true!("a.c", "añc");
    match_false!("a.c", "ac");
    match_false!("a.c", "abbc");
    match_false!("a.c", "abd");
    match_false!("a.c", "abcd");
    match_true!("...", "xyz");
    match_false!("...", "xy");
}

#[test]
fn zero_or_more() {
    match_true!("a*", "");
    match_true!("a*", "a");
    match_true!("a*", "aaaaaaaa");
    match_false!("a*", "aab");
    match_false!("a*", "b");

    match_true!("ab*c", "ac");
    match_true!("ab*c", "abbbc");
    match_false!("ab*c", "abbb");

    match_true!(".*", "");
    match_true!(".*", "anything at all");
    match_true!(".*x", "xxx");
    match_false!(".*x", "xxa");

    match_true!("a*a", "a");
    match_true!("a*a", "aaaa");
    match_false!("a*a", "");
    match_true!("a*ab*b", "ab");
    match_true!("a*ab*b", "aaabbb");
    match_false!("a*ab*b", "aaa");

    match_true!(".*.*.*", "abc");
    match_true!("a.*b.*c", "a--b--c");
    match_false!("a.*b.*c", "a--c--b");
}

#[test]
fn anchors() {
    match_true!("^abc$", "abc");
    match_false!("^abc$", "abcd");
    match_true!("^abcdef$", "abcdef");
    match_false!("^abcdef$", "^abcdef");
    match_false!("^abcdef$", "abcdef$");
    match_true!("^", "");
    match_true!("$", "");
    match_true!("^$", "");
    match_false!("^$", "a");
    match_true!("^a*$", "aaa");

    // Escaped anchors are literals.
    match_true!(r"^\^\^\$\$$", "^^$$");
    match_false!(r"^\^\^\$\$$", "");
    match_true!(r"\.\*\\", r".*\");
    match_false!(r"\.\*\\", r"ab\");
}

#[test]
fn brace_quantifiers() {
    for k in 0..=20 {
        let input = "a".repeat(k);

        test_match!(r"a\{10\}", &input, k == 10);
        test_match!(r"a\{10,\}", &input, k >= 10);
        test_match!(r"a\{5,10\}", &input, (5..=10).contains(&k));
        test_match!(r"a\{0,1\}", &input, k <= 1);
        test_match!(r"a\{0\}", &input, k == 0);
        test_match!(r"a\{2,2\}", &input, k == 2);
    }

    match_true!(r".\{3\}", "a-c");
    match_false!(r".\{3\}", "a-cd");
    match_true!(r"a\{2\}b\{1,2\}c\{0,\}", "aab");
    match_true!(r"a\{2\}b\{1,2\}c\{0,\}", "aabbccc");
    match_false!(r"a\{2\}b\{1,2\}c\{0,\}", "abbccc");
    match_true!(r"a\{2,\}a", "aaa");
    match_false!(r"a\{2,\}a", "aa");
}

#[test]
fn bracket_expressions() {
    match_true!("[abc]", "b");
    match_false!("[abc]", "d");
    match_false!("[abc]", "ab");
    match_true!("[^abc]", "d");
    match_false!("[^abc]", "a");
    match_false!("[^abc]", "");
    match_true!("[^abc]", "ñ");

    match_true!("[abc]*", "abcabc");
    match_true!("[abc]*", "");
    match_false!("[abc]*", "g");
    match_false!("[abc]*", "abcg");
    match_true!("[^abc]*", "XYZ");
    match_false!("[^abc]*", "a");
    match_false!("[^abc]*", "XaZ");

    match_true!("[a-z]*", "");
    match_true!("[a-z]*", "hello");
    match_false!("[a-z]*", "Hello");
    match_true!("[a-cx-z]*", "abxyz");
    match_false!("[a-cx-z]*", "abd");

    match_true!("[[:digit:]]*", "0123456789");
    match_false!("[[:digit:]]*", "12a");
    match_true!("[[:upper:][:digit:]_]*", "FOO_42");
    match_false!("[[:upper:][:digit:]_]*", "Foo");

    // Characters that are special outside brackets are literals inside.
    match_true!("[.*^$]*", ".*^$");
    match_false!("[.*^$]*", "a");

    // `]` and `-` as literals.
    match_true!("[]a]", "]");
    match_true!("[^]a]", "b");
    match_false!("[^]a]", "]");
    match_true!("[a-]", "-");
    match_true!("[-a]", "-");
    match_true!("[%--]", ",");
    match_true!(r"[\]]", "]");

    match_true!("[[=e=]]", "e");
    match_false!("[[=e=]]", "é");
    match_true!("[[]", "[");
}

#[test]
fn posix_classes() {
    fn is_space(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
    }

    let classes: Vec<(&str, fn(char) -> bool)> = vec![
        ("alpha", |c| c.is_ascii_alphabetic()),
        ("digit", |c| c.is_ascii_digit()),
        ("alnum", |c| c.is_ascii_alphanumeric()),
        ("upper", |c| c.is_ascii_uppercase()),
        ("lower", |c| c.is_ascii_lowercase()),
        ("xdigit", |c| c.is_ascii_hexdigit()),
        ("punct", |c| c.is_ascii_punctuation()),
        ("blank", |c| c == ' ' || c == '\t'),
        ("space", is_space),
        ("cntrl", |c| (c as u32) < 0x20),
        ("graph", |c| c.is_ascii_graphic()),
        ("print", |c| c.is_ascii_graphic() || c == ' '),
        ("word", |c| c.is_ascii_alphanumeric() || c == '_'),
    ];

    for (name, predicate) in classes {
        let re = Regex::new(&format!("[[:{}:]]", name)).unwrap();
        let negated = Regex::new(&format!("[^[:{}:]]", name)).unwrap();

        for c in (0_u8..=0x7f).map(char::from).chain(['é', 'ß', '€']) {
            let input = c.to_string();
            assert_eq!(
                re.is_match(&input),
                predicate(c),
                "`[[:{}:]]` on {:?}",
                name,
                c
            );
            assert_eq!(
                negated.is_match(&input),
                !predicate(c),
                "`[^[:{}:]]` on {:?}",
                name,
                c
            );
        }
    }
}

#[test]
fn syntax_errors() {
    syntax_error!("*a");
    syntax_error!("a**");
    syntax_error!(r"a\{2\}*");
    syntax_error!(r"a*\{2\}");
    syntax_error!("a^b");
    syntax_error!("a$b");
    syntax_error!("[abc");
    syntax_error!("[z-a]");
    syntax_error!(r"a\{2");
    syntax_error!(r"a\{2,1\}");
    syntax_error!(r"a\{,2\}");
    syntax_error!(r"a\{02\}");
    syntax_error!(r"a\}");
    syntax_error!(r"\q");
    syntax_error!("ab\\");
    syntax_error!("[[:foo:]]");
    syntax_error!("[[.ch.]]");
    syntax_error!("a[.xy.]");
    syntax_error!("[.ab.]*");
}

#[test]
fn long_patterns() {
    let pattern = "a".repeat(100_000);
    let re = Regex::new(&pattern).unwrap();

    assert!(re.is_match(&pattern));
    assert!(!re.is_match(&pattern[1..]));
    assert!(!re.is_match(&format!("{}a", pattern)));

    let pattern = format!("^{}$", "[ab].".repeat(20_000));
    let re = Regex::new(&pattern).unwrap();

    assert!(re.is_match(&"a-b+".repeat(10_000)));
    assert!(!re.is_match(&"a-c+".repeat(10_000)));
    assert!(!re.is_match(&"a-b+".repeat(9_999)));
}

#[test]
fn regex_api() {
    let re = Regex::new(r"[[:alpha:]]\{2\}").unwrap();

    assert_eq!(re.as_str(), r"[[:alpha:]]\{2\}");
    assert_eq!(re.to_string(), r"[[:alpha:]]\{2\}");
    assert_eq!(format!("{:?}", re), r#"Regex("[[:alpha:]]\\{2\\}")"#);
    assert!(!re.program().is_empty());
    assert!(re.is_match_chars(&['x', 'y']));
    assert!(!re.is_match_chars(&['x']));

    assert!(matches!(re.flags().grammar(), Some(Flag::Basic)));

    let mut flags = Flags::basic();
    flags.set(Flag::ICase);
    let re = Regex::with_flags("abc", flags).unwrap();
    assert!(re.flags().contains(Flag::ICase));
    // Flags are stored, but matching is always case sensitive.
    assert!(!re.is_match("ABC"));

    // Patterns can be given as slices of characters.
    let pattern = ['a', '.', 'c'];
    let re = Regex::new(pattern.as_slice()).unwrap();
    assert!(re.is_match("abc"));
    assert_eq!(re.as_str(), "a.c");
}

#[test]
fn regex_match_fn() {
    assert_eq!(regex_match("ab*", "abbb"), Ok(true));
    assert_eq!(regex_match("ab*", "abc"), Ok(false));

    let err = regex_match("a$b", "ab").unwrap_err();
    assert!(matches!(
        err,
        Error::Syntax(SyntaxError::MisplacedAnchor { anchor: '$', .. })
    ));
    assert_eq!(
        err.to_string(),
        "anchor `$` at [1..2] is only allowed at the end of the pattern"
    );
}

#[test]
fn shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Regex>();
    assert_send_sync::<Nfa>();

    let re = Regex::new("[0-9]*").unwrap();

    std::thread::scope(|s| {
        for i in 0..4 {
            let re = &re;
            s.spawn(move || {
                assert!(re.is_match(&i.to_string().repeat(100)));
                assert!(!re.is_match("x"));
            });
        }
    });
}

/// The backtracking executor and the NFA must agree on every pattern made
/// of up to two atoms, for every input of up to four characters over a
/// small alphabet.
#[test]
fn engines_agree() {
    let atoms = ["a", "b", ".", "[ab]"];
    let quantifiers = ["", "*", r"\{1,\}", r"\{0,1\}", r"\{1,2\}", r"\{2\}"];

    let pieces = atoms
        .iter()
        .cartesian_product(quantifiers.iter())
        .map(|(atom, quantifier)| format!("{}{}", atom, quantifier))
        .collect::<Vec<_>>();

    let mut inputs = vec![String::new()];
    let mut longest = inputs.clone();

    for _ in 0..4 {
        longest = longest
            .iter()
            .flat_map(|s| ['a', 'b', 'c'].map(|c| format!("{}{}", s, c)))
            .collect();
        inputs.extend(longest.iter().cloned());
    }

    let patterns = (1..=2)
        .flat_map(|len| {
            (0..len)
                .map(|_| pieces.iter())
                .multi_cartesian_product()
                .map(|pieces| pieces.into_iter().join(""))
        })
        .flat_map(|p| [p.clone(), format!("^{}$", p)]);

    for pattern in patterns {
        let re = Regex::new(&pattern).unwrap();
        let nfa = Nfa::new(re.ast()).unwrap();

        for input in &inputs {
            assert_eq!(
                re.is_match(input),
                nfa.is_match(input),
                "engines disagree on `{}` for `{}`",
                pattern,
                input
            );
        }
    }
}
