mod support;

use std::thread;

use cfg_ll::Verdict;
use test_case::test_case;

use support::{analyze, derives, load, strings_up_to, EXPR};

#[test_case("E", EXPR, &['i', '+', '*', '(', ')'], 4 ; "expression")]
#[test_case("S", "S -> aSb|ε", &['a', 'b'], 8 ; "balanced")]
#[test_case("S", "S -> AB\nA -> aA|ε\nB -> bB|c", &['a', 'b', 'c'], 5 ; "optional")]
#[test_case("L", "L -> L,E|E\nE -> x|(L)", &['x', ',', '(', ')'], 5 ; "list")]
#[test_case("S", "S -> abc|abd|ae", &['a', 'b', 'c', 'd', 'e'], 3 ; "nested prefixes")]
fn test_accepts_exactly_derivable_strings(start: &str, text: &str, alphabet: &[char], max_len: usize) {
    let original = load(start, text);
    let analysis = analyze(start, text);
    let parser = analysis.parser().unwrap();
    for input in strings_up_to(alphabet, max_len) {
        let outcome = parser.parse(&input);
        assert_eq!(
            outcome.verdict.is_accept(),
            derives(&original, &input),
            "{:?}: {}",
            input,
            outcome.verdict
        );
    }
}

#[test]
fn test_unknown_characters_are_rejected() {
    let analysis = analyze("E", EXPR);
    let parser = analysis.parser().unwrap();
    assert_eq!(
        parser.parse("i-i").verdict,
        Verdict::RejectNoEntry {
            step: 5,
            nonterminal: "T'".to_string(),
            lookahead: '-'
        }
    );
    assert!(!parser.parse("i#").verdict.is_accept());
    assert!(!parser.parse("E").verdict.is_accept());
}

#[test]
fn test_parsers_share_the_table() {
    let analysis = analyze("E", EXPR);
    let inputs = ["i", "(i)", "i*(i+i)", "i+", "((i)"];
    let verdicts = thread::scope(|scope| {
        let handles = inputs
            .iter()
            .map(|input| {
                let parser = analysis.parser().unwrap();
                scope.spawn(move || parser.parse(input).verdict.is_accept())
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });
    assert_eq!(verdicts, vec![true, true, true, false, false]);
}

#[test]
fn test_streaming_steps_match_parse() {
    let analysis = analyze("E", EXPR);
    let parser = analysis.parser().unwrap();
    let streamed = parser.steps("i*i").collect::<Vec<_>>();
    assert_eq!(streamed, parser.parse("i*i").steps);
    assert_eq!(parser.steps("i)").count(), parser.parse("i)").steps.len());
}
