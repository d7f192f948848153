mod support;

use cfg_ll::parser::StepAction;
use cfg_ll::{LlParser, Verdict};

use support::{analyze, set, sym, EXPR};

#[test]
fn test_left_recursion_is_eliminated() {
    let analysis = analyze("E", EXPR);
    let grammar = analysis.grammar();
    for name in ["E", "T"] {
        let lhs = sym(grammar, name);
        for alt in &grammar.production(lhs).unwrap().alternatives {
            assert_ne!(alt.first(), Some(&lhs));
        }
    }
    assert_eq!(
        grammar.stringify(),
        "E -> TE'\nT -> FT'\nF -> (E)|i\nE' -> +TE'|ε\nT' -> *FT'|ε\n"
    );
}

#[test]
fn test_first_and_follow() {
    let analysis = analyze("E", EXPR);
    let grammar = analysis.grammar();
    let sets = analysis.sets();
    let [e, t, f] = ["E", "T", "F"].map(|name| sym(grammar, name));
    let [e1, t1] = ["E'", "T'"].map(|name| sym(grammar, name));

    assert_eq!(sets.first_sets()[&f], set(grammar, "(i"));
    assert_eq!(sets.first_sets()[&e], set(grammar, "(i"));
    assert_eq!(sets.first_sets()[&e1], set(grammar, "+ε"));
    assert_eq!(sets.follow(e), set(grammar, "#)"));
    assert_eq!(sets.follow(e1), set(grammar, "#)"));
    assert_eq!(sets.follow(t), set(grammar, "#)+"));
    assert_eq!(sets.follow(t1), set(grammar, "#)+"));
    assert_eq!(sets.follow(f), set(grammar, "#)+*"));
    assert!(sets.is_nullable(e1));
    assert!(!sets.is_nullable(e));
}

#[test]
fn test_is_ll1() {
    let analysis = analyze("E", EXPR);
    assert!(analysis.is_ll1());
    assert_eq!(analysis.classification().conflicts().count(), 0);
    assert_eq!(analysis.predict_table().unwrap().len(), 13);
}

#[test]
fn test_accept() {
    let analysis = analyze("E", EXPR);
    let parser = analysis.parser().unwrap();
    let outcome = parser.parse("i+i*i");
    assert_eq!(outcome.verdict, Verdict::Accept);
    assert_eq!(outcome.steps.last().unwrap().action, StepAction::Accept);
    assert!(outcome.steps.windows(2).all(|w| w[0].index + 1 == w[1].index));
}

#[test]
fn test_trailing_operator() {
    let analysis = analyze("E", EXPR);
    let parser = analysis.parser().unwrap();
    let outcome = parser.parse("i+");
    assert_eq!(
        outcome.verdict,
        Verdict::RejectNoEntry {
            step: 8,
            nonterminal: "T".to_string(),
            lookahead: '#'
        }
    );
    let consumed_plus = outcome
        .steps
        .iter()
        .position(|step| LlParser::stringify_input(&step.input) == "#")
        .unwrap();
    assert_eq!(outcome.steps[consumed_plus].index, 8);
}

#[test]
fn test_unbalanced_paren() {
    let analysis = analyze("E", EXPR);
    let parser = analysis.parser().unwrap();
    let outcome = parser.parse("(i");
    assert_eq!(
        outcome.verdict,
        Verdict::RejectMismatch {
            step: 11,
            expected: ")".to_string(),
            found: '#'
        }
    );
    let last = outcome.steps.last().unwrap();
    assert_eq!(parser.stringify_stack(&last.stack), "#E'T')");
    assert_eq!(LlParser::stringify_input(&last.input), "#");
}
