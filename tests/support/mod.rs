#![allow(dead_code)]

use std::collections::{BTreeSet, HashSet, VecDeque};

use cfg_ll::{Analysis, Config, Grammar, Symbol};

pub const EXPR: &str = "
    E -> E+T|T
    T -> T*F|F
    F -> (E)|i
";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load(start: &str, text: &str) -> Grammar {
    Grammar::load(start, text).unwrap()
}

pub fn analyze(start: &str, text: &str) -> Analysis {
    init_logger();
    Analysis::new(load(start, text), &Config::default()).unwrap()
}

pub fn sym(grammar: &Grammar, name: &str) -> Symbol {
    match name {
        "ε" => Symbol::EPSILON,
        "#" => Symbol::END_OF_INPUT,
        _ => grammar.sym_source().get(name).unwrap(),
    }
}

/// A set of single-character symbols, with `#` for the end of input.
pub fn set(grammar: &Grammar, names: &str) -> BTreeSet<Symbol> {
    names
        .chars()
        .map(|ch| sym(grammar, ch.encode_utf8(&mut [0; 4])))
        .collect()
}

/// Every string over `alphabet` with at most `max_len` characters.
pub fn strings_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut last = vec![String::new()];
    for _ in 0..max_len {
        last = last
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&ch| {
                    let mut s = prefix.clone();
                    s.push(ch);
                    s
                })
            })
            .collect();
        result.extend(last.iter().cloned());
    }
    result
}

/// Decides by brute force whether the grammar derives `input`.
///
/// Explores leftmost derivations breadth-first. A sentential form is pruned
/// once its terminal prefix disagrees with the input, or it holds more
/// symbols that must produce a character than the input has characters.
/// Forms longer than `2 * input.len() + 8` are also pruned, which is
/// enough for the small grammars this is used with.
pub fn derives(grammar: &Grammar, input: &str) -> bool {
    let input = input
        .chars()
        .map(|ch| grammar.sym_source().get(ch.encode_utf8(&mut [0; 4])))
        .collect::<Option<Vec<_>>>();
    let input = match input {
        Some(input) => input,
        None => return false,
    };
    let nullable = nullable_symbols(grammar);
    let max_form = 2 * input.len() + 8;
    let start = match grammar.start() {
        Some(start) => vec![start],
        None => return false,
    };

    let mut queue = VecDeque::from([start.clone()]);
    let mut seen = HashSet::from([start]);
    while let Some(form) = queue.pop_front() {
        let pos = form.iter().position(|&sym| grammar.is_non_terminal(sym));
        let prefix_len = pos.unwrap_or(form.len());
        if prefix_len > input.len() || form[..prefix_len] != input[..prefix_len] {
            continue;
        }
        let pos = match pos {
            Some(pos) => pos,
            None => {
                if form == input {
                    return true;
                }
                continue;
            }
        };
        let lhs = form[pos];
        for alt in &grammar.production(lhs).unwrap().alternatives {
            let mut next = form[..pos].to_vec();
            next.extend(alt.iter().copied().filter(|&sym| sym != Symbol::EPSILON));
            next.extend(form[pos + 1..].iter().copied());
            let solid = next.iter().filter(|sym| !nullable.contains(sym)).count();
            if solid > input.len() || next.len() > max_form {
                continue;
            }
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    false
}

fn nullable_symbols(grammar: &Grammar) -> HashSet<Symbol> {
    let mut nullable = HashSet::new();
    loop {
        let before = nullable.len();
        for rule in grammar.rules() {
            if rule
                .rhs
                .iter()
                .all(|sym| *sym == Symbol::EPSILON || nullable.contains(sym))
            {
                nullable.insert(rule.lhs);
            }
        }
        if nullable.len() == before {
            return nullable;
        }
    }
}
