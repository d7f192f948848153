use std::error::Error as StdError;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use cfg_ll::classify::LlNonterminalClass;
use cfg_ll::parser::LlParser;
use cfg_ll::{Analysis, Config, Factoring, Grammar, GrammarLoader, Symbol};
use clap::Parser;
use log::LevelFilter;
use prettytable::Table as PtTable;

/// Builds an LL(1) predict table for a grammar and parses input strings with it.
#[derive(clap::Parser)]
#[clap(version, about)]
struct AppArgs {
    /// File with one `A -> ab|c` production per line.
    grammar: PathBuf,
    /// The start symbol, a single character.
    #[clap(short, long)]
    start: String,
    /// String to parse. Read from stdin, one per line, when not given.
    #[clap(short, long)]
    input: Vec<String>,
    /// Left-factor in one pass instead of repeating until nothing changes.
    #[clap(long)]
    single_pass_factoring: bool,
    /// Upper bound on left-factoring passes when factoring repeatedly.
    #[clap(long)]
    max_rounds: Option<usize>,
    /// Upper bound on passes of each fixed-point computation.
    #[clap(long)]
    max_iterations: Option<usize>,
    /// Log more. Repeat for more detail.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn StdError>> {
    let args = AppArgs::parse();
    init_logger(args.verbose);

    let text = fs::read_to_string(&args.grammar)?;
    let grammar = load(&args.start, &text)?;
    println!("{}", grammar);

    let mut config = Config::new();
    if args.single_pass_factoring {
        config = config.with_factoring(Factoring::SinglePass);
    }
    if let Some(max_rounds) = args.max_rounds {
        config = config.with_max_rounds(max_rounds);
    }
    if let Some(max_iterations) = args.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }
    let analysis = Analysis::new(grammar, &config)?;
    print_analysis(&analysis);

    let parser = match analysis.parser() {
        Some(parser) => parser,
        None => {
            println!("The grammar is not LL(1); parsing is unavailable.");
            return Ok(());
        }
    };

    if !args.input.is_empty() {
        for input in &args.input {
            print_parse(&parser, input);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    loop {
        print!("Enter a string to parse (q to quit): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line == "q" {
            break;
        }
        print_parse(&parser, line);
    }
    Ok(())
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

/// Loads the grammar, reporting and skipping malformed lines.
fn load(start: &str, text: &str) -> Result<Grammar, Box<dyn StdError>> {
    let mut loader = GrammarLoader::new(start)?;
    for line in text.lines() {
        if let Err(err) = loader.add_line(line) {
            eprintln!("skipping {}", err);
        }
    }
    Ok(loader.finish()?)
}

fn set_row(analysis: &Analysis, syms: impl IntoIterator<Item = Symbol>) -> String {
    let syms = syms.into_iter().collect::<Vec<_>>();
    let names = syms
        .iter()
        .map(|&sym| analysis.grammar().name(sym))
        .collect::<Vec<_>>();
    format!("{{{}}}", names.join(", "))
}

fn print_analysis(analysis: &Analysis) {
    let grammar = analysis.grammar();
    let sets = analysis.sets();
    let report = analysis.normalize_report();
    if !report.is_unchanged() {
        println!("Normalized grammar:\n{}", grammar);
    }
    if report.factoring_limit_hit {
        println!("Left-factoring stopped at the round limit; common prefixes remain.");
    }
    println!(
        "Non-terminals: {}",
        set_row(analysis, grammar.non_terminals().iter())
    );
    println!("Terminals: {}", set_row(analysis, grammar.terminals().iter()));

    let mut table = PtTable::new();
    table.add_row(["", "Nullable", "FIRST", "FOLLOW"].into_iter().collect());
    for production in grammar.productions() {
        let lhs = production.lhs;
        let first = sets.first_sets().get(&lhs).cloned().unwrap_or_default();
        table.add_row(
            [
                grammar.name(lhs).to_string(),
                sets.is_nullable(lhs).to_string(),
                set_row(analysis, first),
                set_row(analysis, sets.follow(lhs)),
            ]
            .into_iter()
            .collect(),
        );
    }
    println!("{}", table);

    let mut table = PtTable::new();
    table.add_row(["", "Alternatives", "Select", "Select", "Conflict"].into_iter().collect());
    for check in analysis.classification().checks() {
        let production = grammar.production(check.lhs);
        let alternative = |idx: usize| {
            production
                .and_then(|prod| prod.alternatives.get(idx))
                .map_or(String::new(), |alt| grammar.sym_source().stringify(alt))
        };
        table.add_row(
            [
                grammar.name(check.lhs).to_string(),
                format!("{} | {}", alternative(check.first), alternative(check.second)),
                set_row(analysis, check.first_select.iter().copied()),
                set_row(analysis, check.second_select.iter().copied()),
                set_row(analysis, check.intersection.iter().copied()),
            ]
            .into_iter()
            .collect(),
        );
    }
    println!("{}", table);

    for (&lhs, &class) in analysis.classification().classes() {
        if class == LlNonterminalClass::Conflicting {
            println!("{} is not LL(1)", grammar.name(lhs));
        }
    }

    let predict = match analysis.predict_table() {
        Some(predict) => predict,
        None => return,
    };
    let columns = grammar
        .terminals()
        .iter()
        .chain(Some(Symbol::END_OF_INPUT))
        .collect::<Vec<_>>();
    let mut table = PtTable::new();
    table.add_row(
        [String::new()]
            .into_iter()
            .chain(columns.iter().map(|&sym| grammar.name(sym).to_string()))
            .collect(),
    );
    for production in grammar.productions() {
        let lhs = production.lhs;
        table.add_row(
            [grammar.name(lhs).to_string()]
                .into_iter()
                .chain(columns.iter().map(|&terminal| {
                    predict
                        .get(lhs, terminal)
                        .map(|entry| {
                            let rhs = if entry.derives_empty {
                                grammar.name(Symbol::EPSILON).to_string()
                            } else {
                                grammar.sym_source().stringify(&entry.rhs)
                            };
                            format!("{} -> {}", grammar.name(lhs), rhs)
                        })
                        .unwrap_or_default()
                }))
                .collect(),
        );
    }
    println!("{}", table);
}

fn print_parse(parser: &LlParser, input: &str) {
    println!("Parsing {}", input);
    let outcome = parser.parse(input);
    let mut table = PtTable::new();
    table.add_row(["Step", "Stack", "Input", "Action"].into_iter().collect());
    for step in &outcome.steps {
        table.add_row(
            [
                step.index.to_string(),
                parser.stringify_stack(&step.stack),
                LlParser::stringify_input(&step.input),
                parser.describe(&step.action),
            ]
            .into_iter()
            .collect(),
        );
    }
    println!("{}", table);
    println!("{}", outcome.verdict);
}
