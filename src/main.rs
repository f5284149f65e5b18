use clap::Parser;
use polix::{
    interpreter::{builder::build_tree, evaluator::evaluate, lexer::tokenize},
    render::to_display_tree,
    tree::Notation,
};

/// polix builds a binary expression tree from a postfix or prefix arithmetic
/// expression and evaluates it to an integer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the expression as prefix (Polish) notation instead of postfix.
    #[arg(short, long)]
    prefix: bool,

    /// Print the expression tree before the result.
    #[arg(short, long)]
    tree: bool,

    /// The expression, one character per token, e.g. `23*5+` or `+*235`.
    expression: String,
}

fn main() {
    let args = Args::parse();

    let notation = if args.prefix {
        Notation::Prefix
    } else {
        Notation::Postfix
    };

    let tokens = tokenize(&args.expression);
    let root = build_tree(&tokens, notation).unwrap_or_else(|e| {
                                                eprintln!("Error: {e}");
                                                std::process::exit(1);
                                            });

    if args.tree {
        println!("{}", to_display_tree(&root));
    }

    match evaluate(Some(&root)) {
        Ok(result) => println!("Evaluation Result: {result}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    }
}
