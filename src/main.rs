use std::io::Read;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "erdl",
    about = "Classify one line of ERD notation as an entity type or a relationship"
)]
struct Cli {
    /// Relation definition, e.g. `R(_id_, name, Other[0,*])` (reads from stdin if not provided)
    line: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let input = match cli.line {
        Some(line) => line,
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("ERROR: failed to read stdin: {e}");
                std::process::exit(1);
            }
            buf
        }
    };

    let expr = match erdl::parse(input.trim()) {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    let kind = if expr.is_relationship() {
        "relationship"
    } else {
        "entity type"
    };
    println!("{} is a {kind}", expr.name);
    for member in &expr.members {
        match &member.cardinality {
            Some(card) => println!(
                "--> {} is an entity reference, min: {}, max: {}",
                member.name(),
                card.min,
                card.max
            ),
            None => println!(
                "--> {} is an attribute, PK: {}",
                member.name(),
                member.is_primary_key()
            ),
        }
    }
}
