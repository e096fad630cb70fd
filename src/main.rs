use clap::Parser;
use std::fs;
use std::path::Path;
use std::process;

use pawnparse::parser::parse;
use pawnparse::printer::AstPrinter;

#[derive(Parser)]
#[command(name = "pawnparse")]
#[command(about = "Parse a Pawn-style script and dump its syntax tree", version)]
struct Cli {
    /// Pawn source file to parse
    input: String,
}

fn main() {
    let cli = Cli::parse();

    if !Path::new(&cli.input).exists() {
        eprintln!("Error: File '{}' not found", cli.input);
        process::exit(1);
    }

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error reading '{}': {}", cli.input, err);
            process::exit(1);
        }
    };

    eprintln!("Parsing {}...", cli.input);

    let mut parser = parse::Parser::new(&source);
    let program = parser.parse_program();

    if !parser.lex_errors().is_empty() || !parser.errors().is_empty() {
        eprintln!("Parser errors:");
        for err in parser.lex_errors() {
            eprintln!("  {}", err);
        }
        for err in parser.errors() {
            eprintln!("  {}", err);
        }
        process::exit(1);
    }

    println!("Parsing completed successfully.");
    let mut printer = AstPrinter::new();
    print!("{}", printer.print_program(&program));
}
