//! Bilby selector tool CLI
//!
//! A headless stand-in for the two-pane tool: feed it selector lines,
//! get the canonical rendering back.

use anyhow::Result;
use bilby_app::{lint_input, render_output, restore, share_link};
use bilby_selector::parse;
use std::env;
use std::fs;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: bilby-cli <file>");
        eprintln!("       bilby-cli --text 'input.selected, .toolbar'");
        eprintln!("Modes: --json (parsed structures), --share (share query string),");
        eprintln!("       --restore '<query>' (recover input from a share link)");
        std::process::exit(1);
    }

    if args[1] == "--restore" {
        let Some(query) = args.get(2) else {
            eprintln!("Error: --restore requires a query string argument");
            std::process::exit(1);
        };
        match restore(query) {
            Some(input) => println!("{input}"),
            None => eprintln!("No share payload found; input left unchanged"),
        }
        return Ok(());
    }

    let (input, mode) = read_input(&args)?;
    lint_input(&input);

    match mode {
        Mode::Render => println!("{}", render_output(&input)),
        Mode::Json => {
            let parsed: Vec<_> = input
                .lines()
                .map(|line| parse(line.trim_start()))
                .collect::<Result<_, _>>()?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Mode::Share => println!("{}", share_link(&input)),
    }

    Ok(())
}

/// Output mode selected on the command line.
enum Mode {
    Render,
    Json,
    Share,
}

/// Pull the input text and output mode out of the argument list.
fn read_input(args: &[String]) -> Result<(String, Mode)> {
    let mut mode = Mode::Render;
    let mut input = None;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => mode = Mode::Json,
            "--share" => mode = Mode::Share,
            "--text" => {
                let Some(text) = iter.next() else {
                    eprintln!("Error: --text requires a selector string argument");
                    std::process::exit(1);
                };
                input = Some(text.clone());
            }
            path => input = Some(fs::read_to_string(path)?),
        }
    }

    let Some(input) = input else {
        eprintln!("Error: no input given (file path or --text)");
        std::process::exit(1);
    };
    Ok((input, mode))
}
