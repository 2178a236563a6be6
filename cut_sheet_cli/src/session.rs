//! Line oriented session that accumulates custom stations between passes.

use std::io::BufRead;
use std::process::ExitCode;

use cut_sheet::{compute, CustomStationSource, CustomStations, CutSheetOptions, CutSheetParams};

use crate::{export, print_sheet, report_errors};

const HELP: &str = "commands: add <station>..., remove <station>, clear, list, show, export [path], quit";

/// Reads commands from `input` until `quit` or end of input.
///
/// Fails only when the parameters cannot produce a cut sheet, checked before
/// the first command is read.
pub fn run<R: BufRead>(
    input: R,
    params: &CutSheetParams,
    options: &CutSheetOptions,
    default_path: &str,
) -> ExitCode {
    let mut stations = CustomStations::new();
    if let Err(e) = compute(params, CustomStationSource::Accumulated(&stations), options) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let words = match shell_words::split(&line) {
            Ok(w) => w,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };
        let Some((cmd, args)) = words.split_first() else {
            continue;
        };
        match cmd.as_str() {
            "add" => {
                if args.is_empty() {
                    eprintln!("Usage: add <station>...");
                }
                for token in args {
                    match stations.add_str(token) {
                        Ok(true) => println!("Added {}", token),
                        Ok(false) => println!("{} already present", token),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
            }
            "remove" => match args.first().map(|t| t.parse::<f64>()) {
                Some(Ok(station)) => {
                    if stations.remove(station) {
                        println!("Removed {}", station);
                    } else {
                        println!("{} not present", station);
                    }
                }
                Some(Err(e)) => eprintln!("Error: {}", e),
                None => eprintln!("Usage: remove <station>"),
            },
            "clear" => {
                stations.clear();
                println!("Cleared custom stations");
            }
            "list" => {
                if stations.is_empty() {
                    println!("No custom stations");
                } else {
                    let list: Vec<String> = stations.iter().map(|s| format!("{:.2}", s)).collect();
                    println!("{}", list.join(","));
                }
            }
            "show" | "export" => {
                match compute(params, CustomStationSource::Accumulated(&stations), options) {
                    Ok(report) => {
                        report_errors(&report);
                        if cmd == "show" {
                            println!("{}", report.slope());
                            print_sheet(&report.merged, options.include_formula);
                        } else {
                            let path = args.first().map(String::as_str).unwrap_or(default_path);
                            export(path, &report.merged, options.include_formula);
                        }
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            other => eprintln!("Unknown command {}; {}", other, HELP),
        }
    }
    ExitCode::SUCCESS
}
