use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::Table;
use cut_sheet::{
    compute,
    io::{cut_sheet_csv, write_cut_sheet_csv, EXPORT_FILE_NAME},
    params::read_params_json,
    CustomStationSource, CutSheet, CutSheetOptions, CutSheetParams, CutSheetReport,
    MalformedPolicy, Row,
};

mod session;

/// Command line front end for the slope cut sheet generator.
#[derive(Parser)]
#[command(name = "cut_sheet_cli", version)]
struct Cli {
    /// JSON file holding the begin/end stations, elevations and interval
    #[arg(long, global = true)]
    params: Option<String>,
    /// Begin station (ft)
    #[arg(long, global = true, allow_negative_numbers = true)]
    begin_station: Option<f64>,
    /// Begin elevation (ft)
    #[arg(long, global = true, allow_negative_numbers = true)]
    begin_elevation: Option<f64>,
    /// End station (ft)
    #[arg(long, global = true, allow_negative_numbers = true)]
    end_station: Option<f64>,
    /// End elevation (ft)
    #[arg(long, global = true, allow_negative_numbers = true)]
    end_elevation: Option<f64>,
    /// Station interval (ft)
    #[arg(long, global = true, allow_negative_numbers = true)]
    increment: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slope between the begin and end stations.
    Slope,
    /// Compute the cut sheet for the regular interval and custom stations.
    Generate {
        /// Custom stations separated by commas, e.g. "25,45,85"
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        custom: String,
        /// Drop every custom station when any of them is malformed.
        #[arg(long)]
        strict: bool,
        /// Leave out the formula column.
        #[arg(long)]
        no_formula: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Write the merged sheet as CSV to this path.
        #[arg(long)]
        output: Option<String>,
    },
    /// Collect custom stations from commands read on stdin.
    Session {
        /// Leave out the formula column.
        #[arg(long)]
        no_formula: bool,
    },
}

impl Cli {
    fn resolve_params(&self) -> std::io::Result<CutSheetParams> {
        let mut params = match &self.params {
            Some(path) => read_params_json(path)?,
            None => CutSheetParams::default(),
        };
        if let Some(v) = self.begin_station {
            params.begin_station = v;
        }
        if let Some(v) = self.begin_elevation {
            params.begin_elevation = v;
        }
        if let Some(v) = self.end_station {
            params.end_station = v;
        }
        if let Some(v) = self.end_elevation {
            params.end_elevation = v;
        }
        if let Some(v) = self.increment {
            params.increment = v;
        }
        Ok(params)
    }
}

fn rows_table(rows: &[Row], include_formula: bool) -> Table {
    let mut table = Table::new();
    if include_formula {
        table.set_header(vec!["#", "Station", "Elevation (ft)", "Formula"]);
    } else {
        table.set_header(vec!["#", "Station", "Elevation (ft)"]);
    }
    for (i, row) in rows.iter().enumerate() {
        let mut cells = vec![
            i.to_string(),
            format!("{:.2}", row.station),
            format!("{:.3}", row.elevation),
        ];
        if include_formula {
            cells.push(row.formula.clone().unwrap_or_default());
        }
        table.add_row(cells);
    }
    table
}

fn print_report(report: &CutSheetReport, include_formula: bool) {
    println!("{}", report.slope());
    println!("Incremental Stations");
    println!("{}", rows_table(&report.regular, include_formula));
    if !report.custom.is_empty() {
        println!("Custom Stations");
        println!("{}", rows_table(&report.custom, include_formula));
    }
    println!("Cut Sheet");
    print_sheet(&report.merged, include_formula);
}

fn print_sheet(sheet: &CutSheet, include_formula: bool) {
    println!("{}", rows_table(sheet.rows(), include_formula));
}

fn report_errors(report: &CutSheetReport) {
    for err in report.errors() {
        eprintln!("Error: {}", err);
    }
}

fn export(path: &str, sheet: &CutSheet, include_formula: bool) -> bool {
    match write_cut_sheet_csv(path, sheet, include_formula) {
        Ok(()) => {
            println!("Wrote {}", path);
            true
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", path, e);
            false
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();
    let params = match cli.resolve_params() {
        Ok(p) => p,
        Err(e) => {
            eprintln!(
                "Error reading {}: {}",
                cli.params.as_deref().unwrap_or("parameters"),
                e
            );
            return ExitCode::FAILURE;
        }
    };
    log::debug!("using {:?}", params);

    match cli.command {
        Commands::Slope => match params.validate().and_then(|_| {
            cut_sheet::Slope::between(params.begin(), params.end())
        }) {
            Ok(slope) => {
                println!("{}", slope);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Generate {
            custom,
            strict,
            no_formula,
            format,
            output,
        } => {
            let options = CutSheetOptions {
                include_formula: !no_formula,
                malformed_policy: if strict {
                    MalformedPolicy::Omit
                } else {
                    MalformedPolicy::SkipInvalid
                },
            };
            let report = match compute(&params, CustomStationSource::Text(&custom), &options) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            report_errors(&report);
            match format {
                OutputFormat::Table => print_report(&report, options.include_formula),
                OutputFormat::Csv => {
                    print!("{}", cut_sheet_csv(&report.merged, options.include_formula))
                }
                OutputFormat::Json => match serde_json::to_string_pretty(&report.merged) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                },
            }
            if let Some(path) = output {
                if !export(&path, &report.merged, options.include_formula) {
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Commands::Session { no_formula } => {
            let options = CutSheetOptions {
                include_formula: !no_formula,
                ..CutSheetOptions::default()
            };
            let stdin = std::io::stdin();
            session::run(stdin.lock(), &params, &options, EXPORT_FILE_NAME)
        }
    }
}
