//! wind-yield entry point — CLI wiring around the estimation pipeline.

use std::path::Path;
use std::process;

use wind_yield::config::TurbineConfig;
use wind_yield::io::export::export_csv;
use wind_yield::io::table::read_table;
use wind_yield::io::template::write_template_to_path;
use wind_yield::runner::run_estimate;

/// Parsed CLI arguments.
struct CliArgs {
    table_path: Option<String>,
    params_path: Option<String>,
    preset: Option<String>,
    rotor_area: Option<f32>,
    efficiency: Option<f32>,
    air_density: Option<f32>,
    cut_in: Option<f32>,
    cut_out: Option<f32>,
    energy_out: Option<String>,
    template_out: Option<String>,
}

fn print_help() {
    eprintln!("wind-yield — wind turbine energy-yield estimator");
    eprintln!();
    eprintln!("Usage: wind-yield [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --table <path>           Wind frequency table (CSV)");
    eprintln!("  --params <path>          Load turbine parameters from TOML file");
    eprintln!("  --preset <name>          Use a built-in parameter preset (baseline)");
    eprintln!("  --rotor-area <m2>        Override rotor swept area");
    eprintln!("  --efficiency <0..1>      Override conversion efficiency");
    eprintln!("  --air-density <kg/m3>    Override air density");
    eprintln!("  --cut-in <m/s>           Override cut-in speed");
    eprintln!("  --cut-out <m/s>          Override cut-out speed");
    eprintln!("  --energy-out <path>      Export monthly energy to CSV");
    eprintln!("  --write-template <path>  Write the sample frequency table and exit");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --params or --preset is given, the baseline parameters are used.");
}

/// Consumes the value following a flag, exiting with a message if absent.
fn take_value(args: &[String], i: &mut usize, flag: &str, expected: &str) -> String {
    *i += 1;
    match args.get(*i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("error: {flag} requires {expected}");
            process::exit(1);
        }
    }
}

fn take_f32(args: &[String], i: &mut usize, flag: &str) -> f32 {
    let raw = take_value(args, i, flag, "a numeric argument");
    match raw.parse::<f32>() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("error: {flag} value \"{raw}\" is not a valid number");
            process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        table_path: None,
        params_path: None,
        preset: None,
        rotor_area: None,
        efficiency: None,
        air_density: None,
        cut_in: None,
        cut_out: None,
        energy_out: None,
        template_out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--table" => {
                cli.table_path = Some(take_value(&args, &mut i, "--table", "a path argument"));
            }
            "--params" => {
                cli.params_path = Some(take_value(&args, &mut i, "--params", "a path argument"));
            }
            "--preset" => {
                cli.preset = Some(take_value(&args, &mut i, "--preset", "a name argument"));
            }
            "--rotor-area" => {
                cli.rotor_area = Some(take_f32(&args, &mut i, "--rotor-area"));
            }
            "--efficiency" => {
                cli.efficiency = Some(take_f32(&args, &mut i, "--efficiency"));
            }
            "--air-density" => {
                cli.air_density = Some(take_f32(&args, &mut i, "--air-density"));
            }
            "--cut-in" => {
                cli.cut_in = Some(take_f32(&args, &mut i, "--cut-in"));
            }
            "--cut-out" => {
                cli.cut_out = Some(take_f32(&args, &mut i, "--cut-out"));
            }
            "--energy-out" => {
                cli.energy_out = Some(take_value(&args, &mut i, "--energy-out", "a path argument"));
            }
            "--write-template" => {
                cli.template_out = Some(take_value(
                    &args,
                    &mut i,
                    "--write-template",
                    "a path argument",
                ));
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    if cli.params_path.is_some() && cli.preset.is_some() {
        eprintln!("error: --params and --preset are mutually exclusive; choose one source");
        process::exit(1);
    }

    // Template generation is a standalone action: write and exit.
    if let Some(ref path) = cli.template_out {
        if let Err(e) = write_template_to_path(Path::new(path)) {
            eprintln!("error: failed to write template: {e}");
            process::exit(1);
        }
        eprintln!("Template written to {path}");
        return;
    }

    // Load parameters: --params takes priority, then --preset, then baseline
    let mut config = if let Some(ref path) = cli.params_path {
        match TurbineConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match TurbineConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        TurbineConfig::baseline()
    };

    // Apply per-field overrides
    if let Some(v) = cli.rotor_area {
        config.rotor_area_m2 = v;
    }
    if let Some(v) = cli.efficiency {
        config.efficiency = v;
    }
    if let Some(v) = cli.air_density {
        config.air_density = v;
    }
    if let Some(v) = cli.cut_in {
        config.cut_in_ms = v;
    }
    if let Some(v) = cli.cut_out {
        config.cut_out_ms = v;
    }

    // Validate
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let Some(ref table_path) = cli.table_path else {
        eprintln!("error: --table is required (or use --write-template)");
        process::exit(1);
    };

    // Load table and run
    let table = match read_table(Path::new(table_path)) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    let report = run_estimate(&table, &config);

    println!("{report}");

    // Export CSV if requested
    if let Some(ref path) = cli.energy_out {
        if let Err(e) = export_csv(&report, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Monthly energy written to {path}");
    }
}
