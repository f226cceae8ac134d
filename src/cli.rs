use crate::{Options, repair_to_string_with_log};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE      Write output to FILE (default stdout)\n\
               --in-place         Overwrite INPUT file with the repaired JSON\n\
               --compact          Single-line output instead of pretty-printed\n\
               --no-fallback      Disable the aggressive last-resort rewrites\n\
               --no-array-strings Do not escape string elements inside arrays\n\
               --log              Print the repair log to stderr\n\
           -h, --help             Show this help\n",
        prog = program
    );
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    in_place: bool,
    compact: bool,
    show_log: bool,
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonmend".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut in_place = false;
    let mut compact = false;
    let mut show_log = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--in-place" => {
                in_place = true;
            }
            "--compact" => {
                compact = true;
            }
            "--no-fallback" => {
                opts.aggressive_fallback = false;
            }
            "--no-array-strings" => {
                opts.escape_array_strings = false;
            }
            "--log" => {
                opts.logging = true;
                show_log = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    let mode = CliMode {
        input,
        output,
        in_place,
        compact,
        show_log,
    };
    (opts, mode)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
    };

    let (repaired, log) = match repair_to_string_with_log(&content, &opts) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if mode.show_log {
        for entry in &log {
            eprintln!(
                "[{}] {} at {}: {:?}",
                entry.stage, entry.message, entry.position, entry.context
            );
        }
    }

    let mut out = if mode.compact {
        let v: serde_json::Value = serde_json::from_str(&repaired)?;
        serde_json::to_string(&v)?
    } else {
        repaired
    };
    out.push('\n');

    if mode.in_place {
        let inp = mode
            .input
            .as_ref()
            .ok_or("--in-place requires INPUT file")?;
        fs::write(inp, out)?;
        return Ok(());
    }

    match &mode.output {
        Some(path) => {
            let mut w = BufWriter::new(File::create(path)?);
            w.write_all(out.as_bytes())?;
            w.flush()?;
        }
        None => {
            let mut w = BufWriter::new(io::stdout());
            w.write_all(out.as_bytes())?;
            w.flush()?;
        }
    }

    Ok(())
}
