mod format;

use std::env;
use std::fs;
use std::process::ExitCode;

use lp_solver::{solve_problem, LpError};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let (input_path, output_path) = match args.as_slice() {
        [_, input, output] => (input, output),
        [program, ..] => {
            print_usage(program);
            return ExitCode::FAILURE;
        }
        [] => {
            print_usage("lp-solve");
            return ExitCode::FAILURE;
        }
    };

    let contents = match fs::read_to_string(input_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("error reading '{}': {}", input_path, err);
            return ExitCode::FAILURE;
        }
    };

    let result = match solve_problem(&contents) {
        Ok(result) => result,
        Err(err) => {
            report_lp_error(&err);
            return ExitCode::FAILURE;
        }
    };

    let rendered = format::render(&result);
    if let Err(err) = fs::write(output_path, rendered) {
        eprintln!("error writing '{}': {}", output_path, err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_lp_error(err: &LpError) {
    match err.parse_error() {
        Some(parse_err) => eprintln!("line {}: {}", parse_err.line(), parse_err),
        None => eprintln!("{}", err),
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <input-file> <output-file>", program);
}
