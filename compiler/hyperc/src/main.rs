//! HyperScript CLI.

mod commands;

use commands::{explain_error, lex_file, parse_file, run_file, run_project_dir};
use hyperc::{init_tracing, ExitStatus, RunOptions};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(ExitStatus::Usage.code());
    }

    let command = &args[1];
    let code = match command.as_str() {
        "run" => {
            let (options, positional) = parse_run_options(&args[2..]);
            let [path] = positional.as_slice() else {
                eprintln!("Usage: hyper run <file.hfl|file.hbp> [--tokens] [--ast] [--lexical]");
                std::process::exit(ExitStatus::Usage.code());
            };
            run_file(path, options)
        }
        "project" => {
            let (options, positional) = parse_run_options(&args[2..]);
            let [dir, entry] = positional.as_slice() else {
                eprintln!("Usage: hyper project <dir> <entry> [--tokens] [--ast] [--lexical]");
                eprintln!("Example: hyper project project Main.hbp");
                std::process::exit(ExitStatus::Usage.code());
            };
            run_project_dir(dir, entry, options)
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: hyper lex <file>");
                std::process::exit(ExitStatus::Usage.code());
            }
            lex_file(&args[2])
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: hyper parse <file>");
                std::process::exit(ExitStatus::Usage.code());
            }
            parse_file(&args[2])
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: hyper explain <ERROR_CODE>");
                eprintln!("Example: hyper explain E6002");
                std::process::exit(ExitStatus::Usage.code());
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitStatus::Success.code()
        }
        "version" | "--version" | "-V" => {
            println!("HyperScript {}", env!("CARGO_PKG_VERSION"));
            ExitStatus::Success.code()
        }
        _ => {
            // A bare source path runs it.
            let path = std::path::Path::new(command);
            if hyperc::SourceKind::from_path(path).is_some() {
                run_file(command, RunOptions::default())
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitStatus::Usage.code()
            }
        }
    };
    std::process::exit(code);
}

/// Split flags from positional arguments. Unknown flags are ignored.
fn parse_run_options(args: &[String]) -> (RunOptions, Vec<&str>) {
    let mut options = RunOptions::default();
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--tokens" | "-t" => options.dump_tokens = true,
            "--ast" | "-a" => options.dump_ast = true,
            "--lexical" => options.lexical_closures = true,
            flag if flag.starts_with('-') => {
                eprintln!("warning: ignoring unknown option '{flag}'");
            }
            other => positional.push(other),
        }
    }
    (options, positional)
}

fn print_usage() {
    println!("HyperScript interpreter");
    println!();
    println!("Usage: hyper <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>               Run a .hfl script or print a .hbp blueprint tree");
    println!("  project <dir> <entry>    Scan a directory and run its entry file");
    println!("  lex <file>               Tokenize and display tokens");
    println!("  parse <file>             Parse and display the syntax tree");
    println!("  explain <code>           Explain an error code (e.g., E6002)");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Run options:");
    println!("  --tokens, -t       Print the token stream first");
    println!("  --ast, -a          Print the syntax tree before running");
    println!("  --lexical          Functions capture their defining scope");
    println!();
    println!("Environment:");
    println!("  HYPER_LOG          Log filter, e.g. HYPER_LOG=hyper_eval=trace");
    println!();
    println!("Exit codes: 0 ok, 64 usage, 65 syntax error, 70 runtime error, 74 file error");
}
