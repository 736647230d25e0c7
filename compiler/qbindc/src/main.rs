//! qbind CLI
//!
//! Rewrites named query parameters to positional placeholders.

use qbindc::commands::{bind_json, parse_options, read_file, shape_json, CommandError};

fn main() {
    qbindc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let options = match parse_options(&args[2..]) {
        Ok(options) => options,
        Err(e) => fail(&e),
    };

    let result = match args[1].as_str() {
        "shape" => {
            let [query_path] = options.positional.as_slice() else {
                eprintln!("Usage: qbind shape <query.json> [--dialect=<d>] [--prefix=<p>]");
                std::process::exit(1);
            };
            shape_json(&read_file(query_path), options.dialect)
        }
        "bind" => {
            let [query_path, values_path] = options.positional.as_slice() else {
                eprintln!(
                    "Usage: qbind bind <query.json> <values.json> [--dialect=<d>] [--prefix=<p>]"
                );
                std::process::exit(1);
            };
            bind_json(
                &read_file(query_path),
                &read_file(values_path),
                options.dialect,
            )
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(json) => println!("{json}"),
        Err(e) => fail(&e),
    }
}

fn fail(e: &CommandError) -> ! {
    match e {
        CommandError::Interp(inner) if inner.is_contract_violation() => {
            eprintln!("error: malformed parsed query: {inner}");
        }
        _ => eprintln!("error: {e}"),
    }
    std::process::exit(1);
}

fn print_usage() {
    println!("qbind - named-to-positional SQL parameter interpolation");
    println!();
    println!("Usage: qbind <command> [options]");
    println!();
    println!("Commands:");
    println!("  shape <query.json>                 Rewrite the query and print its shape map");
    println!("  bind <query.json> <values.json>    Rewrite the query and print its bindings");
    println!("  help                               Show this message");
    println!();
    println!("Options:");
    println!("  --dialect=<d>   Placeholder style: colon (default), dollar, question, at");
    println!("  --prefix=<p>    Slot name prefix for colon and at (default: param)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=qbind_interp=debug   Log each interpolation pass to stderr");
}
