use std::process;

/// Name to show in messages, falling back when argv[0] is missing.
pub fn program_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("msleep")
}

pub fn print_usage(program: &str) -> ! {
    println!("Usage: {} sleeptime(ms)", program);
    process::exit(1);
}

pub fn error(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    process::exit(1);
}
