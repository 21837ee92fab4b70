use msleep::utils;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = utils::program_name(&args);

    if args.len() != 2 {
        utils::print_usage(program);
    }

    let millis = msleep::parse_millis(&args[1]).unwrap_or_else(|err| {
        utils::error(&err.to_string());
    });

    if let Err(err) = msleep::wait(millis) {
        utils::error(&err.to_string());
    }
}
