use pystrap::{
    cli::{get_args, get_log_level, run},
    error::default_error_handler,
    logger::format_record,
};
use std::io::Write;

fn main() {
    let args = get_args();
    let level = get_log_level(args.verbose, args.quiet);
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(buf, "{}", format_record(record.level(), &record.args().to_string()))
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
