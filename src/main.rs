//! timetracker-migrate main entrypoint.

use timetracker_migrate::run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!();
    if let Err(e) = run() {
        std::process::exit(e.exit_code());
    }
}
