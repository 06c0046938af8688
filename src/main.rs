use trigon::config::AppConfig;
use trigon::{core, logging};

/// Maps the run result to the process exit code, printing the single
/// diagnostic line on the fatal path.
fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            println!("{err:#}");
            -1
        }
    }
}

fn main() {
    logging::init_logging();
    std::process::exit(report(core::run(AppConfig::default())));
}
