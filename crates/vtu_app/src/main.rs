mod app;
mod effects;
mod logging;
mod render;

fn main() {
    logging::initialize(logging::LogDestination::File);

    if let Err(err) = app::run() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
