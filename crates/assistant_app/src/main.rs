mod content;
mod effects;
mod logging;
mod picker;
mod shell;
mod ui;

fn main() -> anyhow::Result<()> {
    // The terminal runs in raw mode, so logs go to a file.
    logging::initialize(logging::LogDestination::File);
    shell::run()
}
