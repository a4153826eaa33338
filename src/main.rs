mod cli;
mod filter;
mod logging;
mod model;
mod report;
mod store;

fn main() -> anyhow::Result<()> {
    cli::run()
}
