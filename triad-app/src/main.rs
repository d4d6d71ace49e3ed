mod app;
mod cli;
pub use app::App;
use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    app::init_tracing();

    let app = App::from_cli(Cli::parse())?;
    app.run()?;

    Ok(())
}
