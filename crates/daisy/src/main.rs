use anyhow::Context;
use clap::{Parser, Subcommand};
use daisy::config;
use daisy::events::AppEvent;
use daisy::protocol::{Command, parse_line};
use daisy::session::Session;
use daisy::sys::runtime;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "daisy", version, about = "Drive a radial selection wheel from the command line", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Read commands from stdin and print each tick
    Run {
        /// Reload the config file when it changes
        #[arg(short = 'w', long)]
        watch: bool,
    },
    /// Run the commands in a file
    Replay { file: PathBuf },
    /// Print the computed layout
    Layout {
        /// Override the number of items
        #[arg(short = 'n', long)]
        items: Option<usize>,
    },
    /// Write the default config file if none exists
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let path = config::resolve_config_path(cli.config)?;

    match cli.command {
        Commands::Run { watch } => run(&path, watch),
        Commands::Replay { file } => replay(&path, &file),
        Commands::Layout { items } => {
            let mut session = Session::new(&config::load_or_default(&path));
            if let Some(count) = items {
                session.apply(Command::Items(count));
            }
            for line in session.layout_table() {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Init => {
            let written = config::write_default_config(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{}", written.display());
            Ok(())
        }
    }
}

fn run(path: &Path, watch: bool) -> anyhow::Result<()> {
    let mut session = Session::new(&config::load_or_default(path));
    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx, watch.then(|| path.to_path_buf()));

    while let Ok(event) = rx.recv_blocking() {
        match event {
            AppEvent::Command(Command::Quit) | AppEvent::InputClosed => break,
            AppEvent::Command(command) => {
                for line in session.apply(command) {
                    println!("{line}");
                }
            }
            AppEvent::ConfigReload => match config::load_config(path) {
                Ok(new_config) => {
                    session.reload(&new_config);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
    Ok(())
}

fn replay(path: &Path, file: &Path) -> anyhow::Result<()> {
    let mut session = Session::new(&config::load_or_default(path));
    let script = fs_err::read_to_string(file)?;

    for (number, line) in script.lines().enumerate() {
        let command = parse_line(line)
            .with_context(|| format!("{}:{}", file.display(), number + 1))?;
        match command {
            Some(Command::Quit) => break,
            Some(command) => {
                for line in session.apply(command) {
                    println!("{line}");
                }
            }
            None => {}
        }
    }
    Ok(())
}
