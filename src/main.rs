use clap::Parser;
use color_eyre::Result;
use tudu::cli::{Cli, Commands};
use tudu::{Config, Profile, Storage, TodoStore};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Determine profile: --dev flag enables dev mode, otherwise use prod
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    // Load configuration with the determined profile
    // Note: --config is parsed but not yet used to override the config path
    let config = Config::load_with_profile(profile)?;

    // Open the task store; the one-shot load happens here, before any
    // command can mutate the list
    let storage = Storage::new(config.get_data_path());
    let mut store = TodoStore::open(storage, config.save_debounce());

    // Dispatch to the appropriate command handler
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let app = tudu::tui::App::new(config, store)?;
            tudu::tui::run_event_loop(app)?;
        }
        Commands::Add { text, due } => {
            tudu::cli::handle_add(text, due, &mut store)?;
        }
        Commands::List { filter } => {
            tudu::cli::handle_list(&filter, &store)?;
        }
    }

    Ok(())
}
