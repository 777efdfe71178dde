use anyhow::Result;
use clap::{Parser, Subcommand};

use library_cli::cli::{
    handle_book_command, handle_borrow, handle_return, handle_user_command, BookCommands,
    UserCommands,
};
use library_cli::config::{paths::LibraryPaths, settings::Settings};
use library_cli::models::Person;
use library_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "library",
    version,
    about = "Terminal-based library catalog and lending manager",
    long_about = "library-cli tracks a catalog of books and a roster of users, \
                  records who has borrowed what, and persists everything to \
                  flat text files between runs."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Book catalog commands
    #[command(subcommand)]
    Book(BookCommands),

    /// User roster commands
    #[command(subcommand)]
    User(UserCommands),

    /// Borrow a book for a user
    Borrow {
        /// User name
        user: String,
        /// Book title or 1-based list number
        book: String,
    },

    /// Return a book for a user
    Return {
        /// User name
        user: String,
        /// Book title or 1-based list number
        book: String,
    },

    /// Initialize the data directory and empty stores
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LibraryPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage and hydrate state
    let storage = Storage::new(paths.clone())?;
    let (mut catalog, mut roster) = storage.load_all()?;

    match cli.command {
        Some(Commands::Book(cmd)) => {
            handle_book_command(&storage, &mut catalog, &mut roster, cmd)?;
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&storage, &mut catalog, &mut roster, cmd)?;
        }
        Some(Commands::Borrow { user, book }) => {
            handle_borrow(&storage, &mut catalog, &mut roster, &user, &book)?;
        }
        Some(Commands::Return { user, book }) => {
            handle_return(&storage, &mut catalog, &mut roster, &user, &book)?;
        }
        Some(Commands::Init) => {
            println!("Initializing library-cli at: {}", paths.data_dir().display());
            library_cli::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("library-cli Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Books store:     {}", paths.books_file().display());
            println!("Users store:     {}", paths.users_file().display());
            println!();
            println!("Settings:");
            let librarian = Person::new(&settings.librarian_name);
            println!("  Librarian name: {}", librarian);
        }
        None => {
            println!("library-cli - Terminal-based library catalog and lending manager");
            println!();
            println!("Run 'library --help' for usage information.");
        }
    }

    Ok(())
}
