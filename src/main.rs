mod cli;

use clap::Parser;
use cli::{Cli, Commands};

use bookbox::config::Config;
use bookbox::ops::Library;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let mut library = Library::open(&config);

    match run(&mut library, cli.command) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}: {}", err.code(), err);
            std::process::exit(1);
        }
    }
}

fn run(library: &mut Library, command: Commands) -> bookbox::ops::Result<Vec<String>> {
    match command {
        Commands::AddBook { title, author, qty } => {
            let total = library.add_book(&title, author.as_deref(), qty)?;
            Ok(vec![format!("'{title}' added ({total} in catalog)")])
        }
        Commands::RemoveBook { title } => {
            library.remove_book(&title)?;
            Ok(vec![format!("'{title}' removed")])
        }
        Commands::UpdateBook { title, author, qty } => {
            library.update_book(&title, author.as_deref(), qty)?;
            Ok(vec![format!("'{title}' updated")])
        }
        Commands::Search { query } => {
            let lines = library.search_books(&query)?;
            if lines.is_empty() {
                Ok(vec!["No books match.".to_string()])
            } else {
                Ok(lines)
            }
        }
        Commands::ListBooks => {
            let lines = library.list_books();
            if lines.is_empty() {
                Ok(vec!["No books available.".to_string()])
            } else {
                Ok(lines)
            }
        }
        Commands::Register { name } => {
            library.register_user(&name)?;
            Ok(vec![format!("'{name}' registered")])
        }
        Commands::DeleteUser { name } => {
            library.delete_user(&name)?;
            Ok(vec![format!("'{name}' removed")])
        }
        Commands::RenameUser { old, new } => {
            let report = library.rename_user(&old, &new)?;
            Ok(vec![format!(
                "'{old}' -> '{new}' ({} loans, {} reservations updated)",
                report.loans, report.reservations
            )])
        }
        Commands::ListUsers => {
            let users = library.list_users();
            if users.is_empty() {
                Ok(vec!["(No users)".to_string()])
            } else {
                Ok(users)
            }
        }
        Commands::Issue {
            user,
            title,
            period,
        } => {
            let loan = library.issue_book(&user, &title, period)?;
            Ok(vec![format!(
                "'{}' issued to {} until {}",
                loan.book,
                loan.user,
                loan.due_date.format("%Y-%m-%d")
            )])
        }
        Commands::Return { user, title } => {
            let loan = library.return_book(&user, &title)?;
            Ok(vec![format!("'{}' returned by {}", loan.book, loan.user)])
        }
        Commands::Reserve { user, title } => {
            let position = library.reserve_book(&user, &title)?;
            Ok(vec![format!(
                "'{title}' reserved for {user} (position {position})"
            )])
        }
        Commands::ListIssued => {
            let lines = library.list_issued();
            if lines.is_empty() {
                Ok(vec!["No books currently issued.".to_string()])
            } else {
                Ok(lines)
            }
        }
    }
}
