//! Contact Book - demo entry point
//!
//! Builds a small address book, searches it by name and prints birthday
//! countdowns and a paginated listing to stdout.

use anyhow::Result;
use contact_book::{AddressBook, Config, Field, Phone, Record};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so stdout only carries the book output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded, page size {}", config.page_size);

    let book = match build_sample_book() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to build sample book: {}", e);
            return Err(e.into());
        }
    };

    for record in book.find_records("John") {
        println!("{}", record);
    }

    for record in &book {
        match record.days_to_birthday() {
            Some(days) => println!("Days to Birthday for {}: {}", record.name(), days),
            None => println!("No Birthday information for {}", record.name()),
        }
    }

    for (number, page) in book.iter_pages(config.page_size)?.enumerate() {
        println!("Page {}:", number + 1);
        for record in page {
            println!("  {}", record);
        }
    }

    Ok(())
}

fn build_sample_book() -> contact_book::BookResult<AddressBook> {
    let mut john = Record::new("John", Some("1990-05-15"))?;
    john.add_phone(Phone::new("123-456-7890")?);

    let mut alice = Record::new("Alice", Some("1985-10-25"))?;
    alice.add_phone(Phone::new("987-654-3210")?);

    let mut book = AddressBook::new();
    book.add_record(john);
    book.add_record(alice);
    Ok(book)
}
