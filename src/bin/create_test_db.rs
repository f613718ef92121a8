use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use serde_json::json;
use time::{Duration, OffsetDateTime};

use finance_tracker::{
    RecordFields, RecordKind, RecordStore, SQLiteRecordStore, initialize_db, validate,
};

/// A utility for creating a test database for the REST API server of finance_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_RECORDS: &[(RecordKind, &str, f64, &str, &str)] = &[
    (RecordKind::Income, "Salary", 4200.0, "salary", "Monthly pay"),
    (RecordKind::Income, "Freelance", 650.0, "freelancing", "Website for a client"),
    (RecordKind::Income, "Dividends", 85.2, "stocks", "Quarterly payout"),
    (RecordKind::Expense, "Rent", 1600.0, "housing", "Monthly rent"),
    (RecordKind::Expense, "Groceries", 143.75, "groceries", "Weekly shop"),
    (RecordKind::Expense, "Internet", 79.99, "subscriptions", "Fibre plan"),
    (RecordKind::Expense, "Dinner", 62.5, "takeaways", "Birthday dinner"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample incomes and expenses...");

    let store = SQLiteRecordStore::new(std::sync::Arc::new(std::sync::Mutex::new(conn)));
    let now = OffsetDateTime::now_utc();

    for (days_ago, (kind, title, amount, category, description)) in
        (0i64..).zip(SAMPLE_RECORDS.iter().copied())
    {
        let created_at = now - Duration::days(days_ago);
        let record = validate(RecordFields {
            title: Some(title.to_owned()),
            amount: Some(json!(amount)),
            category: Some(category.to_owned()),
            description: Some(description.to_owned()),
            date: Some(created_at.date().to_string()),
        })?;

        store.insert(kind, record, created_at)?;
    }

    println!("Success!");

    Ok(())
}
