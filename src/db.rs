//! Sets up the application's SQLite database.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error,
    record::{RecordKind, create_record_table},
};

/// Create the tables for the domain models if they do not already exist.
///
/// Calling this on an already initialized database is a no-op.
///
/// # Errors
/// Returns an error if a table could not be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    for kind in RecordKind::ALL {
        create_record_table(kind, &transaction)?;
    }

    transaction.commit()?;

    Ok(())
}
