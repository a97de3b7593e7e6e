pub use crate::error::Error;

pub use anstream::println;
pub use color_eyre::eyre::{eyre, Context, Result};

/// Print a record as a single line of JSON on stdout
pub fn print_json<T: serde::Serialize>(record: &T) -> Result<()> {
    let json = serde_json::to_string(record).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
