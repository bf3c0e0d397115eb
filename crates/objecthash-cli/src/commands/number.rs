//! Number command implementation.

use objecthash::Number;

use crate::errors::CliError;

pub fn run(value: f64) -> Result<(), CliError> {
    let number = Number::new(value).ok_or(CliError::NonFinite(value))?;
    println!("{}", number.canonical());
    Ok(())
}
