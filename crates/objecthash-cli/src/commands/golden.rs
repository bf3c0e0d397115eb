//! Golden command implementation.

use objecthash::golden::{check, read_fixture};
use objecthash::ObjectHasher;

use crate::errors::CliError;
use crate::output::{format_mismatch, format_mismatches_json};

pub fn run(hasher: &ObjectHasher, fixture: String, json: bool) -> Result<(), CliError> {
    let cases = read_fixture(&fixture)?;
    let mismatches = check(hasher, &cases);

    if json {
        println!("{}", format_mismatches_json(&mismatches, cases.len()));
    } else if mismatches.is_empty() {
        println!("ok {} cases", cases.len());
    } else {
        for mismatch in &mismatches {
            println!("{}", format_mismatch(mismatch));
        }
    }

    if !mismatches.is_empty() {
        return Err(CliError::GoldenFailed {
            failed: mismatches.len(),
            total: cases.len(),
        });
    }
    Ok(())
}
