//! Hash command implementation.

use std::io::{self, Read};

use objecthash::ObjectHasher;

use crate::errors::CliError;
use crate::output::format_digest;

pub fn run(hasher: &ObjectHasher, input: Option<String>, b64: bool) -> Result<(), CliError> {
    // Read JSON from file or stdin
    let json_str = if let Some(path) = input {
        std::fs::read_to_string(&path).map_err(|source| CliError::Read { path, source })?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                path: "stdin".to_string(),
                source,
            })?;
        buffer
    };

    let digest = hasher.hash_common_json(&json_str)?;
    println!("{}", format_digest(&digest, b64));
    Ok(())
}
