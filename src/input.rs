use crate::error::InputError;
use std::io::BufRead;

/// Parses exactly two whitespace-separated integers.
pub fn parse_pair(line: &str) -> Result<(i64, i64), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [first, second] = tokens.as_slice() else {
        return Err(InputError::WrongCount {
            found: tokens.len(),
        });
    };

    let parse = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|_| InputError::not_an_integer(token))
    };
    Ok((parse(*first)?, parse(*second)?))
}

/// Reads lines until one holds two integers. `Ok(None)` on end of input.
pub fn read_pair<R: BufRead>(reader: R) -> std::io::Result<Option<Result<(i64, i64), InputError>>> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        return Ok(Some(parse_pair(&line)));
    }
    Ok(None)
}
