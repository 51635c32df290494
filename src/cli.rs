// Console interface: one prompt for the size list, strict parsing.

use std::io::{self, Write};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("no dataset sizes given")]
    EmptyInput,

    #[error("invalid dataset size '{token}': expected a positive integer")]
    InvalidSize { token: String },

    #[error("dataset size must be at least 1")]
    ZeroSize,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Prints `message`, flushes stdout before blocking on stdin, and returns the
/// trimmed line.
pub fn prompt(message: &str) -> Result<String, CliError> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Parses a comma-separated size list. Whitespace around tokens is accepted;
/// empty tokens, zeros, and non-integers are errors.
pub fn parse_sizes(input: &str) -> Result<Vec<usize>, CliError> {
    if input.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }

    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            let size: usize = token.parse().map_err(|_| CliError::InvalidSize {
                token: token.to_string(),
            })?;
            if size == 0 {
                return Err(CliError::ZeroSize);
            }
            Ok(size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_size() {
        assert_eq!(parse_sizes("1000").unwrap(), vec![1000]);
    }

    #[test]
    fn test_parse_accepts_whitespace() {
        assert_eq!(
            parse_sizes(" 100, 2000 ,30000 ").unwrap(),
            vec![100, 2000, 30000]
        );
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(parse_sizes(""), Err(CliError::EmptyInput)));
        assert!(matches!(parse_sizes("   "), Err(CliError::EmptyInput)));
    }

    #[test]
    fn test_parse_rejects_empty_token() {
        assert!(matches!(
            parse_sizes("10,,20"),
            Err(CliError::InvalidSize { .. })
        ));
        assert!(matches!(
            parse_sizes("10,20,"),
            Err(CliError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let err = parse_sizes("10,abc").unwrap_err();
        match err {
            CliError::InvalidSize { token } => assert_eq!(token, "abc"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            parse_sizes("-5"),
            Err(CliError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert!(matches!(parse_sizes("0"), Err(CliError::ZeroSize)));
        assert!(matches!(parse_sizes("10,0,20"), Err(CliError::ZeroSize)));
    }
}
