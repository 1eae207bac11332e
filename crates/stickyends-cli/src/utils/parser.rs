use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid pair '{0}'. Expected 'SEQ1,SEQ2' (e.g., 'gatcc,aggat').")]
    InvalidPairFormat(String),

    #[error("Line {line}: expected two whitespace-separated sequences, found {found}.")]
    InvalidPairLine { line: usize, found: usize },

    #[error("Component '{component}' cannot be empty in pair '{pair}'.")]
    EmptyComponent {
        component: &'static str,
        pair: String,
    },
}

/// Parses a `SEQ1,SEQ2` command-line pair.
pub fn parse_pair(input: &str) -> Result<(String, String), ParseError> {
    let (first, second) = input
        .split_once(',')
        .ok_or_else(|| ParseError::InvalidPairFormat(input.to_string()))?;
    let (first, second) = (first.trim(), second.trim());
    if second.contains(',') {
        return Err(ParseError::InvalidPairFormat(input.to_string()));
    }
    if first.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "seq1",
            pair: input.to_string(),
        });
    }
    if second.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "seq2",
            pair: input.to_string(),
        });
    }
    Ok((first.to_string(), second.to_string()))
}

/// Non-empty, comment-stripped lines with their 1-based line numbers.
fn content_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parses a pair file: one whitespace-separated pair per line.
pub fn parse_pair_lines(content: &str) -> Result<Vec<(String, String)>, ParseError> {
    content_lines(content)
        .map(|(line, text)| {
            let fields: Vec<&str> = text.split_whitespace().collect();
            match fields.as_slice() {
                [first, second] => Ok((first.to_string(), second.to_string())),
                _ => Err(ParseError::InvalidPairLine {
                    line,
                    found: fields.len(),
                }),
            }
        })
        .collect()
}

/// Every whitespace-separated sequence in a file, in order.
pub fn parse_sequence_tokens(content: &str) -> Vec<String> {
    content_lines(content)
        .flat_map(|(_, text)| text.split_whitespace().map(str::to_string))
        .collect()
}
