use crate::error::{Error, Result};

/// Split a shell-like argument string into an argument vector.
///
/// Arguments are separated by ASCII whitespace. Single or double quotes group
/// text; inside quotes a backslash only escapes the active quote character.
/// Outside quotes a backslash escapes any character.
pub fn split_args(line: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    // Quoted empty strings ("") still produce an argument.
    let mut started = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(q), '\\') => {
                let next = chars
                    .next()
                    .ok_or_else(|| Error::BadQuote("unterminated backslash".to_string()))?;
                if next != q {
                    current.push('\\');
                }
                current.push(next);
            }
            (Some(_), c) => current.push(c),
            (None, c) if c.is_ascii_whitespace() => {
                if started {
                    args.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            (None, '"' | '\'') => {
                quote = Some(c);
                started = true;
            }
            (None, '\\') => {
                let next = chars
                    .next()
                    .ok_or_else(|| Error::BadQuote("unterminated backslash".to_string()))?;
                current.push(next);
                started = true;
            }
            (None, c) => {
                current.push(c);
                started = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(Error::BadQuote(format!("unterminated {} quote", q)));
    }
    if started {
        args.push(current);
    }
    Ok(args)
}
