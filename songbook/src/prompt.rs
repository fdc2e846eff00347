//! Line-oriented prompt helpers for the interactive shell
//!
//! Every helper returns `Ok(None)` on end of input so callers can wind
//! the session down instead of spinning on a closed stdin.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Print a prompt and read one trimmed line. `None` means stdin hit EOF.
pub fn read_line(message: &str) -> io::Result<Option<String>> {
    print!("{} ", message);
    io::stdout().flush()?;

    let mut buf = String::new();
    let bytes = io::stdin().lock().read_line(&mut buf)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_owned()))
}

/// Offer the choice between going ahead with an action and returning to
/// the menu.
pub fn proceed(message: &str) -> io::Result<bool> {
    let Some(line) = read_line(&format!("{} [Enter = yes, b = back]", message))? else {
        return Ok(false);
    };
    Ok(!line.eq_ignore_ascii_case("b"))
}

/// Read a required free-text value, re-prompting until it is non-empty.
pub fn text(message: &str) -> io::Result<Option<String>> {
    loop {
        let Some(line) = read_line(message)? else {
            return Ok(None);
        };
        if line.is_empty() {
            println!("A value is required.");
            continue;
        }
        return Ok(Some(line));
    }
}

/// Read a number, re-prompting until the input parses. Unparsable input
/// never reaches the catalogs.
pub fn number<T: FromStr>(message: &str) -> io::Result<Option<T>> {
    loop {
        let Some(line) = read_line(message)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Present a numbered list and return the chosen index, re-prompting
/// until the selection is in range.
pub fn select(message: &str, options: &[String]) -> io::Result<Option<usize>> {
    println!("{}", message);
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }

    loop {
        let Some(line) = read_line("Select:")? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Please enter a number between 1 and {}.", options.len()),
        }
    }
}
