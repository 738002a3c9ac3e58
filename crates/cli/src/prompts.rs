use std::io::{self, Write};

use anyhow::Result;

/// Print `prompt` and read one trimmed line from stdin.
///
/// Returns `None` once stdin reaches end of file.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
  print!("{}", prompt);
  io::stdout().flush()?;

  let mut input = String::new();
  if io::stdin().read_line(&mut input)? == 0 {
    return Ok(None);
  }
  Ok(Some(input.trim().to_string()))
}

/// Ask a yes/no question. End of file counts as no.
pub fn confirm(message: &str) -> Result<bool> {
  let answer = read_line(&format!("{} (y/n): ", message))?;
  Ok(answer.is_some_and(|a| matches!(a.to_ascii_lowercase().as_str(), "y" | "yes")))
}
