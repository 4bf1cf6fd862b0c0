//! Terminal front ends.
//!
//! - [`run_console`]: ask for an image path and a filter name once, then
//!   process the file.
//! - [`run_shell`]: a small command loop over a [`Session`], mirroring the
//!   open / filter buttons / status line of a desktop window.
//!
//! Both are generic over their input and output so they can be driven from
//! tests. Filter and file errors are printed as messages; only failures of
//! the terminal streams themselves are returned.

use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::registry::{FilterName, FilterRegistry};
use crate::session::{process_file, Session};

fn filter_list() -> String {
    FilterName::ALL.map(|f| f.as_str()).join(" | ")
}

/// Read one line, `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

/// Strip whitespace and the quotes terminals add to dragged-in paths.
fn clean_path(raw: &str) -> &str {
    raw.trim().trim_matches(|c: char| c == '"' || c == '\'')
}

/// Prompt for a path and a filter name, then filter the image once.
pub fn run_console<R: BufRead, W: Write>(config: &Config, input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "\nImage Filter")?;
    writeln!(output, "Filters: {}", filter_list())?;

    let Some(raw_path) = prompt(input, output, "Drag your image here or type its path: ")? else {
        return Ok(());
    };
    let path = clean_path(&raw_path);
    if !std::path::Path::new(path).is_file() {
        writeln!(output, "Error: Invalid image path!")?;
        return Ok(());
    }

    let Some(filter) = prompt(input, output, "Choose a filter: ")? else {
        return Ok(());
    };
    let filter = filter.trim().to_lowercase();

    let registry = FilterRegistry::new();
    match process_file(config, &registry, path, &filter) {
        Ok(result) => writeln!(output, "Saved as '{}'", result.output_path.display())?,
        Err(e) => writeln!(output, "Error: {e}")?,
    }
    Ok(())
}

const SHELL_HELP: &str = "\
Commands:
  open <path>       load an image
  apply <filter>    filter the loaded image (or just type the filter name)
  filters           list available filters
  status            show the status line
  help              show this help
  quit              leave";

/// Command loop over a [`Session`]. Ends on `quit`, `exit` or end of input.
pub fn run_shell<R: BufRead, W: Write>(session: &mut Session, input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "Image Filter shell. Type 'help' for commands.")?;
    writeln!(output, "{}", session.status())?;

    while let Some(line) = prompt(input, output, "> ")? {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(output, "{SHELL_HELP}")?,
            "status" => writeln!(output, "{}", session.status())?,
            "filters" => {
                for name in session.registry().names() {
                    writeln!(output, "  {:<14} {}", name.as_str(), name.label())?;
                }
            }
            "open" => {
                if arg.is_empty() {
                    writeln!(output, "Usage: open <path>")?;
                    continue;
                }
                match session.open_image(clean_path(arg)) {
                    Ok(_) => writeln!(output, "{}", session.status())?,
                    Err(e) => writeln!(output, "Error: Failed to load image: {e}")?,
                }
            }
            "apply" => apply(session, arg, output)?,
            other => apply(session, other, output)?,
        }
    }
    Ok(())
}

fn apply<W: Write>(session: &mut Session, filter: &str, output: &mut W) -> io::Result<()> {
    if session.image().is_none() {
        return writeln!(output, "Warning: Please open an image first!");
    }
    match session.apply_filter(filter) {
        Ok(_) => writeln!(output, "{}", session.status()),
        Err(e) => writeln!(output, "Error: Filter failed: {e}"),
    }
}
