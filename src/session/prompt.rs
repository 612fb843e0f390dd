use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// What the operator wants done with the album pair on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Quit,
    RemoveLeft,
    RemoveRight,
}

impl FromStr for Decision {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(Decision::Continue),
            "q" => Ok(Decision::Quit),
            "rl" => Ok(Decision::RemoveLeft),
            "rr" => Ok(Decision::RemoveRight),
            _ => Err(()),
        }
    }
}

/// Line-oriented operator console.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `question` and read one line. `None` at end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask until one of the decision commands is typed. End of input quits.
    pub fn decision(&mut self) -> io::Result<Decision> {
        loop {
            let Some(line) = self.ask("[c]ontinue, [q]uit, [rl] remove left, [rr] remove right: ")?
            else {
                return Ok(Decision::Quit);
            };
            match line.parse() {
                Ok(d) => return Ok(d),
                Err(()) => writeln!(self.output, "unknown command: {}", line.trim())?,
            }
        }
    }

    /// Ask a yes/no question until `y` or `n` is typed. End of input is no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            let Some(line) = self.ask(&format!("{question} [y/n]: "))? else {
                return Ok(false);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {}
            }
        }
    }
}
