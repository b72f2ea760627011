/*!
  The console collaborators of the machine.

  The machine formats and parses every number itself; a console only moves
  strings. That keeps the trait narrow enough that tests can substitute a
  scripted double and assert on exactly what the machine said.
*/

use std::io;
use std::io::Write;

// ANSI escape for rendering machine I/O in green, and the sequence that
// tells the terminal to stop printing in colour.
const GREEN: &str = "\x1B[92m";
const RESET: &str = "\x1B[0m";

pub trait Console {
  /// Prints `prompt` and blocks until a full line is available. The
  /// returned line carries no trailing newline.
  fn read_line(&mut self, prompt: &str) -> io::Result<String>;

  /// Writes one line of pre-formatted machine output.
  fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// The process stdin/stdout console used outside of tests.
pub struct StdConsole;

impl Console for StdConsole {
  fn read_line(&mut self, prompt: &str) -> io::Result<String> {
    print!("{}{}{}", GREEN, prompt, RESET);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
      line.pop();
    }
    Ok(line)
  }

  fn write_line(&mut self, text: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}{}{}", GREEN, text, RESET)
  }
}

#[cfg(test)]
pub mod testing {
  use std::cell::RefCell;
  use std::collections::VecDeque;
  use std::io;
  use std::rc::Rc;

  use super::Console;

  /// A console double that replays scripted input lines and captures
  /// output into a handle the test keeps a clone of.
  pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    outputs: Rc<RefCell<Vec<String>>>,
  }

  impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> (ScriptedConsole, Rc<RefCell<Vec<String>>>) {
      let outputs = Rc::new(RefCell::new(Vec::new()));
      let console = ScriptedConsole {
        inputs: inputs.iter().map(|line| line.to_string()).collect(),
        outputs: Rc::clone(&outputs),
      };
      (console, outputs)
    }
  }

  impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
      self.inputs.pop_front().ok_or_else(|| {
        io::Error::new(io::ErrorKind::UnexpectedEof, "script ran out of input lines")
      })
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
      self.outputs.borrow_mut().push(text.to_string());
      Ok(())
    }
  }
}
