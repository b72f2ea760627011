// The state observation methods exist for hosts that drive the machine in
// bounded batches; nothing in this binary calls them.
#![allow(dead_code)]

#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

mod bytecode;
mod console;
mod error;
mod machine;
mod random;

use std::env;
use std::fs;
use std::process;

use crate::machine::Machine;

fn main() {
  let mut args = env::args();
  let name = args.next().unwrap_or_else(|| String::from("widechip"));
  let path = match args.next() {
    Some(path) => path,
    None => {
      eprintln!("usage: {} <program file>", name);
      process::exit(2);
    }
  };

  let text = match fs::read_to_string(&path) {
    Ok(text) => text,
    Err(error) => {
      eprintln!("{}: {}", path, error);
      process::exit(1);
    }
  };

  let image = bytecode::parse_image(&text);

  let result = Machine::with_program(&image).and_then(|mut machine| machine.run());
  if let Err(error) = result {
    eprintln!("{}", error);
    process::exit(1);
  }
}
