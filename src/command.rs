//! A line-oriented driver that applies scripted operations to one tree.
//!
//! Scripts hold one command per line:
//!
//! ```text
//! # build a small tree
//! insert 50
//! insert 30
//! delete 30
//! search 50
//! print
//! clear
//! ```

use crate::avl_tree::AvlTree;
use crate::bst::BinarySearchTree;
use crate::observer::LogObserver;
use crate::splay_tree::SplayTree;
use crate::SearchTree;
use log::info;
use std::error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::result;
use std::str::FromStr;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidKey { line: usize, error: ParseIntError },
    MissingKey { line: usize, command: String },
    UnknownCommand { line: usize, command: String },
    UnknownVariant(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::InvalidKey { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::InvalidKey { line, error } => {
                write!(f, "line {}: invalid key: {}", line, error)
            },
            Error::MissingKey { line, command } => {
                write!(f, "line {}: `{}` needs a key", line, command)
            },
            Error::UnknownCommand { line, command } => {
                write!(f, "line {}: unknown command `{}`", line, command)
            },
            Error::UnknownVariant(name) => {
                write!(f, "unknown tree `{}`, expected one of bst, avl, splay", name)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Which tree a session drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Bst,
    Avl,
    Splay,
}

impl Variant {
    /// Creates an empty tree of this variant that logs every visit and rotation.
    pub fn tree(self) -> Box<dyn SearchTree<i64>> {
        match self {
            Variant::Bst => Box::new(BinarySearchTree::with_observer(LogObserver)),
            Variant::Avl => Box::new(AvlTree::with_observer(LogObserver)),
            Variant::Splay => Box::new(SplayTree::with_observer(LogObserver)),
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bst" => Ok(Variant::Bst),
            "avl" => Ok(Variant::Avl),
            "splay" => Ok(Variant::Splay),
            _ => Err(Error::UnknownVariant(name.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Variant::Bst => "bst",
            Variant::Avl => "avl",
            Variant::Splay => "splay",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Insert(i64),
    Delete(i64),
    Search(i64),
    Print,
    Clear,
}

impl Command {
    /// Parses one script line. Blank lines and lines starting with `#` yield `None`. `line` is
    /// only used in error messages.
    pub fn parse(input: &str, line: usize) -> Result<Option<Command>> {
        let mut words = input.split_whitespace();
        let name = match words.next() {
            Some(name) if !name.starts_with('#') => name.to_ascii_lowercase(),
            _ => return Ok(None),
        };

        let command = match name.as_str() {
            "insert" | "i" => Command::Insert(parse_key(words.next(), line, &name)?),
            "delete" | "d" => Command::Delete(parse_key(words.next(), line, &name)?),
            "search" | "s" => Command::Search(parse_key(words.next(), line, &name)?),
            "print" | "p" => Command::Print,
            "clear" => Command::Clear,
            _ => {
                return Err(Error::UnknownCommand {
                    line,
                    command: name.clone(),
                })
            },
        };
        Ok(Some(command))
    }
}

fn parse_key(word: Option<&str>, line: usize, command: &str) -> Result<i64> {
    match word {
        Some(word) => word.parse().map_err(|error| Error::InvalidKey { line, error }),
        None => Err(Error::MissingKey {
            line,
            command: command.to_string(),
        }),
    }
}

/// One tree and the commands applied to it.
pub struct Session {
    variant: Variant,
    tree: Box<dyn SearchTree<i64>>,
}

impl Session {
    pub fn new(variant: Variant) -> Self {
        Session {
            variant,
            tree: variant.tree(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn tree(&self) -> &dyn SearchTree<i64> {
        &*self.tree
    }

    /// Applies a command and describes what happened.
    pub fn apply(&mut self, command: Command) -> String {
        match command {
            Command::Insert(key) => {
                if self.tree.insert(key).already_existed {
                    format!("{} already exists", key)
                } else {
                    format!("inserted {}", key)
                }
            },
            Command::Delete(key) => {
                if self.tree.delete(&key).found {
                    format!("deleted {}", key)
                } else {
                    format!("{} not found", key)
                }
            },
            Command::Search(key) => {
                if self.tree.search(&key) {
                    format!("found {}", key)
                } else {
                    format!("{} not found", key)
                }
            },
            Command::Print => self.render(),
            Command::Clear => {
                self.tree.clear();
                String::from("cleared")
            },
        }
    }

    fn render(&self) -> String {
        let keys = self
            .tree
            .keys()
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        match self.tree.snapshot() {
            Some(shape) => format!(
                "{}{} keys, height {}: {}",
                shape,
                self.tree.len(),
                self.tree.height(),
                keys,
            ),
            None => String::from("(empty)"),
        }
    }

    /// Reads commands from `input` until it is exhausted and writes one report per command to
    /// `output`. Stops at the first malformed line.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        info!("running {} session", self.variant);
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            if let Some(command) = Command::parse(&line, index + 1)? {
                let report = self.apply(command);
                writeln!(output, "{}", report)?;
            }
        }
        Ok(())
    }
}
