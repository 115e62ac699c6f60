use log::error;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use visual_trees::command::{Result, Session, Variant};

const USAGE: &str = "usage: visual-trees <bst|avl|splay> [script]";

fn run(variant: &str, script: Option<String>) -> Result<()> {
    let variant: Variant = variant.parse()?;
    let mut session = Session::new(variant);
    let stdout = io::stdout();
    match script {
        Some(path) => session.run(BufReader::new(File::open(path)?), stdout.lock()),
        None => {
            let stdin = io::stdin();
            session.run(stdin.lock(), stdout.lock())
        },
    }
}

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let variant = match args.next() {
        Some(variant) => variant,
        None => {
            eprintln!("{}", USAGE);
            process::exit(2);
        },
    };

    if let Err(err) = run(&variant, args.next()) {
        error!("{}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}
