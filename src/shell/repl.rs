//! Interactive command loop
//!
//! Reads commands from stdin and renders service outcomes. Failures are
//! reported and the loop continues; an active lock is reported with its
//! remaining time rather than blocking the process.

use log::error;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::auth::AuthService;
use crate::error::{AuthError, PassgateError};
use crate::shell::commands::{Command, parse_command};

/// Runs the shell until `quit` or end of input.
pub fn run(service: &mut AuthService) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("passgate - local authentication (type 'help' for commands)");

    loop {
        print!("passgate> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match parse_command(&line?) {
            Command::Register => {
                let username = prompt(&mut lines, "Username (5 lowercase letters): ")?;
                let password = prompt(&mut lines, "Password (8 chars, a-z A-Z 0-9): ")?;
                match service.register(&username, &password) {
                    Ok(()) => println!("User registered successfully."),
                    Err(e) => report(&e),
                }
            }
            Command::Login => {
                let username = prompt(&mut lines, "Username: ")?;
                let password = prompt(&mut lines, "Password: ")?;
                match service.authenticate(&username, &password, Instant::now()) {
                    Ok(()) => println!("Login successful."),
                    Err(e) => report(&e),
                }
            }
            Command::Compact => match service.compact_store() {
                Ok(kept) => println!("Store compacted, {} records kept.", kept),
                Err(e) => report(&e),
            },
            Command::Help => print_help(),
            Command::Quit => {
                println!("Goodbye.");
                break;
            }
            Command::Unknown(cmd) => {
                if !cmd.is_empty() {
                    println!("Unknown command '{}', type 'help' for commands.", cmd);
                }
            }
        }
    }

    Ok(())
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Ok(String::new()),
    }
}

fn report(err: &PassgateError) {
    match err {
        PassgateError::Auth(AuthError::WrongPassword { attempts }) => {
            println!("Wrong password ({} failed attempts).", attempts);
        }
        PassgateError::Auth(AuthError::Locked { remaining }) => {
            println!(
                "Too many attempts. Account locked, try again in {} seconds.",
                remaining.as_secs()
            );
        }
        PassgateError::Auth(AuthError::Banned(_)) => {
            println!("Account permanently banned.");
        }
        PassgateError::Auth(e) => println!("{}", e),
        PassgateError::Storage(e) => {
            error!("Storage failure: {}", e);
            println!("Storage failure: {}. Operation aborted.", e);
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  register  - create a new user");
    println!("  login     - authenticate an existing user");
    println!("  compact   - rewrite the store, dropping malformed records");
    println!("  help      - show this help");
    println!("  quit      - exit");
}
