//! Generate the `.env` lines for the admin login.
//!
//! Reads the password from the first argument, or from one line of stdin.

use bcrypt::{hash, verify, DEFAULT_COST};
use flooring_site::config::DEFAULT_ADMIN_EMAIL;
use std::io::BufRead;
use std::process::exit;

const MIN_PASSWORD_LEN: usize = 8;

fn read_password() -> Option<String> {
    if let Some(arg) = std::env::args().nth(1) {
        return Some(arg);
    }
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).ok()?;
    let line = line.trim_end_matches(['\r', '\n']).to_string();
    (!line.is_empty()).then_some(line)
}

fn check_length(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {} characters.", MIN_PASSWORD_LEN));
    }
    Ok(())
}

fn main() {
    let Some(password) = read_password() else {
        eprintln!("Usage: hash-password <PASSWORD>  (or pipe it on stdin)");
        exit(2);
    };
    if let Err(message) = check_length(&password) {
        eprintln!("{}", message);
        exit(1);
    }

    let hashed = match hash(&password, DEFAULT_COST) {
        Ok(hashed) => hashed,
        Err(e) => {
            eprintln!("Error hashing password: {}", e);
            exit(1);
        }
    };
    if !matches!(verify(&password, &hashed), Ok(true)) {
        eprintln!("Generated hash did not verify; not printing it.");
        exit(1);
    }

    println!("# Admin login for .env (cost {})", DEFAULT_COST);
    println!("ADMIN_EMAIL={}", DEFAULT_ADMIN_EMAIL);
    println!("ADMIN_HASH_PASSWORD={}", hashed);
}
