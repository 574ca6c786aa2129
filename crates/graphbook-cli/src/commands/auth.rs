//! Login and logout commands

use crate::app::LoginArgs;
use anyhow::Result;
use graphbook_api::Session;
use std::io::{BufRead, Write};

pub fn login(args: LoginArgs) -> Result<()> {
    let password = match args.password {
        Some(p) => p,
        None => prompt_password()?,
    };

    let session = Session::login(&args.username, &password)?;
    println!(
        "Logged in as {}",
        session.username.as_deref().unwrap_or("unknown")
    );
    Ok(())
}

pub fn logout() -> Result<()> {
    Session::logout()?;
    println!("Logged out");
    Ok(())
}

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
