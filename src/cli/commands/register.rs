//! Register command - Add a user to the employee group

use std::path::Path;

use crate::auth::register_user;
use crate::errors::Result;
use crate::fs::{read_users, write_users, RegistryLock};

use super::Session;

pub fn run(cwd: Option<&Path>, username: &str, email: Option<&str>) -> Result<()> {
    let session = Session::open(cwd)?;
    let _lock = RegistryLock::acquire(&session.root)?;
    let mut users = read_users(&session.root)?;
    let user = register_user(&mut users, username, email.map(str::to_string))?;
    write_users(&session.root, &users)?;

    println!("Registered {} (employee)", user.username);
    Ok(())
}
