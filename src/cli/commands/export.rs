//! Export command - Write all entries as CSV

use std::io;
use std::path::Path;

use crate::errors::Result;
use crate::workflow::export_entries;

use super::{require_user, Session};

pub fn run(cwd: Option<&Path>, user: Option<&str>, output: Option<&Path>) -> Result<()> {
    let actor = require_user(user)?;
    let session = Session::open(cwd)?;

    match output {
        Some(path) => {
            // Render first so a refused export leaves no file behind
            let mut buffer = Vec::new();
            let rows = export_entries(
                &session.store,
                &session.users,
                actor,
                &mut buffer,
                &session.config,
            )?;
            std::fs::write(path, buffer)?;
            eprintln!("Exported {} entries to {}", rows, path.display());
        }
        None => {
            let stdout = io::stdout();
            export_entries(
                &session.store,
                &session.users,
                actor,
                stdout.lock(),
                &session.config,
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{create, init, register};
    use crate::cli::EntryFields;
    use crate::errors::RegistryError;
    use crate::export::HEADERS;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        init::run(Some(temp.path()), Some("root"), false).unwrap();
        register::run(Some(temp.path()), "alice", None).unwrap();
        let fields = EntryFields {
            building: Some("Корпус 1".to_string()),
            section: Some("ЭОМ".to_string()),
            mtr: Some("кабель".to_string()),
            quantity: Some(10),
            responsible: Some("Петров".to_string()),
            ..Default::default()
        };
        create::run(Some(temp.path()), Some("alice"), fields, true).unwrap();
        temp
    }

    #[test]
    fn test_export_to_file() {
        let temp = setup();
        let out = temp.path().join("entries.csv");
        run(Some(temp.path()), Some("root"), Some(&out)).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), HEADERS.join(","));
        let row = lines.next().unwrap();
        assert!(row.starts_with("Корпус 1,ЭОМ,кабель,10,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_export_admin_only() {
        let temp = setup();
        let out = temp.path().join("entries.csv");
        let err = run(Some(temp.path()), Some("alice"), Some(&out)).unwrap_err();
        assert!(matches!(err, RegistryError::Forbidden(_)));
        assert!(!out.exists());
    }
}
