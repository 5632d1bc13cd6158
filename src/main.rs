//! Registry CLI - procurement entries with two-stage AN/GIP approval

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use registry::cli::commands::{approve, create, edit, export, init, list, register, roles, show};
use registry::cli::{Cli, Commands};
use registry::errors::to_exit_code;
use registry::store::EntryFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> registry::Result<()> {
    let cwd = cli.cwd.as_deref();
    let user = cli.user.as_deref();

    match cli.command {
        Some(Commands::Init { admin, force }) => init::run(cwd, admin.as_deref(), force),
        Some(Commands::Register { username, email }) => {
            register::run(cwd, &username, email.as_deref())
        }
        Some(Commands::Grant { username, role }) => roles::grant(cwd, user, &username, role),
        Some(Commands::Revoke { username, role }) => roles::revoke(cwd, user, &username, role),
        Some(Commands::Create { fields, json }) => create::run(cwd, user, fields, json),
        Some(Commands::Edit {
            id,
            fields,
            clear_paid_date,
            clear_delivery_deadline,
            json,
        }) => {
            let changes =
                edit::changes_from_fields(fields, clear_paid_date, clear_delivery_deadline);
            edit::run(cwd, user, id, changes, json)
        }
        Some(Commands::Approve { id, kind, json }) => approve::run(cwd, user, id, &kind, json),
        Some(Commands::List {
            query,
            an,
            gip,
            done,
            paid,
            limit,
            json,
        }) => {
            let filter = EntryFilter {
                query,
                an_approved: an,
                gip_approved: gip,
                done,
                paid,
                limit,
            };
            list::run(cwd, user, filter, json)
        }
        Some(Commands::Show { id, json }) => show::run(cwd, user, id, json),
        Some(Commands::Export { output }) => export::run(cwd, user, output.as_deref()),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
