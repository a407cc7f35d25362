// src/main.rs
//
// Calculatrice douzénale: point d’entrée (binaire `douze`)
// ---------------------------------------------------------
// But:
// - Lire la ligne de commande (clap)
// - Installer le journal (tracing) sur stderr : stdout reste aux résultats
// - Déléguer à app::cli::executer ; échec => `erreur : ...` + code 1
//
// Niveau du journal : RUST_LOG s’il est défini, sinon `warn` (`debug` avec -v).

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;

use app::cli::{executer, Args};

/* ------------------------ Journal ------------------------ */

fn installer_journal(verbeux: bool) {
    let defaut = if verbeux { "debug" } else { "warn" };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/* ------------------------ Entrée ------------------------ */

fn main() -> ExitCode {
    let args = Args::parse();
    installer_journal(args.verbose);
    info!(version = env!("CARGO_PKG_VERSION"), "douze");

    match executer(&args, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("erreur : {e}");
            ExitCode::FAILURE
        }
    }
}
