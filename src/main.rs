use anyhow::Context;
use clap::Parser;
use concord::config::Cli;
use concord::transfer::{RsyncRunner, DEFAULT_PROGRAM};
use concord::ui::TerminalConfirm;
use concord::{SyncRequest, Syncer};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Ctrl-C outside the raw-mode prompt (rsync running, piped stdin) ends
    // the command quietly; rsync gets the same signal from the terminal.
    ctrlc::set_handler(|| {
        let _ = console::Term::stderr().show_cursor();
        eprintln!();
        std::process::exit(0);
    })
    .context("could not install the Ctrl-C handler")?;

    let cli = Cli::parse();
    let request = SyncRequest::from(cli.command);

    let cwd = std::env::current_dir().context("could not read the current directory")?;
    let home = dirs::home_dir().context("could not determine the home directory")?;
    // cwd comes back canonical, so compare against a canonical home
    let home = std::fs::canonicalize(&home).unwrap_or(home);
    let program = std::env::var("CONCORD_RSYNC").unwrap_or_else(|_| DEFAULT_PROGRAM.to_string());

    log::debug!("concord v{} {:?} from {}", concord::VERSION, request, cwd.display());

    let mut syncer = Syncer::new(RsyncRunner, TerminalConfirm, home).with_program(program);
    syncer.sync(&cwd, &request)?;

    Ok(())
}
