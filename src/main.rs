use std::any::Any;
use std::io::{self, IsTerminal};
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use veggie::scroll::Interrupt;
use veggie::terminal::Surface;
use veggie::theme::stderr_theme;
use veggie::{session, ArtStore, Cli, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    // Panics are reported below, after the terminal guard has unwound
    panic::set_hook(Box::new(|info| {
        tracing::debug!("panic: {}", info);
    }));

    let result = match panic::catch_unwind(AssertUnwindSafe(|| run(&cli))) {
        Ok(result) => result,
        Err(payload) => Err(unexpected_failure(payload.as_ref())),
    };

    match result {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => {
            tracing::info!("interrupted");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let theme = stderr_theme();
            eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: &Cli) -> Result<Outcome> {
    let options = cli.options();
    let store = ArtStore::embedded()?;
    let mut interrupt = Interrupt::install().context("Failed to install Ctrl+C handler")?;

    session::run(&options, &store, Surface::stdout(), &mut interrupt)
}

fn init_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn unexpected_failure(payload: &(dyn Any + Send)) -> anyhow::Error {
    anyhow::anyhow!("Unexpected failure: {}", panic_message(payload))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with no message".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_from_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("frame fault");
        assert_eq!(panic_message(payload.as_ref()), "frame fault");
    }

    #[test]
    fn panic_message_from_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(format!("row {} out of range", 7));
        assert_eq!(panic_message(payload.as_ref()), "row 7 out of range");
    }

    #[test]
    fn panic_message_from_other_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(payload.as_ref()), "panic with no message");
    }

    #[test]
    fn caught_panic_becomes_unexpected_failure() {
        let payload = panic::catch_unwind(|| panic!("compositor exploded")).unwrap_err();
        let err = unexpected_failure(payload.as_ref());
        assert_eq!(
            format!("{:#}", err),
            "Unexpected failure: compositor exploded"
        );
    }
}
