//! Logger setup: `log` records go to stdout with a bare message format.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;

const OWN_CRATES: &[&str] = &["rayting", "rayting_cli", "rayting_lib", "rayting_client", "rayting_catalog"];

/// Writes to stdout and, if set, to a log file with ANSI codes removed.
struct Tee {
    file: Option<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger.
///
/// Dependencies only log warnings and errors; our own crates log at the
/// level picked by `--quiet`/`--verbose`.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let file = logfile.map(File::create).transpose()?;
    let level = level_for(quiet, verbose);

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .target(env_logger::Target::Pipe(Box::new(Tee { file })))
        .write_style(env_logger::WriteStyle::Never);
    for krate in OWN_CRATES {
        builder.filter_module(krate, level);
    }

    builder.format(move |buf, record| {
        let prefix = match record.level() {
            log::Level::Error => "error: ",
            log::Level::Warn => "warning: ",
            _ => "",
        };
        if verbose {
            writeln!(
                buf,
                "{} {}{}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                prefix,
                record.args()
            )
        } else {
            writeln!(buf, "{}{}", prefix, record.args())
        }
    });

    // A logger may already be installed (tests); keep that one.
    let _ = builder.try_init();
    Ok(())
}
