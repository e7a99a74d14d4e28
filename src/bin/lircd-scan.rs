use clap::{ArgAction, Parser};
use lircd_scan::{lircd_conf::RemoteConf, walk::conf_files};
use log::{Level, LevelFilter, Metadata, Record};
use std::{path::PathBuf, process::exit};

#[derive(Parser)]
#[command(
    name = "lircd-scan",
    version = env!("CARGO_PKG_VERSION"),
    about = "List lircd.conf remotes with a given number of bits"
)]
struct App {
    /// Increase message verbosity
    #[arg(long, short, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Silence all warnings
    #[arg(long, short, conflicts_with = "verbose")]
    quiet: bool,

    /// Only list remotes with this number of bits
    #[arg(long, short, default_value_t = 16)]
    bits: i64,

    /// Directories to search for .conf files
    #[arg(name = "DIRECTORY", required = true)]
    directories: Vec<PathBuf>,
}

fn main() {
    let args = App::parse();

    log::set_logger(&CLI_LOGGER).unwrap();

    let level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    log::set_max_level(level);

    let mut status = 0;

    for dir in &args.directories {
        let files = match conf_files(dir) {
            Ok(files) => files,
            Err(e) => {
                log::error!("{e}");
                status = 2;
                continue;
            }
        };

        for path in files {
            match RemoteConf::parse_file(&path) {
                Ok(remote) if remote.matches(args.bits) => {
                    println!("{} {:?}", path.display(), remote.codes);
                }
                Ok(remote) => {
                    log::debug!(
                        "{}: skipping remote '{}' with {} bits and {} codes",
                        path.display(),
                        remote.name,
                        remote.bits,
                        remote.codes.len()
                    );
                }
                Err(e) => match e.line() {
                    Some(line) => log::error!("{}:{line}: {e}", path.display()),
                    None => log::error!("{}: {e}", path.display()),
                },
            }
        }
    }

    exit(status);
}

static CLI_LOGGER: CliLogger = CliLogger;

struct CliLogger;

impl log::Log for CliLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}: {}",
                match record.level() {
                    Level::Trace => "trace",
                    Level::Debug => "debug",
                    Level::Info => "info",
                    Level::Warn => "warn",
                    Level::Error => "error",
                },
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
