use crate::log::LOGGER;
use ::log::{debug, error, info};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use winstat::{Backend, Stat};

mod log;

fn main() -> ExitCode {
    // Load arguments.
    let args = if std::env::args().any(|a| a == "--debug") {
        match Args::from_file(".winstat-debug") {
            Ok(v) => v,
            Err(e) => {
                log::init(false);
                error!("{e}.");
                return ExitCode::FAILURE;
            }
        }
    } else {
        Args::parse()
    };

    // Begin logger.
    log::init(args.verbose);

    if let Some(path) = &args.log_file {
        match File::create(path) {
            Ok(v) => {
                if let Some(l) = LOGGER.get() {
                    l.set_file(v);
                }
            }
            Err(e) => error!("Failed to create {}: {e}.", path.display()),
        }
    }

    debug!("Using {:?} backend.", Backend::current());

    let ok = run(&args);

    ::log::logger().flush();

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(args: &Args) -> bool {
    let mut ok = true;
    let mut entries = Vec::with_capacity(args.paths.len());

    for path in &args.paths {
        match winstat::stat(path) {
            Ok(stat) => entries.push(Entry {
                path: path.clone(),
                stat,
            }),
            Err(e) => {
                error!("Cannot stat {}: {e}.", path.display());
                ok = false;
            }
        }
    }

    let mut stdout = std::io::stdout().lock();
    let written = match args.format.unwrap_or_default() {
        OutputFormat::Text => entries
            .iter()
            .try_for_each(|e| writeln!(stdout, "{}", text_line(&e.path, &e.stat)))
            .map_err(OutputError::from),
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut stdout, &entries).map_err(OutputError::from)
        }
    };

    if let Err(e) = written {
        error!("Failed to write output: {e}.");
        return false;
    }

    info!("{} of {} path(s) succeeded.", entries.len(), args.paths.len());

    ok
}

fn text_line(path: &Path, stat: &Stat) -> String {
    format!(
        "{}: dev={} ino={} size={} atime={} mtime={} ctime={}",
        path.display(),
        stat.device_id(),
        stat.file_index(),
        stat.size(),
        stat.access_time().unix_secs(),
        stat.modify_time().unix_secs(),
        stat.creation_time().unix_secs()
    )
}

#[derive(Parser, Deserialize)]
#[command(version, about)]
#[serde(rename_all = "kebab-case")]
pub struct Args {
    /// Files to stat.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    #[arg(long, short, value_enum)]
    format: Option<OutputFormat>,

    /// Also write log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, short)]
    #[serde(default)]
    verbose: bool,
}

impl Args {
    fn from_file(path: impl AsRef<Path>) -> Result<Self, ArgsError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ArgsError::OpenFailed(path.to_owned(), e))?;

        serde_yaml::from_reader(file).map_err(|e| ArgsError::ReadFailed(path.to_owned(), e))
    }
}

#[derive(Clone, Copy, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum OutputFormat {
    #[default]
    Text,
    Yaml,
}

#[derive(Serialize)]
struct Entry {
    path: PathBuf,
    stat: Stat,
}

#[derive(Debug, Error)]
enum ArgsError {
    #[error("failed to open {}: {1}", .0.display())]
    OpenFailed(PathBuf, #[source] std::io::Error),

    #[error("failed to read {}: {1}", .0.display())]
    ReadFailed(PathBuf, #[source] serde_yaml::Error),
}

#[derive(Debug, Error)]
enum OutputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
