use crate::errors::IoContext;
use log::{Level, LevelFilter};
use std::{io, path::Path};

/// Initialize logging with the fern logger.
///
/// Every record at `Debug` or above is handed to `callback`, and also printed to stderr.
pub fn log<F: Fn(Level, &str) + Send + Sync + 'static>(callback: F) -> Result<(), fern::InitError> {
    dispatch(callback, None)
}

/// Initialize logging as `log` does, additionally appending formatted records to `path`.
pub fn log_to_file<F, P>(callback: F, path: P) -> Result<(), fern::InitError>
where
    F: Fn(Level, &str) + Send + Sync + 'static,
    P: AsRef<Path>,
{
    dispatch(callback, Some(path.as_ref()))
}

fn dispatch<F: Fn(Level, &str) + Send + Sync + 'static>(
    callback: F,
    file: Option<&Path>,
) -> Result<(), fern::InitError> {
    let mut logger = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} country-lookup{}] {}",
                record.level(),
                match (record.file(), record.line()) {
                    (Some(file), Some(line)) => format!(":{}:{}", file, line),
                    _ => "".into(),
                },
                message
            ))
        })
        .chain(io::stderr());

    if let Some(path) = file {
        let log = fern::log_file(path)
            .with_context(|why| format!("failed to create log file at {:?}: {}", path, why))?;
        logger = logger.chain(log);
    }

    fern::Dispatch::new()
        .level(LevelFilter::Debug)
        // This will be used by the caller to collect or display records.
        .chain(fern::Output::call(move |record| {
            callback(record.level(), &format!("{}", record.args()))
        }))
        .chain(logger)
        .apply()?;

    Ok(())
}
