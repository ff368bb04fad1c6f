use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::time::SystemTime;

pub fn setup_logger(level: LevelFilter, log_path: Option<&str>) -> Result<(), fern::InitError> {
    let colors = ColoredLevelConfig::new()
        .info(Color::Magenta)
        .warn(Color::Yellow)
        .error(Color::Red);

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());
    if let Some(path) = log_path {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    dispatch.apply()?;
    Ok(())
}
