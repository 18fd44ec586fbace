use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;
use crate::tracker::types::announce_query::AnnounceQuery;

/// Splits a raw query string into lowercased keys and percent-decoded values.
///
/// A key without `=` is recorded with no values. Only the first `=` of an
/// item separates key from value. Values stay raw bytes since `info_hash`
/// and `peer_id` are binary.
pub fn parse_query(query: Option<&str>) -> AnnounceQuery {
    let mut queries = AnnounceQuery::new();
    let Some(query) = query else {
        return queries;
    };

    for query_item in query.split('&').filter(|item| !item.is_empty()) {
        let (key_name_raw, value_data_raw) = match query_item.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (query_item, None),
        };
        let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let values = queries.entry(key_name).or_default();
        if let Some(value_data_raw) = value_data_raw {
            values.push(percent_encoding::percent_decode_str(value_data_raw).collect::<Vec<u8>>());
        }
    }
    queries
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|_| CustomError::new("Failed to initialize logging."))?;
    info!("logging initialized.");
    Ok(())
}
