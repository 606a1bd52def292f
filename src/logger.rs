use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

#[macro_export]
macro_rules! chain_info {
    ($($arg:tt)*) => {
        log::info!(target: "chain", "{}", format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! miner_info {
    ($($arg:tt)*) => {
        log::info!(target: "miner", "{}", format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! miner_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "miner", "{}", format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! miner_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "miner", "{}", format_args!($($arg)*));
    };
}

pub fn init_logger(level: LevelFilter) {
    Builder::new()
        .format(|buf, record| {
            // Prepend prefix based on the log target
            let prefix = match record.target() {
                "chain" => "[CHAIN]",
                "miner" => "[MINER]",
                _ => "[GENERAL]", // Default prefix
            };
            writeln!(
                buf,
                "{} [{}] [{}] {}",
                prefix,
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .init();
}
