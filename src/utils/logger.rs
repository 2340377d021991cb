use env_logger::Builder;
use log::LevelFilter;

pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(Some(env_logger::TimestampPrecision::Millis))
        .format_target(true)
        .parse_env("RUST_LOG");
    // 二重初期化は無視する
    let _ = builder.try_init();
}
