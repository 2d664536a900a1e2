use owo_colors::OwoColorize;

/// installs the global logger, records below `level` are discarded.
///
/// the gpu backend crates are very chatty so they are capped at warnings
///
/// # Errors
///
/// fails if a logger was already installed
pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError>
{
    fern::Dispatch::new()
        .format(|out, message, record|
        {
            let level = match record.level()
            {
                log::Level::Error => record.level().red().to_string(),
                log::Level::Warn => record.level().yellow().to_string(),
                log::Level::Info => record.level().green().to_string(),
                log::Level::Debug => record.level().blue().to_string(),
                log::Level::Trace => record.level().dimmed().to_string(),
            };

            out.finish(format_args!("[{level} {}] {message}", record.target().dimmed()))
        })
        .level(level)
        .level_for("wgpu_core", log::LevelFilter::Warn)
        .level_for("wgpu_hal", log::LevelFilter::Warn)
        .level_for("naga", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
}
