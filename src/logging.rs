use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

pub fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("gov")
        .build();

    // A logger may already be installed (tests, repeated init); keep the first one.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
    log::set_max_level(level);

    log::debug!("Logging initialized at level {level}");
}

#[cfg(test)]
mod tests {
    use super::init_logging;
    use simplelog::LevelFilter;

    #[test]
    fn init_logging_sets_global_level() {
        init_logging(LevelFilter::Warn);
        assert_eq!(log::max_level(), log::LevelFilter::Warn);

        init_logging(LevelFilter::Off);
        assert_eq!(log::max_level(), log::LevelFilter::Off);
    }
}
