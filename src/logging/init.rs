use log::LevelFilter;

pub fn level_for(verbose: bool, debug: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Trace
    } else if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn init_logging(verbose: bool, debug: bool, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(level_for(verbose, debug, quiet))
        .format_timestamp(None)
        .init();
}
