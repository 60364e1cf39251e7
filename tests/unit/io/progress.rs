//! Tests for progress display and log level selection

#[cfg(test)]
mod tests {
    use log::{Level, LevelFilter, Log, Metadata};
    use marginweave::io::progress::{ConsoleLogger, ProgressManager, level_for};

    // Tests verbosity counts map to increasing detail
    // Verified by mapping no flags to Info
    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, false), LevelFilter::Warn);
        assert_eq!(level_for(1, false), LevelFilter::Info);
        assert_eq!(level_for(2, false), LevelFilter::Debug);
        assert_eq!(level_for(5, false), LevelFilter::Trace);
        assert_eq!(level_for(3, true), LevelFilter::Error);
    }

    // Tests the logger filters by its level
    // Verified by comparing levels the wrong way round
    #[test]
    fn test_console_logger_enabled() {
        let manager = ProgressManager::new();
        let logger = ConsoleLogger::new(LevelFilter::Info, manager.multi_progress().clone());
        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    // Tests the pair bar lifecycle without a terminal
    // Verified by incrementing a bar that was never started
    #[test]
    fn test_progress_lifecycle() {
        let mut manager = ProgressManager::default();
        manager.complete_pair();
        manager.start_pairs();
        for _ in 0..256 {
            manager.complete_pair();
        }
        manager.finish();
    }
}
