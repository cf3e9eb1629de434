//! Tests for tile extraction progress tracking

#[cfg(test)]
mod tests {
    use retile::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a fresh manager counts ticks before being started
    // Verified by dropping ticks on the hidden bar
    #[test]
    fn test_progress_manager_new() {
        let pm = ProgressManager::new();

        pm.tile_extracted();
        pm.tile_extracted();

        assert_eq!(pm.position(), 2);
        pm.finish();
    }

    // Tests default trait implementation
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let pm1 = ProgressManager::new();
        let pm2 = ProgressManager::default();

        assert_eq!(pm1.position(), pm2.position());
    }

    // Tests starting a file resets the count
    // Verified by reusing the previous bar on start
    #[test]
    fn test_start_resets_position() {
        let mut pm = ProgressManager::new();
        pm.tile_extracted();

        pm.start(Path::new("dir/image.png"), 4);
        assert_eq!(pm.position(), 0);

        for _ in 0..4 {
            pm.tile_extracted();
        }
        assert_eq!(pm.position(), 4);
        pm.finish();
    }
}
