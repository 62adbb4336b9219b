//! CSV export of the episode-reward sequence

use std::path::Path;

use serde::Serialize;

use crate::Result;

#[derive(Debug, Serialize)]
struct RewardRow {
    episode: usize,
    total_reward: f64,
}

/// Exporter for episode-reward CSV files
pub struct RewardsCsvExporter;

impl RewardsCsvExporter {
    /// Write the ordered episode-reward sequence to a CSV file.
    ///
    /// One row per episode, in episode order, with an `episode,total_reward`
    /// header. An empty sequence produces a header-only file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn export<P: AsRef<Path>>(path: P, episode_rewards: &[f64]) -> Result<()> {
        // Header is written up front so an empty run still yields a valid file.
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(["episode", "total_reward"])?;
        for (episode, &total_reward) in episode_rewards.iter().enumerate() {
            writer.serialize(RewardRow {
                episode,
                total_reward,
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_one_row_per_episode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewards.csv");

        RewardsCsvExporter::export(&path, &[3.5, -1.0, 0.0]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "episode,total_reward");
        assert_eq!(lines[1], "0,3.5");
        assert_eq!(lines[2], "1,-1.0");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_sequence_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewards.csv");

        RewardsCsvExporter::export(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}
