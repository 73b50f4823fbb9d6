// SPDX-License-Identifier: MPL-2.0
use iced_courier::config::{self, Config, DEFAULT_SERVER_URL};
use iced_courier::media::SelectedFile;
use tempfile::tempdir;

#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let config = Config {
        server_url: Some("http://backend.example:8080".to_string()),
    };
    config::save_to_path(&config, &temp_config_file_path).expect("Failed to write config file");

    let loaded =
        config::load_from_path(&temp_config_file_path).expect("Failed to load config from path");
    assert_eq!(loaded.server_url(), "http://backend.example:8080");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_empty_config_falls_back_to_the_default_server() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    config::save_to_path(&Config::default(), &temp_config_file_path)
        .expect("Failed to write config file");

    let loaded =
        config::load_from_path(&temp_config_file_path).expect("Failed to load config from path");
    assert_eq!(loaded.server_url(), DEFAULT_SERVER_URL);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let missing = dir.path().join("nope.toml");

    assert!(config::load_from_path(&missing).is_err());
}

#[tokio::test]
async fn test_selection_loads_from_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let video_path = dir.path().join("lecture.mp4");
    std::fs::write(&video_path, vec![7u8; 2048]).expect("Failed to write sample file");

    let file = SelectedFile::load(video_path)
        .await
        .expect("Failed to load the sample file");
    assert_eq!(file.name(), "lecture.mp4");
    assert_eq!(file.size(), 2048);
    assert_eq!(file.mime(), "video/mp4");
}

#[test]
fn test_size_display_uses_two_decimal_megabytes() {
    let file = SelectedFile::new("lecture.mp4", vec![0u8; 10 * 1024 * 1024]);
    assert_eq!(file.size_display(), "10.00 MB");

    let small = SelectedFile::new("clip.webm", vec![0u8; 512 * 1024]);
    assert_eq!(small.size_display(), "0.50 MB");
}

#[test]
fn test_each_selection_gets_a_distinct_identity() {
    let a = SelectedFile::new("same.mp4", vec![1, 2, 3]);
    let b = SelectedFile::new("same.mp4", vec![1, 2, 3]);
    assert_ne!(a.id(), b.id());
}
