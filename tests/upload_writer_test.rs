use multidoc::infrastructure::storage::{UploadWriter, UploadedFile};

#[tokio::test]
async fn given_mixed_extensions_when_saving_then_only_allow_listed_files_are_written() {
    let dir = tempfile::TempDir::new().unwrap();
    let writer = UploadWriter::new();

    let uploads = vec![
        UploadedFile::new("report.pdf", b"%PDF-1.7".to_vec()),
        UploadedFile::new("malware.exe", b"MZ".to_vec()),
    ];

    let saved = writer.save(&uploads, dir.path()).await.unwrap();

    assert_eq!(saved.len(), 1);
    assert!(saved[0].exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn given_same_filename_twice_when_saving_then_paths_are_distinct() {
    let dir = tempfile::TempDir::new().unwrap();
    let writer = UploadWriter::new();

    let uploads = vec![
        UploadedFile::new("notes.txt", b"first".to_vec()),
        UploadedFile::new("notes.txt", b"second".to_vec()),
    ];

    let saved = writer.save(&uploads, dir.path()).await.unwrap();

    assert_eq!(saved.len(), 2);
    assert_ne!(saved[0], saved[1]);
    assert_eq!(std::fs::read(&saved[0]).unwrap(), b"first");
    assert_eq!(std::fs::read(&saved[1]).unwrap(), b"second");
}

#[tokio::test]
async fn given_unsafe_filename_when_saving_then_name_is_sanitized() {
    let dir = tempfile::TempDir::new().unwrap();
    let writer = UploadWriter::new();

    let uploads = vec![UploadedFile::new("My Report (v2)!.PDF", b"%PDF".to_vec())];

    let saved = writer.save(&uploads, dir.path()).await.unwrap();

    assert_eq!(saved.len(), 1);
    let name = saved[0].file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("my_report__v2__"), "got {name}");
    assert!(name.ends_with(".pdf"), "got {name}");
    // stem + underscore + 8-hex suffix + extension
    let suffix = name
        .trim_end_matches(".pdf")
        .rsplit('_')
        .next()
        .unwrap();
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn given_missing_target_dir_when_saving_then_it_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("uploads").join("today");
    let writer = UploadWriter::new();

    let uploads = vec![UploadedFile::new("photo.jpeg", vec![0xFF, 0xD8])];

    let saved = writer.save(&uploads, &nested).await.unwrap();

    assert_eq!(saved.len(), 1);
    assert!(nested.is_dir());
}

#[tokio::test]
async fn given_only_disallowed_files_when_saving_then_returns_empty_list() {
    let dir = tempfile::TempDir::new().unwrap();
    let writer = UploadWriter::new();

    let uploads = vec![
        UploadedFile::new("archive.zip", vec![0x50, 0x4B]),
        UploadedFile::new("noextension", vec![1, 2, 3]),
    ];

    let saved = writer.save(&uploads, dir.path()).await.unwrap();

    assert!(saved.is_empty());
}
