use super::FsmlocError;

#[test]
fn empty_path_message_matches_contract() {
    assert_eq!(FsmlocError::EmptyScanPath.to_string(), "scan path is empty");
}

#[test]
fn unsupported_extension_names_the_extension() {
    let err = FsmlocError::UnsupportedExtension(".txt".to_string());
    assert_eq!(err.to_string(), "unsupported file extension: .txt");
}

#[test]
fn worker_count_message() {
    assert_eq!(
        FsmlocError::InvalidWorkerCount.to_string(),
        "workers must be greater than 0"
    );
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: FsmlocError = io.into();
    assert!(matches!(err, FsmlocError::Io(_)));
    assert!(err.to_string().contains("gone"));
}
