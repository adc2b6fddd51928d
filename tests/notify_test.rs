use log::{Metadata, Record};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use gardenist::garden::ApiError;
use gardenist::notify::report_api_error;
use gardenist::ui::components::toast::{Severity, ToastManager};

static RECORDS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push(format!("{} {} {}", record.level(), record.target(), record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn install_capture_logger() {
    // Only the first caller installs; later calls are no-ops
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Trace));
}

#[test]
fn test_report_shows_danger_toast_with_error_message() {
    install_capture_logger();

    let mut toasts = ToastManager::new();
    report_api_error(&mut toasts, &ApiError::Other("Network down".to_string()));

    assert_eq!(toasts.len(), 1);
    let toast = &toasts.toasts()[0];
    assert_eq!(toast.message, "Network down");
    assert_eq!(toast.severity, Severity::Danger);

    let records = RECORDS.lock().unwrap();
    let matching: Vec<&String> = records.iter().filter(|r| r.contains("Network down")).collect();
    assert!(!matching.is_empty(), "expected a log record for the error");
    assert!(matching.iter().any(|r| r.contains("ERROR")));
    assert!(matching.iter().any(|r| r.contains("API Error")));
}

#[test]
fn test_report_without_message_falls_back() {
    install_capture_logger();

    let mut toasts = ToastManager::new();
    report_api_error(&mut toasts, &ApiError::Other(String::new()));

    assert_eq!(toasts.len(), 1);
    let toast = &toasts.toasts()[0];
    assert_eq!(toast.message, "An error occurred");
    assert_eq!(toast.severity, Severity::Danger);
}

#[test]
fn test_report_keeps_typed_error_text() {
    install_capture_logger();

    let mut toasts = ToastManager::new();
    report_api_error(&mut toasts, &ApiError::NotFound("Garden bed".to_string()));

    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.toasts()[0].message, "Garden bed not found");
}

#[test]
fn test_report_never_panics_on_whitespace_message() {
    install_capture_logger();

    let mut toasts = ToastManager::new();
    report_api_error(&mut toasts, &ApiError::InvalidData("   ".to_string()));

    assert_eq!(toasts.toasts()[0].message, "An error occurred");
}
