use std::time::Duration;

use gardenist::ui::components::toast::{Severity, ToastManager};

#[test]
fn test_show_appends_exactly_one_toast() {
    let mut toasts = ToastManager::new();
    assert!(toasts.is_empty());

    toasts.show("Bed created", Severity::Danger);
    assert_eq!(toasts.len(), 1);

    let toast = &toasts.toasts()[0];
    assert_eq!(toast.message, "Bed created");
    assert_eq!(toast.severity, Severity::Danger);
    assert_eq!(toast.severity.as_str(), "danger");
}

#[test]
fn test_success_is_the_default_severity() {
    assert_eq!(Severity::default(), Severity::Success);

    let mut toasts = ToastManager::new();
    toasts.success("Saved");

    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.toasts()[0].severity, Severity::Success);
    assert_eq!(toasts.toasts()[0].severity.as_str(), "success");
}

#[test]
fn test_toasts_stack_in_call_order() {
    let mut toasts = ToastManager::new();
    toasts.success("first");
    toasts.danger("second");
    toasts.info("third");

    let messages: Vec<&str> = toasts.toasts().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[test]
fn test_toast_removed_after_dismissal_deadline() {
    let mut toasts = ToastManager::with_ttl(Duration::from_secs(2));
    toasts.success("transient");
    assert_eq!(toasts.len(), 1);

    // Not yet expired
    toasts.tick(Duration::from_secs(1));
    assert_eq!(toasts.len(), 1);

    // Deadline reached
    toasts.tick(Duration::from_secs(1));
    assert!(toasts.is_empty());
}

#[test]
fn test_toasts_expire_independently() {
    let mut toasts = ToastManager::with_ttl(Duration::from_secs(3));
    toasts.success("old");
    toasts.tick(Duration::from_secs(2));
    toasts.danger("new");

    toasts.tick(Duration::from_secs(1));
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.toasts()[0].message, "new");

    toasts.tick(Duration::from_secs(2));
    assert!(toasts.is_empty());
}

#[test]
fn test_severity_styling_tokens_are_distinct() {
    let severities = [Severity::Success, Severity::Info, Severity::Warning, Severity::Danger];
    for (i, a) in severities.iter().enumerate() {
        for b in severities.iter().skip(i + 1) {
            assert_ne!(a.as_str(), b.as_str());
            assert_ne!(a.color(), b.color());
        }
    }
}
