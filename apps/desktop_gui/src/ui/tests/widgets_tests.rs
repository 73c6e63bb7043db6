use super::*;

#[derive(Default)]
struct RecordingClipboard {
    writes: Vec<String>,
    fail_with: Option<String>,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[test]
fn copy_sets_flag_immediately_and_clears_after_window() {
    let start = Instant::now();
    let mut clipboard = RecordingClipboard::default();
    let mut feedback = CopyFeedback::default();
    assert!(!feedback.is_acknowledged(start));

    copy_text(&mut clipboard, &mut feedback, "{\n  \"title\": \"T\"\n}", start).expect("copy");

    assert_eq!(clipboard.writes, vec!["{\n  \"title\": \"T\"\n}"]);
    assert!(feedback.is_acknowledged(start));
    assert!(feedback.is_acknowledged(start + Duration::from_millis(1999)));
    assert!(!feedback.is_acknowledged(start + COPY_ACK_WINDOW));
    assert!(!feedback.is_acknowledged(start + Duration::from_secs(5)));
}

#[test]
fn copying_again_restarts_the_window() {
    let start = Instant::now();
    let mut clipboard = RecordingClipboard::default();
    let mut feedback = CopyFeedback::default();

    copy_text(&mut clipboard, &mut feedback, "a", start).expect("copy");
    let again = start + Duration::from_millis(1500);
    copy_text(&mut clipboard, &mut feedback, "b", again).expect("copy");

    assert!(feedback.is_acknowledged(start + Duration::from_millis(3000)));
    assert_eq!(
        feedback.remaining(again + Duration::from_millis(500)),
        Some(Duration::from_millis(1500))
    );
    assert!(!feedback.is_acknowledged(again + COPY_ACK_WINDOW));
}

#[test]
fn feedback_instances_are_independent() {
    let start = Instant::now();
    let mut clipboard = RecordingClipboard::default();
    let mut brief_feedback = CopyFeedback::default();
    let article_feedback = CopyFeedback::default();

    copy_text(&mut clipboard, &mut brief_feedback, "brief", start).expect("copy");

    assert!(brief_feedback.is_acknowledged(start));
    assert!(!article_feedback.is_acknowledged(start));
}

#[test]
fn failed_copy_leaves_flag_unset() {
    let start = Instant::now();
    let mut clipboard = RecordingClipboard {
        writes: Vec::new(),
        fail_with: Some("clipboard unavailable".to_string()),
    };
    let mut feedback = CopyFeedback::default();

    let err = copy_text(&mut clipboard, &mut feedback, "text", start).expect_err("copy fails");
    assert_eq!(err, "clipboard unavailable");
    assert!(!feedback.is_acknowledged(start));
}

#[test]
fn busy_labels_describe_the_operation_in_flight() {
    assert_eq!(BRIEF_BUSY_LABEL.text(false), "Generate");
    assert_eq!(BRIEF_BUSY_LABEL.text(true), "Generating…");
    assert_eq!(ARTICLE_BUSY_LABEL.text(false), "Generate Full Article");
    assert_eq!(ARTICLE_BUSY_LABEL.text(true), "Generating article…");
}
