use super::*;

#[test]
fn buffer_handler_println_captures_with_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    assert_eq!(handler.get_output(), "hello\n");
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    assert!(!handler.get_output().is_empty());
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn buffer_handler_factory_creates_working_handler() {
    let handler = buffer_handler();
    handler.println("a");
    handler.println("b");
    assert_eq!(handler.get_output(), "a\nb\n");
}

#[test]
fn stdout_handler_captures_nothing() {
    assert_eq!(stdout_handler().get_output(), "");
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("hello");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn shared_handler_sees_writes_from_clones() {
    let handler = buffer_handler();
    let clone = Arc::clone(&handler);
    clone.println("shared");
    assert_eq!(handler.get_output(), "shared\n");
}

#[test]
fn buffer_handler_keeps_lines_in_order() {
    let handler = BufferPrintHandler::new();
    handler.println("first");
    handler.println("second");
    assert_eq!(handler.lines(), vec!["first".to_string(), "second".to_string()]);
}
