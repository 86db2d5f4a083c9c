use crate::modules::fsb_events::core::event::Event;

/// Bracketed, `", "`-joined list where every event ends with a newline:
/// `[E1\n, E2\n]`.
pub fn render_dump<'a>(events: impl IntoIterator<Item = &'a Event>) -> String {
    let body = events
        .into_iter()
        .map(|event| format!("{event}\n"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}
