use crate::html::escape_text;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Kafka Consumer Dashboard</title>
  <style>
    body { font-family: 'Segoe UI', sans-serif; background: #0e0e0e; color: #f5f5f5; padding: 20px; }
    h1 { color: #00ff88; }
    .msg-box { background: #1e1e1e; border: 1px solid #333; padding: 10px; margin: 10px 0; border-radius: 8px; white-space: pre-wrap; font-family: monospace; }
    .refresh { position: fixed; top: 10px; right: 10px; color: #999; font-size: 12px; }
    .empty { color: #777; font-style: italic; }
  </style>
"#;

/// Render the viewer page.
///
/// One `msg-box` block per entry, in the order given (oldest first). The
/// page reloads itself every `refresh_ms` milliseconds.
pub fn render_viewer_page(
    entries: &[String],
    topic: &str,
    retention: usize,
    refresh_ms: u64,
) -> String {
    let mut page = String::with_capacity(PAGE_HEAD.len() + entries.len() * 128 + 512);
    page.push_str(PAGE_HEAD);
    page.push_str(&format!(
        "  <script>setTimeout(()=>location.reload(),{refresh_ms})</script>\n</head>\n<body>\n"
    ));
    page.push_str(&format!(
        "  <div class=\"refresh\">Auto-refresh every {}s</div>\n",
        refresh_ms / 1000
    ));
    page.push_str(&format!(
        "  <h1>Kafka Messages: {} (Latest {})</h1>\n",
        escape_text(topic),
        retention
    ));

    if entries.is_empty() {
        page.push_str("  <p class=\"empty\">No messages received yet.</p>\n");
    }

    for entry in entries {
        page.push_str("  <div class=\"msg-box\">");
        page.push_str(&escape_text(entry));
        page.push_str("</div>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}
