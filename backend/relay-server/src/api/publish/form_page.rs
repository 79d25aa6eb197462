use axum::response::Html;

const PUBLISHER_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Kafka Producer Dashboard</title>
  <style>
    body { font-family: 'Segoe UI', sans-serif; background: #0f111a; color: #e0e0e0; margin: 0; padding: 40px; }
    .container { max-width: 700px; margin: auto; background: #1a1c24; padding: 25px 40px; border-radius: 12px; box-shadow: 0 0 20px #000; }
    h2 { color: #00ff88; margin-bottom: 20px; text-align: center; }
    label { color: #ccc; font-size: 15px; }
    input, textarea { width: 100%; margin: 8px 0 15px 0; padding: 10px; border: none; border-radius: 6px; background: #222; color: #0f0; font-size: 15px; }
    button { background: #00ff88; color: #000; border: none; padding: 10px 20px; border-radius: 8px; cursor: pointer; font-weight: bold; font-size: 16px; }
    button:hover { background: #00cc66; }
    .status { margin-top: 15px; padding: 10px; border-radius: 8px; background: #111; font-family: monospace; }
  </style>
</head>
<body>
  <div class="container">
    <h2>Kafka Producer Manager</h2>
    <form id="msgForm">
      <label for="key">Key (optional)</label>
      <input type="text" id="key" placeholder="message-key">
      <label for="message">Message (JSON)</label>
      <textarea id="message" rows="6" placeholder='{"user":"john","action":"login"}'></textarea>
      <button type="submit">Send Message</button>
    </form>
    <div id="status" class="status" style="display:none;"></div>
  </div>
  <script>
    const form = document.getElementById("msgForm");
    const statusBox = document.getElementById("status");

    function show(text, ok) {
      statusBox.style.display = "block";
      statusBox.style.color = ok ? "#0f0" : "#f33";
      statusBox.textContent = text;
    }

    form.addEventListener("submit", async (e) => {
      e.preventDefault();
      const key = document.getElementById("key").value;
      const message = document.getElementById("message").value;
      try {
        const res = await fetch("/publish", {
          method: "POST",
          headers: { "Content-Type": "application/x-www-form-urlencoded" },
          body: new URLSearchParams({ key, message })
        });
        const data = await res.json();
        if (data.error) {
          show("Error: " + data.error, false);
        } else {
          show("Message sent: " + JSON.stringify(data.message), true);
        }
      } catch (err) {
        show("Error: " + err, false);
      }
    });
  </script>
</body>
</html>
"##;

/// GET / (publisher)
pub async fn publisher_page() -> Html<&'static str> {
    Html(PUBLISHER_PAGE)
}
