use serde_json::Value;

use crate::designs::common::build_social_links;
use crate::render::{field, html_escape};

/// Build the contact page body. The form posts straight to the configured
/// forms endpoint; nothing is submitted to this server.
pub fn render_body(context: &Value) -> String {
    let settings = context.get("settings").cloned().unwrap_or_default();

    format!(
        r#"<section>
    <h1>Contact</h1>
    <p>I’m open to collaborations, coffee chats, and new ideas. Reach out anytime!</p>
</section>
<section>
    <form action="{endpoint}" method="POST" class="contact-form">
        <input type="text" name="name" placeholder="Name" required>
        <input type="email" name="email" placeholder="Email" required>
        <textarea name="message" placeholder="Message" rows="4" required></textarea>
        <div class="contact-actions">
            <button type="submit" class="contact-submit" title="Send">
                <img src="/static/logos/send.jpg" alt="Send" width="24" height="24">
                <span class="sr-only">Send</span>
            </button>
        </div>
    </form>
</section>
<section class="contact-social">{social}</section>"#,
        endpoint = html_escape(field(&settings, "forms_endpoint")),
        social = build_social_links(&settings),
    )
}
