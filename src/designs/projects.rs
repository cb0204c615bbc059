use serde_json::Value;

use crate::designs::common::build_project_card;

/// Every project as a standalone card, addressable by its anchor.
pub fn render_body(context: &Value) -> String {
    let mut html = String::from(
        "<section><h1>Projects</h1>\
         <p>Selected consulting, product and research work.</p></section>\
         <section class=\"project-grid\">",
    );
    if let Some(Value::Array(projects)) = context.get("projects") {
        for project in projects {
            html.push_str(&build_project_card(project, None));
        }
    }
    html.push_str("</section>");
    html
}
