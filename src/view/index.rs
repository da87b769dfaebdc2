use maud::{Markup, html};

use crate::HTMX_PATH;

pub const DEFAULT_INDEX_TITLE: &str = "Alliance Live Scoring";

/// Page shell; htmx pulls the standings fragment on load and every minute.
#[must_use]
pub fn render_index_template(title: &str, event_id: Option<i64>) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) {}
        }
        body {
            h1 { (title) }
            @match event_id {
                Some(id) => {
                    div id="scores"
                        hx-get=(format!("scores?event={id}"))
                        hx-trigger="load, every 60s"
                        hx-swap="innerHTML" {
                        div class="placeholder loading" { "Loading tournament data..." }
                    }
                }
                None => {
                    p class="empty" { "Pick an event with ?event=<id>" }
                }
            }
        }
    }
}
