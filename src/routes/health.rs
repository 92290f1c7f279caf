use maud::{html, Markup};
use tracing::{debug, instrument};

#[instrument(level = "debug")]
pub async fn check() -> Markup {
    debug!("health");
    html!("ok")
}
