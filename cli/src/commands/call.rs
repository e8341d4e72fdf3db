use anyhow::Context;

use paybff_core::adapters::inbound::query::{Api, Outcome};

use crate::terminal::print;

/// Runs one operation and prints its rendered outcome as JSON.
///
/// Operation errors are part of the output, not a failure of the command.
pub async fn call(api: &Api, document: &str) -> anyhow::Result<()> {
    let outcome = api.handle_text(document).await;
    let rendered = serde_json::to_string_pretty(&outcome).context("cannot render result")?;

    match outcome {
        Outcome::Data(_) => print::success(&rendered),
        Outcome::Error(_) => print::failure(&rendered),
    }
    Ok(())
}
