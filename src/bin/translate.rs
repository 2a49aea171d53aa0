//! Command-line front end for the relay: `translate <target-language> <message...>`
//!
//! Talks to `RELAY_URL` (default `http://localhost:5000`).

use anyhow::{bail, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use ai_vs_hi_translator::client::{
    HttpRelay, SubmitOutcome, TranslatorForm, DEFAULT_RELAY_URL,
};
use ai_vs_hi_translator::translate::languages::{is_catalog_language, LANGUAGES};

const USAGE: &str = "usage: translate <target-language> <message...>";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(target_lang) = args.next() else {
        bail!("{}\nlanguages: {}", USAGE, LANGUAGES.join(", "));
    };
    let input = args.collect::<Vec<_>>().join(" ");

    if !is_catalog_language(&target_lang) {
        warn!("{} is not in the language list; using the generic persona", target_lang);
    }

    let relay_url = std::env::var("RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
    let relay = HttpRelay::new(relay_url);

    let mut form = TranslatorForm::default();
    form.input = input;
    form.target_lang = target_lang;

    let mut shown_formal = false;
    let mut shown_emotional = false;
    let outcome = form
        .submit(&relay, |view| {
            if view.in_flight() && view.formal_response.is_none() {
                println!("Translating...");
            }
            if let (false, Some(text)) = (shown_formal, view.formal_response.as_deref()) {
                println!("Source Language: {}", view.source_lang);
                println!("AI Response: {}", text);
                shown_formal = true;
            }
            if let (false, Some(text)) = (shown_emotional, view.emotional_response.as_deref()) {
                println!("HI Response: {}", text);
                shown_emotional = true;
            }
        })
        .await;

    match outcome {
        SubmitOutcome::Skipped => bail!("nothing to translate\n{}", USAGE),
        SubmitOutcome::Busy => bail!("a translation is already running"),
        SubmitOutcome::Completed {
            formal_ok,
            emotional_ok,
        } => {
            if !formal_ok && !emotional_ok {
                bail!("both relay calls failed");
            }
        }
    }

    Ok(())
}
