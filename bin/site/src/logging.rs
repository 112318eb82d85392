//! Tracing subscribers for the server and the hydrated browser app.

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Directives for the browser console. Chat turn flow logs at `debug`.
pub const BROWSER_LOG_FILTER: &str = "info,magmist_conversation=debug,magmist_site=debug";

/// `RUST_LOG` if set, otherwise `fallback`.
#[cfg(feature = "ssr")]
pub fn server_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Plain-text subscriber for the browser. There is no wall clock on
/// `wasm32-unknown-unknown`, so lines carry no timestamp.
pub fn browser_subscriber<W>(writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(BROWSER_LOG_FILTER))
        .with_ansi(false)
        .without_time()
        .with_writer(writer)
        .finish()
}

/// Routes `tracing` events to the browser console.
#[cfg(feature = "hydrate")]
pub fn init_browser() {
    let subscriber = browser_subscriber(tracing_web::MakeWebConsoleWriter::new());
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        leptos::logging::warn!("tracing subscriber already installed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().expect("lock").clone()).expect("utf-8")
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn browser_filter_parses() {
        let filter = EnvFilter::try_new(BROWSER_LOG_FILTER).expect("valid directives");
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing::level_filters::LevelFilter::DEBUG)
        );
    }

    #[test]
    fn browser_subscriber_keeps_chat_debug_and_contact_info() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = browser_subscriber(move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "magmist_conversation::chatbot", keyword = "price", "Bot turn recorded");
            tracing::info!(target: "magmist_site::pages::contact", "Contact form submitted");
            tracing::debug!(target: "leptos::reactive", "noisy internals");
        });

        let text = captured.text();
        assert!(text.contains("Bot turn recorded"), "{text}");
        assert!(text.contains("keyword=\"price\""), "{text}");
        assert!(text.contains("Contact form submitted"), "{text}");
        assert!(!text.contains("noisy internals"), "{text}");
    }
}
