//! Liftline Web - headless client-side behavior engine for the Liftline
//! elevator sales site
//!
//! Replays a scripted visitor session against the in-memory home page and
//! logs the resulting behavior: loading screen, navigation, the quote popup
//! and the form submission gate.

mod app;
mod config;
mod dom;
mod site;
mod state;
mod timers;

use anyhow::Result;
use app::{App, SubmitOutcome};
use config::SiteConfig;
use dom::{FsProbe, Key, PageEvent};
use state::{FormKind, LoadingState};
use std::io;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liftline_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = SiteConfig::load().unwrap_or_default();
    let mut app = App::new(site::home_page(), config.clone(), Instant::now());

    // Advisory: warn early if the redirect targets are missing
    if config.check_companion_pages.unwrap_or(false) {
        let probe = FsProbe::new(std::env::current_dir()?);
        app.verify_companion_pages(&probe).await;
    }

    run_session(&mut app).await
}

/// Drive a representative visitor session through the engine
async fn run_session(app: &mut App) -> Result<()> {
    // Let the loading screen fill and settle
    while app.loading.is_some() || !app.timers.is_empty() {
        app.handle_event(PageEvent::Tick, Instant::now())?;
        tokio::time::sleep(LoadingState::TICK_INTERVAL).await;
    }
    tracing::info!("page settled; starting visitor session");

    // Browse on a phone-sized viewport: open the menu, tap outside, then
    // rotate back to a desktop width
    app.handle_event(PageEvent::Resize { width: 375 }, Instant::now())?;
    app.handle_event(
        PageEvent::Click {
            target: "mobileToggle".into(),
        },
        Instant::now(),
    )?;
    app.handle_event(PageEvent::OutsideClick, Instant::now())?;
    app.handle_event(PageEvent::Resize { width: 1280 }, Instant::now())?;

    // Scroll down to the product grid and narrow it to home lifts
    app.handle_event(PageEvent::Scroll { y: 600 }, Instant::now())?;
    tracing::info!(section = ?app.state.active_section, "scrolled to the product grid");
    app.handle_event(
        PageEvent::Intersect {
            target: "progressInstallations".into(),
        },
        Instant::now(),
    )?;
    app.handle_event(
        PageEvent::Click {
            target: "filterHome".into(),
        },
        Instant::now(),
    )?;

    // Open the quote popup and trip the gate with an empty form
    app.handle_event(
        PageEvent::Click {
            target: "quoteTriggerHero".into(),
        },
        Instant::now(),
    )?;
    app.handle_event(
        PageEvent::Submit {
            form: "quoteForm".into(),
        },
        Instant::now(),
    )?;
    tracing::info!(
        message = ?app.dom.text("quoteFormMessage"),
        "empty submit rejected by the gate"
    );

    // Fill the form properly and submit for real
    for (field, value) in [
        ("quoteName", "Asha Rao"),
        ("quoteEmail", "asha@example.com"),
        ("quotePhone", "919876543210"),
        ("quoteLocation", "Bangalore"),
    ] {
        app.handle_event(
            PageEvent::Input {
                target: field.into(),
                value: value.into(),
            },
            Instant::now(),
        )?;
    }
    app.handle_event(
        PageEvent::Blur {
            target: "quotePhone".into(),
        },
        Instant::now(),
    )?;
    app.handle_event(
        PageEvent::Click {
            target: "quoteConsent".into(),
        },
        Instant::now(),
    )?;
    tracing::info!(phone = ?app.dom.value("quotePhone"), "fields captured");

    match app.handle_submit(FormKind::Quote, Instant::now()) {
        SubmitOutcome::Proceed { redirect } => {
            tracing::info!(redirect = %redirect, "submission handed to the relay");
        }
        SubmitOutcome::Blocked => tracing::warn!("submission unexpectedly blocked"),
    }

    // Close the popup and drain the remaining one-shots
    app.handle_event(PageEvent::KeyDown { key: Key::Escape }, Instant::now())?;
    tracing::debug!(pending = app.timers.len(), "draining deferred effects");
    while !app.timers.is_empty() {
        tokio::time::sleep(LoadingState::TICK_INTERVAL).await;
        app.handle_event(PageEvent::Tick, Instant::now())?;
    }

    tracing::info!("session complete");
    Ok(())
}
