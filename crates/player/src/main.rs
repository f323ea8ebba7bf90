//! mudmap Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mudmap_domain::SettingsBag;
use mudmap_player::application::{map_viewport, MapSession};
use mudmap_player::infrastructure::ChromeState;
use mudmap_player::ui::{DEFAULT_CONTAINER_WIDTH, DEFAULT_WINDOW_HEIGHT};

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env is fine; variables may come from the shell.
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    "mudmap_player=debug,mudmap_domain=debug,dioxus=info".into()
                }),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting mudmap Player");

    let chrome = ChromeState::new();
    let mut session = MapSession::new(SettingsBag::from_env());

    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(path) = std::env::var("MUDMAP_REPLAY") {
        for message in native::load_replay(&path)? {
            session.handle_server_message(message, &chrome);
        }
    }

    let viewport = map_viewport(DEFAULT_CONTAINER_WIDTH, DEFAULT_WINDOW_HEIGHT)?;
    let scene = session.scene(viewport);
    tracing::info!(
        rooms = session.map().room_count(),
        exits = session.map().exit_count(),
        segments = scene.segments.len(),
        markers = scene.markers.len(),
        "Map session ready"
    );

    #[cfg(any(feature = "desktop", target_arch = "wasm32"))]
    {
        #[cfg(not(target_arch = "wasm32"))]
        let strings = native::load_strings()?;
        #[cfg(target_arch = "wasm32")]
        let strings = mudmap_player::application::LocalizedStrings::new();

        dioxus::LaunchBuilder::new()
            .with_context(session)
            .with_context(chrome.snapshot())
            .with_context(strings)
            .launch(mudmap_player::ui::app);
    }

    #[cfg(not(any(feature = "desktop", target_arch = "wasm32")))]
    {
        for marker in &scene.markers {
            tracing::info!(
                room = %marker.room_key,
                x = marker.x,
                y = marker.y,
                current = marker.is_current,
                label = %marker.label,
                "Room marker"
            );
        }
        tracing::info!(chrome = ?chrome.snapshot(), "Built without a renderer, not launching UI");
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Context;
    #[cfg(feature = "desktop")]
    use mudmap_player::application::LocalizedStrings;
    use mudmap_shared::{decode_batch, ServerMessage};

    /// Recorded server pushes, as a JSON array
    pub fn load_replay(path: &str) -> anyhow::Result<Vec<ServerMessage>> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay file {}", path))?;
        let messages = decode_batch(&text)
            .with_context(|| format!("Failed to decode replay file {}", path))?;
        tracing::info!(path, messages = messages.len(), "Replaying server messages");
        Ok(messages)
    }

    /// System and custom string layers from `MUDMAP_SYSTEM_STRINGS` /
    /// `MUDMAP_CUSTOM_STRINGS`; either may be unset.
    #[cfg(feature = "desktop")]
    pub fn load_strings() -> anyhow::Result<LocalizedStrings> {
        let system = read_layer("MUDMAP_SYSTEM_STRINGS")?;
        let custom = read_layer("MUDMAP_CUSTOM_STRINGS")?;
        Ok(LocalizedStrings::from_json(&system, &custom)?)
    }

    #[cfg(feature = "desktop")]
    fn read_layer(var: &str) -> anyhow::Result<String> {
        match std::env::var(var) {
            Ok(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {} file {}", var, path)),
            Err(_) => Ok("[]".to_string()),
        }
    }
}
