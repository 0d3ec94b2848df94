use tracing::warn;

use super::{KeyValueStore, WriteQueue, COLOR_KEY, TEMPLATE_KEY};
use crate::models::preferences::{RenderPreferences, TemplateId};

/// Reads template and accent color. Absent or unreadable values fall back to
/// the defaults independently of each other.
pub async fn load_preferences(store: &dyn KeyValueStore) -> RenderPreferences {
    let defaults = RenderPreferences::default();

    let template_id = match store.get(TEMPLATE_KEY).await {
        Ok(Some(raw)) => raw.parse::<TemplateId>().unwrap_or_else(|e| {
            warn!("Ignoring stored template: {e}");
            defaults.template_id
        }),
        Ok(None) => defaults.template_id,
        Err(e) => {
            warn!("Could not read stored template: {e}");
            defaults.template_id
        }
    };

    let accent_color = match store.get(COLOR_KEY).await {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => defaults.accent_color.clone(),
        Err(e) => {
            warn!("Could not read stored accent color: {e}");
            defaults.accent_color.clone()
        }
    };

    RenderPreferences {
        template_id,
        accent_color,
    }
}

/// Queues both preference keys as two independent writes.
pub fn persist_preferences(writes: &WriteQueue, prefs: &RenderPreferences) {
    writes.push(TEMPLATE_KEY, prefs.template_id.as_str().to_string());
    writes.push(COLOR_KEY, prefs.accent_color.clone());
}
