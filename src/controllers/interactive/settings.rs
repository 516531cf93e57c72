use crate::controllers::interactive::coefficient_editor::EditorSettings;
use crate::core::actions::render_point_cloud::render_point_cloud::RenderStyle;
use crate::core::session::InteractionRules;

/// All tunables of an explorer session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerSettings {
    pub rules: InteractionRules,
    pub editor: EditorSettings,
    pub style: RenderStyle,
}

#[cfg(test)]
mod tests {
    use super::ExplorerSettings;
    use std::time::Duration;

    #[test]
    fn default_settings_are_consistent() {
        let settings = ExplorerSettings::default();

        assert_eq!(settings.rules.view.default_scale, 50.0);
        assert!(settings.rules.view.min_scale > 0.0);
        assert!(settings.rules.view.min_scale < settings.rules.view.default_scale);
        assert!(settings.rules.view.wheel_zoom_factor > 1.0);
        assert_eq!(settings.rules.detail.initial, 10_000);
        assert_eq!(settings.rules.gesture.double_tap_delay, Duration::from_millis(300));
        assert_eq!(settings.editor.quiet_period, Duration::from_millis(100));
        assert_ne!(settings.style.background, settings.style.point);
    }
}
