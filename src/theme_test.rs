use super::*;

#[derive(Default)]
struct RecordingSurface {
    root: Option<Theme>,
    pressed: Option<bool>,
    writes: usize,
}

impl ThemeSurface for RecordingSurface {
    fn set_root_theme(&mut self, theme: Theme) {
        self.root = Some(theme);
        self.writes += 1;
    }

    fn set_toggle_pressed(&mut self, pressed: bool) {
        self.pressed = Some(pressed);
    }
}

// =============================================================
// Theme literals
// =============================================================

#[test]
fn theme_parse_accepts_only_known_literals() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("true"), None);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn resolve_initial_prefers_stored_value() {
    assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
    assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
}

#[test]
fn resolve_initial_falls_back_to_system_preference() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
    assert_eq!(resolve_initial(Some("garbage"), true), Theme::Dark);
}

#[test]
fn resolve_initial_defaults_to_light() {
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn init_reads_store_under_key() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark");
    let controller = ThemeController::init(&store, "theme", false);
    assert_eq!(controller.current(), Theme::Dark);

    let other = ThemeController::init(&store, "other-key", false);
    assert_eq!(other.current(), Theme::Light);
}

// =============================================================
// Apply / toggle
// =============================================================

#[test]
fn apply_sets_root_and_pressed_state() {
    let store = MemoryStore::new();
    let controller = ThemeController::init(&store, "theme", true);
    let mut surface = RecordingSurface::default();
    controller.apply(&mut surface);
    assert_eq!(surface.root, Some(Theme::Dark));
    assert_eq!(surface.pressed, Some(true));
}

#[test]
fn toggle_applies_and_persists_opposite() {
    let mut store = MemoryStore::new();
    let mut controller = ThemeController::init(&store, "theme", false);
    let mut surface = RecordingSurface::default();

    let next = controller.toggle(&mut store, &mut surface);
    assert_eq!(next, Theme::Dark);
    assert_eq!(surface.root, Some(Theme::Dark));
    assert_eq!(surface.pressed, Some(true));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_parity_matches_activation_count() {
    for prefers_dark in [false, true] {
        let mut store = MemoryStore::new();
        let mut controller = ThemeController::init(&store, "theme", prefers_dark);
        let initial = controller.current();
        let mut surface = RecordingSurface::default();

        for n in 1..=7 {
            controller.toggle(&mut store, &mut surface);
            let expected = if n % 2 == 0 { initial } else { initial.toggled() };
            assert_eq!(controller.current(), expected);
            assert_eq!(surface.root, Some(expected));
            assert_eq!(store.get("theme").as_deref(), Some(expected.as_str()));
        }
        assert_eq!(surface.writes, 7);
    }
}
