// Lumo Viewer services
// Stateless or configuration-backed functionality: the navigation gate, settings and theme.

pub mod navigation_gate;
pub mod settings_engine;
pub mod theme_engine;
