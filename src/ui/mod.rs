//! FLTK widget layer: window construction, theming palettes, the sidebar,
//! content panes, snippet views, and the production [`FltkSurface`].

pub mod lazy;
pub mod main_window;
pub mod sections;
pub mod sidebar;
pub mod snippet;
pub mod surface;
pub mod theme;

pub use surface::FltkSurface;
