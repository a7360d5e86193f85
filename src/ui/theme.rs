use fltk::enums::Color;

/// Widget colors for one theme. Everything the painter needs, resolved from
/// the active [`ThemeChoice`](crate::app::domain::ThemeChoice) up front.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub window_bg: Color,
    pub header_bg: Color,
    pub sidebar_bg: Color,
    pub card_bg: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub nav_idle: Color,
    pub nav_active: Color,
    pub code_bg: Color,
    pub code_fg: Color,
}

impl Palette {
    pub fn for_dark(dark: bool) -> Palette {
        if dark {
            Palette {
                window_bg: Color::from_rgb(25, 25, 25),
                header_bg: Color::from_rgb(35, 35, 35),
                sidebar_bg: Color::from_rgb(30, 30, 30),
                card_bg: Color::from_rgb(40, 40, 40),
                text: Color::from_rgb(220, 220, 220),
                muted: Color::from_rgb(150, 150, 150),
                accent: Color::from_rgb(96, 165, 250),
                nav_idle: Color::from_rgb(30, 30, 30),
                nav_active: Color::from_rgb(60, 60, 90),
                code_bg: Color::from_rgb(30, 30, 30),
                code_fg: Color::from_rgb(220, 220, 220),
            }
        } else {
            Palette {
                window_bg: Color::from_rgb(240, 240, 240),
                header_bg: Color::from_rgb(230, 230, 230),
                sidebar_bg: Color::from_rgb(235, 235, 235),
                card_bg: Color::White,
                text: Color::Black,
                muted: Color::from_rgb(100, 100, 100),
                accent: Color::from_rgb(37, 99, 235),
                nav_idle: Color::from_rgb(235, 235, 235),
                nav_active: Color::from_rgb(173, 216, 230),
                code_bg: Color::from_rgb(248, 248, 248),
                code_fg: Color::Black,
            }
        }
    }
}
