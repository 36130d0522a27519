//! Desktop color palette, premultiplied linear.

use aqua_core::Color;

pub struct Theme {
    pub desktop: Color,
    pub window_body: Color,
    pub window_header: Color,
    pub window_content: Color,
    pub window_shadow: Color,
    pub control_close: Color,
    pub control_minimize: Color,
    pub control_zoom: Color,
    pub island: Color,
    pub dock_panel: Color,
    pub dock_icon: Color,
    pub banner: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            desktop: Color::from_srgba_u8([34, 40, 56, 255]),
            window_body: Color::from_srgba_u8([236, 236, 236, 255]),
            window_header: Color::from_srgba_u8([218, 218, 218, 255]),
            window_content: Color::from_srgba_u8([250, 250, 250, 255]),
            window_shadow: Color::from_srgba_u8([0, 0, 0, 60]),
            control_close: Color::from_srgba_u8([255, 95, 87, 255]),
            control_minimize: Color::from_srgba_u8([255, 189, 46, 255]),
            control_zoom: Color::from_srgba_u8([40, 200, 64, 255]),
            island: Color::from_srgba_u8([10, 10, 12, 240]),
            dock_panel: Color::from_srgba_u8([28, 32, 48, 245]),
            dock_icon: Color::from_srgba_u8([50, 55, 75, 255]),
            banner: Color::from_srgba_u8([220, 0, 0, 217]),
        }
    }
}
