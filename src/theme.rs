//! Visual skins as data. A theme is a color table plus a handful of
//! flags; gameplay code never branches on the theme beyond reading the
//! player's box size, so adding a skin means adding a constructor here
//! and nothing anywhere else.

use crate::surface::Rgb;

/// How the player is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSkin {
    /// Plain rounded block.
    Mouse,
    /// Ellipse body with tail fin, dorsal fin and an eye.
    Fish,
}

/// How the bottom boundary band is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShoreStyle {
    /// Flat ground strip.
    Ground,
    /// Sine-animated water surface with highlights.
    Water,
}

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub sky_top: Rgb,
    pub sky_bottom: Rgb,
    pub pipe: Rgb,
    pub pipe_lip: Rgb,
    pub shore: Rgb,
    pub shore_accent: Rgb,
    pub cloud: Rgb,
    pub body: Rgb,
    pub body_detail: Rgb,
    pub eye: Rgb,
    pub pupil: Rgb,
    pub text: Rgb,
    pub text_shadow: Rgb,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub palette: Palette,
    pub skin: PlayerSkin,
    /// Player bounding box (width, height) in logical pixels. The two
    /// source skins genuinely differ here, so the hitbox rides with the
    /// skin.
    pub player_size: (f64, f64),
    pub shore: ShoreStyle,
    /// Draw the wider lip caps at the gap ends of each pipe.
    pub pipe_caps: bool,
    /// Spawn drifting clouds.
    pub clouds: bool,
}

impl Theme {
    /// "Flappy Mouse": red rounded avatar over a plain meadow, no
    /// decorations.
    pub fn mouse() -> Self {
        Theme {
            name: "mouse",
            palette: Palette {
                sky_top: Rgb(135, 206, 235),
                sky_bottom: Rgb(190, 232, 245),
                pipe: Rgb(0, 128, 0),
                pipe_lip: Rgb(0, 100, 0),
                shore: Rgb(139, 69, 19),
                shore_accent: Rgb(160, 92, 40),
                cloud: Rgb(240, 240, 240),
                body: Rgb(255, 0, 0),
                body_detail: Rgb(200, 30, 30),
                eye: Rgb(255, 255, 255),
                pupil: Rgb(20, 20, 20),
                text: Rgb(255, 255, 255),
                text_shadow: Rgb(30, 30, 30),
            },
            skin: PlayerSkin::Mouse,
            player_size: (30.0, 30.0),
            shore: ShoreStyle::Ground,
            pipe_caps: false,
            clouds: false,
        }
    }

    /// "FlappyFish": orange fish over animated water, with clouds and
    /// capped pipes.
    pub fn fish() -> Self {
        Theme {
            name: "fish",
            palette: Palette {
                sky_top: Rgb(120, 195, 230),
                sky_bottom: Rgb(175, 225, 240),
                pipe: Rgb(0, 136, 0),
                pipe_lip: Rgb(0, 104, 0),
                shore: Rgb(64, 164, 223),
                // Water highlight: the source blends rgba(100,200,255)
                // at 30% over the water blue; this is that mix.
                shore_accent: Rgb(75, 175, 233),
                cloud: Rgb(240, 240, 240),
                body: Rgb(255, 140, 0),
                body_detail: Rgb(235, 120, 0),
                eye: Rgb(255, 255, 255),
                pupil: Rgb(0, 0, 0),
                text: Rgb(255, 255, 255),
                text_shadow: Rgb(30, 30, 30),
            },
            skin: PlayerSkin::Fish,
            player_size: (40.0, 25.0),
            shore: ShoreStyle::Water,
            pipe_caps: true,
            clouds: true,
        }
    }

    /// Looks a theme up by name, case-insensitively.
    pub fn named(name: &str) -> Option<Theme> {
        match name.to_ascii_lowercase().as_str() {
            "mouse" => Some(Theme::mouse()),
            "fish" => Some(Theme::fish()),
            _ => None,
        }
    }

    pub fn all_names() -> &'static [&'static str] {
        &["mouse", "fish"]
    }
}
