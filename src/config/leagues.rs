use crate::rating::types::{Foreground, League};

/// The fixed league cycle, ordered by increasing rank.
///
/// Levels map onto this table cyclically: level 1 is White, level 25 is
/// Black, level 26 wraps back to White at tier 2. Each background carries
/// a foreground chosen for contrast.
pub const LEAGUE_CYCLE: &[League] = &[
    League::new("White", "#FFFFFF", Foreground::Black),
    League::new("Grey", "#C0C0C0", Foreground::Black),
    League::new("Yellow", "#FFFF00", Foreground::Black),
    League::new("Ochre Yellow", "#FFC619", Foreground::Black),
    League::new("Salmon", "#FA8072", Foreground::Black),
    League::new("Orange", "#FF8C00", Foreground::Black),
    League::new("Lime", "#00FF00", Foreground::Black),
    League::new("Mint", "#98FF98", Foreground::Black),
    League::new("Green", "#008000", Foreground::White),
    League::new("Teal Green", "#00827F", Foreground::White),
    League::new("Cyan", "#00FFFF", Foreground::Black),
    League::new("Blue", "#0000FF", Foreground::White),
    League::new("Dark Blue", "#00008B", Foreground::White),
    League::new("Pink", "#FFB3DE", Foreground::Black),
    League::new("Magenta", "#FF00FF", Foreground::White),
    League::new("Bright Lavender", "#BF94E4", Foreground::Black),
    League::new("Purple", "#800080", Foreground::White),
    League::new("Indigo", "#400040", Foreground::White),
    League::new("Olive", "#808000", Foreground::White),
    League::new("Taupe", "#B9A281", Foreground::White),
    League::new("Brown", "#8B4513", Foreground::White),
    League::new("Red", "#FF0000", Foreground::White),
    League::new("Crimson", "#DC143C", Foreground::White),
    League::new("Dark Red", "#8B0000", Foreground::White),
    League::new("Black", "#000000", Foreground::White),
];
