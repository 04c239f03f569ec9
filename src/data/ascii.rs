//! ASCII art gallery
//!
//! Keys carry the `ascii-` prefix so they match the command typed in the
//! fun zone.

pub const ASCII_ARTS: &[(&str, &str)] = &[
    ("ascii-doge", include_str!("ascii/doge.txt")),
    ("ascii-cat", include_str!("ascii/cat.txt")),
    ("ascii-coffee", include_str!("ascii/coffee.txt")),
    ("ascii-rocket", include_str!("ascii/rocket.txt")),
    ("ascii-tux", include_str!("ascii/tux.txt")),
    ("ascii-skull", include_str!("ascii/skull.txt")),
];

/// Art for a full `ascii-<name>` key
pub fn art(key: &str) -> Option<&'static str> {
    ASCII_ARTS.iter().find(|(k, _)| *k == key).map(|(_, art)| *art)
}

/// All gallery keys, in gallery order
pub fn keys() -> impl Iterator<Item = &'static str> {
    ASCII_ARTS.iter().map(|(k, _)| *k)
}
