use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::de::Error;
use serde::{Deserialize, Serialize};

use crate::{Face, PerFace};

/// 8-bit sRGB color that serializes to a string like `"#ff00ff"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rgb = [0_u8; 3];
        let s = s.strip_prefix('#').unwrap_or(s).trim();
        match s.len() {
            3 => {
                let s = &s.chars().flat_map(|c| [c, c]).collect::<String>();
                hex::decode_to_slice(s, &mut rgb)?;
            }
            _ => hex::decode_to_slice(s, &mut rgb)?,
        }
        Ok(Rgb { rgb })
    }
}
impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_string().serialize(serializer)
    }
}
impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Rgb {
    /// Constructs a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }
}

/// Sticker color for each face of the solved cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ColorScheme(pub PerFace<Rgb>);

impl Default for ColorScheme {
    fn default() -> Self {
        Self(PerFace::from_fn(|face| match face {
            Face::Right => Rgb::new(0xb7, 0x12, 0x34),
            Face::Left => Rgb::new(0xff, 0x58, 0x00),
            Face::Up => Rgb::new(0xff, 0xff, 0xff),
            Face::Down => Rgb::new(0xff, 0xd5, 0x00),
            Face::Front => Rgb::new(0x00, 0x9b, 0x48),
            Face::Back => Rgb::new(0x00, 0x46, 0xad),
        }))
    }
}

impl Index<Face> for ColorScheme {
    type Output = Rgb;

    fn index(&self, face: Face) -> &Rgb {
        &self.0[face]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!("#f0a".parse::<Rgb>().unwrap(), Rgb::new(0xff, 0x00, 0xaa));
        assert_eq!("009b48".parse::<Rgb>().unwrap(), Rgb::new(0x00, 0x9b, 0x48));
        assert_eq!(Rgb::new(0xb7, 0x12, 0x34).to_string(), "#b71234");
        assert!("#12345".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_default_scheme_is_distinct() {
        let scheme = ColorScheme::default();
        for a in Face::iter() {
            for b in Face::iter().filter(|&b| b != a) {
                assert_ne!(scheme[a], scheme[b], "{a:?} and {b:?} share a color");
            }
        }
    }
}
