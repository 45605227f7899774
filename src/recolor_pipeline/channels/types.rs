//! Channel and color space identifiers

use std::fmt;
use std::str::FromStr;

use crate::recolor_pipeline::common::error::RecolorError;

/// Color space in which channels are substituted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelMode {
    #[default]
    Rgb,
    Hsv,
}

impl ChannelMode {
    pub fn channels(self) -> [Channel; 3] {
        match self {
            ChannelMode::Rgb => [Channel::Red, Channel::Green, Channel::Blue],
            ChannelMode::Hsv => [Channel::Hue, Channel::Saturation, Channel::Value],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelMode::Rgb => "rgb",
            ChannelMode::Hsv => "hsv",
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelMode {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ChannelMode::Rgb),
            "hsv" => Ok(ChannelMode::Hsv),
            _ => Err(RecolorError::InvalidFormat(format!("unknown mode {:?}", s))),
        }
    }
}

/// One named component of a color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Value,
}

impl Channel {
    pub fn mode(self) -> ChannelMode {
        match self {
            Channel::Red | Channel::Green | Channel::Blue => ChannelMode::Rgb,
            Channel::Hue | Channel::Saturation | Channel::Value => ChannelMode::Hsv,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Channel::Red => 'r',
            Channel::Green => 'g',
            Channel::Blue => 'b',
            Channel::Hue => 'h',
            Channel::Saturation => 's',
            Channel::Value => 'v',
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Channel {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Channel::Red),
            "g" | "green" => Ok(Channel::Green),
            "b" | "blue" => Ok(Channel::Blue),
            "h" | "hue" => Ok(Channel::Hue),
            "s" | "saturation" => Ok(Channel::Saturation),
            "v" | "value" => Ok(Channel::Value),
            _ => Err(RecolorError::InvalidFormat(format!("unknown channel {:?}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_channel_belongs_to_its_mode() {
        for mode in [ChannelMode::Rgb, ChannelMode::Hsv] {
            for channel in mode.channels() {
                assert_eq!(channel.mode(), mode);
            }
        }
    }

    #[test]
    fn parse_mode_and_channel() {
        assert_eq!("RGB".parse::<ChannelMode>().unwrap(), ChannelMode::Rgb);
        assert_eq!(" hsv ".parse::<ChannelMode>().unwrap(), ChannelMode::Hsv);
        assert!("lab".parse::<ChannelMode>().is_err());

        assert_eq!("s".parse::<Channel>().unwrap(), Channel::Saturation);
        assert_eq!("Blue".parse::<Channel>().unwrap(), Channel::Blue);
        assert!("alpha".parse::<Channel>().is_err());
    }
}
