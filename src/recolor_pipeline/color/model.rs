use tracing::debug;

use crate::recolor_pipeline::channels::{Channel, ChannelMode, ChannelSelection};
use crate::recolor_pipeline::color::target::TargetColor;
use crate::recolor_pipeline::color::types::{ColorHsv, ColorRgb};
use crate::recolor_pipeline::common::error::Result;

/// Session state: the target color plus the channels it goes into.
///
/// Setters that parse input leave the model untouched on error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorModel {
    target: TargetColor,
    selection: ChannelSelection,
}

impl ColorModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> &TargetColor {
        &self.target
    }

    pub fn selection(&self) -> &ChannelSelection {
        &self.selection
    }

    pub fn mode(&self) -> ChannelMode {
        self.selection.mode()
    }

    pub fn set_target(&mut self, target: TargetColor) {
        debug!(hex = %target, rgb = %target.rgb(), hsv = %target.hsv(), "Target color updated");
        self.target = target;
    }

    pub fn set_from_hex(&mut self, hex: &str) -> Result<()> {
        let target = TargetColor::from_hex(hex)?;
        self.set_target(target);
        Ok(())
    }

    pub fn set_from_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.set_target(TargetColor::from_rgb(ColorRgb::new(r, g, b)));
    }

    pub fn set_from_hsv(&mut self, h: u16, s: u8, v: u8) -> Result<()> {
        let hsv = ColorHsv::new(h, s, v)?;
        self.set_target(TargetColor::from_hsv(hsv));
        Ok(())
    }

    /// Accepts `#RRGGBB`, `rgb(R, G, B)` or `hsv(H, S%, V%)`.
    pub fn set_from_str(&mut self, input: &str) -> Result<()> {
        let target: TargetColor = input.parse()?;
        self.set_target(target);
        Ok(())
    }

    pub fn to_hex(&self) -> String {
        self.target.to_hex()
    }

    pub fn set_mode(&mut self, mode: ChannelMode) {
        self.selection.set_mode(mode);
    }

    pub fn select(&mut self, channel: Channel) -> bool {
        self.selection.select(channel)
    }

    pub fn deselect(&mut self, channel: Channel) -> bool {
        self.selection.deselect(channel)
    }

    pub fn toggle(&mut self, channel: Channel, on: bool) -> bool {
        self.selection.toggle(channel, on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recolor_pipeline::common::error::RecolorError;

    #[test]
    fn invalid_input_keeps_previous_state() {
        let mut model = ColorModel::new();
        model.set_from_hex("#00ff00").unwrap();

        assert!(matches!(model.set_from_hex("00ff00"), Err(RecolorError::InvalidFormat(_))));
        assert!(matches!(model.set_from_hsv(400, 10, 10), Err(RecolorError::InvalidFormat(_))));
        assert!(matches!(model.set_from_str("rgb(1,2)"), Err(RecolorError::InvalidFormat(_))));

        assert_eq!(model.to_hex(), "#00ff00");
        assert_eq!(model.target().hsv(), ColorHsv::new(120, 100, 100).unwrap());
    }

    #[test]
    fn every_setter_keeps_representations_in_sync() {
        let mut model = ColorModel::new();

        model.set_from_rgb(255, 0, 0);
        assert_eq!(model.target().hsv(), ColorHsv::new(0, 100, 100).unwrap());

        model.set_from_hsv(120, 100, 50).unwrap();
        assert_eq!(model.target().rgb(), ColorRgb::new(0, 128, 0));

        model.set_from_str("hsv(240, 100%, 100%)").unwrap();
        assert_eq!(model.to_hex(), "#0000ff");
    }

    #[test]
    fn mode_switch_drops_selection() {
        let mut model = ColorModel::new();
        assert_eq!(model.mode(), ChannelMode::Rgb);
        assert!(model.select(Channel::Red));

        model.set_mode(ChannelMode::Hsv);
        assert!(model.selection().is_empty());
        assert!(!model.select(Channel::Green));
        assert!(model.toggle(Channel::Value, true));

        model.set_mode(ChannelMode::Rgb);
        assert!(model.selection().is_empty());
    }
}
