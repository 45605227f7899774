use crate::recolor_pipeline::channels::{Channel, ChannelMode, ChannelSelection};
use crate::recolor_pipeline::color::{ColorHsv, ColorRgb, TargetColor, hsv_to_rgb, rgb_to_hsv};
use crate::recolor_pipeline::substitution::types::Pixel;

/// Computes the replacement for a single pixel.
///
/// Implementations must be pure per pixel: the processor may call them
/// from several threads and in any order.
pub trait PixelSubstitution: Send + Sync {
    fn substitute(&self, pixel: Pixel, selection: &ChannelSelection, target: &TargetColor) -> Pixel;
}

/// Replaces the selected channels with the target color's components.
///
/// In RGB mode the selected bytes are overwritten directly. In HSV mode
/// the pixel is converted to HSV, the selected components are replaced,
/// and the result is converted back. An empty selection leaves the pixel
/// as it is in RGB mode, but still round-trips it through HSV in HSV mode;
/// the processor refuses empty selections before reaching this point.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelSubstitutionEngine;

fn pick<T>(selection: &ChannelSelection, channel: Channel, replacement: T, own: T) -> T {
    if selection.contains(channel) { replacement } else { own }
}

impl PixelSubstitution for ChannelSubstitutionEngine {
    fn substitute(&self, pixel: Pixel, selection: &ChannelSelection, target: &TargetColor) -> Pixel {
        match selection.mode() {
            ChannelMode::Rgb => {
                let target = target.rgb();
                pixel.with_rgb(ColorRgb::new(
                    pick(selection, Channel::Red, target.r, pixel.r),
                    pick(selection, Channel::Green, target.g, pixel.g),
                    pick(selection, Channel::Blue, target.b, pixel.b),
                ))
            }
            ChannelMode::Hsv => {
                let own = rgb_to_hsv(pixel.rgb());
                let target = target.hsv();
                let hsv = ColorHsv::from_parts(
                    pick(selection, Channel::Hue, target.h(), own.h()),
                    pick(selection, Channel::Saturation, target.s(), own.s()),
                    pick(selection, Channel::Value, target.v(), own.v()),
                );
                pixel.with_rgb(hsv_to_rgb(hsv))
            }
        }
    }
}
