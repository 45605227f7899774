use tracing::debug;

use crate::recolor_pipeline::channels::types::{Channel, ChannelMode};

pub const MAX_SELECTED_CHANNELS: usize = 2;

/// Ordered set of at most two channels, all from the same mode.
///
/// The cap is enforced on insertion: once two channels are held, any
/// further selection is refused and the existing pair is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelSelection {
    mode: ChannelMode,
    channels: Vec<Channel>,
}

impl ChannelSelection {
    pub fn new(mode: ChannelMode) -> Self {
        Self {
            mode,
            channels: Vec::with_capacity(MAX_SELECTED_CHANNELS),
        }
    }

    /// Builds a selection by selecting `channels` in order.
    pub fn with_channels(mode: ChannelMode, channels: &[Channel]) -> Self {
        let mut selection = Self::new(mode);
        for &channel in channels {
            selection.select(channel);
        }
        selection
    }

    pub fn mode(&self) -> ChannelMode {
        self.mode
    }

    /// Switches mode. Always clears the selection, even for the same mode.
    pub fn set_mode(&mut self, mode: ChannelMode) {
        debug!(from = %self.mode, to = %mode, "Switching channel mode");
        self.mode = mode;
        self.channels.clear();
    }

    /// Returns `true` if the channel was added.
    pub fn select(&mut self, channel: Channel) -> bool {
        if channel.mode() != self.mode || self.contains(channel) {
            return false;
        }
        if self.channels.len() >= MAX_SELECTED_CHANNELS {
            debug!(%channel, "Channel cap reached, discarding newest selection");
            return false;
        }
        self.channels.push(channel);
        true
    }

    /// Returns `true` if the channel was removed.
    pub fn deselect(&mut self, channel: Channel) -> bool {
        match self.channels.iter().position(|&c| c == channel) {
            Some(index) => {
                self.channels.remove(index);
                true
            }
            None => false,
        }
    }

    /// Checkbox-style toggle. Returns whether the channel is selected afterwards.
    pub fn toggle(&mut self, channel: Channel, on: bool) -> bool {
        if on {
            self.select(channel);
        } else {
            self.deselect(channel);
        }
        self.contains(channel)
    }

    pub fn clear(&mut self) {
        self.channels.clear();
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }
}
