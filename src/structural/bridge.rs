//! # Bridge: abstraction and implementation varying independently.
//!
//! Remotes (the abstraction) drive devices (the implementation) through
//! the [`Device`] contract. New remotes and new devices are added
//! independently; any remote works with any device.

/// Contract every device honors.
pub trait Device {
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);

    /// Volume in percent, 0..=100.
    fn volume(&self) -> u8;
    fn set_volume(&mut self, percent: u8);

    fn channel(&self) -> u32;
    fn set_channel(&mut self, channel: u32);
}

/// Basic remote: works with any [`Device`].
pub struct Remote<D: Device> {
    device: D,
}

impl<D: Device> Remote<D> {
    /// Pairs the remote with a device.
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// The paired device.
    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn toggle_power(&mut self) {
        if self.device.is_enabled() {
            self.device.disable();
        } else {
            self.device.enable();
        }
    }

    pub fn volume_down(&mut self) {
        let v = self.device.volume();
        self.device.set_volume(v.saturating_sub(10));
    }

    pub fn volume_up(&mut self) {
        let v = self.device.volume();
        self.device.set_volume(v.saturating_add(10).min(100));
    }

    pub fn channel_down(&mut self) {
        let c = self.device.channel();
        self.device.set_channel(c.saturating_sub(1));
    }

    pub fn channel_up(&mut self) {
        let c = self.device.channel();
        self.device.set_channel(c + 1);
    }
}

/// Extended remote: everything the basic one does, plus mute.
///
/// Extends the abstraction without touching any device.
pub struct AdvancedRemote<D: Device> {
    remote: Remote<D>,
}

impl<D: Device> AdvancedRemote<D> {
    /// Pairs the advanced remote with a device.
    pub fn new(device: D) -> Self {
        Self {
            remote: Remote::new(device),
        }
    }

    /// The wrapped basic remote.
    pub fn remote_mut(&mut self) -> &mut Remote<D> {
        &mut self.remote
    }

    /// The paired device.
    pub fn device(&self) -> &D {
        self.remote.device()
    }

    pub fn mute(&mut self) {
        self.remote.device.set_volume(0);
    }
}

/// A television.
#[derive(Debug, Default)]
pub struct Tv {
    enabled: bool,
    volume: u8,
    channel: u32,
}

impl Device for Tv {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn volume(&self) -> u8 {
        self.volume
    }

    fn set_volume(&mut self, percent: u8) {
        self.volume = percent.min(100);
    }

    fn channel(&self) -> u32 {
        self.channel
    }

    fn set_channel(&mut self, channel: u32) {
        self.channel = channel;
    }
}

/// A radio.
#[derive(Debug, Default)]
pub struct Radio {
    enabled: bool,
    volume: u8,
    station: u32,
}

impl Device for Radio {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn volume(&self) -> u8 {
        self.volume
    }

    fn set_volume(&mut self, percent: u8) {
        self.volume = percent.min(100);
    }

    fn channel(&self) -> u32 {
        self.station
    }

    fn set_channel(&mut self, channel: u32) {
        self.station = channel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_remote_drives_any_device() {
        let mut tv_remote = Remote::new(Tv::default());
        tv_remote.toggle_power();
        tv_remote.volume_up();
        tv_remote.channel_up();
        assert!(tv_remote.device().is_enabled());
        assert_eq!(tv_remote.device().volume(), 10);
        assert_eq!(tv_remote.device().channel(), 1);

        let mut radio_remote = Remote::new(Radio::default());
        radio_remote.toggle_power();
        radio_remote.volume_up();
        assert!(radio_remote.device().is_enabled());
        assert_eq!(radio_remote.device().volume(), 10);
    }

    #[test]
    fn test_advanced_remote_extends_without_touching_devices() {
        let mut remote = AdvancedRemote::new(Radio::default());
        remote.remote_mut().volume_up();
        remote.remote_mut().volume_up();
        assert_eq!(remote.device().volume(), 20);

        remote.mute();
        assert_eq!(remote.device().volume(), 0);
    }

    #[test]
    fn test_volume_and_channel_stay_in_range() {
        let mut remote = Remote::new(Tv::default());
        remote.volume_down();
        assert_eq!(remote.device().volume(), 0);

        for _ in 0..20 {
            remote.volume_up();
        }
        assert_eq!(remote.device().volume(), 100);

        remote.channel_down();
        assert_eq!(remote.device().channel(), 0);
    }

    #[test]
    fn test_toggle_power_flips_state() {
        let mut remote = Remote::new(Tv::default());
        remote.toggle_power();
        assert!(remote.device().is_enabled());
        remote.toggle_power();
        assert!(!remote.device().is_enabled());
    }
}
