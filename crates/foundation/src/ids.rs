/// Internal display config id: the position of a config in the device's config list.
pub type ConfigId = i32;

/// Config id as reported by the hardware composer.
pub type HwcConfigId = u32;

/// Placeholder config used to track time while the screen is not on.
///
/// The real config in that state is owned by the hardware composer and is not
/// visible to the compositor.
pub const SCREEN_OFF_CONFIG_ID: ConfigId = -1;

/// Hardware-composer counterpart of [`SCREEN_OFF_CONFIG_ID`].
pub const HWC2_SCREEN_OFF_CONFIG_ID: HwcConfigId = 0xFFFF_FFFF;

pub fn is_screen_off(id: ConfigId) -> bool {
    id == SCREEN_OFF_CONFIG_ID
}

pub fn is_hwc_screen_off(id: HwcConfigId) -> bool {
    id == HWC2_SCREEN_OFF_CONFIG_ID
}

/// Maps the hardware-composer screen-off sentinel to the internal one.
///
/// Any other hardware id needs the device config table to resolve and yields `None`.
pub fn screen_off_from_hwc(id: HwcConfigId) -> Option<ConfigId> {
    is_hwc_screen_off(id).then_some(SCREEN_OFF_CONFIG_ID)
}

pub fn screen_off_to_hwc(id: ConfigId) -> Option<HwcConfigId> {
    is_screen_off(id).then_some(HWC2_SCREEN_OFF_CONFIG_ID)
}

/// A display config as seen by refresh-rate bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayConfig {
    pub config_id: ConfigId,
    pub hwc_id: HwcConfigId,
    /// Human readable name, e.g. `"60fps"`.
    pub name: String,
    /// Refresh rate rounded down to whole frames per second.
    pub fps: u32,
}

impl DisplayConfig {
    pub fn new(config_id: ConfigId, hwc_id: HwcConfigId, name: impl Into<String>, fps: u32) -> Self {
        Self {
            config_id,
            hwc_id,
            name: name.into(),
            fps,
        }
    }

    /// The power-saving entry the hardware composer uses while dozing or off.
    pub fn screen_off() -> Self {
        Self::new(SCREEN_OFF_CONFIG_ID, HWC2_SCREEN_OFF_CONFIG_ID, "ScreenOff", 0)
    }

    pub fn is_screen_off(&self) -> bool {
        is_screen_off(self.config_id)
    }
}
