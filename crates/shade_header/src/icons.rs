//! Status icon visibility policy
//!
//! The icon container shows a row of named slots. Two independent
//! suppressions apply: slots *ignored* by the header while carrier text
//! needs the room, and slots *hidden* by the user through settings. A slot
//! is visible only when neither applies.

use rustc_hash::FxHashSet;

/// Named status bar icon slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusSlot {
    Airplane,
    AlarmClock,
    Bluetooth,
    CallStrength,
    Cast,
    Clock,
    Ethernet,
    Hotspot,
    Location,
    MobileSignal,
    NoCalling,
    Vpn,
    WifiSignal,
    Zen,
}

impl StatusSlot {
    /// Signal-strength slots the header hides to make room for carrier text
    pub const RSSI: [StatusSlot; 3] = [
        StatusSlot::MobileSignal,
        StatusSlot::NoCalling,
        StatusSlot::CallStrength,
    ];

    /// Parse a settings-style slot name
    pub fn from_name(name: &str) -> Option<StatusSlot> {
        match name {
            "airplane" => Some(StatusSlot::Airplane),
            "alarm_clock" => Some(StatusSlot::AlarmClock),
            "bluetooth" => Some(StatusSlot::Bluetooth),
            "call_strength" => Some(StatusSlot::CallStrength),
            "cast" => Some(StatusSlot::Cast),
            "clock" => Some(StatusSlot::Clock),
            "ethernet" => Some(StatusSlot::Ethernet),
            "hotspot" => Some(StatusSlot::Hotspot),
            "location" => Some(StatusSlot::Location),
            "mobile" => Some(StatusSlot::MobileSignal),
            "no_calling" => Some(StatusSlot::NoCalling),
            "vpn" => Some(StatusSlot::Vpn),
            "wifi" => Some(StatusSlot::WifiSignal),
            "zen" => Some(StatusSlot::Zen),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StatusSlot::Airplane => "airplane",
            StatusSlot::AlarmClock => "alarm_clock",
            StatusSlot::Bluetooth => "bluetooth",
            StatusSlot::CallStrength => "call_strength",
            StatusSlot::Cast => "cast",
            StatusSlot::Clock => "clock",
            StatusSlot::Ethernet => "ethernet",
            StatusSlot::Hotspot => "hotspot",
            StatusSlot::Location => "location",
            StatusSlot::MobileSignal => "mobile",
            StatusSlot::NoCalling => "no_calling",
            StatusSlot::Vpn => "vpn",
            StatusSlot::WifiSignal => "wifi",
            StatusSlot::Zen => "zen",
        }
    }
}

/// Tracks which slots the header is currently suppressing
#[derive(Clone, Debug, Default)]
pub struct IconPolicy {
    ignored: FxHashSet<StatusSlot>,
    hidden: FxHashSet<StatusSlot>,
}

impl IconPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add slots to the ignore set; already ignored slots stay ignored
    pub fn add_ignored_slots(&mut self, slots: &[StatusSlot]) {
        self.ignored.extend(slots.iter().copied());
    }

    /// Remove slots from the ignore set; absent slots are left alone
    pub fn remove_ignored_slots(&mut self, slots: &[StatusSlot]) {
        for slot in slots {
            self.ignored.remove(slot);
        }
    }

    pub fn is_ignored(&self, slot: StatusSlot) -> bool {
        self.ignored.contains(&slot)
    }

    /// Replace the user hide list wholesale
    pub fn set_hide_list(&mut self, slots: impl IntoIterator<Item = StatusSlot>) {
        self.hidden = slots.into_iter().collect();
    }

    pub fn is_hidden(&self, slot: StatusSlot) -> bool {
        self.hidden.contains(&slot)
    }

    /// A slot shows only when neither suppression applies
    pub fn is_slot_visible(&self, slot: StatusSlot) -> bool {
        !self.is_ignored(slot) && !self.is_hidden(slot)
    }
}
