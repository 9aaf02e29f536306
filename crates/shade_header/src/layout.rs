//! Pure layout policy for the header chrome
//!
//! Layout here is a function, not a pass: given the current [`LayoutMode`]
//! and a couple of policy bits, [`compute_directives`] returns the sizing
//! directives the enclosing layout system applies verbatim. Equal inputs
//! give equal directives, so callers may recompute as often as they like.

/// Dimension constants standing in for the platform resource table
pub mod dimens {
    /// Top margin of the embedded quick panel when the large-screen header
    /// owns the status rows
    pub const QQS_LAYOUT_MARGIN_TOP: f32 = 16.0;
    /// Minimum header height, doubling as the panel top margin on phones
    pub const LARGE_SCREEN_SHADE_HEADER_MIN_HEIGHT: f32 = 48.0;
    /// Clock leading padding inside the collapsed strip
    pub const CLOCK_PADDING_START: f32 = 7.0;
    /// Clock trailing padding; also the clock/date label's leading margin
    pub const CLOCK_PADDING_END: f32 = 2.0;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape)
    }
}

/// How a container claims horizontal space
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeMode {
    /// Wrap the natural content width
    Content,
    /// Zero base width stretched by a flex weight share
    Weighted(f32),
}

/// Overall header height directive
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderHeight {
    WrapContent,
    Fixed(f32),
}

/// Battery meter percent display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryMode {
    /// Show the remaining-time estimate
    Estimate,
    /// Show the plain percentage
    PercentOn,
}

/// Display inputs the layout policy is a function of
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutMode {
    pub orientation: Orientation,
    pub is_large_screen: bool,
    /// The large-screen combined header owns the status rows; this header
    /// then keeps its animators disabled
    pub combined_header: bool,
}

/// Sizing directives consumed by the enclosing layout system
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutDirectives {
    pub header_height: HeaderHeight,
    pub date_container: SizeMode,
    pub privacy_container: SizeMode,
    /// Top margin handed to the embedded quick panel
    pub panel_top_margin: f32,
    pub battery_mode: BatteryMode,
    pub clock_padding_start: f32,
    pub clock_padding_end: f32,
    /// Leading margin of the clock/date label, chained off the clock padding
    pub clock_date_margin_start: f32,
}

/// Compute sizing directives for the current mode
///
/// In landscape the date and privacy containers size to content; in portrait
/// they split the strip with equal weights. Disabling quick settings
/// collapses the header to zero height outright.
pub fn compute_directives(
    mode: LayoutMode,
    qs_disabled: bool,
    show_battery_estimate: bool,
) -> LayoutDirectives {
    let container = if mode.orientation.is_landscape() {
        SizeMode::Content
    } else {
        SizeMode::Weighted(1.0)
    };

    LayoutDirectives {
        header_height: if qs_disabled {
            HeaderHeight::Fixed(0.0)
        } else {
            HeaderHeight::WrapContent
        },
        date_container: container,
        privacy_container: container,
        panel_top_margin: if mode.is_large_screen {
            dimens::QQS_LAYOUT_MARGIN_TOP
        } else {
            dimens::LARGE_SCREEN_SHADE_HEADER_MIN_HEIGHT
        },
        battery_mode: if show_battery_estimate {
            BatteryMode::Estimate
        } else {
            BatteryMode::PercentOn
        },
        clock_padding_start: dimens::CLOCK_PADDING_START,
        clock_padding_end: dimens::CLOCK_PADDING_END,
        clock_date_margin_start: dimens::CLOCK_PADDING_END,
    }
}
