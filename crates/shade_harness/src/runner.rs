//! Scenario runner
//!
//! Builds one [`ExpansionCoordinator`], applies scenario steps in order, and
//! samples the element store after each step. Setting steps travel through a
//! [`TunerHub`] the way they would in production; everything else hits the
//! coordinator's typed surface directly.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Result};
use tracing::{debug, info};

use shade_animation::Easing;
use shade_header::{
    DisableFlags, ExpansionCoordinator, HeaderConfig, HeaderTarget, Orientation,
    QuickPanelHandle, SettingKey, SettingValue, StatusSlot, TunerHub, Visibility,
};

use crate::scenario::{Scenario, Step};

/// Panel handle that logs every transition
pub struct LoggingPanel;

impl QuickPanelHandle for LoggingPanel {
    fn set_expanded(&mut self, expanded: bool) {
        debug!(expanded, "panel expansion");
    }

    fn set_disabled_by_policy(&mut self, disabled: bool) {
        debug!(disabled, "panel disable policy");
    }

    fn set_listening(&mut self, listening: bool) {
        debug!(listening, "panel listening");
    }
}

/// One sampled frame of header state
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot {
    pub fraction: f32,
    pub clock_date_alpha: f32,
    pub date_alpha: f32,
    pub carrier_alpha: f32,
    pub icons_alpha: f32,
    pub battery_alpha: f32,
    pub qs_translation: f32,
    pub clock_date_gone: bool,
    pub rssi_ignored: bool,
}

/// Frames collected over one scenario run
#[derive(Debug, Default)]
pub struct FrameLog {
    pub frames: Vec<FrameSnapshot>,
}

impl FrameLog {
    fn capture(&mut self, header: &ExpansionCoordinator) {
        let elements = header.elements();
        self.frames.push(FrameSnapshot {
            fraction: header.state().expansion_fraction,
            clock_date_alpha: elements.alpha(HeaderTarget::ClockDateLabel),
            date_alpha: elements.alpha(HeaderTarget::DateLabel),
            carrier_alpha: elements.alpha(HeaderTarget::CarrierGroup),
            icons_alpha: elements.alpha(HeaderTarget::StatusIcons),
            battery_alpha: elements.alpha(HeaderTarget::Battery),
            qs_translation: elements.translation_y(HeaderTarget::QsContainer),
            clock_date_gone: elements.visibility(HeaderTarget::ClockDateLabel)
                == Visibility::Gone,
            rssi_ignored: StatusSlot::RSSI
                .iter()
                .all(|slot| header.icons().is_ignored(*slot)),
        });
    }
}

/// Run `scenario` against a fresh coordinator and collect per-step frames
pub fn run_scenario(scenario: &Scenario) -> Result<FrameLog> {
    let mut config = HeaderConfig::default()
        .with_combined_header(scenario.header.combined)
        .with_battery_estimate(scenario.header.battery_estimate)
        .with_clock_icons_separator(scenario.header.clock_icons_separator);
    if scenario.header.linear_path {
        config = config.with_path_curve(Easing::Linear);
    }

    let header = Rc::new(RefCell::new(ExpansionCoordinator::new(
        Box::new(LoggingPanel),
        config,
    )?));

    let mut hub = TunerHub::new();
    hub.add_tunable(
        header.clone(),
        &[
            SettingKey::ShowClock,
            SettingKey::ShowDate,
            SettingKey::IconHideList,
        ],
    );

    info!(
        name = scenario.name.as_str(),
        steps = scenario.steps.len(),
        "running scenario"
    );

    let mut log = FrameLog::default();
    for step in &scenario.steps {
        apply_step(&header, &hub, step)?;
        log.capture(&header.borrow());
    }
    Ok(log)
}

fn apply_step(
    header: &Rc<RefCell<ExpansionCoordinator>>,
    hub: &TunerHub,
    step: &Step,
) -> Result<()> {
    match step {
        Step::Fraction { value } => header.borrow_mut().set_expansion_fraction(*value),
        Step::Keyguard { value } => header.borrow_mut().set_keyguard_expansion_fraction(*value),
        Step::Chip { visible } => header.borrow_mut().set_chip_visible(*visible),
        Step::SingleCarrier { single } => header.borrow_mut().set_is_single_carrier(*single),
        Step::Measure { height } => header.borrow_mut().set_measured_height(*height),
        Step::Configure {
            landscape,
            large_screen,
        } => {
            let orientation = if *landscape {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            };
            header
                .borrow_mut()
                .configuration_changed(orientation, *large_screen);
        }
        Step::CombinedHeader { combined } => header.borrow_mut().set_combined_header(*combined),
        Step::Disable { flags } => header.borrow_mut().disable(DisableFlags(*flags)),
        Step::Setting {
            key,
            switch,
            hide_list,
        } => {
            let (key, value) = parse_setting(key, *switch, hide_list.as_deref())?;
            // The hub takes its own borrow of the coordinator
            hub.broadcast(key, &value);
        }
        Step::Scroll { y } => header.borrow_mut().set_expanded_scroll_amount(*y),
        Step::Listening { listening } => header.borrow_mut().set_listening(*listening),
    }
    Ok(())
}

fn parse_setting(
    key: &str,
    switch: Option<i32>,
    hide_list: Option<&[String]>,
) -> Result<(SettingKey, SettingValue)> {
    let key = match key {
        "show_clock" => SettingKey::ShowClock,
        "show_date" => SettingKey::ShowDate,
        "icon_hide_list" => SettingKey::IconHideList,
        other => bail!("unknown setting key '{}'", other),
    };
    let value = match key {
        SettingKey::IconHideList => {
            SettingValue::HideList(hide_list.map(<[String]>::to_vec).unwrap_or_default())
        }
        SettingKey::ShowClock | SettingKey::ShowDate => SettingValue::Switch(switch),
    };
    Ok((key, value))
}
