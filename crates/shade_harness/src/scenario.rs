//! Scenario file handling
//!
//! A scenario is a named list of steps applied to a fresh coordinator in
//! order, stored as TOML:
//!
//! ```toml
//! name = "drag-open"
//!
//! [header]
//! linear_path = true
//!
//! [[steps]]
//! op = "measure"
//! height = 120.0
//!
//! [[steps]]
//! op = "fraction"
//! value = 0.5
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A scripted run against one coordinator instance
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scenario {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub header: HeaderOptions,
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_name() -> String {
    "scenario".to_string()
}

/// Coordinator construction options for a scenario
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HeaderOptions {
    /// Start in combined-header mode
    #[serde(default)]
    pub combined: bool,
    /// Show the battery time estimate
    #[serde(default)]
    pub battery_estimate: bool,
    /// Show the clock/icons separator while collapsed at rest
    #[serde(default)]
    pub clock_icons_separator: bool,
    /// Use a linear translation curve instead of the decelerate path
    #[serde(default)]
    pub linear_path: bool,
}

/// One input applied to the coordinator
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Scrub the expansion fraction
    Fraction { value: f32 },
    /// Update the keyguard transition fraction
    Keyguard { value: f32 },
    /// Show or hide the privacy chip
    Chip { visible: bool },
    /// Report single- or multi-carrier
    SingleCarrier { single: bool },
    /// Deliver a new measured header height
    Measure { height: f32 },
    /// Change display configuration
    Configure {
        #[serde(default)]
        landscape: bool,
        #[serde(default)]
        large_screen: bool,
    },
    /// Toggle combined-header mode at runtime
    CombinedHeader { combined: bool },
    /// Deliver a disable-policy word
    Disable { flags: u32 },
    /// Deliver a setting change through the tuner hub
    Setting {
        key: String,
        switch: Option<i32>,
        hide_list: Option<Vec<String>>,
    },
    /// Scroll the status strips
    Scroll { y: f32 },
    /// Toggle panel listening
    Listening { listening: bool },
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let scenario: Scenario = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(scenario)
    }

    /// Generated scenario: measure once, sweep the fraction to 1 and back
    pub fn sweep(frames: usize) -> Self {
        let frames = frames.max(1);
        let mut steps = vec![Step::Measure { height: 120.0 }];
        for i in 0..=frames {
            steps.push(Step::Fraction {
                value: i as f32 / frames as f32,
            });
        }
        for i in (0..frames).rev() {
            steps.push(Step::Fraction {
                value: i as f32 / frames as f32,
            });
        }

        Self {
            name: "sweep".to_string(),
            header: HeaderOptions::default(),
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario_toml() {
        let text = r#"
name = "drag"

[header]
linear_path = true

[[steps]]
op = "measure"
height = 100.0

[[steps]]
op = "fraction"
value = 0.5

[[steps]]
op = "setting"
key = "show_date"
switch = 0

[[steps]]
op = "setting"
key = "icon_hide_list"
hide_list = ["clock", "wifi"]
"#;
        let scenario: Scenario = toml::from_str(text).unwrap();
        assert_eq!(scenario.name, "drag");
        assert!(scenario.header.linear_path);
        assert!(!scenario.header.combined);
        assert_eq!(scenario.steps.len(), 4);
        assert!(matches!(scenario.steps[0], Step::Measure { height } if height == 100.0));
        assert!(matches!(scenario.steps[1], Step::Fraction { value } if value == 0.5));
        assert!(matches!(
            &scenario.steps[3],
            Step::Setting { hide_list: Some(list), .. } if list.len() == 2
        ));
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let scenario: Scenario = toml::from_str("").unwrap();
        assert_eq!(scenario.name, "scenario");
        assert!(scenario.steps.is_empty());
    }

    #[test]
    fn test_sweep_touches_both_endpoints() {
        let scenario = Scenario::sweep(4);
        let fractions: Vec<f32> = scenario
            .steps
            .iter()
            .filter_map(|step| match step {
                Step::Fraction { value } => Some(*value),
                _ => None,
            })
            .collect();

        assert_eq!(fractions.first(), Some(&0.0));
        assert!(fractions.contains(&1.0));
        assert_eq!(fractions.last(), Some(&0.0));
    }
}
