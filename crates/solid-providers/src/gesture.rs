//! Gesture buttons
//!
//! `SuperButton` handles every gesture; `DoubleTapButton` implements only
//! the double tap and is never asked for anything else.

use std::sync::Arc;

use solid_application::registry::{ImplementationConfig, STRATEGIES, StrategyEntry};
use solid_domain::Capability;
use solid_domain::error::Result;
use solid_domain::ports::{
    DoubleTap, DoubleTapCapability, LongPress, LongPressCapability, Tap, TapCapability,
};

#[derive(Debug, Clone, Default)]
pub struct SuperButton;

impl Tap for SuperButton {
    fn did_tap(&self) -> String {
        "single tap".to_string()
    }
}

impl DoubleTap for SuperButton {
    fn did_double_tap(&self) -> String {
        "double tap".to_string()
    }
}

impl LongPress for SuperButton {
    fn did_long_press(&self) -> String {
        "long press".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DoubleTapButton;

impl DoubleTap for DoubleTapButton {
    fn did_double_tap(&self) -> String {
        "double tap button pressed".to_string()
    }
}

fn super_tap(_: &ImplementationConfig) -> Result<Arc<dyn Tap>> {
    Ok(Arc::new(SuperButton))
}

fn super_double_tap(_: &ImplementationConfig) -> Result<Arc<dyn DoubleTap>> {
    Ok(Arc::new(SuperButton))
}

fn super_long_press(_: &ImplementationConfig) -> Result<Arc<dyn LongPress>> {
    Ok(Arc::new(SuperButton))
}

fn double_tap_button(_: &ImplementationConfig) -> Result<Arc<dyn DoubleTap>> {
    Ok(Arc::new(DoubleTapButton))
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STRATEGIES)]
static SUPER_BUTTON_TAP: StrategyEntry = StrategyEntry {
    capability: TapCapability::DESCRIPTOR.name,
    name: "super_button",
    description: "Button reacting to every gesture",
    install: |registry, options| registry.register_with::<TapCapability, _>(options, super_tap),
};

#[linkme::distributed_slice(STRATEGIES)]
static SUPER_BUTTON_DOUBLE_TAP: StrategyEntry = StrategyEntry {
    capability: DoubleTapCapability::DESCRIPTOR.name,
    name: "super_button",
    description: "Button reacting to every gesture",
    install: |registry, options| {
        registry.register_with::<DoubleTapCapability, _>(options, super_double_tap)
    },
};

#[linkme::distributed_slice(STRATEGIES)]
static SUPER_BUTTON_LONG_PRESS: StrategyEntry = StrategyEntry {
    capability: LongPressCapability::DESCRIPTOR.name,
    name: "super_button",
    description: "Button reacting to every gesture",
    install: |registry, options| {
        registry.register_with::<LongPressCapability, _>(options, super_long_press)
    },
};

#[linkme::distributed_slice(STRATEGIES)]
static DOUBLE_TAP_BUTTON: StrategyEntry = StrategyEntry {
    capability: DoubleTapCapability::DESCRIPTOR.name,
    name: "double_tap_button",
    description: "Button that only reacts to double taps",
    install: |registry, options| {
        registry.register_with::<DoubleTapCapability, _>(options, double_tap_button)
    },
};
