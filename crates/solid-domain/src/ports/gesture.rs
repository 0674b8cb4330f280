//! Gesture capabilities
//!
//! Each gesture is its own capability; a button implements only the
//! gestures it reacts to.

use crate::capability::{Capability, CapabilityDescriptor};

pub trait Tap: Send + Sync {
    fn did_tap(&self) -> String;
}

pub trait DoubleTap: Send + Sync {
    fn did_double_tap(&self) -> String;
}

pub trait LongPress: Send + Sync {
    fn did_long_press(&self) -> String;
}

/// Capability marker for [`Tap`]
pub struct TapCapability;

impl Capability for TapCapability {
    type Object = dyn Tap;
    const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
        name: "tap",
        description: "Reacts to a single tap",
        methods: &["did_tap"],
    };
}

/// Capability marker for [`DoubleTap`]
pub struct DoubleTapCapability;

impl Capability for DoubleTapCapability {
    type Object = dyn DoubleTap;
    const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
        name: "double_tap",
        description: "Reacts to a double tap",
        methods: &["did_double_tap"],
    };
}

/// Capability marker for [`LongPress`]
pub struct LongPressCapability;

impl Capability for LongPressCapability {
    type Object = dyn LongPress;
    const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
        name: "long_press",
        description: "Reacts to a long press",
        methods: &["did_long_press"],
    };
}
