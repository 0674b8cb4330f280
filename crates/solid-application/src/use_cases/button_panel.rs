//! A panel that only depends on the gestures it handles

use std::sync::Arc;

use solid_domain::error::Result;
use solid_domain::ports::{DoubleTap, DoubleTapCapability, Tap, TapCapability};

use crate::composer::{Composite, CompositionSpec, Parts};

pub struct ButtonPanel {
    tap: Arc<dyn Tap>,
    double_tap: Arc<dyn DoubleTap>,
}

impl ButtonPanel {
    pub fn new(tap: Arc<dyn Tap>, double_tap: Arc<dyn DoubleTap>) -> Self {
        Self { tap, double_tap }
    }

    pub fn tap(&self) -> String {
        self.tap.did_tap()
    }

    pub fn double_tap(&self) -> String {
        self.double_tap.did_double_tap()
    }
}

impl Composite for ButtonPanel {
    fn blueprint() -> CompositionSpec {
        CompositionSpec::new()
            .require::<TapCapability>("tap")
            .require::<DoubleTapCapability>("double_tap")
    }

    fn assemble(mut parts: Parts) -> Result<Self> {
        Ok(Self::new(
            parts.take::<TapCapability>("tap")?,
            parts.take::<DoubleTapCapability>("double_tap")?,
        ))
    }
}
