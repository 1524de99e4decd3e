//! Page-wide state shared by the behavior handlers.

use crate::config::BehaviorConfig;
use crate::device::DeviceProfile;
use crate::scroll::ScrollTracker;
use crate::touch::DoubleTapGuard;
use std::cell::RefCell;
use std::rc::Rc;

/// Created once per page load and handed to every behavior as `Rc<PageContext>`.
#[derive(Debug)]
pub struct PageContext {
    pub device: DeviceProfile,
    pub config: BehaviorConfig,
    pub touch: RefCell<DoubleTapGuard>,
    pub scroll: RefCell<ScrollTracker>,
}

impl PageContext {
    pub fn new(device: DeviceProfile, config: BehaviorConfig) -> Rc<Self> {
        let touch = DoubleTapGuard::new(config.double_tap_window_ms);
        Rc::new(Self {
            device,
            config,
            touch: RefCell::new(touch),
            scroll: RefCell::new(ScrollTracker::default()),
        })
    }
}
