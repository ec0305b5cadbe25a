/// Pointer distance from the viewport top that reveals the bar.
pub const TOPBAR_REVEAL_THRESHOLD_PX: f64 = 64.0;
/// Idle time before the bar hides itself.
pub const TOPBAR_HIDE_AFTER_MS: u32 = 2_500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TopbarInput {
    PointerMove { y: f64 },
    /// Pointer or touch entered the bar.
    Enter,
    Leave,
    Scroll { y: f64 },
    /// A hide timer armed with this generation fired.
    TimerFired { generation: u64 },
}

/// What the host should do with its hide timer after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Keep,
    Cancel,
    /// Drop any pending timer and arm a new one carrying `generation`.
    Arm { generation: u64 },
}

/// Show/hide state machine for the auto-hiding navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Topbar {
    visible: bool,
    hovered: bool,
    last_scroll_y: f64,
    generation: u64,
}

impl Default for Topbar {
    fn default() -> Self {
        Self {
            visible: true,
            hovered: false,
            last_scroll_y: 0.0,
            generation: 0,
        }
    }
}

impl Topbar {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Start the first idle countdown after page load.
    pub fn start(&mut self, scroll_y: f64) -> TimerAction {
        self.last_scroll_y = scroll_y;
        self.arm()
    }

    pub fn handle(&mut self, input: TopbarInput) -> TimerAction {
        match input {
            TopbarInput::PointerMove { y } => {
                if y <= TOPBAR_REVEAL_THRESHOLD_PX {
                    self.show_then_idle()
                } else {
                    TimerAction::Keep
                }
            }
            TopbarInput::Enter => {
                self.hovered = true;
                self.visible = true;
                self.cancel()
            }
            TopbarInput::Leave => {
                self.hovered = false;
                self.arm()
            }
            TopbarInput::Scroll { y } => {
                let previous = std::mem::replace(&mut self.last_scroll_y, y);
                if y > previous {
                    self.show_then_idle()
                } else if y < previous && !self.hovered {
                    self.visible = false;
                    self.cancel()
                } else {
                    TimerAction::Keep
                }
            }
            TopbarInput::TimerFired { generation } => {
                if generation == self.generation && !self.hovered {
                    self.visible = false;
                }
                TimerAction::Keep
            }
        }
    }

    fn show_then_idle(&mut self) -> TimerAction {
        self.visible = true;
        if self.hovered {
            self.cancel()
        } else {
            self.arm()
        }
    }

    fn arm(&mut self) -> TimerAction {
        self.generation += 1;
        TimerAction::Arm {
            generation: self.generation,
        }
    }

    fn cancel(&mut self) -> TimerAction {
        self.generation += 1;
        TimerAction::Cancel
    }
}
