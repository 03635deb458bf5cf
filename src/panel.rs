//! Expandable contact panel animator.
//!
//! DESIGN
//! ======
//! The `<details>` element owns the open/closed flag; this machine only drives
//! the height/opacity transition between the two and tells the host when to
//! flip the flag. The flag goes true synchronously when opening starts (so
//! assistive technology sees it immediately) and false only once the closing
//! transition has finished.
//!
//! Every animation gets a fresh generation number. Animation-frame callbacks
//! carry the generation they were requested for, and stale ones are dropped,
//! so a rapid re-toggle can never land a previous animation's frame. A
//! completion is only awaited once the current generation's frame has
//! started its transition; a height transition-end arriving before that
//! belongs to a superseded animation and is ignored.
//!
//! Measurements (`scrollHeight`) are taken by the host and passed in on the
//! events that need them.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

impl PanelPhase {
    /// True while the panel is open or on its way there.
    #[must_use]
    pub fn is_opening_or_open(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// Explicit inline height written to the inner panel node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelHeight {
    Px(f64),
    Auto,
    /// Remove the inline override.
    Cleared,
}

impl PanelHeight {
    /// Inline style value; empty string removes the override.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Px(px) => format!("{px}px"),
            Self::Auto => "auto".to_owned(),
            Self::Cleared => String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    /// The panel should open (native toggle or fragment on load).
    OpenRequested,
    /// The panel should close; `content_height` is the current `scrollHeight`.
    CloseRequested { content_height: f64 },
    /// An in-page link to the panel's fragment was activated.
    LinkActivated,
    /// Animation frame requested for `generation` has fired.
    AnimationFrame { generation: u64, content_height: f64 },
    /// A CSS transition on the inner node finished.
    TransitionEnd { property: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelEffect {
    ShowBlock,
    ClearDisplay,
    SetHeight(PanelHeight),
    SetOpacity(f64),
    SetTransition(String),
    SetOpen(bool),
    RequestFrame { generation: u64 },
    ScrollIntoView,
    ReplaceFragment(String),
}

/// True when `hash` (as read from `location.hash`) addresses `anchor_id`.
#[must_use]
pub fn fragment_targets_panel(hash: &str, anchor_id: &str) -> bool {
    hash.strip_prefix('#').is_some_and(|h| !anchor_id.is_empty() && h == anchor_id)
}

/// Scroll to the panel and record `#anchor_id` without a navigation jump.
///
/// Applied on link activation whether or not the panel can animate.
#[must_use]
pub fn deep_link_effects(anchor_id: &str) -> [PanelEffect; 2] {
    [PanelEffect::ScrollIntoView, PanelEffect::ReplaceFragment(format!("#{anchor_id}"))]
}

#[derive(Clone, Debug)]
pub struct PanelMachine {
    phase: PanelPhase,
    generation: u64,
    awaiting_end: bool,
    transition: String,
    anchor_id: String,
}

impl PanelMachine {
    /// Create a machine for a panel whose `open` attribute is `is_open` at load.
    #[must_use]
    pub fn new(is_open: bool, transition: &str, anchor_id: &str) -> Self {
        Self {
            phase: if is_open { PanelPhase::Open } else { PanelPhase::Closed },
            generation: 0,
            awaiting_end: false,
            transition: transition.to_owned(),
            anchor_id: anchor_id.to_owned(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True from the current animation's frame until its height transition ends.
    #[must_use]
    pub fn awaiting_end(&self) -> bool {
        self.awaiting_end
    }

    /// Inline styles matching the initial open/closed attribute.
    #[must_use]
    pub fn initial_effects(&self) -> Vec<PanelEffect> {
        if self.phase == PanelPhase::Open {
            vec![PanelEffect::SetHeight(PanelHeight::Auto), PanelEffect::SetOpacity(1.0)]
        } else {
            vec![PanelEffect::SetHeight(PanelHeight::Px(0.0)), PanelEffect::SetOpacity(0.0)]
        }
    }

    /// Event for a click on the `<summary>`.
    ///
    /// The host always prevents the native toggle, so `<details>` stays open
    /// through the close animation and a click during closing reverses it.
    #[must_use]
    pub fn summary_click(&self, content_height: f64) -> PanelEvent {
        if self.phase.is_opening_or_open() {
            PanelEvent::CloseRequested { content_height }
        } else {
            PanelEvent::OpenRequested
        }
    }

    /// Map a native `toggle` event to a machine event.
    ///
    /// Toggles that merely echo a flag the machine itself set are ignored.
    #[must_use]
    pub fn native_toggle(&self, is_open: bool, content_height: f64) -> Option<PanelEvent> {
        match (is_open, self.phase.is_opening_or_open()) {
            (true, false) => Some(PanelEvent::OpenRequested),
            (false, true) => Some(PanelEvent::CloseRequested { content_height }),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: PanelEvent) -> Vec<PanelEffect> {
        match event {
            PanelEvent::OpenRequested => {
                if self.phase.is_opening_or_open() {
                    return Vec::new();
                }
                self.start_opening()
            }
            PanelEvent::CloseRequested { content_height } => {
                if !self.phase.is_opening_or_open() {
                    return Vec::new();
                }
                self.start_closing(content_height)
            }
            PanelEvent::LinkActivated => {
                let mut effects = if self.phase.is_opening_or_open() { Vec::new() } else { self.start_opening() };
                effects.extend(deep_link_effects(&self.anchor_id));
                effects
            }
            PanelEvent::AnimationFrame { generation, content_height } => self.on_frame(generation, content_height),
            PanelEvent::TransitionEnd { property } => self.on_transition_end(&property),
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.awaiting_end = false;
        self.generation
    }

    fn start_opening(&mut self) -> Vec<PanelEffect> {
        self.phase = PanelPhase::Opening;
        let generation = self.next_generation();
        vec![
            PanelEffect::ShowBlock,
            PanelEffect::SetHeight(PanelHeight::Px(0.0)),
            PanelEffect::SetOpacity(0.0),
            PanelEffect::SetOpen(true),
            PanelEffect::RequestFrame { generation },
        ]
    }

    fn start_closing(&mut self, content_height: f64) -> Vec<PanelEffect> {
        self.phase = PanelPhase::Closing;
        let generation = self.next_generation();
        vec![
            PanelEffect::SetHeight(PanelHeight::Px(content_height)),
            PanelEffect::SetOpacity(1.0),
            PanelEffect::RequestFrame { generation },
        ]
    }

    fn on_frame(&mut self, generation: u64, content_height: f64) -> Vec<PanelEffect> {
        if generation != self.generation {
            log::debug!("panel: dropping stale frame {generation} (current {})", self.generation);
            return Vec::new();
        }
        let (height, opacity) = match self.phase {
            PanelPhase::Opening => (content_height, 1.0),
            PanelPhase::Closing => (0.0, 0.0),
            PanelPhase::Open | PanelPhase::Closed => return Vec::new(),
        };
        self.awaiting_end = true;
        vec![
            PanelEffect::SetTransition(self.transition.clone()),
            PanelEffect::SetHeight(PanelHeight::Px(height)),
            PanelEffect::SetOpacity(opacity),
        ]
    }

    fn on_transition_end(&mut self, property: &str) -> Vec<PanelEffect> {
        if property != "height" || !self.awaiting_end {
            return Vec::new();
        }
        match self.phase {
            PanelPhase::Opening => {
                self.phase = PanelPhase::Open;
                self.awaiting_end = false;
                vec![PanelEffect::SetHeight(PanelHeight::Auto)]
            }
            PanelPhase::Closing => {
                self.phase = PanelPhase::Closed;
                self.awaiting_end = false;
                vec![
                    PanelEffect::SetOpen(false),
                    PanelEffect::ClearDisplay,
                    PanelEffect::SetHeight(PanelHeight::Cleared),
                ]
            }
            PanelPhase::Open | PanelPhase::Closed => Vec::new(),
        }
    }
}
