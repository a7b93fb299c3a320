//! Exploration session state.
//!
//! Holds everything the page chrome shows around the 3D scene: the current
//! level, the sidebar selection, the score, the start button and the
//! introduction modal. Operations return the side effects the caller must
//! apply (alerts, scene swaps, score display updates).

use crate::level::{Level, LevelError};

/// Score awarded for every successful level selection.
pub const DEFAULT_SCORE_STEP: u32 = 10;

/// Background colour of the start button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartButtonColor {
    #[default]
    Idle,
    Exploring,
}

impl StartButtonColor {
    pub fn css(self) -> &'static str {
        match self {
            Self::Idle => "#4caf50",
            Self::Exploring => "#FF4500",
        }
    }
}

/// Side effect requested by a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Show a blocking alert with this message.
    Alert(String),
    /// Replace the scene objects with those of the level.
    LoadLevel(Level),
    /// The score changed to the given value.
    ScoreChanged(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub score: u32,
    pub score_step: u32,
    pub exploration_started: bool,
    pub modal_visible: bool,
    pub start_button_visible: bool,
    pub start_button_color: StartButtonColor,
    pub score_visible: bool,
    pub current_level: Option<Level>,
    pub active_link: Option<Level>,
}

impl Session {
    pub fn new(score_step: u32) -> Self {
        Self {
            score: 0,
            score_step,
            exploration_started: false,
            modal_visible: false,
            start_button_visible: true,
            start_button_color: StartButtonColor::Idle,
            score_visible: false,
            current_level: None,
            active_link: None,
        }
    }

    /// Enters level one and reveals the score.
    ///
    /// The introduction modal opens only when exploration is not already
    /// marked as started.
    pub fn start_exploration(&mut self) -> Vec<SessionEffect> {
        self.start_button_visible = false;
        self.current_level = Some(Level::One);
        self.score_visible = true;

        if !self.exploration_started {
            self.modal_visible = true;
            self.exploration_started = true;
            self.start_button_color = StartButtonColor::Exploring;
        }

        vec![SessionEffect::LoadLevel(Level::One)]
    }

    pub fn close_modal(&mut self) {
        self.modal_visible = false;
        self.exploration_started = false;
        self.start_button_color = StartButtonColor::Idle;
    }

    /// Switches to the given level number.
    ///
    /// On error the session is left unchanged.
    pub fn select_level(&mut self, number: i64) -> Result<Vec<SessionEffect>, LevelError> {
        let level = Level::from_number(number)?;

        self.current_level = Some(level);
        self.active_link = Some(level);
        self.score = self.score.saturating_add(self.score_step);

        Ok(vec![
            SessionEffect::Alert(level.selected_alert()),
            SessionEffect::ScoreChanged(self.score),
            SessionEffect::LoadLevel(level),
        ])
    }

    /// Text of the `.container h1` heading, if a level is shown.
    pub fn title(&self) -> Option<&'static str> {
        self.current_level.map(Level::title)
    }

    /// Text of the `.container p` paragraph, if a level is shown.
    pub fn description(&self) -> Option<&'static str> {
        self.current_level.map(Level::description)
    }

    /// Text of the `#current-level` badge, if a level is shown.
    pub fn level_label(&self) -> Option<String> {
        self.current_level.map(Level::label)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_STEP)
    }
}
