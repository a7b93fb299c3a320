//! Level catalog.
//!
//! Each of the four levels carries its label, title, description and the
//! set of objects placed in the scene while it is active.

/// Alert shown when a level number outside the catalog is selected.
pub const INVALID_LEVEL_ALERT: &str = "Μη έγκυρο επίπεδο επιλέχθηκε";

/// Texture of the player avatar.
pub const AVATAR_TEXTURE: &str = "explorer.jpg";

/// Errors produced when resolving a level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("invalid level selected: {0}")]
    InvalidLevel(i64),
}

/// One of the four content states of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    One,
    Two,
    Three,
    Four,
}

impl Level {
    /// All levels in sidebar order.
    pub const ALL: [Level; 4] = [Level::One, Level::Two, Level::Three, Level::Four];

    /// Resolves a 1-based level number.
    pub fn from_number(number: i64) -> Result<Self, LevelError> {
        match number {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(LevelError::InvalidLevel(other)),
        }
    }

    /// Converts a level number received as a JavaScript number.
    ///
    /// Returns `None` for fractions, NaN and infinities so they can raise the
    /// invalid-level alert instead of being truncated to a valid level.
    #[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
    pub fn whole_number(value: f64) -> Option<i64> {
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        (value.is_finite() && value.trunc() == value && value.abs() <= MAX_EXACT)
            .then_some(value as i64)
    }

    /// 1-based level number.
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Short label shown in the current-level badge.
    pub fn label(self) -> String {
        format!("Επίπεδο {}", self.number())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::One => "Επίπεδο 1 - Εξερεύνηση του Διαδικτύου",
            Self::Two => "Επίπεδο 2 - Ασφαλείς Ιστοσελίδες",
            Self::Three => "Επίπεδο 3 - Αναγνώριση και Αποφυγή του διαδικτυακού εκφοβιστή",
            Self::Four => "Επίπεδο 4 - Ταίριασμα Ασφαλών Κωδικών Πρόσβασης",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::One => {
                "Ασφαλείς τρόποι εξερεύνησης του Διαδικτύου, αναγνώριση ασφαλών ιστοσελίδων."
            }
            Self::Two => "Αναγνώριση ασφαλών ιστοσελίδων, πρακτικές ασφαλούς πλοήγησης.",
            Self::Three => {
                "Αναγνώριση του διαδικτυακού εκφοβιστή, πρακτικές φιλικής συμπεριφοράς στο Διαδίκτυο."
            }
            Self::Four => {
                "Ασφαλείς κωδικοί πρόσβασης, πρακτικές προστασίας των προσωπικών πληροφοριών."
            }
        }
    }

    /// Alert shown after the level has been selected from the sidebar.
    pub fn selected_alert(self) -> String {
        format!("Επιλέξατε το Επίπεδο {}", self.number())
    }

    /// Objects placed in the scene while this level is active.
    ///
    /// The avatar is not part of the list; it persists across levels.
    #[allow(clippy::cast_precision_loss)]
    pub fn objects(self) -> Vec<LevelObjectSpec> {
        match self {
            Self::One => vec![
                LevelObjectSpec::Clickable {
                    texture: "youtube_logo.png".to_string(),
                    position: [-5.0, 1.0, -10.0],
                    domain: "https://www.youtube.com/".to_string(),
                    action: ClickAction::OpenUrl("https://www.youtube.com/".to_string()),
                },
                LevelObjectSpec::Clickable {
                    texture: "google_logo.jpg".to_string(),
                    position: [5.0, 1.0, -15.0],
                    domain: "https://www.google.com/".to_string(),
                    action: ClickAction::OpenUrl("https://www.google.com/".to_string()),
                },
            ],
            Self::Two => vec![
                LevelObjectSpec::Sign {
                    text: "google.com".to_string(),
                    size: 2.0,
                    color: [0x00, 0x00, 0xff],
                    position: [0.0, 1.0, -5.0],
                },
                LevelObjectSpec::Sign {
                    text: "https".to_string(),
                    size: 1.0,
                    color: [0x00, 0xff, 0x00],
                    position: [0.0, 0.5, -5.0],
                },
                LevelObjectSpec::Sign {
                    text: "Αυτή είναι μια ασφαλής ιστοσελίδα.".to_string(),
                    size: 0.5,
                    color: [0xff, 0xff, 0xff],
                    position: [0.0, 0.0, -5.0],
                },
            ],
            Self::Three => vec![LevelObjectSpec::Clickable {
                texture: "cyber_bully.jpg".to_string(),
                position: [1.0, 1.0, -5.0],
                domain: "Κακές Λέξεις, Προσβλητικά Σχόλια".to_string(),
                action: ClickAction::Vanish,
            }],
            Self::Four => {
                let safe = ["f_sdqRT34#$5O93Jlf", "gR78dR@#$sdff34"];
                let unsafe_ = ["password123", "123456"];

                let column = |texts: [&'static str; 2], x: f32, is_safe: bool| {
                    texts
                        .into_iter()
                        .enumerate()
                        .map(move |(index, text)| LevelObjectSpec::PasswordBlock {
                            text: text.to_string(),
                            is_safe,
                            position: [x, 1.0, index as f32 * 2.0],
                        })
                };

                column(safe, -3.0, true)
                    .chain(column(unsafe_, 3.0, false))
                    .collect()
            }
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// What happens when a clickable object is hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Open the URL in a new browser tab.
    OpenUrl(String),
    /// Log the object's domain and remove it from the scene.
    Vanish,
}

/// Blueprint for one object of a level.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelObjectSpec {
    /// Textured 1x1 quad facing the camera.
    Clickable {
        texture: String,
        position: [f32; 3],
        domain: String,
        action: ClickAction,
    },
    /// World-anchored text.
    Sign {
        text: String,
        /// Glyph height in world units.
        size: f32,
        color: [u8; 3],
        position: [f32; 3],
    },
    /// Draggable 1 x 0.2 x 0.5 box holding a password.
    PasswordBlock {
        text: String,
        is_safe: bool,
        position: [f32; 3],
    },
}

impl LevelObjectSpec {
    pub fn position(&self) -> [f32; 3] {
        match self {
            Self::Clickable { position, .. }
            | Self::Sign { position, .. }
            | Self::PasswordBlock { position, .. } => *position,
        }
    }
}
