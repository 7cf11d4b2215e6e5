/**
 * Authentication Module
 *
 * Form state for the login and signup pages, and the password strength
 * meter shown while signing up.
 */

use eframe::egui::Color32;

/// Authentication form state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub name_input: String,
    pub email_input: String,
    pub password_input: String,
    /// Render the password field in plain text
    pub show_password: bool,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Forget everything typed so far
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Signup password strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Self::VeryWeak => Color32::from_rgb(0xE7, 0x4C, 0x3C),
            Self::Weak => Color32::from_rgb(0xE6, 0x7E, 0x22),
            Self::Medium => Color32::from_rgb(0xF1, 0xC4, 0x0F),
            Self::Strong => Color32::from_rgb(0x2E, 0xCC, 0x71),
            Self::VeryStrong => Color32::from_rgb(0x27, 0xAE, 0x60),
        }
    }

    /// Filled fraction of the meter bar
    pub fn fraction(self) -> f32 {
        (self as u8 + 1) as f32 / 5.0
    }
}

/// Score a password: one point each for length of 8 or more, an uppercase
/// letter, a digit, and a character that is neither letter nor digit
pub fn password_strength(password: &str) -> PasswordStrength {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_alphanumeric()),
    ];
    match checks.iter().filter(|passed| **passed).count() {
        0 => PasswordStrength::VeryWeak,
        1 => PasswordStrength::Weak,
        2 => PasswordStrength::Medium,
        3 => PasswordStrength::Strong,
        _ => PasswordStrength::VeryStrong,
    }
}
