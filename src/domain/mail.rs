use std::fmt;

use super::{BufferId, ConfigBuffers};

/// Local mail transport presets offered to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MailPreset {
    Mailpit,
    Mailtrap,
    Helo,
    Herd,
    Log,
}

impl MailPreset {
    /// Presets in the order they are offered.
    pub const ALL: [MailPreset; 5] = [
        MailPreset::Mailpit,
        MailPreset::Mailtrap,
        MailPreset::Helo,
        MailPreset::Herd,
        MailPreset::Log,
    ];

    pub const DEFAULT: MailPreset = MailPreset::Mailpit;

    /// Stable key used in answers files.
    pub fn key(&self) -> &'static str {
        match self {
            MailPreset::Mailpit => "mailpit",
            MailPreset::Mailtrap => "mailtrap",
            MailPreset::Helo => "helo",
            MailPreset::Herd => "herd",
            MailPreset::Log => "log",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MailPreset::Mailpit => "Mailpit",
            MailPreset::Mailtrap => "Mailtrap",
            MailPreset::Helo => "Helo",
            MailPreset::Herd => "Herd Pro",
            MailPreset::Log => "Log only",
        }
    }

    pub fn from_key(key: &str) -> Option<MailPreset> {
        MailPreset::ALL.into_iter().find(|preset| preset.key() == key)
    }

    /// Literal env swaps this preset requires. Mailpit and Mailtrap match the
    /// template as shipped.
    pub fn env_swaps(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            MailPreset::Helo | MailPreset::Herd => &[
                ("MAIL_HOST=localhost", "MAIL_HOST=127.0.0.1"),
                ("MAIL_PORT=1025", "MAIL_PORT=2525"),
                ("MAIL_USERNAME=null", r#"MAIL_USERNAME="${APP_NAME}""#),
            ],
            MailPreset::Log => &[("MAIL_MAILER=smtp", "MAIL_MAILER=log")],
            MailPreset::Mailpit | MailPreset::Mailtrap => &[],
        }
    }
}

impl fmt::Display for MailPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub fn set_mailer(buffers: ConfigBuffers, preset: MailPreset) -> ConfigBuffers {
    preset.env_swaps().iter().fold(buffers, |buffers, (search, replacement)| {
        buffers.replace(BufferId::Env, search, replacement)
    })
}
