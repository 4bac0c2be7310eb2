use super::prompt::{SelectOption, SelectPrompt};

/// Select key meaning "install nothing for this slot".
pub const NONE: &str = "none";

pub const AARDVARK_SEO: &str = "withcandour/aardvark-seo";

/// Vendored SEO layout partials shipped with the starter kit, relative to the
/// project root.
pub const AARDVARK_TEMPLATES_SOURCE: &str =
    "vendor/justbetter/statamic-starter-kit/export/resources/views/layouts/seo";
pub const AARDVARK_TEMPLATES_TARGET: &str = "resources/views/layouts/seo";

/// One optional addon category the operator picks a package for.
#[derive(Debug, Clone, Copy)]
pub struct AddonSlot {
    pub key: &'static str,
    pub question: &'static str,
    /// `(package, label)` pairs; the first is the default.
    pub packages: &'static [(&'static str, &'static str)],
}

impl AddonSlot {
    pub fn prompt(&self) -> SelectPrompt {
        let mut options: Vec<SelectOption> = self
            .packages
            .iter()
            .map(|(package, label)| SelectOption::new(*package, *label))
            .collect();
        options.push(SelectOption::new(NONE, "None"));
        SelectPrompt::new(self.key, self.question, options)
    }
}

pub const ADDON_SLOTS: [AddonSlot; 3] = [
    AddonSlot {
        key: "seo_addon",
        question: "Which SEO addon do you want to use?",
        packages: &[(AARDVARK_SEO, "Aardvark SEO"), ("statamic/seo-pro", "Statamic SEO Pro")],
    },
    AddonSlot {
        key: "cache_addon",
        question: "Which cache addon do you want to use?",
        packages: &[("justbetter/statamic-cloudflare-purge", "Cloudflare Purge")],
    },
    AddonSlot {
        key: "structured_data_addon",
        question: "Which structured data addon do you want to use?",
        packages: &[("justbetter/statamic-structured-data", "Structured Data")],
    },
];

/// Packages chosen across all slots, in slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddonSelection {
    packages: Vec<String>,
}

impl AddonSelection {
    /// Record the answer for one slot; `none` is ignored.
    pub fn push(&mut self, package: &str) {
        if package != NONE {
            self.packages.push(package.to_string());
        }
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn includes_aardvark(&self) -> bool {
        self.packages.iter().any(|package| package == AARDVARK_SEO)
    }
}
