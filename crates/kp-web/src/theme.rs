//! Presentation tokens
//!
//! Every view reads its classes from the active [`Theme`], so the two
//! visual variants share one component tree.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub brand: &'static str,
    pub page_bg: &'static str,
    pub header_bg: &'static str,
    pub brand_text: &'static str,
    pub heading: &'static str,
    pub primary_button: &'static str,
    pub secondary_button: &'static str,
    pub card: &'static str,
    pub icon_bg: &'static str,
    pub drop_zone_idle: &'static str,
    pub drop_zone_active: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::secure_verify(), Theme::karam_proof()];

    /// Blue/teal variant
    pub const fn secure_verify() -> Self {
        Self {
            name: "secure-verify",
            brand: "SecureVerify",
            page_bg: "min-h-screen bg-gradient-to-br from-slate-50 to-blue-50",
            header_bg: "bg-white/80 backdrop-blur-md border-b border-gray-200 sticky top-0 z-50",
            brand_text: "text-xl font-bold text-gray-900",
            heading: "text-3xl font-bold text-gray-900",
            primary_button: "bg-gradient-to-r from-blue-600 to-teal-600 hover:from-blue-700 hover:to-teal-700 text-white font-semibold rounded-xl shadow-lg transition",
            secondary_button: "bg-blue-100 text-blue-700 hover:bg-blue-200 font-medium rounded-lg transition",
            card: "bg-white rounded-2xl border border-gray-100 shadow-sm",
            icon_bg: "bg-gradient-to-r from-blue-600 to-teal-600",
            drop_zone_idle: "border-gray-300 hover:border-blue-400 bg-white",
            drop_zone_active: "border-blue-500 bg-blue-50",
        }
    }

    /// Purple/pink variant
    pub const fn karam_proof() -> Self {
        Self {
            name: "karam-proof",
            brand: "karamProof",
            page_bg: "min-h-screen bg-gradient-to-br from-pink-50 via-purple-50 to-blue-50",
            header_bg: "bg-white/80 backdrop-blur-lg border-b border-purple-100 sticky top-0 z-50",
            brand_text: "text-xl font-bold bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent",
            heading: "text-3xl font-bold bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent",
            primary_button: "bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 text-white font-medium rounded-xl shadow-lg transition",
            secondary_button: "bg-gradient-to-r from-purple-100 to-pink-100 hover:from-purple-200 hover:to-pink-200 text-purple-700 font-medium rounded-lg transition",
            card: "bg-white/70 backdrop-blur-lg rounded-2xl border border-purple-100 shadow-xl",
            icon_bg: "bg-gradient-to-r from-purple-100 to-pink-100",
            drop_zone_idle: "border-purple-200 hover:border-purple-300 bg-white/60",
            drop_zone_active: "border-purple-400 bg-purple-50",
        }
    }

    /// The theme after this one in [`Theme::ALL`], wrapping around
    pub fn next(&self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|theme| theme.name == self.name)
            .unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::secure_verify()
    }
}

/// Active theme, provided by the app root
pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        assert_ne!(Theme::ALL[0].name, Theme::ALL[1].name);
        assert_eq!(Theme::default().brand, "SecureVerify");
    }

    #[test]
    fn test_next_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.next(), Theme::karam_proof());
        assert_eq!(theme.next().next(), theme);
    }
}
