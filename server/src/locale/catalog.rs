//! Static language catalog.
//!
//! Reference data only, never mutated at runtime. The server is the
//! authority on catalog membership; client dropdowns are rendered from this
//! table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
	pub code: &'static str,
	pub name: &'static str,
	pub native: &'static str,
	pub flag: &'static str,
}

pub const CATALOG: &[LanguageEntry] = &[
	LanguageEntry { code: "en", name: "English", native: "English", flag: "🇬🇧" },
	LanguageEntry { code: "es", name: "Spanish", native: "Español", flag: "🇪🇸" },
	LanguageEntry { code: "fr", name: "French", native: "Français", flag: "🇫🇷" },
	LanguageEntry { code: "de", name: "German", native: "Deutsch", flag: "🇩🇪" },
	LanguageEntry { code: "ar", name: "Arabic", native: "العربية", flag: "🇸🇦" },
	LanguageEntry { code: "hi", name: "Hindi", native: "हिन्दी", flag: "🇮🇳" },
	LanguageEntry { code: "zh", name: "Chinese", native: "中文", flag: "🇨🇳" },
];

/// Look up a catalog entry by language code
pub fn find(code: &str) -> Option<&'static LanguageEntry> {
	CATALOG.iter().find(|entry| entry.code == code)
}


// vim: ts=4
