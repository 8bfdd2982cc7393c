//! Lightweight i18n translation registry.
//!
//! Provides a centralized, static translation map keyed by `(locale, message_key)`.
//! Supported locales: `zh-CN`, `en`. No external i18n framework dependency.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Default locale when none is configured.
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// Supported locales.
pub const SUPPORTED_LOCALES: &[&str] = &["zh-CN", "en"];

/// Central translation registry.
pub struct Translations {
    map: HashMap<(&'static str, &'static str), &'static str>,
}

impl Translations {
    /// Get a translated string for the given locale and key.
    /// Falls back to `en` if the locale is not found, then to the provided default.
    pub fn get<'a>(&self, locale: &str, key: &str, default: &'a str) -> &'a str {
        // Dereference to extract &'static str (which outlives any 'a)
        // from the &&'static str returned by HashMap::get
        if let Some(&val) = self.map.get(&(locale, key)) {
            return val;
        }
        if locale != "en" {
            if let Some(&val) = self.map.get(&("en", key)) {
                return val;
            }
        }
        default
    }
}

/// Global translation singleton.
pub static TRANSLATIONS: LazyLock<Translations> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Helper macro to reduce boilerplate
    macro_rules! t {
        ($locale:expr, $key:expr, $val:expr) => {
            map.insert(($locale, $key), $val);
        };
    }

    // ---- Console notifications ----

    t!("en", "console.create.success", "Created");
    t!("zh-CN", "console.create.success", "添加成功");

    t!("en", "console.update.success", "Saved");
    t!("zh-CN", "console.update.success", "编辑成功");

    t!("en", "console.delete.success", "Deleted");
    t!("zh-CN", "console.delete.success", "删除成功");

    t!("en", "console.delete.cancelled", "Operation cancelled");
    t!("zh-CN", "console.delete.cancelled", "取消操作");

    t!("en", "console.status.success", "Status changed");
    t!("zh-CN", "console.status.success", "更改状态成功");

    t!("en", "console.request.failed", "Request failed");
    t!("zh-CN", "console.request.failed", "请求失败");

    // ---- Delete confirmation gate ----

    t!("en", "console.delete.confirm.title", "Delete this record?");
    t!("zh-CN", "console.delete.confirm.title", "请确认是否删除该数据?");

    t!("en", "console.delete.confirm.content", "This operation cannot be undone");
    t!("zh-CN", "console.delete.confirm.content", "此操作不可逆");

    Translations { map }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_translation_for_known_locale() {
        let msg = TRANSLATIONS.get("zh-CN", "console.delete.success", "?");
        assert_eq!(msg, "删除成功");
        let msg = TRANSLATIONS.get("en", "console.delete.success", "?");
        assert_eq!(msg, "Deleted");
    }

    #[test]
    fn falls_back_to_english_then_default() {
        let msg = TRANSLATIONS.get("fr", "console.create.success", "?");
        assert_eq!(msg, "Created");
        let msg = TRANSLATIONS.get("zh-CN", "console.no.such.key", "fallback");
        assert_eq!(msg, "fallback");
    }
}
