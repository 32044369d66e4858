use serde::Serialize;

/// Persisted UI preferences shared by every running instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub(crate) struct UiPrefs {
    sidebar_collapsed: bool,
}

impl UiPrefs {
    /// Return whether the docked sidebar renders as the narrow rail.
    pub(crate) fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Update the docked sidebar width preference.
    pub(crate) fn set_sidebar_collapsed(&mut self, value: bool) {
        self.sidebar_collapsed = value;
    }

    /// Parse preferences from a JSON document, keeping defaults for
    /// missing or malformed fields.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut prefs = UiPrefs::default();

        if let Some(collapsed) = value
            .get("sidebar_collapsed")
            .and_then(serde_json::Value::as_bool)
        {
            prefs.sidebar_collapsed = collapsed;
        }

        prefs
    }
}

#[cfg(test)]
mod tests {
    use super::UiPrefs;

    #[test]
    fn given_document_with_flag_when_parsed_then_flag_is_read() {
        let value = serde_json::json!({ "sidebar_collapsed": true });

        assert!(UiPrefs::from_json(&value).sidebar_collapsed());
    }

    #[test]
    fn given_document_with_wrong_type_when_parsed_then_default_is_kept() {
        let value = serde_json::json!({ "sidebar_collapsed": "yes" });

        assert!(!UiPrefs::from_json(&value).sidebar_collapsed());
    }

    #[test]
    fn given_empty_document_when_parsed_then_default_is_kept() {
        let value = serde_json::json!({});

        assert!(!UiPrefs::from_json(&value).sidebar_collapsed());
    }
}
