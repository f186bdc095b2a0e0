//! `MetadataDict` — the Standard Parser's metadata output (§3, §4.3).

/// A single variable record from a template's `Variables` section:
/// `name\tlong_name\twhat\tmaterial\terror\tunits\tseasonality\tarchive\tdetail\tmethod\tdata_type`,
/// split on tab. Preserved in file order; fields beyond `name` are kept as
/// a flat list since not every template populates all eleven columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRecord {
    pub fields: Vec<String>,
}

impl VariableRecord {
    pub fn from_tab_line(line: &str) -> Self {
        Self {
            fields: line.split('\t').map(|s| s.to_string()).collect(),
        }
    }

    /// The variable name — the first tab-separated field.
    pub fn name(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }
}

/// Mapping from section name to an ordered list of key/value pairs, plus
/// the (separately tracked) `Variables` section's variable records.
///
/// Kept as ordered `Vec`s rather than a `HashMap` because §3 calls for
/// preserving the order variables and sections appeared in the file, and
/// because metadata dicts here are small (dozens of entries, not
/// millions) so linear lookup is not a performance concern.
#[derive(Debug, Clone, Default)]
pub struct MetadataDict {
    sections: Vec<(String, Vec<(String, String)>)>,
    pub variables: Vec<VariableRecord>,
}

impl MetadataDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key: value` under `section`, creating the section if it
    /// doesn't exist yet.
    pub fn insert(&mut self, section: &str, key: String, value: String) {
        if let Some((_, entries)) = self.sections.iter_mut().find(|(s, _)| s == section) {
            entries.push((key, value));
        } else {
            self.sections.push((section.to_string(), vec![(key, value)]));
        }
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(s, _)| s == section)
            .and_then(|(_, entries)| entries.iter().find(|(k, _)| k == key))
            .map(|(_, v)| v.as_str())
    }

    /// Every `section.key = value` pair, in file order — what the Standard
    /// Parser attaches to `Table.attrs` (§4.3 point 5).
    pub fn flatten(&self) -> Vec<(String, String)> {
        self.sections
            .iter()
            .flat_map(|(section, entries)| {
                entries
                    .iter()
                    .map(move |(k, v)| (format!("{section}.{k}"), v.clone()))
            })
            .collect()
    }

    /// The `title` key from any section, matched case-insensitively since
    /// §4.3 templates spell it `Title` in the `# Title: ...` line while
    /// stored keys keep their original case.
    pub fn title(&self) -> Option<&str> {
        self.sections.iter().find_map(|(_, entries)| {
            entries
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("title"))
                .map(|(_, v)| v.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_record_name() {
        let v = VariableRecord::from_tab_line("age\tage\tC\t,\tyears BP");
        assert_eq!(v.name(), "age");
        assert_eq!(v.fields.len(), 5);
    }

    #[test]
    fn test_insert_and_flatten_preserves_order() {
        let mut m = MetadataDict::new();
        m.insert("Contribution_Date", "date".to_string(), "2015-01-01".to_string());
        m.insert("Site_Information", "name".to_string(), "Foo Lake".to_string());
        m.insert("Contribution_Date", "note".to_string(), "revised".to_string());

        let flat = m.flatten();
        assert_eq!(
            flat,
            vec![
                ("Contribution_Date.date".to_string(), "2015-01-01".to_string()),
                ("Contribution_Date.note".to_string(), "revised".to_string()),
                ("Site_Information.name".to_string(), "Foo Lake".to_string()),
            ]
        );
    }

    #[test]
    fn test_get() {
        let mut m = MetadataDict::new();
        m.insert("Contribution_Date", "date".to_string(), "2015-01-01".to_string());
        assert_eq!(m.get("Contribution_Date", "date"), Some("2015-01-01"));
        assert_eq!(m.get("Contribution_Date", "missing"), None);
    }
}
