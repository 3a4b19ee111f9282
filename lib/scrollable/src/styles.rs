use std::borrow::Cow;

pub const DEFAULT_CONTAINER_STYLES: [(&str, &str); 4] = [
    ("overflow-y", "auto"),
    ("height", "100vh"),
    ("width", "100%"),
    ("position", "relative"),
];

/// Ordered inline-style mapping rendered into a `style` attribute.
///
/// Later inserts of an existing property replace its value in place, so a
/// merged map keeps the property order of its base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default viewport styles of the scrollable container.
    pub fn container_defaults() -> Self {
        DEFAULT_CONTAINER_STYLES.into()
    }

    pub fn insert(
        &mut self,
        property: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|entry| entry.0 == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.0.as_ref() == property)
            .map(|entry| entry.1.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies `overrides` on top of `self` property by property; properties
    /// absent from `overrides` keep their current value. Values are plain
    /// strings, nothing is merged recursively.
    pub fn shallow_merge(mut self, overrides: StyleMap) -> Self {
        for (property, value) in overrides.entries {
            self.insert(property, value);
        }
        self
    }

    /// Renders the map as a `style` attribute value.
    pub fn to_attribute(&self) -> String {
        self.entries
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<P, V> FromIterator<(P, V)> for StyleMap
where
    P: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut styles = StyleMap::new();
        for (property, value) in iter {
            styles.insert(property, value);
        }
        styles
    }
}

impl<P, V, const N: usize> From<[(P, V); N]> for StyleMap
where
    P: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    fn from(entries: [(P, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::styles::StyleMap;

    #[test]
    fn test_container_defaults_attribute() {
        assert_eq!(
            StyleMap::container_defaults().to_attribute(),
            "overflow-y: auto; height: 100vh; width: 100%; position: relative"
        );
    }

    #[test]
    fn test_shallow_merge_overrides_property_in_place() {
        let merged = StyleMap::container_defaults().shallow_merge([("width", "50%")].into());
        assert_eq!(
            merged.to_attribute(),
            "overflow-y: auto; height: 100vh; width: 50%; position: relative"
        );
        assert_eq!(merged.get("width"), Some("50%"));
        assert_eq!(merged.get("height"), Some("100vh"));
    }

    #[test]
    fn test_shallow_merge_appends_unknown_properties() {
        let merged =
            StyleMap::container_defaults().shallow_merge([("scroll-behavior", "smooth")].into());
        assert_eq!(
            merged.to_attribute(),
            "overflow-y: auto; height: 100vh; width: 100%; position: relative; scroll-behavior: smooth"
        );
    }

    #[test]
    fn test_shallow_merge_with_empty_overrides_keeps_defaults() {
        let merged = StyleMap::container_defaults().shallow_merge(StyleMap::new());
        assert_eq!(merged, StyleMap::container_defaults());
    }

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut styles = StyleMap::new();
        styles.insert("height", "100vh");
        styles.insert("height", "50vh");
        assert_eq!(styles.get("height"), Some("50vh"));
        assert_eq!(styles.to_attribute(), "height: 50vh");
    }

    #[test]
    fn test_empty_map_renders_empty_attribute() {
        assert!(StyleMap::new().is_empty());
        assert_eq!(StyleMap::new().to_attribute(), "");
    }
}
