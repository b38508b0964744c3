//! ComboItem trait for items that can be displayed in a combobox.

use std::fmt::Debug;

/// Trait for items that can be displayed in a combobox dropdown.
///
/// The label is what gets shown and matched against typed text, the value
/// is what gets committed to the widget's owner.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Debug)]
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// impl ComboItem for Country {
///     type Value = String;
///
///     fn combo_label(&self) -> &str {
///         &self.name
///     }
///
///     fn combo_value(&self) -> String {
///         self.code.clone()
///     }
/// }
/// ```
pub trait ComboItem: Clone + Debug + Send + Sync + 'static {
    /// Identity committed when the item is selected.
    type Value: Clone + PartialEq + Debug + Send + Sync + 'static;

    /// Display text, also used for filtering and exact-match lookups.
    fn combo_label(&self) -> &str;

    /// The value committed when this item is selected.
    fn combo_value(&self) -> Self::Value;
}

/// A static option: a label and the value it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboOption<V> {
    /// Display text.
    pub label: String,
    /// Identity of the option.
    pub value: V,
}

impl<V> ComboOption<V> {
    /// Create an option.
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Build options from `(value, label)` pairs.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (V, S)>) -> Vec<Self> {
        pairs
            .into_iter()
            .map(|(value, label)| Self::new(value, label))
            .collect()
    }
}

impl<V, S: Into<String>> From<(V, S)> for ComboOption<V> {
    fn from((value, label): (V, S)) -> Self {
        Self::new(value, label)
    }
}

impl<V> ComboItem for ComboOption<V>
where
    V: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    type Value = V;

    fn combo_label(&self) -> &str {
        &self.label
    }

    fn combo_value(&self) -> V {
        self.value.clone()
    }
}
