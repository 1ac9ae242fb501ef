//! Class-name combinator.
//!
//! [`combine`] (and the variadic [`cn!`](crate::cn) macro) accepts strings,
//! optional strings, `(class, condition)` pairs and nested lists, flattens
//! them, drops empty and falsy entries, and resolves Tailwind utility
//! conflicts so the last class in a conflict group wins.
//!
//! ```
//! use mailblocks_engine::cn;
//!
//! let class = cn!("a", None::<&str>, "b", [("c", true), ("d", false)]);
//! assert_eq!(class, "a b c");
//!
//! assert_eq!(cn!("p-2 text-sm", "p-4"), "text-sm p-4");
//! ```

mod merge;

pub use merge::merge_classes;

/// Anything that can contribute class names
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClassValue {
    #[default]
    Empty,
    /// One or more whitespace-separated classes
    Str(String),
    /// Classes included only when the condition holds
    Cond(String, bool),
    List(Vec<ClassValue>),
}

impl ClassValue {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassValue::Empty => {}
            ClassValue::Str(classes) => out.extend(classes.split_whitespace()),
            ClassValue::Cond(classes, true) => out.extend(classes.split_whitespace()),
            ClassValue::Cond(_, false) => {}
            ClassValue::List(values) => {
                for value in values {
                    value.collect_into(out);
                }
            }
        }
    }
}

impl From<&str> for ClassValue {
    fn from(classes: &str) -> Self {
        ClassValue::Str(classes.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(classes: String) -> Self {
        ClassValue::Str(classes)
    }
}

impl From<&String> for ClassValue {
    fn from(classes: &String) -> Self {
        ClassValue::Str(classes.clone())
    }
}

impl From<(&str, bool)> for ClassValue {
    fn from((classes, enabled): (&str, bool)) -> Self {
        ClassValue::Cond(classes.to_string(), enabled)
    }
}

impl From<(String, bool)> for ClassValue {
    fn from((classes, enabled): (String, bool)) -> Self {
        ClassValue::Cond(classes, enabled)
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(values: [T; N]) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Flatten class values into one merged, de-duplicated class string
pub fn combine<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let values: Vec<ClassValue> = values.into_iter().map(Into::into).collect();
    let mut classes = Vec::new();
    for value in &values {
        value.collect_into(&mut classes);
    }
    merge_classes(&classes).join(" ")
}

/// Variadic form of [`combine`]: `cn!("base", ("active", is_active), extra)`
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::style::combine([$($crate::style::ClassValue::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mixed_values_drop_falsy_entries() {
        let class = crate::cn!("a", None::<&str>, "b", [("c", true), ("d", false)]);
        assert_eq!(class, "a b c");
    }

    #[test]
    fn test_nested_lists_and_whitespace() {
        let class = combine([
            ClassValue::from("  one   two "),
            ClassValue::from(vec![
                ClassValue::from(Some("three")),
                ClassValue::from(vec![("four", true)]),
            ]),
            ClassValue::Empty,
        ]);
        assert_eq!(class, "one two three four");
    }

    #[test]
    fn test_duplicates_keep_last_occurrence() {
        assert_eq!(crate::cn!("a b", "a"), "b a");
        assert_eq!(crate::cn!("a", "a", "a"), "a");
    }

    #[test]
    fn test_conditional_string_value() {
        let selected = true;
        let class = crate::cn!("block", ("ring-2".to_string(), selected), Some(String::new()));
        assert_eq!(class, "block ring-2");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(crate::cn!(), "");
        assert_eq!(crate::cn!("", None::<String>, ("x", false)), "");
        assert_eq!(combine(Vec::<ClassValue>::new()), "");
    }
}
