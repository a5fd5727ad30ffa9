//! Class-name composition for conditional class fragments.

/// A value that can contribute zero or more class tokens to a composed class string.
pub trait ClassFragment {
    /// Appends this fragment's tokens to `out`.
    fn write_tokens(&self, out: &mut Vec<String>);
}

impl ClassFragment for str {
    fn write_tokens(&self, out: &mut Vec<String>) {
        for token in self.split_whitespace() {
            if !out.iter().any(|existing| existing == token) {
                out.push(token.to_string());
            }
        }
    }
}

impl ClassFragment for &str {
    fn write_tokens(&self, out: &mut Vec<String>) {
        (**self).write_tokens(out);
    }
}

impl ClassFragment for String {
    fn write_tokens(&self, out: &mut Vec<String>) {
        self.as_str().write_tokens(out);
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn write_tokens(&self, out: &mut Vec<String>) {
        if let Some(fragment) = self {
            fragment.write_tokens(out);
        }
    }
}

/// Merges class fragments into one space-separated string.
///
/// Empty and whitespace-only fragments are skipped and repeated tokens keep their first
/// position.
pub fn merge_classes(fragments: &[&dyn ClassFragment]) -> String {
    let mut tokens = Vec::new();
    for fragment in fragments {
        fragment.write_tokens(&mut tokens);
    }
    tokens.join(" ")
}

/// Composes conditional class fragments into one class string.
///
/// Accepts any mix of `&str`, `String`, and `Option<_>` of those:
///
/// ```
/// use system_ui::cn;
///
/// let open = true;
/// assert_eq!(cn!("flex-1", open.then_some("md:ml-64"), None::<&str>), "flex-1 md:ml-64");
/// ```
#[macro_export]
macro_rules! cn {
    ($($fragment:expr),* $(,)?) => {
        $crate::merge_classes(&[$(&$fragment as &dyn $crate::ClassFragment),*])
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn skips_empty_and_disabled_fragments() {
        let collapsed = false;
        assert_eq!(
            crate::cn!("ui-content", "", collapsed.then_some("shifted"), "  "),
            "ui-content"
        );
    }

    #[test]
    fn splits_and_dedupes_tokens_in_order() {
        let extra = String::from("b  c");
        assert_eq!(crate::cn!("a b", extra, Some("a d")), "a b c d");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(crate::cn!(), "");
    }
}
