//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how an element type expression becomes the stem of generated
/// symbols, and how that stem becomes the constructor and wrapper names.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a type name into a symbol fragment (e.g., "customType" -> "CustomType")
    pub type_to_symbol: fn(&str) -> String,
    /// Transform one segment of a compound type into a symbol fragment (e.g., "map" -> "Map")
    pub segment_to_symbol: fn(&str) -> String,
    /// Transform a symbol stem into the constructor name (e.g., "String" -> "NewStringSlice")
    pub stem_to_constructor: fn(&str) -> String,
    /// Transform a symbol stem into the wrapper type name (e.g., "String" -> "chainString")
    pub stem_to_wrapper: fn(&str) -> String,
    /// Whether a string can be used verbatim as an identifier
    pub is_identifier: fn(&str) -> bool,
}

impl NamingConvention {
    /// Transform a type name into a symbol fragment.
    pub fn symbol_name(&self, name: &str) -> String {
        (self.type_to_symbol)(name)
    }

    /// Transform a compound type segment into a symbol fragment.
    pub fn segment_name(&self, segment: &str) -> String {
        (self.segment_to_symbol)(segment)
    }

    pub fn constructor_name(&self, stem: &str) -> String {
        (self.stem_to_constructor)(stem)
    }

    pub fn wrapper_name(&self, stem: &str) -> String {
        (self.stem_to_wrapper)(stem)
    }

    /// Check if a name can be used verbatim as an identifier.
    pub fn is_valid(&self, name: &str) -> bool {
        (self.is_identifier)(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(s: &str) -> String {
        s.to_uppercase()
    }

    fn lower(s: &str) -> String {
        s.to_lowercase()
    }

    fn make(s: &str) -> String {
        format!("make_{}", s)
    }

    fn boxed(s: &str) -> String {
        format!("Box{}", s)
    }

    fn ascii(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        type_to_symbol: upper,
        segment_to_symbol: lower,
        stem_to_constructor: make,
        stem_to_wrapper: boxed,
        is_identifier: ascii,
    };

    #[test]
    fn test_transforms() {
        assert_eq!(TEST_NAMING.symbol_name("abc"), "ABC");
        assert_eq!(TEST_NAMING.segment_name("ABC"), "abc");
        assert_eq!(TEST_NAMING.constructor_name("abc"), "make_abc");
        assert_eq!(TEST_NAMING.wrapper_name("abc"), "Boxabc");
    }

    #[test]
    fn test_is_valid() {
        assert!(TEST_NAMING.is_valid("abc"));
        assert!(!TEST_NAMING.is_valid("a_c"));
        assert!(!TEST_NAMING.is_valid(""));
    }
}
