//! Unit tests for the argot-i18n crate.

mod template_tests {
    use rstest::rstest;

    use crate::template::render;
    use crate::{interpolate, interpolation_key};

    #[rstest]
    #[case(&["done"], "done")]
    #[case(&["Reading ", " files"], "Reading {0} files")]
    #[case(&["", " and ", ""], "{0} and {1}")]
    #[case(&["a ", " b ", " c ", " d"], "a {0} b {1} c {2} d")]
    fn key_joins_fragments_with_placeholders(#[case] fragments: &[&str], #[case] expected: &str) {
        assert_eq!(interpolation_key(fragments), expected);
    }

    #[test]
    fn key_depends_only_on_fragments() {
        let first = interpolation_key(&["Hello ", "!"]);
        let second = interpolation_key(&["Hello ", "!"]);
        assert_eq!(first, second);
    }

    #[test]
    fn interpolate_is_literal_concatenation() {
        let count = 3;
        let suffix = "rs";
        assert_eq!(
            interpolate(&["Reading ", " files ending in .", ""], &[&count, &suffix]),
            "Reading 3 files ending in .rs",
        );
    }

    #[test]
    fn interpolate_single_fragment_passes_through() {
        assert_eq!(interpolate(&["just text"], &[]), "just text");
    }

    #[test]
    fn interpolate_missing_argument_renders_undefined() {
        assert_eq!(interpolate(&["Hello ", "!"], &[]), "Hello undefined!");
    }

    #[test]
    fn interpolate_surplus_arguments_are_ignored() {
        let extra = "extra";
        assert_eq!(interpolate(&["just text"], &[&extra]), "just text");
    }

    #[test]
    fn render_substitutes_positional_placeholders() {
        let name = "Ada";
        assert_eq!(render("Welcome {0}", &[&name]), "Welcome Ada");
    }

    #[test]
    fn render_substitutes_repeated_placeholders() {
        let value = "x";
        assert_eq!(render("{0} and {0}", &[&value]), "x and x");
    }

    #[test]
    fn render_out_of_range_index_renders_undefined() {
        let only = "one";
        assert_eq!(render("{0} then {5}", &[&only]), "one then undefined");
    }

    #[test]
    fn render_overflowing_index_renders_undefined() {
        assert_eq!(
            render("{99999999999999999999999}", &[]),
            "undefined",
        );
    }

    #[rstest]
    #[case("no placeholders", "no placeholders")]
    #[case("{name} stays", "{name} stays")]
    #[case("empty {} stays", "empty {} stays")]
    #[case("unclosed {1", "unclosed {1")]
    #[case("{1x} stays", "{1x} stays")]
    fn render_leaves_non_positional_braces_verbatim(#[case] template: &str, #[case] expected: &str) {
        assert_eq!(render(template, &[]), expected);
    }

    #[test]
    fn render_handles_nested_braces_like_the_original_matcher() {
        // The outer brace is literal; the inner "{0}" is a real placeholder.
        let value = "v";
        assert_eq!(render("{{0}}", &[&value]), "{v}");
    }
}

mod list_style_tests {
    use std::str::FromStr;

    use rstest::rstest;

    use crate::ListStyle;

    #[rstest]
    #[case(ListStyle::Conjunction, "conjunction")]
    #[case(ListStyle::Disjunction, "disjunction")]
    #[case(ListStyle::Unit, "unit")]
    fn styles_round_trip_through_their_names(#[case] style: ListStyle, #[case] name: &str) {
        assert_eq!(style.to_string(), name);
        assert_eq!(ListStyle::from_str(name), Ok(style));
    }

    #[test]
    fn unknown_style_name_is_rejected() {
        assert!(ListStyle::from_str("oxford-comma").is_err());
    }

    #[test]
    fn default_style_is_conjunction() {
        assert_eq!(ListStyle::default(), ListStyle::Conjunction);
    }
}

mod macro_tests {
    use std::collections::HashMap;

    use crate::Translator;

    #[test]
    fn tr_with_no_arguments_returns_the_literal() {
        let translator = Translator::new();
        assert_eq!(tr!(translator => "plain text"), "plain text");
    }

    #[test]
    fn tr_interleaves_arguments_between_fragments() {
        let translator = Translator::new();
        let count = 2;
        let style = "narrow";
        assert_eq!(
            tr!(translator => "formatted " {count} " lists in " {style} " style"),
            "formatted 2 lists in narrow style",
        );
    }

    #[test]
    fn tr_goes_through_the_dictionary() {
        let mut translator = Translator::new();
        translator.update_strings(HashMap::from([(
            "Hello {0}!".to_owned(),
            "Bonjour {0} !".to_owned(),
        )]));
        let name = "Ada";
        assert_eq!(tr!(translator => "Hello " {name} "!"), "Bonjour Ada !");
    }
}
