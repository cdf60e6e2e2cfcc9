use lazy_static::lazy_static;
use regex::Regex;

use crate::types::FieldStyle;
use crate::utils::quote;

lazy_static! {
    static ref PACKAGE_HINT:  Regex = Regex::new(r"^\s*option\s+java_package\b").unwrap();
    static ref PACKAGE_VALUE: Regex = Regex::new(r#"^\s*option\s+java_package\s*=\s*"([^"]+)""#).unwrap();
    static ref OUTER_HINT:    Regex = Regex::new(r"^\s*option\s+java_outer_classname\b").unwrap();
    static ref OUTER_VALUE:   Regex = Regex::new(r#"^\s*option\s+java_outer_classname\s*=\s*"([^"]+)""#).unwrap();
    static ref ENUM_HINT:     Regex = Regex::new(r"^\s*enum\b").unwrap();
    static ref ENUM_OPEN:     Regex = Regex::new(r"^\s*enum\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{").unwrap();
    static ref MESSAGE_HINT:  Regex = Regex::new(r"^\s*message\b").unwrap();
    static ref MESSAGE_OPEN:  Regex = Regex::new(r"^\s*message\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{").unwrap();
    static ref FIELD_HINT:    Regex = Regex::new(r"^\s*(optional|required|repeated)\b").unwrap();
    static ref FIELD_DECL:    Regex = Regex::new(r"^\s*(optional|required|repeated)\s+([A-Za-z_][A-Za-z0-9_.]*)\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap();
    static ref BLOCK_CLOSE:   Regex = Regex::new(r"\}").unwrap();
}

/// One classified schema line. `Skip` is the silent tier for anything the
/// generator does not recognize; `Malformed` is a line whose keyword
/// matched but whose captures did not, which callers must treat as fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    Comment,
    PackageOption(String),
    OuterClassOption(String),
    EnumOpen(String),
    MessageOpen(String),
    FieldDecl {
        style:      FieldStyle,
        type_token: String,
        name:       String,
    },
    BlockClose,
    Skip,
    Malformed(String),
}

/// Classifies one line in isolation. Stateless: the effect of the
/// classification (and whether a `BlockClose` is forwarded or consumed) is
/// decided by the scanner.
pub fn classify(line: &str) -> LineClass {
    if line.starts_with("//") {
        return LineClass::Comment;
    }
    if PACKAGE_HINT.is_match(line) {
        return match PACKAGE_VALUE.captures(line) {
            Some(caps) => LineClass::PackageOption(caps[1].to_string()),
            None => LineClass::Malformed(format!("malformed java_package option {}", quote(line.trim()))),
        };
    }
    if OUTER_HINT.is_match(line) {
        return match OUTER_VALUE.captures(line) {
            Some(caps) => LineClass::OuterClassOption(caps[1].to_string()),
            None => LineClass::Malformed(format!(
                "malformed java_outer_classname option {}",
                quote(line.trim())
            )),
        };
    }
    if ENUM_HINT.is_match(line) {
        return match ENUM_OPEN.captures(line) {
            Some(caps) => LineClass::EnumOpen(caps[1].to_string()),
            None => LineClass::Malformed(format!("malformed enum declaration {}", quote(line.trim()))),
        };
    }
    if MESSAGE_HINT.is_match(line) {
        return match MESSAGE_OPEN.captures(line) {
            Some(caps) => LineClass::MessageOpen(caps[1].to_string()),
            None => LineClass::Malformed(format!("malformed message declaration {}", quote(line.trim()))),
        };
    }
    if FIELD_HINT.is_match(line) {
        return match FIELD_DECL.captures(line) {
            Some(caps) => LineClass::FieldDecl {
                style:      field_style(&caps[1]),
                type_token: caps[2].to_string(),
                name:       caps[3].to_string(),
            },
            None => LineClass::Malformed(format!("malformed field declaration {}", quote(line.trim()))),
        };
    }
    if BLOCK_CLOSE.is_match(line) {
        return LineClass::BlockClose;
    }
    LineClass::Skip
}

fn field_style(keyword: &str) -> FieldStyle {
    match keyword {
        "optional" => FieldStyle::Optional,
        "required" => FieldStyle::Required,
        _ => FieldStyle::Repeated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_comments_only_at_line_start() {
        assert_eq!(classify("// a comment"), LineClass::Comment);
        // An indented comment falls through and classifies by content.
        assert_eq!(classify("  // indented"), LineClass::Skip);
    }

    #[test]
    fn classifies_package_option() {
        assert_eq!(
            classify(r#"option java_package = "org.example.proto";"#),
            LineClass::PackageOption("org.example.proto".to_string())
        );
        assert_eq!(
            classify(r#"  option  java_package = "a.b";"#),
            LineClass::PackageOption("a.b".to_string())
        );
    }

    #[test]
    fn classifies_outer_classname_option() {
        assert_eq!(
            classify(r#"option java_outer_classname = "Demo";"#),
            LineClass::OuterClassOption("Demo".to_string())
        );
    }

    #[test]
    fn malformed_options_are_not_silently_skipped() {
        assert!(matches!(
            classify("option java_package = org.example;"),
            LineClass::Malformed(_)
        ));
        assert!(matches!(
            classify(r#"option java_outer_classname = ""; "#),
            LineClass::Malformed(_)
        ));
    }

    #[test]
    fn classifies_block_opens() {
        assert_eq!(classify("enum Color {"), LineClass::EnumOpen("Color".to_string()));
        assert_eq!(classify("message Point {"), LineClass::MessageOpen("Point".to_string()));
        assert_eq!(classify("  message Point{"), LineClass::MessageOpen("Point".to_string()));
    }

    #[test]
    fn block_opens_without_a_brace_are_malformed() {
        assert!(matches!(classify("message Point"), LineClass::Malformed(_)));
        assert!(matches!(classify("enum Color"), LineClass::Malformed(_)));
    }

    #[test]
    fn classifies_field_declarations() {
        assert_eq!(
            classify("  optional double x = 1;"),
            LineClass::FieldDecl {
                style:      FieldStyle::Optional,
                type_token: "double".to_string(),
                name:       "x".to_string(),
            }
        );
        assert_eq!(
            classify("repeated org.example.proto.Color z = 3;"),
            LineClass::FieldDecl {
                style:      FieldStyle::Repeated,
                type_token: "org.example.proto.Color".to_string(),
                name:       "z".to_string(),
            }
        );
    }

    #[test]
    fn field_keyword_without_tokens_is_malformed() {
        assert!(matches!(classify("optional"), LineClass::Malformed(_)));
        assert!(matches!(classify("required string"), LineClass::Malformed(_)));
    }

    #[test]
    fn keyword_prefixes_of_longer_identifiers_do_not_match() {
        assert_eq!(classify("message_count = 1;"), LineClass::Skip);
        assert_eq!(classify("optional_flag = true;"), LineClass::Skip);
    }

    #[test]
    fn classifies_block_close_anywhere_on_the_line() {
        assert_eq!(classify("}"), LineClass::BlockClose);
        assert_eq!(classify("  }  "), LineClass::BlockClose);
    }

    #[test]
    fn unrecognized_lines_are_skipped() {
        assert_eq!(classify(""), LineClass::Skip);
        assert_eq!(classify("  RED = 1;"), LineClass::Skip);
        assert_eq!(classify("syntax = \"proto2\";"), LineClass::Skip);
    }
}
