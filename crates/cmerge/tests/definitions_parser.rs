//! Integration tests for definitions document parsing.

use std::io::Cursor;

use cmerge::{HOSTNAME_TOKEN, ParseError, ParseWarning, parse, parse_str};

const TWO_HOSTS: &str = "\
# branch routers
<HOSTNAME>::R1
<IP>::10.0.0.1
<MASK>::255.255.255.0
<--END-->
<HOSTNAME>::R2
<IP>::10.0.1.1
<MASK>::255.255.255.0
<--END-->
";

// =========================================================================
// Host blocks
// =========================================================================

#[test]
fn test_hostnames_in_block_order() {
    let defs = parse_str(TWO_HOSTS).unwrap();
    assert_eq!(defs.hostnames(), ["R1", "R2"]);
    assert_eq!(defs.len(), 2);
    assert!(defs.warnings().is_empty());
}

#[test]
fn test_hostname_entry_is_seeded() {
    let defs = parse_str(TWO_HOSTS).unwrap();
    let r2 = defs.host("R2").unwrap();
    assert_eq!(r2.hostname(), "R2");
    assert_eq!(r2.get(HOSTNAME_TOKEN), Some("R2"));
    assert_eq!(r2.get("<IP>"), Some("10.0.1.1"));
    assert_eq!(r2.len(), 3);
}

#[test]
fn test_variables_keep_definition_order() {
    let defs = parse_str(TWO_HOSTS).unwrap();
    let keys: Vec<&str> = defs.host("R1").unwrap().iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["<HOSTNAME>", "<IP>", "<MASK>"]);
}

#[test]
fn test_trailing_whitespace_is_trimmed() {
    let defs = parse_str("<HOSTNAME>::core1  \r\n<IP>::10.1.1.1\t\n<--END-->\n").unwrap();
    assert_eq!(defs.hostnames(), ["core1"]);
    assert_eq!(defs.host("core1").unwrap().get("<IP>"), Some("10.1.1.1"));
}

#[test]
fn test_leading_whitespace_in_value_is_kept() {
    let defs = parse_str("<HOSTNAME>::r1\n<DESC>:: uplink\n<--END-->\n").unwrap();
    assert_eq!(defs.host("r1").unwrap().get("<DESC>"), Some(" uplink"));
}

#[test]
fn test_empty_value_is_stored() {
    let defs = parse_str("<HOSTNAME>::r1\n<DESC>::\n<--END-->\n").unwrap();
    assert_eq!(defs.host("r1").unwrap().get("<DESC>"), Some(""));
}

#[test]
fn test_last_definition_wins() {
    let defs = parse_str("<HOSTNAME>::r1\n<IP>::1.1.1.1\n<IP>::2.2.2.2\n<--END-->\n").unwrap();
    let r1 = defs.host("r1").unwrap();
    assert_eq!(r1.get("<IP>"), Some("2.2.2.2"));
    assert_eq!(r1.len(), 2);
}

#[test]
fn test_terminator_may_share_a_line() {
    let defs = parse_str("<HOSTNAME>::r1\n<IP>::1.1.1.1 <--END-->\n<HOSTNAME>::r2\n").unwrap();
    assert_eq!(defs.hostnames(), ["r1", "r2"]);
    assert_eq!(defs.host("r1").unwrap().get("<IP>"), None);
}

#[test]
fn test_terminator_wins_over_hostname_on_the_same_line() {
    let defs = parse_str(
        "<HOSTNAME>::r1\n<IP>::1.1.1.1\n<HOSTNAME>::x <--END-->\n<HOSTNAME>::r2\n<--END-->\n",
    )
    .unwrap();
    assert_eq!(defs.hostnames(), ["r1", "r2"]);
    assert!(defs.host("x").is_none());
    assert_eq!(defs.host("r1").unwrap().get("<IP>"), Some("1.1.1.1"));
    assert!(defs.warnings().is_empty());
}

#[test]
fn test_commented_hostname_inside_block_is_ignored() {
    let defs =
        parse_str("<HOSTNAME>::r1\n#<HOSTNAME>::old-r1\n<IP>::1.1.1.1\n<--END-->\n").unwrap();
    assert_eq!(defs.hostnames(), ["r1"]);
    assert_eq!(defs.host("r1").unwrap().get("<IP>"), Some("1.1.1.1"));
    assert!(defs.warnings().is_empty());
}

#[test]
fn test_empty_document() {
    let defs = parse_str("").unwrap();
    assert!(defs.is_empty());
    assert!(defs.tokens().is_empty());
}

#[test]
fn test_tokens_union_across_hosts() {
    let defs = parse_str("<HOSTNAME>::a\n<X>::1\n<--END-->\n<HOSTNAME>::b\n<Y>::2\n<--END-->\n")
        .unwrap();
    let tokens: Vec<String> = defs.tokens().into_iter().collect();
    assert_eq!(tokens, vec!["<HOSTNAME>", "<X>", "<Y>"]);
}

#[test]
fn test_into_parts() {
    let (hostnames, hosts) = parse_str(TWO_HOSTS).unwrap().into_parts();
    assert_eq!(hostnames, vec!["R1", "R2"]);
    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts["R1"].get("<IP>"), Some("10.0.0.1"));
}

#[test]
fn test_parse_rewinds_the_document() {
    let mut doc = Cursor::new(TWO_HOSTS.as_bytes());
    let first = parse(&mut doc).unwrap();
    let second = parse(&mut doc).unwrap();
    assert_eq!(first.hostnames(), second.hostnames());
    assert_eq!(first.host("R1"), second.host("R1"));
}

// =========================================================================
// Fatal errors
// =========================================================================

#[test]
fn test_nested_hostname_is_fatal() {
    let err = parse_str("<HOSTNAME>::r1\n<IP>::1.1.1.1\n<HOSTNAME>::r2\n<--END-->\n").unwrap_err();
    match &err {
        ParseError::NestedHostBlock {
            line_number,
            line,
            open_host,
        } => {
            assert_eq!(*line_number, 3);
            assert_eq!(line, "<HOSTNAME>::r2");
            assert_eq!(open_host, "r1");
        }
        other => panic!("expected nested block error, got {other:?}"),
    }
    assert_eq!(err.line_number(), Some(3));
}

#[test]
fn test_duplicate_hostname_is_fatal() {
    let err = parse_str("<HOSTNAME>::r1\n<--END-->\n# again\n<HOSTNAME>::r1 \n<--END-->\n")
        .unwrap_err();
    match err {
        ParseError::DuplicateHostname {
            line_number,
            hostname,
            ..
        } => {
            assert_eq!(line_number, 4);
            assert_eq!(hostname, "r1");
        }
        other => panic!("expected duplicate hostname error, got {other:?}"),
    }
}

#[test]
fn test_error_message_names_the_line() {
    let err = parse_str("<HOSTNAME>::r1\n<HOSTNAME>::r2\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 2: <HOSTNAME> found inside the variable block of 'r1': '<HOSTNAME>::r2'"
    );
}

// =========================================================================
// Recoverable warnings
// =========================================================================

#[test]
fn test_missing_separator_is_skipped() {
    let defs = parse_str("<HOSTNAME>::r1\n<IP> 10.0.0.1\n<MASK>::255.0.0.0\n<--END-->\n").unwrap();
    assert_eq!(
        defs.warnings(),
        [ParseWarning::MissingSeparator {
            line_number: 2,
            line: "<IP> 10.0.0.1".to_string(),
            host: Some("r1".to_string()),
        }]
    );
    let r1 = defs.host("r1").unwrap();
    assert_eq!(r1.get("<IP>"), None);
    assert_eq!(r1.get("<MASK>"), Some("255.0.0.0"));
}

#[test]
fn test_blank_line_has_no_separator() {
    let defs = parse_str("<HOSTNAME>::r1\n\n<--END-->\n").unwrap();
    assert_eq!(defs.warnings().len(), 1);
    assert_eq!(defs.warnings()[0].line_number(), Some(2));
}

#[test]
fn test_variable_outside_block_is_skipped() {
    let defs = parse_str("<HOSTNAME>::r1\n<--END-->\n<IP>::10.0.0.1\n").unwrap();
    assert_eq!(
        defs.warnings(),
        [ParseWarning::OutsideHostBlock {
            line_number: 3,
            line: "<IP>::10.0.0.1".to_string(),
            host: Some("r1".to_string()),
        }]
    );
    assert_eq!(defs.host("r1").unwrap().get("<IP>"), None);
}

#[test]
fn test_variable_before_any_block_has_no_host() {
    let defs = parse_str("<IP>::10.0.0.1\n").unwrap();
    assert_eq!(
        defs.warnings()[0].to_string(),
        "line 1: not inside a host block, line ignored: '<IP>::10.0.0.1'"
    );
}

#[test]
fn test_separator_in_value_splits_on_first() {
    let defs = parse_str("<HOSTNAME>::r1\n<V6>::2001:db8::1\n<--END-->\n").unwrap();
    assert_eq!(defs.host("r1").unwrap().get("<V6>"), Some("2001:db8::1"));
    assert_eq!(
        defs.warnings(),
        [ParseWarning::SeparatorInValue {
            line_number: 2,
            line: "<V6>::2001:db8::1".to_string(),
            host: "r1".to_string(),
            key: "<V6>".to_string(),
        }]
    );
}

#[test]
fn test_unterminated_final_block_is_kept() {
    let defs = parse_str("<HOSTNAME>::r1\n<IP>::10.0.0.1\n").unwrap();
    assert_eq!(defs.host("r1").unwrap().get("<IP>"), Some("10.0.0.1"));
    assert_eq!(
        defs.warnings(),
        [ParseWarning::UnterminatedBlock {
            host: "r1".to_string(),
        }]
    );
}
