#[cfg(test)]
mod integration_tests {
    use clap::error::ErrorKind;
    use serde_json::{json, Value};

    use crate::cli_cfg::{
        Action, ArgSpec, CliParser, Dispatcher, Entry, Nargs, ParserSpec,
    };
    use crate::data::Namespace;
    use crate::errors::CliConfigError;

    fn myprogram() -> CliParser {
        let spec = ParserSpec::load("configs/myprogram.yaml").unwrap();
        CliParser::build(&spec).unwrap()
    }

    fn tools() -> CliParser {
        let spec = ParserSpec::load("configs/tools.json").unwrap();
        CliParser::build(&spec).unwrap()
    }

    fn clap_kind(result: Result<Namespace, CliConfigError>) -> ErrorKind {
        match result {
            Err(CliConfigError::Clap(e)) => e.kind(),
            other => panic!("expected a clap error, got {other:?}"),
        }
    }

    /// Test that the YAML parser spec loads and renders help
    #[test]
    fn test_help_from_yaml_spec() {
        let parser = myprogram();
        assert_eq!(parser.prog(), "myprogram");

        let help = parser.render_help();
        assert!(help.contains("Sample declarative parser"), "{help}");
        assert!(help.contains("--timeout <SECONDS>"), "{help}");
        assert!(help.contains("Time out value"), "{help}");
        assert!(help.contains("modes:"), "{help}");
        assert!(help.contains("parser mode"), "{help}");
        assert!(help.contains("--send"), "{help}");
        assert!(help.contains("list command"), "{help}");
        assert!(help.contains("@FILE"), "{help}");
    }

    /// Test that every dest is present and exclusive options set the mode
    #[test]
    fn test_exclusive_store_const() {
        let parser = myprogram();

        let ns = parser.parse_from(["--send"]).unwrap();
        assert_eq!(
            ns.to_string(),
            r#"Namespace(function=null, mode="send", timeout=null)"#
        );
        assert!(!ns.contains("func"));

        let ns = parser.parse_from(["--recv", "--timeout", "30"]).unwrap();
        assert_eq!(ns.get_str("mode"), Some("recv"));
        assert_eq!(ns.get_i64("timeout"), Some(30));
    }

    /// Test usage errors surface as clap errors
    #[test]
    fn test_usage_errors() {
        let parser = myprogram();
        assert_eq!(
            clap_kind(parser.parse_from(["--recv", "--send"])),
            ErrorKind::ArgumentConflict
        );
        assert_eq!(
            clap_kind(parser.parse_from(Vec::<String>::new())),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            clap_kind(parser.parse_from(["--send", "--timeout", "soon"])),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            clap_kind(parser.parse_from(["--send", "--bogus"])),
            ErrorKind::UnknownArgument
        );
    }

    /// Test that the version action prints the expanded text
    #[test]
    fn test_version_and_help_requests() {
        let parser = myprogram();
        match parser.parse_from(["--ver"]) {
            Err(CliConfigError::Clap(e)) => {
                assert_eq!(e.kind(), ErrorKind::DisplayVersion);
                assert_eq!(e.to_string().trim(), "myprogram 1.0");
            }
            other => panic!("expected version output, got {other:?}"),
        }
        assert_eq!(clap_kind(parser.parse_from(["-h"])), ErrorKind::DisplayHelp);
    }

    /// Test sub-command selection through an alias
    #[test]
    fn test_subcommand_alias_and_callable() {
        let parser = myprogram();
        let ns = parser.parse_from(["--send", "ls", "-l"]).unwrap();

        assert_eq!(ns.get_str("function"), Some("list"));
        assert_eq!(ns.get_str("func"), Some("list"));
        assert_eq!(ns.get_bool("long"), Some(true));
        assert_eq!(ns.get_str("mode"), Some("send"));
    }

    /// Test count, append and variable-length positionals in a sub-command
    #[test]
    fn test_subcommand_value_actions() {
        let parser = myprogram();
        let ns = parser
            .parse_from([
                "--recv", "copy", "-vv", "--exclude", "a", "--exclude", "b", "s1", "s2", "dest",
            ])
            .unwrap();

        assert_eq!(ns.get_str("func"), Some("copy"));
        assert_eq!(ns.get_i64("verbose"), Some(2));
        assert_eq!(ns.get("exclude"), Some(&json!(["a", "b"])));
        assert_eq!(ns.get("sources"), Some(&json!(["s1", "s2"])));
        assert_eq!(ns.get_str("target"), Some("dest"));
        assert!(!ns.contains("long"));
    }

    /// Test @file expansion before parsing
    #[test]
    fn test_fromfile_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("args.txt");
        std::fs::write(&path, "# saved options\n--timeout 45\n--send\n").unwrap();

        let ns = myprogram()
            .parse_from([format!("@{}", path.display())])
            .unwrap();
        assert_eq!(ns.get_i64("timeout"), Some(45));
        assert_eq!(ns.get_str("mode"), Some("send"));
    }

    /// Test defaults and typed values from the JSON parser spec
    #[test]
    fn test_json_spec_defaults() {
        let ns = tools().parse_from(Vec::<String>::new()).unwrap();

        assert_eq!(ns.get_bool("verbose"), Some(true));
        assert_eq!(ns.get_str("level"), Some("low"));
        assert!(ns.is_null("ratio"));
        assert!(ns.is_null("point"));
        assert!(ns.is_null("enable"));
        assert_eq!(ns.get_str("name"), Some("world"));
    }

    /// Test typed values, optional values and choices
    #[test]
    fn test_json_spec_values() {
        let parser = tools();
        let ns = parser
            .parse_from([
                "-q", "--level", "high", "--ratio", "--point", "1", "2", "--enable", "off", "bob",
            ])
            .unwrap();

        assert_eq!(ns.get_bool("verbose"), Some(false));
        assert_eq!(ns.get_str("level"), Some("high"));
        assert_eq!(ns.get("ratio"), Some(&json!(0.5)));
        assert_eq!(ns.get("point"), Some(&json!([1, 2])));
        assert_eq!(ns.get_bool("enable"), Some(false));
        assert_eq!(ns.get_str("name"), Some("bob"));

        let ns = parser.parse_from(["--ratio", "2.25"]).unwrap();
        assert_eq!(ns.get("ratio"), Some(&json!(2.25)));

        assert_eq!(
            clap_kind(parser.parse_from(["--level", "medium"])),
            ErrorKind::ValueValidation
        );
    }

    /// Test a custom fromfile prefix
    #[test]
    fn test_custom_fromfile_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiet.args");
        std::fs::write(&path, "-q").unwrap();

        let ns = tools()
            .parse_from([format!("+{}", path.display())])
            .unwrap();
        assert_eq!(ns.get_bool("verbose"), Some(false));

        let ns = tools().parse_from(["@literal"]).unwrap();
        assert_eq!(ns.get_str("name"), Some("@literal"));
    }

    /// Test that the last of several flags sharing a dest wins
    #[test]
    fn test_shared_dest_command_line_order() {
        let flag = |flag: &str, value: &str| {
            Entry::Arg(ArgSpec {
                flags: vec![flag.to_string()],
                dest: Some("speed".into()),
                action: Action::StoreConst,
                const_value: Some(Value::from(value)),
                ..ArgSpec::default()
            })
        };
        let spec = ParserSpec {
            prog: Some("speeds".into()),
            entries: vec![flag("--fast", "fast"), flag("--slow", "slow")],
            ..ParserSpec::default()
        };
        let parser = CliParser::build(&spec).unwrap();

        let pick = |args: &[&str]| {
            parser
                .parse_from(args.iter().copied())
                .unwrap()
                .get("speed")
                .cloned()
        };
        assert_eq!(pick(&[]), Some(Value::Null));
        assert_eq!(pick(&["--slow", "--fast"]), Some(json!("fast")));
        assert_eq!(pick(&["--fast", "--slow"]), Some(json!("slow")));
    }

    /// Test that positional values split by an option are rejected, not lost
    #[test]
    fn test_positionals_split_by_option() {
        let spec = ParserSpec {
            prog: Some("files".into()),
            entries: vec![
                Entry::Arg(ArgSpec {
                    flags: vec!["files".into()],
                    nargs: Some(Nargs::ZeroOrMore),
                    ..ArgSpec::default()
                }),
                Entry::Arg(ArgSpec {
                    flags: vec!["--o".into()],
                    ..ArgSpec::default()
                }),
            ],
            ..ParserSpec::default()
        };
        let parser = CliParser::build(&spec).unwrap();

        assert_eq!(
            clap_kind(parser.parse_from(["x", "--o", "1", "y"])),
            ErrorKind::ArgumentConflict
        );

        let ns = parser.parse_from(["x", "y", "--o", "1"]).unwrap();
        assert_eq!(ns.get("files"), Some(&json!(["x", "y"])));
        assert_eq!(ns.get_str("o"), Some("1"));

        // Repeated options still keep the last value.
        let ns = parser.parse_from(["--o", "1", "x", "--o", "2"]).unwrap();
        assert_eq!(ns.get("files"), Some(&json!(["x"])));
        assert_eq!(ns.get_str("o"), Some("2"));
    }

    /// Test dispatching to the handler chosen by the sub-command
    #[test]
    fn test_dispatch_from_parsed_namespace() {
        let parser = myprogram();
        let mut dispatcher = Dispatcher::with_callable_dest("func");
        dispatcher
            .register("list", |ns| Ok(if ns.get_bool("long") == Some(true) { 10 } else { 0 }))
            .register("copy", |ns| Ok(ns.get_i64("verbose").unwrap_or(0) as i32));

        let ns = parser.parse_from(["--send", "list", "--long"]).unwrap();
        assert_eq!(dispatcher.dispatch(&ns).unwrap(), Some(10));

        let ns = parser.parse_from(["--send", "copy", "-v", "a", "b"]).unwrap();
        assert_eq!(dispatcher.dispatch(&ns).unwrap(), Some(1));

        let ns = parser.parse_from(["--send"]).unwrap();
        assert_eq!(dispatcher.dispatch(&ns).unwrap(), None);
    }
}
