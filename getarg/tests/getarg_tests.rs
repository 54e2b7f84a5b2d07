use getarg::ArgMap;

/// Build a map from a whitespace-separated argument string.
fn reset_args(line: &str) -> ArgMap {
    ArgMap::parse(line.split_whitespace())
}

#[test]
fn boolarg() {
    let args = reset_args("-ZWD");
    assert!(args.get_bool("-ZWD", false));
    assert!(args.get_bool("-ZWD", true));

    assert!(!args.get_bool("-fo", false));
    assert!(args.get_bool("-fo", true));

    assert!(!args.get_bool("-ZWDo", false));
    assert!(args.get_bool("-ZWDo", true));

    let args = reset_args("-ZWD=0");
    assert!(!args.get_bool("-ZWD", false));
    assert!(!args.get_bool("-ZWD", true));

    let args = reset_args("-ZWD=1");
    assert!(args.get_bool("-ZWD", false));
    assert!(args.get_bool("-ZWD", true));

    // -noX maps to !X
    let args = reset_args("-noZWD");
    assert!(!args.get_bool("-ZWD", false));
    assert!(!args.get_bool("-ZWD", true));

    let args = reset_args("-noZWD=1");
    assert!(!args.get_bool("-ZWD", false));
    assert!(!args.get_bool("-ZWD", true));

    // -ZWD wins
    let args = reset_args("-ZWD -noZWD");
    assert!(args.get_bool("-ZWD", false));
    assert!(args.get_bool("-ZWD", true));

    let args = reset_args("-ZWD=1 -noZWD=1");
    assert!(args.get_bool("-ZWD", false));
    assert!(args.get_bool("-ZWD", true));

    let args = reset_args("-ZWD=0 -noZWD=0");
    assert!(!args.get_bool("-ZWD", false));
    assert!(!args.get_bool("-ZWD", true));

    // -- is the same as -
    let args = reset_args("--ZWD=1");
    assert!(args.get_bool("-ZWD", false));
    assert!(args.get_bool("-ZWD", true));

    let args = reset_args("--noZWD=1");
    assert!(!args.get_bool("-ZWD", false));
    assert!(!args.get_bool("-ZWD", true));
}

#[test]
fn stringarg() {
    let args = reset_args("");
    assert_eq!(args.get_string("-ZWD", ""), "");
    assert_eq!(args.get_string("-ZWD", "eleven"), "eleven");

    let args = reset_args("-ZWD -bar");
    assert_eq!(args.get_string("-ZWD", ""), "");
    assert_eq!(args.get_string("-ZWD", "eleven"), "");

    let args = reset_args("-ZWD=");
    assert_eq!(args.get_string("-ZWD", ""), "");
    assert_eq!(args.get_string("-ZWD", "eleven"), "");
    assert!(args.get_bool("-ZWD", false));

    let args = reset_args("-ZWD=11");
    assert_eq!(args.get_string("-ZWD", ""), "11");
    assert_eq!(args.get_string("-ZWD", "eleven"), "11");

    let args = reset_args("-ZWD=eleven");
    assert_eq!(args.get_string("-ZWD", ""), "eleven");
    assert_eq!(args.get_string("-ZWD", "eleven"), "eleven");
}

#[test]
fn intarg() {
    let args = reset_args("");
    assert_eq!(args.get_int("-ZWD", 11), 11);
    assert_eq!(args.get_int("-ZWD", 0), 0);

    let args = reset_args("-ZWD -bar");
    assert_eq!(args.get_int("-ZWD", 11), 0);
    assert_eq!(args.get_int("-bar", 11), 0);

    let args = reset_args("-ZWD=11 -bar=12");
    assert_eq!(args.get_int("-ZWD", 0), 11);
    assert_eq!(args.get_int("-bar", 11), 12);

    let args = reset_args("-ZWD=NaN -bar=NotANumber");
    assert_eq!(args.get_int("-ZWD", 1), 0);
    assert_eq!(args.get_int("-bar", 11), 0);
}

#[test]
fn doubledash() {
    let args = reset_args("--ZWD");
    assert!(args.get_bool("-ZWD", false));

    let args = reset_args("--ZWD=verbose --bar=1");
    assert_eq!(args.get_string("-ZWD", ""), "verbose");
    assert_eq!(args.get_int("-bar", 0), 1);
}

#[test]
fn boolargno() {
    let args = reset_args("-noZWD");
    assert!(!args.get_bool("-ZWD", true));
    assert!(!args.get_bool("-ZWD", false));

    let args = reset_args("-noZWD=1");
    assert!(!args.get_bool("-ZWD", true));
    assert!(!args.get_bool("-ZWD", false));

    let args = reset_args("-noZWD=0");
    assert!(args.get_bool("-ZWD", true));
    assert!(args.get_bool("-ZWD", false));

    let args = reset_args("-ZWD --noZWD");
    assert!(args.get_bool("-ZWD", false));

    // ZWD always wins
    let args = reset_args("-noZWD -ZWD");
    assert!(args.get_bool("-ZWD", false));
}

#[test]
fn absent_options_use_defaults() {
    let args = reset_args("-ZWD=1 -noother stray");
    for name in ["missing", "-missing", "--missing"] {
        assert!(args.get_bool(name, true));
        assert!(!args.get_bool(name, false));
        assert_eq!(args.get_string(name, "d"), "d");
        assert_eq!(args.get_int(name, -3), -3);
    }
}

#[test]
fn nostalgia_is_a_negation() {
    let args = reset_args("-nostalgia");
    assert!(!args.is_set("nostalgia"));
    assert!(args.is_negated("stalgia"));
    assert!(!args.get_bool("stalgia", true));
    assert!(!args.get_bool("nostalgia", false));
}

#[test]
fn repeated_options_keep_every_value() {
    let args = reset_args("-connect=a:1 -connect=b:2 --connect=c:3");
    assert_eq!(args.get_all("connect"), ["a:1", "b:2", "c:3"]);
    assert_eq!(args.get_string("connect", ""), "a:1");
}

#[test]
fn quoted_argument_string() {
    let args = ArgMap::parse(getarg::split_args(r#"-name="two words" -noquiet"#).unwrap());
    assert_eq!(args.get_string("name", ""), "two words");
    assert!(!args.get_bool("quiet", true));
}
