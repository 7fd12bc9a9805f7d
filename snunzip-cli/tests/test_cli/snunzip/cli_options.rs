use crate::add_test;
use crate::common::{Fixture, SAMPLE_TEXT};

// Without arguments snunzip prints usage and fails
add_test!(no_arguments, async {
    let fixture = Fixture::new();

    let output = fixture.run(&[]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("Usage"));
    assert!(output.stdout.is_empty());
});

// Help lists the usage and the example
add_test!(help_flag, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["--help"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("Usage"));
    assert!(output.stdout.contains("Example: snunzip 'abc*'"));
});

// Version reports the crate version
add_test!(version_flag, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["--version"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains(env!("CARGO_PKG_VERSION")));
});

// Unknown flags are rejected before any file is touched
add_test!(unknown_flag, async {
    let fixture = Fixture::with_compressed("data", SAMPLE_TEXT.as_bytes());

    let output = fixture.run(&["--force", "data.snappy"]).await;
    assert!(!output.status.success());
    assert!(!fixture.file_exists("data"));
});

// Names starting with a dash are accepted after `--`
add_test!(dash_prefixed_name, async {
    let fixture = Fixture::with_compressed("-dash", SAMPLE_TEXT.as_bytes());

    let output = fixture.run(&["--", "-dash.snappy"]).await;
    assert!(output.status.success());

    fixture.assert_files(&["-dash"], &[SAMPLE_TEXT.as_bytes()]);
});
