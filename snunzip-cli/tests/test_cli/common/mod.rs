use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};


pub use data::{generate_random_data, snappy_frame, BINARY_DATA, REPETITIVE_DATA, SAMPLE_TEXT};

/// Path of the binary under test, provided by cargo for integration tests.
const SNUNZIP_BIN: &str = env!("CARGO_BIN_EXE_snunzip");

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with multiple raw files
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if any fixture file
    /// cannot be written.
    pub fn with_files(names: &[&str], contents: &[&[u8]]) -> Self {
        let fixture = Self::new();
        for (name, contents) in names.iter().zip(contents) {
            fixture.write_file(name, contents);
        }
        fixture
    }

    /// Create fixture with a single raw file
    ///
    /// # Panics
    ///
    /// Panics if the fixture file cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        Self::with_files(&[name], &[contents])
    }

    /// Create fixture with `<name>.snappy` holding `contents` encoded
    ///
    /// # Panics
    ///
    /// Panics if the fixture file cannot be written.
    pub fn with_compressed(name: &str, contents: &[u8]) -> Self {
        let fixture = Self::new();
        fixture.write_compressed(name, contents);
        fixture
    }

    /// Write a raw file into the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_file(&self, name: &str, contents: &[u8]) {
        fs::write(self.root_dir.path().join(name), contents).unwrap();
    }

    /// Write `<name>.snappy` holding `contents` encoded
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_compressed(&self, name: &str, contents: &[u8]) {
        self.write_file(&format!("{name}.snappy"), &snappy_frame(contents));
    }

    /// Write a raw file whose name is given as an `OsStr`
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_file_os(&self, name: &OsStr, contents: &[u8]) {
        fs::write(self.root_dir.path().join(name), contents).unwrap();
    }

    /// Read a file whose name is given as an `OsStr`
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read_os(&self, name: &OsStr) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap()
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Get compressed path (adds .snappy extension)
    pub fn compressed_path(&self, name: &str) -> String {
        format!("{}.snappy", self.path(name))
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).exists()
    }

    /// Read a file from the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap()
    }

    /// Assert that files have expected contents
    ///
    /// # Panics
    ///
    /// Panics if any file cannot be read or if its contents don't match the
    /// expected bytes.
    pub fn assert_files(&self, names: &[&str], contents: &[&[u8]]) {
        for (name, expected_contents) in names.iter().zip(contents) {
            let path = self.root_dir.path().join(name);
            let actual_contents = fs::read(&path)
                .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
            assert!(
                actual_contents == *expected_contents,
                "unexpected contents in {name}"
            );
        }
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run snunzip from inside the fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaiting its output fails.
    pub async fn run(&self, args: &[&str]) -> Output {
        let args: Vec<&OsStr> = args.iter().map(OsStr::new).collect();
        self.run_os(&args).await
    }

    /// Run snunzip with arguments that need not be valid UTF-8
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaiting its output fails.
    pub async fn run_os(&self, args: &[&OsStr]) -> Output {
        let child = tokio::process::Command::new(PathBuf::from(SNUNZIP_BIN))
            .args(args)
            .current_dir(self.root_dir.path())
            .env_remove("RUST_LOG")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        // Use wait_with_output directly to avoid deadlock with large outputs.
        let raw_output = child.wait_with_output().await.unwrap();
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
