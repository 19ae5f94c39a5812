//! Shared testing utilities for nsskip CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated project tree for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment holding a `Proj/Proj.csproj` project.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let ctx = Self { root };
        fs::create_dir_all(ctx.project_dir()).expect("Failed to create project directory");
        fs::write(ctx.project_file(), "<Project Sdk=\"Microsoft.NET.Sdk\" />\n")
            .expect("Failed to write project file");
        ctx
    }

    /// Root of the temporary workspace.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory containing the default project file.
    pub fn project_dir(&self) -> PathBuf {
        self.root.path().join("Proj")
    }

    /// Absolute path of the default project file.
    pub fn project_file(&self) -> PathBuf {
        self.project_dir().join("Proj.csproj")
    }

    /// Absolute path of the default project's settings sidecar.
    pub fn sidecar_path(&self) -> PathBuf {
        self.project_dir().join("Proj.csproj.DotSettings")
    }

    /// Create an empty file under the project directory, with parents.
    pub fn touch(&self, relative: &str) {
        let path = self.project_dir().join(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create parent directories");
        fs::write(path, "").expect("Failed to create file");
    }

    /// Write a generator config file at the workspace root and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("nsskip.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Full text of the default project's sidecar.
    pub fn read_sidecar(&self) -> String {
        fs::read_to_string(self.sidecar_path()).expect("Failed to read sidecar file")
    }

    /// Build a command for invoking the compiled `nsskip` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nsskip").expect("Failed to locate nsskip binary");
        cmd.current_dir(self.root.path());
        cmd
    }

    /// The settings key line expected for an encoded identifier.
    pub fn entry_key(identifier: &str) -> String {
        format!(
            "/Default/CodeInspection/NamespaceProvider/NamespaceFoldersToSkip/={identifier}/@EntryIndexedValue"
        )
    }
}
