use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Run the CLI with an isolated HOME so no real config file is read.
pub fn run_cli_in(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_skuid"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env_remove("SKUID_DIR");
    cmd.env_remove("SKUID_MODULE");
    cmd.env_remove("SKUID_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli_in(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write a zip archive payload to `dir/name`.
pub fn write_archive(dir: &Path, name: &str, files: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let file = fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    for (entry, body) in files {
        writer.start_file(entry.to_string(), options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}
