#![allow(missing_docs)]

// Version string for `--help` and `-v`: the package version, plus the git revision when building from a checkout.
fn main() {
    let version = env!("CARGO_PKG_VERSION");
    let version = match git_short_hash() {
        Some(hash) => format!("{version}+g{hash}"),
        None => version.to_owned(),
    };
    println!("cargo:rustc-env=SCRIPTARGS_VERSION_STRING={version}");
}

fn git_short_hash() -> Option<String> {
    let output = std::process::Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    let rev = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    (output.status.success() && !rev.is_empty()).then_some(rev)
}
