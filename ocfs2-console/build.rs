// SPDX-License-Identifier: GPL-3.0-only

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fluent files are embedded at compile time.
    println!("cargo:rerun-if-changed=i18n");

    // Commit hash and date for the settings footer; the footer shortens the hash.
    vergen::EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()?;

    for var in ["VERGEN_GIT_SHA", "VERGEN_GIT_COMMIT_DATE"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    Ok(())
}
