// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use {
    anyhow::Result,
    assert_cmd::Command,
    assert_fs::{prelude::*, TempDir},
    libtest_mimic::{Arguments, Trial},
    predicates::prelude::*,
};

fn nres() -> Result<Command> {
    Ok(Command::cargo_bin("nres")?)
}

fn no_args_fails() -> Result<()> {
    nres()?.assert().failure();

    Ok(())
}

fn generate_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    temp_dir
        .child("resources/hello.txt")
        .write_str("Hello, World!")?;

    nres()?
        .current_dir(temp_dir.path())
        .arg("generate")
        .arg("resources/hello.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successful: 1"))
        .stdout(predicate::str::contains("Failed: 0"));

    temp_dir
        .child("resources/hello.txt.nres")
        .assert(predicate::str::contains("pub static HELLO_TXT_65A8E2:"));
    temp_dir
        .child("resources/nres_manifest.txt")
        .assert(predicate::str::contains("MD5: 65a8e27d8879283831b664bd8b7f0ad4"));

    Ok(())
}

fn generate_file_rejects_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    temp_dir.child("resources/hello.txt").write_str("hi")?;

    nres()?
        .current_dir(temp_dir.path())
        .arg("generate")
        .arg("resources")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not point to a file"));

    Ok(())
}

fn generate_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    temp_dir.child("assets/a.txt").write_str("a")?;
    temp_dir.child("assets/nested/b.txt").write_str("b")?;
    temp_dir.child("assets/empty.txt").touch()?;

    nres()?
        .current_dir(temp_dir.path())
        .arg("generate")
        .arg("--dir")
        .arg("assets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successful: 2"))
        .stdout(predicate::str::contains("Failed: 1"))
        .stdout(predicate::str::contains("Total: 3"));

    temp_dir
        .child("assets/a.txt.nres")
        .assert(predicate::path::is_file());
    temp_dir
        .child("assets/nested/b.txt.nres")
        .assert(predicate::path::is_file());
    temp_dir
        .child("assets/empty.txt.nres")
        .assert(predicate::path::missing());
    temp_dir
        .child("assets/nres_manifest.txt")
        .assert(predicate::str::contains("include!(\"assets/nested/b.txt.nres\");"));

    Ok(())
}

fn purge() -> Result<()> {
    let temp_dir = TempDir::new()?;
    temp_dir.child("assets/a.txt").write_str("a")?;

    nres()?
        .current_dir(temp_dir.path())
        .args(["generate", "--dir", "assets"])
        .assert()
        .success();

    nres()?
        .current_dir(temp_dir.path())
        .args(["purge", "assets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned up 2 resource files."));

    temp_dir
        .child("assets/a.txt.nres")
        .assert(predicate::path::missing());
    temp_dir
        .child("assets/a.txt")
        .assert(predicate::path::is_file());

    Ok(())
}

fn checksum() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.child("hello.txt");
    file.write_str("Hello, World!")?;

    nres()?
        .arg("checksum")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "65a8e27d8879283831b664bd8b7f0ad4",
        ));

    Ok(())
}

fn main() {
    let args = Arguments::from_args();

    let tests = [
        ("no_args_fails", no_args_fails as fn() -> Result<()>),
        ("generate_file", generate_file),
        ("generate_file_rejects_directory", generate_file_rejects_directory),
        ("generate_directory", generate_directory),
        ("purge", purge),
        ("checksum", checksum),
    ]
    .into_iter()
    .map(|(name, f)| Trial::test(name, move || f().map_err(Into::into)))
    .collect::<Vec<_>>();

    libtest_mimic::run(&args, tests).exit();
}
