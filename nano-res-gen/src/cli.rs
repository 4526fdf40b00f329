// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use {
    anyhow::{anyhow, Context, Result},
    clap::{Arg, ArgMatches, Command},
    log::LevelFilter,
    nano_res::Checksum,
    nano_res_gen::{purge_directory, Generator, GeneratorConfig},
    std::path::PathBuf,
};

const ABOUT: &str = "\
# About

`nres` turns files into Rust source files that embed their content as
`nano_res::Resource` statics.

For every input `foo.png` a sibling `foo.png.nres` is written. Pull it into
a crate with `include!(\"path/to/foo.png.nres\");` and access the resource
through the generated static named in the output and the manifest.
";

const GENERATE_ABOUT: &str = "\
Generate resource files.

PATH is a file, or a directory when --dir is given. Directories are walked
recursively. Previously generated files and the manifest are skipped.

Files that are empty or larger than the size limit are reported and
skipped. A manifest describing every generated file is written next to the
file, or at the root of the directory.
";

fn extension_arg() -> Arg<'static> {
    Arg::new("extension")
        .long("extension")
        .takes_value(true)
        .default_value(nano_res_gen::config::DEFAULT_EXTENSION)
        .help("Extension of generated files")
}

fn extension_config(args: &ArgMatches) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();

    if let Some(extension) = args.value_of("extension") {
        config.extension = extension.trim_start_matches('.').to_string();
    }

    config
}

fn generate_config(args: &ArgMatches) -> Result<GeneratorConfig> {
    let mut config = extension_config(args);

    if args.is_present("max_size_mb") {
        let mb = args
            .value_of("max_size_mb")
            .ok_or_else(|| anyhow!("--max-size-mb requires a value"))?
            .parse::<u64>()
            .context("parsing --max-size-mb")?;
        config = config.with_max_size_mb(mb);
    }

    if let Some(crate_path) = args.value_of("crate_path") {
        config.crate_path = crate_path.to_string();
    }

    Ok(config)
}

fn command_generate(args: &ArgMatches) -> Result<()> {
    let path = PathBuf::from(
        args.value_of("path")
            .ok_or_else(|| anyhow!("PATH argument is required"))?,
    );
    let is_dir = args.is_present("dir");
    let config = generate_config(args)?;
    let base = std::env::current_dir()?;

    let generator = Generator::new(config);

    let report = if is_dir {
        generator.generate_directory(&path, &base)?
    } else {
        generator.generate_file(&path, &base)?
    };

    for (path, err) in &report.failed {
        println!("failed to process {}: {}", path.display(), err);
    }

    println!(
        "Finished processing the {} pointed to by '{}'. Run statistics are as follows:",
        if is_dir { "directory" } else { "file" },
        path.display()
    );
    println!("\tSuccessful: {}", report.generated.len());
    println!("\tFailed: {}", report.failed.len());
    println!("\tTotal: {}", report.total());
    println!("Manifest written to {}", report.manifest_path.display());

    Ok(())
}

fn command_purge(args: &ArgMatches) -> Result<()> {
    let path = PathBuf::from(
        args.value_of("path")
            .ok_or_else(|| anyhow!("PATH argument is required"))?,
    );
    let config = extension_config(args);

    println!(
        "Purging directory '{}' of all .{} files...",
        path.display(),
        config.extension
    );
    let count = purge_directory(&path, &config)?;
    println!(
        "Cleaned up {} resource file{}.",
        count,
        if count != 1 { "s" } else { "" }
    );

    Ok(())
}

fn command_checksum(args: &ArgMatches) -> Result<()> {
    let path = PathBuf::from(
        args.value_of("path")
            .ok_or_else(|| anyhow!("PATH argument is required"))?,
    );

    let data = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    println!("{}  {}", Checksum::compute(&data), path.display());

    Ok(())
}

pub fn run_cli() -> Result<()> {
    let app = Command::new("nres")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gregory Szorc <gregory.szorc@gmail.com>")
        .about("Generate embeddable resource files")
        .long_about(ABOUT)
        .arg_required_else_help(true);

    let app = app.arg(
        Arg::new("verbose")
            .long("verbose")
            .short('v')
            .global(true)
            .multiple_occurrences(true)
            .help("Increase logging verbosity. Can be specified multiple times."),
    );

    let app = app.subcommand(
        Command::new("generate")
            .about("Generate resource files for a file or directory")
            .long_about(GENERATE_ABOUT)
            .arg(
                Arg::new("dir")
                    .long("dir")
                    .short('d')
                    .help("Whether PATH is a directory"),
            )
            .arg(
                Arg::new("max_size_mb")
                    .long("max-size-mb")
                    .takes_value(true)
                    .help("Largest file to encode, in megabytes (default 16)"),
            )
            .arg(extension_arg())
            .arg(
                Arg::new("crate_path")
                    .long("crate-path")
                    .takes_value(true)
                    .default_value(nano_res_gen::config::DEFAULT_CRATE_PATH)
                    .help("Path generated code uses to reference the nano-res crate"),
            )
            .arg(
                Arg::new("path")
                    .required(true)
                    .help("File or directory to process"),
            ),
    );

    let app = app.subcommand(
        Command::new("purge")
            .about("Delete generated resource files and the manifest from a directory")
            .arg(extension_arg())
            .arg(
                Arg::new("path")
                    .required(true)
                    .help("Directory to purge"),
            ),
    );

    let app = app.subcommand(
        Command::new("checksum")
            .about("Print the checksum a file would be embedded with")
            .arg(
                Arg::new("path")
                    .required(true)
                    .help("File to compute the checksum of"),
            ),
    );

    let matches = app.get_matches();

    let log_level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_str()),
    );

    // Disable log context except at higher log levels.
    if log_level <= LevelFilter::Info {
        builder
            .format_timestamp(None)
            .format_level(false)
            .format_target(false);
    }

    builder.init();

    match matches.subcommand() {
        Some(("generate", args)) => command_generate(args),
        Some(("purge", args)) => command_purge(args),
        Some(("checksum", args)) => command_checksum(args),
        _ => Err(anyhow!("invalid sub-command")),
    }
}
