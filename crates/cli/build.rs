use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("feedbrief")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve feed entries into article text for summarization")
        .arg(clap::arg!(<INPUT> "JSON file with feed entries, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (json, text)")
                .value_name("FORMAT")
                .default_value("json")
                .value_parser(["json", "text"]),
        )
        .arg(clap::arg!(--"max-length" <NUM> "Maximum characters of content per article").default_value("500"))
        .arg(clap::arg!(--"no-fetch" "Never fetch full articles, even for teaser content"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds for article fetches").default_value("10"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--concurrency <NUM> "Maximum number of entries resolved at once").default_value("1"))
        .arg(
            clap::arg!(--"min-article-chars" <NUM> "Minimum characters a fetched article must exceed")
                .default_value("200"),
        )
        .arg(clap::arg!(--urls "Include article URLs (text format only)"))
        .arg(clap::arg!(--compact "Emit compact single-line JSON"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "feedbrief", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "feedbrief", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "feedbrief", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "feedbrief", &completions_dir).unwrap();
}
