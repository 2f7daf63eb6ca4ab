use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use platen::TemplateLayout;

#[derive(Parser, Debug)]
#[command(
    name = "platen",
    version,
    about = "Apply component images onto a template image's placeholder regions"
)]
struct Cli {
    /// Layout config JSON describing the placeholder regions.
    config_filepath: PathBuf,

    /// Template image the components are composed onto.
    #[arg(long)]
    template_filepath: PathBuf,

    /// Placeholder name followed by the component image to place there; repeatable.
    #[arg(long, num_args = 2, value_names = ["NAME", "PATH"], action = clap::ArgAction::Append)]
    component_filepath: Vec<String>,

    /// Where to write the composed image (format inferred from the extension).
    #[arg(long)]
    output_filepath: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_text = std::fs::read_to_string(&cli.config_filepath)
        .with_context(|| format!("read layout config '{}'", cli.config_filepath.display()))?;
    let config: serde_json::Value = serde_json::from_str(&config_text)
        .with_context(|| format!("parse layout config '{}'", cli.config_filepath.display()))?;

    let mut template = image::open(&cli.template_filepath)
        .with_context(|| format!("open template image '{}'", cli.template_filepath.display()))?
        .to_rgba8();

    let mut layout = TemplateLayout::new(&mut template, &config)?;

    for pair in cli.component_filepath.chunks(2) {
        let [name, path] = pair else {
            anyhow::bail!("--component-filepath requires a NAME and a PATH");
        };

        println!("Applying: [{name}] [{path}]");

        let overlay = image::open(path)
            .with_context(|| format!("open component image '{path}'"))?
            .to_rgba8();
        layout.apply_component(name, &overlay)?;
    }

    println!("Writing.");

    if let Some(parent) = cli.output_filepath.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    template
        .save(&cli.output_filepath)
        .with_context(|| format!("write output image '{}'", cli.output_filepath.display()))?;

    Ok(())
}
