use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _};
use clap::Args;
use clap::{Parser, Subcommand};
use rayon::prelude::*;

use crate::config::{
    PlaygroundConfig, ASSET_CACHE_URL, FRAMEWORK_CSS_URL, FRAMEWORK_JS_URL, SANDBOX_MODULE_NAME,
};
use crate::debug_print::debug_print_result;
use crate::demo::{Demo, TranslationResult};
use crate::translate::translate_with;

/// Settings of the playground the payload is submitted to.
#[derive(Args, Clone, Debug)]
struct PlaygroundArgs {
    /// Additional script the demo depends on, loaded before the framework.
    /// May be repeated; order is preserved.
    #[arg(long = "external-js", value_name = "URL")]
    pub external_js: Vec<String>,
    /// Module name the playground bootstraps.
    #[arg(long, default_value = SANDBOX_MODULE_NAME)]
    pub module_name: String,
    /// Hosted framework stylesheet.
    #[arg(long, default_value = FRAMEWORK_CSS_URL)]
    pub framework_css: String,
    /// Hosted framework script.
    #[arg(long, default_value = FRAMEWORK_JS_URL)]
    pub framework_js: String,
    /// Script serving embedded svg assets.
    #[arg(long, default_value = ASSET_CACHE_URL)]
    pub asset_cache: String,
}

impl PlaygroundArgs {
    fn config(&self) -> PlaygroundConfig {
        PlaygroundConfig {
            module_name: self.module_name.clone(),
            framework_css_url: self.framework_css.clone(),
            framework_js_url: self.framework_js.clone(),
            asset_cache_url: self.asset_cache.clone(),
        }
    }

    fn translate_file(&self, path: &Path) -> Result<TranslationResult, anyhow::Error> {
        let demo = read_demo(path)?;
        translate_with(&self.config(), &demo, &self.external_js)
            .with_context(|| format!("could not translate demo {}", path.display()))
    }
}

#[derive(Args)]
struct TranslateArgs {
    /// Path to .json demo record.
    pub demo: PathBuf,
    /// Path to output file. If a directory, use the file name of the demo.
    /// Prints to stdout if omitted.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub playground: PlaygroundArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a demo record to a playground payload.
    Translate(TranslateArgs),
    /// Translate every .json demo record under a directory.
    Batch {
        /// Directory to search for demo records.
        input: PathBuf,
        /// Output directory, mirroring the layout of the input directory.
        #[arg(short = 'o', long)]
        output: PathBuf,
        #[command(flatten)]
        playground: PlaygroundArgs,
    },
    /// Print a translated payload field by field.
    Debug {
        /// Path to .json demo record.
        demo: PathBuf,
        #[command(flatten)]
        playground: PlaygroundArgs,
    },
}

fn read_demo(path: &Path) -> Result<Demo, anyhow::Error> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("could not read demo file {}", path.display()))?;
    serde_json::from_str(&src)
        .with_context(|| format!("could not parse demo record {}", path.display()))
}

fn write_result(result: &TranslationResult, output: &Path) -> Result<(), anyhow::Error> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(output, json + "\n")
        .with_context(|| format!("could not create output file {}", output.display()))
}

fn demo_files(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in walkdir::WalkDir::new(input) {
        let entry =
            entry.with_context(|| format!("could not list demos under {}", input.display()))?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "json")
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn translate_dir(input: &Path, output: &Path, args: &PlaygroundArgs) -> anyhow::Result<()> {
    if !input.is_dir() {
        return Err(anyhow!("input {} is not a directory", input.display()));
    }
    let files = demo_files(input)?;
    tracing::info!(count = files.len(), input = %input.display(), "translating demos");
    files.par_iter().try_for_each(|src_path| {
        let dst_path = output.join(src_path.strip_prefix(input)?);
        if let Some(dir) = dst_path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("could not create directory {}", dir.display()))?;
        }
        let result = args.translate_file(src_path)?;
        write_result(&result, &dst_path)
    })
}

impl TranslateArgs {
    /// Where to write the payload, or `None` for stdout.
    fn output_path(&self) -> anyhow::Result<Option<PathBuf>> {
        let Some(output) = &self.output else {
            return Ok(None);
        };
        if !output.is_dir() {
            return Ok(Some(output.clone()));
        }
        let name = self.demo.file_name().ok_or_else(|| {
            anyhow!(
                "demo path {} has no file name to use in output directory {}",
                self.demo.display(),
                output.display()
            )
        })?;
        Ok(Some(output.join(name)))
    }
}

/// Translate component demos into code-playground submissions.
#[derive(Parser)]
#[command(version, about)]
pub struct App {
    #[command(subcommand)]
    cmd: Command,
}

impl App {
    pub fn exec(&self) -> Result<(), anyhow::Error> {
        match &self.cmd {
            Command::Translate(args) => {
                let output = args.output_path()?;
                let result = args.playground.translate_file(&args.demo)?;
                match output {
                    Some(output) => write_result(&result, &output)?,
                    None => println!("{}", serde_json::to_string_pretty(&result)?),
                }
            }
            Command::Batch {
                input,
                output,
                playground,
            } => translate_dir(input, output, playground)?,
            Command::Debug { demo, playground } => {
                let result = playground.translate_file(demo)?;
                debug_print_result(&result);
            }
        }
        Ok(())
    }

    /// Run the app with `cmd` as the subcommand and `args` as the remaining
    /// arguments.
    pub fn run(cmd: &str, args: &[&str]) -> Result<(), anyhow::Error> {
        let owned_args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        App::try_parse_from(
            ["codepen-adapter".to_string(), cmd.to_string()]
                .iter()
                .chain(owned_args.iter()),
        )?
        .exec()
    }
}
