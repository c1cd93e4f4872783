use crate::{
    config::{ExtractConfig, SlotsConfig},
    Result,
};
use anyhow::Context;
use clap::Parser;
use dioxus_slots::Slots;
use dioxus_slots_html::HtmlNode;
use std::{
    io::Read,
    path::{Path, PathBuf},
};

/// Partition the children of an element by their `data-slot` attribute
#[derive(Clone, Debug, Default, Parser)]
pub(crate) struct Partition {
    /// Input file
    #[clap(short, long)]
    pub(crate) file: Option<String>,

    /// Raw HTML to partition instead of a file
    #[clap(short, long)]
    pub(crate) raw: Option<String>,

    /// Id of the element whose children are partitioned. Defaults to the top level of the input
    #[clap(long)]
    pub(crate) root: Option<String>,

    /// Output file, stdout if not present
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[clap(long)]
    pub(crate) pretty: bool,

    /// Print one line per slot instead of JSON
    #[clap(long)]
    pub(crate) summary: bool,

    /// Also write each slot's markup to `<DIR>/<slot>.<extension>`, wrapped by the `[extract]` templates
    #[clap(long, value_name = "DIR")]
    pub(crate) out_dir: Option<PathBuf>,

    /// Config file [default: Slots.toml if present]
    #[clap(long)]
    pub(crate) config: Option<PathBuf>,
}

impl Partition {
    pub(crate) fn partition(self) -> Result<String> {
        let config = SlotsConfig::load(self.config.as_deref())?;

        // Get the right input for the partition
        let contents = determine_input(self.file, self.raw)?;

        let dom = dioxus_slots_html::parse(&contents)?;
        let root = self.root.or(config.root);
        let slots = dioxus_slots_html::partition_root(&dom, root.as_deref())?;

        tracing::info!(
            slots = slots.slots.len(),
            orphans = slots.orphans().len(),
            "partitioned {}",
            root.as_deref().map_or("document".to_string(), |id| format!("#{id}"))
        );

        let report = match self.summary || config.report.summary {
            true => write_summary(&slots),
            false => write_json(&slots, self.pretty || config.report.pretty)?,
        };

        if let Some(dir) = &self.out_dir {
            let written = write_extracts(&slots, dir, &config.extract)?;
            tracing::info!("extracted {} slots into {}", written.len(), dir.display());
        }

        match self.output {
            Some(output) => write_output(&output, &report)?,
            None => print!("{report}"),
        }

        Ok(report)
    }
}

/// Slot name that is partitioned like any other but never extracted
pub(crate) const DISCARD_SLOT: &str = "not";

/// Write every slot's nodes to its own file in `dir`, returning the paths in slot order
pub(crate) fn write_extracts(
    slots: &Slots<HtmlNode>,
    dir: &Path,
    extract: &ExtractConfig,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::new();
    for (name, nodes) in slots.slots.iter() {
        if name == DISCARD_SLOT {
            tracing::debug!(slot = name, "skipping discarded slot");
            continue;
        }

        // the name becomes a file name, so it can't be allowed to walk out of `dir`
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            tracing::warn!(slot = name, "slot name is not a usable file name, skipping");
            continue;
        }

        let body = nodes
            .iter()
            .map(HtmlNode::to_html)
            .collect::<Vec<_>>()
            .join("\n");

        let path = dir.join(format!("{name}.{}", extract.extension));
        std::fs::write(&path, extract.wrap(name, &body))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), nodes = nodes.len(), "wrote slot");

        written.push(path);
    }

    Ok(written)
}

pub(crate) fn write_json(slots: &Slots<HtmlNode>, pretty: bool) -> Result<String> {
    let mut json = match pretty {
        true => serde_json::to_string_pretty(slots)?,
        false => serde_json::to_string(slots)?,
    };
    json.push('\n');
    Ok(json)
}

pub(crate) fn write_summary(slots: &Slots<HtmlNode>) -> String {
    let mut out = String::new();

    for (name, nodes) in slots.slots.iter() {
        write_line(&mut out, name, nodes);
    }

    if !slots.orphans().is_empty() {
        write_line(&mut out, "(orphans)", slots.orphans());
    }

    out
}

fn write_line(out: &mut String, label: &str, nodes: &[HtmlNode]) {
    let nodes = nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(label);
    out.push_str(": ");
    out.push_str(&nodes);
    out.push('\n');
}

fn write_output(path: &Path, report: &str) -> Result<()> {
    std::fs::write(path, report)?;
    tracing::debug!(path = %path.display(), "wrote report");
    Ok(())
}

fn determine_input(file: Option<String>, raw: Option<String>) -> Result<String> {
    use std::io::IsTerminal as _;

    // Make sure not both are specified
    if file.is_some() && raw.is_some() {
        return Err("Only one of --file or --raw should be specified.".into());
    }

    if let Some(raw) = raw {
        return Ok(raw);
    }

    if let Some(file) = file {
        let contents =
            std::fs::read_to_string(&file).with_context(|| format!("Failed to read {file}"))?;
        return Ok(contents);
    }

    // If neither exist, we try to read from stdin
    if std::io::stdin().is_terminal() {
        return Err("No input file, source, or stdin to partition.".into());
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer.trim().to_string())
}
