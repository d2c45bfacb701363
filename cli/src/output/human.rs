//! Human-readable terminal renderer.

use deployctl_common::StackInfo;
use owo_colors::OwoColorize as _;

use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.info(&format!("deployctl v{version}"));
    }

    /// Render the stack report.
    ///
    /// The report is the command's payload, so it is printed even in quiet mode.
    pub fn render_info(&self, info: &StackInfo) {
        for line in info_lines(info) {
            match line {
                Line::Header(title) => println!("{}", title.style(self.ctx.styles.header)),
                Line::Field(key, value) => {
                    println!("{} {value}", key.style(self.ctx.styles.bold));
                }
                Line::Item(value) => println!("  {value}"),
            }
        }
    }

    /// Render the deployment bucket name.
    pub fn render_bucket(&self, bucket: &str) {
        println!("{bucket}");
    }
}

/// One line of the human stack report.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line {
    Header(String),
    Field(String, String),
    Item(String),
}

/// Lay out the stack report. Empty sections print `none`.
pub(crate) fn info_lines(info: &StackInfo) -> Vec<Line> {
    let gathered = &info.info;
    let mut lines = vec![
        Line::Field("service:".into(), gathered.service.clone()),
        Line::Field("stage:".into(), gathered.stage.clone()),
        Line::Field("region:".into(), gathered.region.clone()),
        Line::Field("stack:".into(), gathered.stack.clone()),
    ];

    lines.push(Line::Header("endpoints:".into()));
    push_items(&mut lines, gathered.endpoints.iter().cloned());

    lines.push(Line::Header("functions:".into()));
    push_items(
        &mut lines,
        gathered
            .functions
            .iter()
            .map(|f| format!("{}: {}", f.name, f.deployed_name)),
    );

    lines.push(Line::Header("layers:".into()));
    push_items(
        &mut lines,
        gathered.layers.iter().map(|l| format!("{}: {}", l.name, l.arn)),
    );

    if let Some(domain) = &gathered.cloud_front {
        lines.push(Line::Field("cloudFront:".into(), domain.clone()));
    }
    lines
}

fn push_items(lines: &mut Vec<Line>, items: impl Iterator<Item = String>) {
    let start = lines.len();
    lines.extend(items.map(Line::Item));
    if lines.len() == start {
        lines.push(Line::Item("none".into()));
    }
}
