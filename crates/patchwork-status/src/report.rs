use crate::scan::WorkflowSummary;
use patchwork_schema::FailureSignature;
use std::fmt::Write;
use std::path::Path;

const RULE_WIDTH: usize = 80;

pub struct ReportContext<'a> {
    pub title: &'a str,
    pub commit: &'a str,
    pub dir: &'a Path,
    pub actions_url: &'a str,
    pub workflows: &'a [WorkflowSummary],
    pub signatures: &'a [FailureSignature],
}

fn rule(out: &mut String) {
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
}

fn heading(out: &mut String, title: &str) {
    rule(out);
    out.push_str(title);
    rule(out);
}

/// Render the workflow report as plain text.
///
/// With no workflows the report stops after an `[ERROR]` line.
pub fn render_report(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();
    heading(&mut out, ctx.title);
    let _ = writeln!(out, "\nLatest Commit: {}", ctx.commit);

    if ctx.workflows.is_empty() {
        let _ = writeln!(
            out,
            "\n[ERROR] No workflow files found in {}",
            ctx.dir.display()
        );
        return out;
    }

    let _ = writeln!(out, "\nFound {} workflow(s):\n", ctx.workflows.len());
    for (i, wf) in ctx.workflows.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, wf.name);
        let _ = writeln!(out, "   File: {}", wf.file);
        let _ = writeln!(out, "   Path: {}", wf.path.display());
        out.push('\n');
    }

    heading(&mut out, "NEXT STEPS:");
    let _ = writeln!(out, "\n1. Go to {}", ctx.actions_url);
    out.push_str("2. Check the status of each workflow:\n");
    for wf in ctx.workflows {
        let _ = writeln!(out, "   - {}", wf.name);
    }
    out.push_str("\n3. Look for green checkmarks on all workflows\n");
    out.push_str("4. If any workflow fails, check the logs for errors\n");
    out.push_str("5. Download IPA artifacts from successful builds\n");

    if !ctx.signatures.is_empty() {
        heading(&mut out, "Common Issues to Watch For:");
        for sig in ctx.signatures {
            let _ = writeln!(out, "\n[ERROR] '{}'", sig.signature);
            let _ = writeln!(out, "   -> {}", sig.fix);
        }
    }
    rule(&mut out);
    out
}
