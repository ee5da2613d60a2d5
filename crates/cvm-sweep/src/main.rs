use anyhow::Context;
use cvm_core::{Coefficients, Sweep, SweepConfig};
use cvm_prometheus_bridge::SweepMetrics;
use cvm_report::{banner, entropy_table, figures, generate_run_manifest, ising_table, render_svg};
use prometheus::{Encoder, Registry, TextEncoder};
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;


/// `h` of the no-interaction equilibrium reference printed after the
/// canonical tables.
const REFERENCE_H: f64 = 1.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let sweep = Sweep::evaluate(&SweepConfig::default()).context("cvm sweep failed")?;
    let reference = equilibrium_reference(REFERENCE_H)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&sweep, &reference, &mut out)?;
    out.flush()?;
    Ok(())
}

fn equilibrium_reference(h: f64) -> anyhow::Result<Sweep> {
    let coefficients = Coefficients::equilibrium(h).context("equilibrium coefficients")?;
    Sweep::evaluate(&SweepConfig::default().with_coefficients(coefficients))
        .context("equilibrium reference sweep failed")
}

/// Tables, figure legends, the equilibrium reference and the Prometheus
/// exposition text go to `out`. SVG documents and the run manifest are
/// emitted at debug level (`RUST_LOG=debug`).
fn write_report(sweep: &Sweep, reference: &Sweep, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", banner())?;
    writeln!(out, "{}", entropy_table(sweep))?;
    writeln!(out, "{}", ising_table(sweep))?;

    for figure in figures() {
        let svg = render_svg(sweep, &figure)?;
        info!(figure = figure.id, bytes = svg.len(), "figure ready");
        debug!(figure = figure.id, svg = %svg, "figure document");
        writeln!(out)?;
        writeln!(out, " Figure {}: {}", figure.id, figure.title)?;
        writeln!(out, "{}", figure.legend(sweep))?;
    }

    let c = reference.coefficients();
    writeln!(out)?;
    writeln!(
        out,
        " Equilibrium reference (h = {REFERENCE_H:.2}): eps0 = {:.2}, eps1 = {:.2}",
        c.eps0, c.eps1
    )?;
    writeln!(out, "{}", ising_table(reference))?;

    let manifest = generate_run_manifest(sweep)?;
    debug!(manifest = %manifest.to_json_pretty()?, "run manifest");

    let registry = Registry::new();
    let metrics = SweepMetrics::new(&registry).context("registering sweep metrics")?;
    metrics.observe_sweep(sweep);
    let mut encoded = Vec::new();
    TextEncoder::new()
        .encode(&registry.gather(), &mut encoded)
        .context("encoding sweep metrics")?;
    writeln!(out)?;
    out.write_all(&encoded)?;
    Ok(())
}
