use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::DVector;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use frontier::driver::{DualBensonDriver, Frontier};
use frontier::geom::Cfg;
use frontier::scalarize::{PointSetOracle, ReciprocalOracle, Variant};

#[derive(Parser)]
#[command(name = "frontier")]
#[command(about = "Pareto frontier runner for scalarization oracles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantKind {
    /// Enumerate in weight space under the dual envelope
    WeightSpace,
    /// Enumerate an outer approximation of the upper image
    UpperImage,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a discrete instance: points read from a JSON array of arrays
    Solve {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum, default_value_t = VariantKind::WeightSpace)]
        variant: VariantKind,
        #[arg(long, default_value_t = 1e-6)]
        epsilon: f64,
        #[arg(long)]
        max_iterations: Option<usize>,
        /// Required for the upper-image variant; must exceed every coordinate
        #[arg(long)]
        total_bound: Option<f64>,
        /// Frontier JSON destination; stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
    /// Trace the smooth demo curve 1/y0 + 1/y1 = 1
    Curve {
        #[arg(long, default_value_t = 1e-3)]
        epsilon: f64,
        #[arg(long, default_value_t = 2000)]
        max_iterations: usize,
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            variant,
            epsilon,
            max_iterations,
            total_bound,
            out,
        } => solve(input, variant, epsilon, max_iterations, total_bound, out),
        Action::Curve {
            epsilon,
            max_iterations,
            out,
        } => curve(epsilon, max_iterations, out),
    }
}

fn solve(
    input: String,
    variant: VariantKind,
    epsilon: f64,
    max_iterations: Option<usize>,
    total_bound: Option<f64>,
    out: Option<String>,
) -> Result<()> {
    tracing::info!(input, ?variant, epsilon, "solve");
    let raw = std::fs::read_to_string(&input).with_context(|| format!("reading {input}"))?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&raw).context("points must be [[f64,..],..]")?;
    let Some(first) = rows.first() else {
        bail!("input holds no points");
    };
    let dim = first.len();
    if dim < 2 {
        bail!("points need at least two objectives, got {dim}");
    }
    if rows.iter().any(|r| r.len() != dim) {
        bail!("points have inconsistent dimensions");
    }
    let points: Vec<DVector<f64>> = rows
        .iter()
        .map(|r| DVector::from_column_slice(r))
        .collect();

    // Componentwise minimum over the instance.
    let ideal = DVector::from_fn(dim, |i, _| {
        rows.iter().fold(f64::INFINITY, |a, r| a.min(r[i]))
    });
    let variant = match variant {
        VariantKind::WeightSpace => Variant::WeightSpace { ideal },
        VariantKind::UpperImage => {
            let Some(total_bound) = total_bound else {
                bail!("--total-bound is required for the upper-image variant");
            };
            if rows.iter().flatten().any(|&c| c >= total_bound) {
                bail!("--total-bound must exceed every point coordinate");
            }
            Variant::UpperImage { ideal, total_bound }
        }
    };

    let mut cfg = Cfg::new(dim).with_epsilon(epsilon);
    if let Some(limit) = max_iterations {
        cfg = cfg.with_max_iterations(limit);
    }
    let oracle = PointSetOracle::new(points, epsilon);
    let frontier = DualBensonDriver::new(cfg, variant, &oracle)
        .solve()
        .context("solving the instance")?;
    emit(&frontier, out)
}

fn curve(epsilon: f64, max_iterations: usize, out: Option<String>) -> Result<()> {
    tracing::info!(epsilon, max_iterations, "curve");
    let cfg = Cfg::new(2)
        .with_epsilon(epsilon)
        .with_max_iterations(max_iterations);
    let oracle = ReciprocalOracle::default();
    let variant = Variant::WeightSpace {
        ideal: DVector::from_column_slice(&[1.0, 1.0]),
    };
    let frontier = DualBensonDriver::new(cfg, variant, &oracle)
        .solve()
        .context("tracing the curve")?;
    emit(&frontier, out)
}

fn emit(frontier: &Frontier, out: Option<String>) -> Result<()> {
    tracing::info!(
        entries = frontier.entries.len(),
        iterations = frontier.stats.iterations,
        cuts = frontier.stats.cuts,
        "converged"
    );
    let json = serde_json::to_string_pretty(frontier)?;
    match out {
        Some(out) => {
            let out_path = Path::new(&out);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out_path, json).with_context(|| format!("writing {out}"))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}
