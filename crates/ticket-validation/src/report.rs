//! The full validation sequence and its report.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ValidationError;
use crate::stats::{
    bootstrap_mean_difference, describe, effect_size, kurtosis, leave_one_out, levene,
    mann_whitney_u, shapiro_wilk, skewness, welch_t_test, Bootstrap, Description, EffectSize,
    LeaveOneOut, Levene, MannWhitney, ShapiroWilk, WelchTTest,
};

/// File name of the JSON report inside the output directory.
pub const REPORT_FILE: &str = "validation_report.json";

/// Absolute skewness below this is treated as acceptable.
pub const SKEWNESS_LIMIT: f64 = 1.0;
/// Absolute excess kurtosis below this is treated as acceptable.
pub const KURTOSIS_LIMIT: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    pub alpha: f64,
    pub resamples: usize,
    pub bootstrap_seed: u64,
    /// Number of classrooms each group is expected to contain.
    pub expected_units: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            resamples: 10_000,
            bootstrap_seed: 42,
            expected_units: None,
        }
    }
}

/// Checks that the sample sizes count classrooms rather than tickets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitOfAnalysis {
    pub control_units: usize,
    pub treatment_units: usize,
    pub control_tickets: f64,
    pub treatment_tickets: f64,
    pub expected_units: Option<usize>,
    /// `None` when no expectation was configured.
    pub matches_expected: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupShape {
    pub shapiro_wilk: ShapiroWilk,
    pub skewness: f64,
    pub kurtosis: f64,
}

impl GroupShape {
    fn of(sample: &[f64]) -> Result<Self, ValidationError> {
        Ok(Self {
            shapiro_wilk: shapiro_wilk(sample)?,
            skewness: skewness(sample)?,
            kurtosis: kurtosis(sample)?,
        })
    }

    pub fn skewness_acceptable(&self) -> bool {
        self.skewness.abs() < SKEWNESS_LIMIT
    }

    pub fn kurtosis_acceptable(&self) -> bool {
        self.kurtosis.abs() < KURTOSIS_LIMIT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    /// Significant under every leave-one-out deletion.
    FullyValid,
    ConditionallyValid,
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conclusion::FullyValid => write!(f, "fully valid"),
            Conclusion::ConditionallyValid => write!(f, "conditionally valid"),
        }
    }
}

/// Everything computed by [`validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub alpha: f64,
    pub unit_of_analysis: UnitOfAnalysis,
    pub control: Description,
    pub treatment: Description,
    pub control_shape: GroupShape,
    pub treatment_shape: GroupShape,
    pub levene: Levene,
    pub effect_size: EffectSize,
    pub mann_whitney: MannWhitney,
    pub welch: WelchTTest,
    pub bootstrap: Bootstrap,
    pub leave_one_out: LeaveOneOut,
    pub conclusion: Conclusion,
}

/// Run the full validation sequence over control `a` and treatment `b`.
pub fn validate(
    a: &[f64],
    b: &[f64],
    config: &ValidationConfig,
) -> Result<ValidationReport, ValidationError> {
    info!(
        "Validating {} control and {} treatment classrooms (alpha = {})",
        a.len(),
        b.len(),
        config.alpha
    );

    let control = describe(a)?;
    let treatment = describe(b)?;
    let unit_of_analysis = UnitOfAnalysis {
        control_units: control.n,
        treatment_units: treatment.n,
        control_tickets: control.sum,
        treatment_tickets: treatment.sum,
        expected_units: config.expected_units,
        matches_expected: config
            .expected_units
            .map(|expected| control.n == expected && treatment.n == expected),
    };

    let control_shape = GroupShape::of(a)?;
    let treatment_shape = GroupShape::of(b)?;
    debug!(
        "Shapiro-Wilk: control p = {:.4}, treatment p = {:.4}",
        control_shape.shapiro_wilk.p_value, treatment_shape.shapiro_wilk.p_value
    );

    let levene = levene(a, b)?;
    let effect_size = effect_size(a, b)?;
    let mann_whitney = mann_whitney_u(a, b)?;
    let welch = welch_t_test(a, b)?;
    debug!(
        "Levene p = {:.4}, Mann-Whitney p = {:.4}, Welch p = {:.4}",
        levene.p_value, mann_whitney.p_value, welch.p_value
    );

    let bootstrap =
        bootstrap_mean_difference(a, b, config.resamples, config.bootstrap_seed)?;
    let leave_one_out = leave_one_out(a, b, config.alpha)?;

    let conclusion = if leave_one_out.all_significant {
        Conclusion::FullyValid
    } else {
        Conclusion::ConditionallyValid
    };
    info!("Validation complete: study is {}", conclusion);

    Ok(ValidationReport {
        alpha: config.alpha,
        unit_of_analysis,
        control,
        treatment,
        control_shape,
        treatment_shape,
        levene,
        effect_size,
        mann_whitney,
        welch,
        bootstrap,
        leave_one_out,
        conclusion,
    })
}

impl ValidationReport {
    /// Write the report as pretty JSON into `output_dir`, creating it if needed.
    pub fn write_json<P: AsRef<Path>>(&self, output_dir: P) -> Result<PathBuf, ValidationError> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;
        let path = output_dir.join(REPORT_FILE);

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!("Validation report written to '{}'", path.display());
        Ok(path)
    }

    pub fn mann_whitney_significant(&self) -> bool {
        self.mann_whitney.p_value < self.alpha
    }
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "yes"
    } else {
        "no"
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = &self.unit_of_analysis;
        writeln!(f, "A/B test validation")?;
        writeln!(f)?;
        writeln!(
            f,
            "Unit of analysis: {} control classrooms ({:.0} tickets), {} treatment classrooms ({:.0} tickets)",
            units.control_units, units.control_tickets, units.treatment_units, units.treatment_tickets
        )?;
        if let (Some(expected), Some(matches)) = (units.expected_units, units.matches_expected) {
            writeln!(f, "  expected {expected} per group: {}", verdict(matches))?;
        }

        for (name, description, shape) in [
            ("Control (A)", &self.control, &self.control_shape),
            ("Treatment (B)", &self.treatment, &self.treatment_shape),
        ] {
            writeln!(
                f,
                "{name}: mean {:.3} ± {:.3}, median {:.2}",
                description.mean, description.std, description.median
            )?;
            writeln!(
                f,
                "  Shapiro-Wilk W = {:.4}, p = {:.4} (normal: {})",
                shape.shapiro_wilk.w,
                shape.shapiro_wilk.p_value,
                verdict(shape.shapiro_wilk.is_normal(self.alpha))
            )?;
            writeln!(
                f,
                "  skewness {:.4} (|s| < 1: {}), kurtosis {:.4} (|k| < 2: {})",
                shape.skewness,
                verdict(shape.skewness_acceptable()),
                shape.kurtosis,
                verdict(shape.kurtosis_acceptable())
            )?;
        }

        writeln!(
            f,
            "Levene F = {:.4}, p = {:.4} (equal variances: {})",
            self.levene.statistic,
            self.levene.p_value,
            verdict(self.levene.equal_variances(self.alpha))
        )?;
        writeln!(
            f,
            "Effect size: |d| = {:.3} ({}), Hedges g = {:.3}, change {:.1}%",
            self.effect_size.cohens_d.abs(),
            self.effect_size.interpretation,
            self.effect_size.hedges_g,
            self.effect_size.relative_change_percent
        )?;
        writeln!(
            f,
            "Mann-Whitney U = {:.1}, p = {:.4} (significant: {})",
            self.mann_whitney.u_statistic,
            self.mann_whitney.p_value,
            verdict(self.mann_whitney_significant())
        )?;
        writeln!(
            f,
            "Welch t = {:.3}, df = {:.2}, p = {:.4}",
            self.welch.t_statistic, self.welch.degrees_of_freedom, self.welch.p_value
        )?;
        writeln!(
            f,
            "Bootstrap 95% CI: [{:.3}, {:.3}] over {} resamples (excludes zero: {})",
            self.bootstrap.ci_lower,
            self.bootstrap.ci_upper,
            self.bootstrap.resamples,
            verdict(self.bootstrap.excludes_zero())
        )?;
        writeln!(
            f,
            "Leave-one-out p: min {:.4}, max {:.4} (all below {}: {})",
            self.leave_one_out.min_p,
            self.leave_one_out.max_p,
            self.alpha,
            verdict(self.leave_one_out.all_significant)
        )?;
        writeln!(f)?;
        write!(f, "Conclusion: the study is {}", self.conclusion)
    }
}
