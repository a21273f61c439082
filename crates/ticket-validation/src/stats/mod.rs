//! Statistical tests over two independent samples.
//!
//! Every function takes the control sample `a` first and the treatment
//! sample `b` second. Effect sizes and bootstrap differences are reported as
//! `b - a`.

pub mod descriptive;
pub mod effect;
pub mod normality;
pub mod rank;
pub mod resampling;
pub mod special;
pub mod ttest;
pub mod variance;

pub use descriptive::{describe, kurtosis, median, quantile, skewness, Description};
pub use effect::{
    cohens_d, effect_size, hedges_g, relative_change, EffectSize, EffectSizeInterpretation,
};
pub use normality::{shapiro_wilk, ShapiroWilk};
pub use rank::{mann_whitney_u, MannWhitney, MannWhitneyMethod};
pub use resampling::{bootstrap_mean_difference, leave_one_out, Bootstrap, LeaveOneOut};
pub use ttest::{welch_t_test, WelchTTest};
pub use variance::{levene, Levene};
