//! Chart data for absorption results
//!
//! Builds everything a four-panel absorption chart needs: the mechanism
//! breakdown, two parameter sweeps with the queried point highlighted, and a
//! text summary. Drawing is left to the consumer (see `demo-headless`).

use crate::core_types::config::AeroponicConfig;
use crate::core_types::units::{Micrometers, PartsPerMillion};
use crate::model::{AbsorptionError, AbsorptionResult};
use crate::sweep::{sweep_droplet_size, sweep_nutrient_concentration, DEFAULT_SWEEP_POINTS};
use serde::Serialize;

/// A labelled bar of the mechanism breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
}

/// A swept curve with its highlighted query point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// (x, y) samples in sweep order
    pub points: Vec<(f64, f64)>,
    /// The queried input and its output
    pub highlight: (f64, f64),
}

/// Data behind the four chart panels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsorptionFigure {
    /// Interception, impaction and sedimentation efficiencies
    pub components: Vec<Bar>,
    /// Y-axis range of the component bars
    pub components_range: (f64, f64),
    /// Efficiency against droplet size at the queried concentration
    pub efficiency_curve: Curve,
    /// Absorption rate against concentration at the queried droplet size
    pub rate_curve: Curve,
    /// Summary panel text
    pub summary: String,
}

impl AbsorptionFigure {
    /// Assemble chart data around one computed result
    ///
    /// Both sweeps run with the chamber at [`AeroponicConfig::default`] and
    /// vary only the swept input. The highlights and bars come from `result`,
    /// so a non-default chamber shows up as a point off the curve.
    ///
    /// # Errors
    /// Returns [`AbsorptionError::InvalidDropletSize`] if `droplet_size` is out
    /// of range, which cannot happen when `result` came from the same inputs.
    pub fn build(
        droplet_size: Micrometers,
        nutrient_concentration: PartsPerMillion,
        result: &AbsorptionResult,
    ) -> Result<Self, AbsorptionError> {
        let defaults = AeroponicConfig::default();
        let params = &result.parameters;
        let components = vec![
            Bar {
                label: "Interception",
                value: params.interception_efficiency,
            },
            Bar {
                label: "Impaction",
                value: params.impaction_efficiency,
            },
            Bar {
                label: "Sedimentation",
                value: params.sedimentation_efficiency,
            },
        ];

        let size_sweep =
            sweep_droplet_size(nutrient_concentration, &defaults, DEFAULT_SWEEP_POINTS)?;
        let efficiency_curve = Curve {
            title: "Droplet Size vs. Absorption Efficiency",
            x_label: "Droplet Size (μm)",
            y_label: "Absorption Efficiency",
            points: size_sweep
                .iter()
                .map(|p| (p.input, p.result.efficiency))
                .collect(),
            highlight: (*droplet_size, result.efficiency),
        };

        let concentration_sweep =
            sweep_nutrient_concentration(droplet_size, &defaults, DEFAULT_SWEEP_POINTS)?;
        let rate_curve = Curve {
            title: "Nutrient Concentration vs. Absorption Rate",
            x_label: "Nutrient Concentration (ppm)",
            y_label: "Absorption Rate (ml/min)",
            points: concentration_sweep
                .iter()
                .map(|p| (p.input, p.result.absorption_rate))
                .collect(),
            highlight: (*nutrient_concentration, result.absorption_rate),
        };

        Ok(AbsorptionFigure {
            components,
            components_range: (0.0, 1.0),
            efficiency_curve,
            rate_curve,
            summary: summary_text(droplet_size, nutrient_concentration, result),
        })
    }
}

/// Summary panel text with every output rounded to four decimals
pub fn summary_text(
    droplet_size: Micrometers,
    nutrient_concentration: PartsPerMillion,
    result: &AbsorptionResult,
) -> String {
    format!(
        "Absorption Summary:\n\n\
         Droplet Size: {droplet_size}\n\
         Nutrient Concentration: {nutrient_concentration}\n\n\
         Absorption Rate: {:.4} ml/min\n\
         Efficiency: {:.4}\n\
         Nutrients Absorbed: {:.4} mg/min\n\n\
         Stokes Number: {:.4}\n\
         Reynolds Number: {:.4}\n",
        result.absorption_rate,
        result.efficiency,
        result.total_nutrients_absorbed,
        result.parameters.stokes_number,
        result.parameters.reynolds_number,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::MetersPerSecond;
    use crate::model::compute;

    fn figure(size: f64, concentration: f64) -> AbsorptionFigure {
        let config = AeroponicConfig::default();
        let droplet_size = Micrometers::new(size);
        let nutrient_concentration = PartsPerMillion::new(concentration);
        let result = compute(droplet_size, nutrient_concentration, &config).unwrap();
        AbsorptionFigure::build(droplet_size, nutrient_concentration, &result).unwrap()
    }

    #[test]
    fn test_components_follow_parameters() {
        let fig = figure(35.0, 500.0);
        let labels: Vec<_> = fig.components.iter().map(|b| b.label).collect();
        assert_eq!(labels, ["Interception", "Impaction", "Sedimentation"]);
        assert_eq!(fig.components_range, (0.0, 1.0));
    }

    #[test]
    fn test_curves_cover_sweep_ranges() {
        let fig = figure(35.0, 500.0);
        assert_eq!(fig.efficiency_curve.points.len(), DEFAULT_SWEEP_POINTS);
        assert_eq!(fig.efficiency_curve.points[0].0, 20.0);
        assert_eq!(fig.efficiency_curve.points[99].0, 50.0);
        assert_eq!(fig.rate_curve.points[0].0, 100.0);
        assert_eq!(fig.rate_curve.points[99].0, 2000.0);
        assert_eq!(fig.efficiency_curve.highlight.0, 35.0);
        assert_eq!(fig.rate_curve.highlight.0, 500.0);
    }

    #[test]
    fn test_highlight_uses_chamber_config() {
        let config =
            AeroponicConfig::default().with_airflow_velocity(MetersPerSecond::new(0.3));
        let droplet_size = Micrometers::new(35.0);
        let nutrient_concentration = PartsPerMillion::new(500.0);
        let result = compute(droplet_size, nutrient_concentration, &config).unwrap();
        let fig = AbsorptionFigure::build(droplet_size, nutrient_concentration, &result).unwrap();

        let default_fig = figure(35.0, 500.0);
        assert_eq!(fig.efficiency_curve.points, default_fig.efficiency_curve.points);
        assert_eq!(fig.efficiency_curve.highlight, (35.0, result.efficiency));
        assert_ne!(fig.efficiency_curve.highlight, default_fig.efficiency_curve.highlight);
    }

    #[test]
    fn test_summary_format() {
        let fig = figure(35.0, 500.0);
        let expected = "Absorption Summary:\n\n\
                        Droplet Size: 35 μm\n\
                        Nutrient Concentration: 500 ppm\n\n\
                        Absorption Rate: 1.1178 ml/min\n\
                        Efficiency: 1.0567\n\
                        Nutrients Absorbed: 0.5589 mg/min\n\n\
                        Stokes Number: 0.7441\n\
                        Reynolds Number: 2733.4078\n";
        assert_eq!(fig.summary, expected);
    }
}
